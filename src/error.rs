//! Error types for the spelltrie library.
//!
//! All fallible operations return [`SpellError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use spelltrie::error::{Result, SpellError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellError::invalid_config("max_distance must be 1 or 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for spelltrie operations.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors raised while reading an already opened source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dictionary source could not be opened or read at all.
    #[error("Dictionary source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },

    /// A word contains a character outside `a`-`z` after ASCII lowercasing.
    #[error("Invalid character {character:?} at position {position} in word {word:?}")]
    InvalidCharacter {
        /// The (lowercased) word that was rejected.
        word: String,
        /// The offending character.
        character: char,
        /// Character position of the offending character.
        position: usize,
    },

    /// The empty string cannot be stored as a word.
    #[error("Empty word cannot be inserted")]
    EmptyWord,

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new source-unavailable error.
    pub fn source_unavailable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid-character error.
    pub fn invalid_character<S: Into<String>>(word: S, character: char, position: usize) -> Self {
        SpellError::InvalidCharacter {
            word: word.into(),
            character,
            position,
        }
    }

    /// Create a new configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellError::Other(msg.into())
    }

    /// Whether this error was caused by input outside the supported alphabet.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SpellError::InvalidCharacter { .. } | SpellError::EmptyWord
        )
    }
}
