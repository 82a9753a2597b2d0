//! Prefix tree vertex.

/// Number of child slots per node, one for each lowercase Latin letter.
pub const ALPHABET_SIZE: usize = 26;

/// Map an ASCII byte to its child slot index.
///
/// Returns `None` for anything outside `a`-`z`.
#[inline]
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_lowercase() {
        Some((byte - b'a') as usize)
    } else {
        None
    }
}

/// Map a child slot index back to its letter.
#[inline]
pub fn index_letter(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// A single vertex of the prefix tree.
///
/// A node with a non-zero frequency marks the end of a stored word. Children
/// are owned exclusively by their parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixNode {
    frequency: u32,
    children: [Option<Box<PrefixNode>>; ALPHABET_SIZE],
}

impl PrefixNode {
    /// Create a new node with zero frequency and no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the number of times the word ending here was inserted.
    ///
    /// # Panics
    ///
    /// Panics if the counter overflows `u32`.
    pub fn increment_frequency(&mut self) {
        self.frequency = self
            .frequency
            .checked_add(1)
            .expect("word frequency overflowed u32");
    }

    /// Number of times the word ending here was inserted.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Whether a stored word terminates at this node.
    pub fn is_terminal(&self) -> bool {
        self.frequency > 0
    }

    /// All child slots, indexed by `letter - 'a'`.
    pub fn children(&self) -> &[Option<Box<PrefixNode>>; ALPHABET_SIZE] {
        &self.children
    }

    /// Mutable access to the child slots for structural mutation.
    pub fn children_mut(&mut self) -> &mut [Option<Box<PrefixNode>>; ALPHABET_SIZE] {
        &mut self.children
    }

    /// Child at the given slot, if present.
    pub fn child(&self, index: usize) -> Option<&PrefixNode> {
        self.children.get(index)?.as_deref()
    }

    /// Bitmask with bit `i` set when child slot `i` is populated.
    pub fn child_mask(&self) -> u32 {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.is_some())
            .fold(0, |mask, (i, _)| mask | (1u32 << i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_mapping() {
        assert_eq!(letter_index(b'a'), Some(0));
        assert_eq!(letter_index(b'z'), Some(25));
        assert_eq!(letter_index(b'A'), None);
        assert_eq!(letter_index(b'\''), None);
        assert_eq!(index_letter(0), 'a');
        assert_eq!(index_letter(25), 'z');
    }

    #[test]
    fn test_new_node_is_empty() {
        let node = PrefixNode::new();
        assert_eq!(node.frequency(), 0);
        assert!(!node.is_terminal());
        assert!(node.children().iter().all(Option::is_none));
        assert_eq!(node.child_mask(), 0);
    }

    #[test]
    fn test_increment_frequency() {
        let mut node = PrefixNode::new();
        node.increment_frequency();
        node.increment_frequency();
        assert_eq!(node.frequency(), 2);
        assert!(node.is_terminal());
    }

    #[test]
    fn test_child_access() {
        let mut node = PrefixNode::new();
        node.children_mut()[2] = Some(Box::new(PrefixNode::new()));

        assert!(node.child(2).is_some());
        assert!(node.child(3).is_none());
        assert!(node.child(ALPHABET_SIZE).is_none());
        assert_eq!(node.child_mask(), 0b100);
    }

    #[test]
    fn test_structural_equality() {
        let mut left = PrefixNode::new();
        let mut right = PrefixNode::new();
        assert_eq!(left, right);

        left.children_mut()[0] = Some(Box::new(PrefixNode::new()));
        assert_ne!(left, right);

        right.children_mut()[0] = Some(Box::new(PrefixNode::new()));
        assert_eq!(left, right);

        left.increment_frequency();
        assert_ne!(left, right);
    }
}
