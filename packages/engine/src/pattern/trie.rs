//! Segment prefix tree

use hashbrown::HashMap;

/// Delimiter between path segments
pub const SEGMENT_DELIMITER: char = '/';

/// Compiled prefix tree of path segments
///
/// Each node maps a segment name to the sub-trie for the segments that follow
/// it. Leaf-ness is the absence of children, never a separate flag, so
/// inserting `parts` and then `parts/color` leaves `parts` with one child and
/// it is no longer a leaf. An empty root trie means no projection was
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternTrie {
    children: HashMap<String, PatternTrie>,
}

impl PatternTrie {
    /// Create an empty trie
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile path strings into a trie
    ///
    /// Paths are split on [`SEGMENT_DELIMITER`] and inserted in order, merging
    /// shared prefixes. Nothing is rejected: an empty string or a doubled
    /// delimiter yields an empty segment name, which is inserted literally.
    pub fn compile<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for path in paths {
            trie.insert(path.as_ref());
        }
        log::trace!("compiled pattern trie with {} root branches", trie.len());
        trie
    }

    /// Insert one path, creating missing segments as empty sub-tries
    pub fn insert(&mut self, path: &str) {
        let mut node = self;
        for segment in path.split(SEGMENT_DELIMITER) {
            node = node.children.entry(segment.to_owned()).or_default();
        }
    }

    /// True when no paths were compiled into this node
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// True when reaching this node means "take the whole field"
    ///
    /// Same predicate as [`is_empty`](Self::is_empty); named for the role the
    /// node plays below the root.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct branches
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Sub-trie for a segment, if one was compiled
    #[inline]
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&PatternTrie> {
        self.children.get(segment)
    }

    /// Iterate over `(segment, sub-trie)` pairs in unspecified order
    pub fn branches(&self) -> impl Iterator<Item = (&String, &PatternTrie)> {
        self.children.iter()
    }

    /// Longest chain of segments from this node to a leaf
    #[must_use]
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PatternTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::compile(iter)
    }
}
