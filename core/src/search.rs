use crate::index::{DocPath, InvertedIndex};
use crate::sort::{MergeSort, Sorter};
use std::collections::HashSet;
use std::sync::Arc;

/// Answers single-term lookups against an index snapshot it never mutates.
/// The snapshot can be swapped out at any time with [`SearchEngine::set_index`].
#[derive(Debug, Default, Clone)]
pub struct SearchEngine<S = MergeSort> {
    index: Option<Arc<InvertedIndex>>,
    sorter: S,
}

impl SearchEngine<MergeSort> {
    pub fn new() -> Self { Self::default() }
}

impl<S: Sorter> SearchEngine<S> {
    pub fn with_sorter(sorter: S) -> Self {
        Self { index: None, sorter }
    }

    pub fn with_index(mut self, index: Arc<InvertedIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Replace the current snapshot wholesale, returning the previous one.
    pub fn set_index(&mut self, index: Arc<InvertedIndex>) -> Option<Arc<InvertedIndex>> {
        self.index.replace(index)
    }

    pub fn index(&self) -> Option<&Arc<InvertedIndex>> { self.index.as_ref() }

    pub fn has_index(&self) -> bool { self.index.is_some() }

    /// Sorted, deduplicated documents containing `term`, matched
    /// case-insensitively. Blank or unknown terms and a missing index all
    /// yield an empty list. The term is looked up as given, so surrounding
    /// whitespace never matches a token.
    pub fn search(&self, term: &str) -> Vec<DocPath> {
        if term.trim().is_empty() {
            return Vec::new();
        }
        let Some(index) = self.index.as_deref() else {
            return Vec::new();
        };
        let Some(paths) = index.get(&term.to_lowercase()) else {
            return Vec::new();
        };

        let mut seen = HashSet::with_capacity(paths.len());
        let unique: Vec<DocPath> = paths.iter().filter(|p| seen.insert(p.as_str())).cloned().collect();
        self.sorter.sort_by(unique, |a, b| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::cmp::Ordering;

    fn index() -> Arc<InvertedIndex> {
        let mut idx = InvertedIndex::new();
        idx.insert("test", "docs/file3.txt");
        idx.insert("test", "docs/file1.txt");
        idx.insert("another", "docs/file2.txt");
        Arc::new(idx)
    }

    #[test]
    fn returns_sorted_paths() {
        let engine = SearchEngine::new().with_index(index());
        assert_eq!(engine.search("test"), vec!["docs/file1.txt", "docs/file3.txt"]);
    }

    #[test]
    fn case_insensitive() {
        let engine = SearchEngine::new().with_index(index());
        assert_eq!(engine.search("TeSt"), engine.search("test"));
        assert_eq!(engine.search("ANOTHER"), vec!["docs/file2.txt"]);
    }

    #[test]
    fn blank_and_unknown_terms() {
        let engine = SearchEngine::new().with_index(index());
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
        assert!(engine.search("\t\n").is_empty());
        assert!(engine.search("nonexistentword").is_empty());
    }

    #[test]
    fn padded_term_is_not_trimmed() {
        let engine = SearchEngine::new().with_index(index());
        assert!(engine.search("  test\t").is_empty());
        assert!(engine.search(" test").is_empty());
        assert_eq!(engine.search("test").len(), 2);
    }

    #[test]
    fn no_index_is_safe() {
        let engine = SearchEngine::new();
        assert!(!engine.has_index());
        assert!(engine.search("test").is_empty());
    }

    #[test]
    fn swapping_index_replaces_results() {
        let mut engine = SearchEngine::new().with_index(index());
        let mut fresh = InvertedIndex::new();
        fresh.insert("test", "other/new.txt");
        let old = engine.set_index(Arc::new(fresh));
        assert!(old.is_some());
        assert_eq!(engine.search("test"), vec!["other/new.txt"]);
    }

    /// Records that it was used and sorts descending.
    struct Spy<'a>(&'a Cell<usize>);

    impl Sorter for Spy<'_> {
        fn sort_by<T, F>(&self, items: Vec<T>, mut cmp: F) -> Vec<T>
        where
            F: FnMut(&T, &T) -> Ordering,
        {
            self.0.set(self.0.get() + 1);
            let mut items = items;
            items.sort_by(|a, b| cmp(b, a));
            items
        }
    }

    #[test]
    fn sorter_is_injectable() {
        let calls = Cell::new(0);
        let engine = SearchEngine::with_sorter(Spy(&calls)).with_index(index());
        assert_eq!(engine.search("test"), vec!["docs/file3.txt", "docs/file1.txt"]);
        assert_eq!(calls.get(), 1);
    }
}
