use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub type Token = String;
pub type DocPath = String;

/// Token -> documents containing it. Each path appears at most once per token,
/// kept in the order it was first seen (not sorted).
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct InvertedIndex {
    postings: HashMap<Token, Vec<DocPath>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record that `path` contains `token`. Returns false when the pair was
    /// already present. Checks the whole posting list: paths may arrive in
    /// any order, not only one file at a time as a build feeds them.
    pub fn insert(&mut self, token: &str, path: &str) -> bool {
        match self.postings.get_mut(token) {
            Some(paths) => {
                if paths.iter().any(|p| p == path) {
                    return false;
                }
                paths.push(path.to_string());
            }
            None => {
                self.postings.insert(token.to_string(), vec![path.to_string()]);
            }
        }
        true
    }

    pub fn get(&self, token: &str) -> Option<&[DocPath]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    pub fn contains(&self, token: &str) -> bool { self.postings.contains_key(token) }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize { self.postings.len() }

    pub fn is_empty(&self) -> bool { self.postings.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocPath])> {
        self.postings.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    /// Number of distinct documents referenced by any token.
    pub fn document_count(&self) -> usize {
        self.postings.values().flatten().collect::<HashSet<_>>().len()
    }
}
