use std::collections::BTreeMap;

use crate::tavily::types::{SearchDigest, SourceRecord};

/// State retained between interactions: the three views of the most recent
/// successful search. Created empty at startup and replaced as a whole per
/// query; a failed query leaves the previous views in place.
#[derive(Debug, Default)]
pub struct Session {
    pub answer: String,
    pub sources: Vec<SourceRecord>,
    pub images: BTreeMap<String, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in all three views of a new search at once.
    pub fn replace(&mut self, digest: SearchDigest) {
        self.answer = digest.answer;
        self.sources = digest.sources;
        self.images = digest.images;
    }
}
