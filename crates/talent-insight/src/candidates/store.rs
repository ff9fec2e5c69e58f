use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::domain::{Candidate, CandidateId};

/// Storage abstraction so the router and adapters can be exercised in isolation.
///
/// Candidates are append-only: there is no update or delete.
pub trait CandidateStore: Send + Sync {
    /// Prepend a candidate so the newest entry lists first.
    fn add(&self, candidate: Candidate) -> Result<(), StoreError>;
    /// Prepend a batch as if each element were passed to `add` in turn, so the
    /// last element of the batch lists first.
    fn add_batch(&self, candidates: Vec<Candidate>) -> Result<(), StoreError>;
    fn replace_all(&self, candidates: Vec<Candidate>) -> Result<(), StoreError>;
    /// Snapshot of the current ordered sequence.
    fn list(&self) -> Result<Vec<Candidate>, StoreError>;

    fn get(&self, id: &CandidateId) -> Result<Option<Candidate>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|candidate| &candidate.id == id))
    }

    fn search(&self, term: &str) -> Result<Vec<Candidate>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|candidate| candidate.matches(term))
            .collect())
    }

    fn contains(&self, id: &CandidateId) -> Result<bool, StoreError> {
        Ok(self.list()?.iter().any(|candidate| &candidate.id == id))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("candidate store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryCandidateStore {
    candidates: Arc<RwLock<Vec<Candidate>>>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidates(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates: Arc::new(RwLock::new(candidates)),
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("candidate lock poisoned".to_string())
}

impl CandidateStore for InMemoryCandidateStore {
    fn add(&self, candidate: Candidate) -> Result<(), StoreError> {
        let mut guard = self.candidates.write().map_err(poisoned)?;
        debug!(id = %candidate.id, name = %candidate.name, "adding candidate");
        guard.insert(0, candidate);
        Ok(())
    }

    fn add_batch(&self, candidates: Vec<Candidate>) -> Result<(), StoreError> {
        let mut guard = self.candidates.write().map_err(poisoned)?;
        let added = candidates.len();
        guard.splice(0..0, candidates.into_iter().rev());
        info!(added, total = guard.len(), "candidate batch added");
        Ok(())
    }

    fn replace_all(&self, candidates: Vec<Candidate>) -> Result<(), StoreError> {
        let mut guard = self.candidates.write().map_err(poisoned)?;
        *guard = candidates;
        info!(total = guard.len(), "candidate store replaced");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        let guard = self.candidates.read().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::domain::SkillScore;

    fn candidate(id: &str, name: &str, role: &str) -> Candidate {
        Candidate {
            id: CandidateId::from(id),
            name: name.to_string(),
            role: role.to_string(),
            avatar: String::new(),
            updated_at: "2025-12-01 12:18:00".to_string(),
            summary: String::new(),
            detailed_analysis: String::new(),
            scores: vec![SkillScore::theory("安全监测", 70.0)],
            recommendations: Vec::new(),
        }
    }

    fn ids(store: &InMemoryCandidateStore) -> Vec<String> {
        store
            .list()
            .expect("list")
            .into_iter()
            .map(|candidate| candidate.id.0)
            .collect()
    }

    #[test]
    fn add_prepends_newest_first() {
        let store = InMemoryCandidateStore::new();
        store.add(candidate("a", "李白", "工程师")).expect("add a");
        store.add(candidate("b", "杜甫", "架构师")).expect("add b");

        assert_eq!(ids(&store), vec!["b", "a"]);
    }

    #[test]
    fn add_batch_matches_adding_one_at_a_time() {
        let batched = InMemoryCandidateStore::with_candidates(vec![candidate("a", "a", "r")]);
        batched
            .add_batch(vec![candidate("x", "x", "r"), candidate("y", "y", "r")])
            .expect("batch");

        let sequential = InMemoryCandidateStore::with_candidates(vec![candidate("a", "a", "r")]);
        sequential.add(candidate("x", "x", "r")).expect("add x");
        sequential.add(candidate("y", "y", "r")).expect("add y");

        assert_eq!(ids(&batched), vec!["y", "x", "a"]);
        assert_eq!(ids(&batched), ids(&sequential));
    }

    #[test]
    fn replace_all_discards_previous_contents() {
        let store = InMemoryCandidateStore::with_candidates(vec![candidate("a", "a", "r")]);
        store
            .replace_all(vec![candidate("s1", "s1", "r"), candidate("s2", "s2", "r")])
            .expect("replace");

        assert_eq!(ids(&store), vec!["s1", "s2"]);
    }

    #[test]
    fn search_matches_name_or_role_case_insensitively() {
        let store = InMemoryCandidateStore::with_candidates(vec![
            candidate("a", "Alice", "Security Engineer"),
            candidate("b", "王维", "初级安全分析师"),
        ]);

        assert_eq!(store.search("alice").expect("search").len(), 1);
        assert_eq!(store.search("ENGINEER").expect("search").len(), 1);
        assert_eq!(store.search("分析师").expect("search")[0].id.0, "b");
        assert_eq!(store.search("  ").expect("search").len(), 2);
    }

    #[test]
    fn get_finds_by_id() {
        let store = InMemoryCandidateStore::with_candidates(vec![candidate("a", "a", "r")]);
        assert!(store.get(&CandidateId::from("a")).expect("get").is_some());
        assert!(store.get(&CandidateId::from("z")).expect("get").is_none());
        assert!(store.contains(&CandidateId::from("a")).expect("contains"));
    }
}
