//! Deterministic id generation for entities created at runtime.
//!
//! New tasks, comments and documents get ids of the form `PREFIX-N` from a
//! per-collection counter. The counter starts past the highest numeric suffix
//! found in the seed data, so generated ids never collide with seeded ones.

use serde::{Deserialize, Serialize};

/// Monotonic, namespaced id generator.
///
/// # Example
/// ```
/// use offboard_core::ids::IdGenerator;
///
/// let mut ids = IdGenerator::new("TASK");
/// assert_eq!(ids.next_id(), "TASK-1");
/// assert_eq!(ids.next_id(), "TASK-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdGenerator {
    prefix: String,
    next: u64,
}

impl IdGenerator {
    /// Create a generator starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        IdGenerator {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Create a generator that continues after the existing ids.
    ///
    /// Ids that do not carry this generator's prefix are ignored.
    pub fn after<'a>(prefix: impl Into<String>, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ids = IdGenerator::new(prefix);
        let highest = existing
            .into_iter()
            .filter_map(|id| ids.suffix_of(id))
            .max()
            .unwrap_or(0);
        ids.next = highest + 1;
        ids
    }

    /// Produce the next id.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// The namespace prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn suffix_of(&self, id: &str) -> Option<u64> {
        id.strip_prefix(self.prefix.as_str())?
            .strip_prefix('-')?
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = IdGenerator::new("CMT");
        assert_eq!(ids.next_id(), "CMT-1");
        assert_eq!(ids.next_id(), "CMT-2");
        assert_eq!(ids.prefix(), "CMT");
    }

    #[test]
    fn test_continues_after_seed_ids() {
        let mut ids = IdGenerator::after("DOC", ["DOC-3", "DOC-12", "TASK-40", "DOC-x"]);
        assert_eq!(ids.next_id(), "DOC-13");
    }

    #[test]
    fn test_empty_seed_starts_at_one() {
        let mut ids = IdGenerator::after("TASK", std::iter::empty());
        assert_eq!(ids.next_id(), "TASK-1");
    }
}
