use crate::error::MigrationError;
use ahash::AHashSet;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of style reference ids for chart series.
pub trait RefIdGenerator: Send + Sync {
    fn new_ref_id(&self) -> String;
}

/// Random 64-bit ids rendered as 16 hex digits.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRefIds;

impl RefIdGenerator for RandomRefIds {
    fn new_ref_id(&self) -> String {
        format!("{:016x}", rand::rng().random::<u64>())
    }
}

/// Deterministic ids: `ref-0`, `ref-1`, ...
#[derive(Debug, Default)]
pub struct SequentialRefIds {
    next: AtomicU64,
}

impl SequentialRefIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RefIdGenerator for SequentialRefIds {
    fn new_ref_id(&self) -> String {
        format!("ref-{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// How many ids a session draws before giving up on finding an unused one.
const MAX_ATTEMPTS: usize = 8;

/// Tracks the ids issued during one conversion and rejects repeats.
pub(crate) struct RefIdSession<'a> {
    generator: &'a dyn RefIdGenerator,
    issued: AHashSet<String>,
}

impl<'a> RefIdSession<'a> {
    pub(crate) fn new(generator: &'a dyn RefIdGenerator) -> Self {
        Self {
            generator,
            issued: AHashSet::new(),
        }
    }

    /// Draws ids until one has not been issued in this session.
    pub(crate) fn issue(&mut self) -> Result<String, MigrationError> {
        let mut id = self.generator.new_ref_id();
        for _ in 1..MAX_ATTEMPTS {
            if !self.issued.contains(&id) {
                break;
            }
            id = self.generator.new_ref_id();
        }
        if !self.issued.insert(id.clone()) {
            return Err(MigrationError::DuplicateRefId(id));
        }
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantRefIds;

    impl RefIdGenerator for ConstantRefIds {
        fn new_ref_id(&self) -> String {
            "same".to_string()
        }
    }

    /// Repeats `first` once before counting up.
    struct StutteringRefIds {
        calls: AtomicU64,
    }

    impl RefIdGenerator for StutteringRefIds {
        fn new_ref_id(&self) -> String {
            match self.calls.fetch_add(1, Ordering::Relaxed) {
                0 | 1 => "first".to_string(),
                n => format!("id-{}", n),
            }
        }
    }

    #[test]
    fn session_redraws_after_a_collision() {
        let generator = StutteringRefIds {
            calls: AtomicU64::new(0),
        };
        let mut session = RefIdSession::new(&generator);
        assert_eq!(session.issue().unwrap(), "first");
        assert_eq!(session.issue().unwrap(), "id-2");
    }

    #[test]
    fn sequential_ids_count_up() {
        let generator = SequentialRefIds::new();
        assert_eq!(generator.new_ref_id(), "ref-0");
        assert_eq!(generator.new_ref_id(), "ref-1");
    }

    #[test]
    fn random_ids_are_hex() {
        let id = RandomRefIds.new_ref_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_rejects_repeated_ids() {
        let generator = ConstantRefIds;
        let mut session = RefIdSession::new(&generator);
        assert_eq!(session.issue().unwrap(), "same");
        assert_eq!(
            session.issue().unwrap_err(),
            MigrationError::DuplicateRefId("same".to_string())
        );
    }
}
