//! User-agent pool and selection.

use rand::Rng;

use crate::{Result, ScrapeError};

/// Browser signatures used when no pool is configured.
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];

/// Chooses an index into a pool of the given (non-zero) length.
pub trait IdentityPicker: Send + Sync {
    /// Returns an index in `0..len`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random selection backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl IdentityPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always returns the same index, clamped to the pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl IdentityPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Non-empty ordered list of user-agent strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityPool {
    agents: Vec<String>,
}

impl IdentityPool {
    /// Creates a pool, rejecting an empty list.
    pub fn new(agents: Vec<String>) -> Result<Self> {
        if agents.is_empty() {
            return Err(ScrapeError::EmptyIdentityPool);
        }
        Ok(Self { agents })
    }

    /// Returns the number of identities.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Returns the identities in order.
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Picks one identity using the given picker.
    pub fn choose(&self, picker: &dyn IdentityPicker) -> &str {
        let index = picker.pick(self.agents.len());
        &self.agents[index.min(self.agents.len() - 1)]
    }
}

impl Default for IdentityPool {
    fn default() -> Self {
        Self {
            agents: DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pool_rejects_empty() {
        let err = IdentityPool::new(vec![]).unwrap_err();
        assert!(matches!(err, ScrapeError::EmptyIdentityPool));
    }

    #[test]
    fn test_identity_pool_new() {
        let pool = IdentityPool::new(vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
        assert_eq!(pool.agents(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_identity_pool_default_not_empty() {
        let pool = IdentityPool::default();
        assert_eq!(pool.len(), DEFAULT_USER_AGENTS.len());
    }

    #[test]
    fn test_fixed_picker() {
        let pool = IdentityPool::new(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(pool.choose(&FixedPicker(1)), "b");
        assert_eq!(pool.choose(&FixedPicker(0)), "a");
    }

    #[test]
    fn test_fixed_picker_clamps() {
        let pool = IdentityPool::new(vec!["a".into(), "b".into()]).unwrap();
        assert_eq!(pool.choose(&FixedPicker(9)), "b");
    }

    #[test]
    fn test_fixed_picker_zero_len() {
        assert_eq!(FixedPicker(3).pick(0), 0);
    }

    #[test]
    fn test_random_picker_in_range() {
        let picker = RandomPicker;
        for _ in 0..100 {
            assert!(picker.pick(3) < 3);
        }
    }

    #[test]
    fn test_random_picker_single_entry() {
        let pool = IdentityPool::new(vec!["only".into()]).unwrap();
        assert_eq!(pool.choose(&RandomPicker), "only");
    }
}
