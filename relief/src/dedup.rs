use std::collections::HashSet;

/// Tracks which shared shape records have already been sampled during
/// one tile pass.
///
/// Shape offsets are only unique within one tile's shape table, so a
/// fresh instance is required per tile. Edge enumeration is
/// sequential; this type is deliberately not thread-safe.
#[derive(Debug, Default)]
pub struct ShapeDedup {
    seen: HashSet<u32>,
}

impl ShapeDedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time `info_offset` is observed, false on
    /// every later call with the same offset.
    pub fn should_process(&mut self, info_offset: u32) -> bool {
        self.seen.insert(info_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::ShapeDedup;

    #[test]
    fn test_first_observation_wins() {
        let mut dedup = ShapeDedup::new();
        assert!(dedup.should_process(42));
        assert!(!dedup.should_process(42));
        assert!(dedup.should_process(7));
        assert!(!dedup.should_process(42));
        assert!(!dedup.should_process(7));
    }

    #[test]
    fn test_fresh_instance_forgets() {
        let mut dedup = ShapeDedup::new();
        assert!(dedup.should_process(42));
        let mut dedup = ShapeDedup::new();
        assert!(dedup.should_process(42));
    }
}
