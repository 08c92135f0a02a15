use super::constants::DEFAULT_DEPTH;

/// Tunable search settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to search below the root; values below 1 are treated as 1.
    pub depth: u32,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig { depth }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}
