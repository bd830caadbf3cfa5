/// Bounds on the number of calls a split may plan.
///
/// ```text
/// ┌───────────┬─────────┬──────────────────────────────────────────┐
/// │ Field     │ Default │ Purpose                                  │
/// ├───────────┼─────────┼──────────────────────────────────────────┤
/// │ min_calls │ 1       │ smallest header byte accepted            │
/// │ max_calls │ 255     │ largest header byte accepted (inclusive) │
/// └───────────┴─────────┴──────────────────────────────────────────┘
/// ```
///
/// The header is a single byte, so any `max_calls` above 255 behaves like
/// 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitConfig {
    pub min_calls: usize,
    pub max_calls: usize,
}

impl SplitConfig {
    pub fn new(min_calls: usize, max_calls: usize) -> Self {
        Self {
            min_calls,
            max_calls,
        }
    }

    pub fn contains(&self, calls: usize) -> bool {
        (self.min_calls..=self.max_calls).contains(&calls)
    }
}

impl Default for SplitConfig {
    /// Accept every non-zero header byte.
    fn default() -> Self {
        Self {
            min_calls: 1,
            max_calls: usize::from(u8::MAX),
        }
    }
}
