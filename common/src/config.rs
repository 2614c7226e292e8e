#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Accepts `0` as a positive integer.
    ///
    /// Only affects the positive integer checkers run through a `Kind`.
    pub zero_allowed: bool,
    /// Prints nothing but errors.
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zero_allowed: true,
            quiet: false,
        }
    }
}
