use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// The exponent does not describe a usable branching factor.
    #[error("invalid heap configuration: exponent {exponent} ({reason})")]
    InvalidConfiguration { exponent: i64, reason: &'static str },
}
