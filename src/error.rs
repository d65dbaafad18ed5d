//! Error types for cloud field construction.
//!
//! Generation is the only fallible operation in the crate: a bad
//! configuration is rejected up front, while degenerate noise samples and
//! camera transforms are absorbed per frame instead of surfaced.

use std::fmt;

/// Errors that can occur while validating a field configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Lattice size is zero, so there are no candidate samples to scan.
    ZeroLattice,
    /// Lattice step must be positive.
    NonPositiveStep(f32),
    /// Noise divisor must be positive.
    NonPositiveDivisor(f32),
    /// The named configuration field holds NaN or infinity.
    NonFinite(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLattice => {
                write!(f, "Lattice size is zero; the field would have no candidate samples.")
            }
            ConfigError::NonPositiveStep(v) => {
                write!(f, "Lattice step must be positive, got {}", v)
            }
            ConfigError::NonPositiveDivisor(v) => {
                write!(f, "Noise divisor must be positive, got {}", v)
            }
            ConfigError::NonFinite(field) => {
                write!(f, "Configuration field `{}` is not finite", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_field() {
        let msg = ConfigError::NonFinite("ring_radius").to_string();
        assert!(msg.contains("ring_radius"));
    }

    #[test]
    fn test_display_includes_value() {
        let msg = ConfigError::NonPositiveStep(-3.0).to_string();
        assert!(msg.contains("-3"));
    }
}
