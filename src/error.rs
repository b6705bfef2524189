use thiserror::Error;

/// Reasons a [`SimulationConfig`](crate::config::SimulationConfig) is rejected before a run starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The population must contain at least one body.
    #[error("body count must be non-zero")]
    NoBodies,

    /// A parameter is NaN or infinite.
    #[error("{parameter} must be finite")]
    NotFinite {
        /// Name of the offending parameter.
        parameter: &'static str,
    },

    /// A parameter that must be strictly positive is zero or negative.
    #[error("{parameter} must be greater than zero, got {value}")]
    NotPositive {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was supplied.
        value: f32,
    },

    /// A parameter that must not be negative is.
    #[error("{parameter} must not be negative, got {value}")]
    Negative {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was supplied.
        value: f32,
    },

    /// The lower end of a random range exceeds its upper end.
    #[error("{parameter} range is inverted: min {min} > max {max}")]
    InvertedRange {
        /// Name of the offending range.
        parameter: &'static str,
        /// Lower end that was supplied.
        min: f32,
        /// Upper end that was supplied.
        max: f32,
    },
}
