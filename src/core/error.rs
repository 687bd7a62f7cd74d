use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown mode: '{0}' (expected attack, defense, or normal)")]
    InvalidMode(String),

    #[error("Degenerate aggregate in {strategy} defuzzification: {reason}")]
    DegenerateAggregate {
        strategy: &'static str,
        reason: &'static str,
    },

    #[error("Invalid universe: {0}")]
    InvalidUniverse(String),

    #[error("Invalid membership function: a={a}, b={b}, c={c} (need a <= b <= c)")]
    InvalidMembership { a: f64, b: f64, c: f64 },

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
