/// Interpreter settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Maximum number of evaluation steps (statements, expressions and
    /// guards). `None` runs without a limit.
    pub gas_limit: Option<u64>,
}

impl RunConfig {
    /// No step limit.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Stop with [`EvalError::GasExhausted`](crate::EvalError::GasExhausted)
    /// after `limit` steps.
    pub fn with_gas_limit(limit: u64) -> Self {
        Self {
            gas_limit: Some(limit),
        }
    }
}
