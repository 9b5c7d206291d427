/// Reasons a [`Params`](crate::Params) set is refused by
/// [`Params::validate`](crate::Params::validate).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("max_speed must be finite and greater than zero, got {0}")]
    MaxSpeed(f32),
    #[error("jump_take_off_speed must be finite, got {0}")]
    TakeOffSpeed(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    Multiplier { name: &'static str, value: f32 },
    #[error("facing_dead_zone must be finite and non-negative, got {0}")]
    DeadZone(f32),
}

impl ConfigError {
    /// Stable nonzero code for hosts that cannot carry a Rust error (C ABI).
    pub fn code(&self) -> i32 {
        match self {
            ConfigError::MaxSpeed(_) => 1,
            ConfigError::TakeOffSpeed(_) => 2,
            ConfigError::Multiplier { .. } => 3,
            ConfigError::DeadZone(_) => 4,
        }
    }
}
