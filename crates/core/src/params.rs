use serde::Deserialize;

use crate::ConfigError;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Params {
    // Horizontal
    pub max_speed: f32,
    pub facing_dead_zone: f32,

    // Jump
    pub jump_take_off_speed: f32,
    pub take_off_multiplier: f32,
    pub jump_cut_multiplier: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            facing_dead_zone: 0.01,

            jump_take_off_speed: 7.0,
            take_off_multiplier: 1.5,
            jump_cut_multiplier: 0.5,
        }
    }
}

impl Params {
    /// Checks the movement constants once, at configuration time.
    ///
    /// `max_speed` divides the normalized-speed hint every frame, so anything
    /// that is not a finite positive number is refused here rather than turning
    /// into NaN or infinity later.
    pub fn validate(self) -> Result<ValidParams, ConfigError> {
        let err = if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            Some(ConfigError::MaxSpeed(self.max_speed))
        } else if !self.jump_take_off_speed.is_finite() {
            Some(ConfigError::TakeOffSpeed(self.jump_take_off_speed))
        } else if !non_negative(self.take_off_multiplier) {
            Some(ConfigError::Multiplier {
                name: "take_off_multiplier",
                value: self.take_off_multiplier,
            })
        } else if !non_negative(self.jump_cut_multiplier) {
            Some(ConfigError::Multiplier {
                name: "jump_cut_multiplier",
                value: self.jump_cut_multiplier,
            })
        } else if !non_negative(self.facing_dead_zone) {
            Some(ConfigError::DeadZone(self.facing_dead_zone))
        } else {
            None
        };

        match err {
            Some(err) => {
                log::warn!("rejecting controller params: {err}");
                Err(err)
            }
            None => Ok(ValidParams(self)),
        }
    }

    /// Vertical velocity set by the takeoff impulse.
    #[inline]
    pub fn take_off_velocity(&self) -> f32 {
        self.jump_take_off_speed * self.take_off_multiplier
    }
}

#[inline]
fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

/// [`Params`] that passed [`Params::validate`]. The only form [`step`](crate::step) accepts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValidParams(Params);

impl ValidParams {
    pub fn get(&self) -> &Params {
        &self.0
    }
}

impl std::ops::Deref for ValidParams {
    type Target = Params;

    fn deref(&self) -> &Params {
        &self.0
    }
}

impl TryFrom<Params> for ValidParams {
    type Error = ConfigError;

    fn try_from(params: Params) -> Result<Self, Self::Error> {
        params.validate()
    }
}
