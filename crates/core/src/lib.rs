//! Jump state machine and velocity-shaping policy for a 2D platformer character.
//!
//! The host owns physics. Once per tick it hands [`step`] the frame's input and
//! what its integrator knows about the body, and gets back the velocity to apply
//! plus presentation hints for the renderer and animator.

mod error;
mod input;
mod jump;
pub mod kinematic;
mod params;
mod policy;

pub use error::ConfigError;
pub use input::{Buttons, FrameInput, InputSampler};
pub use jump::{advance_state, latch_input, update_jump_state, JumpState, State};
pub use params::{Params, ValidParams};
pub use policy::{step, Body, Controller, Events, Output, PhysicsPort, Vec2};

pub const HZ: f32 = 60.0;
pub const DT: f32 = 1.0 / HZ;
