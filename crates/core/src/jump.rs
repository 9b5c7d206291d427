use crate::FrameInput;

/// The jump cycle. Variants are listed, and numbered, in the only order the
/// machine can visit them.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum JumpState {
    #[default]
    Grounded = 0,
    PrepareToJump = 1,
    Jumping = 2,
    InFlight = 3,
    Landed = 4,
}

impl JumpState {
    pub const ALL: [JumpState; 5] = [
        JumpState::Grounded,
        JumpState::PrepareToJump,
        JumpState::Jumping,
        JumpState::InFlight,
        JumpState::Landed,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JumpState::Grounded => "grounded",
            JumpState::PrepareToJump => "prepare_to_jump",
            JumpState::Jumping => "jumping",
            JumpState::InFlight => "in_flight",
            JumpState::Landed => "landed",
        }
    }
}

/// Persistent per-body controller fields.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct State {
    pub jump_state: JumpState,
    /// One-shot: cut upward velocity on the next velocity pass.
    pub stop_jump: bool,
    /// One-shot: apply the takeoff impulse on the next velocity pass.
    pub jump: bool,
    pub move_x: f32,
    pub facing_left: bool,
}

/// Input-sampling half of the frame. Runs before [`advance_state`].
///
/// A press edge only matters while grounded. A release edge sets `stop_jump`
/// in every state, except when the same frame's press already started a jump.
pub fn latch_input(s: &mut State, input: &FrameInput) {
    s.move_x = input.horizontal_axis;

    if s.jump_state == JumpState::Grounded && input.jump_pressed {
        log::debug!("jump state {} -> {}", s.jump_state.as_str(), JumpState::PrepareToJump.as_str());
        s.jump_state = JumpState::PrepareToJump;
    } else if input.jump_released {
        s.stop_jump = true;
    }
}

/// Pure transition function. Returns the next state and whether the takeoff
/// trigger fires.
pub fn advance_state(current: JumpState, is_grounded: bool) -> (JumpState, bool) {
    match current {
        JumpState::PrepareToJump => (JumpState::Jumping, true),
        JumpState::Jumping if !is_grounded => (JumpState::InFlight, false),
        JumpState::InFlight if is_grounded => (JumpState::Landed, false),
        JumpState::Landed => (JumpState::Grounded, false),
        other => (other, false),
    }
}

/// Switch half of the frame. Resets the takeoff trigger, then applies
/// [`advance_state`] to `s`.
pub fn update_jump_state(s: &mut State, is_grounded: bool) {
    let (next, triggered) = advance_state(s.jump_state, is_grounded);
    if next != s.jump_state {
        log::debug!("jump state {} -> {}", s.jump_state.as_str(), next.as_str());
    }

    s.jump_state = next;
    s.jump = triggered;
    if triggered {
        s.stop_jump = false;
    }
}
