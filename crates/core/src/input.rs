bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const JUMP  = 1 << 4;
    }
}

/// What the controller sees of the input devices for one frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal axis in `[-1, 1]`.
    pub horizontal_axis: f32,
    /// Jump went from released to pressed this frame.
    pub jump_pressed: bool,
    /// Jump went from pressed to released this frame.
    pub jump_released: bool,
}

impl FrameInput {
    /// Builds an input with the axis clamped to `[-1, 1]`. NaN reads as no input.
    pub fn new(horizontal_axis: f32, jump_pressed: bool, jump_released: bool) -> Self {
        let horizontal_axis = if horizontal_axis.is_nan() {
            0.0
        } else {
            horizontal_axis.clamp(-1.0, 1.0)
        };
        Self {
            horizontal_axis,
            jump_pressed,
            jump_released,
        }
    }

    pub fn axis(horizontal_axis: f32) -> Self {
        Self::new(horizontal_axis, false, false)
    }

    pub fn press() -> Self {
        Self::new(0.0, true, false)
    }

    pub fn release() -> Self {
        Self::new(0.0, false, true)
    }
}

/// Turns held-button snapshots into per-frame edges.
#[derive(Copy, Clone, Debug, Default)]
pub struct InputSampler {
    jump_was_down: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, buttons: Buttons) -> FrameInput {
        let left = buttons.contains(Buttons::LEFT);
        let right = buttons.contains(Buttons::RIGHT);
        let jump = buttons.contains(Buttons::JUMP);

        let axis = (right as i32 - left as i32) as f32;

        let jump_pressed = jump && !self.jump_was_down;
        let jump_released = !jump && self.jump_was_down;
        self.jump_was_down = jump;

        FrameInput::new(axis, jump_pressed, jump_released)
    }
}
