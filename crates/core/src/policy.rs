use crate::{latch_input, update_jump_state, FrameInput, JumpState, State, ValidParams};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What the host integrator reports about the body at the start of the frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Body {
    pub velocity: Vec2,
    pub grounded: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Events {
    /// Takeoff impulse was applied.
    pub jumped: bool,
    /// `InFlight -> Landed` was taken.
    pub landed: bool,
    /// A positive vertical velocity was cut.
    pub cut: bool,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Output {
    /// Horizontal target velocity for the integrator.
    pub target_vx: f32,
    /// Vertical velocity after impulse or cut; equal to the body's `vy` otherwise.
    pub vy: f32,
    /// Sprite mirroring.
    pub facing_left: bool,
    /// Animator "grounded" parameter.
    pub grounded: bool,
    /// Animator horizontal speed parameter, `|vx| / max_speed`.
    pub speed_ratio: f32,
    pub jump_state: JumpState,
    pub events: Events,
}

impl Output {
    /// Velocity to hand back to the integrator.
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(self.target_vx, self.vy)
    }
}

/// One controller frame: sample input, advance the jump machine, shape velocity.
/// Host calls this exactly once per simulation tick.
pub fn step(params: &ValidParams, s: &mut State, input: &FrameInput, body: Body) -> Output {
    let mut ev = Events::default();
    let grounded = body.grounded;

    latch_input(s, input);

    let was_in_flight = s.jump_state == JumpState::InFlight;
    update_jump_state(s, grounded);
    ev.landed = was_in_flight && s.jump_state == JumpState::Landed;

    // Vertical
    let mut vy = body.velocity.y;
    if s.jump && grounded {
        vy = params.take_off_velocity();
        s.jump = false;
        ev.jumped = true;
        log::trace!("takeoff impulse vy={vy}");
    } else if s.stop_jump {
        s.stop_jump = false;
        if vy > 0.0 {
            vy *= params.jump_cut_multiplier;
            ev.cut = true;
            log::trace!("jump cut vy={vy}");
        }
    }

    // Facing
    let dead_zone = params.facing_dead_zone;
    if s.move_x > dead_zone {
        s.facing_left = false;
    } else if s.move_x < -dead_zone {
        s.facing_left = true;
    }

    Output {
        target_vx: s.move_x * params.max_speed,
        vy,
        facing_left: s.facing_left,
        grounded,
        speed_ratio: body.velocity.x.abs() / params.max_speed,
        jump_state: s.jump_state,
        events: ev,
    }
}

/// The slice of a kinematic integrator the controller needs.
pub trait PhysicsPort {
    fn is_grounded(&self) -> bool;

    fn velocity(&self) -> Vec2;

    /// `x` is the horizontal target velocity, `y` the new vertical velocity.
    fn apply_velocity(&mut self, velocity: Vec2);
}

/// Owns the validated params and the jump state for one body.
#[derive(Clone, Debug)]
pub struct Controller {
    params: ValidParams,
    state: State,
}

impl Controller {
    pub fn new(params: ValidParams) -> Self {
        Self {
            params,
            state: State::default(),
        }
    }

    pub fn params(&self) -> &ValidParams {
        &self.params
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn jump_state(&self) -> JumpState {
        self.state.jump_state
    }

    pub fn reset(&mut self) {
        self.state = State::default();
    }

    pub fn restore(&mut self, state: State) {
        self.state = state;
    }

    /// [`step`] against a body sample the host gathered itself.
    pub fn advance(&mut self, input: &FrameInput, body: Body) -> Output {
        step(&self.params, &mut self.state, input, body)
    }

    /// Reads the port, runs [`step`], writes the result back to the port.
    pub fn tick<P: PhysicsPort + ?Sized>(&mut self, port: &mut P, input: &FrameInput) -> Output {
        let body = Body {
            velocity: port.velocity(),
            grounded: port.is_grounded(),
        };
        let out = self.advance(input, body);
        port.apply_velocity(out.velocity());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{step, Body, Controller, PhysicsPort, Vec2};
    use crate::{FrameInput, JumpState, Params, State, ValidParams};

    fn approx_eq(a: f32, b: f32) {
        let eps = 1e-4;
        assert!(
            (a - b).abs() <= eps,
            "expected {b}, got {a} (diff {})",
            (a - b).abs()
        );
    }

    fn params() -> ValidParams {
        Params::default().validate().unwrap()
    }

    fn body(vx: f32, vy: f32, grounded: bool) -> Body {
        Body {
            velocity: Vec2::new(vx, vy),
            grounded,
        }
    }

    #[test]
    fn press_while_grounded_jumps_in_same_frame() {
        let p = params();
        let mut s = State::default();

        let out = step(&p, &mut s, &FrameInput::press(), body(0.0, 0.0, true));
        assert_eq!(s.jump_state, JumpState::Jumping);
        assert!(out.events.jumped);
        approx_eq(out.vy, 10.5);
        assert!(!s.jump);
    }

    #[test]
    fn trigger_is_lost_if_not_grounded_on_takeoff_frame() {
        let p = params();
        let mut s = State {
            jump_state: JumpState::PrepareToJump,
            ..State::default()
        };

        let out = step(&p, &mut s, &FrameInput::default(), body(0.0, -1.0, false));
        assert_eq!(s.jump_state, JumpState::Jumping);
        assert!(!out.events.jumped);
        approx_eq(out.vy, -1.0);

        let out = step(&p, &mut s, &FrameInput::default(), body(0.0, -1.0, true));
        assert!(!out.events.jumped);
        assert!(!s.jump);
    }

    #[test]
    fn release_halves_rising_velocity_once() {
        let p = params();
        let mut s = State {
            jump_state: JumpState::InFlight,
            ..State::default()
        };

        let out = step(&p, &mut s, &FrameInput::release(), body(0.0, 8.0, false));
        approx_eq(out.vy, 4.0);
        assert!(out.events.cut);
        assert!(!s.stop_jump);

        let out = step(&p, &mut s, &FrameInput::default(), body(0.0, 4.0, false));
        approx_eq(out.vy, 4.0);
        assert!(!out.events.cut);
    }

    #[test]
    fn release_while_falling_is_consumed_without_effect() {
        let p = params();
        let mut s = State {
            jump_state: JumpState::InFlight,
            ..State::default()
        };

        let out = step(&p, &mut s, &FrameInput::release(), body(0.0, -3.0, false));
        approx_eq(out.vy, -3.0);
        assert!(!out.events.cut);
        assert!(!s.stop_jump);
    }

    #[test]
    fn dead_zone_keeps_facing() {
        let p = params();
        let mut s = State::default();

        let out = step(&p, &mut s, &FrameInput::axis(-0.5), body(0.0, 0.0, true));
        assert!(out.facing_left);
        let out = step(&p, &mut s, &FrameInput::axis(-0.005), body(0.0, 0.0, true));
        assert!(out.facing_left);
        let out = step(&p, &mut s, &FrameInput::axis(1.0), body(0.0, 0.0, true));
        assert!(!out.facing_left);
        let out = step(&p, &mut s, &FrameInput::axis(0.005), body(0.0, 0.0, true));
        assert!(!out.facing_left);
        let out = step(&p, &mut s, &FrameInput::axis(-0.01), body(0.0, 0.0, true));
        assert!(!out.facing_left);
    }

    #[test]
    fn horizontal_target_and_speed_hint() {
        let p = params();
        let mut s = State::default();

        let out = step(&p, &mut s, &FrameInput::axis(1.0), body(3.5, 0.0, true));
        approx_eq(out.target_vx, 7.0);
        approx_eq(out.speed_ratio, 0.5);
        assert!(out.grounded);

        let out = step(&p, &mut s, &FrameInput::axis(-0.5), body(-7.0, 0.0, false));
        approx_eq(out.target_vx, -3.5);
        approx_eq(out.speed_ratio, 1.0);
        assert!(!out.grounded);
    }

    struct Probe {
        grounded: bool,
        velocity: Vec2,
        applied: Vec<Vec2>,
    }

    impl PhysicsPort for Probe {
        fn is_grounded(&self) -> bool {
            self.grounded
        }

        fn velocity(&self) -> Vec2 {
            self.velocity
        }

        fn apply_velocity(&mut self, velocity: Vec2) {
            self.velocity = velocity;
            self.applied.push(velocity);
        }
    }

    #[test]
    fn controller_round_trips_through_port() {
        let mut ctl = Controller::new(params());
        let mut probe = Probe {
            grounded: true,
            velocity: Vec2::ZERO,
            applied: Vec::new(),
        };

        let out = ctl.tick(&mut probe, &FrameInput::new(1.0, true, false));
        assert!(out.events.jumped);
        assert_eq!(probe.applied, vec![Vec2::new(7.0, 10.5)]);
        assert_eq!(ctl.jump_state(), JumpState::Jumping);

        ctl.reset();
        assert_eq!(*ctl.state(), State::default());
    }
}
