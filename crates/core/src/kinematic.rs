//! A small y-up kinematic integrator that satisfies [`PhysicsPort`].
//!
//! It exists so the controller can be driven end to end (replay tool, demo
//! trace, tests). Real hosts plug in their own integrator instead.

use serde::Deserialize;

use crate::{PhysicsPort, Vec2};

/// Distance below the body that still counts as standing on something.
pub const GROUND_PROBE: f32 = 0.01;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Contacts {
    floor: bool,
    ceiling: bool,
}

fn resolve_axis_separated(mut r: Rect, dx: f32, dy: f32, world: &[Rect]) -> (Rect, Contacts) {
    let mut contacts = Contacts::default();

    // X
    r.x += dx;
    for p in world {
        if rects_intersect(&r, p) {
            if dx > 0.0 { r.x = p.x - r.w; }
            else if dx < 0.0 { r.x = p.x + p.w; }
        }
    }

    // Y, up is positive
    r.y += dy;
    for p in world {
        if rects_intersect(&r, p) {
            if dy < 0.0 {
                r.y = p.y + p.h;
                contacts.floor = true;
            } else if dy > 0.0 {
                r.y = p.y - r.h;
                contacts.ceiling = true;
            }
        }
    }

    (r, contacts)
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicBody {
    pub rect: Rect,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Horizontal velocity the body snaps to on the next integration.
    pub target_vx: f32,
    /// Downward acceleration magnitude.
    pub gravity: f32,
    /// Maximum falling speed.
    pub terminal_velocity: f32,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            rect: Rect {
                x: 0.0,
                y: 0.0,
                w: 1.0,
                h: 1.0,
            },
            velocity: Vec2::ZERO,
            grounded: false,
            target_vx: 0.0,
            gravity: 9.81,
            terminal_velocity: 20.0,
        }
    }
}

impl KinematicBody {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    /// Moves the body by one tick of `dt` seconds and recomputes ground contact.
    pub fn integrate(&mut self, world: &[Rect], dt: f32) {
        self.velocity.x = self.target_vx;
        self.velocity.y = (self.velocity.y - self.gravity * dt).max(-self.terminal_velocity);

        let total_dx = self.velocity.x * dt;
        let total_dy = self.velocity.y * dt;

        let max_step = (0.5 * self.rect.w.min(self.rect.h)).max(GROUND_PROBE);
        let steps = ((total_dx.abs().max(total_dy.abs())) / max_step).ceil().max(1.0) as i32;
        let dx = total_dx / (steps as f32);
        let dy = total_dy / (steps as f32);

        for _ in 0..steps {
            let (r, contacts) = resolve_axis_separated(self.rect, dx, dy, world);
            self.rect = r;

            if contacts.ceiling && self.velocity.y > 0.0 { self.velocity.y = 0.0; }
            if contacts.floor && self.velocity.y < 0.0 { self.velocity.y = 0.0; }
        }

        let probe = Rect {
            y: self.rect.y - GROUND_PROBE,
            ..self.rect
        };
        self.grounded = self.velocity.y <= 0.0 && world.iter().any(|p| rects_intersect(&probe, p));
    }
}

impl PhysicsPort for KinematicBody {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn apply_velocity(&mut self, velocity: Vec2) {
        self.target_vx = velocity.x;
        self.velocity.y = velocity.y;
    }
}
