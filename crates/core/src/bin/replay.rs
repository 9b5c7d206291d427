use std::error::Error;
use std::fs;
use std::path::PathBuf;

use flexi_logger::Logger;
use serde::Deserialize;

use hopstate_core::kinematic::{KinematicBody, Rect};
use hopstate_core::{Buttons, Controller, InputSampler, Params, DT};

#[derive(Deserialize)]
struct Replay {
    #[serde(default)]
    params: Params,
    world: Vec<Rect>,
    body: BodySpec,
    /// One `Buttons` bit mask per frame.
    inputs: Vec<u8>,
}

#[derive(Deserialize)]
struct BodySpec {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    #[serde(default = "default_gravity")]
    gravity: f32,
    #[serde(default = "default_terminal_velocity")]
    terminal_velocity: f32,
}

fn default_gravity() -> f32 {
    KinematicBody::default().gravity
}

fn default_terminal_velocity() -> f32 {
    KinematicBody::default().terminal_velocity
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: cargo run -p hopstate_core --bin replay -- <replay.json>")?;
    let raw = fs::read_to_string(&path)?;
    let replay: Replay = serde_json::from_str(&raw)?;

    let mut ctl = Controller::new(replay.params.validate()?);
    let mut sampler = InputSampler::new();
    let mut body = KinematicBody {
        gravity: replay.body.gravity,
        terminal_velocity: replay.body.terminal_velocity,
        ..KinematicBody::new(Rect {
            x: replay.body.x,
            y: replay.body.y,
            w: replay.body.w,
            h: replay.body.h,
        })
    };
    log::info!(
        "replaying {} frames from {} against {} rects",
        replay.inputs.len(),
        path.display(),
        replay.world.len()
    );

    // Settle contact before the first controller frame.
    body.integrate(&replay.world, DT);

    println!("frame,state,x,y,vx,vy,grounded,facing_left,speed_ratio");
    for (frame, bits) in replay.inputs.iter().enumerate() {
        let input = sampler.sample(Buttons::from_bits_truncate(*bits));
        let out = ctl.tick(&mut body, &input);
        body.integrate(&replay.world, DT);

        if out.events.jumped {
            log::info!("frame {frame}: jumped");
        }
        if out.events.landed {
            log::info!("frame {frame}: landed");
        }

        println!(
            "{},{},{},{},{},{},{},{},{}",
            frame,
            out.jump_state.as_str(),
            body.rect.x,
            body.rect.y,
            body.velocity.x,
            body.velocity.y,
            body.grounded as u8,
            out.facing_left as u8,
            out.speed_ratio
        );
    }

    Ok(())
}
