use hopstate_core::kinematic::{KinematicBody, Rect};
use hopstate_core::{Buttons, Controller, InputSampler, Params, DT};

fn main() -> Result<(), hopstate_core::ConfigError> {
    let mut ctl = Controller::new(Params::default().validate()?);
    let mut sampler = InputSampler::new();

    let world = [Rect {
        x: -50.0,
        y: -1.0,
        w: 100.0,
        h: 1.0,
    }];

    let mut body = KinematicBody::new(Rect {
        x: 0.0,
        y: 0.0,
        w: 1.0,
        h: 1.0,
    });
    body.integrate(&world, DT);

    let mut jumped: u32 = 0;
    let mut landed: u32 = 0;
    let mut cut: u32 = 0;
    let mut apex = body.rect.y;

    for frame in 0..180 {
        let mut buttons = Buttons::empty();
        if frame < 120 {
            buttons |= Buttons::RIGHT;
        }
        if (10..20).contains(&frame) {
            buttons |= Buttons::JUMP;
        }

        let input = sampler.sample(buttons);
        let out = ctl.tick(&mut body, &input);
        body.integrate(&world, DT);

        jumped += out.events.jumped as u32;
        landed += out.events.landed as u32;
        cut += out.events.cut as u32;
        apex = apex.max(body.rect.y);
    }

    println!(
        "{{\"x\":{},\"y\":{},\"apex\":{},\"state\":\"{}\",\"jumped\":{},\"landed\":{},\"cut\":{}}}",
        body.rect.x,
        body.rect.y,
        apex,
        ctl.jump_state().as_str(),
        jumped,
        landed,
        cut
    );

    Ok(())
}
