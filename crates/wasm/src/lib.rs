use wasm_bindgen::prelude::*;
use hopstate_core::{Body, Buttons, Controller as Core, InputSampler, Params, Vec2};

#[wasm_bindgen]
pub struct Controller {
    core: Core,
    sampler: InputSampler,
}

#[wasm_bindgen]
impl Controller {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Controller, JsError> {
        let params = Params::default().validate()?;
        Ok(Controller {
            core: Core::new(params),
            sampler: InputSampler::new(),
        })
    }

    pub fn reset(&mut self) {
        self.core.reset();
        self.sampler = InputSampler::new();
    }

    /// Replaces the params from a JSON object with matching field names.
    /// Missing fields take their defaults. The jump state is kept.
    pub fn set_params_json(&mut self, json: &str) -> Result<(), JsError> {
        let params: Params = serde_json::from_str(json)?;
        let state = *self.core.state();
        self.core = Core::new(params.validate()?);
        // Keep the jump in progress across a tuning change.
        self.core.restore(state);
        Ok(())
    }

    /// One frame from held-button bits and the host's body sample. Returns the
    /// velocity to apply plus presentation hints as a JS object.
    pub fn step(&mut self, input_bits: u8, grounded: bool, vx: f32, vy: f32) -> JsValue {
        let input = self.sampler.sample(Buttons::from_bits_truncate(input_bits));
        let body = Body {
            velocity: Vec2::new(vx, vy),
            grounded,
        };
        let out = self.core.advance(&input, body);

        let obj = js_sys::Object::new();
        let set = |k: &str, v: JsValue| {
            let _ = js_sys::Reflect::set(&obj, &k.into(), &v);
        };
        set("target_vx", JsValue::from_f64(out.target_vx as f64));
        set("vy", JsValue::from_f64(out.vy as f64));
        set("facing_left", JsValue::from_bool(out.facing_left));
        set("grounded", JsValue::from_bool(out.grounded));
        set("speed_ratio", JsValue::from_f64(out.speed_ratio as f64));
        set("state", JsValue::from_str(out.jump_state.as_str()));
        set("jumped", JsValue::from_bool(out.events.jumped));
        set("landed", JsValue::from_bool(out.events.landed));
        set("cut", JsValue::from_bool(out.events.cut));

        JsValue::from(obj)
    }
}
