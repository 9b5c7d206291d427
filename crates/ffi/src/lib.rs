use hopstate_core::{Body, FrameInput, Output, Params, State, ValidParams};

/// Writes the default params to `out`.
#[no_mangle]
pub extern "C" fn core_default_params(out: *mut Params) {
    unsafe { *out = Params::default(); }
}

/// Returns 0 if `params` is usable by `core_step`, otherwise a nonzero error code.
#[no_mangle]
pub extern "C" fn core_validate_params(params: *const Params) -> i32 {
    let p = unsafe { *params };
    match p.validate() {
        Ok(_) => 0,
        Err(err) => err.code(),
    }
}

#[no_mangle]
pub extern "C" fn core_init_state(out: *mut State) {
    unsafe { *out = State::default(); }
}

/// One controller frame. Invalid params leave `state` untouched and return a
/// zeroed output with the current jump state.
#[no_mangle]
pub extern "C" fn core_step(
    params: *const Params,
    state: *mut State,
    axis: f32,
    jump_pressed: bool,
    jump_released: bool,
    body: Body,
) -> Output {
    let s = unsafe { &mut *state };
    let p = match ValidParams::try_from(unsafe { *params }) {
        Ok(p) => p,
        Err(err) => {
            log::error!("core_step called with invalid params: {err}");
            return Output {
                jump_state: s.jump_state,
                ..Output::default()
            };
        }
    };
    let input = FrameInput::new(axis, jump_pressed, jump_released);

    hopstate_core::step(&p, s, &input, body)
}
