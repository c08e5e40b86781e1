/// Advances the world by one fixed tick and returns the next state.
///
/// Order within a tick: input, physics, obstacle advance/recycle, then the
/// bounds and collision checks. The release is applied before the press so a
/// release+press pair landing in one snapshot re-arms the impulse.
pub(crate) fn advance(state: WorldState, input: &InputSnapshot, rng: &mut impl Rng) -> WorldState {
    if state.game_over {
        return state;
    }

    let mut next = state;

    if input.jump_released() {
        next.jump_held = false;
    }
    if input.jump_pressed() && !next.jump_held {
        next.bird_vel_y = FLAP_IMPULSE;
        next.jump_held = true;
    }

    next.bird_vel_y += GRAVITY_PER_TICK;
    next.bird_y += next.bird_vel_y;
    next.pipe_x -= PIPE_SPEED;

    if next.pipe_x < PIPE_RECYCLE_X {
        next.pipe_x = PIPE_SPAWN_X;
        next.pipe_gap_y = rng.gen_range(0..GAP_MAX_Y);
    }

    if outside_playfield(next.bird_y) || hits_pipe(next.bird_y, next.pipe_x, next.pipe_gap_y) {
        next.game_over = true;
    }

    next
}

fn outside_playfield(bird_y: f32) -> bool {
    bird_y > BIRD_MAX_Y || bird_y < 0.0
}

/// Axis-aligned overlap against the pipe; the gap span is the only safe
/// vertical band while the horizontal spans intersect.
fn hits_pipe(bird_y: f32, pipe_x: i32, pipe_gap_y: i32) -> bool {
    let overlaps_horizontally = pipe_x < BIRD_X + BIRD_SIZE && pipe_x + PIPE_WIDTH > BIRD_X;
    if !overlaps_horizontally {
        return false;
    }

    let gap_top = pipe_gap_y as f32;
    let gap_bottom = (pipe_gap_y + GAP_HEIGHT) as f32;
    bird_y < gap_top || bird_y + BIRD_SIZE as f32 > gap_bottom
}
