/// Owns the world state plus the obstacle RNG and adapts both to the engine
/// loop.
pub(crate) struct FlightScene<R: Rng> {
    state: WorldState,
    rng: R,
}

impl<R: Rng> FlightScene<R> {
    pub(crate) fn new(rng: R) -> Self {
        Self {
            state: WorldState::new(),
            rng,
        }
    }
}

impl<R: Rng> Simulation for FlightScene<R> {
    fn tick(&mut self, input: &InputSnapshot) {
        let next = advance(self.state, input, &mut self.rng);
        if next.game_over && !self.state.game_over {
            info!(score = next.score(), "game_over");
        }
        self.state = next;
    }

    fn compose_frame(&self) -> FramePlan {
        let mut plan = FramePlan::new(BACKGROUND_COLOR);

        plan.push(DrawOp::FillEllipse {
            x: BIRD_X,
            y: self.state.bird_y.round() as i32,
            width: BIRD_SIZE,
            height: BIRD_SIZE,
            color: SPRITE_COLOR,
        });

        // Pipe halves above and below the gap.
        plan.push(DrawOp::FillRect {
            x: self.state.pipe_x,
            y: 0,
            width: PIPE_WIDTH,
            height: self.state.pipe_gap_y,
            color: SPRITE_COLOR,
        });
        plan.push(DrawOp::FillRect {
            x: self.state.pipe_x,
            y: self.state.pipe_gap_y + GAP_HEIGHT,
            width: PIPE_WIDTH,
            height: WINDOW_HEIGHT as i32 - self.state.pipe_gap_y - GAP_HEIGHT,
            color: SPRITE_COLOR,
        });

        plan.push(DrawOp::Text {
            x: SCORE_TEXT_X,
            y: SCORE_TEXT_Y,
            text: format!("Score: {}", self.state.score()),
            scale: HUD_TEXT_SCALE,
            color: SPRITE_COLOR,
        });

        if self.state.game_over {
            plan.push(DrawOp::Text {
                x: GAME_OVER_TEXT_X,
                y: GAME_OVER_TEXT_Y,
                text: "Game Over!".to_string(),
                scale: HUD_TEXT_SCALE,
                color: SPRITE_COLOR,
            });
        }

        plan
    }
}
