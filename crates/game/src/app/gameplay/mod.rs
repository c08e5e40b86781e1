use engine::{Color, DrawOp, FramePlan, InputSnapshot, Simulation};
use rand::Rng;
use tracing::info;

pub(crate) const WINDOW_WIDTH: u32 = 800;
pub(crate) const WINDOW_HEIGHT: u32 = 600;
const GRAVITY_PER_TICK: f32 = 0.1;
const FLAP_IMPULSE: f32 = -5.0;
const BIRD_X: i32 = 100;
const BIRD_SIZE: i32 = 20;
const BIRD_START_Y: f32 = 100.0;
const BIRD_MAX_Y: f32 = 500.0;
const PIPE_WIDTH: i32 = 20;
const PIPE_SPEED: i32 = 2;
const PIPE_SPAWN_X: i32 = 400;
const PIPE_RECYCLE_X: i32 = -20;
const PIPE_START_GAP_Y: i32 = 200;
const GAP_HEIGHT: i32 = 200;
const GAP_MAX_Y: i32 = 200;
const BACKGROUND_COLOR: Color = [0, 0, 0, 255];
const SPRITE_COLOR: Color = [255, 255, 255, 255];
const SCORE_TEXT_X: i32 = 10;
const SCORE_TEXT_Y: i32 = 10;
const GAME_OVER_TEXT_X: i32 = 300;
const GAME_OVER_TEXT_Y: i32 = 300;
const HUD_TEXT_SCALE: i32 = 3;

include!("state.rs");
include!("systems.rs");
include!("scene_impl.rs");
