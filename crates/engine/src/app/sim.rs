/// RGBA color, one byte per channel.
pub type Color = [u8; 4];

/// A draw primitive the renderer rasterizes into the framebuffer.
///
/// Coordinates are window pixels with the origin at the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Axis-aligned filled rectangle; `x`/`y` is the top-left corner.
    FillRect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    /// Filled ellipse inscribed in the axis-aligned box at `x`/`y`.
    FillEllipse {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    /// Bitmap glyph text; `scale` is an integer pixel multiplier.
    Text {
        x: i32,
        y: i32,
        text: String,
        scale: i32,
        color: Color,
    },
}

/// Everything the renderer needs for one frame: a clear color and the draw
/// primitives in back-to-front order.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear_color: Color,
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

/// Input state for exactly one simulation tick.
///
/// `jump_pressed` / `jump_released` report raw key transitions seen since the
/// previous tick; OS key repeat shows up as repeated presses, so held-key
/// debouncing belongs to the simulation, not the collector.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    jump_pressed: bool,
    jump_released: bool,
    window_width: u32,
    window_height: u32,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        quit_requested: bool,
        jump_pressed: bool,
        jump_released: bool,
        window_width: u32,
        window_height: u32,
    ) -> Self {
        Self {
            quit_requested,
            jump_pressed,
            jump_released,
            window_width,
            window_height,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn jump_released(&self) -> bool {
        self.jump_released
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn with_jump_pressed(mut self, jump_pressed: bool) -> Self {
        self.jump_pressed = jump_pressed;
        self
    }

    pub fn with_jump_released(mut self, jump_released: bool) -> Self {
        self.jump_released = jump_released;
        self
    }

    pub fn with_window_size(mut self, window_size: (u32, u32)) -> Self {
        self.window_width = window_size.0;
        self.window_height = window_size.1;
        self
    }
}

/// A fixed-timestep simulation driven by the loop runner.
///
/// `tick` runs zero or more times per rendered frame, once per elapsed fixed
/// step, each call receiving the input snapshot for that step.
/// `compose_frame` runs once per frame after the ticks.
pub trait Simulation {
    fn tick(&mut self, input: &InputSnapshot);
    fn compose_frame(&self) -> FramePlan;
}
