pub mod app;

pub use app::{
    run_app, AppError, Color, DrawOp, FramePlan, InputSnapshot, LoopConfig, LoopMetricsSnapshot,
    Renderer, Simulation, Viewport,
};
