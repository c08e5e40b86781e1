mod glyphs;
mod renderer;

pub use renderer::{Renderer, Viewport};
