use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::glyphs::draw_text_clipped;
use crate::app::sim::{Color, DrawOp, FramePlan};

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Owns the framebuffer surface and rasterizes one `FramePlan` per frame.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    viewport: Viewport,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), size.width.max(1), size.height.max(1))?;
        Ok(Self {
            window,
            pixels,
            viewport: Viewport {
                width: size.width,
                height: size.height,
            },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), width, height)?;
        self.viewport = Viewport { width, height };
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(width, height, window);
        Pixels::new(width, height, surface)
    }

    pub fn render(&mut self, plan: &FramePlan) -> Result<(), Error> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Ok(());
        }

        let width = self.viewport.width;
        let height = self.viewport.height;
        let frame = self.pixels.frame_mut();
        for chunk in frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&plan.clear_color);
        }

        for op in &plan.ops {
            match op {
                DrawOp::FillRect {
                    x,
                    y,
                    width: rect_width,
                    height: rect_height,
                    color,
                } => {
                    draw_filled_rect(frame, width, height, *x, *y, *rect_width, *rect_height, *color);
                }
                DrawOp::FillEllipse {
                    x,
                    y,
                    width: box_width,
                    height: box_height,
                    color,
                } => {
                    draw_filled_ellipse(frame, width, height, *x, *y, *box_width, *box_height, *color);
                }
                DrawOp::Text {
                    x,
                    y,
                    text,
                    scale,
                    color,
                } => {
                    draw_text_clipped(frame, width, height, *x, *y, text, *scale, *color);
                }
            }
        }

        self.pixels.render()
    }
}

pub(crate) fn write_pixel_rgba(frame: &mut [u8], width: usize, x: usize, y: usize, color: Color) {
    let Some(pixel_offset) = y.checked_mul(width).and_then(|row| row.checked_add(x)) else {
        return;
    };
    let Some(byte_offset) = pixel_offset.checked_mul(4) else {
        return;
    };
    let Some(end) = byte_offset.checked_add(4) else {
        return;
    };
    if end > frame.len() {
        return;
    }

    frame[byte_offset..end].copy_from_slice(&color);
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_filled_rect(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    rect_width: i32,
    rect_height: i32,
    color: Color,
) {
    let start_x = x.max(0);
    let start_y = y.max(0);
    let end_x = (x + rect_width).min(width as i32);
    let end_y = (y + rect_height).min(height as i32);
    if end_x <= start_x || end_y <= start_y {
        return;
    }

    let width_usize = width as usize;
    for py in start_y..end_y {
        for px in start_x..end_x {
            write_pixel_rgba(frame, width_usize, px as usize, py as usize, color);
        }
    }
}

/// Fills the ellipse inscribed in the given bounding box, clipped to the
/// frame. Pixel centers are tested against the normalized radius.
#[allow(clippy::too_many_arguments)]
pub(crate) fn draw_filled_ellipse(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    box_width: i32,
    box_height: i32,
    color: Color,
) {
    if box_width <= 0 || box_height <= 0 {
        return;
    }

    let radius_x = box_width as f32 / 2.0;
    let radius_y = box_height as f32 / 2.0;
    let center_x = x as f32 + radius_x;
    let center_y = y as f32 + radius_y;

    let start_x = x.max(0);
    let start_y = y.max(0);
    let end_x = (x + box_width).min(width as i32);
    let end_y = (y + box_height).min(height as i32);
    if end_x <= start_x || end_y <= start_y {
        return;
    }

    let width_usize = width as usize;
    for py in start_y..end_y {
        let dy = (py as f32 + 0.5 - center_y) / radius_y;
        for px in start_x..end_x {
            let dx = (px as f32 + 0.5 - center_x) / radius_x;
            if dx * dx + dy * dy <= 1.0 {
                write_pixel_rgba(frame, width_usize, px as usize, py as usize, color);
            }
        }
    }
}
