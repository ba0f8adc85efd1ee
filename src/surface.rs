//! Drawing surface used by the renderer.
//!
//! [`Surface`] is the small set of 2D primitives the renderer needs. Paint
//! order is z-order: each call draws over what is already there.
//! [`RasterSurface`] implements it on an in-memory RGBA image.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use rusttype::{Font, Scale};

use crate::layout::Rect;

/// How a line of text is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Pixel height of the glyphs
    pub size: f32,
    pub color: Rgba<u8>,
    pub bold: bool,
    /// Outline color drawn under the fill
    pub stroke: Option<Rgba<u8>>,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgba<u8>) -> Self {
        Self { size, color, bold: false, stroke: None }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn stroked(mut self, color: Rgba<u8>) -> Self {
        self.stroke = Some(color);
        self
    }
}

/// 2D drawing primitives.
pub trait Surface {
    /// Canvas size in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Paint the whole canvas.
    fn fill(&mut self, color: Rgba<u8>);

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>);

    /// Draw `image` scaled to `rect`.
    fn draw_image(&mut self, image: &RgbaImage, rect: Rect);

    /// Draw one line of text horizontally centered on `center_x`, glyph tops at `top`.
    fn draw_text_centered(&mut self, text: &str, center_x: f32, top: f32, style: &TextStyle);
}

/// An RGBA canvas with an optional font.
///
/// Without a font, text calls are no-ops.
pub struct RasterSurface {
    image: RgbaImage,
    font: Option<Font<'static>>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, font: Option<Font<'static>>) -> Self {
        Self { image: RgbaImage::new(width, height), font }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Offsets of the outline ring around a glyph run.
fn stroke_offsets(radius: i32) -> [(i32, i32); 8] {
    let r = radius;
    [(-r, 0), (r, 0), (0, -r), (0, r), (-r, -r), (r, -r), (-r, r), (r, r)]
}

impl Surface for RasterSurface {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let width = rect.width.round();
        let height = rect.height.round();
        if width < 1.0 || height < 1.0 {
            return;
        }
        let r = imageproc::rect::Rect::at(rect.x.round() as i32, rect.y.round() as i32)
            .of_size(width as u32, height as u32);
        draw_filled_rect_mut(&mut self.image, r, color);
    }

    fn draw_image(&mut self, image: &RgbaImage, rect: Rect) {
        let width = rect.width.round();
        let height = rect.height.round();
        if width < 1.0 || height < 1.0 {
            return;
        }
        let scaled = imageops::resize(image, width as u32, height as u32, FilterType::Triangle);
        imageops::overlay(&mut self.image, &scaled, rect.x.round() as i64, rect.y.round() as i64);
    }

    fn draw_text_centered(&mut self, text: &str, center_x: f32, top: f32, style: &TextStyle) {
        let Some(font) = &self.font else {
            return;
        };
        if text.is_empty() || style.size < 1.0 {
            return;
        }

        let scale = Scale::uniform(style.size);
        let (text_width, _) = text_size(scale, font, text);
        let x = (center_x - text_width as f32 / 2.0).round() as i32;
        let y = top.round() as i32;

        if let Some(stroke) = style.stroke {
            let radius = (style.size / 16.0).ceil().max(1.0) as i32;
            for (dx, dy) in stroke_offsets(radius) {
                draw_text_mut(&mut self.image, stroke, x + dx, y + dy, scale, font, text);
            }
        }

        // Faux bold: overstrike with a small horizontal offset.
        let passes = if style.bold { (style.size / 24.0).ceil().max(1.0) as i32 } else { 0 };
        for dx in 0..=passes {
            draw_text_mut(&mut self.image, style.color, x + dx, y, scale, font, text);
        }
    }
}
