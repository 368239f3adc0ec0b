//! Software canvas backed by an RGBA8 image.
//!
//! Implements just enough of a 2-D canvas for glyph rendering: straight
//! path segments, non-zero fill, hairline stroke, a uniform transform
//! scale and source-over blending. Non-finite path points are ignored the
//! same way a browser canvas ignores them.

use std::path::Path;

use glam::Vec2;
use image::{Rgba, RgbaImage};

use super::state::Color;
use super::surface::DrawingSurface;
use crate::core::error::Result;

#[derive(Debug, Clone, Default)]
struct Subpath {
    points: Vec<Vec2>,
    closed: bool,
}

pub struct RasterCanvas {
    pixels: RgbaImage,
    display: Option<(f32, f32)>,
    scale: f32,
    subpaths: Vec<Subpath>,
    fill_color: Color,
    stroke_color: Color,
}

impl RasterCanvas {
    /// A transparent canvas with the given intrinsic size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            display: None,
            scale: 1.0,
            subpaths: Vec::new(),
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
        }
    }

    /// Overwrite every pixel with `color`
    pub fn clear(&mut self, color: Color) {
        let rgba = Rgba(color.to_rgba8());
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        Color::from_rgba8(self.pixels.get_pixel(x, y).0)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.pixels.save_with_format(path, image::ImageFormat::Png)?;
        tracing::debug!(path = %path.display(), "saved frame");
        Ok(())
    }

    fn to_device(&self, x: f32, y: f32) -> Option<Vec2> {
        if x.is_finite() && y.is_finite() {
            Some(Vec2::new(x, y) * self.scale)
        } else {
            None
        }
    }

    /// Segments of every subpath; closed or not, when `implicit_close`
    fn segments(&self, implicit_close: bool) -> Vec<(Vec2, Vec2)> {
        let mut segments = Vec::new();
        for subpath in &self.subpaths {
            segments.extend(subpath.points.windows(2).map(|pair| (pair[0], pair[1])));

            let (Some(&first), Some(&last)) = (subpath.points.first(), subpath.points.last()) else {
                continue;
            };
            if (subpath.closed || implicit_close) && first != last {
                segments.push((last, first));
            }
        }
        segments
    }

    fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.pixels.width() as i64 || y >= self.pixels.height() as i64 {
            return;
        }

        let pixel = self.pixels.get_pixel_mut(x as u32, y as u32);
        let dst = Color::from_rgba8(pixel.0);

        // Source-over compositing
        let alpha = color.a.clamp(0.0, 1.0);
        let out_a = alpha + dst.a * (1.0 - alpha);
        let mix = |src: f32, dst_c: f32| {
            if out_a > 0.0 {
                (src * alpha + dst_c * dst.a * (1.0 - alpha)) / out_a
            } else {
                0.0
            }
        };

        let out = Color::rgba(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b), out_a);
        *pixel = Rgba(out.to_rgba8());
    }

    /// Hairline segment, clipped to the bitmap first
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        let bounds = Vec2::new(self.pixels.width() as f32, self.pixels.height() as f32);
        let Some((from, to)) = clip_segment(from, to, Vec2::splat(-1.0), bounds + 1.0) else {
            return;
        };

        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let point = from + delta * (step as f32 / steps as f32);
            self.blend(point.x.floor() as i64, point.y.floor() as i64, color);
        }
    }
}

/// Liang-Barsky clip of a segment against an axis-aligned box.
/// Runs in f64 so far-off endpoints do not lose the clipped position.
fn clip_segment(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let (from, to) = (from.as_dvec2(), to.as_dvec2());
    let (min, max) = (min.as_dvec2(), max.as_dvec2());
    let delta = to - from;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let edges = [
        (-delta.x, from.x - min.x),
        (delta.x, max.x - from.x),
        (-delta.y, from.y - min.y),
        (delta.y, max.y - from.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some(((from + delta * t0).as_vec2(), (from + delta * t1).as_vec2()))
}

/// Signed crossing of a horizontal ray from `point` by edge `a -> b`
fn winding_contribution(point: Vec2, a: Vec2, b: Vec2) -> i32 {
    let side = (b.x - a.x) * (point.y - a.y) - (point.x - a.x) * (b.y - a.y);
    if a.y <= point.y {
        if b.y > point.y && side > 0.0 {
            return 1;
        }
    } else if b.y <= point.y && side < 0.0 {
        return -1;
    }
    0
}

impl DrawingSurface for RasterCanvas {
    fn backing_size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
        self.scale = 1.0;
        self.subpaths.clear();
    }

    fn display_size(&self) -> Option<(f32, f32)> {
        self.display
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display = Some((width, height));
    }

    fn set_transform_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let Some(point) = self.to_device(x, y) else {
            return;
        };
        self.subpaths.push(Subpath {
            points: vec![point],
            closed: false,
        });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let Some(point) = self.to_device(x, y) else {
            return;
        };
        match self.subpaths.last_mut() {
            Some(subpath) if !subpath.closed => {
                subpath.points.push(point);
                return;
            }
            _ => {}
        }

        // No open subpath: behave like move_to
        self.subpaths.push(Subpath {
            points: vec![point],
            closed: false,
        });
    }

    fn close_path(&mut self) {
        let Some(subpath) = self.subpaths.last_mut() else {
            return;
        };
        if subpath.closed {
            return;
        }
        subpath.closed = true;

        // Drawing continues from the start of the closed subpath
        let start = subpath.points.first().copied();
        if let Some(start) = start {
            self.subpaths.push(Subpath {
                points: vec![start],
                closed: false,
            });
        }
    }

    fn stroke(&mut self) {
        let color = self.stroke_color;
        for (from, to) in self.segments(false) {
            self.draw_line(from, to, color);
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn fill(&mut self) {
        let edges = self.segments(true);
        if edges.is_empty() {
            return;
        }

        let (mut min, mut max) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
        for (a, _) in &edges {
            min = min.min(*a);
            max = max.max(*a);
        }

        let (width, height) = self.pixels.dimensions();
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil().max(0.0) as u32).min(width);
        let y1 = (max.y.ceil().max(0.0) as u32).min(height);

        let color = self.fill_color;
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let winding: i32 = edges
                    .iter()
                    .map(|&(a, b)| winding_contribution(center, a, b))
                    .sum();
                if winding != 0 {
                    self.blend(x as i64, y as i64, color);
                }
            }
        }
    }
}
