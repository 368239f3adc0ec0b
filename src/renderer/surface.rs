//! The drawing surface the renderer paints on.
//!
//! Modelled on a browser 2-D canvas: an element with a backing bitmap, an
//! optional displayed (CSS) size, a uniform transform scale, and a path
//! API. Every render routine takes the surface as an explicit parameter.

use super::state::Color;

pub trait DrawingSurface {
    /// Backing bitmap resolution in device pixels.
    fn backing_size(&self) -> (u32, u32);

    /// Resize the backing bitmap. Like a canvas element, this discards the
    /// pixel content and resets the transform to identity.
    fn set_backing_size(&mut self, width: u32, height: u32);

    /// Displayed size in logical pixels, if one has been set.
    fn display_size(&self) -> Option<(f32, f32)>;

    fn set_display_size(&mut self, width: f32, height: f32);

    /// Set a uniform scale from logical units to device pixels,
    /// replacing any previous scale.
    fn set_transform_scale(&mut self, scale: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);

    /// Outline the current path in the stroke color (black).
    fn stroke(&mut self);

    fn set_fill_color(&mut self, color: Color);

    /// Fill the current path with the fill color, non-zero winding.
    fn fill(&mut self);
}
