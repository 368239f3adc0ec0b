//! A surface that records calls instead of drawing.
//!
//! Used to check exactly what a render pass asked of its surface.

use super::state::Color;
use super::surface::DrawingSurface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    SetBackingSize(u32, u32),
    SetDisplaySize(f32, f32),
    SetTransformScale(f32),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    ClosePath,
    Stroke,
    SetFillColor(Color),
    Fill,
}

impl SurfaceCommand {
    /// True for commands that change pixel content
    pub fn paints(&self) -> bool {
        matches!(self, Self::Stroke | Self::Fill)
    }
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    backing: (u32, u32),
    display: Option<(f32, f32)>,
    scale: f32,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// A fresh surface with the given intrinsic size and no displayed size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            backing: (width, height),
            display: None,
            scale: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn transform_scale(&self) -> f32 {
        self.scale
    }

    /// Number of fill calls, one per drawn glyph
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| **command == SurfaceCommand::Fill)
            .count()
    }

    /// Whether any recorded call changed pixel content
    pub fn painted(&self) -> bool {
        self.commands.iter().any(SurfaceCommand::paints)
    }
}

impl DrawingSurface for RecordingSurface {
    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
        self.scale = 1.0;
        self.commands.push(SurfaceCommand::SetBackingSize(width, height));
    }

    fn display_size(&self) -> Option<(f32, f32)> {
        self.display
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display = Some((width, height));
        self.commands.push(SurfaceCommand::SetDisplaySize(width, height));
    }

    fn set_transform_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.commands.push(SurfaceCommand::SetTransformScale(scale));
    }

    fn begin_path(&mut self) {
        self.commands.push(SurfaceCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(SurfaceCommand::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.commands.push(SurfaceCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(SurfaceCommand::Stroke);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SurfaceCommand::SetFillColor(color));
    }

    fn fill(&mut self) {
        self.commands.push(SurfaceCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_resize_resets_scale() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.set_transform_scale(2.0);
        surface.set_backing_size(20, 20);

        assert_eq!(surface.transform_scale(), 1.0);
        assert_eq!(surface.backing_size(), (20, 20));
    }

    #[test]
    fn test_painted_only_after_stroke_or_fill() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.begin_path();
        surface.move_to(1.0, 1.0);
        assert!(!surface.painted());

        surface.fill();
        assert!(surface.painted());
        assert_eq!(surface.fill_count(), 1);

        surface.clear_commands();
        assert!(surface.commands().is_empty());
    }
}
