//! Viewport configuration: device-pixel-ratio aware backing resolution.
//!
//! The backing bitmap is sized in device pixels while the displayed size
//! stays at the logical size, and a matching transform scale lets drawing
//! code keep working in logical units.

use super::surface::DrawingSurface;

/// Largest backing bitmap side, in device pixels, a config may ask for
pub const MAX_BACKING_SIDE: u32 = 16384;

/// Logical drawing area established by [`configure_viewport`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical width in CSS pixels
    pub width: f32,
    /// Logical height in CSS pixels
    pub height: f32,
    /// Device pixels per logical pixel
    pub scale: f32,
}

impl Viewport {
    /// Backing resolution this viewport maps to
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.scale).round() as u32,
            (self.height * self.scale).round() as u32,
        )
    }
}

/// Pixel ratio to use for a host-reported value.
///
/// A missing, zero, negative or non-finite ratio counts as no signal and
/// falls back to 1.
pub fn effective_pixel_ratio(device_pixel_ratio: Option<f32>) -> f32 {
    match device_pixel_ratio {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
        _ => 1.0,
    }
}

/// Scale the surface's backing bitmap by the device pixel ratio.
///
/// The logical size is the surface's displayed size when one is set,
/// otherwise its current backing size. Both the displayed size and the
/// transform are set absolutely, so configuring an already configured
/// surface with the same ratio changes nothing.
pub fn configure_viewport<S>(surface: &mut S, device_pixel_ratio: Option<f32>) -> Viewport
where
    S: DrawingSurface + ?Sized,
{
    let (width, height) = surface.display_size().unwrap_or_else(|| {
        let (w, h) = surface.backing_size();
        (w as f32, h as f32)
    });

    let viewport = Viewport {
        width,
        height,
        scale: effective_pixel_ratio(device_pixel_ratio),
    };

    let (backing_width, backing_height) = viewport.backing_size();
    surface.set_backing_size(backing_width, backing_height);
    surface.set_display_size(width, height);
    surface.set_transform_scale(viewport.scale);

    tracing::debug!(
        width,
        height,
        scale = viewport.scale,
        backing_width,
        backing_height,
        "configured viewport"
    );

    viewport
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{RecordingSurface, SurfaceCommand};

    #[test]
    fn test_effective_pixel_ratio() {
        assert_eq!(effective_pixel_ratio(Some(2.0)), 2.0);
        assert_eq!(effective_pixel_ratio(Some(1.5)), 1.5);
        assert_eq!(effective_pixel_ratio(None), 1.0);
        assert_eq!(effective_pixel_ratio(Some(0.0)), 1.0);
        assert_eq!(effective_pixel_ratio(Some(-2.0)), 1.0);
        assert_eq!(effective_pixel_ratio(Some(f32::NAN)), 1.0);
        assert_eq!(effective_pixel_ratio(Some(f32::INFINITY)), 1.0);
    }

    #[test]
    fn test_scales_backing_keeps_display() {
        let mut surface = RecordingSurface::new(300, 150);

        let viewport = configure_viewport(&mut surface, Some(2.0));

        assert_eq!(viewport, Viewport { width: 300.0, height: 150.0, scale: 2.0 });
        assert_eq!(surface.backing_size(), (600, 300));
        assert_eq!(surface.display_size(), Some((300.0, 150.0)));
        assert_eq!(
            surface.commands(),
            &[
                SurfaceCommand::SetBackingSize(600, 300),
                SurfaceCommand::SetDisplaySize(300.0, 150.0),
                SurfaceCommand::SetTransformScale(2.0),
            ]
        );
    }

    #[test]
    fn test_missing_ratio_keeps_logical_size() {
        let mut surface = RecordingSurface::new(640, 480);

        let viewport = configure_viewport(&mut surface, None);

        assert_eq!(viewport.scale, 1.0);
        assert_eq!(surface.backing_size(), (640, 480));
        assert_eq!(surface.display_size(), Some((640.0, 480.0)));
    }

    #[test]
    fn test_reconfigure_does_not_compound() {
        let mut once = RecordingSurface::new(400, 300);
        configure_viewport(&mut once, Some(3.0));

        let mut twice = RecordingSurface::new(400, 300);
        configure_viewport(&mut twice, Some(3.0));
        let viewport = configure_viewport(&mut twice, Some(3.0));

        assert_eq!(twice.backing_size(), once.backing_size());
        assert_eq!(twice.backing_size(), (1200, 900));
        assert_eq!(viewport.width, 400.0);
        assert_eq!(twice.transform_scale(), 3.0);
    }

    #[test]
    fn test_fractional_ratio_rounds_backing() {
        let mut surface = RecordingSurface::new(333, 100);
        configure_viewport(&mut surface, Some(1.5));
        assert_eq!(surface.backing_size(), (500, 150));
    }
}
