//! Frame composition: one glyph per animal in the current snapshot.

use glam::Vec2;

use super::state::Color;
use super::surface::DrawingSurface;
use super::triangle::draw_triangle;
use super::viewport::Viewport;
use crate::core::config::RenderConfig;
use crate::simulation::{AnimalView, WorldProvider};

/// What a composed frame contained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub glyphs: usize,
}

/// Draws a world snapshot onto a configured viewport.
///
/// Holds no per-frame state; call [`FrameComposer::compose`] as often as
/// the driver wants a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameComposer {
    /// Glyph size as a fraction of the logical viewport width
    pub glyph_scale: f32,
    pub fill: Color,
}

impl Default for FrameComposer {
    fn default() -> Self {
        Self {
            glyph_scale: 0.01,
            fill: Color::BLACK,
        }
    }
}

impl FrameComposer {
    pub fn new(glyph_scale: f32, fill: Color) -> Self {
        Self { glyph_scale, fill }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.glyph_scale, config.fill)
    }

    /// Absolute glyph size for a viewport
    pub fn glyph_size(&self, viewport: &Viewport) -> f32 {
        self.glyph_scale * viewport.width
    }

    /// Draw every animal the provider reports, in provider order
    pub fn compose<S, P>(&self, surface: &mut S, viewport: &Viewport, provider: &P) -> FrameStats
    where
        S: DrawingSurface + ?Sized,
        P: WorldProvider + ?Sized,
    {
        let snapshot = provider.snapshot();
        let size = self.glyph_size(viewport);

        for animal in &snapshot.animals {
            draw_triangle(surface, denormalize(animal, viewport), size, animal.rotation, self.fill);
        }

        tracing::debug!(glyphs = snapshot.animals.len(), size, "composed frame");

        FrameStats {
            glyphs: snapshot.animals.len(),
        }
    }
}

/// Map a normalized position onto the viewport's logical area.
/// Out-of-range positions are passed through unclamped.
pub fn denormalize(animal: &AnimalView, viewport: &Viewport) -> Vec2 {
    Vec2::new(animal.x * viewport.width, animal.y * viewport.height)
}
