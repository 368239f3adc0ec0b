//! Frame renderer for the flock.
//!
//! The renderer reads `WorldSnapshot`s through a `WorldProvider` and never
//! touches live simulation data. It paints onto any `DrawingSurface`: the
//! software `RasterCanvas` for image output, or `RecordingSurface` to
//! inspect the calls a frame makes.

pub mod canvas;
pub mod composer;
pub mod metrics;
pub mod recording;
pub mod state;
pub mod surface;
pub mod triangle;
pub mod viewport;

pub use canvas::RasterCanvas;
pub use composer::{denormalize, FrameComposer, FrameStats};
pub use metrics::RenderMetrics;
pub use recording::{RecordingSurface, SurfaceCommand};
pub use state::Color;
pub use surface::DrawingSurface;
pub use triangle::{draw_triangle, triangle_vertices};
pub use viewport::{configure_viewport, effective_pixel_ratio, Viewport};

use crate::core::config::RenderConfig;
use crate::simulation::WorldProvider;

/// Composer plus frame metrics, bound to one configured viewport.
pub struct Renderer {
    composer: FrameComposer,
    viewport: Viewport,
    metrics: RenderMetrics,
}

impl Renderer {
    /// Configure `surface` for the device pixel ratio and get ready to draw.
    pub fn new<S>(surface: &mut S, config: &RenderConfig) -> Self
    where
        S: DrawingSurface + ?Sized,
    {
        Self {
            composer: FrameComposer::from_config(config),
            viewport: configure_viewport(surface, config.pixel_ratio),
            metrics: RenderMetrics::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn composer(&self) -> &FrameComposer {
        &self.composer
    }

    pub fn metrics(&self) -> &RenderMetrics {
        &self.metrics
    }

    /// Render one frame of the provider's current snapshot.
    pub fn render<S, P>(&mut self, surface: &mut S, provider: &P) -> FrameStats
    where
        S: DrawingSurface + ?Sized,
        P: WorldProvider + ?Sized,
    {
        self.metrics.begin_frame();
        let stats = self.composer.compose(surface, &self.viewport, provider);
        self.metrics.end_frame(stats.glyphs);
        stats
    }
}
