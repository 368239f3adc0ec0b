//! Oriented triangle glyph.
//!
//! The nose vertex points along the heading at 1.5× the glyph size; the
//! two tail vertices sit at 1× the size, 120° and 240° around from the nose.

use std::f32::consts::PI;

use glam::Vec2;

use super::state::Color;
use super::surface::DrawingSurface;

/// How much further out the nose sits than the tail vertices
pub const NOSE_EXTENSION: f32 = 1.5;

/// Vertices `[nose, tail_a, tail_b]` of a glyph centered at `center`
pub fn triangle_vertices(center: Vec2, size: f32, rotation: f32) -> [Vec2; 3] {
    let nose = center + Vec2::from_angle(rotation) * size * NOSE_EXTENSION;
    let tail_a = center + Vec2::from_angle(rotation + 2.0 / 3.0 * PI) * size;
    let tail_b = center + Vec2::from_angle(rotation + 4.0 / 3.0 * PI) * size;

    [nose, tail_a, tail_b]
}

/// Outline and fill one glyph. Inputs are not validated; non-finite
/// geometry reaches the surface as-is.
pub fn draw_triangle<S>(surface: &mut S, center: Vec2, size: f32, rotation: f32, fill: Color)
where
    S: DrawingSurface + ?Sized,
{
    let [nose, tail_a, tail_b] = triangle_vertices(center, size, rotation);

    surface.begin_path();
    surface.move_to(nose.x, nose.y);
    surface.line_to(tail_a.x, tail_a.y);
    surface.line_to(tail_b.x, tail_b.y);
    surface.line_to(nose.x, nose.y);

    surface.stroke();
    surface.set_fill_color(fill);
    surface.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{RecordingSurface, SurfaceCommand};
    use proptest::prelude::*;
    use std::f32::consts::TAU;

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 0.01,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    /// Angle difference folded into [0, 2π)
    fn angle_between(from: Vec2, to: Vec2) -> f32 {
        (to.y.atan2(to.x) - from.y.atan2(from.x)).rem_euclid(TAU)
    }

    fn angle_close(actual: f32, expected: f32, epsilon: f32) -> bool {
        let diff = (actual - expected).rem_euclid(TAU);
        diff < epsilon || TAU - diff < epsilon
    }

    #[test]
    fn test_heading_east() {
        let [nose, tail_a, tail_b] = triangle_vertices(Vec2::new(100.0, 100.0), 10.0, 0.0);

        assert_close(nose, Vec2::new(115.0, 100.0));
        assert_close(tail_a, Vec2::new(95.0, 108.66));
        assert_close(tail_b, Vec2::new(95.0, 91.34));
    }

    #[test]
    fn test_heading_south() {
        // Screen y grows downward, so +π/2 points the nose down
        let [nose, _, _] = triangle_vertices(Vec2::ZERO, 2.0, PI / 2.0);
        assert_close(nose, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_draw_issues_closed_path_then_stroke_and_fill() {
        let mut surface = RecordingSurface::new(200, 200);

        draw_triangle(&mut surface, Vec2::new(100.0, 100.0), 10.0, 0.0, Color::BLACK);

        let commands = surface.commands();
        assert_eq!(commands.len(), 8);
        assert_eq!(commands[0], SurfaceCommand::BeginPath);
        assert!(matches!(commands[1], SurfaceCommand::MoveTo(x, y) if x == 115.0 && y == 100.0));
        assert!(matches!(commands[2], SurfaceCommand::LineTo(..)));
        assert!(matches!(commands[3], SurfaceCommand::LineTo(..)));
        assert!(matches!(commands[4], SurfaceCommand::LineTo(x, y) if x == 115.0 && y == 100.0));
        assert_eq!(commands[5], SurfaceCommand::Stroke);
        assert_eq!(commands[6], SurfaceCommand::SetFillColor(Color::BLACK));
        assert_eq!(commands[7], SurfaceCommand::Fill);
    }

    #[test]
    fn test_non_finite_input_reaches_surface() {
        let mut surface = RecordingSurface::new(10, 10);

        draw_triangle(&mut surface, Vec2::new(f32::NAN, 0.0), 1.0, 0.0, Color::BLACK);

        assert!(matches!(surface.commands()[1], SurfaceCommand::MoveTo(x, _) if x.is_nan()));
        assert_eq!(surface.fill_count(), 1);
    }

    proptest! {
        #[test]
        fn prop_vertex_distances(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            size in 0.5f32..100.0,
            rotation in -10.0f32..10.0,
        ) {
            let center = Vec2::new(x, y);
            let [nose, tail_a, tail_b] = triangle_vertices(center, size, rotation);
            let epsilon = 1e-3 * (1.0 + size + x.abs().max(y.abs()) * 1e-2);

            prop_assert!(((nose - center).length() - 1.5 * size).abs() < epsilon);
            prop_assert!(((tail_a - center).length() - size).abs() < epsilon);
            prop_assert!(((tail_b - center).length() - size).abs() < epsilon);
        }

        #[test]
        fn prop_tail_angles(
            size in 1.0f32..100.0,
            rotation in -10.0f32..10.0,
        ) {
            let center = Vec2::new(50.0, -25.0);
            let [nose, tail_a, tail_b] = triangle_vertices(center, size, rotation);

            let a = angle_between(nose - center, tail_a - center);
            let b = angle_between(nose - center, tail_b - center);

            prop_assert!(angle_close(a, 2.0 * PI / 3.0, 1e-3), "tail a at {}", a);
            prop_assert!(angle_close(b, 4.0 * PI / 3.0, 1e-3), "tail b at {}", b);
        }
    }
}
