//! Per-frame counters for the renderer.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame times kept for averaging
const HISTORY: usize = 120;

/// Tracks what each frame drew and how long it took.
pub struct RenderMetrics {
    frame_times: VecDeque<Duration>,
    frame_start: Instant,
    frames: u64,
    pub glyphs: usize,
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(HISTORY),
            frame_start: Instant::now(),
            frames: 0,
            glyphs: 0,
        }
    }

    /// Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
        self.glyphs = 0;
    }

    /// Call at the end of each frame.
    pub fn end_frame(&mut self, glyphs: usize) {
        self.glyphs = glyphs;
        self.frames += 1;
        self.frame_times.push_back(self.frame_start.elapsed());
        if self.frame_times.len() > HISTORY {
            self.frame_times.pop_front();
        }
    }

    /// Frames rendered since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Average frame time in milliseconds over the recent history.
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    pub fn last_frame_time_ms(&self) -> f32 {
        self.frame_times
            .back()
            .map(|d| d.as_secs_f32() * 1000.0)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_metrics_are_zero() {
        let metrics = RenderMetrics::new();
        assert_eq!(metrics.frames(), 0);
        assert_eq!(metrics.avg_frame_time_ms(), 0.0);
        assert_eq!(metrics.last_frame_time_ms(), 0.0);
    }

    #[test]
    fn test_frame_recording() {
        let mut metrics = RenderMetrics::new();

        metrics.begin_frame();
        thread::sleep(Duration::from_millis(1));
        metrics.end_frame(40);

        assert_eq!(metrics.frames(), 1);
        assert_eq!(metrics.glyphs, 40);
        assert!(metrics.last_frame_time_ms() >= 1.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut metrics = RenderMetrics::new();
        for _ in 0..(HISTORY + 10) {
            metrics.begin_frame();
            metrics.end_frame(0);
        }

        assert_eq!(metrics.frames(), (HISTORY + 10) as u64);
        assert_eq!(metrics.frame_times.len(), HISTORY);
    }
}
