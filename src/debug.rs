/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame metrics
 * shown in the UI:
 * - FPS (frames per second)
 * - Frame time as reported by the frame clock
 * - Number of visible boids (written by the view, hence the mutex)
 */

use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub visible_boids: Arc<Mutex<usize>>,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            visible_boids: Arc::new(Mutex::new(0)),
        }
    }
}

impl DebugInfo {
    pub fn record_frame(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.fps = (1000.0 / delta_ms) as f32;
            self.frame_time = Duration::from_secs_f64(delta_ms / 1000.0);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_boids.lock().map(|count| *count).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_frame() {
        let mut info = DebugInfo::default();
        info.record_frame(20.0);
        assert_eq!(info.fps, 50.0);
        assert_eq!(info.frame_time, Duration::from_millis(20));

        // A zero interval leaves the previous values alone
        info.record_frame(0.0);
        assert_eq!(info.fps, 50.0);
    }

    #[test]
    fn test_visible_count() {
        let info = DebugInfo::default();
        *info.visible_boids.lock().unwrap() = 12;
        assert_eq!(info.visible_count(), 12);
    }
}
