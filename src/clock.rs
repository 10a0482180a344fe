/*
 * Frame Clock Module
 *
 * Turns the host's per-refresh callbacks into ticks for a `FrameHandler`.
 * The first frame after `start` only establishes the time origin, so every
 * delivered tick carries a real inter-frame interval. Errors returned by the
 * handler are logged and the clock keeps running.
 */

use crate::error::Result;

pub trait FrameHandler {
    fn tick(&mut self, timestamp_ms: f64, delta_ms: f64) -> Result<()>;

    fn close(&mut self, _timestamp_ms: f64, _delta_ms: f64) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FrameClock {
    running: bool,
    last_timestamp: Option<f64>,
    last_delta: f64,
    ticks_delivered: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticks_delivered(&self) -> u64 {
        self.ticks_delivered
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_timestamp = None;
            log::debug!("frame clock started");
        }
    }

    /// Called by the host once per display refresh.
    pub fn frame<H: FrameHandler + ?Sized>(&mut self, timestamp_ms: f64, handler: &mut H) {
        if !self.running {
            return;
        }

        let Some(previous) = self.last_timestamp.replace(timestamp_ms) else {
            return;
        };

        let delta_ms = timestamp_ms - previous;
        self.last_delta = delta_ms;
        self.ticks_delivered += 1;

        if let Err(err) = handler.tick(timestamp_ms, delta_ms) {
            log::error!("tick at {:.1} ms failed: {}", timestamp_ms, err);
        }
    }

    /// Stops the clock and notifies the handler once.
    pub fn stop<H: FrameHandler + ?Sized>(&mut self, handler: &mut H) {
        if !self.running {
            return;
        }
        self.running = false;

        let timestamp_ms = self.last_timestamp.unwrap_or(0.0);
        if let Err(err) = handler.close(timestamp_ms, self.last_delta) {
            log::error!("close at {:.1} ms failed: {}", timestamp_ms, err);
        }
        log::debug!("frame clock stopped after {} ticks", self.ticks_delivered);
    }
}
