//! Native frame scheduler
//!
//! Stands in for `requestAnimationFrame`: schedules a frame while the
//! simulator is running and keeps rescheduling until `frame()` says stop or
//! the frame cap is hit.

use crate::sim::Simulator;

/// Fixed-cap frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLoop {
    /// Hard limit on frames per `run`
    pub max_frames: u64,
}

impl FrameLoop {
    pub fn new(max_frames: u64) -> Self {
        Self { max_frames }
    }

    /// Run frames until the simulator stops or the cap is reached
    pub fn run(&self, sim: &mut Simulator) -> u64 {
        self.run_with(sim, |_, _| {})
    }

    /// Like `run`, calling `before_frame(sim, frame_index)` ahead of each frame
    ///
    /// The hook is where a host injects pointer events or control calls. A
    /// `stop()` issued from the hook still lets that frame run.
    pub fn run_with<F>(&self, sim: &mut Simulator, mut before_frame: F) -> u64
    where
        F: FnMut(&mut Simulator, u64),
    {
        let mut frames = 0;
        let mut scheduled = sim.is_running();

        while scheduled && frames < self.max_frames {
            before_frame(sim, frames);
            scheduled = sim.frame();
            frames += 1;
        }

        log::debug!("Frame loop ran {} frames", frames);
        frames
    }
}
