/// Fixed-timestep accumulator.
///
/// Wall-clock time is added every frame; once more than one step has
/// built up a single tick is due. Only one tick is released per call, so a
/// slow frame makes the simulation fall behind instead of bursting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepClock {
    step_seconds: f64,
    accumulator: f64,
}

impl StepClock {
    pub fn new(sim_fps: f64) -> Self {
        contract!(
            sim_fps.is_finite() && sim_fps > 0.0,
            "step clock needs a positive rate, got {}",
            sim_fps
        );
        Self {
            step_seconds: 1.0 / sim_fps,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step_seconds(&self) -> f64 {
        self.step_seconds
    }

    #[inline]
    pub fn accumulated(&self) -> f64 {
        self.accumulator
    }

    /// Add `elapsed_seconds` and report whether a tick is due.
    /// Negative or non-finite input is ignored.
    pub fn accumulate(&mut self, elapsed_seconds: f64) -> bool {
        if elapsed_seconds.is_finite() && elapsed_seconds > 0.0 {
            self.accumulator += elapsed_seconds;
        }
        if self.accumulator > self.step_seconds {
            self.accumulator -= self.step_seconds;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
