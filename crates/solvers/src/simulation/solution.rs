use pendulum_core::State;

/// Summary of a completed simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Number of integration steps taken.
    pub steps: usize,

    /// Number of samples accepted by the sink.
    pub samples: usize,

    /// Time of the final state.
    pub final_time: f64,

    /// State after the final step, with the angle wrapped.
    pub final_state: State,
}
