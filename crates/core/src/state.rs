/// State of a second-order system: a generalized angle and its rate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Angle (rad).
    pub theta: f64,

    /// Angular velocity (rad/s).
    pub omega: f64,
}

impl State {
    /// Creates a state from an angle and an angular velocity.
    #[must_use]
    pub fn new(theta: f64, omega: f64) -> Self {
        Self { theta, omega }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.omega.is_finite()
    }
}

/// A single observation emitted by a simulation driver.
///
/// Field order matches the trajectory file record: `time,omega,theta`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub time: f64,
    pub omega: f64,
    pub theta: f64,
}

impl Sample {
    /// Creates a sample of `state` observed at `time`.
    #[must_use]
    pub fn new(time: f64, state: State) -> Self {
        Self {
            time,
            omega: state.omega,
            theta: state.theta,
        }
    }

    /// Returns the observed state.
    #[must_use]
    pub fn state(&self) -> State {
        State::new(self.theta, self.omega)
    }
}
