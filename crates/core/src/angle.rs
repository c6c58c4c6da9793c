/// The value of `pi` used by the reference pendulum dataset.
///
/// This is a truncated literal, not [`std::f64::consts::PI`]. Trajectories
/// are only reproducible against the reference data when wrapped with this
/// exact value, so it stays the default and callers opt in to full precision.
#[allow(clippy::approx_constant)]
pub const REFERENCE_PI: f64 = 3.141592;

/// Largest number of whole turns [`wrap_angle`] is expected to fold.
///
/// Callers reject angles beyond `MAX_WRAP_TURNS * 2 * pi` before wrapping.
/// Far past this bound the fold takes one iteration per turn, and once
/// `theta - 2 * pi == theta` it never finishes.
pub const MAX_WRAP_TURNS: f64 = 4096.0;

/// Returns `true` if `theta` is finite and within [`MAX_WRAP_TURNS`] turns of zero.
#[must_use]
pub fn is_wrappable(theta: f64, pi: f64) -> bool {
    theta.is_finite() && theta.abs() <= MAX_WRAP_TURNS * 2.0 * pi
}

/// Folds an angle into the half-open interval `(-pi, pi]`.
///
/// The angle is shifted by whole turns of `2 * pi`, one turn at a time, until
/// it lands in range. Repeated subtraction rounds differently from a single
/// `rem_euclid` at the interval edges, and the reference trajectories depend on
/// this rounding.
///
/// An angle of exactly `pi` is kept; an angle of exactly `-pi` becomes `pi`.
///
/// Non-finite angles are returned unchanged. Very large angles take one
/// iteration per turn; see [`is_wrappable`].
#[must_use]
pub fn wrap_angle(theta: f64, pi: f64) -> f64 {
    if !theta.is_finite() {
        return theta;
    }

    let turn = 2.0 * pi;
    let mut theta = theta;
    while theta > pi {
        theta -= turn;
    }
    while theta <= -pi {
        theta += turn;
    }
    theta
}
