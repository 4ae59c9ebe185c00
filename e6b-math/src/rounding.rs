//! Rounding rules used when reading values off the E6B scales.

#[cfg(test)]
mod tests;

/// Rounds to the nearest integer, with ties rounding towards positive infinity.
///
/// This differs from [`f64::round`] for negative ties: `-2.5` rounds to `-2`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 { (value + 0.5).floor() + 0. }

/// Rounds to the nearest multiple of `step`, with ties rounding up.
///
/// Use [`round_to_fraction`] for steps smaller than one,
/// since a step like `0.1` is not exactly representable.
#[must_use]
pub fn round_to(value: f64, step: f64) -> f64 { round_half_up(value / step) * step }

/// Rounds to the nearest `1 / denominator`, with ties rounding up.
#[must_use]
pub fn round_to_fraction(value: f64, denominator: f64) -> f64 {
    round_half_up(value * denominator) / denominator
}

/// How "approximately" a value is read off a slide-rule scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Keep about two significant digits:
    /// values above 10,000 round to the nearest 1,000,
    /// above 1,000 to the nearest 100,
    /// above 100 to the nearest 10,
    /// and anything else to the nearest integer.
    #[default]
    Magnitude,
    /// Always round to the nearest integer.
    Nearest,
}

impl RoundingPolicy {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Nearest => round_half_up(value),
            Self::Magnitude => {
                if value > 10_000. {
                    round_to(value, 1000.)
                } else if value > 1000. {
                    round_to(value, 100.)
                } else if value > 100. {
                    round_to(value, 10.)
                } else {
                    round_half_up(value)
                }
            }
        }
    }
}
