//! Unit types and the closed-form formulas behind the E6B flight computer.

mod units;
pub use num_traits::Zero;
pub use units::*;

pub mod atmosphere;
pub use atmosphere::AtmosphereModel;

pub mod convert;

pub mod rounding;
pub use rounding::{RoundingPolicy, round_half_up};

pub mod wind;
pub use wind::WindTriangle;

#[cfg(test)]
mod tests;

pub trait Between<U>: PartialOrd<U> {
    fn between_inclusive(&self, min: &U, max: &U) -> bool { self >= min && self <= max }
}

impl<T: PartialOrd<U>, U> Between<U> for T {}
