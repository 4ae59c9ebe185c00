//! Problem text for each family.
//!
//! Every function here renders fixed parameters,
//! so the text can be checked without a random source.

pub mod altitude;
pub mod calc;
pub mod convert;
pub mod misc;
pub mod navigation;
pub mod wind;
