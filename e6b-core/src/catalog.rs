//! The set of problems a trainer can ask.

use std::collections::BTreeMap;

use rand::seq::IteratorRandom;
use rand::{Rng, RngCore};

use crate::params::{
    ClimbParams, DensityAltitudeParams, DistanceSpeedTimeParams, FuelParams, OffCourseParams,
    RunwayWindParams, TrueAltitudeParams, WindProblemParams,
};
use crate::problems::{altitude, calc, convert, misc, navigation, wind};
use crate::{GeneratorConfig, Problem};

#[cfg(test)]
mod tests;

/// Which side of the E6B a problem is worked on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Wind,
    Calculator,
}

/// How much of the E6B a problem expects the student to know.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Basic,
    Advanced,
}

/// Identifies a problem family in the catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKey {
    Heading,
    Groundspeed,
    WindAloft,
    RunwayHeadwind,
    RunwayCrosswind,
    Speed,
    Time,
    Distance,
    FuelRate,
    Fuel,
    Endurance,
    DensityAltitude,
    TrueAirspeed,
    TrueAltitude,
    Climb,
    OffCourse,
    Conversion,
    Misc,
}

impl ProblemKey {
    #[must_use]
    pub fn side(self) -> Side {
        match self {
            Self::Heading
            | Self::Groundspeed
            | Self::WindAloft
            | Self::RunwayHeadwind
            | Self::RunwayCrosswind => Side::Wind,
            _ => Side::Calculator,
        }
    }

    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Heading
            | Self::Groundspeed
            | Self::Speed
            | Self::Time
            | Self::Distance
            | Self::FuelRate
            | Self::Fuel
            | Self::Endurance => Level::Basic,
            _ => Level::Advanced,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str { self.into() }

    fn generator(self) -> Generator {
        match self {
            Self::Heading => |rng, _| wind::heading(&WindProblemParams::generate(rng)),
            Self::Groundspeed => |rng, _| wind::groundspeed(&WindProblemParams::generate(rng)),
            Self::WindAloft => |rng, _| wind::wind_aloft(&WindProblemParams::generate(rng)),
            Self::RunwayHeadwind => {
                |rng, _| wind::runway_headwind(&RunwayWindParams::generate(rng))
            }
            Self::RunwayCrosswind => {
                |rng, _| wind::runway_crosswind(&RunwayWindParams::generate(rng))
            }
            Self::Speed => |rng, _| calc::speed(&DistanceSpeedTimeParams::generate(rng)),
            Self::Time => |rng, _| calc::time(&DistanceSpeedTimeParams::generate(rng)),
            Self::Distance => |rng, _| calc::distance(&DistanceSpeedTimeParams::generate(rng)),
            Self::FuelRate => |rng, _| calc::fuel_rate(&FuelParams::generate(rng)),
            Self::Fuel => |rng, _| calc::fuel(&FuelParams::generate(rng)),
            Self::Endurance => |rng, _| calc::endurance(&FuelParams::generate(rng)),
            Self::DensityAltitude => |rng, config| {
                altitude::density_altitude(&DensityAltitudeParams::generate(
                    rng,
                    &config.atmosphere,
                ))
            },
            Self::TrueAirspeed => |rng, config| {
                altitude::true_airspeed(&DensityAltitudeParams::generate(rng, &config.atmosphere))
            },
            Self::TrueAltitude => |rng, config| {
                let params = TrueAltitudeParams::generate(rng, &config.atmosphere, config.rounding);
                altitude::true_altitude(&params, config.rounding)
            },
            Self::Climb => |rng, _| {
                let params = ClimbParams::generate(rng);
                if rng.random_bool(0.5) {
                    altitude::climb_gradient(&params)
                } else {
                    altitude::climb_rate(&params)
                }
            },
            Self::OffCourse => |rng, config| {
                let params = OffCourseParams::generate(rng, config.rounding);
                if rng.random_bool(0.5) {
                    navigation::heading_error(&params)
                } else {
                    navigation::destination_correction(&params)
                }
            },
            Self::Conversion => |rng, config| convert::random(rng, config.rounding),
            Self::Misc => |rng, config| misc::random(rng, config.rounding),
        }
    }
}

/// Draws the parameters of one problem family and renders the problem.
pub type Generator = fn(&mut dyn RngCore, &GeneratorConfig) -> Problem;

/// Narrows a catalog to one side or level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub side:  Option<Side>,
    /// Keeps problems up to this level, so `Advanced` also keeps the basic problems.
    pub level: Option<Level>,
}

impl CatalogFilter {
    #[must_use]
    pub fn matches(&self, key: ProblemKey) -> bool {
        self.side.is_none_or(|side| key.side() == side)
            && self.level.is_none_or(|level| key.level() <= level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("problem {0} is not in this catalog")]
    NotInCatalog(ProblemKey),
    #[error("the catalog has no problems to choose from")]
    Empty,
}

/// An immutable mapping from problem keys to their generators.
#[derive(Clone)]
pub struct Catalog {
    entries: BTreeMap<ProblemKey, Generator>,
}

impl Catalog {
    /// Every problem family.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: <ProblemKey as strum::IntoEnumIterator>::iter()
                .map(|key| (key, key.generator()))
                .collect(),
        }
    }

    /// The entries of this catalog that match `filter`.
    #[must_use]
    pub fn filtered(&self, filter: CatalogFilter) -> Self {
        let entries: BTreeMap<_, _> = self
            .entries
            .iter()
            .filter(|(key, _)| filter.matches(**key))
            .map(|(&key, &generator)| (key, generator))
            .collect();

        if entries.is_empty() {
            tracing::warn!(?filter, "no problems match the filter");
        }

        Self { entries }
    }

    pub fn keys(&self) -> impl Iterator<Item = ProblemKey> + '_ { self.entries.keys().copied() }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn contains(&self, key: ProblemKey) -> bool { self.entries.contains_key(&key) }

    /// Generates a problem for `key`, or for a uniformly random entry if `key` is `None`.
    pub fn generate(
        &self,
        key: Option<ProblemKey>,
        rng: &mut dyn RngCore,
        config: &GeneratorConfig,
    ) -> Result<Problem, CatalogError> {
        let (key, generator) = match key {
            Some(key) => {
                let generator =
                    self.entries.get(&key).ok_or(CatalogError::NotInCatalog(key))?;
                (key, *generator)
            }
            None => {
                let Some((&key, &generator)) = self.entries.iter().choose(rng) else {
                    tracing::warn!("cannot choose a problem from an empty catalog");
                    return Err(CatalogError::Empty);
                };
                (key, generator)
            }
        };

        let problem = generator(rng, config);
        tracing::debug!(%key, prompt = %problem.prompt, "generated problem");
        Ok(problem)
    }
}

impl Default for Catalog {
    fn default() -> Self { Self::standard() }
}
