use rand::SeedableRng;
use rand::rngs::SmallRng;
use strum::IntoEnumIterator;

use super::{Catalog, CatalogError, CatalogFilter, Level, ProblemKey, Side};
use crate::GeneratorConfig;

#[test]
fn standard_catalog_has_every_key() {
    let catalog = Catalog::standard();
    assert_eq!(catalog.len(), ProblemKey::iter().count());
    assert!(catalog.keys().eq(ProblemKey::iter()));
}

#[test]
fn every_key_renders_complete_problems() {
    let catalog = Catalog::standard();
    let config = GeneratorConfig::default();
    let mut rng = SmallRng::seed_from_u64(2024);

    for key in ProblemKey::iter() {
        for _ in 0..50 {
            let problem = catalog.generate(Some(key), &mut rng, &config).unwrap();
            assert!(problem.is_complete(), "{key}: {problem:?}");
        }
    }
}

#[test]
fn same_seed_same_problems() {
    let catalog = Catalog::standard();
    let config = GeneratorConfig::default();
    let draw = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..20)
            .map(|_| catalog.generate(None, &mut rng, &config).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(draw(17), draw(17));
    assert_ne!(draw(17), draw(18));
}

#[test]
fn key_names_and_metadata() {
    assert_eq!(ProblemKey::WindAloft.to_string(), "wind_aloft");
    assert_eq!(ProblemKey::FuelRate.name(), "fuel_rate");
    assert_eq!("runway_crosswind".parse::<ProblemKey>().ok(), Some(ProblemKey::RunwayCrosswind));
    assert!("bogus".parse::<ProblemKey>().is_err());

    assert_eq!(ProblemKey::RunwayHeadwind.side(), Side::Wind);
    assert_eq!(ProblemKey::RunwayHeadwind.level(), Level::Advanced);
    assert_eq!(ProblemKey::Endurance.side(), Side::Calculator);
    assert_eq!(ProblemKey::Endurance.level(), Level::Basic);
    assert_eq!(ProblemKey::OffCourse.level(), Level::Advanced);
}

#[test]
fn filter_by_side_and_level() {
    let basic_wind = Catalog::standard()
        .filtered(CatalogFilter { side: Some(Side::Wind), level: Some(Level::Basic) });
    assert_eq!(basic_wind.keys().collect::<Vec<_>>(), [ProblemKey::Heading, ProblemKey::Groundspeed]);

    let advanced_wind = Catalog::standard()
        .filtered(CatalogFilter { side: Some(Side::Wind), level: Some(Level::Advanced) });
    assert_eq!(advanced_wind.len(), 5);

    let calculator = Catalog::standard()
        .filtered(CatalogFilter { side: Some(Side::Calculator), level: None });
    assert_eq!(calculator.len(), 13);
    assert!(calculator.keys().all(|key| key.side() == Side::Calculator));
}

#[test]
fn filtered_out_key_is_rejected() {
    let catalog = Catalog::standard()
        .filtered(CatalogFilter { side: Some(Side::Wind), level: None });
    let mut rng = SmallRng::seed_from_u64(0);
    let err = catalog
        .generate(Some(ProblemKey::Fuel), &mut rng, &GeneratorConfig::default())
        .unwrap_err();
    assert_eq!(err, CatalogError::NotInCatalog(ProblemKey::Fuel));
    assert_eq!(err.to_string(), "problem fuel is not in this catalog");
}

#[test]
fn random_pick_stays_in_catalog() {
    let catalog = Catalog::standard()
        .filtered(CatalogFilter { side: Some(Side::Calculator), level: Some(Level::Basic) });
    let mut rng = SmallRng::seed_from_u64(6);
    for _ in 0..50 {
        let problem = catalog.generate(None, &mut rng, &GeneratorConfig::default()).unwrap();
        assert!(problem.is_complete());
    }
}

#[test]
fn empty_catalog() {
    let mut rng = SmallRng::seed_from_u64(0);
    let filter = CatalogFilter { side: Some(Side::Wind), level: None };
    let none = Catalog::standard().filtered(filter).filtered(CatalogFilter {
        side:  Some(Side::Calculator),
        level: None,
    });
    assert!(none.is_empty());
    assert_eq!(
        none.generate(None, &mut rng, &GeneratorConfig::default()),
        Err(CatalogError::Empty)
    );
}
