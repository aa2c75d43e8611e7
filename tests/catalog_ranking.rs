use strain_thc_core::catalog::{filter_by_average, rank_by_average, CatalogError};
use strain_thc_core::RangeGenerator;

const CATALOG: &[&str] = &[
    "Sour Diesel",
    "OG Kush",
    "Blue Dream",
    "Granddaddy Purple",
    "Jack Herer",
    "Girl Scout Cookies",
];

fn names(entries: &[strain_thc_core::catalog::CatalogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.key.as_str()).collect()
}

#[test]
fn rank_orders_by_average_desc_then_key() {
    let generator = RangeGenerator::default();
    let ranked = rank_by_average(&generator, CATALOG.iter().copied());

    assert_eq!(
        names(&ranked),
        vec![
            "Granddaddy Purple",
            "Blue Dream",
            "Jack Herer",
            "Girl Scout Cookies",
            "OG Kush",
            "Sour Diesel",
        ]
    );
}

#[test]
fn rank_ignores_input_order() {
    let generator = RangeGenerator::default();
    let forward = rank_by_average(&generator, CATALOG.iter().copied());
    let reversed = rank_by_average(&generator, CATALOG.iter().rev().copied());
    assert_eq!(forward, reversed);
}

#[test]
fn filter_keeps_inclusive_bounds() {
    let generator = RangeGenerator::default();
    let kept = filter_by_average(&generator, CATALOG.iter().copied(), 22.4, 23.5).unwrap();

    assert_eq!(
        names(&kept),
        vec!["Blue Dream", "Jack Herer", "Girl Scout Cookies", "OG Kush"]
    );
    assert!(kept.iter().all(|e| (22.4..=23.5).contains(&e.view.average)));
}

#[test]
fn filter_rejects_inverted_or_nan_bounds() {
    let generator = RangeGenerator::default();

    match filter_by_average(&generator, CATALOG.iter().copied(), 25.0, 21.0) {
        Err(CatalogError::InvalidBounds { .. }) => {}
        other => panic!("expected invalid bounds error, got {other:?}"),
    }

    assert!(filter_by_average(&generator, CATALOG.iter().copied(), f64::NAN, 26.5).is_err());
}

#[test]
fn empty_catalog_is_empty() {
    let generator = RangeGenerator::default();
    let ranked = rank_by_average(&generator, Vec::<String>::new());
    assert!(ranked.is_empty());
}
