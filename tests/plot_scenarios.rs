use garden_plot::{Plot, PlotError, PLACEHOLDER_ITEM};

fn item_count(width: f64, height: f64) -> usize {
    Plot::new(width, height)
        .items()
        .unwrap_or_else(|e| panic!("{width} x {height} must be countable: {e}"))
        .len()
}

#[test]
fn scenario_two_by_three() {
    let items = Plot::new(2.0, 3.0).items().unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|i| i == PLACEHOLDER_ITEM));
}

#[test]
fn scenario_documented_sizes() {
    assert_eq!(item_count(1.5, 2.0), 3, "area 3.0 → 3");
    assert_eq!(item_count(1.5, 1.5), 3, "area 2.25 → 3");
    assert_eq!(item_count(0.0, 5.0), 0, "zero width → empty");
    assert_eq!(item_count(-1.0, 5.0), 0, "negative area → empty");
}

#[test]
fn length_matches_ceiling_of_area_for_non_negative_sizes() {
    let sizes: [f64; 9] = [0.0, 0.25, 0.5, 1.0, 1.3, 2.0, 2.75, 4.1, 10.0];
    for &width in &sizes {
        for &height in &sizes {
            let expected = (width * height).ceil() as usize;
            assert_eq!(
                item_count(width, height),
                expected,
                "{width} x {height} must yield ceil(area) items"
            );
        }
    }
}

#[test]
fn repeated_calls_agree() {
    let plot = Plot::new(3.3, 1.1);
    let first = plot.items().unwrap();
    let second = plot.items().unwrap();
    assert_eq!(first, second);
}

#[test]
fn non_finite_area_is_an_error() {
    for plot in [
        Plot::new(f64::NAN, 1.0),
        Plot::new(1.0, f64::INFINITY),
        Plot::new(f64::MAX, f64::MAX),
        Plot::new(0.0, f64::INFINITY),
    ] {
        assert!(
            matches!(plot.items(), Err(PlotError::InvalidSpotCount { .. })),
            "{plot:?} must not produce items"
        );
    }
}

#[test]
fn plot_serializes_its_dimensions() {
    let json = serde_json::to_value(Plot::new(1.5, 2.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "width": 1.5, "height": 2.0 }));
}

#[test]
fn area_too_large_to_hold_is_an_error() {
    let result = Plot::new(1e9, 1e9).items();
    assert!(matches!(result, Err(PlotError::InvalidSpotCount { .. })));
}
