use gapchart_rs::api::OrdinalColorScale;
use gapchart_rs::core::{Continent, LinearScale, LogScale, RadiusScale};
use proptest::prelude::*;

const CONTINENTS: [Continent; 5] = [
    Continent::Africa,
    Continent::Americas,
    Continent::Asia,
    Continent::Europe,
    Continent::Oceania,
];

proptest! {
    #[test]
    fn inverted_linear_scale_is_strictly_decreasing(
        a in 0.0f64..90.0,
        b in 0.0f64..90.0,
    ) {
        prop_assume!(a < b);
        let scale = LinearScale::new(0.0, 90.0, 390.0, 0.0).expect("valid scale");
        prop_assert!(scale.map(a) > scale.map(b));
    }

    #[test]
    fn linear_scale_round_trips(value in -1000.0f64..1000.0) {
        let scale = LinearScale::new(-1000.0, 1000.0, 0.0, 690.0).expect("valid scale");
        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() < 1e-6);
    }

    #[test]
    fn log_scale_is_strictly_increasing(
        a in 142.0f64..250_000.0,
        b in 142.0f64..250_000.0,
    ) {
        prop_assume!(a < b);
        let scale = LogScale::new(142.0, 250_000.0, 0.0, 690.0).expect("valid scale");
        prop_assert!(scale.map(a) < scale.map(b));
    }

    #[test]
    fn log_scale_round_trips(value in 142.0f64..250_000.0) {
        let scale = LogScale::new(142.0, 250_000.0, 0.0, 690.0).expect("valid scale");
        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() / value < 1e-9);
    }

    #[test]
    fn radius_scale_is_monotonic_over_its_domain(
        a in 2_000.0f64..1.4e9,
        b in 2_000.0f64..1.4e9,
    ) {
        prop_assume!(a < b);
        let pi = std::f64::consts::PI;
        let scale = RadiusScale::new(2_000.0, 1.4e9, 25.0 * pi, 1_500.0 * pi)
            .expect("valid scale");
        prop_assert!(scale.radius_for(a) < scale.radius_for(b));
    }

    #[test]
    fn radius_matches_the_area_encoding(value in 2_000.0f64..1.4e9) {
        let pi = std::f64::consts::PI;
        let scale = RadiusScale::new(2_000.0, 1.4e9, 25.0 * pi, 1_500.0 * pi)
            .expect("valid scale");
        let radius = scale.radius_for(value);
        let area = scale.area_for(value);
        prop_assert!((radius * radius * pi - area).abs() / area < 1e-9);
    }

    #[test]
    fn ordinal_colors_are_stable_across_any_lookup_order(
        sequence in prop::collection::vec(0usize..CONTINENTS.len(), 1..60),
    ) {
        let mut scale = OrdinalColorScale::with_default_palette();
        let mut first_seen = std::collections::HashMap::new();

        for index in sequence {
            let continent = CONTINENTS[index];
            let color = scale.color_for(continent);
            let recorded = first_seen.entry(continent).or_insert(color);
            prop_assert_eq!(*recorded, color);
        }
    }
}
