use gapchart_rs::api::{Ease, MarkSet, OrdinalColorScale, ScaleRegistry, TransitionConfig};
use gapchart_rs::core::{Continent, CountryRecord, LinearScale, LogScale, RadiusScale};

fn registry() -> ScaleRegistry {
    let pi = std::f64::consts::PI;
    ScaleRegistry::new(
        LogScale::new(142.0, 250_000.0, 0.0, 690.0).expect("x scale"),
        LinearScale::new(0.0, 90.0, 390.0, 0.0).expect("y scale"),
        RadiusScale::new(2_000.0, 1_400_000_000.0, 25.0 * pi, 1_500.0 * pi).expect("radius scale"),
        OrdinalColorScale::with_default_palette(),
        (100.0, 10.0),
    )
}

fn record(country: &str, continent: Continent, income: f64, life_exp: f64) -> CountryRecord {
    CountryRecord {
        country: country.to_owned(),
        continent,
        income,
        life_exp,
        population: 10_000_000.0,
    }
}

#[test]
fn first_reconcile_enters_every_record() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());
    let records = vec![
        record("france", Continent::Europe, 28_000.0, 80.0),
        record("chad", Continent::Africa, 1_300.0, 50.0),
    ];

    let stats = marks.reconcile(&records, &mut scales);

    assert_eq!(stats.entered, 2);
    assert_eq!(stats.removed, 0);
    assert_eq!(marks.len(), 2);
}

#[test]
fn repeated_reconcile_with_identical_records_is_a_no_op() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());
    let records = vec![
        record("france", Continent::Europe, 28_000.0, 80.0),
        record("chad", Continent::Africa, 1_300.0, 50.0),
    ];

    marks.reconcile(&records, &mut scales);
    let stats = marks.reconcile(&records, &mut scales);

    assert_eq!(stats.entered, 0);
    assert_eq!(stats.retargeted, 0);
    assert_eq!(stats.removed, 0);
    assert_eq!(marks.len(), 2);
}

#[test]
fn records_that_disappear_remove_their_marks_immediately() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());

    marks.reconcile(
        &[
            record("france", Continent::Europe, 28_000.0, 80.0),
            record("chad", Continent::Africa, 1_300.0, 50.0),
        ],
        &mut scales,
    );
    let stats = marks.reconcile(
        &[record("france", Continent::Europe, 29_000.0, 80.5)],
        &mut scales,
    );

    assert_eq!(stats.removed, 1);
    assert_eq!(marks.len(), 1);
    assert!(marks.get("chad").is_none());
}

#[test]
fn an_empty_record_list_removes_all_marks() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());

    marks.reconcile(
        &[record("france", Continent::Europe, 28_000.0, 80.0)],
        &mut scales,
    );
    let stats = marks.reconcile(&[], &mut scales);

    assert_eq!(stats.removed, 1);
    assert!(marks.is_empty());
}

#[test]
fn entering_marks_grow_in_from_zero_and_settle_at_target() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());
    let records = vec![record("france", Continent::Europe, 28_000.0, 80.0)];

    marks.reconcile(&records, &mut scales);
    let mark = marks.get("france").expect("entered mark");
    assert_eq!(mark.attrs().radius, 0.0);
    assert!(!mark.is_settled());

    marks.settle();
    let mark = marks.get("france").expect("settled mark");
    assert_eq!(mark.attrs(), scales.attrs_for(&records[0]));
    assert!(mark.is_settled());
}

#[test]
fn moved_targets_retarget_without_jumping_current_attributes() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());

    marks.reconcile(
        &[record("france", Continent::Europe, 28_000.0, 80.0)],
        &mut scales,
    );
    marks.settle();
    let settled = marks.get("france").expect("mark").attrs();

    let moved = vec![record("france", Continent::Europe, 30_000.0, 81.0)];
    let stats = marks.reconcile(&moved, &mut scales);

    assert_eq!(stats.retargeted, 1);
    let mark = marks.get("france").expect("mark");
    assert_eq!(mark.attrs(), settled);
    assert_eq!(mark.target_attrs(), scales.attrs_for(&moved[0]));
}

#[test]
fn linear_transition_passes_through_the_midpoint() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig {
        duration_seconds: 0.1,
        ease: Ease::Linear,
    });

    let start = vec![record("chad", Continent::Africa, 1_000.0, 50.0)];
    let moved = vec![record("chad", Continent::Africa, 2_000.0, 60.0)];

    marks.reconcile(&start, &mut scales);
    marks.settle();
    let from = marks.get("chad").expect("mark").attrs();

    marks.reconcile(&moved, &mut scales);
    marks.advance(0.05);

    let halfway = from.lerp(scales.attrs_for(&moved[0]), 0.5);
    let mark = marks.get("chad").expect("mark");
    assert!((mark.attrs().cx - halfway.cx).abs() < 1e-9);
    assert!((mark.attrs().cy - halfway.cy).abs() < 1e-9);
    assert!((mark.attrs().radius - halfway.radius).abs() < 1e-9);
}

#[test]
fn fill_colors_are_stable_per_continent() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());

    marks.reconcile(
        &[
            record("france", Continent::Europe, 28_000.0, 80.0),
            record("spain", Continent::Europe, 26_000.0, 81.0),
            record("chad", Continent::Africa, 1_300.0, 50.0),
        ],
        &mut scales,
    );

    let france = marks.get("france").expect("france").fill();
    let spain = marks.get("spain").expect("spain").fill();
    let chad = marks.get("chad").expect("chad").fill();

    assert_eq!(france, spain);
    assert_ne!(france, chad);

    // A later frame keeps the same assignment.
    marks.reconcile(
        &[record("portugal", Continent::Europe, 20_000.0, 78.0)],
        &mut scales,
    );
    assert_eq!(marks.get("portugal").expect("portugal").fill(), france);
}

#[test]
fn marks_paint_in_insertion_order_with_entries_appended() {
    let mut scales = registry();
    let mut marks = MarkSet::new(TransitionConfig::default());

    marks.reconcile(
        &[
            record("france", Continent::Europe, 28_000.0, 80.0),
            record("chad", Continent::Africa, 1_300.0, 50.0),
        ],
        &mut scales,
    );
    marks.reconcile(
        &[
            record("france", Continent::Europe, 28_000.0, 80.0),
            record("chad", Continent::Africa, 1_300.0, 50.0),
            record("india", Continent::Asia, 1_100.0, 62.0),
        ],
        &mut scales,
    );

    let order: Vec<&str> = marks.iter().map(|(country, _)| country).collect();
    assert_eq!(order, vec!["france", "chad", "india"]);
}
