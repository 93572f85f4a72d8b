use gapchart_rs::api::{
    ChartEngine, ChartEngineConfig, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
    EngineSnapshotJsonContractV1,
};
use gapchart_rs::core::{Continent, ContinentFilter, Dataset, RawCountryRecord, RawYearRecord, Viewport};
use gapchart_rs::render::NullRenderer;

fn engine() -> ChartEngine<NullRenderer> {
    let dataset = Dataset::from_raw(
        vec![
            RawYearRecord {
                countries: vec![RawCountryRecord {
                    country: "france".to_owned(),
                    continent: "europe".to_owned(),
                    income: Some("28000".to_owned()),
                    life_exp: Some("80".to_owned()),
                    population: Some(6.5e7),
                }],
            },
            RawYearRecord { countries: vec![] },
        ],
        1800,
    )
    .expect("dataset");
    ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default(), dataset)
        .expect("engine init")
}

#[test]
fn snapshot_reflects_the_current_view_state() {
    let mut engine = engine();
    engine.render().expect("render");
    engine
        .set_filter(ContinentFilter::Only(Continent::Europe))
        .expect("filter");
    engine.play();

    let snapshot = engine.snapshot();

    assert_eq!(snapshot.year, 1800);
    assert_eq!(snapshot.year_index, 0);
    assert!(snapshot.playing);
    assert_eq!(snapshot.filter, ContinentFilter::Only(Continent::Europe));
    assert_eq!(snapshot.mark_count, 1);
    assert_eq!(snapshot.viewport, Viewport::new(800, 500));
}

#[test]
fn snapshot_contract_round_trips_through_the_envelope() {
    let engine = engine();
    let snapshot = engine.snapshot();

    let json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("serialize contract");
    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse contract");

    assert_eq!(parsed, snapshot);
}

#[test]
fn bare_snapshot_payloads_are_accepted_for_compatibility() {
    let engine = engine();
    let snapshot = engine.snapshot();

    let bare = serde_json::to_string(&snapshot).expect("serialize bare");
    let parsed = EngineSnapshot::from_json_compat_str(&bare).expect("parse bare");

    assert_eq!(parsed, snapshot);
}

#[test]
fn unsupported_schema_versions_are_rejected() {
    let engine = engine();
    let payload = EngineSnapshotJsonContractV1 {
        schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1 + 1,
        snapshot: engine.snapshot(),
    };

    let json = serde_json::to_string(&payload).expect("serialize envelope");
    assert!(EngineSnapshot::from_json_compat_str(&json).is_err());
}
