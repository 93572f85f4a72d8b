use criterion::{Criterion, criterion_group, criterion_main};
use gapchart_rs::api::{
    ChartEngine, ChartEngineConfig, MarkSet, OrdinalColorScale, ScaleRegistry, TransitionConfig,
};
use gapchart_rs::core::{
    Continent, CountryRecord, Dataset, LinearScale, LogScale, RadiusScale, RawCountryRecord,
    RawYearRecord,
};
use gapchart_rs::render::NullRenderer;
use std::hint::black_box;

fn registry() -> ScaleRegistry {
    let pi = std::f64::consts::PI;
    ScaleRegistry::new(
        LogScale::new(142.0, 250_000.0, 0.0, 690.0).expect("x scale"),
        LinearScale::new(0.0, 90.0, 390.0, 0.0).expect("y scale"),
        RadiusScale::new(2_000.0, 1.4e9, 25.0 * pi, 1_500.0 * pi).expect("radius scale"),
        OrdinalColorScale::with_default_palette(),
        (100.0, 10.0),
    )
}

fn generated_records(count: usize) -> Vec<CountryRecord> {
    (0..count)
        .map(|i| CountryRecord {
            country: format!("country-{i}"),
            continent: match i % 4 {
                0 => Continent::Africa,
                1 => Continent::Americas,
                2 => Continent::Europe,
                _ => Continent::Asia,
            },
            income: 200.0 + (i as f64) * 950.0,
            life_exp: 40.0 + (i as f64) % 45.0,
            population: 1.0e6 + (i as f64) * 5.0e6,
        })
        .collect()
}

fn bench_log_scale_map(c: &mut Criterion) {
    let scale = LogScale::new(142.0, 250_000.0, 0.0, 690.0).expect("valid scale");

    c.bench_function("log_scale_map", |b| {
        b.iter(|| {
            let px = scale.map(black_box(4_321.123));
            let _ = scale.invert(black_box(px));
        })
    });
}

fn bench_reconcile_200_marks(c: &mut Criterion) {
    let even = generated_records(200);
    let odd: Vec<CountryRecord> = even
        .iter()
        .cloned()
        .map(|mut record| {
            record.income *= 1.05;
            record.life_exp += 0.4;
            record
        })
        .collect();

    c.bench_function("reconcile_200_marks", |b| {
        let mut scales = registry();
        let mut marks = MarkSet::new(TransitionConfig::default());
        let mut flip = false;
        b.iter(|| {
            let records = if flip { &odd } else { &even };
            flip = !flip;
            let _ = marks.reconcile(black_box(records), &mut scales);
            marks.settle();
        })
    });
}

fn bench_engine_render_pass(c: &mut Criterion) {
    let years: Vec<RawYearRecord> = (0..2)
        .map(|year| RawYearRecord {
            countries: (0..200)
                .map(|i| RawCountryRecord {
                    country: format!("country-{i}"),
                    continent: ["africa", "americas", "europe", "asia"][i % 4].to_owned(),
                    income: Some(format!("{}", 200 + i * 950 + year * 13)),
                    life_exp: Some(format!("{}", 40 + i % 45)),
                    population: Some(1.0e6 + (i as f64) * 5.0e6),
                })
                .collect(),
        })
        .collect();
    let dataset = Dataset::from_raw(years, 1800).expect("dataset");
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::default(),
        dataset,
    )
    .expect("engine init");
    engine.play();

    c.bench_function("engine_render_pass_200_marks", |b| {
        b.iter(|| {
            engine.tick().expect("tick should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_log_scale_map,
    bench_reconcile_200_marks,
    bench_engine_render_pass
);
criterion_main!(benches);
