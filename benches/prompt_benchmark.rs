use criterion::{criterion_group, criterion_main, Criterion};
use roastrava::models::{
    AthleteStats, Language, RoastMode, RoastOptions, RoastRequest, RunTotals, StravaActivity,
    StravaAthlete,
};
use roastrava::services::prompt;
use std::hint::black_box;

fn sample_request(mode: RoastMode, language: Language, activity_count: usize) -> RoastRequest {
    let athlete = StravaAthlete {
        id: 1,
        username: "bench".to_string(),
        firstname: "Bench".to_string(),
        lastname: "Runner".to_string(),
        city: "Jakarta".to_string(),
        country: "Indonesia".to_string(),
        follower_count: 150,
        weight: 70.0,
        ftp: Some(250.0),
        ..Default::default()
    };

    let activities: Vec<StravaActivity> = (0..activity_count)
        .map(|i| StravaActivity {
            id: i as u64,
            name: format!("Morning Run #{i}"),
            distance: 5000.0 + i as f64 * 137.0,
            moving_time: 1500 + i as u64 * 11,
            total_elevation_gain: 12.5,
            activity_type: "Run".to_string(),
            ..Default::default()
        })
        .collect();

    let totals = RunTotals {
        count: 12,
        distance: 61234.0,
        ..Default::default()
    };
    let stats = AthleteStats {
        recent_run_totals: totals.clone(),
        ytd_run_totals: totals,
        ..Default::default()
    };

    let options = RoastOptions {
        mode,
        intensity: Some(3),
        language,
    };
    RoastRequest::build(options, &athlete, &activities, &stats)
}

fn benchmark_compile(c: &mut Criterion) {
    // Strava's default page size, and the largest list the API accepts
    let typical = sample_request(RoastMode::Roast, Language::En, 30);
    let largest = sample_request(RoastMode::Motivate, Language::Id, 200);

    let mut group = c.benchmark_group("prompt_compile");

    group.bench_function("roast_en_30_activities", |b| {
        b.iter(|| prompt::compile(black_box(&typical)))
    });

    group.bench_function("motivate_id_200_activities", |b| {
        b.iter(|| prompt::compile(black_box(&largest)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_compile);
criterion_main!(benches);
