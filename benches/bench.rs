// Criterion benchmarks for Influencer Search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use influencer_search::core::{extract::extract_criteria, merge::merge_criteria, Catalog, FilterEngine};
use influencer_search::models::{AgeRange, Criteria, InfluencerRecord};

const CATEGORIES: &[&str] = &["fitness", "tech", "fashion", "food", "travel"];
const PLATFORMS: &[&str] = &["ig", "yt", "fb", "tiktok"];

fn create_record(id: usize) -> InfluencerRecord {
    InfluencerRecord {
        name: format!("Creator {}", id),
        category: CATEGORIES[id % CATEGORIES.len()].to_string(),
        content_type: "reels".to_string(),
        platform: PLATFORMS[id % PLATFORMS.len()].to_string(),
        total_followers: 5_000 + (id as u64 * 1_337) % 500_000,
        overall_engagement: (id % 90) as f64 / 10.0,
        rate: 1_000.0 + (id % 40) as f64 * 500.0,
        age: 18 + (id % 40) as u32,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        email: format!("creator{}@example.com", id),
        phone: "555-0100".to_string(),
    }
}

fn create_criteria() -> Criteria {
    Criteria {
        category: Some("fitness".to_string()),
        platform: Some("instagram".to_string()),
        gender: Some("female".to_string()),
        age_range: Some(AgeRange::new(18, 30)),
        max_budget: Some(15_000.0),
        ..Default::default()
    }
}

fn bench_extraction(c: &mut Criterion) {
    c.bench_function("extract_criteria", |b| {
        b.iter(|| extract_criteria(black_box("Female fitness influencers on Instagram under 30")));
    });
}

fn bench_merge(c: &mut Criterion) {
    let ai = Criteria {
        age_range: Some(AgeRange::new(13, 19)),
        max_budget: Some(7000.0),
        ..Default::default()
    };
    let manual = extract_criteria("teen fitness creators 18-22");

    c.bench_function("merge_criteria", |b| {
        b.iter(|| merge_criteria(black_box(ai.clone()), black_box(manual.clone())));
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = FilterEngine::new();
    let criteria = create_criteria();

    let mut group = c.benchmark_group("search");

    for record_count in [100, 1_000, 10_000, 100_000].iter() {
        let catalog = Catalog::new((0..*record_count).map(create_record).collect());

        group.bench_with_input(
            BenchmarkId::new("filtered", record_count),
            record_count,
            |b, _| {
                b.iter(|| engine.search(black_box(&catalog), black_box(&criteria)).records.len());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unfiltered", record_count),
            record_count,
            |b, _| {
                b.iter(|| engine.search(black_box(&catalog), black_box(&Criteria::default())).records.len());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_extraction, bench_merge, bench_search);

criterion_main!(benches);
