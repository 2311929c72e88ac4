use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use jurisolve::{
    resolve, Consulate, CountryId, JurisdictionRule, OfficeType, RegionScope, Residence,
};

/// Builds a synthetic candidate set: `n` offices, each with a handful of
/// region rules and every third one carrying a country-wide catch-all.
fn make_candidates(n: usize) -> Vec<Consulate> {
    let destination = CountryId::new();
    let host = CountryId::new();

    (0..n)
        .map(|i| {
            let consulate = Consulate::builder()
                .name(format!("Office {i}"))
                .office_type(OfficeType::Consulate)
                .country_id(destination)
                .host_country_id(host)
                .city(format!("City {i}"))
                .build()
                .unwrap();

            let mut consulate = consulate;
            for r in 0..4 {
                let scope = RegionScope::region(format!("Region {i}-{r}")).unwrap();
                let rule = JurisdictionRule::new(consulate.id, host, scope)
                    .with_priority(i32::try_from(r).unwrap());
                consulate = consulate.with_rule(rule);
            }
            if i % 3 == 0 {
                let rule = JurisdictionRule::new(consulate.id, host, RegionScope::CountryWide);
                consulate = consulate.with_rule(rule);
            }
            consulate
        })
        .collect()
}

fn bench_resolve_region_hit(c: &mut Criterion) {
    let candidates = make_candidates(100);
    // Matches one office's second region rule.
    let residence = Residence::country("Benchland").with_region("Region 42-1");

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("region_hit_100", |b| {
        b.iter(|| resolve(black_box(&candidates), black_box(&residence)));
    });
    group.finish();
}

fn bench_resolve_no_hint(c: &mut Criterion) {
    let candidates = make_candidates(100);
    let residence = Residence::country("Benchland");

    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("no_hint_100", |b| {
        b.iter(|| resolve(black_box(&candidates), black_box(&residence)));
    });
    group.finish();
}

criterion_group!(benches, bench_resolve_region_hit, bench_resolve_no_hint);
criterion_main!(benches);
