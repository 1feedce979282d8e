use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kindred::{LayoutOptions, Person, layout};
use std::hint::black_box;
use std::time::Duration;

/// `generations` levels of couples, each couple with `fanout` children who all marry in.
fn build_family(name: &str, generations: usize, fanout: usize) -> Vec<Person> {
    let mut people: Vec<Person> = Vec::new();
    let mut couples: Vec<(String, String)> = vec![(format!("{name}_a0"), format!("{name}_b0"))];
    let mut next_id = 1usize;

    for _ in 0..generations {
        let mut next_couples = Vec::new();
        for (a, b) in &couples {
            let mut kids = Vec::new();
            for _ in 0..fanout {
                let kid = format!("{name}_a{next_id}");
                let spouse = format!("{name}_b{next_id}");
                next_id += 1;
                kids.push(kid.clone());
                next_couples.push((kid, spouse));
            }
            people.push(
                Person::new(a.clone())
                    .with_partners([b.clone()])
                    .with_children(kids.clone()),
            );
            people.push(
                Person::new(b.clone())
                    .with_partners([a.clone()])
                    .with_children(kids),
            );
        }
        couples = next_couples;
    }

    for (a, b) in couples {
        people.push(Person::new(a.clone()).with_partners([b.clone()]));
        people.push(Person::new(b).with_partners([a]));
    }

    people
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.measurement_time(Duration::from_secs(3));
    let opts = LayoutOptions::default();

    for (label, generations, fanout) in [("small", 3, 2), ("medium", 5, 3), ("wide", 3, 8)] {
        let family = build_family(label, generations, fanout);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{label}_{}", family.len())),
            &family,
            |b, family| {
                b.iter_batched(
                    || family.clone(),
                    |mut people| black_box(layout(&mut people, &opts).layer_count()),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
