//! Benchmarks for translator scans, builds and writes.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use owl_axiom_graph::config::AxiomsConfig;
use owl_axiom_graph::factory::GraphObjectFactory;
use owl_axiom_graph::graph::Graph;
use owl_axiom_graph::model::{AnnotatedAxiom, Axiom, AxiomKind, ClassExpression, ObjectPropertyExpression};
use owl_axiom_graph::translate::TranslatorRegistry;

fn class(i: usize) -> ClassExpression {
    ClassExpression::class(format!("http://example.org/C{i}"))
}

/// A taxonomy of `n` classes, each with a named parent and one restriction.
fn taxonomy(n: usize) -> Vec<AnnotatedAxiom> {
    let part_of = ObjectPropertyExpression::named("http://example.org/partOf");
    (1..n)
        .flat_map(|i| {
            [
                Axiom::SubClassOf {
                    sub: class(i),
                    sup: class(i / 2),
                },
                Axiom::SubClassOf {
                    sub: class(i),
                    sup: ClassExpression::some(part_of.clone(), class(i - 1)),
                },
            ]
        })
        .map(AnnotatedAxiom::from)
        .collect()
}

fn populated(n: usize) -> Graph {
    let mut g = Graph::new();
    TranslatorRegistry::global()
        .write_all(&taxonomy(n), &mut g)
        .unwrap();
    g
}

fn bench_write(c: &mut Criterion) {
    let axioms = taxonomy(1_000);
    c.bench_function("write_2k_subclass", |bench| {
        bench.iter(|| {
            let mut g = Graph::new();
            TranslatorRegistry::global().write_all(&axioms, &mut g).unwrap();
            black_box(g.len())
        })
    });
}

fn bench_scan(c: &mut Criterion) {
    let g = populated(1_000);
    let config = AxiomsConfig::default();
    let translator = TranslatorRegistry::global().get(AxiomKind::SubClassOf).unwrap();

    c.bench_function("scan_subclass_2k", |bench| {
        bench.iter(|| black_box(translator.scan(&g, &config).count()))
    });
}

fn bench_read_all(c: &mut Criterion) {
    let g = populated(1_000);
    let config = AxiomsConfig::default();

    c.bench_function("read_all_2k", |bench| {
        bench.iter(|| {
            let factory = GraphObjectFactory::new();
            black_box(TranslatorRegistry::global().read_all(&g, &factory, &config).unwrap())
        })
    });
}

criterion_group!(benches, bench_write, bench_scan, bench_read_all);
criterion_main!(benches);
