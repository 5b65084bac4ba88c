use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlrpn::{Expr, Operator, QueryBuilder};

/// `and` over `n` leaves: ((c0 = ?) and (c1 = ?) and ...)
fn wide_tree(n: usize) -> Expr {
    Expr::and((0..n).map(|i| Expr::eq(format!("c{i}"), i as i64)).collect())
}

/// Alternating and/or nesting `depth` levels deep, two children per level.
fn deep_tree(depth: usize) -> Expr {
    let mut expr = Expr::eq("c0", 0);
    for i in 1..=depth {
        let op = if i % 2 == 0 { Operator::And } else { Operator::Or };
        expr = Expr::combine(op, vec![expr, Expr::gt(format!("c{i}"), i as i64)]);
    }
    expr
}

fn bench_wide(c: &mut Criterion) {
    let qb = QueryBuilder::new();
    let mut group = c.benchmark_group("where_builder/wide");

    for n in [2, 10, 50, 200] {
        let tree = wide_tree(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| black_box(qb.build_where_query(tree)));
        });
    }

    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let qb = QueryBuilder::new();
    let mut group = c.benchmark_group("where_builder/deep");

    for depth in [2, 10, 50, 200] {
        let tree = deep_tree(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| black_box(qb.build_where_query(tree)));
        });
    }

    group.finish();
}

fn bench_parse_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("where_builder/parse_json");

    for n in [2, 10, 50] {
        let children: Vec<_> = (0..n)
            .map(|i| serde_json::json!({"=": {format!("c{i}"): i}}))
            .collect();
        let tree = serde_json::json!({ "and": children });
        group.bench_with_input(BenchmarkId::from_parameter(n), &tree, |b, tree| {
            b.iter(|| black_box(sqlrpn::build_where_query_json(tree)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wide, bench_deep, bench_parse_json);
criterion_main!(benches);
