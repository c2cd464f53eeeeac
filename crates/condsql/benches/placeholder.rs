use condsql::{
    Arg, Builder, Cond, Dialect, Marker, SqlBuilder, and, convert_placeholder, convert_to_bound_sql,
    eq,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// SELECT col0,col1,... FROM t WHERE col0=? AND col1=? ...
fn build_select(n: usize) -> Builder {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let cond: Cond = and((0..n).map(|i| eq(format!("col{i}"), i as i64)));
    Builder::new().select(columns).from("t").and_where(cond)
}

fn raw_sql(n: usize) -> String {
    let mut sql = String::from("SELECT * FROM t WHERE note='what?'");
    for i in 0..n {
        sql.push_str(&format!(" AND col{i}=?"));
    }
    sql
}

fn bench_convert_placeholder(c: &mut Criterion) {
    let mut group = c.benchmark_group("placeholder/convert");
    let marker = Marker::prefix("$");

    for n in [1, 5, 10, 50, 100] {
        let sql = raw_sql(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sql, |b, sql| {
            b.iter(|| black_box(convert_placeholder(sql, &marker)));
        });
    }

    group.finish();
}

fn bench_bound_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("placeholder/bound_sql");

    for n in [1, 5, 10, 50, 100] {
        let sql = raw_sql(n);
        let args: Vec<Arg> = (0..n as i64).map(Arg::from).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &(sql, args), |b, (sql, args)| {
            b.iter(|| black_box(convert_to_bound_sql(sql, args)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("placeholder/render");

    for dialect in [Dialect::MySql, Dialect::Postgres, Dialect::MsSql] {
        let stmt = build_select(20);
        group.bench_with_input(BenchmarkId::from_parameter(dialect), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.to_sql_with(dialect)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convert_placeholder, bench_bound_sql, bench_render);
criterion_main!(benches);
