use condsql::{
    Arg, Builder, Dialect, Error, SqlBuilder, dialect, eq, in_list, named, neq, render_with_dialect,
    select, to_bound_sql, to_sql, update,
};

fn table1_query(d: Dialect) -> Builder {
    dialect(d)
        .select(Vec::<&str>::new())
        .from("table1")
        .and_where(eq("a", "1").and(neq("b", "100")))
}

#[test]
fn to_sql_in_list() {
    let cond = in_list("a", [1, 2]).unwrap();
    let (sql, args) = to_sql(&cond).unwrap();
    assert_eq!(sql, "a IN (?,?)");
    assert_eq!(args, vec![Arg::from(1), Arg::from(2)]);

    let stmt = select(["id"]).from("table").and_where(cond);
    let (sql, args) = to_sql(&stmt).unwrap();
    assert_eq!(sql, "SELECT id FROM table WHERE a IN (?,?)");
    assert_eq!(args, vec![Arg::from(1), Arg::from(2)]);
}

#[test]
fn to_bound_sql_entry_points() {
    let stmt = select(["id"]).from("table").and_where(in_list("a", [1, 2]).unwrap());
    assert_eq!(to_bound_sql(&stmt).unwrap(), "SELECT id FROM table WHERE a IN (1,2)");
    assert_eq!(to_bound_sql(&eq("a", 1)).unwrap(), "a=1");
    assert_eq!(to_bound_sql(&Builder::new()).unwrap_err(), Error::NotSupportType);
}

#[test]
fn positional_dialects() {
    for d in [Dialect::MySql, Dialect::Sqlite] {
        let (sql, args) = table1_query(d).to_sql().unwrap();
        assert_eq!(sql, "SELECT * FROM table1 WHERE a=? AND b<>?");
        assert_eq!(args, vec![Arg::from("1"), Arg::from("100")]);
    }

    let (sql, args) = table1_query(Dialect::Postgres).to_sql().unwrap();
    assert_eq!(sql, "SELECT * FROM table1 WHERE a=$1 AND b<>$2");
    assert_eq!(args, vec![Arg::from("1"), Arg::from("100")]);
}

#[test]
fn named_dialects() {
    let (sql, args) = table1_query(Dialect::MsSql).to_sql().unwrap();
    assert_eq!(sql, "SELECT * FROM table1 WHERE a=@p1 AND b<>@p2");
    assert_eq!(args, vec![named("p1", "1"), named("p2", "100")]);

    let (sql, args) = table1_query(Dialect::Oracle).to_sql().unwrap();
    assert_eq!(sql, "SELECT * FROM table1 WHERE a=:p1 AND b<>:p2");
    assert_eq!(args, vec![named("p1", "1"), named("p2", "100")]);
}

#[test]
fn named_wrapper_keeps_its_name() {
    let stmt = dialect(Dialect::Oracle)
        .select(["*"])
        .from("table1")
        .and_where(eq("a", named("a", "1")).and(neq("b", "100")));
    let (sql, args) = stmt.to_sql().unwrap();
    assert_eq!(sql, "SELECT * FROM table1 WHERE a=:a AND b<>:p2");
    assert_eq!(args, vec![named("a", "1"), named("p2", "100")]);
}

#[test]
fn render_by_dialect_name() {
    let cond = eq("a", "1").and(neq("b", "100"));
    let (sql, _) = render_with_dialect(&cond, "postgresql").unwrap();
    assert_eq!(sql, "a=$1 AND b<>$2");
    let (sql, _) = render_with_dialect(&cond, "sqlserver").unwrap();
    assert_eq!(sql, "a=@p1 AND b<>@p2");

    let err = render_with_dialect(&cond, "informix").unwrap_err();
    assert_eq!(err, Error::UnsupportedDialect("informix".to_string()));
}

#[test]
fn injection_is_harmless_when_bound() {
    let stmt = dialect(Dialect::MySql)
        .select(["*"])
        .from("table1")
        .and_where(eq("name", "cat';truncate table table1;"));
    assert_eq!(
        stmt.to_bound_sql().unwrap(),
        "SELECT * FROM table1 WHERE name='cat'';truncate table table1;'"
    );
}

#[test]
fn update_with_null_assignment() {
    let stmt = update("table1").set("a", 1).set("b", None::<i64>);
    assert_eq!(stmt.to_bound_sql().unwrap(), "UPDATE table1 SET a=1,b=null");

    let (sql, args) = stmt.to_sql().unwrap();
    assert_eq!(sql, "UPDATE table1 SET a=?,b=null");
    assert_eq!(args, vec![Arg::from(1)]);
}

#[test]
fn subquery_arguments_are_spliced_in_order() {
    let sub = select(["id"]).from("table_b").and_where(eq("b", 1));
    let stmt = dialect(Dialect::Postgres)
        .select(["a", "b"])
        .from("table_a")
        .and_where(eq("b_id", sub).and(eq("id", 2)));
    let (sql, args) = stmt.to_sql().unwrap();
    assert_eq!(
        sql,
        "SELECT a,b FROM table_a WHERE b_id=(SELECT id FROM table_b WHERE b=$1) AND id=$2"
    );
    assert_eq!(args, vec![Arg::from(1), Arg::from(2)]);
}

#[test]
fn insert_and_delete() {
    let (sql, args) = condsql::insert_into("users")
        .value("name", "alice")
        .value("age", 30)
        .to_sql_with(Dialect::Postgres)
        .unwrap();
    assert_eq!(sql, "INSERT INTO users (name,age) VALUES ($1,$2)");
    assert_eq!(args.len(), 2);

    let bound = condsql::delete_from("users").and_where(eq("id", 9)).to_bound_sql().unwrap();
    assert_eq!(bound, "DELETE FROM users WHERE id=9");
}
