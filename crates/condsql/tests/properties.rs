use condsql::{
    Cond, Dialect, Marker, SqlBuilder, and, between, convert_placeholder, convert_to_bound_sql,
    count_placeholders, eq, format_literal, gt, is_null, like, neq, not, or, scan::split_placeholders,
};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Cond> {
    let column = "[a-z]{1,8}";
    prop_oneof![
        (column, any::<i64>()).prop_map(|(c, v)| eq(c, v)),
        (column, "[a-z' ]{0,6}").prop_map(|(c, v)| neq(c, v)),
        (column, any::<i32>()).prop_map(|(c, v)| gt(c, v)),
        (column, "[a-z%]{0,6}").prop_map(|(c, p)| like(c, p)),
        (column, any::<i64>(), any::<i64>()).prop_map(|(c, l, h)| between(c, l, h)),
        (column, prop::collection::vec(any::<u32>(), 1..5))
            .prop_map(|(c, vs)| Cond::in_list(c, vs).unwrap()),
        column.prop_map(|c| is_null(c)),
        (column, prop::option::of(any::<bool>())).prop_map(|(c, v)| eq(c, v)),
    ]
}

fn cond_tree() -> impl Strategy<Value = Cond> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|v| and(v)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(|v| or(v)),
            inner.prop_map(|c| not(c)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn markers_match_arguments_in_every_dialect(cond in cond_tree()) {
        let (mysql, args) = cond.to_sql_with(Dialect::MySql).unwrap();
        prop_assert_eq!(count_placeholders(&mysql).unwrap(), args.len());

        for dialect in Dialect::all() {
            let (sql, dialect_args) = cond.to_sql_with(dialect).unwrap();
            prop_assert_eq!(dialect_args.len(), args.len());
            prop_assert_eq!(&sql, &convert_placeholder(&mysql, &dialect.marker()).unwrap());
        }
    }

    #[test]
    fn bound_sql_inlines_each_argument(cond in cond_tree()) {
        let (sql, args) = cond.to_sql().unwrap();
        let segments = split_placeholders(&sql).unwrap();
        let mut expected = String::new();
        for (segment, arg) in segments.iter().zip(&args) {
            expected.push_str(segment);
            expected.push_str(&format_literal(arg.value()));
        }
        expected.push_str(segments[segments.len() - 1]);

        prop_assert_eq!(cond.to_bound_sql().unwrap(), expected.clone());
        prop_assert_eq!(convert_to_bound_sql(&sql, &args).unwrap(), expected);
    }

    #[test]
    fn convert_is_idempotent(sql in "[a-z =?'\"]{0,40}", prefix in "[$:@]p?") {
        let marker = Marker::prefix(prefix);
        if let Ok(once) = convert_placeholder(&sql, &marker) {
            prop_assert_eq!(convert_placeholder(&once, &marker).unwrap(), once);
        }
    }

    #[test]
    fn split_round_trips(sql in "[a-z =?'`]{0,40}") {
        if let Ok(segments) = split_placeholders(&sql) {
            prop_assert_eq!(segments.join("?"), sql);
        }
    }
}
