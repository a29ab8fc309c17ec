#[cfg(test)]
mod tests {
    use crate::compile::{CompileError, CompileOptions};
    use crate::conditions;
    use crate::query::{QueryParams, compile_query, dump_query};
    use pretty_assertions::assert_eq;

    const BASE: &str = "SELECT foo, bar FROM my_table t";

    fn dump(query: QueryParams, single: bool) -> String {
        dump_query(BASE, &query, single, &CompileOptions::default()).unwrap()
    }

    #[test]
    fn assembly_order_is_fixed() {
        let query = QueryParams::new()
            .conditions(conditions! { "status =" => "active" })
            .group("status")
            .order("created_at DESC")
            .limit(10)
            .offset(20);
        let compiled = compile_query(BASE, &query, false, &CompileOptions::default()).unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT foo, bar FROM my_table t WHERE 1 AND status = :p1 \
             GROUP BY status ORDER BY created_at DESC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn no_conditions_means_no_where() {
        let compiled =
            compile_query(BASE, &QueryParams::new().limit(5), false, &CompileOptions::default())
                .unwrap();
        assert_eq!(compiled.sql, "SELECT foo, bar FROM my_table t LIMIT 5");
        assert!(compiled.params.is_empty());
    }

    #[test]
    fn empty_condition_set_means_no_where() {
        let compiled = compile_query(
            BASE,
            &QueryParams::new().conditions(conditions! {}),
            false,
            &CompileOptions::default(),
        )
        .unwrap();
        assert_eq!(compiled.sql, "SELECT foo, bar FROM my_table t");
    }

    #[test]
    fn offset_without_limit_is_ignored() {
        let compiled =
            compile_query(BASE, &QueryParams::new().offset(20), false, &CompileOptions::default())
                .unwrap();
        assert_eq!(compiled.sql, "SELECT foo, bar FROM my_table t");
    }

    #[test]
    fn single_forces_limit_one() {
        let query = QueryParams::new()
            .conditions(conditions! { "a =" => 1_i64 })
            .limit(50)
            .offset(100);
        let compiled = compile_query(BASE, &query, true, &CompileOptions::default()).unwrap();
        assert_eq!(
            compiled.sql,
            "SELECT foo, bar FROM my_table t WHERE 1 AND a = :p1 LIMIT 1"
        );
    }

    #[test]
    fn having_is_not_implemented() {
        let query = QueryParams::new().having("COUNT(1) > 1");
        assert_eq!(
            compile_query(BASE, &query, false, &CompileOptions::default()),
            Err(CompileError::NotImplemented)
        );
        assert_eq!(
            dump_query(BASE, &query, false, &CompileOptions::default()),
            Err(CompileError::NotImplemented)
        );
    }

    #[test]
    fn dump_simple_condition() {
        let query = QueryParams::new().conditions(conditions! { "t.foo =" => "bar" });
        assert_eq!(
            dump(query, true),
            "SELECT foo, bar FROM my_table t WHERE 1 AND t.foo = 'bar' LIMIT 1"
        );
    }

    #[test]
    fn dump_is_not_null() {
        let query = QueryParams::new().conditions(conditions! { "foo IS" => "NOT NULL" });
        assert_eq!(
            dump(query, true),
            "SELECT foo, bar FROM my_table t WHERE 1 AND foo IS NOT NULL LIMIT 1"
        );
    }

    #[test]
    fn dump_or_connector() {
        let query = QueryParams::new().conditions(
            conditions! {
                "foo IS" => "NOT NULL",
                "OR bar =" => 42_i64,
            },
        );
        assert_eq!(
            dump(query, true),
            "SELECT foo, bar FROM my_table t WHERE 1 AND foo IS NOT NULL OR bar = '42' LIMIT 1"
        );
    }

    #[test]
    fn dump_in_list() {
        let query = QueryParams::new().conditions(
            conditions! {
                "foo =" => "bar",
                "foz IN" => vec![1_i64, 2, 3],
            },
        );
        assert_eq!(
            dump(query, true),
            "SELECT foo, bar FROM my_table t WHERE 1 AND foo = 'bar' AND foz IN ('1', '2', '3') LIMIT 1"
        );
    }

    #[test]
    fn dump_between() {
        let query = QueryParams::new().conditions(
            conditions! {
                "foo =" => "bar",
                "foz BETWEEN" => [1_i64, 10],
            },
        );
        assert_eq!(
            dump(query, true),
            "SELECT foo, bar FROM my_table t WHERE 1 AND foo = 'bar' AND foz BETWEEN '1' AND '10' LIMIT 1"
        );
    }

    #[test]
    fn dump_nested_or_group() {
        let query = QueryParams::new().conditions(
            conditions! {
                "t.foo IS" => "NOT NULL",
                "OR" => conditions! {
                    "foo IS" => "NULL",
                    "bar >" => 42_i64,
                },
            },
        );
        assert_eq!(
            dump(query, true),
            "SELECT foo, bar FROM my_table t WHERE 1 AND t.foo IS NOT NULL \
             OR (1 AND foo IS NULL AND bar > '42') LIMIT 1"
        );
    }

    #[test]
    fn dump_with_quoted_fields() {
        let query = QueryParams::new().conditions(
            conditions! {
                "t.foo IS" => "NOT NULL",
                "OR" => conditions! {
                    "foo IS" => "NULL",
                    "bar >" => 42_i64,
                },
            },
        );
        let dumped = dump_query(
            BASE,
            &query,
            true,
            &CompileOptions::default().quote_fields(true),
        )
        .unwrap();
        assert_eq!(
            dumped,
            "SELECT foo, bar FROM my_table t WHERE 1 AND `t`.`foo` IS NOT NULL \
             OR (1 AND `foo` IS NULL AND `bar` > '42') LIMIT 1"
        );
    }

    #[test]
    fn dump_keeps_limit_offset_when_not_single() {
        let query = QueryParams::new()
            .conditions(conditions! { "a =" => 1_i64 })
            .limit(10)
            .offset(20);
        assert_eq!(
            dump(query, false),
            "SELECT foo, bar FROM my_table t WHERE 1 AND a = '1' LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn dump_collapses_whitespace_runs() {
        let base = "SELECT  foo,\n\tbar   FROM my_table t";
        let query = QueryParams::new().conditions(conditions! { "a =" => "x  y" });
        let dumped = dump_query(base, &query, true, &CompileOptions::default()).unwrap();
        assert_eq!(
            dumped,
            "SELECT foo, bar FROM my_table t WHERE 1 AND a = 'x y' LIMIT 1"
        );
        assert!(!dumped.contains("  "), "double whitespace in {dumped:?}");
    }

    #[test]
    fn compile_failure_returns_no_partial_query() {
        let query = QueryParams::new().conditions(
            conditions! {
                "a =" => 1_i64,
                "b IN" => 2_i64,
            },
        );
        assert!(compile_query(BASE, &query, false, &CompileOptions::default()).is_err());
    }
}
