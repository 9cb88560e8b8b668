//! Tests for table rendering functionality.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};

    use crate::border;
    use crate::{
        ColumnSizing, HorizontalAlignment, Table, TableBuilder, TableError, TableOptions,
        VerticalAlignment, create_table, default_stringify,
    };

    #[test]
    fn test_empty_table_renders_empty_string() {
        let table = Table::default();
        assert!(table.is_empty());
        assert_eq!(table.render(&TableOptions::default()).unwrap(), "");
    }

    #[test]
    fn test_zero_columns_render_empty_string() {
        let options = TableOptions::default();
        assert_eq!(create_table::<Value, &str>(&[], &[], &options).unwrap(), "");

        // Records without keys still have no columns to lay out.
        let items = vec![json!({"a": 1}), json!({"b": 2})];
        assert_eq!(create_table::<Value, &str>(&items, &[], &options).unwrap(), "");
    }

    #[test]
    fn test_two_column_scenario() {
        let items = vec![
            json!({"name": "John", "age": 30}),
            json!({"name": "Jane", "age": 25}),
        ];
        let options = TableOptions::default().with_max_width(20);
        let table = create_table(&items, &["name", "age"], &options).unwrap();

        let expected = "\
┌──────┬─────┐
│ name │ age │
├──────┼─────┤
│ John │ 30  │
│ Jane │ 25  │
└──────┴─────┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_empty_items_render_header_only() {
        let items: Vec<Value> = Vec::new();
        let options = TableOptions::default();
        let table = create_table(&items, &["name", "age"], &options).unwrap();

        let expected = "\
┌──────┬─────┐
│ name │ age │
├──────┼─────┤
└──────┴─────┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_long_cell_wraps_and_pads_neighbors() {
        let items = vec![json!({"id": 1, "note": "abcdefghijklmnopqrstuvwxyz"})];
        let options = TableOptions::default().with_max_width(20);
        let table = create_table(&items, &["id", "note"], &options).unwrap();

        // The note column shrinks onto the budget and wraps to three lines;
        // the id cell centers vertically with blank lines around it.
        let expected = "\
┌────┬─────────────┐
│ id │    note     │
├────┼─────────────┤
│    │ abcdefghijk │
│ 1  │ lmnopqrstuv │
│    │    wxyz     │
└────┴─────────────┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_index_column_prepends_header_and_indices() {
        let items = vec![json!({"v": "a"}), json!({"v": "b"})];
        let options = TableOptions::default().with_index_column(true);
        let table = create_table(&items, &["v"], &options).unwrap();

        let expected = "\
┌─────────┬───┐
│ (index) │ v │
├─────────┼───┤
│    0    │ a │
│    1    │ b │
└─────────┴───┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_index_column_shifts_minimum_width() {
        let items = vec![json!({"v": "a"})];
        let options = TableOptions::default().with_max_width(8);
        assert!(create_table(&items, &["v"], &options).is_ok());

        let options = options.with_index_column(true);
        let result = create_table(&items, &["v"], &options);
        assert!(matches!(
            result,
            Err(TableError::InfeasibleWidth {
                required: 9,
                actual: 8,
                columns: 2
            })
        ));
    }

    #[test]
    fn test_even_sizing_equalizes_columns() {
        let items = vec![json!({"a": "x", "bbbb": "yyyyyy"})];
        let options = TableOptions::default().with_column_sizing(ColumnSizing::Even);
        let table = create_table(&items, &["a", "bbbb"], &options).unwrap();

        assert_eq!(table.lines().next().unwrap(), "┌────────┬────────┐");
        for line in table.lines() {
            assert_eq!(line.chars().count(), 19);
        }
    }

    #[test]
    fn test_exact_minimum_width_floors_every_column() {
        let items = vec![json!({"ab": "cdef", "x": "y"})];
        let options = TableOptions::default().with_max_width(9);
        let table = create_table(&items, &["ab", "x"], &options).unwrap();

        // Both columns land on the floor width; every cell wraps to one
        // character per line.
        let expected = "\
┌───┬───┐
│ a │ x │
│ b │   │
├───┼───┤
│ c │   │
│ d │ y │
│ e │   │
│ f │   │
└───┴───┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_below_minimum_width_is_infeasible() {
        let items = vec![json!({"ab": "cdef", "x": "y"})];
        let options = TableOptions::default().with_max_width(8);
        let result = create_table(&items, &["ab", "x"], &options);
        assert!(matches!(
            result,
            Err(TableError::InfeasibleWidth {
                required: 9,
                actual: 8,
                columns: 2
            })
        ));
    }

    #[test]
    fn test_below_minimum_width_returns_message_when_configured() {
        let items = vec![json!({"ab": "cdef", "x": "y"})];
        let options = TableOptions::default()
            .with_max_width(8)
            .with_error_if_too_small(false);
        let message = create_table(&items, &["ab", "x"], &options).unwrap();

        assert!(!message.starts_with('┌'));
        assert!(message.contains('9'));
        assert!(message.contains('8'));
    }

    #[test]
    fn test_full_width_fills_max_width_exactly() {
        let items = vec![json!({"a": "x", "b": "y"})];
        let options = TableOptions::default()
            .with_max_width(30)
            .with_full_width(true);
        let table = create_table(&items, &["a", "b"], &options).unwrap();

        for line in table.lines() {
            assert_eq!(line.chars().count(), 30);
        }
    }

    #[test]
    fn test_every_line_shares_one_width() {
        let items = vec![
            json!({"name": "John", "bio": "a very long biography that must wrap", "age": 30}),
            json!({"name": "Jane", "bio": "short", "age": 25}),
        ];
        for sizing in [ColumnSizing::Stretch, ColumnSizing::Even] {
            for full_width in [false, true] {
                for max_width in [13, 20, 27, 40, 80] {
                    let options = TableOptions::default()
                        .with_max_width(max_width)
                        .with_column_sizing(sizing)
                        .with_full_width(full_width);
                    let table =
                        create_table(&items, &["name", "bio", "age"], &options).unwrap();

                    let first = table
                        .lines()
                        .next()
                        .map(|line| line.chars().count())
                        .unwrap();
                    assert!(first <= max_width);
                    if full_width {
                        assert_eq!(first, max_width);
                    }
                    for line in table.lines() {
                        assert_eq!(
                            line.chars().count(),
                            first,
                            "sizing={sizing} full_width={full_width} max_width={max_width}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_skew_never_violates_layout() {
        for columns in 1..=8 {
            let keys: Vec<String> = (0..columns).map(|i| format!("k{i}")).collect();
            let mut record = Map::new();
            record.insert("k0".to_string(), json!("x".repeat(500)));
            for key in keys.iter().skip(1) {
                record.insert(key.clone(), json!("v"));
            }
            let items = vec![Value::Object(record)];

            for max_width in [4 * columns + 1, 4 * columns + 2, 40, 79, 80, 200] {
                let options = TableOptions::default().with_max_width(max_width);
                let table = create_table(&items, &keys, &options)
                    .unwrap_or_else(|e| panic!("columns={columns} max_width={max_width}: {e}"));
                for line in table.lines() {
                    assert!(line.chars().count() <= max_width);
                }
            }
        }
    }

    #[test]
    fn test_horizontal_alignment_variants() {
        let items = vec![json!({"k": "ab"}), json!({"k": "wxyz"})];
        let cases = [
            (HorizontalAlignment::Left, "│ ab   │"),
            (HorizontalAlignment::Middle, "│  ab  │"),
            (HorizontalAlignment::Right, "│   ab │"),
        ];
        for (alignment, expected) in cases {
            let options = TableOptions::default().with_horizontal_alignment(alignment);
            let table = create_table(&items, &["k"], &options).unwrap();
            let ab_line = table.lines().nth(3).unwrap();
            assert_eq!(ab_line, expected, "alignment={alignment}");
        }
    }

    #[test]
    fn test_vertical_alignment_variants() {
        let mut builder = TableBuilder::new();
        builder.start_row();
        builder.add_cell("1234567890");
        builder.add_cell("x");
        builder.end_row();
        let table = builder.build();

        // Both columns shrink to the floor; the first cell wraps to ten
        // lines while the second occupies a single height slot.
        let cases = [
            (VerticalAlignment::Top, 1),
            (VerticalAlignment::Middle, 5),
            (VerticalAlignment::Bottom, 10),
        ];
        for (alignment, x_line) in cases {
            let options = TableOptions::default()
                .with_max_width(9)
                .with_vertical_alignment(alignment);
            let rendered = table.render(&options).unwrap();
            let lines: Vec<&str> = rendered.lines().collect();

            assert_eq!(lines.len(), 12, "alignment={alignment}");
            for (i, line) in lines.iter().enumerate() {
                if i == x_line {
                    assert!(line.ends_with("│ x │"), "alignment={alignment} line={i}");
                } else {
                    assert!(!line.contains('x'), "alignment={alignment} line={i}");
                }
            }
        }
    }

    #[test]
    fn test_missing_keys_render_empty_cells() {
        let items = vec![json!({"name": "x"})];
        let options = TableOptions::default();
        let table = create_table(&items, &["name", "size"], &options).unwrap();

        let expected = "\
┌──────┬──────┐
│ name │ size │
├──────┼──────┤
│  x   │      │
└──────┴──────┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_non_object_records_read_as_null() {
        let items = vec![json!("plain"), json!(42)];
        let options = TableOptions::default();
        let table = create_table(&items, &["k"], &options).unwrap();

        let expected = "\
┌───┐
│ k │
├───┤
│   │
│   │
└───┘";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_custom_stringify() {
        let options = TableOptions::default().with_stringify(Arc::new(|value: &Value| {
            match value {
                Value::Number(n) => format!("#{n}"),
                other => default_stringify(other),
            }
        }));
        let items = vec![json!({"n": 5})];
        let table = create_table(&items, &["n"], &options).unwrap();
        assert!(table.contains("│ #5 │"));
    }

    #[test]
    fn test_from_records_stringifies_structures() {
        let records = vec![json!({"a": 1}), json!({"a": {"nested": true}})];
        let table = Table::from_records(&records, &["a"], &TableOptions::default());

        assert_eq!(table.headers, vec!["a"]);
        assert_eq!(
            table.rows,
            vec![
                vec!["1".to_string()],
                vec![r#"{"nested":true}"#.to_string()],
            ]
        );
    }

    #[test]
    fn test_serialize_failure_reports_row() {
        let mut bad = HashMap::new();
        bad.insert((1, 2), "x");
        let result = create_table(&[bad], &["k"], &TableOptions::default());
        assert!(matches!(result, Err(TableError::Serialize { row: 0, .. })));
    }

    #[test]
    fn test_sizing_and_alignment_parsing() {
        assert_eq!("stretch".parse::<ColumnSizing>().unwrap(), ColumnSizing::Stretch);
        assert_eq!("EVEN".parse::<ColumnSizing>().unwrap(), ColumnSizing::Even);
        assert_eq!(ColumnSizing::Even.to_string(), "even");
        assert!(matches!(
            "diagonal".parse::<ColumnSizing>(),
            Err(TableError::UnknownSizing(_))
        ));

        assert_eq!(
            "left".parse::<HorizontalAlignment>().unwrap(),
            HorizontalAlignment::Left
        );
        assert_eq!(HorizontalAlignment::Middle.to_string(), "middle");
        assert_eq!(
            "bottom".parse::<VerticalAlignment>().unwrap(),
            VerticalAlignment::Bottom
        );
        assert!(matches!(
            "up".parse::<VerticalAlignment>(),
            Err(TableError::UnknownAlignment(_))
        ));
    }

    #[test]
    fn test_builder_workflow() {
        let mut builder = TableBuilder::new();

        builder.start_header();
        builder.add_cell("Col1");
        builder.add_cell("Col2");
        builder.end_header();

        for i in 0..3 {
            builder.start_row();
            builder.add_cell(format!("R{i}C1"));
            builder.add_cell(format!("R{i}C2"));
            builder.end_row();
        }

        let table = builder.build();
        assert_eq!(table.headers.len(), 2);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.column_count(), 2);

        let rendered = table.render(&TableOptions::default()).unwrap();
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn test_border_characters() {
        assert_eq!(border::TOP_LEFT, '┌');
        assert_eq!(border::TOP_RIGHT, '┐');
        assert_eq!(border::BOTTOM_LEFT, '└');
        assert_eq!(border::BOTTOM_RIGHT, '┘');
        assert_eq!(border::HORIZONTAL, '─');
        assert_eq!(border::VERTICAL, '│');
        assert_eq!(border::CROSS, '┼');
        assert_eq!(border::T_DOWN, '┬');
        assert_eq!(border::T_UP, '┴');
        assert_eq!(border::T_RIGHT, '├');
        assert_eq!(border::T_LEFT, '┤');
    }
}
