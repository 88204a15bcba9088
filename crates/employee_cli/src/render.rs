//! Fixed-width table renderer for employee rows.
//!
//! # Responsibility
//! - Format a row list into a bordered text table for the console.
//!
//! # Invariants
//! - Column widths are fixed (10/20/9); overflowing values are padded but
//!   never clipped.
//! - An empty row list still renders one blank bordered row.

use employee_core::Employee;

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const BIRTH_WIDTH: usize = 9;

/// Renders rows as a bordered table.
///
/// `max_rows` truncates the list before rendering: non-positive means
/// unlimited, and values beyond the row count clamp to it.
pub fn render_table(rows: &[Employee], max_rows: i64) -> String {
    let visible = if max_rows > 0 {
        let cap = usize::try_from(max_rows).unwrap_or(usize::MAX);
        &rows[..cap.min(rows.len())]
    } else {
        rows
    };

    let mut out = String::new();
    push_border(&mut out);
    push_row(&mut out, "Id", "FullName", "BirthDate");
    push_border(&mut out);

    if visible.is_empty() {
        push_row(&mut out, "", "", "");
    } else {
        for row in visible {
            push_row(&mut out, &row.id.to_string(), &row.full_name, &row.birth_date);
        }
    }

    push_border(&mut out);
    out
}

fn push_border(out: &mut String) {
    let width = ID_WIDTH + NAME_WIDTH + BIRTH_WIDTH + 4;
    out.push_str(&"-".repeat(width));
    out.push('\n');
}

fn push_row(out: &mut String, id: &str, name: &str, birth: &str) {
    out.push_str(&format!(
        "|{:<id_w$}|{:<name_w$}|{:<birth_w$}|\n",
        id,
        name,
        birth,
        id_w = ID_WIDTH,
        name_w = NAME_WIDTH,
        birth_w = BIRTH_WIDTH,
    ));
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use employee_core::Employee;

    #[test]
    fn single_row_table_has_padded_columns() {
        let rows = vec![Employee::new(1, "Alice", "1990-01-01")];
        let table = render_table(&rows, 0);
        assert!(table.contains("|1         |Alice               |1990-01-01|"));
        assert!(table.contains("|Id        |FullName            |BirthDate|"));
    }

    #[test]
    fn empty_table_renders_one_blank_row() {
        let table = render_table(&[], 0);
        let blank_rows = table
            .lines()
            .filter(|line| line.chars().all(|c| c == '|' || c == ' ') && line.starts_with('|'))
            .count();
        assert_eq!(blank_rows, 1);
    }

    #[test]
    fn overlong_values_are_not_clipped() {
        let rows = vec![Employee::new(
            1,
            "A very long employee name",
            "1990-01-01",
        )];
        let table = render_table(&rows, 0);
        assert!(table.contains("A very long employee name"));
    }

    #[test]
    fn max_rows_truncates_before_rendering() {
        let rows = vec![
            Employee::new(1, "Alice", "1990-01-01"),
            Employee::new(2, "Bob", "1985-06-15"),
            Employee::new(3, "Carol", "1979-12-31"),
        ];
        let table = render_table(&rows, 2);
        assert!(table.contains("Alice"));
        assert!(table.contains("Bob"));
        assert!(!table.contains("Carol"));
    }

    #[test]
    fn max_rows_beyond_len_and_non_positive_render_everything() {
        let rows = vec![
            Employee::new(1, "Alice", "1990-01-01"),
            Employee::new(2, "Bob", "1985-06-15"),
        ];
        for cap in [10, 0, -3] {
            let table = render_table(&rows, cap);
            assert!(table.contains("Alice"));
            assert!(table.contains("Bob"));
        }
    }
}
