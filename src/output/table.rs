//! Table output formatting

use tabled::{Table, Tabled, builder::Builder, settings::Style};

/// Format data as a borderless, column-aligned table.
///
/// The header row is printed even when there are no rows.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    let mut table = if data.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(T::headers());
        builder.build()
    } else {
        Table::new(data)
    };
    table.with(Style::blank());

    table.to_string()
}
