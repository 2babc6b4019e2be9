/// Column widths of the text report: type, name, value, block, expires.
pub const COLUMN_WIDTHS: [usize; 5] = [8, 32, 48, 8, 8];

/// Left-align each field in its column. Long fields are not cut, they push
/// the following columns to the right.
pub fn format_row(fields: [&str; 5]) -> String {
    fields
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(field, width)| format!("{:<width$}", field, width = width))
        .collect()
}
