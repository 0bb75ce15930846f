/// Table metadata for a persisted record.
///
/// The storage engine builds its statements from this metadata so the column
/// list of a `SELECT` and the fields decoded by `sqlx::FromRow` stay in one place.
///
/// # Example
///
/// ```ignore
/// impl Entity for Product {
///     fn table_name() -> &'static str { "products" }
///     fn id_column() -> &'static str { "id" }
///     fn columns() -> &'static [&'static str] { &["id", "name", /* ... */] }
/// }
/// ```
pub trait Entity: Send + Sync + Unpin + 'static {
    fn table_name() -> &'static str;
    fn id_column() -> &'static str;

    /// Every persisted column, identifier first.
    fn columns() -> &'static [&'static str];

    /// Columns written by an `INSERT` (everything except the generated identifier).
    fn insert_columns() -> &'static [&'static str] {
        let columns = Self::columns();
        match columns.first() {
            Some(first) if *first == Self::id_column() => &columns[1..],
            _ => columns,
        }
    }

    /// `SELECT <columns> FROM <table>` without any filter.
    fn select_sql() -> String {
        format!("SELECT {} FROM {}", Self::columns().join(", "), Self::table_name())
    }

    /// `INSERT INTO <table> (<insert columns>) VALUES (?, ...)`.
    fn insert_sql() -> String {
        let columns = Self::insert_columns();
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            Self::table_name(),
            columns.join(", "),
        )
    }
}
