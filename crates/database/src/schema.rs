/// Schema metadata for PostgreSQL tables.
///
/// Pure description of table structure: no I/O happens here. Implementations
/// build their statements at compile time with [`const_format::concatcp!`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
    /// Table then indices, as one batch.
    fn migration() -> String {
        format!("{}\n{}", Self::creates(), Self::indices())
    }
}
