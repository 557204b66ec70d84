use tablescope_core::{ColumnMeta, TableMeta};

pub fn column(name: impl Into<String>, type_name: impl Into<String>) -> ColumnMeta {
    ColumnMeta::new(name, type_name)
}

/// Table with no explicit database (groups under the default sentinel).
pub fn table(
    schema: impl Into<String>,
    table_name: impl Into<String>,
    columns: Vec<ColumnMeta>,
) -> TableMeta {
    TableMeta::new(schema, table_name, columns)
}

/// Table under an explicit database.
pub fn table_in(
    database: impl Into<String>,
    schema: impl Into<String>,
    table_name: impl Into<String>,
    columns: Vec<ColumnMeta>,
) -> TableMeta {
    TableMeta::in_database(database, schema, table_name, columns)
}

/// A small two-database catalog with mixed column types, for tree tests.
pub fn sample_catalog() -> Vec<TableMeta> {
    vec![
        table_in(
            "analytics",
            "public",
            "events",
            vec![
                column("id", "BIGINT"),
                column("payload", "JSON"),
                column("created_at", "TIMESTAMP"),
            ],
        ),
        table_in(
            "analytics",
            "public",
            "users",
            vec![
                column("id", "BIGINT"),
                column("email", "VARCHAR"),
                column("is_active", "BOOLEAN"),
            ],
        ),
        table_in(
            "analytics",
            "audit",
            "log",
            vec![column("entry", "VARCHAR")],
        ),
        table(
            "main",
            "settings",
            vec![column("key", "VARCHAR"), column("value", "VARCHAR")],
        ),
    ]
}
