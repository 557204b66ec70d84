use serde::{Deserialize, Serialize};

/// Database name used for grouping when a catalog entry carries no database.
///
/// A named constant so a real database literally called "default" collides
/// visibly rather than silently.
pub const DEFAULT_DATABASE: &str = "default";

/// Column metadata within a table, as reported by catalog introspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,

    /// Declared database type (e.g., "INTEGER", "VARCHAR(255)"). Kept verbatim.
    pub type_name: String,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// One table from a catalog snapshot.
///
/// The snapshot is flat: every table carries its own database and schema
/// names. Grouping into a hierarchy happens downstream in the tree builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMeta {
    /// Database name. `None` for engines that expose a single unnamed database.
    #[serde(default)]
    pub database: Option<String>,

    pub schema: String,
    pub table_name: String,

    /// Columns in catalog order. Order is significant and preserved.
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    /// Creates a table entry with no explicit database.
    pub fn new(
        schema: impl Into<String>,
        table_name: impl Into<String>,
        columns: Vec<ColumnMeta>,
    ) -> Self {
        Self {
            database: None,
            schema: schema.into(),
            table_name: table_name.into(),
            columns,
        }
    }

    /// Creates a table entry under an explicit database.
    pub fn in_database(
        database: impl Into<String>,
        schema: impl Into<String>,
        table_name: impl Into<String>,
        columns: Vec<ColumnMeta>,
    ) -> Self {
        Self {
            database: Some(database.into()),
            ..Self::new(schema, table_name, columns)
        }
    }

    /// The database this table groups under, falling back to [`DEFAULT_DATABASE`].
    pub fn database_or_default(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }
}
