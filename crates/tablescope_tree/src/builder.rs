use indexmap::IndexMap;
use tablescope_core::{SchemaError, TableMeta, TypeClassifier};

use crate::node::{NodeObject, SchemaTreeNode};

/// Separator for path-composed node keys below the database level.
const KEY_SEPARATOR: char = '.';

/// Groups flat catalog tables into database → schema → table → column trees.
///
/// Grouping is by exact string equality of database and schema names, in
/// first-seen order at every level; nothing is sorted or normalized. Tables
/// with no database fall under the `"default"` sentinel.
///
/// Duplicate `(database, schema, table)` triples are kept as sibling table
/// nodes with colliding keys. The UI relies on key uniqueness for render
/// identity, so a warning is logged; deduplication belongs upstream in the
/// catalog query.
#[derive(Debug, Default)]
pub struct SchemaTreeBuilder {
    databases: IndexMap<String, IndexMap<String, Vec<SchemaTreeNode>>>,
}

impl SchemaTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one table node (with its column children) to the grouping.
    ///
    /// Classifier errors propagate unchanged; nothing added by earlier calls
    /// is rolled back.
    pub fn add_table(
        &mut self,
        table: &TableMeta,
        classifier: &impl TypeClassifier,
    ) -> Result<(), SchemaError> {
        let database = table.database_or_default();
        let schema = table.schema.as_str();
        let table_key = format!(
            "{schema}{KEY_SEPARATOR}{name}",
            name = table.table_name
        );

        let mut columns = Vec::with_capacity(table.columns.len());
        for column in &table.columns {
            let category = classifier.classify(&column.type_name)?;
            columns.push(SchemaTreeNode {
                key: format!("{table_key}{KEY_SEPARATOR}{name}", name = column.name),
                object: NodeObject::Column {
                    name: column.name.clone(),
                    column_type: column.type_name.clone(),
                    column_type_category: category,
                },
                is_initial_open: false,
                children: Vec::new(),
            });
        }

        let table_node = SchemaTreeNode {
            key: table_key,
            object: NodeObject::Table {
                database: database.to_string(),
                schema: schema.to_string(),
                name: table.table_name.clone(),
            },
            is_initial_open: false,
            children: columns,
        };

        let tables = self
            .databases
            .entry(database.to_string())
            .or_default()
            .entry(schema.to_string())
            .or_default();

        if tables.iter().any(|node| node.key == table_node.key) {
            log::warn!(
                "duplicate table in catalog snapshot: {}.{}",
                database,
                table_node.key
            );
        }

        tables.push(table_node);
        Ok(())
    }

    /// Finalizes the grouping into root database nodes, in first-seen order.
    pub fn build(self) -> Vec<SchemaTreeNode> {
        self.databases
            .into_iter()
            .map(|(database, schemas)| {
                let schema_nodes = schemas
                    .into_iter()
                    .map(|(schema, tables)| SchemaTreeNode {
                        key: schema.clone(),
                        object: NodeObject::Schema { name: schema },
                        is_initial_open: true,
                        children: tables,
                    })
                    .collect();

                SchemaTreeNode {
                    key: database.clone(),
                    object: NodeObject::Database { name: database },
                    is_initial_open: true,
                    children: schema_nodes,
                }
            })
            .collect()
    }
}

/// Builds the schema navigation tree for a catalog snapshot.
///
/// Returns one root node per database, in first-seen input order. An empty
/// snapshot yields an empty forest. The input is read only; the returned
/// tree shares no state with it.
pub fn build_schema_tree(
    tables: &[TableMeta],
    classifier: &impl TypeClassifier,
) -> Result<Vec<SchemaTreeNode>, SchemaError> {
    let mut builder = SchemaTreeBuilder::new();
    for table in tables {
        builder.add_table(table, classifier)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::SchemaNodeKind;
    use tablescope_core::{ColumnMeta, DuckDbTypeClassifier};

    #[test]
    fn test_builder_groups_by_database_and_schema() {
        let mut builder = SchemaTreeBuilder::new();
        let classifier = DuckDbTypeClassifier;

        builder
            .add_table(
                &TableMeta::in_database("db1", "s1", "t1", Vec::new()),
                &classifier,
            )
            .unwrap();
        builder
            .add_table(
                &TableMeta::in_database("db1", "s1", "t2", Vec::new()),
                &classifier,
            )
            .unwrap();
        builder
            .add_table(
                &TableMeta::in_database("db2", "s1", "t1", Vec::new()),
                &classifier,
            )
            .unwrap();

        let roots = builder.build();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].key, "db1");
        assert_eq!(roots[1].key, "db2");

        let s1 = &roots[0].children[0];
        assert_eq!(s1.kind(), SchemaNodeKind::Schema);
        assert_eq!(s1.children.len(), 2);
        assert_eq!(s1.children[0].key, "s1.t1");
        assert_eq!(s1.children[1].key, "s1.t2");
    }

    #[test]
    fn test_column_keys_compose_full_path() {
        let table = TableMeta::new(
            "public",
            "users",
            vec![ColumnMeta::new("id", "INTEGER")],
        );

        let roots = build_schema_tree(&[table], &DuckDbTypeClassifier).unwrap();
        let column = &roots[0].children[0].children[0].children[0];
        assert_eq!(column.key, "public.users.id");
        assert!(column.is_leaf());
    }
}
