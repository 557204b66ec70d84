use serde::{Deserialize, Serialize};
use tablescope_core::ColumnTypeCategory;

/// The kind of node in the schema tree. Cheap matching without payload data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaNodeKind {
    Database,
    Schema,
    Table,
    Column,
}

/// Payload identifying what a tree node represents.
///
/// Serializes with a `type` tag so the rendering layer can dispatch on node
/// kind without knowing the Rust enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeObject {
    Database {
        name: String,
    },
    Schema {
        name: String,
    },
    Table {
        database: String,
        schema: String,
        name: String,
    },
    Column {
        name: String,
        column_type: String,
        column_type_category: ColumnTypeCategory,
    },
}

impl NodeObject {
    pub fn kind(&self) -> SchemaNodeKind {
        match self {
            Self::Database { .. } => SchemaNodeKind::Database,
            Self::Schema { .. } => SchemaNodeKind::Schema,
            Self::Table { .. } => SchemaNodeKind::Table,
            Self::Column { .. } => SchemaNodeKind::Column,
        }
    }

    /// The display name of the object, whatever its kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Database { name }
            | Self::Schema { name }
            | Self::Table { name, .. }
            | Self::Column { name, .. } => name,
        }
    }
}

/// A node in the schema navigation tree.
///
/// The tree nests database → schema → table → column. Nodes are built once
/// per catalog snapshot and never mutated; a changed catalog means a full
/// rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaTreeNode {
    /// Render identity, unique among siblings. Composed from ancestor path
    /// segments (`schema.table.column`); database nodes use the raw
    /// database name.
    pub key: String,

    pub object: NodeObject,

    /// Default expand state for the UI. Database and schema nodes start
    /// open, table nodes collapsed.
    pub is_initial_open: bool,

    /// Child nodes in display order. Empty for column leaves.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaTreeNode>,
}

impl SchemaTreeNode {
    pub fn kind(&self) -> SchemaNodeKind {
        self.object.kind()
    }

    pub fn name(&self) -> &str {
        self.object.name()
    }

    /// Returns `true` for column nodes, which are terminal rows.
    pub fn is_leaf(&self) -> bool {
        matches!(self.object, NodeObject::Column { .. })
    }

    /// Depth-first pre-order traversal of this node and its descendants.
    pub fn iter(&self) -> SchemaTreeIter<'_> {
        SchemaTreeIter { stack: vec![self] }
    }

    /// Finds a descendant (or this node itself) by render key.
    pub fn find_by_key(&self, key: &str) -> Option<&SchemaTreeNode> {
        self.iter().find(|node| node.key == key)
    }
}

pub struct SchemaTreeIter<'a> {
    stack: Vec<&'a SchemaTreeNode>,
}

impl<'a> Iterator for SchemaTreeIter<'a> {
    type Item = &'a SchemaTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Finds a node by render key anywhere in a forest of root nodes.
pub fn find_by_key<'a>(nodes: &'a [SchemaTreeNode], key: &str) -> Option<&'a SchemaTreeNode> {
    nodes.iter().find_map(|node| node.find_by_key(key))
}

/// Total node count across a forest, descendants included.
pub fn node_count(nodes: &[SchemaTreeNode]) -> usize {
    nodes.iter().map(|node| node.iter().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_node(key: &str, name: &str) -> SchemaTreeNode {
        SchemaTreeNode {
            key: key.to_string(),
            object: NodeObject::Column {
                name: name.to_string(),
                column_type: "INTEGER".to_string(),
                column_type_category: ColumnTypeCategory::Number,
            },
            is_initial_open: false,
            children: Vec::new(),
        }
    }

    fn table_node(key: &str, name: &str, children: Vec<SchemaTreeNode>) -> SchemaTreeNode {
        SchemaTreeNode {
            key: key.to_string(),
            object: NodeObject::Table {
                database: "default".to_string(),
                schema: "main".to_string(),
                name: name.to_string(),
            },
            is_initial_open: false,
            children,
        }
    }

    #[test]
    fn test_iter_is_preorder() {
        let tree = table_node(
            "main.t",
            "t",
            vec![column_node("main.t.a", "a"), column_node("main.t.b", "b")],
        );

        let keys: Vec<&str> = tree.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["main.t", "main.t.a", "main.t.b"]);
    }

    #[test]
    fn test_find_by_key_across_forest() {
        let forest = vec![
            table_node("main.a", "a", vec![column_node("main.a.id", "id")]),
            table_node("main.b", "b", Vec::new()),
        ];

        let found = find_by_key(&forest, "main.a.id").unwrap();
        assert_eq!(found.name(), "id");
        assert!(found.is_leaf());

        assert!(find_by_key(&forest, "main.c").is_none());
    }

    #[test]
    fn test_node_count() {
        let forest = vec![
            table_node("main.a", "a", vec![column_node("main.a.id", "id")]),
            table_node("main.b", "b", Vec::new()),
        ];

        assert_eq!(node_count(&forest), 3);
        assert_eq!(node_count(&[]), 0);
    }

    #[test]
    fn test_kind_and_name() {
        let node = column_node("main.t.a", "a");
        assert_eq!(node.kind(), SchemaNodeKind::Column);
        assert_eq!(node.name(), "a");
    }
}
