mod builder;
mod node;

pub use builder::{SchemaTreeBuilder, build_schema_tree};
pub use node::{
    NodeObject, SchemaNodeKind, SchemaTreeIter, SchemaTreeNode, find_by_key, node_count,
};
