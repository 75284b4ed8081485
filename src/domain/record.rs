//! On-disk shape of the knowledge tree.
//!
//! Each node is stored as a record with four fields: `Animal` (empty for
//! questions), `Question` (empty for leaves) and the `No`/`Yes` children
//! (`null` for leaves). Children are always written, never omitted, so a
//! missing child can be told apart from a malformed record.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::node::Node;

/// Serialized form of a [`Node`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeRecord {
    #[serde(rename = "Animal", alias = "animal")]
    pub animal: String,
    #[serde(rename = "Question", alias = "question")]
    pub question: String,
    #[serde(rename = "No", alias = "no")]
    pub no: Option<Box<NodeRecord>>,
    #[serde(rename = "Yes", alias = "yes")]
    pub yes: Option<Box<NodeRecord>>,
}

impl NodeRecord {
    /// Convert into a tree, rejecting records that are neither a leaf nor a
    /// question node.
    pub fn into_node(self) -> Result<Node, DomainError> {
        self.into_node_at("root")
    }

    fn into_node_at(self, path: &str) -> Result<Node, DomainError> {
        let malformed = |reason: &str| DomainError::Malformed {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        match (self.animal.is_empty(), self.question.is_empty(), self.no, self.yes) {
            (false, true, None, None) => Ok(Node::Leaf {
                animal: self.animal,
            }),
            (true, false, Some(no), Some(yes)) => Ok(Node::Question {
                question: self.question,
                no: Box::new(no.into_node_at(&format!("{path}.no"))?),
                yes: Box::new(yes.into_node_at(&format!("{path}.yes"))?),
            }),
            (false, false, _, _) => Err(malformed("both animal and question are set")),
            (true, true, _, _) => Err(malformed("neither animal nor question is set")),
            (false, true, _, _) => Err(malformed("leaf with children")),
            (true, false, _, _) => Err(malformed("question node needs both children")),
        }
    }
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        match node {
            Node::Leaf { animal } => NodeRecord {
                animal: animal.clone(),
                ..NodeRecord::default()
            },
            Node::Question { question, no, yes } => NodeRecord {
                animal: String::new(),
                question: question.clone(),
                no: Some(Box::new(NodeRecord::from(no.as_ref()))),
                yes: Some(Box::new(NodeRecord::from(yes.as_ref()))),
            },
        }
    }
}
