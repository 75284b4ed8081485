//! Decision tree of animals and questions.
//!
//! A tree is owned by its root: every `Question` owns its two children
//! exclusively, so the tree is finite and acyclic by construction.

use std::fmt;

use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;

/// Node of the knowledge tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal guess.
    Leaf { animal: String },
    /// Yes/no question splitting the known animals in two.
    Question {
        question: String,
        no: Box<Node>,
        yes: Box<Node>,
    },
}

impl Node {
    pub fn leaf(animal: impl Into<String>) -> Self {
        Node::Leaf {
            animal: animal.into(),
        }
    }

    pub fn question(question: impl Into<String>, no: Node, yes: Node) -> Self {
        Node::Question {
            question: question.into(),
            no: Box::new(no),
            yes: Box::new(yes),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Animal name of a leaf, `None` for question nodes.
    pub fn animal(&self) -> Option<&str> {
        match self {
            Node::Leaf { animal } => Some(animal),
            Node::Question { .. } => None,
        }
    }

    /// Question text of a question node, `None` for leaves.
    pub fn question_text(&self) -> Option<&str> {
        match self {
            Node::Leaf { .. } => None,
            Node::Question { question, .. } => Some(question),
        }
    }

    /// Walk from this node down to a leaf.
    ///
    /// `answer` is asked each question on the way and decides the branch:
    /// `true` follows `yes`, `false` follows `no`. The reached leaf is
    /// returned as an exclusive borrow into the live tree so that the caller
    /// can turn it into a question node in place.
    ///
    /// Errors from `answer` abort the walk and are returned unchanged.
    pub fn traverse<F, E>(&mut self, mut answer: F) -> Result<&mut Node, E>
    where
        F: FnMut(&str) -> Result<bool, E>,
    {
        let mut current = self;
        while let Node::Question { question, no, yes } = current {
            current = if answer(question.as_str())? {
                &mut **yes
            } else {
                &mut **no
            };
        }
        Ok(current)
    }

    /// Turn this leaf into a question node distinguishing `new_animal`.
    ///
    /// The current animal moves into a fresh leaf on the opposite branch of
    /// `new_animal`. The node is rewritten in place, so any link pointing at
    /// it stays valid.
    #[instrument(level = "debug", skip(self))]
    pub fn learn(
        &mut self,
        new_animal: String,
        question: String,
        new_animal_is_yes: bool,
    ) -> Result<(), DomainError> {
        if new_animal.is_empty() {
            return Err(DomainError::EmptyField { field: "animal" });
        }
        if question.is_empty() {
            return Err(DomainError::EmptyField { field: "question" });
        }
        let Node::Leaf { animal } = self else {
            return Err(DomainError::NotALeaf);
        };

        let old_animal = std::mem::take(animal);
        debug!("learn: {} vs {}", new_animal, old_animal);
        let new_leaf = Node::leaf(new_animal);
        let other_leaf = Node::leaf(old_animal);
        *self = if new_animal_is_yes {
            Node::question(question, other_leaf, new_leaf)
        } else {
            Node::question(question, new_leaf, other_leaf)
        };
        Ok(())
    }

    /// Check that every leaf names an animal and every question has text.
    ///
    /// The error carries the path of the first offending node, e.g. `root.yes.no`.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.validate_at("root")
    }

    fn validate_at(&self, path: &str) -> Result<(), DomainError> {
        match self {
            Node::Leaf { animal } if animal.is_empty() => Err(DomainError::Malformed {
                path: path.to_string(),
                reason: "leaf without animal".to_string(),
            }),
            Node::Leaf { .. } => Ok(()),
            Node::Question { question, .. } if question.is_empty() => {
                Err(DomainError::Malformed {
                    path: path.to_string(),
                    reason: "question node without question".to_string(),
                })
            }
            Node::Question { no, yes, .. } => {
                no.validate_at(&format!("{path}.no"))?;
                yes.validate_at(&format!("{path}.yes"))
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Question { no, yes, .. } => 1 + no.depth().max(yes.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Question { no, yes, .. } => no.leaf_count() + yes.leaf_count(),
        }
    }

    pub fn question_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Question { no, yes, .. } => 1 + no.question_count() + yes.question_count(),
        }
    }

    /// All known animals, sorted.
    pub fn animals(&self) -> Vec<&str> {
        let mut animals = Vec::new();
        self.collect_animals(&mut animals);
        animals.sort_unstable();
        animals
    }

    fn collect_animals<'a>(&'a self, animals: &mut Vec<&'a str>) {
        match self {
            Node::Leaf { animal } => animals.push(animal),
            Node::Question { no, yes, .. } => {
                no.collect_animals(animals);
                yes.collect_animals(animals);
            }
        }
    }

    /// Render the tree for terminal display; the yes branch is listed first.
    pub fn to_tree_string(&self) -> Tree<String> {
        match self {
            Node::Leaf { animal } => Tree::new(animal.clone()),
            Node::Question { question, no, yes } => Tree::new(question.clone()).with_leaves([
                Tree::new("yes".to_string()).with_leaves([yes.to_tree_string()]),
                Tree::new("no".to_string()).with_leaves([no.to_tree_string()]),
            ]),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { animal } => write!(f, "{animal}"),
            Node::Question { question, .. } => write!(f, "{question}"),
        }
    }
}
