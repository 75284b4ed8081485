//! Knowledge base persistence service
//!
//! Loads and saves the decision tree as pretty-printed JSON records.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{Node, NodeRecord};
use crate::infrastructure::traits::FileSystem;

/// Service for creating, loading and saving knowledge bases.
pub struct KnowledgeService {
    fs: Arc<dyn FileSystem>,
    settings: Arc<Settings>,
}

impl KnowledgeService {
    /// Create a new knowledge service.
    pub fn new(fs: Arc<dyn FileSystem>, settings: Arc<Settings>) -> Self {
        Self { fs, settings }
    }

    /// Fresh knowledge base knowing only the default animal.
    pub fn create(&self) -> Node {
        Node::leaf(self.settings.default_animal.clone())
    }

    /// Create a fresh knowledge base or load the one at `path`.
    ///
    /// With `create`, an existing file is left untouched until the next
    /// [`save`](Self::save), which overwrites it.
    #[instrument(level = "debug", skip(self))]
    pub fn open(&self, path: &Path, create: bool) -> ApplicationResult<Node> {
        if create {
            if self.fs.exists(path) {
                debug!("{} exists and will be overwritten", path.display());
            }
            return Ok(self.create());
        }
        self.load(path)
    }

    /// Read, parse and validate the knowledge base at `path`.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Node> {
        let content = self.fs.read_to_string(path).on_read(path)?;
        let record = parse_record(&content).map_err(|source| ApplicationError::DatabaseParse {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = record.into_node()?;
        tree.validate()?;
        info!(
            "loaded {} animals from {}",
            tree.leaf_count(),
            path.display()
        );
        Ok(tree)
    }

    /// Write `tree` to `path`, replacing any previous content.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn save(&self, path: &Path, tree: &Node) -> ApplicationResult<()> {
        let content = self.to_json(tree)?;
        self.fs.ensure_parent(path).on_write(path)?;
        self.fs.write(path, &content).on_write(path)?;
        info!("saved {} animals to {}", tree.leaf_count(), path.display());
        Ok(())
    }

    /// Serialize `tree` with the configured indentation.
    pub fn to_json(&self, tree: &Node) -> ApplicationResult<String> {
        let record = NodeRecord::from(tree);
        let indent = " ".repeat(self.settings.indent);
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        record
            .serialize(&mut ser)
            .map_err(ApplicationError::Encode)?;
        debug!("encoded knowledge base: {} bytes", buf.len());
        String::from_utf8(buf)
            .map_err(|e| ApplicationError::Encode(serde::ser::Error::custom(e)))
    }
}

/// Parse a record document of any nesting depth.
///
/// Every tree level is one nested JSON object, so serde_json's recursion
/// limit is lifted and the stack grows on demand instead.
fn parse_record(content: &str) -> serde_json::Result<NodeRecord> {
    let mut de = serde_json::Deserializer::from_str(content);
    de.disable_recursion_limit();
    let record = NodeRecord::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(record)
}
