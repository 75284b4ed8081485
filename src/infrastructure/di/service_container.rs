//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{KnowledgeService, SessionService};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, Prompter, RealFileSystem};

/// Container holding shared dependencies and building services from them.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, fs }
    }

    /// Knowledge base persistence.
    pub fn knowledge_service(&self) -> KnowledgeService {
        KnowledgeService::new(Arc::clone(&self.fs), Arc::clone(&self.settings))
    }

    /// Game session talking through `prompter`.
    pub fn session_service<P: Prompter>(&self, prompter: P) -> SessionService<P> {
        SessionService::new(prompter)
    }
}
