//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::{ExplanationService, MenuNavigator};
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, Selector, SkimSelector};
use crate::infrastructure::tree_view::TreeViewOptions;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Interactive selector abstraction
    pub selector: Arc<dyn Selector>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let selector = Arc::new(SkimSelector::new(settings.selector.height.clone()));
        Self::with_deps(settings, Arc::new(RealFileSystem), selector)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        selector: Arc<dyn Selector>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            selector,
        }
    }

    pub fn explanation_service(&self) -> ExplanationService {
        ExplanationService::new(Arc::clone(&self.fs))
    }

    pub fn navigator(&self) -> MenuNavigator {
        MenuNavigator::new(Arc::clone(&self.selector))
            .with_prompt_suffix(self.settings.selector.prompt.clone())
    }

    pub fn tree_view_options(&self) -> TreeViewOptions {
        TreeViewOptions {
            color: self.settings.output.color,
            payload: self.settings.output.payload,
        }
    }
}
