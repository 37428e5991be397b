//! Application state management

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::pdf::{MuPdfExtractor, TextExtractor};

/// Shared application state
///
/// Immutable after construction; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Create application state backed by MuPDF
    pub fn new(config: Config) -> Self {
        Self::with_extractor(config, Arc::new(MuPdfExtractor::new()))
    }

    /// Create application state with a specific text extractor
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, extractor }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Directory for request-scoped upload files
    pub fn upload_dir(&self) -> &Path {
        &self.inner.config.upload.dir
    }

    /// Get a handle to the text extractor
    pub fn extractor(&self) -> Arc<dyn TextExtractor> {
        self.inner.extractor.clone()
    }
}
