use crate::error::{Error, Result};

/// Main configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub scan: ScanConfig,
}

/// Tree scan settings
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Deepest level the builder descends to; `None` is unlimited
    pub max_depth: Option<usize>,
}

impl Config {
    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, max_depth: Option<usize>) {
        if let Some(d) = max_depth {
            self.scan.max_depth = Some(d);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.scan.max_depth == Some(0) {
            return Err(Error::config_validation("max_depth must be at least 1"));
        }

        Ok(())
    }
}
