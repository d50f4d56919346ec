//! Exclusion predicate applied to every directory entry

use glob::Pattern;
use tracing::warn;

use super::config::{INDEX_FILE_NAME, TocConfig};

/// Decides which entry names are left out of the walk entirely.
///
/// Built once per run so the answer for a given name never changes mid-scan.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    hidden_marker: String,
    attachments_dir: String,
    patterns: Vec<Pattern>,
}

impl ExclusionFilter {
    pub fn new(config: &TocConfig) -> Self {
        let patterns = config
            .ignore_patterns
            .iter()
            .filter_map(|raw| match Pattern::new(raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    warn!("ignoring invalid pattern '{}': {}", raw, e);
                    None
                }
            })
            .collect();

        Self {
            hidden_marker: config.hidden_marker.clone(),
            attachments_dir: config.attachments_dir.clone(),
            patterns,
        }
    }

    /// Check if an entry name should be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        if !self.hidden_marker.is_empty() && name.contains(&self.hidden_marker) {
            return true;
        }
        if name == self.attachments_dir || name == INDEX_FILE_NAME {
            return true;
        }
        self.patterns
            .iter()
            .any(|p| p.as_str() == name || p.matches(name))
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(&TocConfig::default())
    }
}
