use serde::{Deserialize, Serialize};

/// One priority tier of the project worklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorklistTier {
    /// Section heading, e.g. "CRITICAL (Do First)".
    pub label: String,
    #[serde(default)]
    pub items: Vec<String>,
    /// Rough remaining effort, surfaced by the metrics report.
    #[serde(default)]
    pub estimated_hours: f64,
}

/// Externally supplied worklist content: a project title plus ordered
/// tiers. This is configuration handed to the composer, not data derived
/// from the session, and nothing here is baked into the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorklistConfig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tiers: Vec<WorklistTier>,
}

impl WorklistConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn total_estimated_hours(&self) -> f64 {
        self.tiers.iter().map(|t| t.estimated_hours).sum()
    }
}
