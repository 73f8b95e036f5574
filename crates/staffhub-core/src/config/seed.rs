//! Seed data configuration.

use serde::{Deserialize, Serialize};

/// Generated seed data settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether to populate an empty database with generated data on startup.
    #[serde(default)]
    pub auto: bool,
}
