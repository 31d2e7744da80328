use serde::{Deserialize, Serialize};

pub const BUCKET_VAR: &str = "STUDYGROUP_BUCKET";
pub const REGION_VAR: &str = "STUDYGROUP_REGION";

const DEFAULT_BUCKET: &str = "studygroup-data";
const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset or blank variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            bucket: get(BUCKET_VAR).unwrap_or(defaults.bucket),
            region: get(REGION_VAR).unwrap_or(defaults.region),
        }
    }
}
