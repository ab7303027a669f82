use crate::{CatalogError, paths::CatalogPaths};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub teachers_file: String,
    pub courses_file: String,
    pub duplicate_policy: DuplicatePolicy,
}

impl CatalogConfig {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_files<S: Into<String>>(mut self, teachers_file: S, courses_file: S) -> Self {
        self.teachers_file = teachers_file.into();
        self.courses_file = courses_file.into();
        self
    }

    /// Loads a TOML configuration file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(text).map_err(|e| CatalogError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.teachers_file.trim().is_empty() {
            return Err(CatalogError::config("teachers_file cannot be empty"));
        }
        if self.courses_file.trim().is_empty() {
            return Err(CatalogError::config("courses_file cannot be empty"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            teachers_file: "teachers.json".to_string(),
            courses_file: "courses.json".to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl CatalogPaths for CatalogConfig {
    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn teachers_path(&self) -> PathBuf {
        self.data_dir.join(&self.teachers_file)
    }

    fn courses_path(&self) -> PathBuf {
        self.data_dir.join(&self.courses_file)
    }
}

/// Which record wins when several course records share a name.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "String")]
pub enum DuplicatePolicy {
    #[serde(rename = "first")]
    First,
    #[default]
    #[serde(rename = "last")]
    Last,
}

impl DuplicatePolicy {
    pub fn is_first(&self) -> bool {
        matches!(self, Self::First)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Last)
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Last => write!(f, "last"),
        }
    }
}

impl TryFrom<&str> for DuplicatePolicy {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            _ => Err(CatalogError::config(format!(
                "Invalid duplicate policy: '{}'. Use 'first' or 'last'",
                value
            ))),
        }
    }
}

impl TryFrom<String> for DuplicatePolicy {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}
