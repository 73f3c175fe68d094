use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::parity::types::CaseSet;

pub const DEFAULT_CASE_PATHS: [&str; 5] = [
    "even.cases.yaml",
    "even.cases.yml",
    "even.cases.toml",
    ".even/cases.yaml",
    ".even/cases.toml",
];

#[derive(Error, Debug)]
pub enum CaseSetError {
    #[error("Case file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read case file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML case file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse TOML case file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported case file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Case set '{0}' contains no cases")]
    Empty(String),
}

pub struct CaseSetLoader {
    search_root: PathBuf,
}

impl Default for CaseSetLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl CaseSetLoader {
    pub fn new(search_root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: search_root.into(),
        }
    }

    /// Loads an explicit case file, or searches the default locations and
    /// falls back to [`CaseSet::builtin`].
    pub fn load_case_set(&self, path: Option<&Path>) -> Result<CaseSet, CaseSetError> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(CaseSetError::NotFound(path.to_path_buf()));
            }
            let set = self.parse_case_file(path)?;
            info!(path = %path.display(), cases = set.cases.len(), "Loaded case set");
            return Ok(set);
        }

        for candidate in DEFAULT_CASE_PATHS {
            let path = self.search_root.join(candidate);
            if !path.exists() {
                continue;
            }
            match self.parse_case_file(&path) {
                Ok(set) => {
                    info!(path = %path.display(), cases = set.cases.len(), "Loaded case set");
                    return Ok(set);
                }
                Err(e) => {
                    warn!("Failed to parse case file {}: {}", path.display(), e);
                }
            }
        }

        info!("No case file found, using builtin case set");
        Ok(CaseSet::builtin())
    }

    pub fn parse_case_file(&self, path: &Path) -> Result<CaseSet, CaseSetError> {
        let content = fs::read_to_string(path).map_err(|source| CaseSetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase);

        let mut set: CaseSet = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(CaseSetError::UnsupportedFormat(path.to_path_buf())),
        };

        if set.name.is_empty() {
            set.name = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("cases")
                .to_string();
        }

        if set.cases.is_empty() {
            return Err(CaseSetError::Empty(set.name));
        }

        Ok(set)
    }
}
