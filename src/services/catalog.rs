//! Program catalog sources
//!
//! The recommendation engine is fed once at startup from a `ProgramSource`.
//! The JSON file source backs the running service; the in-memory source lets
//! callers inject a fixed dataset.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::Program,
};

/// Trait for anything that can yield the program dataset
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProgramSource: Send + Sync {
    /// Load every program, in dataset order
    async fn load_programs(&self) -> AppResult<Vec<Program>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Reads programs from a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ProgramSource for JsonFileSource {
    async fn load_programs(&self) -> AppResult<Vec<Program>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AppError::DatasetUnavailable(format!(
                    "Programs data file not found: {}",
                    self.path.display()
                )),
                _ => AppError::Io(e),
            })?;

        // The file must be an array; individual records may still be bad
        let records: Vec<Value> = serde_json::from_str(&contents)?;
        let total = records.len();

        let programs: Vec<Program> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Program>(record) {
                Ok(program) => Some(program),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        index,
                        error = %e,
                        "Skipping invalid program record"
                    );
                    None
                }
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            count = programs.len(),
            skipped = total - programs.len(),
            "Parsed programs file"
        );

        Ok(programs)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

/// Serves a fixed, caller-provided dataset
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    programs: Vec<Program>,
}

impl InMemorySource {
    pub fn new(programs: Vec<Program>) -> Self {
        Self { programs }
    }
}

#[async_trait::async_trait]
impl ProgramSource for InMemorySource {
    async fn load_programs(&self) -> AppResult<Vec<Program>> {
        Ok(self.programs.clone())
    }

    fn name(&self) -> &'static str {
        "in_memory"
    }
}
