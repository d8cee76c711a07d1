use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::base::ScanOptions;
use crate::base::constants::MODEL_EXTENSION;
use crate::conventions::{ConventionSet, ConventionViolation, ElementConvention};
use crate::error::ScanError;
use crate::scan::Session;

/// Every `.bpmn` file below `dir`, sorted by path.
pub fn collect_model_paths(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ScanError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(ScanError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory not found: {}", dir.display()),
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        let is_model = entry.file_type().is_file()
            && entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(MODEL_EXTENSION));
        if is_model {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// One model file and its parse, or why it could not be parsed.
#[derive(Debug)]
pub struct LoadedModel {
    pub path: PathBuf,
    pub session: Result<Session, ScanError>,
}

/// Outcome of checking one model file.
#[derive(Debug)]
pub struct ModelReport {
    pub path: PathBuf,
    pub outcome: Result<Vec<ConventionViolation>, ScanError>,
}

impl ModelReport {
    pub fn violations(&self) -> &[ConventionViolation] {
        self.outcome.as_deref().unwrap_or_default()
    }

    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, Ok(violations) if violations.is_empty())
    }
}

/// Loads and checks every model below a directory
#[derive(Debug, Clone)]
pub struct ModelLoader {
    options: ScanOptions,
}

impl ModelLoader {
    pub fn new() -> Self {
        Self::with_options(ScanOptions::default())
    }

    /// Sessions opened by this loader use `options`.
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Parse every model below `dir` in parallel, in the order of
    /// [`collect_model_paths`].
    ///
    /// A file that cannot be read or parsed is kept with its error and does
    /// not stop the others.
    pub fn load_directory(&self, dir: impl AsRef<Path>) -> Result<Vec<LoadedModel>, ScanError> {
        let paths = collect_model_paths(dir)?;
        tracing::debug!(models = paths.len(), "loading models");

        Ok(paths
            .into_par_iter()
            .map(|path| {
                let session = Session::open_with(&path, self.options.clone());
                if let Err(e) = &session {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                }
                LoadedModel { path, session }
            })
            .collect())
    }

    /// Check the naming conventions of every model below `dir`.
    ///
    /// Patterns are compiled before any file is read. Reports keep the order
    /// of [`collect_model_paths`].
    pub fn check_directory(
        &self,
        dir: impl AsRef<Path>,
        conventions: &[ElementConvention],
    ) -> Result<Vec<ModelReport>, ScanError> {
        let conventions = ConventionSet::compile(conventions)?;
        tracing::debug!(conventions = conventions.len(), "checking models");

        Ok(self
            .load_directory(dir)?
            .into_par_iter()
            .map(|model| ModelReport {
                outcome: model
                    .session
                    .map(|session| session.check_conventions(&conventions)),
                path: model.path,
            })
            .collect())
    }
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}
