//! scaffold::generate
//!
//! Concurrent rendering of the template table onto disk.
//!
//! # Concurrency
//!
//! The mappings in [`MAPPINGS`] are independent: they share no mutable
//! state and write disjoint target paths. They are dispatched fire-all
//! join-all on a [`tokio::task::JoinSet`]; the stage completes only
//! when every task has joined.
//!
//! # Failure semantics
//!
//! Any single render or write failure fails the whole stage with an
//! aggregate error naming every failed mapping. Files already written
//! by other tasks are NOT rolled back; re-running requires removing the
//! partial tree first (the pre-existing-root check below enforces
//! this).

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinSet;

use super::templates::{self, RenderError, TemplateMapping, MAPPINGS};
use crate::core::types::ProjectRequest;

/// One mapping that failed to generate.
#[derive(Debug)]
pub struct MappingFailure {
    /// Target path (relative to the project root) of the failed mapping.
    pub target: &'static str,
    /// Human-readable failure detail.
    pub detail: String,
}

impl fmt::Display for MappingFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.detail)
    }
}

fn summarize(failures: &[MappingFailure]) -> String {
    let details: Vec<String> = failures.iter().map(MappingFailure::to_string).collect();
    format!(
        "{} project file(s) failed to generate: {}",
        failures.len(),
        details.join("; ")
    )
}

/// Errors from the file-generation stage.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The project directory already exists.
    #[error("directory '{}' already exists; remove it or pick another name", .0.display())]
    RootExists(PathBuf),

    /// The project root could not be created.
    #[error("failed to create project directory '{}': {source}", .path.display())]
    CreateRoot {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The embedded template set failed to compile.
    #[error(transparent)]
    Templates(#[from] RenderError),

    /// One or more mappings failed to render or write.
    #[error("{}", summarize(.failures))]
    Failed {
        /// Every mapping that failed, ordered by target path
        failures: Vec<MappingFailure>,
    },

    /// A generation task panicked.
    #[error("internal error: generation task failed: {0}")]
    Internal(String),
}

/// Render every mapping for `request` under `base/<name>/`.
///
/// Returns the full list of written paths on success. On failure the
/// aggregate error names every failed mapping; completed mappings stay
/// on disk.
pub async fn generate_all(
    request: &ProjectRequest,
    base: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    let tera = Arc::new(templates::engine()?);
    generate_with(tera, request, base).await
}

/// Fan out the mapping table over the given engine.
///
/// Split from [`generate_all`] so the failure-collection path can be
/// exercised with an engine that is missing templates.
async fn generate_with(
    tera: Arc<tera::Tera>,
    request: &ProjectRequest,
    base: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    let root = request.name.root_under(base);
    if root.exists() {
        return Err(GenerateError::RootExists(root));
    }
    std::fs::create_dir_all(&root).map_err(|source| GenerateError::CreateRoot {
        path: root.clone(),
        source,
    })?;

    let request = Arc::new(request.clone());

    let mut tasks: JoinSet<Result<PathBuf, MappingFailure>> = JoinSet::new();
    for mapping in MAPPINGS {
        let tera = Arc::clone(&tera);
        let request = Arc::clone(&request);
        let root = root.clone();
        tasks.spawn(async move { write_one(&tera, mapping, &request, &root).await });
    }

    let mut written = Vec::with_capacity(MAPPINGS.len());
    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Ok(path)) => written.push(path),
            Ok(Err(failure)) => failures.push(failure),
            Err(join_err) => return Err(GenerateError::Internal(join_err.to_string())),
        }
    }

    if !failures.is_empty() {
        failures.sort_by_key(|f| f.target);
        return Err(GenerateError::Failed { failures });
    }

    written.sort();
    Ok(written)
}

/// Render and write a single mapping.
async fn write_one(
    tera: &tera::Tera,
    mapping: &TemplateMapping,
    request: &ProjectRequest,
    root: &Path,
) -> Result<PathBuf, MappingFailure> {
    let fail = |detail: String| MappingFailure {
        target: mapping.target,
        detail,
    };

    let contents = templates::render(tera, mapping, request).map_err(|e| fail(e.to_string()))?;

    let path = mapping.target_path(root);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| fail(format!("creating '{}': {e}", parent.display())))?;
    }
    tokio::fs::write(&path, contents)
        .await
        .map_err(|e| fail(format!("writing: {e}")))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn request(module: Option<&str>) -> ProjectRequest {
        ProjectRequest::resolve("orders", module).unwrap()
    }

    #[tokio::test]
    async fn generates_exactly_the_mapped_paths() {
        let dir = TempDir::new().unwrap();
        let written = generate_all(&request(None), dir.path()).await.unwrap();

        let expected: BTreeSet<PathBuf> = MAPPINGS
            .iter()
            .map(|m| m.target_path(&dir.path().join("orders")))
            .collect();
        let actual: BTreeSet<PathBuf> = written.into_iter().collect();
        assert_eq!(actual, expected);

        for path in &expected {
            assert!(path.is_file(), "missing {}", path.display());
        }
    }

    #[tokio::test]
    async fn go_mod_uses_the_module_flag() {
        let dir = TempDir::new().unwrap();
        generate_all(&request(Some("github.com/acme/orders")), dir.path())
            .await
            .unwrap();

        let go_mod = std::fs::read_to_string(dir.path().join("orders/go.mod")).unwrap();
        assert!(go_mod.contains("module github.com/acme/orders"));
    }

    #[tokio::test]
    async fn env_file_matches_the_sample() {
        let dir = TempDir::new().unwrap();
        generate_all(&request(None), dir.path()).await.unwrap();

        let sample = std::fs::read_to_string(dir.path().join("orders/.env-sample")).unwrap();
        let active = std::fs::read_to_string(dir.path().join("orders/.env")).unwrap();
        assert_eq!(sample, active);
    }

    /// Engine with placeholder sources for every template except `missing`.
    fn engine_without(missing: &[&str]) -> tera::Tera {
        let mut tera = tera::Tera::default();
        for mapping in MAPPINGS.iter().filter(|m| !missing.contains(&m.template)) {
            tera.add_raw_template(mapping.template, "placeholder").unwrap();
        }
        tera
    }

    #[tokio::test]
    async fn one_missing_template_fails_the_stage_and_names_its_target() {
        let dir = TempDir::new().unwrap();
        let tera = Arc::new(engine_without(&["go.mod"]));

        let err = generate_with(tera, &request(None), dir.path())
            .await
            .unwrap_err();

        match &err {
            GenerateError::Failed { failures } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].target, "go.mod");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("1 project file(s) failed"));
        assert!(err.to_string().contains("go.mod"));
        // Completed mappings stay on disk; no rollback.
        assert!(dir.path().join("orders/README.md").is_file());
        assert!(!dir.path().join("orders/go.mod").exists());
    }

    #[tokio::test]
    async fn aggregate_failure_lists_every_target_in_order() {
        let dir = TempDir::new().unwrap();
        // env-sample feeds two targets, so three mappings fail.
        let tera = Arc::new(engine_without(&["env-sample", "go.mod"]));

        let err = generate_with(tera, &request(None), dir.path())
            .await
            .unwrap_err();

        match err {
            GenerateError::Failed { failures } => {
                let targets: Vec<&str> = failures.iter().map(|f| f.target).collect();
                assert_eq!(targets, vec![".env", ".env-sample", "go.mod"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn failure_summary_names_each_mapping_with_its_detail() {
        let failures = vec![
            MappingFailure {
                target: ".env",
                detail: "template not found".to_string(),
            },
            MappingFailure {
                target: "go.mod",
                detail: "writing: permission denied".to_string(),
            },
        ];
        let message = GenerateError::Failed { failures }.to_string();
        assert_eq!(
            message,
            "2 project file(s) failed to generate: \
             .env: template not found; go.mod: writing: permission denied"
        );
    }

    #[tokio::test]
    async fn refuses_an_existing_project_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("orders")).unwrap();

        let err = generate_all(&request(None), dir.path()).await.unwrap_err();
        assert!(matches!(err, GenerateError::RootExists(_)));
        // Nothing was written into the pre-existing directory.
        assert_eq!(
            std::fs::read_dir(dir.path().join("orders")).unwrap().count(),
            0
        );
    }
}
