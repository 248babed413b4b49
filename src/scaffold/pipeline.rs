//! scaffold::pipeline
//!
//! The staged scaffolding pipeline.
//!
//! # Stage order
//!
//! ```text
//! Generate -> InstallDeps -> GenerateMocks -> RunTests -> InitRepo -> done
//!                \______________\______________\____________\______ failed
//! ```
//!
//! Stages run strictly forward, one at a time. The first failure is
//! terminal: remaining stages never start, there are no retries and no
//! backward transitions. Mock generation, test execution, and git
//! initialization can each be disabled up front via [`StagePlan`].
//!
//! # Progress contract
//!
//! For every stage the [`Reporter`] sees `stage_started` strictly
//! before the stage's side effects and `stage_completed` strictly
//! after them; on failure it sees `pipeline_failed` exactly once and
//! nothing further.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use super::generate::{self, GenerateError};
use super::shell::{CommandRunner, ShellError};
use crate::core::types::ProjectRequest;

/// One discrete step of the scaffolding pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Render the template table into the project tree.
    Generate,
    /// `make deps` inside the generated project.
    InstallDeps,
    /// `make mock` inside the generated project.
    GenerateMocks,
    /// `make test` inside the generated project.
    RunTests,
    /// `git init` / `git add .` / `git commit` inside the generated project.
    InitRepo,
}

impl Stage {
    /// Short stable identifier, used in error messages and JSON output.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Generate => "file-generation",
            Stage::InstallDeps => "dependency-installation",
            Stage::GenerateMocks => "mock-generation",
            Stage::RunTests => "test-execution",
            Stage::InitRepo => "repository-initialization",
        }
    }

    /// Progress line shown when the stage starts.
    pub fn start_message(&self) -> &'static str {
        match self {
            Stage::Generate => "Creating project files...",
            Stage::InstallDeps => "Downloading dependencies...",
            Stage::GenerateMocks => "Building project mocks...",
            Stage::RunTests => "Running tests...",
            Stage::InitRepo => "Creating Git repository...",
        }
    }

    /// Progress line shown when the stage completes.
    pub fn done_message(&self) -> &'static str {
        match self {
            Stage::Generate => "Project files created",
            Stage::InstallDeps => "Dependencies downloaded",
            Stage::GenerateMocks => "Mocks created",
            Stage::RunTests => "Tests passed",
            Stage::InitRepo => "Git repository created",
        }
    }
}

// JSON output uses the same identifiers as error messages and
// reporter events.
impl Serialize for Stage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Which optional stages a run should include.
///
/// Generation and dependency installation always run; the rest default
/// to on and can be disabled individually.
#[derive(Debug, Clone, Copy)]
pub struct StagePlan {
    /// Run `make mock` after installing dependencies.
    pub mocks: bool,
    /// Run `make test` after mock generation.
    pub tests: bool,
    /// Initialize a git repository with a first commit.
    pub git: bool,
}

impl Default for StagePlan {
    fn default() -> Self {
        Self {
            mocks: true,
            tests: true,
            git: true,
        }
    }
}

impl StagePlan {
    /// The ordered stages this plan will run.
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![Stage::Generate, Stage::InstallDeps];
        if self.mocks {
            stages.push(Stage::GenerateMocks);
        }
        if self.tests {
            stages.push(Stage::RunTests);
        }
        if self.git {
            stages.push(Stage::InitRepo);
        }
        stages
    }
}

/// Outcome of one executed stage.
#[derive(Debug, Serialize)]
pub struct StageResult {
    /// The stage that ran.
    pub stage: Stage,
    /// Whether it succeeded.
    pub succeeded: bool,
    /// Failure detail, when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageResult {
    fn ok(stage: Stage) -> Self {
        Self {
            stage,
            succeeded: true,
            error: None,
        }
    }

    fn failed(stage: Stage, detail: String) -> Self {
        Self {
            stage,
            succeeded: false,
            error: Some(detail),
        }
    }
}

/// The failure that ended a stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// File generation failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// An external command failed.
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// A pipeline run that stopped at a stage.
#[derive(Debug, Error)]
#[error("{} failed: {source}", .stage.name())]
pub struct PipelineError {
    /// The stage that failed.
    pub stage: Stage,
    /// What went wrong.
    #[source]
    pub source: StageError,
    /// Stages that completed before the failure, in order.
    pub completed: Vec<Stage>,
}

impl PipelineError {
    /// The per-stage results up to and including the failure.
    pub fn results(&self) -> Vec<StageResult> {
        let mut results: Vec<StageResult> =
            self.completed.iter().map(|s| StageResult::ok(*s)).collect();
        results.push(StageResult::failed(self.stage, self.source.to_string()));
        results
    }
}

/// Observes stage progress. Purely observational; never affects
/// control flow.
pub trait Reporter {
    /// Called strictly before the stage's side effects.
    fn stage_started(&self, stage: Stage);
    /// Called strictly after the stage's side effects succeeded.
    fn stage_completed(&self, stage: Stage);
    /// Called exactly once when a stage fails; nothing follows it.
    fn pipeline_failed(&self, stage: Stage, error: &PipelineError);
}

/// A reporter that discards everything.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn stage_started(&self, _stage: Stage) {}
    fn stage_completed(&self, _stage: Stage) {}
    fn pipeline_failed(&self, _stage: Stage, _error: &PipelineError) {}
}

/// Drives the staged pipeline for one project request.
pub struct Pipeline<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    plan: StagePlan,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline over the given runner and reporter.
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a dyn Reporter, plan: StagePlan) -> Self {
        Self {
            runner,
            reporter,
            plan,
        }
    }

    /// Run every planned stage for `request`, generating under `base`.
    ///
    /// Returns the ordered per-stage results on success. The first
    /// failing stage aborts the run; stages after it never start.
    pub async fn run(
        &self,
        request: &ProjectRequest,
        base: &Path,
    ) -> Result<Vec<StageResult>, PipelineError> {
        let root = request.name.root_under(base);
        let mut results: Vec<StageResult> = Vec::new();

        for stage in self.plan.stages() {
            self.reporter.stage_started(stage);

            let outcome = match stage {
                Stage::Generate => generate::generate_all(request, base)
                    .await
                    .map(|_| ())
                    .map_err(StageError::from),
                Stage::InstallDeps => self.make("deps", &root),
                Stage::GenerateMocks => self.make("mock", &root),
                Stage::RunTests => self.make("test", &root),
                Stage::InitRepo => self.init_repo(&root),
            };

            match outcome {
                Ok(()) => {
                    self.reporter.stage_completed(stage);
                    results.push(StageResult::ok(stage));
                }
                Err(source) => {
                    let error = PipelineError {
                        stage,
                        source,
                        completed: results.iter().map(|r| r.stage).collect(),
                    };
                    self.reporter.pipeline_failed(stage, &error);
                    return Err(error);
                }
            }
        }

        Ok(results)
    }

    fn make(&self, target: &str, root: &Path) -> Result<(), StageError> {
        self.runner.run(root, "make", &[target])?;
        Ok(())
    }

    /// The three-command git sequence, fail-fast internally: a failing
    /// `init` prevents `add`, a failing `add` prevents `commit`.
    fn init_repo(&self, root: &Path) -> Result<(), StageError> {
        self.runner.run(root, "git", &["init"])?;
        self.runner.run(root, "git", &["add", "."])?;
        self.runner.run(root, "git", &["commit", "-m", "First commit"])?;
        Ok(())
    }
}
