//! new command - Scaffold a new service project

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::core::types::ProjectRequest;
use crate::scaffold::pipeline::{Pipeline, StagePlan, StageResult};
use crate::scaffold::shell::SystemRunner;
use crate::scaffold::Context;
use crate::ui::output::{self, ConsoleReporter, Verbosity};

/// Machine-readable summary of one pipeline run.
#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    project: &'a str,
    module: &'a str,
    succeeded: bool,
    stages: Vec<StageResult>,
}

/// Scaffold a new service project and drive the toolchain stages.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `name` - Project name (becomes the root directory)
/// * `module` - Go module identifier; defaults to the name
/// * `skip_mocks` / `skip_tests` / `skip_git` - Disable optional stages
pub fn new(
    ctx: &Context,
    name: &str,
    module: Option<&str>,
    skip_mocks: bool,
    skip_tests: bool,
    skip_git: bool,
) -> Result<()> {
    // Validation runs before any filesystem or shell side effect.
    let request = ProjectRequest::resolve(name, module)?;

    let base = match ctx.cwd.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve working directory")?,
    };

    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    output::debug(
        format!("scaffolding '{}' (module '{}')", request.name, request.module),
        verbosity,
    );

    let runner = SystemRunner;
    let reporter = ConsoleReporter::new(verbosity);
    let plan = StagePlan {
        mocks: !skip_mocks,
        tests: !skip_tests,
        git: !skip_git,
    };
    let pipeline = Pipeline::new(&runner, &reporter, plan);

    // Template fan-out is async; shell stages block inside it.
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let outcome = runtime.block_on(pipeline.run(&request, &base));

    match outcome {
        Ok(stages) => {
            if ctx.json {
                emit_summary(&request, true, stages)?;
            } else {
                output::print(
                    format!("Service '{}' is ready", request.name),
                    verbosity,
                );
            }
            Ok(())
        }
        Err(err) => {
            if ctx.json {
                emit_summary(&request, false, err.results())?;
            }
            Err(err.into())
        }
    }
}

fn emit_summary(request: &ProjectRequest, succeeded: bool, stages: Vec<StageResult>) -> Result<()> {
    let summary = RunSummary {
        project: request.name.as_str(),
        module: &request.module,
        succeeded,
        stages,
    };
    let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
    println!("{json}");
    Ok(())
}
