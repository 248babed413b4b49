//! scaffold::templates
//!
//! The fixed template table and its rendering.
//!
//! # Design
//!
//! The generated file set is data, not code: [`MAPPINGS`] pairs every
//! embedded template with its target path (relative to the project
//! root) and the substitution keys it requires. Completeness of the
//! table can be checked independently of any rendering logic.
//!
//! Templates are compiled into the binary with `include_str!` and
//! rendered through [`tera`]; the engine is built once per run and
//! shared across the concurrent generation tasks.

use std::path::{Path, PathBuf};

use tera::Tera;
use thiserror::Error;

use crate::core::types::ProjectRequest;

/// Errors from template rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The embedded template set failed to compile.
    #[error("failed to load embedded templates: {0}")]
    Load(#[source] tera::Error),

    /// A named template failed to render.
    #[error("failed to render template '{template}': {source}")]
    Render {
        /// Template identifier from [`MAPPINGS`]
        template: &'static str,
        /// Underlying tera error
        #[source]
        source: tera::Error,
    },
}

/// A substitution key a template requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstKey {
    /// The project name.
    Name,
    /// The Go module identifier.
    Module,
}

/// One fixed pairing of template id, target path, and required keys.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMapping {
    /// Template identifier (also the embedded asset name).
    pub template: &'static str,
    /// Target path relative to the project root.
    pub target: &'static str,
    /// Substitution keys the template requires.
    pub keys: &'static [SubstKey],
}

impl TemplateMapping {
    /// The absolute target path under the given project root.
    pub fn target_path(&self, root: &Path) -> PathBuf {
        root.join(self.target)
    }
}

use SubstKey::{Module, Name};

/// The complete generated file set.
///
/// Two mappings share the `env-sample` template: one committed as the
/// sample, one written as the active `.env` file.
pub const MAPPINGS: &[TemplateMapping] = &[
    TemplateMapping {
        template: "cmd/debug/main.go",
        target: "cmd/debug/main.go",
        keys: &[Module],
    },
    TemplateMapping {
        template: "application/contracts.go",
        target: "application/contracts.go",
        keys: &[Module],
    },
    TemplateMapping {
        template: "domain/contracts.go",
        target: "domain/contracts.go",
        keys: &[],
    },
    TemplateMapping {
        template: "domain/entities.go",
        target: "domain/entities.go",
        keys: &[],
    },
    TemplateMapping {
        template: "domain/value_objects.go",
        target: "domain/value_objects.go",
        keys: &[],
    },
    TemplateMapping {
        template: "infra/contracts.go",
        target: "infra/contracts.go",
        keys: &[],
    },
    TemplateMapping {
        template: "infra/value_objects.go",
        target: "infra/value_objects.go",
        keys: &[],
    },
    TemplateMapping {
        template: "infra/log/log.go",
        target: "infra/log/log.go",
        keys: &[Module],
    },
    TemplateMapping {
        template: "infra/errors/errors.go",
        target: "infra/errors/errors.go",
        keys: &[Module],
    },
    TemplateMapping {
        template: "infra/errors/errors_test.go",
        target: "infra/errors/errors_test.go",
        keys: &[Module],
    },
    TemplateMapping {
        template: "makefile",
        target: "Makefile",
        keys: &[],
    },
    TemplateMapping {
        template: "gitignore",
        target: ".gitignore",
        keys: &[],
    },
    TemplateMapping {
        template: "readme.md",
        target: "README.md",
        keys: &[Name],
    },
    TemplateMapping {
        template: "go.mod",
        target: "go.mod",
        keys: &[Module],
    },
    TemplateMapping {
        template: "env-sample",
        target: ".env-sample",
        keys: &[],
    },
    TemplateMapping {
        template: "env-sample",
        target: ".env",
        keys: &[],
    },
    TemplateMapping {
        template: "github/pull_request.md",
        target: ".github/PULL_REQUEST_TEMPLATE.md",
        keys: &[],
    },
    TemplateMapping {
        template: "github/issue_template/bug_report.md",
        target: ".github/ISSUE_TEMPLATE/bug_report.md",
        keys: &[],
    },
    TemplateMapping {
        template: "github/issue_template/feature_request.md",
        target: ".github/ISSUE_TEMPLATE/feature_request.md",
        keys: &[],
    },
];

/// Embedded template sources, keyed by template id.
const ASSETS: &[(&str, &str)] = &[
    (
        "cmd/debug/main.go",
        include_str!("../../templates/cmd/debug/main.go.tera"),
    ),
    (
        "application/contracts.go",
        include_str!("../../templates/application/contracts.go.tera"),
    ),
    (
        "domain/contracts.go",
        include_str!("../../templates/domain/contracts.go.tera"),
    ),
    (
        "domain/entities.go",
        include_str!("../../templates/domain/entities.go.tera"),
    ),
    (
        "domain/value_objects.go",
        include_str!("../../templates/domain/value_objects.go.tera"),
    ),
    (
        "infra/contracts.go",
        include_str!("../../templates/infra/contracts.go.tera"),
    ),
    (
        "infra/value_objects.go",
        include_str!("../../templates/infra/value_objects.go.tera"),
    ),
    (
        "infra/log/log.go",
        include_str!("../../templates/infra/log/log.go.tera"),
    ),
    (
        "infra/errors/errors.go",
        include_str!("../../templates/infra/errors/errors.go.tera"),
    ),
    (
        "infra/errors/errors_test.go",
        include_str!("../../templates/infra/errors/errors_test.go.tera"),
    ),
    ("makefile", include_str!("../../templates/makefile.tera")),
    ("gitignore", include_str!("../../templates/gitignore.tera")),
    ("readme.md", include_str!("../../templates/readme.md.tera")),
    ("go.mod", include_str!("../../templates/go.mod.tera")),
    (
        "env-sample",
        include_str!("../../templates/env-sample.tera"),
    ),
    (
        "github/pull_request.md",
        include_str!("../../templates/github/pull_request.md.tera"),
    ),
    (
        "github/issue_template/bug_report.md",
        include_str!("../../templates/github/issue_template/bug_report.md.tera"),
    ),
    (
        "github/issue_template/feature_request.md",
        include_str!("../../templates/github/issue_template/feature_request.md.tera"),
    ),
];

/// Build the template engine over the embedded asset set.
pub fn engine() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(ASSETS.to_vec())
        .map_err(RenderError::Load)?;
    Ok(tera)
}

/// Render one mapping for the given request.
///
/// Both substitution keys are always available to the template; the
/// mapping's `keys` field documents which ones it actually requires.
pub fn render(
    tera: &Tera,
    mapping: &TemplateMapping,
    request: &ProjectRequest,
) -> Result<String, RenderError> {
    let mut ctx = tera::Context::new();
    ctx.insert("name", request.name.as_str());
    ctx.insert("module", &request.module);

    tera.render(mapping.template, &ctx)
        .map_err(|source| RenderError::Render {
            template: mapping.template,
            source,
        })
}
