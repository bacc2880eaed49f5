use std::path::PathBuf;

use miette::Diagnostic;
use plater_core::InvalidIdentifier;
use thiserror::Error;

/// Result type for plater-codegen operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no template for key '{key}'")]
    #[diagnostic(
        code(plater::template_not_found),
        help("available templates: {available}")
    )]
    TemplateNotFound { key: String, available: String },

    #[error("failed to render template '{key}'")]
    #[diagnostic(code(plater::template_render))]
    Render {
        key: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to read templates from '{path}'")]
    #[diagnostic(help("pass a template directory with --templates"))]
    TemplateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Inflect(#[from] InvalidIdentifier),
}

impl Error {
    pub(crate) fn template_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::TemplateDir {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn render(key: &str, source: minijinja::Error) -> Self {
        Error::Render {
            key: key.to_string(),
            source,
        }
    }
}
