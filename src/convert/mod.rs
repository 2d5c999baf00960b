//! Conversion module - turns a raw LaTeX payload into a PDF response.

pub mod engine;
pub mod handlers;

pub use engine::LatexEngine;

use thiserror::Error;

/// Errors that can occur while rendering a LaTeX payload.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create scratch workspace: {0}")]
    Workspace(#[source] std::io::Error),
    #[error("failed to write LaTeX source: {0}")]
    WriteSource(#[source] std::io::Error),
    #[error("failed to launch renderer: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("renderer exited with status {code:?}")]
    RendererFailed {
        code: Option<i32>,
        diagnostics: String,
    },
    #[error("renderer reported success but produced no PDF")]
    MissingArtifact,
    #[error("failed to read generated PDF: {0}")]
    ReadArtifact(#[source] std::io::Error),
}
