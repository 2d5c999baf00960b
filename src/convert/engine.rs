//! pdflatex rendering engine.
//!
//! Handles writing LaTeX source to a per-request scratch workspace,
//! invoking the compiler, and collecting the output PDF.

use std::fs;
use std::process::{Command, Output};

use tempfile::tempdir;
use uuid::Uuid;

use super::RenderError;

/// Content type of the generated artifact.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Download name suggested to the client. Fixed, not derived from the request.
pub const DOWNLOAD_FILENAME: &str = "resume.pdf";

/// Engine for rendering LaTeX source to PDF via an external compiler binary.
#[derive(Clone)]
pub struct LatexEngine {
    program: String,
}

impl LatexEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Render a LaTeX source string to PDF bytes.
    ///
    /// Each call gets its own temporary workspace and a random base name, so
    /// concurrent renders cannot collide. The workspace and everything the
    /// compiler left in it (`.log`, `.aux`, partial output) are removed when
    /// this function returns, on every path.
    pub fn render(&self, latex_source: &str) -> Result<Vec<u8>, RenderError> {
        let workspace = tempdir().map_err(RenderError::Workspace)?;

        let base = Uuid::new_v4().to_string();
        let tex_path = workspace.path().join(format!("{base}.tex"));
        let pdf_path = workspace.path().join(format!("{base}.pdf"));

        fs::write(&tex_path, latex_source).map_err(RenderError::WriteSource)?;

        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg(format!("-output-directory={}", workspace.path().display()))
            .arg(&tex_path)
            .output()
            .map_err(RenderError::Spawn)?;

        if !output.status.success() {
            return Err(RenderError::RendererFailed {
                code: output.status.code(),
                diagnostics: diagnostics_from(&output),
            });
        }

        // pdflatex can exit zero without producing a PDF, e.g. after a
        // recoverable-error run in nonstop mode.
        if !pdf_path.exists() {
            return Err(RenderError::MissingArtifact);
        }

        fs::read(&pdf_path).map_err(RenderError::ReadArtifact)
    }
}

/// Prefer stderr; pdflatex writes most of its diagnostics to stdout.
fn diagnostics_from(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).into_owned()
    } else {
        stderr.into_owned()
    }
}
