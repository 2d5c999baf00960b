//! Shared test helpers: stub renderer binaries standing in for pdflatex.
//!
//! The engine invokes `<program> -interaction=nonstopmode
//! -output-directory=<dir> <source.tex>`; each stub is a shell script
//! honoring that contract.

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write an executable shell script into its own temp directory and return
/// the directory guard together with the script path.
pub fn stub_renderer(script_body: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create stub dir");
    let path = dir.path().join("fake-pdflatex");

    let mut file = fs::File::create(&path).expect("failed to create stub script");
    writeln!(file, "#!/bin/sh").unwrap();
    file.write_all(script_body.as_bytes()).unwrap();
    drop(file);

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    (dir, path)
}

/// Stub that produces a PDF whose body embeds the LaTeX source, so tests can
/// match payloads to artifacts.
pub fn succeeding_renderer() -> (TempDir, PathBuf) {
    stub_renderer(
        r#"
out_dir="${2#-output-directory=}"
base=$(basename "$3" .tex)
{ printf '%s' '%PDF-1.4 '; cat "$3"; } > "$out_dir/$base.pdf"
exit 0
"#,
    )
}

/// Stub that fails the way pdflatex does on bad input: diagnostics on
/// stdout, a short note on stderr, exit 1.
pub fn failing_renderer() -> (TempDir, PathBuf) {
    stub_renderer(
        r#"
echo '! Undefined control sequence.'
echo 'Emergency stop.' >&2
exit 1
"#,
    )
}

/// Stub that exits zero without writing any output file.
pub fn silent_renderer() -> (TempDir, PathBuf) {
    stub_renderer("exit 0\n")
}
