//! Standalone packaging: one HTML file from a script and a style artifact.
//!
//! - `template` — fixed scaffold, rendering and region extraction
//! - `config` — default artifact paths and `flipcards.json` overrides

mod config;
mod template;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ArtifactKind, PackageError, Result};

pub use config::{
    resolve, tool_root, ArtifactPaths, ConfigFile, CONFIG_FILE, DEFAULT_OUTPUT, DEFAULT_SCRIPT,
    DEFAULT_STYLE,
};
pub use template::{extract_regions, render_standalone, Regions};

/// What a packaging run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub script_bytes: usize,
    pub style_bytes: usize,
}

impl PackageReport {
    /// The two confirmation lines shown after a successful run.
    pub fn status_lines(&self) -> [String; 2] {
        [
            format!(
                "wrote standalone HTML to {} ({} bytes)",
                self.output.display(),
                self.bytes
            ),
            "open it directly in a browser, no server needed".to_string(),
        ]
    }
}

/// Read both artifacts, render the document and write it to `output_path`.
///
/// Both inputs are read before the output is touched, so a missing artifact
/// leaves any existing output file as it was.
pub fn package(script_path: &Path, style_path: &Path, output_path: &Path) -> Result<PackageReport> {
    let script = read_artifact(ArtifactKind::Script, script_path)?;
    let style = read_artifact(ArtifactKind::Style, style_path)?;

    let html = render_standalone(&script, &style);
    fs::write(output_path, &html).map_err(|source| PackageError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "packaged {} + {} -> {}",
        script_path.display(),
        style_path.display(),
        output_path.display()
    );

    Ok(PackageReport {
        output: output_path.to_path_buf(),
        bytes: html.len(),
        script_bytes: script.len(),
        style_bytes: style.len(),
    })
}

/// [`package`] over a resolved path set.
pub fn package_paths(paths: &ArtifactPaths) -> Result<PackageReport> {
    package(&paths.script, &paths.style, &paths.output)
}

/// Outcome of comparing a standalone document against its artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verification {
    pub script_matches: bool,
    pub style_matches: bool,
}

impl Verification {
    pub fn is_ok(&self) -> bool {
        self.script_matches && self.style_matches
    }
}

/// Check that the document at `paths.output` embeds both artifacts verbatim.
pub fn verify(paths: &ArtifactPaths) -> Result<Verification> {
    let script = read_artifact(ArtifactKind::Script, &paths.script)?;
    let style = read_artifact(ArtifactKind::Style, &paths.style)?;
    let html = fs::read_to_string(&paths.output).map_err(|source| PackageError::ReadDocument {
        path: paths.output.clone(),
        source,
    })?;

    let regions = extract_regions(&html)?;
    Ok(Verification {
        script_matches: regions.script == script,
        style_matches: regions.style == style,
    })
}

fn read_artifact(kind: ArtifactKind, path: &Path) -> Result<String> {
    let text =
        fs::read_to_string(path).map_err(|e| PackageError::read_artifact(kind, path, e))?;
    log::trace!("read {kind} artifact {} ({} bytes)", path.display(), text.len());
    Ok(text)
}
