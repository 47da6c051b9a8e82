//! Artifact locations: built-in defaults, `flipcards.json`, then CLI flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PackageError, Result};

pub const DEFAULT_SCRIPT: &str = "dist-single/memory-game.js";
pub const DEFAULT_STYLE: &str = "dist-single/style.css";
pub const DEFAULT_OUTPUT: &str = "game-standalone.html";
pub const CONFIG_FILE: &str = "flipcards.json";

/// Optional on-disk overrides, relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub script: Option<PathBuf>,
    #[serde(default)]
    pub style: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Fully resolved input and output paths for one packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub script: PathBuf,
    pub style: PathBuf,
    pub output: PathBuf,
}

impl ArtifactPaths {
    /// The default layout under `root`.
    pub fn defaults(root: &Path) -> Self {
        Self {
            script: root.join(DEFAULT_SCRIPT),
            style: root.join(DEFAULT_STYLE),
            output: root.join(DEFAULT_OUTPUT),
        }
    }

    /// Defaults, overlaid with `root/flipcards.json` when present.
    pub fn load(root: &Path) -> Result<Self> {
        let mut paths = Self::defaults(root);
        if let Some(config) = read_config(root)? {
            paths = paths.with_overrides(root, config.script, config.style, config.output);
        }
        Ok(paths)
    }

    /// Replace any path given as `Some`, resolving it against `root`.
    pub fn with_overrides(
        mut self,
        root: &Path,
        script: Option<PathBuf>,
        style: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        if let Some(p) = script {
            self.script = resolve(root, &p);
        }
        if let Some(p) = style {
            self.style = resolve(root, &p);
        }
        if let Some(p) = output {
            self.output = resolve(root, &p);
        }
        self
    }
}

fn read_config(root: &Path) -> Result<Option<ConfigFile>> {
    let path = root.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(PackageError::config(&path, e)),
    };
    let config = serde_json::from_str(&text).map_err(|e| PackageError::config(&path, e))?;
    log::debug!("loaded {}", path.display());
    Ok(Some(config))
}

/// Relative paths hang off `root`; absolute paths are kept as given.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Directory containing the running executable.
pub fn tool_root() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable '{}' has no parent directory", exe.display()),
        )
    })
}
