//! The fixed standalone-document scaffold and its inverse.
//!
//! Artifacts are interpolated raw, each on its own lines, so the regions
//! between the fixed pieces are byte-identical to the inputs.

use crate::error::{ArtifactKind, PackageError, Result};

/// Everything up to the start of the style artifact.
const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Memory Flip Cards</title>
  <style>
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }
    body {
      font-family: 'Arial', 'Microsoft YaHei', sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
    }
    #app {
      width: 100%;
    }

/* game styles */
"#;

/// Between the style artifact and the script artifact.
const MIDDLE: &str = r#"
</style>
</head>
<body>
  <div id="app"></div>

<script>
"#;

const TAIL: &str = r#"
</script>
</body>
</html>
"#;

/// Build the standalone document around the two artifacts.
pub fn render_standalone(script: &str, style: &str) -> String {
    let mut html =
        String::with_capacity(HEAD.len() + style.len() + MIDDLE.len() + script.len() + TAIL.len());
    html.push_str(HEAD);
    html.push_str(style);
    html.push_str(MIDDLE);
    html.push_str(script);
    html.push_str(TAIL);
    html
}

/// The two inline regions of a standalone document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions<'a> {
    pub style: &'a str,
    pub script: &'a str,
}

/// Split a document produced by [`render_standalone`] back into its regions.
///
/// A style artifact that itself contains the scaffold text between the
/// regions cannot be told apart from the scaffold; the first occurrence wins.
pub fn extract_regions(html: &str) -> Result<Regions<'_>> {
    let missing = |region| PackageError::RegionMissing { region };

    let rest = html
        .strip_prefix(HEAD)
        .ok_or_else(|| missing(ArtifactKind::Style))?;
    let rest = rest
        .strip_suffix(TAIL)
        .ok_or_else(|| missing(ArtifactKind::Script))?;
    let split = rest.find(MIDDLE).ok_or_else(|| missing(ArtifactKind::Style))?;

    Ok(Regions {
        style: &rest[..split],
        script: &rest[split + MIDDLE.len()..],
    })
}
