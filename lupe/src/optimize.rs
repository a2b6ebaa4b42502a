//! Optimization adapter over the external minifier.
//!
//! The document is parsed and re-serialized through `usvg`; this module only
//! plumbs configuration, runs the convergence loop, and keeps the size
//! statistics. No minification rules live here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convergence cap for the multipass loop.
const MAX_PASSES: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizeConfig {
    /// Re-run the pass set until the output stops shrinking.
    pub multipass: bool,
    /// Decimal places for coordinates and transforms.
    pub precision: u8,
    /// Keep the root `viewBox` attribute in the output.
    pub keep_view_box: bool,
    /// Keep the root `width`/`height` attributes in the output.
    pub keep_dimensions: bool,
}

impl Default for OptimizeConfig {
    fn default() -> OptimizeConfig {
        OptimizeConfig {
            multipass: true,
            precision: 2,
            keep_view_box: true,
            keep_dimensions: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("optimization failed: {0}")]
    Backend(#[from] usvg::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OptimizeStats {
    /// UTF-8 byte length before optimization.
    pub before: usize,
    /// UTF-8 byte length after.
    pub after: usize,
}

impl OptimizeStats {
    pub fn saved_percent(&self) -> i32 {
        if self.before == 0 {
            return 0;
        }
        (100.0 * (1.0 - self.after as f64 / self.before as f64)).round() as i32
    }
}

/// Minify `source`. The document is not touched by this function; callers
/// decide what to do with the result (see [`crate::Viewer::optimize`]).
pub fn optimize(source: &str, config: &OptimizeConfig) -> Result<String, OptimizeError> {
    let mut out = reserialize(source, config.precision)?;
    if config.multipass {
        for _ in 1..MAX_PASSES {
            let next = reserialize(&out, config.precision)?;
            if next.len() >= out.len() {
                break;
            }
            out = next;
        }
    }
    if !config.keep_view_box {
        out = strip_root_attr(&out, "viewBox");
    }
    if !config.keep_dimensions {
        out = strip_root_attr(&out, "width");
        out = strip_root_attr(&out, "height");
    }
    Ok(out)
}

fn reserialize(source: &str, precision: u8) -> Result<String, OptimizeError> {
    let tree = usvg::Tree::from_str(source, &usvg::Options::default())?;
    let write = usvg::WriteOptions {
        indent: usvg::Indent::None,
        coordinates_precision: precision,
        transforms_precision: precision,
        ..Default::default()
    };
    Ok(tree.to_string(&write))
}

/// Remove one `name="..."` attribute from the opening `<svg ...>` tag.
/// Nothing past the first `>` is touched.
fn strip_root_attr(svg: &str, name: &str) -> String {
    let Some(tag_end) = svg.find('>') else {
        return svg.to_string();
    };
    let (head, tail) = svg.split_at(tag_end);
    let needle = format!(" {}=\"", name);
    let Some(attr_start) = head.find(&needle) else {
        return svg.to_string();
    };
    let value_start = attr_start + needle.len();
    let Some(quote) = head[value_start..].find('"') else {
        return svg.to_string();
    };
    let mut out = String::with_capacity(svg.len());
    out.push_str(&head[..attr_start]);
    out.push_str(&head[value_start + quote + 1..]);
    out.push_str(tail);
    out
}
