//! Structural statistics for the current document.

use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgInfo {
    /// Declared width attribute, or "auto".
    pub width: String,
    /// Declared height attribute, or "auto".
    pub height: String,
    pub view_box: Option<String>,
    pub element_count: usize,
    pub byte_size: usize,
}

/// First `name="value"` occurrence anywhere in the markup. The leading space
/// requires a real attribute delimiter, so `width` does not match inside
/// `stroke-width`.
pub(crate) fn attr_value<'a>(svg: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = svg.find(&needle)? + needle.len();
    let end = svg[start..].find('"')?;
    Some(&svg[start..start + end])
}

// Opening-tag scan, not a DOM walk: counts '<' followed by a letter.
fn count_elements(svg: &str) -> usize {
    svg.as_bytes()
        .windows(2)
        .filter(|w| w[0] == b'<' && w[1].is_ascii_alphabetic())
        .count()
}

pub fn inspect(svg: &str) -> Option<SvgInfo> {
    if !svg.contains("<svg") {
        return None;
    }
    Some(SvgInfo {
        width: attr_value(svg, "width").unwrap_or("auto").to_string(),
        height: attr_value(svg, "height").unwrap_or("auto").to_string(),
        view_box: attr_value(svg, "viewBox").map(str::to_string),
        element_count: count_elements(svg),
        byte_size: svg.len(),
    })
}

/// "0 B", "823 B", "1.5 KB", "2 MB". 1024-based, one decimal, trailing
/// ".0" dropped.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024f64.ln()).floor() as usize;
    let exp = exp.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let text = format!("{:.1}", value);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{} {}", text, UNITS[exp])
}
