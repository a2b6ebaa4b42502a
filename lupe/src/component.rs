//! UI-component source stub for the current markup.
//!
//! This is a textual substitution over attribute names, deliberately scoped
//! to simple, non-nested attribute syntax. It is not a parser: every
//! `attr=` occurrence after a delimiter is rewritten, including all matches
//! on one line, and attributes inside nested quoted strings get no special
//! treatment. Running the rewrite on its own output is a no-op.

use regex_lite::{Captures, Regex};
use std::sync::OnceLock;

// Delimiter, attribute name, '='. The delimiter is kept as-is.
fn attr_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([\s<])([A-Za-z_:][\w:.-]*)=").unwrap())
}

fn to_camel(name: &str) -> String {
    let mut parts = name.split('-');
    let mut out = String::from(parts.next().unwrap_or(""));
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// `class` -> `className`, `for` -> `htmlFor`, hyphenated names to camelCase;
/// `data-*` and `aria-*` pass through untouched.
pub fn rewrite_attributes(svg: &str) -> String {
    attr_pattern()
        .replace_all(svg, |caps: &Captures| {
            let delim = &caps[1];
            let attr = &caps[2];
            let name = if attr.starts_with("data-") || attr.starts_with("aria-") {
                attr.to_string()
            } else if attr == "class" {
                "className".to_string()
            } else if attr == "for" {
                "htmlFor".to_string()
            } else if attr.contains('-') {
                to_camel(attr)
            } else {
                attr.to_string()
            };
            format!("{}{}=", delim, name)
        })
        .into_owned()
}

/// The rewritten markup wrapped in a trivial function-component shell.
pub fn component_source(svg: &str) -> String {
    format!(
        "function Icon(props) {{\n  return (\n    {}\n  );\n}}\nexport default Icon;",
        rewrite_attributes(svg)
    )
}
