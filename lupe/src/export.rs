use crate::inspect::attr_value;

/// Used when the document declares neither a usable viewBox nor dimensions.
pub const FALLBACK_SIZE: f64 = 512.0;
pub const SVG_FILENAME: &str = "graphic.svg";

/// Intrinsic pixel size of the document, in priority order: a well-formed
/// 4-token `viewBox`, then explicit numeric `width`/`height`, then the
/// 512x512 fallback.
pub fn intrinsic_size(svg: &str) -> (f64, f64) {
    if let Some(view_box) = attr_value(svg, "viewBox") {
        let tokens: Vec<f64> = view_box
            .split_whitespace()
            .map_while(|t| t.parse().ok().filter(|v: &f64| v.is_finite()))
            .collect();
        if tokens.len() == 4 && view_box.split_whitespace().count() == 4 {
            return (tokens[2], tokens[3]);
        }
    }
    if let (Some(w), Some(h)) = (dimension(svg, "width"), dimension(svg, "height")) {
        return (w, h);
    }
    (FALLBACK_SIZE, FALLBACK_SIZE)
}

fn dimension(svg: &str, name: &str) -> Option<f64> {
    attr_value(svg, name)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

/// Output canvas size for a raster export, at least 1x1 per axis.
pub fn raster_size(intrinsic: (f64, f64), scale: f64) -> (u32, u32) {
    let w = (intrinsic.0 * scale).floor().max(1.0);
    let h = (intrinsic.1 * scale).floor().max(1.0);
    (w as u32, h as u32)
}

pub fn png_filename(scale: f64) -> String {
    format!("export@{}x.png", scale)
}

/// Comma-separated scale factors ("1, 2, 3") from the export panel; tokens
/// that do not parse are skipped.
pub fn parse_scales(input: &str) -> Vec<f64> {
    input
        .split(',')
        .filter_map(|t| t.trim().parse::<f64>().ok())
        .filter(|s| s.is_finite())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_box_takes_priority() {
        let svg = r#"<svg viewBox="0 0 40 60" width="10" height="20"/>"#;
        assert_eq!(intrinsic_size(svg), (40.0, 60.0));
    }

    #[test]
    fn malformed_view_box_falls_through() {
        let svg = r#"<svg viewBox="0 0 40" width="10" height="20"/>"#;
        assert_eq!(intrinsic_size(svg), (10.0, 20.0));
        let svg = r#"<svg viewBox="0 0 x 60" width="10" height="20"/>"#;
        assert_eq!(intrinsic_size(svg), (10.0, 20.0));
    }

    #[test]
    fn scales_parse() {
        assert_eq!(parse_scales("1,2,3"), vec![1.0, 2.0, 3.0]);
        assert_eq!(parse_scales(" 1.5 , x, 2 "), vec![1.5, 2.0]);
        assert!(parse_scales("").is_empty());
    }
}
