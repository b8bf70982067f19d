//! Font discovery via fontconfig
//!
//! Resolve a font name ("Family" or "Family Style") to a file path

use anyhow::{Context, Result};
use fontconfig::{Fontconfig, Pattern};
use std::ffi::CString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Style suffixes recognised in font names.
/// Longer names first so "SemiBold" is not read as "Bold".
const KNOWN_STYLES: &[&str] = &["SemiBold", "Bold", "Regular", "Book"];

/// Split "DejaVu Sans Bold" into ("DejaVu Sans", Some("Bold"))
fn split_style(font_name: &str) -> (&str, Option<&'static str>) {
    for style in KNOWN_STYLES {
        if let Some(prefix) = font_name.strip_suffix(style) {
            if prefix.is_empty() || prefix.ends_with(' ') {
                return (prefix.trim(), Some(*style));
            }
        }
    }
    (font_name, None)
}

/// Find the font file for a family name with optional style suffix.
///
/// Fails when fontconfig only has a substitute family.
pub fn find_font_path(font_name: &str) -> Result<PathBuf> {
    let fc = Fontconfig::new().context("Failed to initialize fontconfig")?;
    let (family_name, style_name) = split_style(font_name);

    let mut pattern = Pattern::new(&fc);
    let family_cstr = CString::new(family_name)
        .with_context(|| format!("Invalid family name: {}", family_name))?;
    pattern.add_string(fontconfig::FC_FAMILY, &family_cstr);

    if let Some(style) = style_name {
        let style_cstr = CString::new(style)
            .with_context(|| format!("Invalid style name: {}", style))?;
        pattern.add_string(fontconfig::FC_STYLE, &style_cstr);
    }

    let matched = pattern.font_match();

    // fontconfig always returns something; a different family means ours is missing
    if let Some(matched_family) = matched.get_string(fontconfig::FC_FAMILY) {
        if !matched_family.eq_ignore_ascii_case(family_name) {
            debug!(
                requested = font_name,
                matched_family = matched_family,
                "Fontconfig substituted a different family"
            );
            return Err(anyhow::anyhow!(
                "Font '{}' not found - fontconfig returned family '{}' instead",
                font_name,
                matched_family
            ));
        }
    }

    let file_path = matched
        .filename()
        .with_context(|| format!("No font file found for '{}'", font_name))?;
    let path = PathBuf::from(file_path);

    if !path.exists() {
        warn!(font = font_name, path = %path.display(), "Font file path from fontconfig does not exist");
        return Err(anyhow::anyhow!("Font file path '{}' does not exist", path.display()));
    }

    debug!(font = font_name, style = ?style_name, path = %path.display(), "Resolved font path");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_style() {
        assert_eq!(split_style("DejaVu Sans Bold"), ("DejaVu Sans", Some("Bold")));
        assert_eq!(split_style("Noto Sans SemiBold"), ("Noto Sans", Some("SemiBold")));
        assert_eq!(split_style("DejaVu Sans"), ("DejaVu Sans", None));
        // Suffix must be a separate word
        assert_eq!(split_style("Kobold"), ("Kobold", None));
    }

    #[test]
    fn test_find_common_fonts() {
        for family in ["DejaVu Sans", "Liberation Sans"] {
            if let Ok(path) = find_font_path(family) {
                assert!(path.is_absolute(), "Font path should be absolute");
            }
        }
    }
}
