//! TrueType faces for the PDF renderer: embedded bytes plus fontdue metrics

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::pdf::FONT_FAMILIES;
use crate::font_discovery::find_font_path;

/// A loaded font file. The raw bytes are embedded into the PDF; the parsed
/// font is only used to measure text.
pub struct FontFace {
    bytes: Vec<u8>,
    font: Font,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("bytes", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl FontFace {
    /// Load a TrueType font from a file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::from_bytes(bytes.as_slice(), FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;
        Ok(Self { bytes, font })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Advance width of `text` at `size` points, in points
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.font.metrics(ch, size).advance_width).sum()
    }
}

/// Regular and bold faces of one family
#[derive(Debug)]
pub struct DocumentFonts {
    pub regular: FontFace,
    pub bold: FontFace,
}

impl DocumentFonts {
    /// Find a usable sans family on this system.
    ///
    /// Order: compile-time `FONT_PATH` (regular only, used for both faces),
    /// fontconfig lookup of [`FONT_FAMILIES`], then well-known install paths.
    pub fn discover() -> Result<Self> {
        const FONT_PATH: Option<&str> = option_env!("FONT_PATH");
        if let Some(path) = FONT_PATH {
            if let Ok(regular) = FontFace::from_path(Path::new(path)) {
                info!(path, "Using compile-time document font");
                let bold = FontFace::from_bytes(regular.bytes.clone())?;
                return Ok(Self { regular, bold });
            }
        }

        for family in FONT_FAMILIES {
            let regular = find_font_path(family);
            let bold = find_font_path(&format!("{family} Bold"));
            match (regular, bold) {
                (Ok(regular), Ok(bold)) => {
                    if let Ok(fonts) = Self::from_paths(&regular, &bold) {
                        info!(family, regular = %regular.display(), "Using document font via fontconfig");
                        return Ok(fonts);
                    }
                }
                (regular, bold) => {
                    debug!(family, regular_found = regular.is_ok(), bold_found = bold.is_ok(), "Font family incomplete");
                }
            }
        }

        let known_paths = [
            ("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf", "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            ("/usr/share/fonts/TTF/DejaVuSans.ttf", "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf"),
            (
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
            ),
            ("/usr/share/fonts/liberation/LiberationSans-Regular.ttf", "/usr/share/fonts/liberation/LiberationSans-Bold.ttf"),
        ];

        for (regular, bold) in known_paths {
            if let Ok(fonts) = Self::from_paths(&PathBuf::from(regular), &PathBuf::from(bold)) {
                info!(regular, "Using document font from well-known path");
                return Ok(fonts);
            }
        }

        Err(anyhow::anyhow!(
            "Could not find a document font. Tried FONT_PATH ({:?}), fontconfig families {:?} and hardcoded paths",
            FONT_PATH,
            FONT_FAMILIES
        ))
    }

    fn from_paths(regular: &Path, bold: &Path) -> Result<Self> {
        Ok(Self {
            regular: FontFace::from_path(regular)?,
            bold: FontFace::from_path(bold)?,
        })
    }
}
