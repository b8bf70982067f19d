//! Application-wide constants
//!
//! This module contains the magic numbers and string literals used throughout
//! the application, providing a single source of truth for constant values.

/// Configuration file location
pub mod config {
    /// Directory under the platform config dir
    pub const APP_DIR: &str = "solution-configurator";

    /// Config file name
    pub const FILENAME: &str = "config.toml";
}

/// Branding defaults (overridable in config)
pub mod branding {
    pub const BRAND_NAME: &str = "Crewline";
    pub const PRODUCT_MARK: &str = "CL";
    pub const TAGLINE: &str = "Workforce management for shift-based teams";
}

/// Output file naming
pub mod file_name {
    /// Base used when neither company nor contact name yields a usable slug
    pub const DEFAULT_BASE: &str = "solution";

    /// Appended to every slug, before the extension
    pub const SUFFIX: &str = "-overview";

    pub const EXTENSION: &str = "pdf";

    /// Characters that are not valid in file names on common platforms
    pub const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
}

/// Proposal document text
pub mod document {
    pub const TITLE: &str = "Solution Overview";
    pub const SUBTITLE: &str = "Tailored feature proposal";

    /// Shown in the metadata block when no company name was entered
    pub const UNNAMED_CLIENT: &str = "Prospective client";

    pub const NOTES_HEADING: &str = "Notes";

    /// Date format for the "generated on" field
    pub const DATE_FORMAT: &str = "%B %-d, %Y";

    /// Separator between an item label and its description
    pub const DESCRIPTION_SEPARATOR: &str = " \u{2013} ";
}

/// PDF page geometry (millimetres) and type sizes (points)
pub mod pdf {
    pub const PAGE_WIDTH_MM: f32 = 210.0;
    pub const PAGE_HEIGHT_MM: f32 = 297.0;
    pub const MARGIN_MM: f32 = 20.0;

    /// Space reserved at the bottom of each page for the footer line
    pub const FOOTER_BAND_MM: f32 = 12.0;

    /// Offset of the right metadata column from the left margin
    pub const SECOND_COLUMN_MM: f32 = 90.0;

    /// Bullet indent
    pub const BULLET_INDENT_MM: f32 = 5.0;

    pub const MARK_SIZE_PT: f32 = 16.0;
    pub const BRAND_SIZE_PT: f32 = 12.0;
    pub const TITLE_SIZE_PT: f32 = 22.0;
    pub const HEADING_SIZE_PT: f32 = 14.0;
    pub const BODY_SIZE_PT: f32 = 10.5;
    pub const SMALL_SIZE_PT: f32 = 8.5;

    /// Line height as a multiple of the font size
    pub const LINE_SPACING: f32 = 1.35;

    /// Points to millimetres
    pub const PT_TO_MM: f32 = 0.352_778;

    /// Average glyph advance (in em) used when no font metrics are available
    pub const FALLBACK_ADVANCE_EM: f32 = 0.52;

    /// Font families tried, in order, for the embedded document font
    pub const FONT_FAMILIES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Noto Sans", "Sans"];
}

/// Plain-text rendering
pub mod text {
    /// Column width for wrapped text output
    pub const WIDTH: usize = 78;
}

/// Navigation shell timings and offsets
pub mod nav {
    /// How long the "Copied" confirmation stays visible
    pub const COPY_CONFIRMATION_MS: u64 = 2000;

    /// Headings within this distance below the viewport top count as active
    pub const SCROLL_SPY_MARGIN: f32 = 80.0;
}
