//! GUI-specific constants for layout, status colors and badges

/// Window limits; the initial size comes from the config file
pub const WINDOW_MIN_WIDTH: f32 = 900.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Side panels
pub const SIDEBAR_WIDTH: f32 = 210.0;
pub const TOC_WIDTH: f32 = 190.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const PADDING: f32 = 10.0;

/// Height of the live text preview
pub const PREVIEW_HEIGHT: f32 = 320.0;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 160, 60);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// Brand accent for the product mark and active entries
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const BADGE_TEXT: egui::Color32 = egui::Color32::WHITE;
