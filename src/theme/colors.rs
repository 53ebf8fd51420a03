//! Color constants for the Inkstream palette.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#faf7f2";
pub const PAPER_CARD: &str = "#ffffff";
pub const PAPER_BORDER: &str = "#e6e0d6";

// === INK (Text) ===
pub const INK: &str = "#1f2328";
pub const INK_SOFT: &str = "rgba(31, 35, 40, 0.72)";
pub const INK_MUTED: &str = "rgba(31, 35, 40, 0.5)";

// === ACCENT ===
pub const ACCENT: &str = "#2f6f4f";
pub const ACCENT_SOFT: &str = "rgba(47, 111, 79, 0.15)";

// === SEMANTIC ===
pub const DANGER: &str = "#b3382c";
pub const WARNING: &str = "#b07a1e";
