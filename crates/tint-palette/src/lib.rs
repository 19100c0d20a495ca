//! # tint-palette — Palette Generation and Accessibility Engine
//!
//! Turns one brand color into a complete, named palette: a 10-step scale
//! for the brand, a warm-gray neutral scale, and four status scales. The
//! same engine audits color pairs against WCAG and extends palettes with
//! project-specific role colors.
//!
//! # Architecture
//!
//! ```text
//! brand hex + Style
//!     │
//!     ▼
//! style.rs:         saturation boost + lightness band
//!     │
//!     ▼
//! scale.rs:         seed HSL → ten tones (50 … 900)
//!     │
//!     ▼
//! palette.rs:       primary + neutral + success/error/warning/info
//!     │
//!     ├──▶ accessibility.rs: WCAG audit of common role pairs
//!     │        (contrast.rs: luminance, ratio, corrective search)
//!     │
//!     └──▶ project.rs / inference.rs: extra named role colors
//! ```
//!
//! # Color Space
//!
//! Generation happens in integer HSL (hue in degrees, saturation and
//! lightness in percent). Every HSL value is encoded straight back to
//! `#rrggbb`, so outputs are deterministic but quantized: a decoded
//! scale step may differ from its planned tone by a point or two.

// Luminance math casts channel bytes to floats.
#![allow(clippy::cast_precision_loss)]
// Palette tables are long literal arrays.
#![allow(clippy::too_many_lines)]
// Rounding must match the plain `a * b + c` form, not fused multiply-add.
#![allow(clippy::suboptimal_flops)]

pub mod accessibility;
pub mod contrast;
pub mod inference;
pub mod palette;
pub mod project;
pub mod scale;
pub mod style;

pub use accessibility::{AccessibilityCheck, WcagLevel, validate_accessibility, validate_palette_accessibility};
pub use contrast::{contrast_ratio, optimal_text_color, relative_luminance, suggest_corrective_color};
pub use inference::{InferredColor, generate_dynamic_colors, infer_colors_from_text};
pub use palette::{BasePalette, Scheme, generate_base_palette, suggest_secondary_color};
pub use project::{ProjectColors, ProjectType, generate_project_colors};
pub use scale::{ColorScale, STEPS, generate_color_scale, generate_neutral_scale};
pub use style::Style;
