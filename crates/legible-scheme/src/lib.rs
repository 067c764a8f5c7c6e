// SPDX-License-Identifier: MIT

//! # legible-scheme — readable text colors for any site background
//!
//! Derives a complete text-color scheme from a background color and grades
//! it against WCAG 2.1. Every function is pure: no I/O, no shared mutable
//! state, safe to call from any thread.
//!
//! # Pipeline
//!
//! ```text
//! BackgroundSpec (color | gradient | image)
//!     │
//!     ▼
//! background.rs: pick one representative hex color
//!     │
//!     ▼
//! contrast.rs:   WCAG relative luminance → black or white primary text
//!     │
//!     ▼
//! scheme.rs:     primary / secondary / disabled + fixed brand palette
//!     │
//!     ▼
//! wcag.rs:       AA / AAA pass-fail per role, overall verdicts
//! ```
//!
//! Malformed hex never fails here; it is read as black. Callers that store
//! colors gate them with [`legible_color::is_valid_hex`] first.

// Mathematical code uses small float-to-integer casts after rounding.
#![allow(clippy::cast_possible_truncation)]
// Channel math keeps the r/g/b naming.
#![allow(clippy::many_single_char_names)]

pub mod background;
pub mod contrast;
pub mod error;
pub mod scheme;
pub mod wcag;

pub use background::{
    BackgroundConfig, BackgroundKind, BackgroundSpec, GradientDirection, Recommendation,
    ResolvedTextColors, TextColorSettings, recommended_colors, resolve_text_colors,
};
pub use contrast::{contrast_ratio, luminance_of, optimal_text_color, relative_luminance};
pub use error::{Result, SchemeError};
pub use scheme::{TextColorScheme, adjust_for_secondary, generate_color_scheme};
pub use wcag::{
    ComplianceReport, ContrastCheck, Passed, TextSize, WcagLevel, check_contrast, compliance_for,
    compliance_report, meets, meets_wcag,
};
