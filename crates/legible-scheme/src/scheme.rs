// SPDX-License-Identifier: MIT

//! Text-color scheme derivation — from one background color to nine roles.
//!
//! Only three roles are computed: `primary` is black or white by luminance,
//! and `secondary` / `disabled` are weakened copies of it. The rest are the
//! site's fixed brand and status colors and never depend on the background.

use legible_color::{Rgb, hex_to_rgb, rgb_to_hex};
use serde::{Deserialize, Serialize};

use crate::contrast::{BLACK, contrast_ratio, optimal_text_color, relative_luminance};

/// Link blue used with black primary text (light backgrounds).
pub const LINK_ON_LIGHT: &str = "#1976d2";
/// Link blue used with white primary text (dark backgrounds).
pub const LINK_ON_DARK: &str = "#64b5f6";
/// Brand orange.
pub const ACCENT: &str = "#ff6a00";
pub const SUCCESS: &str = "#4caf50";
pub const WARNING: &str = "#ff9800";
pub const ERROR: &str = "#f44336";
pub const INFO: &str = "#2196f3";

/// How much of the primary color survives in secondary text.
pub const SECONDARY_FACTOR: f64 = 0.6;
/// How much of the primary color survives in disabled text.
pub const DISABLED_FACTOR: f64 = 0.3;

// ---------------------------------------------------------------------------
// TextColorScheme
// ---------------------------------------------------------------------------

/// The full set of text colors for one background.
///
/// Built fresh per request by [`generate_color_scheme`] and never changed
/// afterwards; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColorScheme {
    // ── Computed ──────────────────────────────────────────────
    primary: String,
    secondary: String,
    disabled: String,
    link: String,

    // ── Fixed palette ─────────────────────────────────────────
    accent: String,
    success: String,
    warning: String,
    error: String,
    info: String,
}

impl TextColorScheme {
    /// Main body text.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Captions, metadata, less important copy.
    #[must_use]
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Inactive controls and placeholders.
    #[must_use]
    pub fn disabled(&self) -> &str {
        &self.disabled
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    #[must_use]
    pub fn accent(&self) -> &str {
        &self.accent
    }

    #[must_use]
    pub fn success(&self) -> &str {
        &self.success
    }

    #[must_use]
    pub fn warning(&self) -> &str {
        &self.warning
    }

    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Whether primary text is black, i.e. the background counted as light.
    #[must_use]
    pub fn is_light_background(&self) -> bool {
        self.primary == BLACK
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Derive the complete text-color scheme for `background`.
///
/// ```
/// use legible_scheme::generate_color_scheme;
///
/// let scheme = generate_color_scheme("#ffffff");
/// assert_eq!(scheme.primary(), "#000000");
/// assert_eq!(scheme.secondary(), "#666666");
/// assert_eq!(scheme.disabled(), "#b3b3b3");
/// assert_eq!(scheme.link(), "#1976d2");
/// ```
#[must_use]
pub fn generate_color_scheme(background: &str) -> TextColorScheme {
    let bg = hex_to_rgb(background);
    let bg_luminance = relative_luminance(bg);
    let primary = optimal_text_color(background);

    let mut secondary = adjust_for_secondary(primary, bg_luminance, SECONDARY_FACTOR);
    let mut disabled = adjust_for_secondary(primary, bg_luminance, DISABLED_FACTOR);

    // Scaling white toward black can overshoot a mid-luminance background
    // and end up with more contrast than the stronger role. Blending from
    // the background toward primary is monotonic in contrast, so it keeps
    // primary >= secondary >= disabled.
    if !weakens_in_order(background, primary, &secondary, &disabled) {
        let fg = hex_to_rgb(primary);
        secondary = blend_toward(bg, fg, SECONDARY_FACTOR);
        disabled = blend_toward(bg, fg, DISABLED_FACTOR);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            background,
            bg_luminance,
            %secondary,
            %disabled,
            "weakened roles re-derived by blending toward background"
        );
    }

    let link = if primary == BLACK {
        LINK_ON_LIGHT
    } else {
        LINK_ON_DARK
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(background, bg_luminance, primary, "generated text color scheme");

    TextColorScheme {
        primary: primary.to_owned(),
        secondary,
        disabled,
        link: link.to_owned(),
        accent: ACCENT.to_owned(),
        success: SUCCESS.to_owned(),
        warning: WARNING.to_owned(),
        error: ERROR.to_owned(),
        info: INFO.to_owned(),
    }
}

/// Weaken `primary` text by `factor` for the given background luminance.
///
/// - Light background (`bg_luminance > 0.5`, primary is dark): move each
///   channel `1 - factor` of the way toward white.
/// - Dark background: scale each channel by `factor` toward black.
///
/// On light backgrounds a smaller factor is lighter; on dark backgrounds a
/// smaller factor is darker. Either way smaller means weaker.
#[must_use]
pub fn adjust_for_secondary(primary: &str, bg_luminance: f64, factor: f64) -> String {
    let Rgb { r, g, b } = hex_to_rgb(primary);

    // Unfused on purpose: 255 * (1 - 0.3) must land on 178.5 and round up.
    #[allow(clippy::suboptimal_flops)]
    let adjust = |c: u8| -> i32 {
        let c = f64::from(c);
        let v = if bg_luminance > 0.5 {
            c + (255.0 - c) * (1.0 - factor)
        } else {
            c * factor
        };
        v.round() as i32
    };

    rgb_to_hex(adjust(r), adjust(g), adjust(b))
}

/// Move from `bg` toward `fg` by `t` (0.0 stays on the background).
fn blend_toward(bg: Rgb, fg: Rgb, t: f64) -> String {
    #[allow(clippy::suboptimal_flops)]
    let lerp = |from: u8, to: u8| -> i32 {
        let from = f64::from(from);
        (from + (f64::from(to) - from) * t).round() as i32
    };
    rgb_to_hex(lerp(bg.r, fg.r), lerp(bg.g, fg.g), lerp(bg.b, fg.b))
}

fn weakens_in_order(background: &str, primary: &str, secondary: &str, disabled: &str) -> bool {
    let p = contrast_ratio(primary, background);
    let s = contrast_ratio(secondary, background);
    let d = contrast_ratio(disabled, background);
    p >= s && s >= d
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
