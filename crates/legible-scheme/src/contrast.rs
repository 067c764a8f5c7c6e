// SPDX-License-Identifier: MIT

//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! Luminance uses the 0.03928 linearization threshold from the WCAG 2.x
//! text, not the 0.04045 of the sRGB standard. No 8-bit channel value falls
//! between the two, so both pick the same branch for every input here.

use legible_color::{Rgb, hex_to_rgb};

/// Black text, chosen for backgrounds brighter than mid luminance.
pub const BLACK: &str = "#000000";

/// White text, chosen for everything else.
pub const WHITE: &str = "#ffffff";

/// Remove the sRGB gamma from one normalized channel.
#[inline]
fn linearize(v: f64) -> f64 {
    if v <= 0.039_28 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.1.
///
/// Uses the weighted sum of linearized channels:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.channels();
    let r = linearize(f64::from(r) / 255.0);
    let g = linearize(f64::from(g) / 255.0);
    let b = linearize(f64::from(b) / 255.0);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Relative luminance of a hex color, parsed permissively.
#[must_use]
pub fn luminance_of(hex: &str) -> f64 {
    relative_luminance(hex_to_rgb(hex))
}

/// Compute the WCAG 2.1 contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is the same regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    ratio_of(luminance_of(a), luminance_of(b))
}

pub(crate) fn ratio_of(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Black or white, whichever reads better on `background`.
///
/// Strictly brighter than 0.5 luminance gets black; exactly 0.5 gets white.
#[must_use]
pub fn optimal_text_color(background: &str) -> &'static str {
    if luminance_of(background) > 0.5 {
        BLACK
    } else {
        WHITE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn hex_color() -> impl Strategy<Value = String> {
        any::<(u8, u8, u8)>().prop_map(|c| Rgb::from(c).to_hex())
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_channels_match_weights() {
        assert!(approx_eq(luminance_of("#ff0000"), 0.2126, 1e-9));
        assert!(approx_eq(luminance_of("#00ff00"), 0.7152, 1e-9));
        assert!(approx_eq(luminance_of("#0000ff"), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_uses_linear_segment_below_threshold() {
        // 10/255 = 0.0392… sits under 0.03928, so it is divided by 12.92.
        let expected = (10.0 / 255.0) / 12.92;
        assert!(approx_eq(luminance_of("#0a0a0a"), expected, 1e-12));
    }

    #[test]
    fn luminance_dark_navy() {
        let lum = luminance_of("#1a1a2e");
        assert!(lum > 0.011 && lum < 0.012, "Navy luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(WHITE, BLACK);
        assert!(approx_eq(ratio, 21.0, 1e-6), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_known_gray() {
        // #767676 is the classic lightest gray passing AA on white.
        let ratio = contrast_ratio("#767676", WHITE);
        assert!(approx_eq(ratio, 4.54, 0.01), "Gray contrast: {ratio}");
    }

    #[test]
    fn contrast_malformed_reads_as_black() {
        assert!(approx_eq(contrast_ratio("nope", WHITE), 21.0, 1e-6));
    }

    // ── Optimal text color ──────────────────────────────────────────

    #[test]
    fn optimal_on_extremes() {
        assert_eq!(optimal_text_color(WHITE), BLACK);
        assert_eq!(optimal_text_color(BLACK), WHITE);
    }

    #[test]
    fn optimal_on_site_defaults() {
        assert_eq!(optimal_text_color("#f5f5f5"), BLACK);
        assert_eq!(optimal_text_color("#1a1a2e"), WHITE);
        // Mid gray is only ~0.22 luminance: white wins.
        assert_eq!(optimal_text_color("#808080"), WHITE);
    }

    proptest! {
        #[test]
        fn contrast_is_symmetric(a in hex_color(), b in hex_color()) {
            prop_assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
        }

        #[test]
        fn self_contrast_is_one(x in hex_color()) {
            prop_assert!(approx_eq(contrast_ratio(&x, &x), 1.0, 1e-12));
        }

        #[test]
        fn contrast_within_bounds(a in hex_color(), b in hex_color()) {
            let ratio = contrast_ratio(&a, &b);
            prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "out of range: {}", ratio);
        }

        #[test]
        fn luminance_within_unit_interval(c in any::<(u8, u8, u8)>()) {
            let lum = relative_luminance(Rgb::from(c));
            prop_assert!((0.0..=1.0 + 1e-12).contains(&lum));
        }
    }
}
