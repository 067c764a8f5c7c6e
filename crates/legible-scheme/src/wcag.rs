// SPDX-License-Identifier: MIT

//! WCAG conformance checks and the per-role compliance report.
//!
//! | Level | Normal text | Large text |
//! |-------|-------------|------------|
//! | AA    | 4.5:1       | 3.0:1      |
//! | AAA   | 7.0:1       | 4.5:1      |
//!
//! The string entry point [`meets_wcag`] mirrors what the admin API
//! receives: level and size as free text, matched case-insensitively. An
//! unknown level fails the check instead of raising; an unknown size counts
//! as normal text.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize, Serializer};

use crate::contrast::{contrast_ratio, optimal_text_color};
use crate::error::SchemeError;
use crate::scheme::TextColorScheme;

// ---------------------------------------------------------------------------
// Level / size
// ---------------------------------------------------------------------------

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WcagLevel {
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

/// Text size class. Large is 18pt regular or 14pt bold and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    Large,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level at `size`.
    #[must_use]
    pub const fn min_ratio(self, size: TextSize) -> f64 {
        match (self, size) {
            (Self::Aa, TextSize::Normal) | (Self::Aaa, TextSize::Large) => 4.5,
            (Self::Aa, TextSize::Large) => 3.0,
            (Self::Aaa, TextSize::Normal) => 7.0,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl TextSize {
    /// Lenient parse: only `large` (any case) is large.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.eq_ignore_ascii_case("large") {
            Self::Large
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
        }
    }
}

impl FromStr for WcagLevel {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AA") {
            Ok(Self::Aa)
        } else if s.eq_ignore_ascii_case("AAA") {
            Ok(Self::Aaa)
        } else {
            Err(SchemeError::UnknownLevel(s.to_owned()))
        }
    }
}

impl FromStr for TextSize {
    type Err = SchemeError;

    /// Strict parse, for callers that want to reject typos before checking.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("normal") {
            Ok(Self::Normal)
        } else if s.eq_ignore_ascii_case("large") {
            Ok(Self::Large)
        } else {
            Err(SchemeError::UnknownTextSize(s.to_owned()))
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TextSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Typed WCAG check of `text` on `background`.
#[must_use]
pub fn meets(text: &str, background: &str, level: WcagLevel, size: TextSize) -> bool {
    contrast_ratio(text, background) >= level.min_ratio(size)
}

/// WCAG check with free-text level and size.
///
/// ```
/// use legible_scheme::meets_wcag;
///
/// assert!(meets_wcag("#000000", "#ffffff", "aaa", "normal"));
/// assert!(!meets_wcag("#000000", "#ffffff", "AAAA", "normal"));
/// ```
#[must_use]
pub fn meets_wcag(text: &str, background: &str, level: &str, size: &str) -> bool {
    level
        .parse::<WcagLevel>()
        .is_ok_and(|level| meets(text, background, level, TextSize::from_str_lossy(size)))
}

/// Outcome of validating one text color against one background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastCheck {
    pub is_valid: bool,
    pub contrast: f64,
    pub wcag_level: String,
    pub text_size: String,
    /// Black or white, whichever the background favors.
    pub recommendation: String,
}

/// Validate `text` on `background` and suggest a fallback text color.
///
/// Level and size are echoed back as given.
#[must_use]
pub fn check_contrast(text: &str, background: &str, level: &str, size: &str) -> ContrastCheck {
    ContrastCheck {
        is_valid: meets_wcag(text, background, level, size),
        contrast: contrast_ratio(text, background),
        wcag_level: level.to_owned(),
        text_size: size.to_owned(),
        recommendation: optimal_text_color(background).to_owned(),
    }
}

// ---------------------------------------------------------------------------
// ComplianceReport
// ---------------------------------------------------------------------------

bitflags! {
    /// Normal-text checks that passed, one bit per role and level.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Passed: u8 {
        const PRIMARY_AA    = 1 << 0;
        const PRIMARY_AAA   = 1 << 1;
        const SECONDARY_AA  = 1 << 2;
        const SECONDARY_AAA = 1 << 3;
        const LINK_AA       = 1 << 4;
        const LINK_AAA      = 1 << 5;

        const ALL_AA  = Self::PRIMARY_AA.bits() | Self::SECONDARY_AA.bits() | Self::LINK_AA.bits();
        const ALL_AAA = Self::PRIMARY_AAA.bits() | Self::SECONDARY_AAA.bits() | Self::LINK_AAA.bits();
    }
}

/// AA / AAA verdicts (normal text) for the primary, secondary and link
/// roles of a scheme.
///
/// Overall verdicts require every role to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplianceReport {
    passed: Passed,
}

impl ComplianceReport {
    #[must_use]
    pub const fn from_passed(passed: Passed) -> Self {
        Self { passed }
    }

    #[must_use]
    pub const fn passed(self) -> Passed {
        self.passed
    }

    #[must_use]
    pub const fn primary_aa(self) -> bool {
        self.passed.contains(Passed::PRIMARY_AA)
    }

    #[must_use]
    pub const fn primary_aaa(self) -> bool {
        self.passed.contains(Passed::PRIMARY_AAA)
    }

    #[must_use]
    pub const fn secondary_aa(self) -> bool {
        self.passed.contains(Passed::SECONDARY_AA)
    }

    #[must_use]
    pub const fn secondary_aaa(self) -> bool {
        self.passed.contains(Passed::SECONDARY_AAA)
    }

    #[must_use]
    pub const fn link_aa(self) -> bool {
        self.passed.contains(Passed::LINK_AA)
    }

    #[must_use]
    pub const fn link_aaa(self) -> bool {
        self.passed.contains(Passed::LINK_AAA)
    }

    #[must_use]
    pub const fn overall_aa(self) -> bool {
        self.passed.contains(Passed::ALL_AA)
    }

    #[must_use]
    pub const fn overall_aaa(self) -> bool {
        self.passed.contains(Passed::ALL_AAA)
    }
}

/// Flat wire shape with one boolean per verdict.
#[derive(Serialize)]
struct ComplianceFields {
    #[serde(rename = "primaryAA")]
    primary_aa: bool,
    #[serde(rename = "primaryAAA")]
    primary_aaa: bool,
    #[serde(rename = "secondaryAA")]
    secondary_aa: bool,
    #[serde(rename = "secondaryAAA")]
    secondary_aaa: bool,
    #[serde(rename = "linkAA")]
    link_aa: bool,
    #[serde(rename = "linkAAA")]
    link_aaa: bool,
    #[serde(rename = "overallAA")]
    overall_aa: bool,
    #[serde(rename = "overallAAA")]
    overall_aaa: bool,
}

impl Serialize for ComplianceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComplianceFields {
            primary_aa: self.primary_aa(),
            primary_aaa: self.primary_aaa(),
            secondary_aa: self.secondary_aa(),
            secondary_aaa: self.secondary_aaa(),
            link_aa: self.link_aa(),
            link_aaa: self.link_aaa(),
            overall_aa: self.overall_aa(),
            overall_aaa: self.overall_aaa(),
        }
        .serialize(serializer)
    }
}

/// Grade a generated scheme against `background`.
#[must_use]
pub fn compliance_report(scheme: &TextColorScheme, background: &str) -> ComplianceReport {
    compliance_for(scheme.primary(), scheme.secondary(), scheme.link(), background)
}

/// Grade three explicit role colors, e.g. manually configured ones.
#[must_use]
pub fn compliance_for(
    primary: &str,
    secondary: &str,
    link: &str,
    background: &str,
) -> ComplianceReport {
    let roles = [
        (primary, Passed::PRIMARY_AA, Passed::PRIMARY_AAA),
        (secondary, Passed::SECONDARY_AA, Passed::SECONDARY_AAA),
        (link, Passed::LINK_AA, Passed::LINK_AAA),
    ];

    let mut passed = Passed::empty();
    for (color, aa, aaa) in roles {
        passed.set(aa, meets(color, background, WcagLevel::Aa, TextSize::Normal));
        passed.set(aaa, meets(color, background, WcagLevel::Aaa, TextSize::Normal));
    }
    ComplianceReport::from_passed(passed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::generate_color_scheme;
    use pretty_assertions::assert_eq;

    // ── Thresholds ──────────────────────────────────────────────────

    #[test]
    fn threshold_table() {
        assert_eq!(WcagLevel::Aa.min_ratio(TextSize::Normal), 4.5);
        assert_eq!(WcagLevel::Aa.min_ratio(TextSize::Large), 3.0);
        assert_eq!(WcagLevel::Aaa.min_ratio(TextSize::Normal), 7.0);
        assert_eq!(WcagLevel::Aaa.min_ratio(TextSize::Large), 4.5);
    }

    #[test]
    fn black_on_white_passes_everything() {
        for level in ["AA", "AAA", "aa", "aAa"] {
            for size in ["normal", "large", "LARGE"] {
                assert!(meets_wcag("#000000", "#ffffff", level, size), "{level}/{size}");
            }
        }
    }

    #[test]
    fn near_identical_grays_fail_aaa() {
        assert!(!meets_wcag("#777777", "#888888", "AAA", "normal"));
        assert!(!meets_wcag("#777777", "#888888", "AA", "large"));
    }

    #[test]
    fn unknown_level_is_false() {
        assert!(!meets_wcag("#000000", "#ffffff", "A", "normal"));
        assert!(!meets_wcag("#000000", "#ffffff", "", "normal"));
    }

    #[test]
    fn unknown_size_is_normal_text() {
        // #949494 on white is ~3.03: passes AA large only.
        assert!(meets_wcag("#949494", "#ffffff", "AA", "large"));
        assert!(!meets_wcag("#949494", "#ffffff", "AA", "normal"));
        assert!(!meets_wcag("#949494", "#ffffff", "AA", "huge"));
    }

    #[test]
    fn large_text_lowers_the_bar() {
        // #767676 on white is ~4.54.
        assert!(meets_wcag("#767676", "#ffffff", "AAA", "large"));
        assert!(!meets_wcag("#767676", "#ffffff", "AAA", "normal"));
        assert!(meets_wcag("#767676", "#ffffff", "AA", "normal"));
    }

    #[test]
    fn level_parsing() {
        assert_eq!("aaa".parse::<WcagLevel>(), Ok(WcagLevel::Aaa));
        assert_eq!("Aa".parse::<WcagLevel>(), Ok(WcagLevel::Aa));
        assert!("AAAA".parse::<WcagLevel>().is_err());
        assert_eq!("Large".parse::<TextSize>(), Ok(TextSize::Large));
        assert!("huge".parse::<TextSize>().is_err());
    }

    // ── check_contrast ──────────────────────────────────────────────

    #[test]
    fn check_contrast_echoes_options_and_recommends() {
        let check = check_contrast("#888888", "#1a1a2e", "AA", "normal");
        assert!(check.is_valid);
        assert_eq!(check.wcag_level, "AA");
        assert_eq!(check.text_size, "normal");
        assert_eq!(check.recommendation, "#ffffff");
        assert!(check.contrast > 4.5 && check.contrast < 5.0, "{}", check.contrast);
    }

    // ── ComplianceReport ────────────────────────────────────────────

    #[test]
    fn white_background_report() {
        // #666666 ≈ 5.74 and #1976d2 ≈ 4.60 on white: AA yes, AAA no.
        let report = compliance_report(&generate_color_scheme("#ffffff"), "#ffffff");
        assert!(report.primary_aa() && report.primary_aaa());
        assert!(report.secondary_aa() && !report.secondary_aaa());
        assert!(report.link_aa() && !report.link_aaa());
        assert!(report.overall_aa());
        assert!(!report.overall_aaa());
    }

    #[test]
    fn one_failing_role_fails_overall() {
        let report = compliance_for("#000000", "#eeeeee", "#000000", "#ffffff");
        assert!(report.primary_aa() && report.link_aa());
        assert!(!report.secondary_aa());
        assert!(!report.overall_aa());
        assert!(!report.overall_aaa());
    }

    #[test]
    fn all_roles_pass_overall() {
        let report = compliance_for("#000000", "#000000", "#000000", "#ffffff");
        assert_eq!(report.passed(), Passed::ALL_AA | Passed::ALL_AAA);
        assert!(report.overall_aa() && report.overall_aaa());
    }

    #[test]
    fn report_from_flags() {
        let report = ComplianceReport::from_passed(Passed::ALL_AA | Passed::PRIMARY_AAA);
        assert!(report.overall_aa());
        assert!(report.primary_aaa() && !report.secondary_aaa());
        assert!(!report.overall_aaa());
        assert_eq!(ComplianceReport::from_passed(Passed::empty()), ComplianceReport::default());
    }

    #[test]
    fn report_serializes_flat_booleans() {
        let report = compliance_for("#000000", "#eeeeee", "#000000", "#ffffff");
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["primaryAA"], true);
        assert_eq!(json["primaryAAA"], true);
        assert_eq!(json["secondaryAA"], false);
        assert_eq!(json["linkAAA"], true);
        assert_eq!(json["overallAA"], false);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }
}
