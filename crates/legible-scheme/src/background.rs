// SPDX-License-Identifier: MIT

//! Site backgrounds and the text colors resolved for them.
//!
//! A background is stored as one of three kinds:
//!
//! | Kind       | Color input                          | Representative color        |
//! |------------|--------------------------------------|-----------------------------|
//! | `color`    | `backgroundColor`                    | that color                  |
//! | `gradient` | `gradientStartColor` / `EndColor`    | floor-averaged midpoint     |
//! | `image`    | optional `backgroundColor`           | that color, if declared     |
//!
//! Image pixels are never sampled here. An image background without a
//! declared color has no representative color, and auto text colors can't
//! be resolved for it until the caller supplies one.
//!
//! Text colors are either generated (`autoTextColor = true`) or taken from
//! manually stored values; both paths end in the same contrast numbers and
//! [`ComplianceReport`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use legible_color::{gradient_mid_color, is_valid_hex};
use serde::{Deserialize, Serialize};

use crate::contrast::contrast_ratio;
use crate::error::{Result, SchemeError};
use crate::scheme::{TextColorScheme, generate_color_scheme};
use crate::wcag::{ComplianceReport, compliance_for};

/// Background used when nothing is configured.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#f5f5f5";

// ---------------------------------------------------------------------------
// Kind / direction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Image,
    Color,
    Gradient,
}

impl BackgroundKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Color => "color",
            Self::Gradient => "gradient",
        }
    }
}

impl fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackgroundKind {
    type Err = SchemeError;

    /// Exact, case-sensitive match, as stored.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(Self::Image),
            "color" => Ok(Self::Color),
            "gradient" => Ok(Self::Gradient),
            _ => Err(SchemeError::InvalidKind(s.to_owned())),
        }
    }
}

/// Direction of a two-stop gradient.
///
/// Stored as a free-form string. Anything other than the three known
/// keywords is kept as-is and emitted as `to <value>`, so one unusual
/// record never fails a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
    Diagonal,
    Other(String),
}

impl GradientDirection {
    /// The `linear-gradient` direction keyword.
    #[must_use]
    pub fn css(&self) -> Cow<'_, str> {
        match self {
            Self::Vertical => Cow::Borrowed("to bottom"),
            Self::Horizontal => Cow::Borrowed("to right"),
            Self::Diagonal => Cow::Borrowed("to bottom right"),
            Self::Other(direction) => Cow::Owned(format!("to {direction}")),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Diagonal => "diagonal",
            Self::Other(direction) => direction,
        }
    }
}

impl From<String> for GradientDirection {
    fn from(s: String) -> Self {
        match s.trim() {
            "" | "vertical" => Self::Vertical,
            "horizontal" => Self::Horizontal,
            "diagonal" => Self::Diagonal,
            _ => Self::Other(s),
        }
    }
}

impl From<GradientDirection> for String {
    fn from(direction: GradientDirection) -> Self {
        match direction {
            GradientDirection::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BackgroundSpec
// ---------------------------------------------------------------------------

/// The color-relevant part of a stored background configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundSpec {
    #[serde(rename = "backgroundType")]
    pub kind: BackgroundKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_start_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_end_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient_direction: Option<GradientDirection>,
}

impl BackgroundSpec {
    /// A solid-color background.
    #[must_use]
    pub fn color(hex: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Color,
            background_color: Some(hex.into()),
            gradient_start_color: None,
            gradient_end_color: None,
            gradient_direction: None,
        }
    }

    /// A two-stop gradient with the default (vertical) direction.
    #[must_use]
    pub fn gradient(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Gradient,
            background_color: None,
            gradient_start_color: Some(start.into()),
            gradient_end_color: Some(end.into()),
            gradient_direction: None,
        }
    }

    /// An image background with no declared color.
    #[must_use]
    pub const fn image() -> Self {
        Self {
            kind: BackgroundKind::Image,
            background_color: None,
            gradient_start_color: None,
            gradient_end_color: None,
            gradient_direction: None,
        }
    }

    #[must_use]
    pub fn with_background_color(mut self, hex: impl Into<String>) -> Self {
        self.background_color = Some(hex.into());
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: GradientDirection) -> Self {
        self.gradient_direction = Some(direction);
        self
    }

    /// The single color text is measured against, if there is one.
    #[must_use]
    pub fn representative_color(&self) -> Option<String> {
        match self.kind {
            BackgroundKind::Color | BackgroundKind::Image => {
                non_blank(self.background_color.as_deref()).map(str::to_owned)
            }
            BackgroundKind::Gradient => {
                let start = non_blank(self.gradient_start_color.as_deref())?;
                let end = non_blank(self.gradient_end_color.as_deref())?;
                Some(gradient_mid_color(start, end))
            }
        }
    }

    /// CSS declarations for this background.
    ///
    /// Image backgrounds yield an empty string: the image URL and its
    /// repeat/position/size settings are not part of this type.
    #[must_use]
    pub fn css(&self) -> String {
        match self.kind {
            BackgroundKind::Image => String::new(),
            BackgroundKind::Color => non_blank(self.background_color.as_deref())
                .map(|c| format!("background-color: {c};"))
                .unwrap_or_default(),
            BackgroundKind::Gradient => {
                let direction = self.gradient_direction.clone().unwrap_or_default();
                let direction = direction.css();
                match (
                    non_blank(self.gradient_start_color.as_deref()),
                    non_blank(self.gradient_end_color.as_deref()),
                ) {
                    (Some(start), Some(end)) => {
                        format!("background: linear-gradient({direction}, {start}, {end});")
                    }
                    _ => String::new(),
                }
            }
        }
    }

    /// Strictly validate every color field that is set.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidHex`] for the first malformed color.
    pub fn validate(&self) -> Result<()> {
        validate_colors([
            self.background_color.as_deref(),
            self.gradient_start_color.as_deref(),
            self.gradient_end_color.as_deref(),
        ])
    }
}

impl Default for BackgroundSpec {
    /// Solid `#f5f5f5`.
    fn default() -> Self {
        Self::color(DEFAULT_BACKGROUND_COLOR)
    }
}

// ---------------------------------------------------------------------------
// Text color settings and resolution
// ---------------------------------------------------------------------------

/// Stored text-color configuration for a background.
///
/// Manual colors are only consulted when `auto_text_color` is false; any
/// role left unset falls back to the generated color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColorSettings {
    pub auto_text_color: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl TextColorSettings {
    /// Fully automatic text colors.
    #[must_use]
    pub const fn auto() -> Self {
        Self {
            auto_text_color: true,
            primary_text_color: None,
            secondary_text_color: None,
            link_color: None,
            accent_color: None,
        }
    }

    /// Strictly validate the manual colors that are set.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::InvalidHex`] for the first malformed color.
    pub fn validate(&self) -> Result<()> {
        validate_colors([
            self.primary_text_color.as_deref(),
            self.secondary_text_color.as_deref(),
            self.link_color.as_deref(),
            self.accent_color.as_deref(),
        ])
    }
}

impl Default for TextColorSettings {
    fn default() -> Self {
        Self::auto()
    }
}

/// A background together with its text-color settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    pub background: BackgroundSpec,
    #[serde(default)]
    pub text_color: TextColorSettings,
}

impl BackgroundConfig {
    /// Shorthand for [`resolve_text_colors`].
    ///
    /// # Errors
    ///
    /// See [`resolve_text_colors`].
    pub fn resolve(&self) -> Result<ResolvedTextColors> {
        resolve_text_colors(&self.background, &self.text_color)
    }
}

/// The text colors in effect for a background, with their contrast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTextColors {
    pub background_type: BackgroundKind,
    /// The representative color everything was measured against.
    pub background_color: String,
    pub auto_text_color: bool,
    pub primary_text_color: String,
    pub secondary_text_color: String,
    pub link_color: String,
    pub accent_color: String,
    pub primary_contrast: f64,
    pub secondary_contrast: f64,
    pub link_contrast: f64,
    pub wcag_compliance: ComplianceReport,
}

/// Work out which text colors apply to `spec` and grade them.
///
/// Manual colors are used as stored, without strict validation; a malformed
/// one reads as black in the contrast math.
///
/// # Errors
///
/// [`SchemeError::NoRepresentativeColor`] when the background has no color
/// to measure against (an image without a declared color, or a gradient
/// missing a stop).
pub fn resolve_text_colors(
    spec: &BackgroundSpec,
    settings: &TextColorSettings,
) -> Result<ResolvedTextColors> {
    let background = spec
        .representative_color()
        .ok_or(SchemeError::NoRepresentativeColor(spec.kind))?;
    let scheme = generate_color_scheme(&background);

    let pick = |manual: Option<&String>, generated: &str| -> String {
        if settings.auto_text_color {
            return generated.to_owned();
        }
        non_blank(manual.map(String::as_str))
            .unwrap_or(generated)
            .to_owned()
    };

    let primary = pick(settings.primary_text_color.as_ref(), scheme.primary());
    let secondary = pick(settings.secondary_text_color.as_ref(), scheme.secondary());
    let link = pick(settings.link_color.as_ref(), scheme.link());
    let accent = pick(settings.accent_color.as_ref(), scheme.accent());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        kind = %spec.kind,
        %background,
        auto = settings.auto_text_color,
        %primary,
        "resolved text colors"
    );

    Ok(ResolvedTextColors {
        background_type: spec.kind,
        primary_contrast: contrast_ratio(&primary, &background),
        secondary_contrast: contrast_ratio(&secondary, &background),
        link_contrast: contrast_ratio(&link, &background),
        wcag_compliance: compliance_for(&primary, &secondary, &link, &background),
        background_color: background,
        auto_text_color: settings.auto_text_color,
        primary_text_color: primary,
        secondary_text_color: secondary,
        link_color: link,
        accent_color: accent,
    })
}

/// Recommended text colors for a raw background color.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub background_color: String,
    pub scheme: TextColorScheme,
    pub primary_contrast: f64,
    pub secondary_contrast: f64,
    pub link_contrast: f64,
}

/// Generate and measure a scheme for a strictly validated background.
///
/// # Errors
///
/// [`SchemeError::InvalidHex`] unless `background` is `#RGB` or `#RRGGBB`.
pub fn recommended_colors(background: &str) -> Result<Recommendation> {
    if !is_valid_hex(background) {
        return Err(SchemeError::InvalidHex(background.to_owned()));
    }

    let scheme = generate_color_scheme(background);
    Ok(Recommendation {
        background_color: background.to_owned(),
        primary_contrast: contrast_ratio(scheme.primary(), background),
        secondary_contrast: contrast_ratio(scheme.secondary(), background),
        link_contrast: contrast_ratio(scheme.link(), background),
        scheme,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

fn validate_colors<'a>(colors: impl IntoIterator<Item = Option<&'a str>>) -> Result<()> {
    colors
        .into_iter()
        .flatten()
        .find(|c| !is_valid_hex(c))
        .map_or(Ok(()), |bad| Err(SchemeError::InvalidHex(bad.to_owned())))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
