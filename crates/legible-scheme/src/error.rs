// SPDX-License-Identifier: MIT

use thiserror::Error;

use crate::background::BackgroundKind;

/// Rejections from the strict entry points.
///
/// The core color math never produces these; only parsing of stored
/// configuration and explicit validation do.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    #[error("invalid background type '{0}', expected image, color or gradient")]
    InvalidKind(String),

    #[error("invalid hex color '{0}', expected #RGB or #RRGGBB")]
    InvalidHex(String),

    #[error("{0} background has no color to derive text colors from")]
    NoRepresentativeColor(BackgroundKind),

    #[error("unknown WCAG level '{0}', expected AA or AAA")]
    UnknownLevel(String),

    #[error("unknown text size '{0}', expected normal or large")]
    UnknownTextSize(String),
}

pub type Result<T> = std::result::Result<T, SchemeError>;
