// SPDX-License-Identifier: MIT
//
// Strict hex validation for values about to be stored.

use std::sync::LazyLock;

use regex::Regex;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color regex")
});

/// Whether `s` is exactly `#RGB` or `#RRGGBB`.
///
/// Unlike [`hex_to_rgb`](crate::hex_to_rgb), the leading `#` is required and
/// nothing is trimmed.
///
/// ```
/// use legible_color::is_valid_hex;
///
/// assert!(is_valid_hex("#fff"));
/// assert!(!is_valid_hex("fff"));
/// ```
#[must_use]
pub fn is_valid_hex(s: &str) -> bool {
    HEX_COLOR.is_match(s)
}
