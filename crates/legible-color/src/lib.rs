// SPDX-License-Identifier: MIT
//
// legible-color — color values for the legible text-color engine.
//
// Colors arrive from stored background configurations as hex strings
// (`#RGB` or `#RRGGBB`, any case). This crate turns them into 8-bit RGB
// triplets and back. Two parsing philosophies live side by side:
//
//   hex_to_rgb   → permissive: anything malformed becomes black, never fails
//   is_valid_hex → strict: exact `#RGB` / `#RRGGBB` shape, `#` required
//
// Rendering paths use the permissive one so bad stored data can't crash
// a page; storage-layer validation uses the strict one.

pub mod color;
pub mod validate;

pub use color::{Rgb, gradient_mid_color, hex_to_rgb, rgb_to_hex};
pub use validate::is_valid_hex;
