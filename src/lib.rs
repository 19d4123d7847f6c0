//! Terminal Palette - Color conversions for terminal emulation
//!
//! This crate provides the color plumbing shared by terminal renderers:
//! - Quantization of 24-bit RGB to the nearest xterm 256-color index
//! - The canonical xterm palette (RGB values for all 256 indices)
//! - Reduction of 256-color indices to the legacy 16-color ANSI palette
//! - Packing and unpacking of RGB channels into a single integer
//!
//! Every operation is a pure function of its inputs: given the same
//! arguments it always produces the same result. There is no shared
//! mutable state, only constant lookup data, so calls are safe from any
//! number of threads without synchronization.

mod color;
mod palette;
mod quantize;
mod rgb;

pub use color::Color;
pub use palette::{index_to_16, index_to_rgb};
pub use quantize::{rgb_to_16, rgb_to_256};
pub use rgb::{pack_rgb, split_rgb, Rgb};
