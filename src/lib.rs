//! haarlike computes Haar-like rectangular features over integral images.
//!
//! Build an [`IntegralImage`] once per image (one summed-area table per
//! channel), then evaluate any signed [`Pattern`] over any [`Bound`] in
//! constant time per pattern cell, or pull a bound toward its channel mass
//! with [`IntegralImage::recenter`]. Decoding files is optional via the
//! `image-io` feature; the `rayon` feature builds channel tables in parallel.

pub mod geom;
pub mod image;
pub mod integral;
pub mod pattern;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use crate::image::{Channel, ChannelImage};
pub use geom::{Bound, Point, H, W, X, Y};
pub use integral::{Guess, IntegralImage, IntegralTable};
pub use pattern::{split, Feature, Pattern, PatternKind, WeightMatrix};
pub use search::{RecenterConfig, RecenterOutcome};
pub use util::{HaarError, HaarResult};
