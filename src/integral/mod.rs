//! Integral images and feature evaluation.
//!
//! An `IntegralImage` owns one summed-area table per channel (red, green,
//! blue, and gray derived as `(r + g + b) / 3`). Tables are built once and
//! never mutated, so every query is a constant-time read.

mod table;

pub use table::IntegralTable;

use crate::geom::{Bound, Point};
use crate::image::{Channel, ChannelImage};
use crate::pattern::{split, Feature, Pattern, WeightMatrix};
use crate::search::{self, RecenterConfig, RecenterOutcome};
use crate::trace::{trace_event, trace_span};
use crate::util::{HaarError, HaarResult};

/// Per-channel feature values from [`IntegralImage::guess`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess {
    /// Feature value for red, green and blue, in that order.
    pub values: [i64; 3],
    /// True when at most one of the values is negative.
    pub accepted: bool,
}

/// Summed-area tables for all four channels of one image.
#[derive(Clone, Debug)]
pub struct IntegralImage {
    red: IntegralTable,
    green: IntegralTable,
    blue: IntegralTable,
    gray: IntegralTable,
    width: usize,
    height: usize,
}

impl IntegralImage {
    /// Builds tables from three row-major planes; gray is derived per pixel.
    pub fn build<T>(
        width: usize,
        height: usize,
        red: &[T],
        green: &[T],
        blue: &[T],
    ) -> HaarResult<Self>
    where
        T: Copy + Into<i64>,
    {
        let _span = trace_span!("integral_build", width = width, height = height).entered();

        let gray = gray_plane(width, height, red, green, blue)?;
        let out = Self {
            red: IntegralTable::build(width, height, red)?,
            green: IntegralTable::build(width, height, green)?,
            blue: IntegralTable::build(width, height, blue)?,
            gray: IntegralTable::build(width, height, &gray)?,
            width,
            height,
        };
        trace_event!("integral_tables", cells = width * height);
        Ok(out)
    }

    /// Builds the four tables concurrently; identical to [`IntegralImage::build`].
    #[cfg(feature = "rayon")]
    pub fn build_par<T>(
        width: usize,
        height: usize,
        red: &[T],
        green: &[T],
        blue: &[T],
    ) -> HaarResult<Self>
    where
        T: Copy + Into<i64> + Sync,
    {
        let _span = trace_span!(
            "integral_build",
            width = width,
            height = height,
            parallel = true
        )
        .entered();

        let gray = gray_plane(width, height, red, green, blue)?;
        let ((red, green), (blue, gray)) = rayon::join(
            || {
                rayon::join(
                    || IntegralTable::build(width, height, red),
                    || IntegralTable::build(width, height, green),
                )
            },
            || {
                rayon::join(
                    || IntegralTable::build(width, height, blue),
                    || IntegralTable::build(width, height, &gray),
                )
            },
        );
        let out = Self {
            red: red?,
            green: green?,
            blue: blue?,
            gray: gray?,
            width,
            height,
        };
        trace_event!("integral_tables", cells = width * height);
        Ok(out)
    }

    /// Builds tables from an owned channel image.
    pub fn from_image(img: &ChannelImage) -> HaarResult<Self> {
        Self::build(
            img.width(),
            img.height(),
            img.plane(Channel::Red),
            img.plane(Channel::Green),
            img.plane(Channel::Blue),
        )
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the table for `channel`.
    pub fn table(&self, channel: Channel) -> &IntegralTable {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Gray => &self.gray,
        }
    }

    /// Sum of `channel` over the inclusive `bound`.
    #[inline]
    pub fn query(&self, channel: Channel, bound: &Bound) -> i64 {
        self.table(channel).sum_bound(bound)
    }

    /// Sub-bounds and weights that [`IntegralImage::apply_feature`] evaluates.
    pub fn extract_features<P: Pattern + ?Sized>(
        &self,
        bound: &Bound,
        pattern: &P,
    ) -> Vec<Feature> {
        split(bound, pattern)
    }

    /// Weighted sum of `channel` over the cells of `pattern` laid on `bound`.
    ///
    /// An empty bound has no cells and evaluates to zero.
    pub fn apply_feature<P: Pattern + ?Sized>(
        &self,
        channel: Channel,
        bound: &Bound,
        pattern: &P,
    ) -> i64 {
        let table = self.table(channel);
        split(bound, pattern)
            .iter()
            .map(|feat| i64::from(feat.weight) * table.sum_bound(&feat.bound))
            .sum()
    }

    /// Applies the 5x5 radial pattern to red, green and blue.
    ///
    /// The bound is accepted when no more than one channel responds negatively.
    pub fn guess(&self, bound: &Bound) -> Guess {
        let pattern = WeightMatrix::inner5();
        let mut values = [0i64; 3];
        for (slot, channel) in values.iter_mut().zip(Channel::COLORS) {
            *slot = self.apply_feature(channel, bound, &pattern);
        }
        let negatives = values.iter().filter(|&&v| v < 0).count();
        Guess {
            values,
            accepted: negatives <= 1,
        }
    }

    /// Mass center of `channel` inside `bound` with the default search config.
    pub fn center_of_mass(&self, channel: Channel, bound: &Bound) -> Point {
        search::center_of_mass(self.table(channel), bound, &RecenterConfig::default())
    }

    /// Translates `bound` toward its mass center with the default config.
    pub fn recenter(&self, channel: Channel, bound: &Bound, max_iterations: usize) -> Bound {
        self.recenter_with(channel, bound, max_iterations, &RecenterConfig::default())
            .bound
    }

    /// Like [`IntegralImage::recenter`] with an explicit config and full outcome.
    pub fn recenter_with(
        &self,
        channel: Channel,
        bound: &Bound,
        max_iterations: usize,
        cfg: &RecenterConfig,
    ) -> RecenterOutcome {
        search::recenter(self.table(channel), bound, max_iterations, cfg)
    }
}

fn gray_plane<T>(
    width: usize,
    height: usize,
    red: &[T],
    green: &[T],
    blue: &[T],
) -> HaarResult<Vec<i64>>
where
    T: Copy + Into<i64>,
{
    for plane in [red, green, blue] {
        if width.checked_mul(height) != Some(plane.len()) {
            return Err(HaarError::DimensionMismatch {
                width,
                height,
                len: plane.len(),
            });
        }
    }
    let wide = |v: T| -> i64 { v.into() };
    Ok(red
        .iter()
        .zip(green)
        .zip(blue)
        .map(|((&r, &g), &b)| (wide(r) + wide(g) + wide(b)) / 3)
        .collect())
}
