//! Loading and saving images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::image::{Channel, ChannelImage};
use crate::util::{HaarError, HaarResult};
use std::path::Path;

/// Splits a decoded image into 16-bit channel planes, dropping alpha.
pub fn channel_image_from_dynamic(img: &image::DynamicImage) -> HaarResult<ChannelImage> {
    let rgba = img.to_rgba16();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    let count = width * height;
    let mut red = Vec::with_capacity(count);
    let mut green = Vec::with_capacity(count);
    let mut blue = Vec::with_capacity(count);
    for px in rgba.pixels() {
        red.push(px.0[0]);
        green.push(px.0[1]);
        blue.push(px.0[2]);
    }
    ChannelImage::from_planes(width, height, red, green, blue)
}

/// Loads an image from disk into 16-bit channel planes.
pub fn load_channel_image<P: AsRef<Path>>(path: P) -> HaarResult<ChannelImage> {
    let img = image::open(path).map_err(|err| HaarError::ImageIo {
        reason: err.to_string(),
    })?;
    channel_image_from_dynamic(&img)
}

/// Writes the [`ChannelImage::extract`] rendering of one channel to disk.
///
/// The output format follows the file extension.
pub fn save_channel<P: AsRef<Path>>(
    img: &ChannelImage,
    channel: Channel,
    path: P,
) -> HaarResult<()> {
    let rgba = image::RgbaImage::from_raw(
        img.width() as u32,
        img.height() as u32,
        img.extract(channel),
    )
    .ok_or(HaarError::DimensionMismatch {
        width: img.width(),
        height: img.height(),
        len: img.plane(channel).len(),
    })?;
    rgba.save(path).map_err(|err| HaarError::ImageIo {
        reason: err.to_string(),
    })
}
