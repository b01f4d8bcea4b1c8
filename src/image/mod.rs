//! Owned per-channel images.
//!
//! `ChannelImage` is the hand-off point from image decoding: three row-major
//! planes of 16-bit samples (red, green, blue) plus a derived gray plane, all
//! of length `width * height`. Gray is the truncating mean `(r + g + b) / 3`.

use crate::geom::{Bound, Point};
use crate::integral::IntegralImage;
use crate::util::{HaarError, HaarResult};
use core::fmt;

#[cfg(feature = "image-io")]
pub mod io;

/// Color channel a query operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// Unweighted mean of red, green and blue.
    Gray,
}

impl Channel {
    /// Every channel, gray last.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Gray];
    /// The three stored color channels.
    pub const COLORS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Lowercase channel name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Gray => "gray",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned RGB image split into contiguous channel planes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelImage {
    red: Vec<u16>,
    green: Vec<u16>,
    blue: Vec<u16>,
    gray: Vec<u16>,
    width: usize,
    height: usize,
}

impl ChannelImage {
    /// Creates an image from three row-major planes and derives the gray plane.
    pub fn from_planes(
        width: usize,
        height: usize,
        red: Vec<u16>,
        green: Vec<u16>,
        blue: Vec<u16>,
    ) -> HaarResult<Self> {
        let needed = required_len(width, height, red.len())?;
        for plane in [&red, &green, &blue] {
            if plane.len() != needed {
                return Err(HaarError::DimensionMismatch {
                    width,
                    height,
                    len: plane.len(),
                });
            }
        }
        let gray = red
            .iter()
            .zip(&green)
            .zip(&blue)
            .map(|((&r, &g), &b)| gray_of(r, g, b))
            .collect();
        Ok(Self {
            red,
            green,
            blue,
            gray,
            width,
            height,
        })
    }

    /// Creates an image from interleaved 8-bit RGB data.
    ///
    /// Samples are widened to 16 bits by `v * 257`, so 255 maps to 65535.
    pub fn from_rgb8(width: usize, height: usize, rgb: &[u8]) -> HaarResult<Self> {
        let needed = required_len(width, height, rgb.len())?;
        if needed.checked_mul(3) != Some(rgb.len()) {
            return Err(HaarError::DimensionMismatch {
                width,
                height,
                len: rgb.len() / 3,
            });
        }
        let mut red = Vec::with_capacity(needed);
        let mut green = Vec::with_capacity(needed);
        let mut blue = Vec::with_capacity(needed);
        for px in rgb.chunks_exact(3) {
            red.push(u16::from(px[0]) * 257);
            green.push(u16::from(px[1]) * 257);
            blue.push(u16::from(px[2]) * 257);
        }
        Self::from_planes(width, height, red, green, blue)
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bound covering every pixel, `(0, 0)` to `(width - 1, height - 1)`.
    pub fn bounds(&self) -> Bound {
        Bound::from_coords(0, 0, self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Returns the row-major plane for `channel`.
    pub fn plane(&self, channel: Channel) -> &[u16] {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Gray => &self.gray,
        }
    }

    /// Returns the sample at `p`, or `None` outside the image.
    pub fn sample(&self, channel: Channel, p: Point) -> Option<u16> {
        let idx = p.index_in(self.width, self.height)?;
        self.plane(channel).get(idx).copied()
    }

    /// Copies the part of the image inside `bound` (inclusive corners).
    ///
    /// The bound is clipped to the image first; a bound with no pixel inside
    /// the image is an error.
    pub fn crop(&self, bound: &Bound) -> HaarResult<Self> {
        let clipped =
            bound
                .clip_to(self.width, self.height)
                .ok_or_else(|| HaarError::BoundOutOfImage {
                    bound: bound.to_string(),
                    width: self.width,
                    height: self.height,
                })?;
        let x0 = clipped.left().get() as usize;
        let y0 = clipped.top().get() as usize;
        let width = clipped.width().get() as usize + 1;
        let height = clipped.height().get() as usize + 1;

        let copy = |plane: &[u16]| -> Vec<u16> {
            let mut out = Vec::with_capacity(width * height);
            for y in y0..y0 + height {
                let start = y * self.width + x0;
                out.extend_from_slice(&plane[start..start + width]);
            }
            out
        };
        Self::from_planes(
            width,
            height,
            copy(&self.red),
            copy(&self.green),
            copy(&self.blue),
        )
    }

    /// Returns the photographic negative: every sample becomes `65535 - v`.
    pub fn invert(&self) -> Self {
        let flip = |plane: &[u16]| plane.iter().map(|&v| u16::MAX - v).collect::<Vec<_>>();
        let red = flip(&self.red);
        let green = flip(&self.green);
        let blue = flip(&self.blue);
        let gray = red
            .iter()
            .zip(&green)
            .zip(&blue)
            .map(|((&r, &g), &b)| gray_of(r, g, b))
            .collect();
        Self {
            red,
            green,
            blue,
            gray,
            width: self.width,
            height: self.height,
        }
    }

    /// Renders one channel as interleaved RGBA8 for inspection.
    ///
    /// The channel's high byte is inverted (`255 - (v >> 8)`) so that bright
    /// areas come out dark. Color channels are written to their own slot with
    /// the other two left at zero; gray is written to all three. Alpha is opaque.
    pub fn extract(&self, channel: Channel) -> Vec<u8> {
        let plane = self.plane(channel);
        let mut out = Vec::with_capacity(plane.len() * 4);
        for &v in plane {
            let level = 255 - (v >> 8) as u8;
            let px = match channel {
                Channel::Red => [level, 0, 0, 255],
                Channel::Green => [0, level, 0, 255],
                Channel::Blue => [0, 0, level, 255],
                Channel::Gray => [level, level, level, 255],
            };
            out.extend_from_slice(&px);
        }
        out
    }

    /// Builds the summed-area tables for all four channels.
    pub fn integral(&self) -> HaarResult<IntegralImage> {
        IntegralImage::from_image(self)
    }
}

#[inline]
fn gray_of(r: u16, g: u16, b: u16) -> u16 {
    ((u32::from(r) + u32::from(g) + u32::from(b)) / 3) as u16
}

fn required_len(width: usize, height: usize, got: usize) -> HaarResult<usize> {
    if width == 0 || height == 0 {
        return Err(HaarError::DimensionMismatch {
            width,
            height,
            len: got,
        });
    }
    width
        .checked_mul(height)
        .ok_or(HaarError::DimensionMismatch {
            width,
            height,
            len: got,
        })
}

#[cfg(test)]
mod tests {
    use super::{Channel, ChannelImage};
    use crate::geom::{Bound, Point};
    use crate::util::HaarError;

    fn sample_image() -> ChannelImage {
        let red: Vec<u16> = (0..12).collect();
        let green: Vec<u16> = (0..12).map(|v| v * 2).collect();
        let blue = vec![3u16; 12];
        ChannelImage::from_planes(4, 3, red, green, blue).unwrap()
    }

    #[test]
    fn gray_is_truncating_mean() {
        let img = sample_image();
        // pixel 5: r=5, g=10, b=3 -> 18 / 3 = 6; pixel 1: 1+2+3 = 6 / 3 = 2
        assert_eq!(img.sample(Channel::Gray, Point::new(1, 1)), Some(6));
        assert_eq!(img.sample(Channel::Gray, Point::new(1, 0)), Some(2));
        // pixel 2: 2+4+3 = 9 / 3 = 3; pixel 4: 4+8+3 = 15 / 3 = 5
        assert_eq!(img.plane(Channel::Gray)[2], 3);
        assert_eq!(img.plane(Channel::Gray)[4], 5);
    }

    #[test]
    fn rejects_mismatched_planes() {
        let err = ChannelImage::from_planes(4, 3, vec![0; 12], vec![0; 11], vec![0; 12])
            .err()
            .unwrap();
        assert_eq!(
            err,
            HaarError::DimensionMismatch {
                width: 4,
                height: 3,
                len: 11,
            }
        );
        assert!(ChannelImage::from_planes(0, 3, vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn widens_rgb8_samples() {
        let img = ChannelImage::from_rgb8(2, 1, &[255, 0, 1, 2, 3, 4]).unwrap();
        assert_eq!(img.plane(Channel::Red), &[65535, 514]);
        assert_eq!(img.plane(Channel::Green), &[0, 771]);
        assert_eq!(img.plane(Channel::Blue), &[257, 1028]);
    }

    #[test]
    fn rgb8_with_overflowing_length_is_rejected() {
        let huge = usize::MAX / 2;
        assert!(matches!(
            ChannelImage::from_rgb8(huge, 1, &[0u8; 6]),
            Err(HaarError::DimensionMismatch { .. })
        ));
        assert!(ChannelImage::from_rgb8(2, 1, &[0u8; 5]).is_err());
    }

    #[test]
    fn crop_copies_inclusive_region() {
        let img = sample_image();
        let cropped = img.crop(&Bound::from_coords(1, 1, 2, 2)).unwrap();
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
        assert_eq!(cropped.plane(Channel::Red), &[5, 6, 9, 10]);

        let clipped = img.crop(&Bound::from_coords(2, -4, 9, 0)).unwrap();
        assert_eq!(clipped.plane(Channel::Red), &[2, 3]);

        assert!(matches!(
            img.crop(&Bound::from_coords(5, 5, 8, 8)),
            Err(HaarError::BoundOutOfImage { .. })
        ));
    }

    #[test]
    fn invert_flips_samples_and_regrays() {
        let img = sample_image().invert();
        assert_eq!(img.sample(Channel::Red, Point::new(0, 0)), Some(65535));
        assert_eq!(img.sample(Channel::Blue, Point::new(0, 0)), Some(65532));
        // (65535 + 65535 + 65532) / 3 = 65534
        assert_eq!(img.sample(Channel::Gray, Point::new(0, 0)), Some(65534));
    }

    #[test]
    fn extract_writes_inverted_high_byte() {
        let img = ChannelImage::from_planes(1, 1, vec![0x4000], vec![0], vec![0xFFFF]).unwrap();
        assert_eq!(img.extract(Channel::Red), vec![255 - 0x40, 0, 0, 255]);
        assert_eq!(img.extract(Channel::Blue), vec![0, 0, 0, 255]);
        assert_eq!(img.extract(Channel::Green), vec![0, 255, 0, 255]);
    }

    #[test]
    fn channel_names() {
        assert_eq!(Channel::Gray.to_string(), "gray");
        assert_eq!(Channel::COLORS.len(), 3);
    }
}
