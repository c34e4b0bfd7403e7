// Copyright 2025 The Wraith Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Defines the pixel formats understood by [`PixelData`] and their codec.
//!
//! Every format maps to a fixed, process-wide [`ChannelLayout`]: a
//! bytes-per-pixel size plus the byte offset of each channel present in the
//! format. The mapping is plain static data; there is no per-format type or
//! dispatch hierarchy.
//!
//! [`PixelData`]: crate::pixel::PixelData

use crate::math::{saturate, Rgba};
use serde::{Deserialize, Serialize};

/// The memory format of a single uncompressed pixel.
///
/// Only fixed-size uncompressed formats are represented; block-compressed
/// formats have no per-pixel byte layout and live outside this type.
/// 8-bit formats store unsigned-normalized channels; float formats store raw
/// little-endian `f32` components and round-trip HDR values losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// One 8-bit unsigned-normalized channel (red).
    R8,
    /// Two 8-bit unsigned-normalized channels (red, green).
    Rg8,
    /// Three 8-bit unsigned-normalized channels in R, G, B order.
    Rgb8,
    /// Three 8-bit unsigned-normalized channels in B, G, R order.
    Bgr8,
    /// Four 8-bit unsigned-normalized channels in R, G, B, A order.
    Rgba8,
    /// Four 8-bit unsigned-normalized channels in B, G, R, A order.
    /// This is the layout most swapchains and image editors expect.
    Bgra8,
    /// One 32-bit float channel (red).
    R32Float,
    /// Four 32-bit float channels in R, G, B, A order.
    Rgba32Float,
}

/// How the channels of a format are stored in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStorage {
    /// Each channel is one byte, unsigned, normalized to `[0.0, 1.0]`.
    Unorm8,
    /// Each channel is a little-endian `f32`.
    Float32,
}

/// The static byte layout of one pixel format.
///
/// Each channel field holds the byte offset of that channel within the
/// pixel, or `None` if the format does not carry the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelLayout {
    /// The size of one pixel in bytes.
    pub bytes_per_pixel: u32,
    /// How channel values are stored.
    pub storage: ChannelStorage,
    /// Byte offset of the red channel, if present.
    pub red: Option<u8>,
    /// Byte offset of the green channel, if present.
    pub green: Option<u8>,
    /// Byte offset of the blue channel, if present.
    pub blue: Option<u8>,
    /// Byte offset of the alpha channel, if present.
    pub alpha: Option<u8>,
}

const R8: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 1,
    storage: ChannelStorage::Unorm8,
    red: Some(0),
    green: None,
    blue: None,
    alpha: None,
};

const RG8: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 2,
    storage: ChannelStorage::Unorm8,
    red: Some(0),
    green: Some(1),
    blue: None,
    alpha: None,
};

const RGB8: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 3,
    storage: ChannelStorage::Unorm8,
    red: Some(0),
    green: Some(1),
    blue: Some(2),
    alpha: None,
};

const BGR8: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 3,
    storage: ChannelStorage::Unorm8,
    red: Some(2),
    green: Some(1),
    blue: Some(0),
    alpha: None,
};

const RGBA8: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 4,
    storage: ChannelStorage::Unorm8,
    red: Some(0),
    green: Some(1),
    blue: Some(2),
    alpha: Some(3),
};

const BGRA8: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 4,
    storage: ChannelStorage::Unorm8,
    red: Some(2),
    green: Some(1),
    blue: Some(0),
    alpha: Some(3),
};

const R32F: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 4,
    storage: ChannelStorage::Float32,
    red: Some(0),
    green: None,
    blue: None,
    alpha: None,
};

const RGBA32F: ChannelLayout = ChannelLayout {
    bytes_per_pixel: 16,
    storage: ChannelStorage::Float32,
    red: Some(0),
    green: Some(4),
    blue: Some(8),
    alpha: Some(12),
};

impl PixelFormat {
    /// Every supported format, in declaration order.
    pub const ALL: [PixelFormat; 8] = [
        PixelFormat::R8,
        PixelFormat::Rg8,
        PixelFormat::Rgb8,
        PixelFormat::Bgr8,
        PixelFormat::Rgba8,
        PixelFormat::Bgra8,
        PixelFormat::R32Float,
        PixelFormat::Rgba32Float,
    ];

    /// Returns the static channel layout for this format.
    pub const fn layout(&self) -> &'static ChannelLayout {
        match self {
            PixelFormat::R8 => &R8,
            PixelFormat::Rg8 => &RG8,
            PixelFormat::Rgb8 => &RGB8,
            PixelFormat::Bgr8 => &BGR8,
            PixelFormat::Rgba8 => &RGBA8,
            PixelFormat::Bgra8 => &BGRA8,
            PixelFormat::R32Float => &R32F,
            PixelFormat::Rgba32Float => &RGBA32F,
        }
    }

    /// Returns the size in bytes of a single pixel in this format.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> u32 {
        self.layout().bytes_per_pixel
    }

    /// Returns the number of channels this format carries.
    pub const fn channel_count(&self) -> u32 {
        let layout = self.layout();
        layout.red.is_some() as u32
            + layout.green.is_some() as u32
            + layout.blue.is_some() as u32
            + layout.alpha.is_some() as u32
    }

    /// Decodes one pixel into a normalized [`Rgba`] color.
    ///
    /// `bytes` must be exactly [`bytes_per_pixel`](Self::bytes_per_pixel)
    /// long. Channels absent from the format decode to their defaults:
    /// `0.0` for color channels and `1.0` for alpha.
    pub fn decode(&self, bytes: &[u8]) -> Rgba {
        let layout = self.layout();
        debug_assert_eq!(bytes.len(), layout.bytes_per_pixel as usize);

        let read = |offset: Option<u8>, default: f32| -> f32 {
            match offset {
                Some(offset) => match layout.storage {
                    ChannelStorage::Unorm8 => bytes[offset as usize] as f32 / 255.0,
                    ChannelStorage::Float32 => {
                        let offset = offset as usize;
                        let raw: [u8; 4] = bytes[offset..offset + 4]
                            .try_into()
                            .expect("channel offset within pixel");
                        f32::from_le_bytes(raw)
                    }
                },
                None => default,
            }
        };

        Rgba::new(
            read(layout.red, 0.0),
            read(layout.green, 0.0),
            read(layout.blue, 0.0),
            read(layout.alpha, 1.0),
        )
    }

    /// Encodes a normalized [`Rgba`] color into one pixel.
    ///
    /// `bytes` must be exactly [`bytes_per_pixel`](Self::bytes_per_pixel)
    /// long. Channels absent from the format are dropped. 8-bit channels are
    /// clamped to `[0.0, 1.0]` and rounded to the nearest representable
    /// step; values off the `1/255` grid lose precision. Float channels are
    /// stored verbatim.
    pub fn encode(&self, color: Rgba, bytes: &mut [u8]) {
        let layout = self.layout();
        debug_assert_eq!(bytes.len(), layout.bytes_per_pixel as usize);

        let mut write = |offset: Option<u8>, value: f32| {
            if let Some(offset) = offset {
                match layout.storage {
                    ChannelStorage::Unorm8 => {
                        bytes[offset as usize] = (saturate(value) * 255.0).round() as u8;
                    }
                    ChannelStorage::Float32 => {
                        let offset = offset as usize;
                        bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
                    }
                }
            }
        };

        write(layout.red, color.r);
        write(layout.green, color.g);
        write(layout.blue, color.b);
        write(layout.alpha, color.a);
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::R8.bytes_per_pixel(), 1);
        assert_eq!(PixelFormat::Rg8.bytes_per_pixel(), 2);
        assert_eq!(PixelFormat::Rgb8.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::Bgr8.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::Rgba8.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Bgra8.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::R32Float.bytes_per_pixel(), 4);
        assert_eq!(PixelFormat::Rgba32Float.bytes_per_pixel(), 16);
    }

    #[test]
    fn test_channel_count() {
        assert_eq!(PixelFormat::R8.channel_count(), 1);
        assert_eq!(PixelFormat::Rg8.channel_count(), 2);
        assert_eq!(PixelFormat::Bgr8.channel_count(), 3);
        assert_eq!(PixelFormat::Bgra8.channel_count(), 4);
        assert_eq!(PixelFormat::Rgba32Float.channel_count(), 4);
    }

    #[test]
    fn test_bgra8_channel_order() {
        let mut bytes = [0u8; 4];
        PixelFormat::Bgra8.encode(Rgba::RED, &mut bytes);
        assert_eq!(bytes, [0, 0, 255, 255]);

        let decoded = PixelFormat::Bgra8.decode(&bytes);
        assert_eq!(decoded, Rgba::RED);
    }

    #[test]
    fn test_unorm8_round_trip_all_formats() {
        // Channel values on the 1/255 grid must survive every 8-bit format
        // that carries the channel.
        let color = Rgba::new(16.0 / 255.0, 32.0 / 255.0, 64.0 / 255.0, 128.0 / 255.0);
        for format in [
            PixelFormat::Rgba8,
            PixelFormat::Bgra8,
            PixelFormat::Rgb8,
            PixelFormat::Bgr8,
            PixelFormat::Rg8,
            PixelFormat::R8,
        ] {
            let layout = format.layout();
            let mut bytes = vec![0u8; layout.bytes_per_pixel as usize];
            format.encode(color, &mut bytes);
            let decoded = format.decode(&bytes);

            assert!(approx_eq(decoded.r, color.r), "{format:?} red");
            if layout.green.is_some() {
                assert!(approx_eq(decoded.g, color.g), "{format:?} green");
            }
            if layout.blue.is_some() {
                assert!(approx_eq(decoded.b, color.b), "{format:?} blue");
            }
            if layout.alpha.is_some() {
                assert!(approx_eq(decoded.a, color.a), "{format:?} alpha");
            }
        }
    }

    #[test]
    fn test_missing_channels_decode_to_defaults() {
        let decoded = PixelFormat::R8.decode(&[255]);
        assert_eq!(decoded, Rgba::new(1.0, 0.0, 0.0, 1.0));

        // A three-channel format drops alpha on encode and restores opaque
        // alpha on decode.
        let mut bytes = [0u8; 3];
        PixelFormat::Rgb8.encode(Rgba::new(1.0, 0.5, 0.0, 0.25), &mut bytes);
        assert!(approx_eq(PixelFormat::Rgb8.decode(&bytes).a, 1.0));
    }

    #[test]
    fn test_float_formats_preserve_hdr_values() {
        let color = Rgba::new(3.5, -0.25, 1e6, 0.125);
        let mut bytes = [0u8; 16];
        PixelFormat::Rgba32Float.encode(color, &mut bytes);
        assert_eq!(PixelFormat::Rgba32Float.decode(&bytes), color);

        let mut bytes = [0u8; 4];
        PixelFormat::R32Float.encode(color, &mut bytes);
        assert_eq!(PixelFormat::R32Float.decode(&bytes).r, 3.5);
    }

    #[test]
    fn test_unorm8_quantizes_by_rounding() {
        let mut bytes = [0u8; 1];
        PixelFormat::R8.encode(Rgba::rgb(0.5, 0.0, 0.0), &mut bytes);
        assert_eq!(bytes[0], 128);
    }
}
