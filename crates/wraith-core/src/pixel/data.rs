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

//! Defines the pitch-addressed CPU pixel buffer.

use crate::math::Rgba;
use crate::pixel::{PixelError, PixelFormat, PixelVolume};

/// A buffer describing a volume (3D), image (2D), or line (1D) of pixels in
/// memory.
///
/// Pixels are stored as a succession of `depth` slices, each containing
/// `height` rows of `width` pixels. Rows and slices are addressed through
/// pitches expressed in **pixels**: `row_pitch` strides from one row to the
/// next and `slice_pitch` from one depth slice to the next. Tight buffers
/// have `row_pitch == width` and `slice_pitch == width * height`; padded
/// buffers (as required by GPU upload alignment rules) may stride further,
/// and every accessor honors the padding without copying.
///
/// The byte offset of pixel `(x, y, z)` is
/// `(z * slice_pitch + y * row_pitch + x) * bytes_per_pixel`.
///
/// A `PixelData` is exclusively owned and carries no internal
/// synchronization; callers needing concurrent access to one buffer must
/// serialize it externally.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelData {
    data: Vec<u8>,
    extents: PixelVolume,
    row_pitch: u32,
    slice_pitch: u32,
    format: PixelFormat,
}

impl PixelData {
    /// Creates a zero-initialized buffer sized to the given volume, with
    /// tight (consecutive) pitches.
    ///
    /// Fails with [`PixelError::InvalidArgument`] if any dimension of the
    /// volume is zero.
    pub fn new(volume: PixelVolume, format: PixelFormat) -> Result<Self, PixelError> {
        let row_pitch = volume.width();
        let slice_pitch = volume
            .width()
            .checked_mul(volume.height())
            .ok_or_else(|| PixelError::invalid("slice pitch overflows u32"))?;
        Self::with_pitches(volume, format, row_pitch, slice_pitch)
    }

    /// Creates a zero-initialized buffer covering
    /// `[0, width) x [0, height) x [0, depth)` with tight pitches.
    ///
    /// Fails with [`PixelError::InvalidArgument`] if any dimension is zero.
    pub fn with_extents(
        width: u32,
        height: u32,
        depth: u32,
        format: PixelFormat,
    ) -> Result<Self, PixelError> {
        Self::new(PixelVolume::from_extents(width, height, depth), format)
    }

    /// Creates a zero-initialized buffer with explicit row and slice
    /// pitches, in pixels.
    ///
    /// This is the constructor for padded layouts, where rows or slices are
    /// strided beyond their tight size to satisfy alignment requirements of
    /// a GPU upload path. Fails with [`PixelError::InvalidArgument`] if any
    /// dimension is zero, if `row_pitch < width`, if
    /// `slice_pitch < row_pitch * height`, or if the resulting byte size
    /// overflows.
    pub fn with_pitches(
        volume: PixelVolume,
        format: PixelFormat,
        row_pitch: u32,
        slice_pitch: u32,
    ) -> Result<Self, PixelError> {
        let (width, height, depth) = (volume.width(), volume.height(), volume.depth());
        if width == 0 || height == 0 || depth == 0 {
            return Err(PixelError::invalid(format!(
                "pixel buffer dimensions must be non-zero, got {width}x{height}x{depth}"
            )));
        }
        if row_pitch < width {
            return Err(PixelError::invalid(format!(
                "row pitch {row_pitch} is smaller than width {width}"
            )));
        }
        let tight_slice = row_pitch as u64 * height as u64;
        if (slice_pitch as u64) < tight_slice {
            return Err(PixelError::invalid(format!(
                "slice pitch {slice_pitch} is smaller than row pitch * height ({tight_slice})"
            )));
        }

        let size = (slice_pitch as usize)
            .checked_mul(depth as usize)
            .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel() as usize))
            .ok_or_else(|| PixelError::invalid("pixel buffer byte size overflows usize"))?;

        Ok(Self {
            data: vec![0u8; size],
            extents: volume,
            row_pitch,
            slice_pitch,
            format,
        })
    }

    /// Returns the number of pixels that offsets one row from another.
    ///
    /// This can be `width`, but doesn't have to be as some buffers require
    /// padding.
    #[inline]
    pub fn row_pitch(&self) -> u32 {
        self.row_pitch
    }

    /// Returns the number of pixels that offsets one depth slice from
    /// another.
    ///
    /// This can be `width * height`, but doesn't have to be as some buffers
    /// require padding.
    #[inline]
    pub fn slice_pitch(&self) -> u32 {
        self.slice_pitch
    }

    /// Returns the pixel format used by the internal buffer.
    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Returns the extents of the pixel volume this buffer holds.
    #[inline]
    pub fn extents(&self) -> PixelVolume {
        self.extents
    }

    /// The number of pixels along the x axis.
    #[inline]
    pub fn width(&self) -> u32 {
        self.extents.width()
    }

    /// The number of pixels along the y axis.
    #[inline]
    pub fn height(&self) -> u32 {
        self.extents.height()
    }

    /// The number of pixels along the z axis.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.extents.depth()
    }

    /// Returns whether this buffer is laid out consecutively in memory,
    /// meaning the pitches are equal to the dimensions and no padding bytes
    /// exist between rows or slices.
    #[inline]
    pub fn is_consecutive(&self) -> bool {
        self.row_pitch == self.width() && self.slice_pitch == self.width() * self.height()
    }

    /// Returns the size in bytes of the underlying buffer, padding included.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Returns the byte offset of pixel `(x, y, z)`, or an `OutOfRange`
    /// error if the coordinate lies outside the extents.
    fn byte_offset(&self, x: u32, y: u32, z: u32) -> Result<usize, PixelError> {
        if x >= self.width() || y >= self.height() || z >= self.depth() {
            return Err(PixelError::OutOfRange {
                x,
                y,
                z,
                width: self.width(),
                height: self.height(),
                depth: self.depth(),
            });
        }
        let pixel = z as usize * self.slice_pitch as usize
            + y as usize * self.row_pitch as usize
            + x as usize;
        Ok(pixel * self.format.bytes_per_pixel() as usize)
    }

    /// Returns the pixel at the specified location in the buffer.
    ///
    /// Unlike the legacy contract this type replaces (which returned an
    /// undefined value for coordinates outside the extents), out-of-range
    /// access fails explicitly with [`PixelError::OutOfRange`].
    pub fn pixel(&self, x: u32, y: u32, z: u32) -> Result<Rgba, PixelError> {
        let offset = self.byte_offset(x, y, z)?;
        let bpp = self.format.bytes_per_pixel() as usize;
        Ok(self.format.decode(&self.data[offset..offset + bpp]))
    }

    /// Sets the pixel at the specified location in the buffer.
    ///
    /// Out-of-range coordinates fail with [`PixelError::OutOfRange`] and
    /// leave the buffer untouched. Channels absent from the buffer's format
    /// are dropped; 8-bit channels are quantized as documented on
    /// [`PixelFormat::encode`].
    pub fn set_pixel(&mut self, value: Rgba, x: u32, y: u32, z: u32) -> Result<(), PixelError> {
        let offset = self.byte_offset(x, y, z)?;
        let bpp = self.format.bytes_per_pixel() as usize;
        self.format.encode(value, &mut self.data[offset..offset + bpp]);
        Ok(())
    }

    /// Returns the values of all pixels, ordered consecutively.
    ///
    /// Pixels are returned as a succession of `depth` slices, each
    /// containing `height` rows of `width` pixels: index
    /// `i = z * height * width + y * width + x`. Pitch padding is skipped
    /// internally; the result always holds exactly
    /// `width * height * depth` entries.
    pub fn pixels(&self) -> Vec<Rgba> {
        let (width, height, depth) = (self.width(), self.height(), self.depth());
        let bpp = self.format.bytes_per_pixel() as usize;
        let mut out = Vec::with_capacity(width as usize * height as usize * depth as usize);

        for z in 0..depth {
            for y in 0..height {
                let row = (z as usize * self.slice_pitch as usize
                    + y as usize * self.row_pitch as usize)
                    * bpp;
                for x in 0..width as usize {
                    let offset = row + x * bpp;
                    out.push(self.format.decode(&self.data[offset..offset + bpp]));
                }
            }
        }
        out
    }

    /// Sets all pixels in the buffer from a consecutively ordered slice.
    ///
    /// `values` must hold exactly `width * height * depth` entries in the
    /// same slice-major, row-major order that [`pixels`](Self::pixels)
    /// returns; otherwise the call fails with
    /// [`PixelError::InvalidArgument`] and no pixel is written.
    pub fn set_pixels(&mut self, values: &[Rgba]) -> Result<(), PixelError> {
        let (width, height, depth) = (self.width(), self.height(), self.depth());
        let expected = width as usize * height as usize * depth as usize;
        if values.len() != expected {
            return Err(PixelError::invalid(format!(
                "expected {expected} pixels for a {width}x{height}x{depth} buffer, got {}",
                values.len()
            )));
        }

        let bpp = self.format.bytes_per_pixel() as usize;
        let mut next = 0usize;
        for z in 0..depth {
            for y in 0..height {
                let row = (z as usize * self.slice_pitch as usize
                    + y as usize * self.row_pitch as usize)
                    * bpp;
                for x in 0..width as usize {
                    let offset = row + x * bpp;
                    self.format
                        .encode(values[next], &mut self.data[offset..offset + bpp]);
                    next += 1;
                }
            }
        }
        Ok(())
    }

    /// Returns the entire underlying byte buffer, including any padding
    /// bytes introduced by non-tight pitches.
    ///
    /// It is up to the caller to interpret the pixel format and account for
    /// the row and slice pitch values; this is the view a GPU upload path
    /// consumes verbatim.
    #[inline]
    pub fn raw_pixels(&self) -> &[u8] {
        &self.data
    }

    /// Overwrites the entire underlying byte buffer.
    ///
    /// `bytes` must be exactly [`size_bytes`](Self::size_bytes) long,
    /// padding included; otherwise the call fails with
    /// [`PixelError::InvalidArgument`] and the buffer is left unchanged.
    pub fn set_raw_pixels(&mut self, bytes: &[u8]) -> Result<(), PixelError> {
        if bytes.len() != self.data.len() {
            return Err(PixelError::invalid(format!(
                "expected {} raw bytes, got {}",
                self.data.len(),
                bytes.len()
            )));
        }
        self.data.copy_from_slice(bytes);
        Ok(())
    }

    /// Consumes the buffer and returns the underlying bytes.
    #[inline]
    pub fn into_raw_pixels(self) -> Vec<u8> {
        self.data
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f32, g: f32, b: f32, a: f32) -> Rgba {
        Rgba::new(r, g, b, a)
    }

    #[test]
    fn test_tight_buffer_layout() {
        // 4x2x1, 4 bytes per pixel, default pitches.
        let data = PixelData::with_extents(4, 2, 1, PixelFormat::Bgra8).unwrap();
        assert_eq!(data.row_pitch(), 4);
        assert_eq!(data.slice_pitch(), 8);
        assert_eq!(data.size_bytes(), 32);
        assert!(data.is_consecutive());
        assert_eq!(data.raw_pixels().len(), 32);
    }

    #[test]
    fn test_padded_buffer_layout() {
        // Same logical extents with row_pitch doubled to 8.
        let volume = PixelVolume::from_extents(4, 2, 1);
        let data = PixelData::with_pitches(volume, PixelFormat::Bgra8, 8, 16).unwrap();
        assert_eq!(data.size_bytes(), 64);
        assert!(!data.is_consecutive());
    }

    #[test]
    fn test_padded_row_addressing() {
        let volume = PixelVolume::from_extents(4, 2, 1);
        let mut data = PixelData::with_pitches(volume, PixelFormat::Bgra8, 8, 16).unwrap();
        data.set_pixel(Rgba::WHITE, 0, 1, 0).unwrap();

        // Row 1 starts one row pitch in: 8 pixels * 4 bytes = byte 32,
        // not the tight offset 16.
        assert_eq!(&data.raw_pixels()[32..36], &[255, 255, 255, 255]);
        assert!(data.raw_pixels()[16..20].iter().all(|&b| b == 0));

        // Logical enumeration ignores the padding bytes entirely.
        let pixels = data.pixels();
        assert_eq!(pixels.len(), 8);
        assert_eq!(pixels[4], Rgba::WHITE);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(PixelData::with_extents(0, 2, 1, PixelFormat::Rgba8).is_err());
        assert!(PixelData::with_extents(4, 0, 1, PixelFormat::Rgba8).is_err());
        assert!(PixelData::with_extents(4, 2, 0, PixelFormat::Rgba8).is_err());
    }

    #[test]
    fn test_bad_pitches_rejected() {
        let volume = PixelVolume::from_extents(4, 2, 1);
        assert!(PixelData::with_pitches(volume, PixelFormat::Rgba8, 2, 8).is_err());
        assert!(PixelData::with_pitches(volume, PixelFormat::Rgba8, 4, 4).is_err());
    }

    #[test]
    fn test_volume_offset_does_not_change_addressing() {
        // A volume not anchored at the origin still addresses locally.
        let volume = PixelVolume::new(10, 20, 0, 14, 22, 1).unwrap();
        let data = PixelData::new(volume, PixelFormat::Rgba8).unwrap();
        assert_eq!(data.width(), 4);
        assert_eq!(data.height(), 2);
        assert_eq!(data.size_bytes(), 32);
        assert_eq!(data.extents(), volume);
    }

    #[test]
    fn test_pixel_round_trip() {
        let mut data = PixelData::with_extents(4, 2, 1, PixelFormat::Bgra8).unwrap();
        let color = rgba(16.0 / 255.0, 32.0 / 255.0, 64.0 / 255.0, 1.0);
        data.set_pixel(color, 0, 0, 0).unwrap();

        assert_eq!(data.pixel(0, 0, 0).unwrap(), color);
        // First pixel of row 1 is independent and still zeroed.
        let pixels = data.pixels();
        assert_eq!(pixels[0], color);
        assert_eq!(pixels[4], rgba(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let mut data = PixelData::with_extents(4, 2, 1, PixelFormat::Rgba8).unwrap();
        assert!(matches!(
            data.pixel(4, 0, 0),
            Err(PixelError::OutOfRange { x: 4, .. })
        ));
        assert!(data.pixel(0, 2, 0).is_err());
        assert!(data.pixel(0, 0, 1).is_err());
        assert!(data.set_pixel(Rgba::WHITE, 0, 0, 1).is_err());
        // The failed write left everything zeroed.
        assert!(data.raw_pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixels_ordering_is_slice_major() {
        let mut data = PixelData::with_extents(2, 2, 2, PixelFormat::R8).unwrap();
        for z in 0..2 {
            for y in 0..2 {
                for x in 0..2 {
                    let shade = (z * 4 + y * 2 + x) as f32 * 36.0 / 255.0;
                    data.set_pixel(rgba(shade, 0.0, 0.0, 1.0), x, y, z).unwrap();
                }
            }
        }

        let pixels = data.pixels();
        assert_eq!(pixels.len(), 8);
        for (i, pixel) in pixels.iter().enumerate() {
            let expected = (i as f32 * 36.0 / 255.0 * 255.0).round() / 255.0;
            assert!((pixel.r - expected).abs() < 1e-6, "index {i}");
        }
    }

    #[test]
    fn test_set_pixels_round_trip() {
        let mut data = PixelData::with_extents(2, 2, 1, PixelFormat::Rgba8).unwrap();
        let values = vec![
            rgba(1.0, 0.0, 0.0, 1.0),
            rgba(0.0, 1.0, 0.0, 1.0),
            rgba(0.0, 0.0, 1.0, 1.0),
            rgba(0.0, 0.0, 0.0, 0.0),
        ];
        data.set_pixels(&values).unwrap();
        assert_eq!(data.pixels(), values);
    }

    #[test]
    fn test_set_pixels_applies_pitch_skipping() {
        let volume = PixelVolume::from_extents(2, 2, 1);
        let mut data = PixelData::with_pitches(volume, PixelFormat::R8, 5, 10).unwrap();
        let values = vec![
            rgba(1.0, 0.0, 0.0, 1.0),
            rgba(1.0, 0.0, 0.0, 1.0),
            rgba(1.0, 0.0, 0.0, 1.0),
            rgba(1.0, 0.0, 0.0, 1.0),
        ];
        data.set_pixels(&values).unwrap();

        // Rows land at pitch strides; padding bytes stay zero.
        let raw = data.raw_pixels();
        assert_eq!(&raw[0..2], &[255, 255]);
        assert!(raw[2..5].iter().all(|&b| b == 0));
        assert_eq!(&raw[5..7], &[255, 255]);
    }

    #[test]
    fn test_set_pixels_wrong_length_leaves_buffer_unchanged() {
        let mut data = PixelData::with_extents(2, 2, 1, PixelFormat::Rgba8).unwrap();
        data.set_pixel(Rgba::WHITE, 0, 0, 0).unwrap();
        let before = data.raw_pixels().to_vec();

        let err = data.set_pixels(&[Rgba::BLACK; 3]).unwrap_err();
        assert!(matches!(err, PixelError::InvalidArgument { .. }));
        assert_eq!(data.raw_pixels(), &before[..]);
    }

    #[test]
    fn test_raw_round_trip() {
        let mut data = PixelData::with_extents(2, 2, 1, PixelFormat::Rg8).unwrap();
        let bytes: Vec<u8> = (0..8).collect();
        data.set_raw_pixels(&bytes).unwrap();
        assert_eq!(data.raw_pixels(), &bytes[..]);

        // Wrong length fails and mutates nothing.
        let err = data.set_raw_pixels(&[0u8; 7]).unwrap_err();
        assert!(matches!(err, PixelError::InvalidArgument { .. }));
        assert_eq!(data.raw_pixels(), &bytes[..]);

        assert_eq!(data.into_raw_pixels(), bytes);
    }

    #[test]
    fn test_round_trip_every_format() {
        // A representable color must survive set/get in every format for
        // the channels that format carries.
        for format in PixelFormat::ALL {
            let mut data = PixelData::with_extents(3, 3, 2, format).unwrap();
            let color = rgba(51.0 / 255.0, 102.0 / 255.0, 153.0 / 255.0, 204.0 / 255.0);
            data.set_pixel(color, 2, 1, 1).unwrap();

            let layout = format.layout();
            let read = data.pixel(2, 1, 1).unwrap();
            if layout.red.is_some() {
                assert!((read.r - color.r).abs() < 1e-6, "{format:?} red");
            }
            if layout.green.is_some() {
                assert!((read.g - color.g).abs() < 1e-6, "{format:?} green");
            }
            if layout.blue.is_some() {
                assert!((read.b - color.b).abs() < 1e-6, "{format:?} blue");
            }
            if layout.alpha.is_some() {
                assert!((read.a - color.a).abs() < 1e-6, "{format:?} alpha");
            }
        }
    }

    #[test]
    fn test_size_matches_pitch_formula() {
        for format in PixelFormat::ALL {
            let volume = PixelVolume::from_extents(5, 3, 2);
            let data = PixelData::with_pitches(volume, format, 6, 20).unwrap();
            let expected = 20 * 2 * format.bytes_per_pixel() as usize;
            assert_eq!(data.size_bytes(), expected, "{format:?}");
            assert_eq!(data.raw_pixels().len(), expected, "{format:?}");
        }
    }
}
