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

//! Defines the extents of a block of pixels.

use crate::pixel::PixelError;
use serde::{Deserialize, Serialize};

/// The extents of a 1D, 2D, or 3D block of pixels.
///
/// A volume is a half-open box: the origin (`left`, `top`, `front`) is
/// inclusive and the bound (`right`, `bottom`, `back`) is exclusive, so
/// `width == right - left` and similarly for the other axes.
///
/// Invariant: `right >= left`, `bottom >= top`, `back >= front`. The
/// constructors enforce it; code assembling a volume from raw fields is
/// responsible for upholding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelVolume {
    /// The inclusive left edge (start of the x range).
    pub left: u32,
    /// The inclusive top edge (start of the y range).
    pub top: u32,
    /// The inclusive front edge (start of the z range).
    pub front: u32,
    /// The exclusive right edge (end of the x range).
    pub right: u32,
    /// The exclusive bottom edge (end of the y range).
    pub bottom: u32,
    /// The exclusive back edge (end of the z range).
    pub back: u32,
}

impl PixelVolume {
    /// Creates a 3D volume from its six edges.
    ///
    /// Fails with [`PixelError::InvalidArgument`] if any bound is smaller
    /// than its origin.
    pub fn new(
        left: u32,
        top: u32,
        front: u32,
        right: u32,
        bottom: u32,
        back: u32,
    ) -> Result<Self, PixelError> {
        if right < left || bottom < top || back < front {
            return Err(PixelError::invalid(format!(
                "volume bounds ({right}, {bottom}, {back}) precede origin ({left}, {top}, {front})"
            )));
        }
        Ok(Self {
            left,
            top,
            front,
            right,
            bottom,
            back,
        })
    }

    /// Creates a 2D volume (a single depth slice, `front = 0`, `back = 1`).
    ///
    /// Fails with [`PixelError::InvalidArgument`] if `right < left` or
    /// `bottom < top`.
    pub fn new_2d(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self, PixelError> {
        Self::new(left, top, 0, right, bottom, 1)
    }

    /// Creates a volume anchored at the origin covering
    /// `[0, width) x [0, height) x [0, depth)`.
    pub const fn from_extents(width: u32, height: u32, depth: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            front: 0,
            right: width,
            bottom: height,
            back: depth,
        }
    }

    /// The number of pixels along the x axis.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    /// The number of pixels along the y axis.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// The number of pixels along the z axis.
    #[inline]
    pub const fn depth(&self) -> u32 {
        self.back - self.front
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_dimensions() {
        let volume = PixelVolume::new(2, 4, 1, 10, 8, 3).unwrap();
        assert_eq!(volume.width(), 8);
        assert_eq!(volume.height(), 4);
        assert_eq!(volume.depth(), 2);
    }

    #[test]
    fn test_from_extents_is_origin_anchored() {
        let volume = PixelVolume::from_extents(4, 2, 1);
        assert_eq!(volume, PixelVolume::new_2d(0, 0, 4, 2).unwrap());
        assert_eq!(volume.width(), 4);
        assert_eq!(volume.height(), 2);
        assert_eq!(volume.depth(), 1);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(PixelVolume::new(5, 0, 0, 4, 1, 1).is_err());
        assert!(PixelVolume::new(0, 5, 0, 1, 4, 1).is_err());
        assert!(PixelVolume::new(0, 0, 5, 1, 1, 4).is_err());
    }

    #[test]
    fn test_empty_volume_is_valid() {
        // A zero-size volume is a legal extents value; only PixelData
        // construction requires non-zero dimensions.
        let volume = PixelVolume::new(3, 3, 0, 3, 3, 0).unwrap();
        assert_eq!(volume.width(), 0);
        assert_eq!(volume.depth(), 0);
    }
}
