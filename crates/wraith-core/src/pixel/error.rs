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

//! Defines the error types for the pixel buffer module.

use std::fmt;

/// An error produced by pixel buffer construction or access.
///
/// All failures are synchronous and local to the call that produced them.
/// A buffer that rejects an operation is left in its prior valid state;
/// bulk writes validate lengths before touching any byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelError {
    /// An argument was rejected before any work was performed (zero
    /// dimension, pitch smaller than the dimension it strides over, or a
    /// bulk write whose length does not match the buffer).
    InvalidArgument {
        /// A description of the rejected argument.
        what: String,
    },
    /// A pixel coordinate fell outside the buffer's extents.
    OutOfRange {
        /// The x coordinate of the access.
        x: u32,
        /// The y coordinate of the access.
        y: u32,
        /// The z coordinate of the access.
        z: u32,
        /// The buffer's width.
        width: u32,
        /// The buffer's height.
        height: u32,
        /// The buffer's depth.
        depth: u32,
    },
}

impl PixelError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        PixelError::InvalidArgument { what: what.into() }
    }
}

impl fmt::Display for PixelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelError::InvalidArgument { what } => {
                write!(f, "Invalid argument: {what}")
            }
            PixelError::OutOfRange {
                x,
                y,
                z,
                width,
                height,
                depth,
            } => {
                write!(
                    f,
                    "Pixel coordinate ({x}, {y}, {z}) is outside the buffer extents \
                     {width}x{height}x{depth}"
                )
            }
        }
    }
}

impl std::error::Error for PixelError {}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PixelError::invalid("row pitch 2 is smaller than width 4");
        assert_eq!(
            err.to_string(),
            "Invalid argument: row pitch 2 is smaller than width 4"
        );

        let err = PixelError::OutOfRange {
            x: 4,
            y: 0,
            z: 0,
            width: 4,
            height: 2,
            depth: 1,
        };
        assert_eq!(
            err.to_string(),
            "Pixel coordinate (4, 0, 0) is outside the buffer extents 4x2x1"
        );
    }
}
