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

//! CPU-side pixel buffer types.
//!
//! Organized into several logical sub-modules:
//!
//! - **[`volume`]**: The [`PixelVolume`] extents describing a 1D/2D/3D block.
//! - **[`format`]**: The [`PixelFormat`] tags and their static channel layouts.
//! - **[`data`]**: The [`PixelData`] buffer itself, with pitch-aware
//!   addressing and typed or raw access.
//! - **[`error`]**: The [`PixelError`] hierarchy shared by all of the above.
//!
//! A [`PixelData`] is the wire format for texture upload: the renderer
//! consumes its raw bytes together with the pitches, format, and extents to
//! build a GPU-resident texture.

pub mod data;
pub mod error;
pub mod format;
pub mod volume;

pub use self::data::PixelData;
pub use self::error::PixelError;
pub use self::format::{ChannelLayout, PixelFormat};
pub use self::volume::PixelVolume;
