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

//! # Wraith Core
//!
//! Foundational crate containing the engine's CPU-side pixel buffer types,
//! the math primitives they depend on, and the plain scene data records that
//! reference resources built from them.

#![warn(missing_docs)]

pub mod math;
pub mod pixel;
pub mod scene;

pub use pixel::{PixelData, PixelError, PixelFormat, PixelVolume};
