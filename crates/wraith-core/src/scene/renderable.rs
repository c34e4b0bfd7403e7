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

//! Defines the renderable scene record.

use crate::math::Aabb;
use serde::{Deserialize, Serialize};

/// An opaque handle to a mesh resource owned by the asset system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshId(pub usize);

/// An opaque handle to a material resource owned by the asset system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub usize);

/// A visible object in the scene: a mesh, one material slot per sub-mesh,
/// and a layer bitmask the renderer matches against camera layers.
///
/// This is a plain data record. It references external resources by opaque
/// handle and carries no behavior beyond validated field access; the
/// renderer reads it each frame and writes back the world-space bounds of
/// the mesh it drew.
#[derive(Debug, Clone)]
pub struct Renderable {
    mesh: Option<MeshId>,
    materials: Vec<Option<MaterialId>>,
    layers: u64,
    bounds: Aabb,
}

impl Renderable {
    /// Creates an empty renderable: no mesh, no material slots, and the
    /// first layer bit set.
    pub fn new() -> Self {
        Self {
            mesh: None,
            materials: Vec::new(),
            layers: 1,
            bounds: Aabb::EMPTY,
        }
    }

    /// Sets the mesh to render.
    ///
    /// All sub-meshes of the mesh are rendered, and individual materials
    /// may be set for each. The material slots are resized to
    /// `sub_mesh_count`; slots that survive the resize keep their
    /// assignment, new slots start empty.
    pub fn set_mesh(&mut self, mesh: MeshId, sub_mesh_count: usize) {
        self.mesh = Some(mesh);
        self.materials.resize(sub_mesh_count, None);
    }

    /// Returns the mesh to render, if one is assigned.
    #[inline]
    pub fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }

    /// Sets the material used for rendering the sub-mesh with the given
    /// index.
    ///
    /// Indices beyond the current sub-mesh count are ignored with a
    /// warning, mirroring how excess materials behave in
    /// [`set_materials`](Self::set_materials).
    pub fn set_material(&mut self, index: usize, material: MaterialId) {
        match self.materials.get_mut(index) {
            Some(slot) => *slot = Some(material),
            None => log::warn!(
                "Ignoring material for sub-mesh {index}; renderable has {} slot(s).",
                self.materials.len()
            ),
        }
    }

    /// Sets the primary material (sub-mesh 0). Sub-meshes without a
    /// specific material fall back to it at draw time.
    pub fn set_primary_material(&mut self, material: MaterialId) {
        self.set_material(0, material);
    }

    /// Returns the material assigned to the sub-mesh with the given index,
    /// if any.
    pub fn material(&self, index: usize) -> Option<MaterialId> {
        self.materials.get(index).copied().flatten()
    }

    /// Sets all materials used for rendering this renderable, one per
    /// sub-mesh.
    ///
    /// If more materials are supplied than there are sub-meshes, the excess
    /// is ignored with a warning. If fewer are supplied, the remaining
    /// slots are cleared.
    pub fn set_materials(&mut self, materials: &[MaterialId]) {
        let slots = self.materials.len();
        if materials.len() > slots {
            log::warn!(
                "Ignoring {} excess material(s); renderable has {slots} sub-mesh slot(s).",
                materials.len() - slots
            );
        }
        for (index, slot) in self.materials.iter_mut().enumerate() {
            *slot = materials.get(index).copied();
        }
    }

    /// Returns all material slots, one per sub-mesh.
    #[inline]
    pub fn materials(&self) -> &[Option<MaterialId>] {
        &self.materials
    }

    /// Sets the layer bitmask that controls whether this renderable is
    /// visible to a specific camera. The renderable's layers must intersect
    /// a camera's layers for that camera to draw it.
    #[inline]
    pub fn set_layers(&mut self, layers: u64) {
        self.layers = layers;
    }

    /// Returns the layer bitmask.
    #[inline]
    pub fn layers(&self) -> u64 {
        self.layers
    }

    /// Returns the world-space bounds of the mesh rendered by this object.
    ///
    /// Bounds are recomputed by the renderer after each draw and are not
    /// user-settable.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Stores renderer-computed world-space bounds.
    pub(crate) fn update_bounds(&mut self, bounds: Aabb) {
        self.bounds = bounds;
    }
}

impl Default for Renderable {
    fn default() -> Self {
        Self::new()
    }
}
