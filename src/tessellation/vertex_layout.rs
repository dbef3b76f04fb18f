//! GPU-facing vertex format for [`SolidMesh`]: an interleaved `f32` position
//! followed by the two texture channels.

use crate::error::{BoardError, Result};

use super::SolidMesh;

/// Number of `f32` values per interleaved vertex.
pub const FLOATS_PER_VERTEX: usize = 7;

/// Size in bytes of one interleaved vertex.
pub const VERTEX_STRIDE: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();

/// Semantic of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexAttributeKind {
    Position,
    TextureCoordinate,
}

/// One attribute of the interleaved vertex format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Byte offset from the start of the vertex.
    pub offset: usize,
    /// Number of `f32` components.
    pub components: usize,
    pub kind: VertexAttributeKind,
    /// Distinguishes attributes of the same kind (texture channel 0 or 1).
    pub usage_index: u32,
}

/// Position (3 floats), absolute UV (2 floats), normalized UV (2 floats).
pub const VERTEX_LAYOUT: [VertexAttribute; 3] = [
    VertexAttribute {
        offset: 0,
        components: 3,
        kind: VertexAttributeKind::Position,
        usage_index: 0,
    },
    VertexAttribute {
        offset: 3 * std::mem::size_of::<f32>(),
        components: 2,
        kind: VertexAttributeKind::TextureCoordinate,
        usage_index: 0,
    },
    VertexAttribute {
        offset: 5 * std::mem::size_of::<f32>(),
        components: 2,
        kind: VertexAttributeKind::TextureCoordinate,
        usage_index: 1,
    },
];

impl SolidMesh {
    /// Flattens the vertices into an interleaved `f32` buffer matching
    /// [`VERTEX_LAYOUT`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn interleaved_vertices(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.vertices.len() * FLOATS_PER_VERTEX);
        for v in &self.vertices {
            out.extend_from_slice(&[
                v.position.x as f32,
                v.position.y as f32,
                v.position.z as f32,
                v.uv_absolute.x as f32,
                v.uv_absolute.y as f32,
                v.uv_normalized.x as f32,
                v.uv_normalized.y as f32,
            ]);
        }
        out
    }

    /// The index buffer narrowed to 16 bits.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOverflow`] if some vertex cannot be
    /// addressed by a `u16`.
    pub fn indices_u16(&self) -> Result<Vec<u16>> {
        if self.vertices.len() > usize::from(u16::MAX) + 1 {
            return Err(BoardError::IndexOverflow {
                vertex_count: self.vertices.len(),
            });
        }
        self.indices
            .iter()
            .map(|&i| {
                u16::try_from(i).map_err(|_| BoardError::IndexOverflow {
                    vertex_count: self.vertices.len(),
                })
            })
            .collect()
    }
}
