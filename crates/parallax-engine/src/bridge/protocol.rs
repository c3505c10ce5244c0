/// Shared frame buffer layout.
/// Must stay in sync with the JavaScript host's reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// The host reads them from the header to compute offsets dynamically.

use crate::api::sim::SimConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 1;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 2;
pub const HEADER_WORLD_WIDTH: usize = 3;
pub const HEADER_WORLD_HEIGHT: usize = 4;
pub const HEADER_PROTOCOL_VERSION: usize = 5;
// Indices 6 and 7 are reserved.

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a (wire format, never changes).
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    /// Maximum vector vertices per frame.
    pub max_vector_vertices: usize,
    /// Size of the vector data section in floats.
    pub vector_data_floats: usize,
    /// Offset (in floats) where vector data begins.
    pub vector_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl FrameLayout {
    /// Compute layout from a raw vertex capacity.
    pub fn new(max_vector_vertices: usize) -> Self {
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;
        let vector_data_offset = HEADER_FLOATS;
        let buffer_total_floats = vector_data_offset + vector_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_vector_vertices,
            vector_data_floats,
            vector_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a SimConfig.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_vector_vertices)
    }
}
