use crate::color::Rgb;

/// Interleaved vertex as uploaded to the GPU: position followed by color.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: Rgb,
}

/// Number of floats per vertex.
pub const STRIDE: usize = 6;

impl Vertex {
    #[inline]
    pub fn new(position: [f32; 3], color: Rgb) -> Self {
        Vertex { position, color }
    }
}

/// Zero-copy views of a vertex slice as a flat vertex buffer.
pub trait VertexBuffer {
    fn as_floats(&self) -> &[f32];
    fn as_bytes(&self) -> &[u8];
}

impl VertexBuffer for [Vertex] {
    fn as_floats(&self) -> &[f32] {
        // Vertex is repr(C) and consists of STRIDE f32s without padding.
        unsafe { std::slice::from_raw_parts(self.as_ptr() as *const f32, self.len() * STRIDE) }
    }

    fn as_bytes(&self) -> &[u8] {
        unsafe { std::slice::from_raw_parts(self.as_ptr() as *const u8, std::mem::size_of_val(self)) }
    }
}
