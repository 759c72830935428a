//! Approximates the unit sphere by recursively subdividing the faces of a
//! regular octahedron and projecting the sub-triangles onto the sphere. The
//! output is an unindexed triangle soup with one random color per triangle, so
//! that triangle boundaries are visible when rendered.

// NOTE: Vertices shared between neighbouring triangles are emitted once per
// triangle. Generating an index buffer with unique vertices would shrink the
// output considerably.

pub mod color;
pub mod face;
pub mod octahedron;
pub mod vertex;

pub use color::Rgb;
pub use face::{Face, Subdivision, Triangle};
pub use vertex::{Vertex, VertexBuffer};

use rand::{Rng, SeedableRng};

/// Highest subdivision level callers should ask for. Level 10 already yields
/// 8 * 4^10 (about 8.4 million) triangles.
pub const MAX_LEVEL: u32 = 10;

/// Number of segments every octahedron edge is split into.
#[inline]
pub fn divisions(level: u32) -> u32 {
    1 << level
}

#[inline]
pub fn face_triangle_count(level: u32) -> usize {
    let n = divisions(level) as usize;
    n * n
}

#[inline]
pub fn triangle_count(level: u32) -> usize {
    octahedron::FACES.len() * face_triangle_count(level)
}

#[inline]
pub fn vertex_count(level: u32) -> usize {
    3 * triangle_count(level)
}

#[inline]
pub fn float_count(level: u32) -> usize {
    vertex::STRIDE * vertex_count(level)
}

/// Generates the sphere mesh at subdivision `level` with colors drawn from a
/// `StdRng` seeded with `seed`. The positions only depend on `level`.
///
/// `level` must not exceed [`MAX_LEVEL`].
pub fn generate_sphere_mesh(level: u32, seed: u64) -> Vec<Vertex> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    octahedron::generate_with_rng(level, &mut rng)
}

/// Like [`generate_sphere_mesh`] but draws colors from the given random
/// number generator.
pub fn generate_sphere_mesh_with_rng<R: Rng>(level: u32, rng: &mut R) -> Vec<Vertex> {
    octahedron::generate_with_rng(level, rng)
}
