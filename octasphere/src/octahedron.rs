use crate::color::random_color;
use crate::face::{Face, Triangle};
use crate::vertex::Vertex;
use cgmath::*;
use rand::Rng;

const PX: Vector3<f32> = Vector3 { x: 1.0, y: 0.0, z: 0.0 };
const NX: Vector3<f32> = Vector3 { x: -1.0, y: 0.0, z: 0.0 };
const PY: Vector3<f32> = Vector3 { x: 0.0, y: 1.0, z: 0.0 };
const NY: Vector3<f32> = Vector3 { x: 0.0, y: -1.0, z: 0.0 };
const PZ: Vector3<f32> = Vector3 { x: 0.0, y: 0.0, z: 1.0 };
const NZ: Vector3<f32> = Vector3 { x: 0.0, y: 0.0, z: -1.0 };

/// The faces of the unit octahedron, `(±x, ±y, ±z)`. The four faces around
/// `+z` come first, then the four around `-z`.
pub static FACES: [Face; 8] = [
    Face { v1: PX, v2: PY, v3: PZ },
    Face { v1: NX, v2: PY, v3: PZ },
    Face { v1: NX, v2: NY, v3: PZ },
    Face { v1: PX, v2: NY, v3: PZ },
    Face { v1: PX, v2: PY, v3: NZ },
    Face { v1: NX, v2: PY, v3: NZ },
    Face { v1: NX, v2: NY, v3: NZ },
    Face { v1: PX, v2: NY, v3: NZ },
];

/// All sphere-projected triangles of the subdivided octahedron, face by face.
/// Positions only, so the result does not depend on any random state.
pub fn triangles(level: u32) -> impl Iterator<Item = Triangle<Vector3<f32>>> {
    FACES.iter().flat_map(move |face| face.subdivide(level))
}

/// Generates the triangle soup for `level`, drawing one color from `rng` per
/// triangle.
pub fn generate_with_rng<R: Rng>(level: u32, rng: &mut R) -> Vec<Vertex> {
    debug_assert!(
        level <= crate::MAX_LEVEL,
        "Subdivision level {} exceeds the maximum of {}.",
        level,
        crate::MAX_LEVEL
    );

    let mut vertices = Vec::with_capacity(crate::vertex_count(level));

    for triangle in triangles(level) {
        let color = random_color(rng);
        vertices.extend(triangle.iter().map(|&position| Vertex::new(position.into(), color)));
    }

    debug_assert_eq!(vertices.len(), crate::vertex_count(level));

    vertices
}
