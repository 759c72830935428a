use cgmath::*;

pub type Triangle<T> = [T; 3];

// Distance between two orthogonal unit vectors.
const EDGE_LENGTH: f32 = std::f32::consts::SQRT_2;

/// One face of a regular octahedron centered at the origin. The corners are
/// unit vectors along three distinct axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Face {
    pub v1: Vector3<f32>,
    pub v2: Vector3<f32>,
    pub v3: Vector3<f32>,
}

impl Face {
    #[inline]
    pub fn new(v1: Vector3<f32>, v2: Vector3<f32>, v3: Vector3<f32>) -> Self {
        Face { v1, v2, v3 }
    }

    /// Splits every edge into `2^level` segments and yields the resulting
    /// triangles with their corners projected onto the unit sphere.
    pub fn subdivide(self, level: u32) -> Subdivision {
        Subdivision::new(self, level)
    }
}

/// Iterator over the sphere-projected triangles of one subdivided face.
///
/// Rows run parallel to the `v1 - v2` edge and advance towards `v3`. Every
/// position in a row emits an upright triangle `(w, w + d21, w + d31)`. Rows
/// after the first additionally emit the mirrored triangle
/// `(w, w + d21, w + d23)` right after the upright one, filling the gap
/// between two upright triangles of the row.
#[derive(Debug, Clone)]
pub struct Subdivision {
    v1: Vector3<f32>,
    d21: Vector3<f32>,
    d31: Vector3<f32>,
    d23: Vector3<f32>,
    n: u32,
    i: u32,
    j: u32,
    mirrored: bool,
    remaining: usize,
}

impl Subdivision {
    fn new(face: Face, level: u32) -> Self {
        let Face { v1, v2, v3 } = face;
        let n = 1u32 << level;
        let dl = EDGE_LENGTH / n as f32;
        Subdivision {
            v1,
            d21: (v2 - v1).normalize() * dl,
            d31: (v3 - v1).normalize() * dl,
            d23: (v2 - v3).normalize() * dl,
            n,
            i: 0,
            j: 0,
            mirrored: false,
            remaining: n as usize * n as usize,
        }
    }

    #[inline]
    fn advance(&mut self) {
        if !self.mirrored && self.j > 0 {
            self.mirrored = true;
            return;
        }

        self.mirrored = false;
        self.i += 1;
        if self.i == self.n - self.j {
            self.i = 0;
            self.j += 1;
        }
    }
}

impl Iterator for Subdivision {
    type Item = Triangle<Vector3<f32>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let w1 = self.v1 + self.d21 * self.i as f32 + self.d31 * self.j as f32;
        let w2 = w1 + self.d21;
        let w3 = if self.mirrored { w1 + self.d23 } else { w1 + self.d31 };

        self.advance();
        self.remaining -= 1;

        Some([w1.normalize(), w2.normalize(), w3.normalize()])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Subdivision {}

impl std::iter::FusedIterator for Subdivision {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-6;

    fn positive_face() -> Face {
        Face::new(Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z())
    }

    fn assert_triangle_eq(expected: Triangle<Vector3<f32>>, actual: Triangle<Vector3<f32>>) {
        for (e, a) in expected.iter().zip(actual.iter()) {
            assert_abs_diff_eq!(*e, *a, epsilon = EPSILON);
        }
    }

    #[test]
    fn level_0_emits_the_face_itself() {
        let face = positive_face();
        let triangles: Vec<_> = face.subdivide(0).collect();
        assert_eq!(1, triangles.len());
        assert_triangle_eq([face.v1, face.v2, face.v3], triangles[0]);
    }

    #[test]
    fn level_1_emission_order() {
        let h = std::f32::consts::FRAC_1_SQRT_2;
        let xy = Vector3::new(h, h, 0.0);
        let xz = Vector3::new(h, 0.0, h);
        let yz = Vector3::new(0.0, h, h);
        let x = Vector3::unit_x();
        let y = Vector3::unit_y();
        let z = Vector3::unit_z();

        let triangles: Vec<_> = positive_face().subdivide(1).collect();
        assert_eq!(4, triangles.len());

        // Row 0 only has upright triangles.
        assert_triangle_eq([x, xy, xz], triangles[0]);
        assert_triangle_eq([xy, y, yz], triangles[1]);
        // Row 1: upright, then mirrored from the same base point.
        assert_triangle_eq([xz, yz, z], triangles[2]);
        assert_triangle_eq([xz, yz, xy], triangles[3]);
    }

    #[test]
    fn triangle_count_is_divisions_squared() {
        for level in 0..=5 {
            let n = 1usize << level;
            let subdivision = positive_face().subdivide(level);
            assert_eq!(n * n, subdivision.len());
            assert_eq!(n * n, subdivision.count());
        }
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut subdivision = positive_face().subdivide(2);
        assert_eq!(16, subdivision.len());
        subdivision.next();
        subdivision.next();
        assert_eq!(14, subdivision.len());
        assert_eq!(14, subdivision.by_ref().count());
        assert_eq!(None, subdivision.next());
    }

    #[test]
    fn corners_lie_on_unit_sphere() {
        let face = Face::new(-Vector3::unit_x(), -Vector3::unit_y(), -Vector3::unit_z());
        for triangle in face.subdivide(4) {
            for corner in triangle.iter() {
                assert_abs_diff_eq!(1.0, corner.magnitude(), epsilon = 1e-5);
            }
        }
    }
}
