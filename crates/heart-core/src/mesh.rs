//! Triangle mesh of the loaded heart model, in model-group local space.

use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn union(self, other: Aabb) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Slab test. Returns the entry distance along the ray (0 when the origin
    /// is inside the box).
    pub fn ray_entry(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let inv = dir.recip();
        let t0 = (self.min - origin) * inv;
        let t1 = (self.max - origin) * inv;
        let t_near = t0.min(t1).max_element();
        let t_far = t0.max(t1).min_element();
        if t_far < t_near.max(0.0) {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub triangle_index: usize,
}

/// Moller-Trumbore ray/triangle test, two-sided. Returns the ray parameter.
pub fn ray_triangle(origin: Vec3, dir: Vec3, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = b - a;
    let e2 = c - a;
    let p = dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t > EPS).then_some(t)
}

#[derive(Clone, Debug, Default)]
pub struct ModelMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Linear RGBA per vertex, from the primitive's material base color.
    pub colors: Vec<Vec4>,
    pub indices: Vec<u32>,
    bounds: Option<Aabb>,
}

impl ModelMesh {
    /// Builds a mesh; normals are generated from faces when `normals` does not
    /// match `positions` in length.
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let normals = if normals.len() == positions.len() {
            normals
        } else {
            face_normals(&positions, &indices)
        };
        let bounds = Aabb::from_points(&positions);
        let colors = vec![Vec4::ONE; positions.len()];
        Self {
            positions,
            normals,
            colors,
            indices,
            bounds,
        }
    }

    /// Paints every vertex with one color.
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.colors.iter_mut().for_each(|c| *c = color);
        self
    }

    #[inline]
    pub fn bounds(&self) -> Option<Aabb> {
        self.bounds
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    pub fn triangle(&self, i: usize) -> Option<[Vec3; 3]> {
        let tri = self.indices.get(i * 3..i * 3 + 3)?;
        Some([
            *self.positions.get(tri[0] as usize)?,
            *self.positions.get(tri[1] as usize)?,
            *self.positions.get(tri[2] as usize)?,
        ])
    }

    /// Appends another mesh with `transform` applied to its vertices.
    pub fn append_transformed(&mut self, other: &ModelMesh, transform: Mat4) {
        let start = self.positions.len();
        let base = start as u32;
        let normal_matrix = transform.inverse().transpose();
        self.positions
            .extend(other.positions.iter().map(|p| transform.transform_point3(*p)));
        self.normals.extend(
            other
                .normals
                .iter()
                .map(|n| normal_matrix.transform_vector3(*n).normalize_or_zero()),
        );
        self.colors.extend_from_slice(&other.colors);
        self.indices.extend(other.indices.iter().map(|i| i + base));
        let added = Aabb::from_points(&self.positions[start..]);
        self.bounds = match (self.bounds, added) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        };
    }

    /// Nearest intersection of a ray with the mesh, in the mesh's space.
    pub fn raycast(&self, origin: Vec3, dir: Vec3) -> Option<RayHit> {
        self.bounds?.ray_entry(origin, dir)?;
        let mut best: Option<(usize, f32)> = None;
        for i in 0..self.triangle_count() {
            let Some([a, b, c]) = self.triangle(i) else {
                continue;
            };
            if let Some(t) = ray_triangle(origin, dir, a, b, c) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        let (i, t) = best?;
        let [a, b, c] = self.triangle(i)?;
        Some(RayHit {
            distance: t,
            point: origin + dir * t,
            normal: (b - a).cross(c - a).normalize_or_zero(),
            triangle_index: i,
        })
    }
}

/// Area-weighted vertex normals accumulated from triangle faces.
pub fn face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let (Some(a), Some(b), Some(c)) = (positions.get(ia), positions.get(ib), positions.get(ic))
        else {
            continue;
        };
        let n = (*b - *a).cross(*c - *a);
        normals[ia] += n;
        normals[ib] += n;
        normals[ic] += n;
    }
    normals.iter().map(|n| n.normalize_or_zero()).collect()
}
