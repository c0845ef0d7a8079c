// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D affine transforms for mapping world space into a viewport's display
//! coordinate system (DCS).

use core::ops::Mul;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::{Point3, Vec3};

/// Threshold below which a normal is considered "near the world Z axis" by
/// the arbitrary-axis algorithm.
const ARBITRARY_AXIS_LIMIT: f64 = 1.0 / 64.0;

/// A 3D affine transform stored as a 3x4 row-major matrix.
///
/// The left 3x3 block is the linear part and the last column is the
/// translation. Composition follows the same convention as [`kurbo::Affine`]:
/// `a * b` applies `b` first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3 {
    rows: [[f64; 4]; 3],
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3 {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);

    /// Creates a transform from its matrix rows.
    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the matrix rows.
    #[must_use]
    pub const fn rows(&self) -> [[f64; 4]; 3] {
        self.rows
    }

    /// Returns the translation column.
    #[must_use]
    pub const fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// A pure translation by `offset`.
    #[must_use]
    pub const fn translate(offset: Vec3) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, offset.x],
            [0.0, 1.0, 0.0, offset.y],
            [0.0, 0.0, 1.0, offset.z],
        ])
    }

    /// Builds a transform whose linear part maps the world axes onto the
    /// given basis vectors, laid out as rows.
    const fn from_basis_rows(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self::from_rows([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
        ])
    }

    /// Rotation by `angle` radians about `axis`, passing through `anchor`.
    ///
    /// Positive angles rotate counter-clockwise when looking down `axis`
    /// towards the anchor. Returns `None` if `axis` has no direction.
    #[must_use]
    pub fn rotation_about(axis: Vec3, angle: f64, anchor: Point3) -> Option<Self> {
        let k = axis.normalize()?;
        let (s, c) = (angle.sin(), angle.cos());
        let t = 1.0 - c;

        // Rodrigues: R = cI + s[k]x + (1 - c) k kᵀ
        let linear = [
            [
                c + t * k.x * k.x,
                t * k.x * k.y - s * k.z,
                t * k.x * k.z + s * k.y,
            ],
            [
                t * k.y * k.x + s * k.z,
                c + t * k.y * k.y,
                t * k.y * k.z - s * k.x,
            ],
            [
                t * k.z * k.x - s * k.y,
                t * k.z * k.y + s * k.x,
                c + t * k.z * k.z,
            ],
        ];

        // p' = R (p - a) + a, so the translation is a - R a.
        let a = anchor.to_vec3();
        let mut rows = [[0.0; 4]; 3];
        for (row, lin) in rows.iter_mut().zip(linear) {
            let ra = lin[0] * a.x + lin[1] * a.y + lin[2] * a.z;
            *row = [lin[0], lin[1], lin[2], 0.0];
            row[3] = -ra;
        }
        rows[0][3] += a.x;
        rows[1][3] += a.y;
        rows[2][3] += a.z;
        Some(Self::from_rows(rows))
    }

    /// Derives the in-plane X and Y axes for a plane with the given normal.
    ///
    /// Uses the arbitrary-axis algorithm common to CAD file formats: when the
    /// normal is close to the world Z axis, the plane's X axis is
    /// `world_y × normal`, otherwise `world_z × normal`. Returns `None` when
    /// `normal` has no direction.
    #[must_use]
    pub fn plane_axes(normal: Vec3) -> Option<(Vec3, Vec3, Vec3)> {
        let n = normal.normalize()?;
        let seed = if n.x.abs() < ARBITRARY_AXIS_LIMIT && n.y.abs() < ARBITRARY_AXIS_LIMIT {
            Vec3::Y
        } else {
            Vec3::Z
        };
        let x = seed.cross(n).normalize()?;
        let y = n.cross(x).normalize()?;
        Some((x, y, n))
    }

    /// Maps world coordinates into the frame of a plane through the origin
    /// with the given normal.
    ///
    /// The plane's normal becomes the Z axis of the result, so projecting
    /// onto the plane is a matter of dropping Z.
    #[must_use]
    pub fn world_to_plane(normal: Vec3) -> Option<Self> {
        let (x, y, n) = Self::plane_axes(normal)?;
        Some(Self::from_basis_rows(x, y, n))
    }

    /// Inverse of [`Transform3::world_to_plane`].
    #[must_use]
    pub fn plane_to_world(normal: Vec3) -> Option<Self> {
        let (x, y, n) = Self::plane_axes(normal)?;
        // The basis is orthonormal, so the inverse is the transpose.
        Some(Self::from_basis_rows(
            Vec3::new(x.x, y.x, n.x),
            Vec3::new(x.y, y.y, n.y),
            Vec3::new(x.z, y.z, n.z),
        ))
    }

    /// World to display coordinates for a viewport looking along
    /// `view_direction` at `view_target`, twisted by `twist_angle` radians.
    ///
    /// Each point is first rotated by the twist about the view direction
    /// anchored at the target, then translated so that the target sits at the
    /// origin, then projected onto the view plane:
    /// `world_to_plane(dir) * translate(-target) * rotation_about(dir, twist, target)`.
    ///
    /// Returns `None` when the view direction has no length.
    #[must_use]
    pub fn world_to_dcs(view_direction: Vec3, view_target: Point3, twist_angle: f64) -> Option<Self> {
        let projection = Self::world_to_plane(view_direction)?;
        let translation = Self::translate(-view_target.to_vec3());
        let rotation = Self::rotation_about(view_direction, twist_angle, view_target)?;
        Some(projection * translation * rotation)
    }
}

impl Mul for Transform3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (&self.rows, &rhs.rows);
        let mut out = [[0.0; 4]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
            row[3] += a[i][3];
        }
        Self::from_rows(out)
    }
}

impl Mul<Point3> for Transform3 {
    type Output = Point3;

    fn mul(self, pt: Point3) -> Point3 {
        let r = &self.rows;
        Point3::new(
            r[0][0] * pt.x + r[0][1] * pt.y + r[0][2] * pt.z + r[0][3],
            r[1][0] * pt.x + r[1][1] * pt.y + r[1][2] * pt.z + r[1][3],
            r[2][0] * pt.x + r[2][1] * pt.y + r[2][2] * pt.z + r[2][3],
        )
    }
}

impl Mul<Vec3> for Transform3 {
    type Output = Vec3;

    /// Applies only the linear part; vectors are not translated.
    fn mul(self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }
}
