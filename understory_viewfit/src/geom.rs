// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 3D points, vectors and axis-aligned extents.
//!
//! Kurbo only covers the plane, so the handful of 3D types needed to project a
//! world-space box into a viewport live here. They are deliberately minimal:
//! just enough arithmetic for [`Transform3`](crate::Transform3) and
//! [`fit_to_extents`](crate::fit_to_extents).

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::Transform3;

/// A point in 3D world (or display) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// The origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the vector from the origin to this point.
    #[must_use]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Drops the Z coordinate.
    #[must_use]
    pub const fn to_point2(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(
            0.5 * (self.x + other.x),
            0.5 * (self.y + other.y),
            0.5 * (self.z + other.z),
        )
    }

    /// Returns `true` if all coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;

    fn add(self, rhs: Vec3) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Self;

    fn sub(self, rhs: Vec3) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// A displacement or direction in 3D.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z axis; also the view direction of a plain top-down view.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns a unit vector in the same direction.
    ///
    /// Returns `None` for zero-length or non-finite vectors, which have no
    /// meaningful direction.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 && len.is_finite() {
            Some(self * (1.0 / len))
        } else {
            None
        }
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Axis-aligned 3D bounding box.
///
/// Extents are built incrementally: start from [`Extents3::EMPTY`] and fold
/// points in with [`Extents3::add_point`] (or collect an iterator of
/// [`Point3`]). An empty extents box contains nothing; adding the first point
/// collapses it onto that point, and every later point grows it componentwise.
///
/// Once non-empty, `min <= max` holds on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents3 {
    min: Point3,
    max: Point3,
}

impl Default for Extents3 {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Extents3 {
    /// Extents that contain no points.
    pub const EMPTY: Self = Self {
        min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
        max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    /// Creates extents spanning two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        let mut ext = Self::from_point(a);
        ext.add_point(b);
        ext
    }

    /// Creates zero-size extents at a single point.
    #[must_use]
    pub const fn from_point(pt: Point3) -> Self {
        Self { min: pt, max: pt }
    }

    /// Minimum corner. Meaningless for empty extents.
    #[must_use]
    pub const fn min(&self) -> Point3 {
        self.min
    }

    /// Maximum corner. Meaningless for empty extents.
    #[must_use]
    pub const fn max(&self) -> Point3 {
        self.max
    }

    /// Returns `true` if no point has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Returns `true` if both corners are finite.
    ///
    /// Empty extents are never finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Grows the extents to include `pt`.
    pub fn add_point(&mut self, pt: Point3) {
        self.min = Point3::new(
            self.min.x.min(pt.x),
            self.min.y.min(pt.y),
            self.min.z.min(pt.z),
        );
        self.max = Point3::new(
            self.max.x.max(pt.x),
            self.max.y.max(pt.y),
            self.max.z.max(pt.z),
        );
    }

    /// Returns the smallest extents containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if other.is_empty() {
            return *self;
        }
        let mut out = *self;
        out.add_point(other.min);
        out.add_point(other.max);
        out
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.min.midpoint(self.max)
    }

    /// The eight corners of the box.
    ///
    /// Bottom face (`min.z`) first, counter-clockwise from `min`, then the top
    /// face in the same order.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Transforms all eight corners and returns their bounding box.
    ///
    /// The result is axis-aligned in the target space and may be larger than
    /// the tightest box around the transformed geometry when `transform`
    /// rotates. Empty extents stay empty.
    #[must_use]
    pub fn transformed(&self, transform: &Transform3) -> Self {
        if self.is_empty() {
            return Self::EMPTY;
        }
        self.corners().into_iter().map(|c| *transform * c).collect()
    }
}

impl Extend<Point3> for Extents3 {
    fn extend<I: IntoIterator<Item = Point3>>(&mut self, iter: I) {
        for pt in iter {
            self.add_point(pt);
        }
    }
}

impl FromIterator<Point3> for Extents3 {
    fn from_iter<I: IntoIterator<Item = Point3>>(iter: I) -> Self {
        let mut ext = Self::EMPTY;
        ext.extend(iter);
        ext
    }
}
