// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, AddAssign, Div, Sub};

use kurbo::{Point, Vec2};

use crate::{FitError, Point3, Transform3, Vec3};

/// Snapshot of a source view at a point in time.
///
/// This is what a host reads from the user's current model-space view: where
/// it is centered and how much world space it shows. Snapshots are plain
/// values; keep one around as a "last known" baseline if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// View center in world units.
    pub center: Point,
    /// Visible width in world units.
    pub width: f64,
    /// Visible height in world units.
    pub height: f64,
}

impl ViewState {
    /// Creates a new snapshot.
    #[must_use]
    pub const fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Checks that the view can be shown: a finite center and a positive,
    /// finite width and height.
    pub fn validate(&self) -> Result<(), FitError> {
        let sized = self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0;
        if sized && self.center.is_finite() {
            Ok(())
        } else {
            Err(FitError::InvalidView)
        }
    }
}

impl Sub for ViewState {
    type Output = ViewOffset;

    fn sub(self, rhs: Self) -> ViewOffset {
        ViewOffset {
            center: self.center - rhs.center,
            width: self.width - rhs.width,
            height: self.height - rhs.height,
        }
    }
}

impl Add<ViewOffset> for ViewState {
    type Output = Self;

    fn add(self, rhs: ViewOffset) -> Self {
        Self {
            center: self.center + rhs.center,
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

/// Componentwise difference between two [`ViewState`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewOffset {
    /// Center displacement.
    pub center: Vec2,
    /// Width change.
    pub width: f64,
    /// Height change.
    pub height: f64,
}

impl ViewOffset {
    /// No change.
    pub const ZERO: Self = Self {
        center: Vec2::ZERO,
        width: 0.0,
        height: 0.0,
    };

    /// Returns `true` if every component is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Add for ViewOffset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            center: self.center + rhs.center,
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

impl AddAssign for ViewOffset {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Div<f64> for ViewOffset {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            center: self.center / rhs,
            width: self.width / rhs,
            height: self.height / rhs,
        }
    }
}

/// Copies a source view onto a target unchanged.
///
/// The host is expected to write only `center` and `height` into the target
/// viewport; its width follows from the viewport's own aspect ratio.
#[must_use]
pub fn copy_view(source: &ViewState) -> ViewState {
    *source
}

/// Geometry and orientation of a destination viewport.
///
/// `width` and `height` are the viewport's size on the sheet (paper units).
/// `center` is the view center in display coordinates and `scale` the ratio
/// of paper units to model units, so the viewport shows `height / scale`
/// model units vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportView {
    /// View center in display coordinates.
    pub center: Point,
    /// Paper units per model unit.
    pub scale: f64,
    /// Viewport width in paper units.
    pub width: f64,
    /// Viewport height in paper units.
    pub height: f64,
    /// Direction from the target towards the viewer.
    pub view_direction: Vec3,
    /// Point the view looks at.
    pub view_target: Point3,
    /// Twist around the view direction, in radians.
    pub twist_angle: f64,
}

impl ViewportView {
    /// A plain top-down viewport of the given paper size: looking down world
    /// Z at the origin, no twist, unit scale.
    #[must_use]
    pub const fn top_down(width: f64, height: f64) -> Self {
        Self {
            center: Point::ORIGIN,
            scale: 1.0,
            width,
            height,
            view_direction: Vec3::Z,
            view_target: Point3::ORIGIN,
            twist_angle: 0.0,
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Model-space height currently visible through the viewport.
    #[must_use]
    pub fn view_height(&self) -> f64 {
        self.height / self.scale
    }

    /// Checks that the viewport has a usable size and orientation.
    pub fn validate(&self) -> Result<(), FitError> {
        let sized = |v: f64| v.is_finite() && v > 0.0;
        if !sized(self.width) || !sized(self.height) {
            return Err(FitError::InvalidViewport);
        }
        if !self.twist_angle.is_finite() || !self.view_target.is_finite() {
            return Err(FitError::InvalidViewport);
        }
        Ok(())
    }

    /// The world-to-display transform for this viewport's orientation.
    ///
    /// See [`Transform3::world_to_dcs`].
    pub fn dcs_transform(&self) -> Result<Transform3, FitError> {
        Transform3::world_to_dcs(self.view_direction, self.view_target, self.twist_angle)
            .ok_or(FitError::InvalidViewport)
    }
}
