// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host document as seen by the synchronizer.

use alloc::vec::Vec;

use kurbo::Point;
use understory_viewfit::{Point3, ViewState, ViewportView};

use crate::{SyncError, XDataValue};

/// Host handle for a viewport entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewportId(pub u64);

/// Host handle for a drawing entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// A viewport found in a layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportEntry {
    /// Host handle.
    pub id: ViewportId,
    /// Viewport number within its layout. Number 1 is conventionally the
    /// paper-space overview.
    pub number: i32,
    /// Whether the viewport has been erased.
    pub erased: bool,
    /// Current geometry and orientation.
    pub view: ViewportView,
}

/// A polyline entity and its extended data.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylineEntity {
    /// Host handle.
    pub id: EntityId,
    /// Vertices in world coordinates.
    pub vertices: Vec<Point3>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
    /// Attached extended data.
    pub xdata: Vec<XDataValue>,
}

/// A change to write into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportUpdate {
    /// Set the view center and the visible model height; the width follows
    /// from the viewport's aspect ratio.
    CenterHeight {
        /// View center.
        center: Point,
        /// Visible model height.
        height: f64,
    },
    /// Set the view center (in display coordinates) and the custom scale.
    CenterScale {
        /// View center.
        center: Point,
        /// Paper units per model unit.
        scale: f64,
    },
}

impl ViewportUpdate {
    /// The new view center.
    #[must_use]
    pub fn center(&self) -> Point {
        match *self {
            Self::CenterHeight { center, .. } | Self::CenterScale { center, .. } => center,
        }
    }

    /// Applies the update to a viewport view.
    ///
    /// A height update is converted into the equivalent scale.
    pub fn apply_to(&self, view: &mut ViewportView) {
        match *self {
            Self::CenterHeight { center, height } => {
                view.center = center;
                view.scale = view.height / height;
            }
            Self::CenterScale { center, scale } => {
                view.center = center;
                view.scale = scale;
            }
        }
    }
}

/// Everything the synchronizer needs from a CAD document.
///
/// Hosts implement this over their document model and forward their
/// "view changed" and "layout switched" notifications to
/// [`Synchronizer::on_view_changed`](crate::Synchronizer::on_view_changed)
/// and [`Synchronizer::on_layout_switched`](crate::Synchronizer::on_layout_switched).
///
/// Mutating methods take `&mut self`: the host must hold the document's
/// exclusive lock for as long as that borrow lives.
pub trait CadDocument {
    /// Name of the active layout.
    fn current_layout(&self) -> &str;

    /// The view currently shown in the active layout.
    fn current_view(&self) -> ViewState;

    /// Viewports in `layout`, in the document's storage order, or `None` if
    /// there is no such layout.
    fn viewports(&self, layout: &str) -> Option<Vec<ViewportEntry>>;

    /// Writes `update` into a viewport of `layout`.
    fn update_viewport(
        &mut self,
        layout: &str,
        id: ViewportId,
        update: ViewportUpdate,
    ) -> Result<(), SyncError>;

    /// Polylines in model space.
    fn polylines(&self) -> Vec<PolylineEntity>;

    /// Registers an application name so data stored under it persists.
    /// Registering an existing name is a no-op.
    fn register_app(&mut self, app_name: &str);

    /// Replaces the XData group of the application named by `group`'s
    /// leading record on `entity`, keeping other applications' data.
    fn set_xdata(&mut self, entity: EntityId, group: Vec<XDataValue>) -> Result<(), SyncError>;

    /// Removes the XData group for `app_name` from `entity`.
    fn remove_xdata(&mut self, entity: EntityId, app_name: &str) -> Result<(), SyncError>;
}
