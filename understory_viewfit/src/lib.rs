// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View Fit: keep a destination viewport in step with a source view.
//!
//! This crate contains the geometry behind synchronizing a CAD layout
//! viewport with another view. It is headless and stateless apart from an
//! explicitly owned [`OffsetSession`]; reading views and writing viewports is
//! left to the host. Three strategies are provided:
//!
//! - **Direct copy** ([`copy_view`]): the destination adopts the source's
//!   center and height.
//! - **Damped offset** ([`OffsetSession`]): the destination follows how far
//!   the source has drifted from a baseline, at a fraction of the rate.
//! - **Extents fit** ([`fit_to_extents`]): the destination is centered and
//!   scaled so a 3D axis-aligned box fills it, as seen along the viewport's
//!   view direction and twist.
//!
//! ## Fitting a region
//!
//! ```rust
//! use kurbo::Point;
//! use understory_viewfit::{Extents3, Point3, ViewportView, fit_to_extents};
//!
//! // A 200x80 sheet viewport looking straight down.
//! let mut viewport = ViewportView::top_down(200.0, 80.0);
//!
//! // Region of interest, 100 wide and 50 tall.
//! let region: Extents3 = [Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 50.0, 0.0)]
//!     .into_iter()
//!     .collect();
//!
//! let fit = fit_to_extents(&region, &viewport).unwrap();
//! fit.apply_to(&mut viewport);
//!
//! // Relatively taller than the viewport, so height binds: 80 / 50.
//! assert_eq!(viewport.scale, 1.6);
//! assert_eq!(viewport.center, Point::new(50.0, 25.0));
//! ```
//!
//! ## Display coordinates
//!
//! Viewport centers are expressed in the viewport's display coordinate
//! system (DCS). [`Transform3::world_to_dcs`] builds the world-to-DCS mapping
//! from a view direction, view target, and twist angle; the DCS origin is the
//! view target.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod fit;
mod geom;
mod offset;
mod transform;
mod view;

pub use error::FitError;
pub use fit::{FitResult, fit_to_extents, fit_to_points};
pub use geom::{Extents3, Point3, Vec3};
pub use offset::{DEFAULT_DAMPING, OffsetSession, SyncPhase};
pub use transform::Transform3;
pub use view::{ViewOffset, ViewState, ViewportView, copy_view};
