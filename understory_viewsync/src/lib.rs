// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory View Sync: keep a CAD layout viewport following the model view.
//!
//! This crate is the host-facing half of [`understory_viewfit`]. It decides
//! *when* and *where* to synchronize; the geometry lives in the fit crate.
//!
//! - [`CadDocument`] is the narrow view of the host document the
//!   synchronizer needs: the active layout and view, the viewports of a
//!   layout, polylines with their extended data, and a way to write back.
//! - [`Synchronizer`] receives the host's "view changed" and "layout
//!   switched" notifications and updates the target viewport according to
//!   the configured [`SyncStrategy`].
//! - [`resolve_target`] picks the viewport to update: the first one that is
//!   not the overview and not erased.
//! - [`RegionMarker`] tags a closed polyline as the region of interest with
//!   an application-specific XData group, and finds it again.
//!
//! ## Wiring
//!
//! ```rust,ignore
//! let mut sync = Synchronizer::new(SyncConfig::default())?;
//!
//! // In the host's view-changed handler:
//! sync.on_view_changed(&doc);
//!
//! // In the host's layout-switched handler, with the document locked:
//! match sync.on_layout_switched(&mut doc) {
//!     Ok(outcome) => log::debug!("{outcome:?}"),
//!     Err(err) => report_to_user(&err),
//! }
//! ```
//!
//! Nothing here is fatal to the host: errors describe a single failed
//! synchronization and the session keeps running. Progress is reported
//! through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod document;
mod error;
mod region;
mod sync;
mod target;
mod xdata;

pub use config::{ConfigError, SyncConfig, SyncStrategy};
pub use document::{
    CadDocument, EntityId, PolylineEntity, ViewportEntry, ViewportId, ViewportUpdate,
};
pub use error::{MissingTarget, SyncError};
pub use region::{find_region, is_region_candidate};
pub use sync::{AppliedUpdate, SkipReason, SyncOutcome, Synchronizer};
pub use target::resolve_target;
pub use xdata::{
    REGION_FLAG, RegionMarker, XDataValue, app_group, app_groups, remove_app_group,
    replace_app_group,
};
