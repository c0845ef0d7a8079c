// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use thiserror::Error;
use understory_viewfit::FitError;

use crate::ConfigError;

/// What part of the synchronization target could not be found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingTarget {
    /// The configured target layout does not exist.
    Layout,
    /// The layout exists but holds no eligible viewport.
    Viewport,
}

impl fmt::Display for MissingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout => f.write_str("layout"),
            Self::Viewport => f.write_str("eligible viewport"),
        }
    }
}

/// Errors reported by a [`Synchronizer`](crate::Synchronizer).
///
/// None of these are fatal: the host should report them to the user and keep
/// the session running. The target viewport is never modified when one is
/// returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SyncError {
    /// The target layout or an eligible viewport in it is missing.
    #[error("{missing} not found for layout `{layout}`")]
    TargetNotFound {
        /// Name of the configured target layout.
        layout: String,
        /// What was missing.
        missing: MissingTarget,
    },
    /// No closed polyline carries the region marker.
    #[error("no region of interest tagged with `{app_name}`")]
    RegionNotFound {
        /// Application name of the marker that was searched for.
        app_name: String,
    },
    /// The entity to tag does not exist or is not a closed polyline.
    #[error("entity {0:?} cannot be marked as a region")]
    NotARegion(crate::EntityId),
    /// The fit could not be computed.
    #[error(transparent)]
    Fit(#[from] FitError),
    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The host document rejected an operation.
    #[error("host error: {0}")]
    Host(String),
}
