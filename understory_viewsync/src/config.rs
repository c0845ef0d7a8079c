// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronization settings.

use alloc::string::String;

use thiserror::Error;
use understory_viewfit::DEFAULT_DAMPING;

/// How the destination viewport follows its source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SyncStrategy {
    /// Copy the last model view's center and height.
    DirectCopy,
    /// Follow the model view's drift from its baseline, damped.
    OffsetAccumulated,
    /// Fit the marked region of interest into the viewport.
    #[default]
    ExtentsFit,
}

/// Settings for a [`Synchronizer`](crate::Synchronizer).
///
/// The defaults describe the drawing set this was first written for: a
/// layout named "36 Detention Pond Layout and Calculations" whose main
/// viewport tracks model space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SyncConfig {
    /// Name of the model layout. View changes are only tracked there.
    pub model_layout: String,
    /// Switching to any layout whose name contains this text triggers a sync.
    pub trigger_layout: String,
    /// Layout holding the viewport to update.
    pub target_layout: String,
    /// Viewport number of the paper-space overview, which is never a target.
    /// Only viewports numbered above it are considered.
    pub overview_viewport: i32,
    /// Synchronization strategy.
    pub strategy: SyncStrategy,
    /// Damping for [`SyncStrategy::OffsetAccumulated`].
    pub damping: f64,
    /// Registered application name used to tag the region of interest.
    pub region_app_name: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            model_layout: "Model".into(),
            trigger_layout: "Calculations".into(),
            target_layout: "36 Detention Pond Layout and Calculations".into(),
            overview_viewport: 1,
            strategy: SyncStrategy::default(),
            damping: DEFAULT_DAMPING,
            region_app_name: "TNP_SYNC_REGION".into(),
        }
    }
}

impl SyncConfig {
    /// Checks that names are non-empty and the damping is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("model_layout", &self.model_layout),
            ("trigger_layout", &self.trigger_layout),
            ("target_layout", &self.target_layout),
            ("region_app_name", &self.region_app_name),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyName(field));
            }
        }
        if !(self.damping.is_finite() && self.damping > 0.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

/// A [`SyncConfig`] that cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A layout or application name is empty.
    #[error("`{0}` must not be empty")]
    EmptyName(&'static str),
    /// Damping is not finite and positive.
    #[error("damping must be finite and positive, got {0}")]
    InvalidDamping(f64),
}
