// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-driven synchronization of a layout viewport.

use alloc::string::String;

use log::{debug, info, warn};
use understory_viewfit::{
    FitError, OffsetSession, ViewState, ViewportView, copy_view, fit_to_extents,
};

use crate::{
    CadDocument, EntityId, MissingTarget, RegionMarker, SyncConfig, SyncError, SyncStrategy,
    ViewportId, ViewportUpdate, find_region, is_region_candidate, resolve_target,
};

/// Why a notification did not lead to a viewport update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No model view has been recorded yet, so there is nothing to follow.
    NoBaseline,
    /// The view changed outside the model layout.
    NotModelLayout,
    /// The new layout is neither the model layout nor a trigger layout.
    UnrelatedLayout,
}

/// A viewport update that was written to the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedUpdate {
    /// The updated viewport.
    pub viewport: ViewportId,
    /// Its number within the target layout.
    pub number: i32,
    /// What was written.
    pub update: ViewportUpdate,
}

/// Result of handling a notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncOutcome {
    /// Nothing was done.
    Skipped(SkipReason),
    /// The model view was recorded as the new source or baseline.
    Recorded,
    /// The target viewport was updated.
    Applied(AppliedUpdate),
}

/// Keeps the configured layout viewport in step with the model view.
///
/// A synchronizer is one session for one document. Forward the host's
/// notifications to [`Synchronizer::on_view_changed`] and
/// [`Synchronizer::on_layout_switched`]; it reads what it needs through
/// [`CadDocument`] and writes the target viewport back the same way.
///
/// The three [`SyncStrategy`] variants behave as follows when a trigger
/// layout is entered:
/// - `DirectCopy` writes the last model view's center and height.
/// - `OffsetAccumulated` writes the last model view shifted by the damped
///   drift accumulated since the model layout was last entered.
/// - `ExtentsFit` fits the marked region of interest into the viewport.
#[derive(Clone, Debug)]
pub struct Synchronizer {
    config: SyncConfig,
    marker: RegionMarker,
    last_view: Option<ViewState>,
    session: OffsetSession,
}

impl Synchronizer {
    /// Creates a session for the given settings.
    pub fn new(config: SyncConfig) -> Result<Self, SyncError> {
        config.validate()?;
        let session = OffsetSession::with_damping(config.damping)?;
        let marker = RegionMarker::new(config.region_app_name.clone());
        Ok(Self {
            config,
            marker,
            last_view: None,
            session,
        })
    }

    /// The settings this session was created with.
    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// The marker used to find the region of interest.
    #[must_use]
    pub fn marker(&self) -> &RegionMarker {
        &self.marker
    }

    /// The last recorded model view.
    #[must_use]
    pub fn last_view(&self) -> Option<ViewState> {
        self.last_view
    }

    /// The damped-offset state used by [`SyncStrategy::OffsetAccumulated`].
    #[must_use]
    pub fn session(&self) -> &OffsetSession {
        &self.session
    }

    /// Forgets every recorded view, as if the session had just started.
    pub fn reset(&mut self) {
        self.last_view = None;
        self.session.reset();
    }

    fn has_baseline(&self) -> bool {
        match self.config.strategy {
            SyncStrategy::DirectCopy => self.last_view.is_some(),
            SyncStrategy::OffsetAccumulated => self.session.has_baseline(),
            SyncStrategy::ExtentsFit => true,
        }
    }

    /// Handles a change of the current view.
    ///
    /// Only changes in the model layout are recorded.
    pub fn on_view_changed<D: CadDocument + ?Sized>(&mut self, doc: &D) -> SyncOutcome {
        if doc.current_layout() != self.config.model_layout {
            return SyncOutcome::Skipped(SkipReason::NotModelLayout);
        }
        let view = doc.current_view();
        self.last_view = Some(view);
        if self.config.strategy == SyncStrategy::OffsetAccumulated {
            self.session.observe(view);
        }
        SyncOutcome::Recorded
    }

    /// Handles a switch to another layout.
    ///
    /// Entering the model layout re-records the baseline. Entering a layout
    /// whose name contains [`SyncConfig::trigger_layout`] updates the target
    /// viewport. Until the first model view has been recorded, strategies
    /// that follow the model view ignore every switch.
    ///
    /// On error the target viewport is left untouched.
    pub fn on_layout_switched<D: CadDocument + ?Sized>(
        &mut self,
        doc: &mut D,
    ) -> Result<SyncOutcome, SyncError> {
        if !self.has_baseline() {
            debug!("no model view recorded yet, ignoring layout switch");
            return Ok(SyncOutcome::Skipped(SkipReason::NoBaseline));
        }

        let layout = String::from(doc.current_layout());
        if layout == self.config.model_layout {
            let view = doc.current_view();
            self.last_view = Some(view);
            self.session.reenter_baseline(view);
            return Ok(SyncOutcome::Recorded);
        }
        if !layout.contains(self.config.trigger_layout.as_str()) {
            return Ok(SyncOutcome::Skipped(SkipReason::UnrelatedLayout));
        }

        info!("sync started for layout `{layout}`");
        let result = self.sync_target(doc);
        if let Err(err) = &result {
            warn!("sync failed: {err}");
        }
        info!("sync ended for layout `{layout}`");
        result
    }

    fn sync_target<D: CadDocument + ?Sized>(
        &self,
        doc: &mut D,
    ) -> Result<SyncOutcome, SyncError> {
        let layout = self.config.target_layout.as_str();
        let missing = |missing| SyncError::TargetNotFound {
            layout: layout.into(),
            missing,
        };
        let entries = doc
            .viewports(layout)
            .ok_or_else(|| missing(MissingTarget::Layout))?;
        let target = resolve_target(&entries, self.config.overview_viewport)
            .ok_or_else(|| missing(MissingTarget::Viewport))?;
        debug!(
            "[current] viewport {}: center {:?}, scale {}, view height {}",
            target.number,
            target.view.center,
            target.view.scale,
            target.view.view_height()
        );

        let update = match self.compute_update(doc, &target.view) {
            Err(SyncError::Fit(FitError::NoBaseline)) => {
                debug!("no baseline to offset from, nothing to update");
                return Ok(SyncOutcome::Skipped(SkipReason::NoBaseline));
            }
            result => result?,
        };
        doc.update_viewport(layout, target.id, update)?;

        let mut updated = target.view;
        update.apply_to(&mut updated);
        debug!(
            "[updated] viewport {}: center {:?}, scale {}, view height {}",
            target.number,
            updated.center,
            updated.scale,
            updated.view_height()
        );

        Ok(SyncOutcome::Applied(AppliedUpdate {
            viewport: target.id,
            number: target.number,
            update,
        }))
    }

    fn compute_update<D: CadDocument + ?Sized>(
        &self,
        doc: &D,
        view: &ViewportView,
    ) -> Result<ViewportUpdate, SyncError> {
        match self.config.strategy {
            SyncStrategy::DirectCopy => {
                let source = self.last_view.ok_or(FitError::NoBaseline)?;
                source.validate()?;
                let copied = copy_view(&source);
                Ok(ViewportUpdate::CenterHeight {
                    center: copied.center,
                    height: copied.height,
                })
            }
            SyncStrategy::OffsetAccumulated => {
                let source = self
                    .session
                    .last_snapshot()
                    .ok_or(FitError::NoBaseline)?;
                let target = self.session.synchronize(&source)?;
                Ok(ViewportUpdate::CenterHeight {
                    center: target.center,
                    height: target.height,
                })
            }
            SyncStrategy::ExtentsFit => {
                let region = find_region(&doc.polylines(), &self.marker).ok_or_else(|| {
                    SyncError::RegionNotFound {
                        app_name: self.marker.app_name().into(),
                    }
                })?;
                let fit = fit_to_extents(&region, view)?;
                Ok(ViewportUpdate::CenterScale {
                    center: fit.center,
                    scale: fit.scale,
                })
            }
        }
    }

    /// Tags `entity` as the region of interest used by
    /// [`SyncStrategy::ExtentsFit`].
    ///
    /// The marker's application name is registered first so the tag
    /// persists. Once the new tag is written, any other polyline carrying the
    /// marker loses it, so at most one region is marked at a time. If writing
    /// the new tag fails, the previous region keeps its marker.
    ///
    /// Returns [`SyncError::NotARegion`] if `entity` is not a closed polyline
    /// with vertices.
    pub fn mark_region<D: CadDocument + ?Sized>(
        &self,
        doc: &mut D,
        entity: EntityId,
    ) -> Result<(), SyncError> {
        let polylines = doc.polylines();
        let candidate = polylines
            .iter()
            .find(|p| p.id == entity)
            .filter(|p| is_region_candidate(p));
        if candidate.is_none() {
            return Err(SyncError::NotARegion(entity));
        }

        let app_name = self.marker.app_name();
        doc.register_app(app_name);
        doc.set_xdata(entity, self.marker.encode())?;
        for stale in polylines
            .iter()
            .filter(|p| p.id != entity && self.marker.matches(&p.xdata))
        {
            debug!("removing region marker from {:?}", stale.id);
            doc.remove_xdata(stale.id, app_name)?;
        }
        info!("marked {entity:?} as the region of interest");
        Ok(())
    }
}
