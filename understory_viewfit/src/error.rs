// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors produced by the fitting and synchronization helpers.
///
/// All of these are pure computation failures: nothing has been written
/// anywhere when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum FitError {
    /// The extents are empty, non-finite, or have no width or height once
    /// projected into the viewport, so no scale is well-defined.
    #[error("extents have no area in display space")]
    InvalidExtents,
    /// The destination viewport has a zero, negative, or non-finite size, or
    /// no usable orientation.
    #[error("viewport has no usable size or orientation")]
    InvalidViewport,
    /// A source or synchronized view has a zero, negative, or non-finite
    /// size, or a non-finite center. Writing it would collapse or mirror the
    /// target viewport.
    #[error("view has no positive finite size")]
    InvalidView,
    /// No baseline snapshot has been recorded yet.
    ///
    /// This is a legitimate state before the first observation and is
    /// normally handled as a no-op.
    #[error("no baseline view has been recorded")]
    NoBaseline,
    /// The damping constant is not finite and positive.
    #[error("damping must be finite and positive, got {0}")]
    InvalidDamping(f64),
}
