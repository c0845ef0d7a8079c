// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extended entity data (XData) and the region-of-interest marker.
//!
//! XData is a flat list of typed records. Records are grouped by
//! application: each group starts with an [`XDataValue::AppName`] record and
//! runs until the next one. Application names must be registered with the
//! document before data is attached under them, otherwise the data does not
//! survive a save/load round-trip.

use alloc::string::String;
use alloc::vec::Vec;

/// A single XData record.
#[derive(Clone, Debug, PartialEq)]
pub enum XDataValue {
    /// Starts the group for a registered application (group code 1001).
    AppName(String),
    /// Text (group code 1000).
    Text(String),
    /// Real number (group code 1040).
    Real(f64),
    /// 16-bit integer (group code 1070).
    Int16(i16),
    /// 32-bit integer (group code 1071).
    Int32(i32),
}

impl XDataValue {
    /// The DXF group code for this record type.
    #[must_use]
    pub fn group_code(&self) -> i16 {
        match self {
            Self::AppName(_) => 1001,
            Self::Text(_) => 1000,
            Self::Real(_) => 1040,
            Self::Int16(_) => 1070,
            Self::Int32(_) => 1071,
        }
    }
}

/// Splits `xdata` into `(application, records)` groups.
///
/// Records before the first [`XDataValue::AppName`] belong to no application
/// and are skipped.
pub fn app_groups(xdata: &[XDataValue]) -> impl Iterator<Item = (&str, &[XDataValue])> + '_ {
    let starts: Vec<usize> = xdata
        .iter()
        .enumerate()
        .filter_map(|(i, v)| matches!(v, XDataValue::AppName(_)).then_some(i))
        .collect();
    let ends: Vec<usize> = starts.iter().skip(1).copied().chain([xdata.len()]).collect();
    starts.into_iter().zip(ends).filter_map(move |(start, end)| match &xdata[start] {
        XDataValue::AppName(name) => Some((name.as_str(), &xdata[start + 1..end])),
        _ => None,
    })
}

/// Returns the records registered under `app_name`, if present.
///
/// Application names compare case-insensitively, as registered application
/// names do in CAD documents.
#[must_use]
pub fn app_group<'a>(xdata: &'a [XDataValue], app_name: &str) -> Option<&'a [XDataValue]> {
    app_groups(xdata)
        .find(|(name, _)| name.eq_ignore_ascii_case(app_name))
        .map(|(_, records)| records)
}

/// Returns `existing` with the group for `app_name` removed.
#[must_use]
pub fn remove_app_group(existing: &[XDataValue], app_name: &str) -> Vec<XDataValue> {
    let mut out = Vec::with_capacity(existing.len());
    for (name, records) in app_groups(existing) {
        if name.eq_ignore_ascii_case(app_name) {
            continue;
        }
        out.push(XDataValue::AppName(name.into()));
        out.extend_from_slice(records);
    }
    out
}

/// Replaces the group for the application named by `group`'s leading
/// [`XDataValue::AppName`] record, keeping every other application's data.
///
/// If `group` does not start with an application name, `existing` is
/// returned unchanged.
#[must_use]
pub fn replace_app_group(existing: &[XDataValue], group: &[XDataValue]) -> Vec<XDataValue> {
    let Some(XDataValue::AppName(app_name)) = group.first() else {
        return existing.to_vec();
    };
    let mut out = remove_app_group(existing, app_name);
    out.extend_from_slice(group);
    out
}

/// Flag value stored in the marker group.
pub const REGION_FLAG: i16 = 1;

/// Tags an entity as the user's region of interest.
///
/// The marker is the group `[AppName(app_name), Int16(1)]`. Only that exact
/// group marks a region: other applications' data, a different flag value, or
/// extra records under the same application do not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMarker {
    app_name: String,
}

impl RegionMarker {
    /// Creates a marker for the given registered application name.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// The application name the marker is stored under.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The XData group that marks a region.
    #[must_use]
    pub fn encode(&self) -> Vec<XDataValue> {
        alloc::vec![
            XDataValue::AppName(self.app_name.clone()),
            XDataValue::Int16(REGION_FLAG),
        ]
    }

    /// Returns `true` if `xdata` carries this marker.
    #[must_use]
    pub fn matches(&self, xdata: &[XDataValue]) -> bool {
        app_group(xdata, &self.app_name).is_some_and(|g| g == [XDataValue::Int16(REGION_FLAG)])
    }
}
