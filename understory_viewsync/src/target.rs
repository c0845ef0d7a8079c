// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ViewportEntry;

/// Picks the viewport to synchronize within a layout.
///
/// Returns the first viewport, in storage order, that is numbered above
/// `overview` and has not been erased. The overview viewport (conventionally
/// number 1) shows the sheet itself and is never a target.
#[must_use]
pub fn resolve_target(entries: &[ViewportEntry], overview: i32) -> Option<&ViewportEntry> {
    entries.iter().find(|vp| vp.number > overview && !vp.erased)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use understory_viewfit::ViewportView;

    use super::resolve_target;
    use crate::{ViewportEntry, ViewportId};

    fn entry(id: u64, number: i32, erased: bool) -> ViewportEntry {
        ViewportEntry {
            id: ViewportId(id),
            number,
            erased,
            view: ViewportView::top_down(100.0, 100.0),
        }
    }

    #[test]
    fn skips_overview_and_erased() {
        let entries = [
            entry(10, 1, false),
            entry(11, 2, true),
            entry(12, 3, false),
            entry(13, 2, false),
        ];
        assert_eq!(
            resolve_target(&entries, 1).map(|e| e.id),
            Some(ViewportId(12))
        );
    }

    #[test]
    fn storage_order_wins_over_number() {
        let entries = [entry(1, 5, false), entry(2, 2, false)];
        assert_eq!(
            resolve_target(&entries, 1).map(|e| e.id),
            Some(ViewportId(1))
        );
    }

    #[test]
    fn nothing_eligible() {
        assert!(resolve_target(&[], 1).is_none());
        let entries: Vec<_> = [entry(1, 1, false), entry(2, 0, false), entry(3, 4, true)].into();
        assert!(resolve_target(&entries, 1).is_none());
    }
}
