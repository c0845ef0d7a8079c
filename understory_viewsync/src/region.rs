// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_viewfit::Extents3;

use crate::{PolylineEntity, RegionMarker};

/// Returns `true` if `polyline` can serve as a region of interest: closed and
/// with at least one vertex.
#[must_use]
pub fn is_region_candidate(polyline: &PolylineEntity) -> bool {
    polyline.closed && !polyline.vertices.is_empty()
}

/// Finds the marked region of interest and returns its extents.
///
/// The first closed polyline carrying `marker` wins. Open polylines are
/// ignored even when tagged.
#[must_use]
pub fn find_region(polylines: &[PolylineEntity], marker: &RegionMarker) -> Option<Extents3> {
    polylines
        .iter()
        .find(|p| is_region_candidate(p) && marker.matches(&p.xdata))
        .map(|p| p.vertices.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use understory_viewfit::Point3;

    use super::find_region;
    use crate::{EntityId, PolylineEntity, RegionMarker, XDataValue};

    fn square(
        id: u64,
        origin: f64,
        size: f64,
        closed: bool,
        xdata: Vec<XDataValue>,
    ) -> PolylineEntity {
        PolylineEntity {
            id: EntityId(id),
            vertices: vec![
                Point3::new(origin, origin, 0.0),
                Point3::new(origin + size, origin, 0.0),
                Point3::new(origin + size, origin + size, 0.0),
                Point3::new(origin, origin + size, 0.0),
            ],
            closed,
            xdata,
        }
    }

    #[test]
    fn finds_first_closed_tagged_polyline() {
        let marker = RegionMarker::new("REGION");
        let polylines = [
            square(1, 0.0, 10.0, true, vec![]),
            square(2, 100.0, 10.0, false, marker.encode()),
            square(3, 50.0, 20.0, true, marker.encode()),
            square(4, 500.0, 1.0, true, marker.encode()),
        ];
        let ext = find_region(&polylines, &marker).unwrap();
        assert_eq!(ext.min(), Point3::new(50.0, 50.0, 0.0));
        assert_eq!(ext.max(), Point3::new(70.0, 70.0, 0.0));
    }

    #[test]
    fn other_applications_are_ignored() {
        let marker = RegionMarker::new("REGION");
        let other = RegionMarker::new("SOMEONE_ELSE");
        let polylines = [square(1, 0.0, 10.0, true, other.encode())];
        assert!(find_region(&polylines, &marker).is_none());
        assert!(find_region(&[], &marker).is_none());
    }
}
