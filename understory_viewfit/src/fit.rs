// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::{Extents3, FitError, Point3, ViewportView};

/// Display-space spans at or below this fraction of the extents' magnitude
/// count as zero. Rotations by exact quarter turns leave rounding residue of
/// about `1e-16` relative, which must not turn a flat region into a valid one.
const DEGENERATE_SPAN: f64 = 1e-12;

/// Center and scale that make a viewport show a given region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// View center in the viewport's display coordinates.
    pub center: Point,
    /// Paper units per model unit.
    pub scale: f64,
}

impl FitResult {
    /// Writes the fitted center and scale into `viewport`.
    pub fn apply_to(&self, viewport: &mut ViewportView) {
        viewport.center = self.center;
        viewport.scale = self.scale;
    }
}

/// Computes the center and scale that make `viewport` display exactly
/// `extents`, as seen along the viewport's view direction and twist.
///
/// The eight corners of `extents` are mapped into the viewport's display
/// coordinates (see [`crate::Transform3::world_to_dcs`]) and re-boxed. The box
/// is centered, and the scale is chosen on whichever axis binds: if the
/// projected box is relatively taller than the viewport it is fit by height,
/// otherwise by width. The whole box is therefore visible with no clipping.
///
/// # Errors
///
/// - [`FitError::InvalidViewport`] if the viewport has no positive finite size
///   or its view direction has no length.
/// - [`FitError::InvalidExtents`] if `extents` are empty or non-finite, have
///   zero width or height in display space, or are so small that the scale
///   would overflow.
///
/// ```rust
/// use kurbo::Point;
/// use understory_viewfit::{Extents3, Point3, ViewportView, fit_to_extents};
///
/// let extents = Extents3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 50.0, 0.0));
/// let viewport = ViewportView::top_down(200.0, 80.0);
///
/// let fit = fit_to_extents(&extents, &viewport).unwrap();
/// assert_eq!(fit.center, Point::new(50.0, 25.0));
/// assert_eq!(fit.scale, 1.6);
/// ```
pub fn fit_to_extents(extents: &Extents3, viewport: &ViewportView) -> Result<FitResult, FitError> {
    viewport.validate()?;
    let to_dcs = viewport.dcs_transform()?;
    if extents.is_empty() || !extents.is_finite() {
        return Err(FitError::InvalidExtents);
    }

    let dcs_extents = extents.transformed(&to_dcs);
    let ext_width = dcs_extents.width();
    let ext_height = dcs_extents.height();
    let (lo, hi) = (dcs_extents.min(), dcs_extents.max());
    let magnitude = [lo.x, lo.y, hi.x, hi.y]
        .into_iter()
        .fold(1.0_f64, |m, v| m.max(v.abs()));
    let min_span = DEGENERATE_SPAN * magnitude;
    // Written to also reject NaN.
    if !(ext_width > min_span && ext_height > min_span) {
        return Err(FitError::InvalidExtents);
    }

    let dcs_center = dcs_extents.center();
    let vp_ratio = viewport.aspect_ratio();
    let scale = if ext_width / ext_height < vp_ratio {
        viewport.height / ext_height
    } else {
        viewport.width / ext_width
    };
    if !scale.is_finite() {
        return Err(FitError::InvalidExtents);
    }

    Ok(FitResult {
        center: dcs_center.to_point2(),
        scale,
    })
}

/// Folds `points` into extents and fits `viewport` to them.
///
/// Convenient for regions described by their vertices, such as a closed
/// outline. See [`fit_to_extents`] for the errors.
pub fn fit_to_points<I>(points: I, viewport: &ViewportView) -> Result<FitResult, FitError>
where
    I: IntoIterator<Item = Point3>,
{
    let extents: Extents3 = points.into_iter().collect();
    fit_to_extents(&extents, viewport)
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use kurbo::Point;

    use super::{FitResult, fit_to_extents, fit_to_points};
    use crate::{Extents3, FitError, Point3, Vec3, ViewportView};

    fn extents(min: (f64, f64, f64), max: (f64, f64, f64)) -> Extents3 {
        Extents3::new(min.into(), max.into())
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "{a} != {b}");
    }

    #[test]
    fn height_bound_scenario() {
        let ext = extents((0.0, 0.0, 0.0), (100.0, 50.0, 0.0));
        let vp = ViewportView::top_down(200.0, 80.0);
        let fit = fit_to_extents(&ext, &vp).unwrap();
        assert_eq!(fit.scale, 1.6);
        assert_eq!(fit.center, Point::new(50.0, 25.0));
    }

    #[test]
    fn relatively_narrow_extents_bind_on_height() {
        // Viewport ratio 2.0, extents ratio 1.5.
        let ext = extents((0.0, 0.0, 0.0), (60.0, 40.0, 0.0));
        let vp = ViewportView::top_down(200.0, 100.0);
        let fit = fit_to_extents(&ext, &vp).unwrap();
        assert_eq!(fit.scale, 100.0 / 40.0);
        assert_ne!(fit.scale, 200.0 / 60.0);
    }

    #[test]
    fn relatively_wide_extents_bind_on_width() {
        let ext = extents((0.0, 0.0, 0.0), (100.0, 20.0, 0.0));
        let vp = ViewportView::top_down(200.0, 80.0);
        let fit = fit_to_extents(&ext, &vp).unwrap();
        assert_eq!(fit.scale, 2.0);
        assert_eq!(fit.center, Point::new(50.0, 10.0));
    }

    #[test]
    fn top_down_fit_centers_on_extents() {
        let cases = [
            ((-12.5, 3.0, 0.0), (87.5, 40.0, 9.0), (297.0, 210.0)),
            ((1000.0, 2000.0, -5.0), (1003.0, 2011.0, 5.0), (420.0, 297.0)),
            ((-1e5, -2e5, 0.0), (3e5, 1e5, 0.0), (10.0, 30.0)),
        ];
        for (min, max, (w, h)) in cases {
            let ext = extents(min, max);
            let vp = ViewportView::top_down(w, h);
            let fit = fit_to_extents(&ext, &vp).unwrap();

            let expected = Point::new(min.0, min.1).midpoint(Point::new(max.0, max.1));
            assert_eq!(fit.center, expected);

            let (ew, eh) = (ext.width(), ext.height());
            if ew / eh < vp.aspect_ratio() {
                assert_close(fit.scale * eh, h);
                assert!(fit.scale * ew <= w * (1.0 + 1e-9));
            } else {
                assert_close(fit.scale * ew, w);
                assert!(fit.scale * eh <= h * (1.0 + 1e-9));
            }
        }
    }

    #[test]
    fn center_is_relative_to_view_target() {
        let ext = extents((0.0, 0.0, 0.0), (100.0, 50.0, 0.0));
        let mut vp = ViewportView::top_down(200.0, 80.0);
        vp.view_target = Point3::new(50.0, 25.0, 0.0);
        let fit = fit_to_extents(&ext, &vp).unwrap();
        assert_eq!(fit.center, Point::ORIGIN);
        assert_eq!(fit.scale, 1.6);
    }

    #[test]
    fn side_view_projects_onto_y_and_z() {
        let ext = extents((0.0, 0.0, 0.0), (10.0, 40.0, 20.0));
        let mut vp = ViewportView::top_down(100.0, 100.0);
        vp.view_direction = Vec3::X;
        let fit = fit_to_extents(&ext, &vp).unwrap();
        assert_close(fit.scale, 2.5);
        assert_close(fit.center.x, 20.0);
        assert_close(fit.center.y, 10.0);
    }

    #[test]
    fn twist_rotates_display_space() {
        let ext = extents((0.0, 0.0, 0.0), (100.0, 50.0, 0.0));
        let mut vp = ViewportView::top_down(200.0, 80.0);
        vp.twist_angle = FRAC_PI_2;
        let fit = fit_to_extents(&ext, &vp).unwrap();
        // A quarter turn makes the box 50 wide and 100 tall.
        assert_close(fit.scale, 0.8);
        assert_close(fit.center.x, -25.0);
        assert_close(fit.center.y, 50.0);
    }

    #[test]
    fn degenerate_extents_are_rejected() {
        let vp = ViewportView::top_down(200.0, 80.0);
        let flat = [
            extents((0.0, 0.0, 0.0), (100.0, 0.0, 0.0)),
            extents((0.0, 0.0, 0.0), (0.0, 100.0, 0.0)),
            Extents3::from_point(Point3::new(3.0, 4.0, 5.0)),
            Extents3::EMPTY,
            extents((0.0, 0.0, 0.0), (f64::INFINITY, 1.0, 0.0)),
            // Non-zero, but the scale would overflow.
            extents((0.0, 0.0, 0.0), (1e-320, 1e-320, 0.0)),
        ];
        for ext in flat {
            assert_eq!(fit_to_extents(&ext, &vp), Err(FitError::InvalidExtents));
        }

        // A box that is flat along the view direction's plane axis.
        let mut side = vp;
        side.view_direction = Vec3::X;
        let ext = extents((0.0, 0.0, 0.0), (10.0, 10.0, 0.0));
        assert_eq!(fit_to_extents(&ext, &side), Err(FitError::InvalidExtents));
    }

    #[test]
    fn flat_extents_stay_rejected_under_quarter_turns() {
        let line = extents((0.0, 0.0, 0.0), (100.0, 0.0, 0.0));
        let column = extents((20.0, -40.0, 0.0), (20.0, 60.0, 0.0));
        for twist in [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2, -FRAC_PI_2] {
            let mut vp = ViewportView::top_down(200.0, 80.0);
            vp.twist_angle = twist;
            assert_eq!(
                fit_to_extents(&line, &vp),
                Err(FitError::InvalidExtents),
                "twist {twist}"
            );
            assert_eq!(
                fit_to_extents(&column, &vp),
                Err(FitError::InvalidExtents),
                "twist {twist}"
            );
        }

        // Same for a side view of a box that is flat in Z, twisted by half a turn.
        let plate = extents((0.0, 0.0, 0.0), (10.0, 10.0, 0.0));
        let mut side = ViewportView::top_down(100.0, 100.0);
        side.view_direction = Vec3::X;
        side.twist_angle = PI;
        assert_eq!(fit_to_extents(&plate, &side), Err(FitError::InvalidExtents));
    }

    #[test]
    fn small_but_real_extents_far_from_origin_still_fit() {
        // A 1x1 region a million units out is well above the rounding floor.
        let ext = extents((1e6, 1e6, 0.0), (1e6 + 1.0, 1e6 + 0.5, 0.0));
        let mut vp = ViewportView::top_down(200.0, 80.0);
        vp.twist_angle = PI;
        let fit = fit_to_extents(&ext, &vp).unwrap();
        assert!(fit.scale.is_finite() && fit.scale > 0.0);
    }

    #[test]
    fn invalid_viewports_are_rejected_first() {
        let ext = Extents3::EMPTY;
        for (w, h) in [(0.0, 80.0), (200.0, 0.0), (-1.0, 1.0), (f64::NAN, 1.0)] {
            let vp = ViewportView::top_down(w, h);
            assert_eq!(fit_to_extents(&ext, &vp), Err(FitError::InvalidViewport));
        }
        let mut vp = ViewportView::top_down(200.0, 80.0);
        vp.view_direction = Vec3::ZERO;
        assert_eq!(fit_to_extents(&ext, &vp), Err(FitError::InvalidViewport));
    }

    #[test]
    fn fit_points_of_a_closed_outline() {
        let outline = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(100.0, 0.0, 0.0),
            Point3::new(100.0, 50.0, 0.0),
            Point3::new(0.0, 50.0, 0.0),
        ];
        let mut vp = ViewportView::top_down(200.0, 80.0);
        let fit = fit_to_points(outline, &vp).unwrap();
        assert_eq!(
            fit,
            FitResult {
                center: Point::new(50.0, 25.0),
                scale: 1.6,
            }
        );

        fit.apply_to(&mut vp);
        assert_eq!(vp.center, Point::new(50.0, 25.0));
        assert_eq!(vp.scale, 1.6);
        assert_eq!(vp.view_height(), 50.0);
    }
}
