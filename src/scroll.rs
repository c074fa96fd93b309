//! Normalized scroll progress through the pinned hero region.

/// Progress in [0, 1] through a pinned scroll region.
///
/// `region_top` is the region's bounding-rect top relative to the viewport,
/// so it goes negative once the region is pinned to the viewport top. The
/// pinned traversal spans the region height minus one viewport height (the
/// sticky inner container occupies that last viewport). A region with no
/// scrollable extent reports 0 rather than dividing by zero.
pub fn pinned_progress(region_top: f64, region_height: f64, viewport_height: f64) -> f64 {
    let travel = region_height - viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    (-region_top / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_before_the_region_is_pinned() {
        assert_eq!(pinned_progress(250.0, 6000.0, 1000.0), 0.0);
        assert_eq!(pinned_progress(0.0, 6000.0, 1000.0), 0.0);
    }

    #[test]
    fn linear_while_pinned() {
        // Halfway through a 5000px traversal.
        assert_eq!(pinned_progress(-2500.0, 6000.0, 1000.0), 0.5);
        assert_eq!(pinned_progress(-1250.0, 6000.0, 1000.0), 0.25);
    }

    #[test]
    fn one_after_the_region_has_passed() {
        assert_eq!(pinned_progress(-5000.0, 6000.0, 1000.0), 1.0);
        assert_eq!(pinned_progress(-9000.0, 6000.0, 1000.0), 1.0);
    }

    #[test]
    fn degenerate_extent_reports_zero() {
        assert_eq!(pinned_progress(-100.0, 0.0, 1000.0), 0.0);
        assert_eq!(pinned_progress(-100.0, 1000.0, 1000.0), 0.0);
        assert_eq!(pinned_progress(-100.0, 800.0, 1000.0), 0.0);
    }
}
