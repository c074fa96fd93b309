//! Piecewise-linear keyframe curves for the scroll-linked hero.
//!
//! Each curve maps the normalized scroll progress of the pinned hero region
//! to one visual property. Evaluation clamps to the first/last keyframe
//! outside the defined range instead of extrapolating, so overscroll can
//! never push a property past its terminal value.

/// Ordered (input, output) control points with strictly increasing inputs.
pub struct KeyframeCurve {
    keys: &'static [(f64, f64)],
}

impl KeyframeCurve {
    pub const fn new(keys: &'static [(f64, f64)]) -> Self {
        Self { keys }
    }

    /// Evaluate the curve at `t`, clamping outside the keyframe range and
    /// interpolating linearly between the bounding keyframes otherwise.
    pub fn value_at(&self, t: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for pair in self.keys.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if t <= x1 {
                let span = x1 - x0;
                if span <= 0.0 {
                    return y1;
                }
                return y0 + (y1 - y0) * (t - x0) / span;
            }
        }
        last.1
    }
}

/// Horizontal pan of the hero image, in percent of the panning layer width.
/// The pan completes at 80% of the scroll range, then holds for the last 20%
/// as a reading buffer before the section releases.
pub const IMAGE_X: KeyframeCurve =
    KeyframeCurve::new(&[(0.0, 0.0), (0.8, -67.0), (1.0, -67.0)]);

/// Text panel opacity: fully legible through most of the pan, then a quick
/// fade in a short window before the pan completes.
pub const TEXT_OPACITY: KeyframeCurve =
    KeyframeCurve::new(&[(0.0, 1.0), (0.65, 1.0), (0.85, 0.0), (1.0, 0.0)]);

/// Subtle vertical lift accompanying the fade, in percent. Holds past 0.8 by
/// clamping on the last keyframe.
pub const TEXT_Y: KeyframeCurve = KeyframeCurve::new(&[(0.0, 0.0), (0.8, -15.0)]);

/// Visual properties of the hero at one scroll progress sample.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HeroVisualState {
    pub image_x_pct: f64,
    pub text_opacity: f64,
    pub text_y_pct: f64,
}

impl HeroVisualState {
    /// Evaluate all three curves from the same progress sample, so the pan,
    /// fade, and lift cannot desynchronize within a frame.
    pub fn at(progress: f64) -> Self {
        Self {
            image_x_pct: IMAGE_X.value_at(progress),
            text_opacity: TEXT_OPACITY.value_at(progress),
            text_y_pct: TEXT_Y.value_at(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn clamps_below_first_and_above_last_keyframe() {
        assert!((IMAGE_X.value_at(-0.5) - 0.0).abs() < EPS);
        assert!((IMAGE_X.value_at(1.5) - -67.0).abs() < EPS);
        assert!((TEXT_Y.value_at(0.9) - -15.0).abs() < EPS);
        assert!((TEXT_Y.value_at(1.0) - -15.0).abs() < EPS);
    }

    #[test]
    fn interpolates_between_bounding_keyframes() {
        // Midway through the pan segment: -67 * (0.4 / 0.8).
        assert!((IMAGE_X.value_at(0.4) - -33.5).abs() < EPS);
        // Midway through the fade window.
        assert!((TEXT_OPACITY.value_at(0.75) - 0.5).abs() < EPS);
    }

    #[test]
    fn resting_state_at_zero() {
        let v = HeroVisualState::at(0.0);
        assert!((v.image_x_pct - 0.0).abs() < EPS);
        assert!((v.text_opacity - 1.0).abs() < EPS);
        assert!((v.text_y_pct - 0.0).abs() < EPS);
    }

    #[test]
    fn pan_and_lift_terminal_at_eighty_percent() {
        let v = HeroVisualState::at(0.8);
        assert!((v.image_x_pct - -67.0).abs() < EPS);
        assert!((v.text_y_pct - -15.0).abs() < EPS);
    }

    #[test]
    fn opacity_is_zero_from_085_onward() {
        for &p in &[0.85, 0.9, 0.95, 1.0] {
            assert!((TEXT_OPACITY.value_at(p) - 0.0).abs() < EPS);
        }
    }

    #[test]
    fn halfway_scenario() {
        let v = HeroVisualState::at(0.5);
        assert!((v.image_x_pct - -41.875).abs() < 1e-6);
        assert!((v.text_opacity - 1.0).abs() < EPS);
        assert!((v.text_y_pct - -9.375).abs() < 1e-6);
    }

    #[test]
    fn pan_magnitude_non_decreasing_up_to_eighty_percent() {
        let mut prev = 0.0;
        for step in 0..=80 {
            let x = IMAGE_X.value_at(step as f64 / 100.0).abs();
            assert!(x >= prev - EPS);
            prev = x;
        }
    }

    #[test]
    fn opacity_non_increasing_past_065() {
        let mut prev = 1.0;
        for step in 65..=100 {
            let o = TEXT_OPACITY.value_at(step as f64 / 100.0);
            assert!(o <= prev + EPS);
            prev = o;
        }
    }
}
