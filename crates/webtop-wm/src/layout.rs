//! Placement of newly opened windows.

use serde::{Deserialize, Serialize};
use webtop_common::Point;

/// Successive windows are offset by `step` from `origin`, wrapping every
/// `wrap` pixels, so new windows cascade instead of stacking exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cascade {
    pub origin: Point,
    pub step: Point,
    pub wrap: Point,
}

impl Default for Cascade {
    fn default() -> Self {
        Self {
            origin: Point::new(60.0, 40.0),
            step: Point::new(20.0, 10.0),
            wrap: Point::new(300.0, 120.0),
        }
    }
}

impl Cascade {
    /// Position of the `n`-th window ever opened (1-based).
    pub fn position_for(&self, n: u32) -> Point {
        let n = f64::from(n);
        Point::new(
            self.origin.x + wrap_axis(self.step.x * n, self.wrap.x),
            self.origin.y + wrap_axis(self.step.y * n, self.wrap.y),
        )
    }
}

fn wrap_axis(offset: f64, wrap: f64) -> f64 {
    if wrap > 0.0 {
        offset.rem_euclid(wrap)
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_windows_cascade() {
        let cascade = Cascade::default();
        assert_eq!(cascade.position_for(1), Point::new(80.0, 50.0));
        assert_eq!(cascade.position_for(2), Point::new(100.0, 60.0));
        assert_eq!(cascade.position_for(3), Point::new(120.0, 70.0));
    }

    #[test]
    fn offsets_wrap() {
        let cascade = Cascade::default();
        // 20 * 15 = 300 wraps to 0; 10 * 15 = 150 wraps to 30.
        assert_eq!(cascade.position_for(15), Point::new(60.0, 70.0));
        // 10 * 12 = 120 wraps to 0.
        assert_eq!(cascade.position_for(12).y, 40.0);
    }

    #[test]
    fn zero_wrap_disables_wrapping() {
        let cascade = Cascade {
            wrap: Point::ORIGIN,
            ..Cascade::default()
        };
        assert_eq!(cascade.position_for(100), Point::new(2060.0, 1040.0));
    }

    #[test]
    fn cascade_serializes_as_points() {
        let json = serde_json::to_value(Cascade::default()).unwrap();
        assert_eq!(json["origin"]["x"], 60.0);
        assert_eq!(json["wrap"]["y"], 120.0);
    }
}
