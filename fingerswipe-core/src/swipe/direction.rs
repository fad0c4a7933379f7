//! 8-way Swipe Direction
//!
//! Directions are in screen coordinates: x grows to the right and y grows
//! downward, so a positive angle turns clockwise on screen.
//!
//! | Sector (degrees)   | Label      |
//! |--------------------|------------|
//! | [-22.5, 22.5)      | right      |
//! | [22.5, 67.5)       | down-right |
//! | [67.5, 112.5)      | down       |
//! | [112.5, 157.5)     | down-left  |
//! | [157.5, 180]       | left       |
//! | [-180, -157.5)     | left       |
//! | [-157.5, -112.5)   | up-left    |
//! | [-112.5, -67.5)    | up         |
//! | [-67.5, -22.5)     | up-right   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;

/// Angular width of each direction sector
pub const SECTOR_WIDTH_DEG: f64 = 45.0;

const HALF_SECTOR_DEG: f64 = SECTOR_WIDTH_DEG / 2.0;

/// Direction of a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionLabel {
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    Up,
    UpRight,
}

impl DirectionLabel {
    /// All labels, clockwise from right
    pub const ALL: [DirectionLabel; 8] = [
        DirectionLabel::Right,
        DirectionLabel::DownRight,
        DirectionLabel::Down,
        DirectionLabel::DownLeft,
        DirectionLabel::Left,
        DirectionLabel::UpLeft,
        DirectionLabel::Up,
        DirectionLabel::UpRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::DownRight => "down-right",
            Self::Down => "down",
            Self::DownLeft => "down-left",
            Self::Left => "left",
            Self::UpLeft => "up-left",
            Self::Up => "up",
            Self::UpRight => "up-right",
        }
    }

    /// Classify an angle in degrees, as returned by `atan2(dy, dx)`.
    ///
    /// Each sector includes its lower bound and excludes its upper bound,
    /// so a boundary angle belongs to the sector clockwise of it.
    pub fn from_degrees(angle: f64) -> DirectionLabel {
        if angle >= 180.0 - HALF_SECTOR_DEG || angle < -180.0 + HALF_SECTOR_DEG {
            DirectionLabel::Left
        } else if angle < -112.5 {
            DirectionLabel::UpLeft
        } else if angle < -67.5 {
            DirectionLabel::Up
        } else if angle < -HALF_SECTOR_DEG {
            DirectionLabel::UpRight
        } else if angle < HALF_SECTOR_DEG {
            DirectionLabel::Right
        } else if angle < 67.5 {
            DirectionLabel::DownRight
        } else if angle < 112.5 {
            DirectionLabel::Down
        } else {
            DirectionLabel::DownLeft
        }
    }
}

impl fmt::Display for DirectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the displacement from `start` to `end`.
///
/// A zero displacement classifies as right (`atan2(0, 0) == 0`); callers
/// filter that case out with a distance threshold.
pub fn classify_direction(start: &Point, end: &Point) -> DirectionLabel {
    let delta = end - start;
    DirectionLabel::from_degrees(delta.y.atan2(delta.x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_angles() {
        let cases = [
            (-157.5, DirectionLabel::UpLeft),
            (-112.5, DirectionLabel::Up),
            (-67.5, DirectionLabel::UpRight),
            (-22.5, DirectionLabel::Right),
            (22.5, DirectionLabel::DownRight),
            (67.5, DirectionLabel::Down),
            (112.5, DirectionLabel::DownLeft),
            (157.5, DirectionLabel::Left),
        ];
        for (angle, expected) in cases {
            assert_eq!(
                DirectionLabel::from_degrees(angle),
                expected,
                "angle {angle}"
            );
        }
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(DirectionLabel::from_degrees(180.0), DirectionLabel::Left);
        assert_eq!(DirectionLabel::from_degrees(-180.0), DirectionLabel::Left);
        assert_eq!(DirectionLabel::from_degrees(-157.6), DirectionLabel::Left);
    }

    #[test]
    fn test_sector_centres() {
        // Centre of sector i is at i * 45 degrees, wrapping past 180
        for (i, label) in DirectionLabel::ALL.iter().enumerate() {
            let mut centre = i as f64 * SECTOR_WIDTH_DEG;
            if centre > 180.0 {
                centre -= 360.0;
            }
            assert_eq!(DirectionLabel::from_degrees(centre), *label);
            assert_eq!(DirectionLabel::from_degrees(centre + 22.0), *label);
            assert_eq!(DirectionLabel::from_degrees(centre - 22.0), *label);
        }
    }

    #[test]
    fn test_just_below_boundary() {
        assert_eq!(DirectionLabel::from_degrees(22.499), DirectionLabel::Right);
        assert_eq!(DirectionLabel::from_degrees(-22.501), DirectionLabel::UpRight);
        assert_eq!(DirectionLabel::from_degrees(157.499), DirectionLabel::DownLeft);
    }

    #[test]
    fn test_classify_from_points() {
        let origin = Point::new(100.0, 100.0);
        let cases = [
            (Point::new(150.0, 100.0), DirectionLabel::Right),
            (Point::new(150.0, 150.0), DirectionLabel::DownRight),
            (Point::new(100.0, 150.0), DirectionLabel::Down),
            (Point::new(50.0, 150.0), DirectionLabel::DownLeft),
            (Point::new(50.0, 100.0), DirectionLabel::Left),
            (Point::new(50.0, 50.0), DirectionLabel::UpLeft),
            (Point::new(100.0, 50.0), DirectionLabel::Up),
            (Point::new(150.0, 50.0), DirectionLabel::UpRight),
        ];
        for (end, expected) in cases {
            assert_eq!(classify_direction(&origin, &end), expected);
        }
    }

    #[test]
    fn test_classify_depends_only_on_displacement() {
        let a = classify_direction(&Point::new(0.0, 0.0), &Point::new(-30.0, 10.0));
        let b = classify_direction(&Point::new(500.0, 200.0), &Point::new(470.0, 210.0));
        assert_eq!(a, b);
        assert_eq!(a, DirectionLabel::Left);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DirectionLabel::DownLeft.as_str(), "down-left");
        assert_eq!(format!("{}", DirectionLabel::UpRight), "up-right");

        let json = serde_json::to_string(&DirectionLabel::DownRight).unwrap();
        assert_eq!(json, "\"down-right\"");
        let label: DirectionLabel = serde_json::from_str("\"up-left\"").unwrap();
        assert_eq!(label, DirectionLabel::UpLeft);
    }
}
