//! Trail geometry

use nalgebra::distance;

use crate::Point;

/// Sum of the distances between consecutive points
pub fn path_length<I>(points: I) -> f64
where
    I: IntoIterator<Item = Point>,
{
    let mut points = points.into_iter();
    let Some(mut previous) = points.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for point in points {
        total += distance(&previous, &point);
        previous = point;
    }
    total
}

/// Straightness of a path: displacement over path length, capped at 1.
///
/// 1.0 is a perfectly straight path; backtracking and jitter push it
/// towards 0. Returns 0.0 for paths with fewer than two points or with
/// no displacement.
pub fn smoothness(points: &[Point]) -> f64 {
    let (Some(start), Some(end)) = (points.first(), points.last()) else {
        return 0.0;
    };

    let straight = distance(start, end);
    if straight == 0.0 {
        return 0.0;
    }

    let travelled = path_length(points.iter().copied());
    if travelled > 0.0 {
        (straight / travelled).min(1.0)
    } else {
        0.0
    }
}
