// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grace area between a trigger and its content.

use kurbo::{BezPath, Point, Rect, Shape};
use smallvec::SmallVec;

/// Convex region the pointer may cross on its way from the trigger to the
/// content without closing the tooltip.
#[derive(Clone, Debug)]
pub(crate) struct GraceArea {
    path: BezPath,
}

impl GraceArea {
    /// Hull of the exit point and the content corners.
    pub(crate) fn new(exit: Point, content: Rect) -> Self {
        let points = [
            exit,
            Point::new(content.x0, content.y0),
            Point::new(content.x1, content.y0),
            Point::new(content.x1, content.y1),
            Point::new(content.x0, content.y1),
        ];
        let hull = convex_hull(&points);
        let mut path = BezPath::new();
        let mut iter = hull.iter();
        if let Some(first) = iter.next() {
            path.move_to(*first);
            for p in iter {
                path.line_to(*p);
            }
            path.close_path();
        }
        Self { path }
    }

    pub(crate) fn contains(&self, point: Point) -> bool {
        self.path.contains(point)
    }
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Monotone chain hull, counter-clockwise, without collinear points.
fn convex_hull(points: &[Point]) -> SmallVec<[Point; 8]> {
    let mut sorted: SmallVec<[Point; 8]> = points.iter().copied().collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    if sorted.len() < 3 {
        return sorted;
    }
    let mut hull: SmallVec<[Point; 8]> = SmallVec::new();
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    let lower = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_drops_interior_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point::new(2.0, 1.0)));
    }

    #[test]
    fn corridor_between_exit_and_content() {
        // Trigger above, content below; the pointer left the trigger at (50, 20).
        let area = GraceArea::new(Point::new(50.0, 20.0), Rect::new(0.0, 40.0, 100.0, 80.0));
        assert!(area.contains(Point::new(50.0, 30.0)));
        assert!(area.contains(Point::new(60.0, 60.0)));
        assert!(!area.contains(Point::new(5.0, 25.0)));
        assert!(!area.contains(Point::new(150.0, 60.0)));
    }
}
