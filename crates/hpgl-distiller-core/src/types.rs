//! Plotter coordinate types

use std::fmt;

/// An integer plotter coordinate in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, truncated toward zero.
    pub fn distance_to(&self, other: &Point) -> u64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx.hypot(dy) as u64
    }

    /// Shift the point by `(dx, dy)`, or `None` if the result leaves the i64 range.
    pub fn checked_translate(&self, dx: i128, dy: i128) -> Option<Self> {
        let x = i64::try_from(i128::from(self.x) + dx).ok()?;
        let y = i64::try_from(i128::from(self.y) + dy).ok()?;
        Some(Self { x, y })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned extents of every drawn coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl BoundingBox {
    /// A degenerate box containing a single point.
    pub fn from_point(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Grow the box to include `point`.
    pub fn include(&mut self, point: Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// Smallest box around all `points`, `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let mut bbox = Self::from_point(points.next()?);
        for point in points {
            bbox.include(point);
        }
        Some(bbox)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn width(&self) -> u64 {
        self.max_x.abs_diff(self.min_x)
    }

    pub fn height(&self) -> u64 {
        self.max_y.abs_diff(self.min_y)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin ({}, {}) size {}x{}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}
