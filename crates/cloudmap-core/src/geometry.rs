//! Geometric types and the pure helper functions used during resolution.
//!
//! # Overview
//!
//! - [`Point`] and [`Size`]: plain coordinate types in diagram space.
//! - [`Ellipse`]: the region covered by a classified node or area.
//! - [`point_in_ellipse`], [`nearest`], [`curvature`] and
//!   [`thickness_from_line_width`]: stateless helpers shared by every
//!   resolution pass.
//!
//! None of the functions in this module allocate or keep state, which makes
//! the resolution passes deterministic functions of their ordered input.

/// Thickness assigned to a connector whose line width is unknown.
pub const DEFAULT_THICKNESS: u32 = 2;

/// Smallest thickness a connection type may carry.
pub const MIN_THICKNESS: u32 = 1;

/// Largest thickness a connection type may carry.
pub const MAX_THICKNESS: u32 = 100;

/// A location in diagram space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Width and height of a shape's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f64 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// An axis-aligned ellipse described by its center and two radii.
///
/// Every node and area is modelled as the ellipse inscribed in the bounding
/// box of its source shape, regardless of the shape's actual outline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ellipse {
    center: Point,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Builds the ellipse inscribed in the box at `corner` with the given `size`.
    ///
    /// The center is `corner + size / 2` and the radii are half the width and
    /// half the height.
    pub fn from_corner(corner: Point, size: Size) -> Self {
        let rx = size.width() / 2.0;
        let ry = size.height() / 2.0;
        Self {
            center: corner.add_point(Point::new(rx, ry)),
            rx,
            ry,
        }
    }

    pub fn center(self) -> Point {
        self.center
    }

    /// Horizontal radius
    pub fn rx(self) -> f64 {
        self.rx
    }

    /// Vertical radius
    pub fn ry(self) -> f64 {
        self.ry
    }

    /// Returns true if `point` lies inside or on this ellipse.
    pub fn contains(self, point: Point) -> bool {
        point_in_ellipse(point, self.center, self.rx, self.ry)
    }

    /// Product of the radii, used to rank nested regions by size.
    ///
    /// This is proportional to the true ellipse area (`π·rx·ry`), so it orders
    /// ellipses the same way without the constant factor.
    pub fn size_rank(self) -> f64 {
        self.rx * self.ry
    }
}

/// Tests whether `point` is inside the ellipse at `center` with radii `rx`, `ry`.
///
/// The test is `(dx/rx)² + (dy/ry)² <= 1`. A zero radius is degenerate and
/// never contains anything.
pub fn point_in_ellipse(point: Point, center: Point, rx: f64, ry: f64) -> bool {
    if rx == 0.0 || ry == 0.0 {
        return false;
    }
    let dx = (point.x() - center.x()) / rx;
    let dy = (point.y() - center.y()) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Returns the candidate whose position is closest to `point`.
///
/// Candidates are scanned linearly by squared Euclidean distance. Ties go to
/// the candidate encountered first, so callers that need a deterministic
/// answer must supply candidates in a defined order. Candidates without a
/// position are skipped.
pub fn nearest<T, I, F>(point: Point, candidates: I, position_of: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<Point>,
{
    let mut best: Option<(T, f64)> = None;
    for candidate in candidates {
        let Some(position) = position_of(&candidate) else {
            continue;
        };
        let dist = point.distance_squared(position);
        if best.as_ref().is_none_or(|(_, best_dist)| dist < *best_dist) {
            best = Some((candidate, dist));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Signed distance of `mid` from the chord `start -> end`.
///
/// The offset is measured along the chord's left-hand normal `(-dy, dx)`. A
/// zero-length chord has no normal and yields 0.
pub fn chord_offset(start: Point, end: Point, mid: Point) -> f64 {
    let chord = end.sub_point(start);
    let length = chord.x().hypot(chord.y());
    if length == 0.0 {
        return 0.0;
    }
    let nx = -chord.y() / length;
    let ny = chord.x() / length;
    let offset = mid.sub_point(start);
    offset.x() * nx + offset.y() * ny
}

/// Estimates how far a polyline bulges away from the line joining its ends.
///
/// The first and last points form the chord. Each interior point is projected
/// onto the chord normal and the offset with the largest magnitude wins. Fewer
/// than three points means there is no interior and the result is 0.
///
/// Reversing the point order flips the sign of the result.
pub fn curvature(points: &[Point]) -> f64 {
    let [start, interior @ .., end] = points else {
        return 0.0;
    };
    interior
        .iter()
        .map(|&mid| chord_offset(*start, *end, mid))
        .fold(0.0, |best: f64, delta| {
            if delta.abs() > best.abs() {
                delta
            } else {
                best
            }
        })
}

/// Converts a raw line width into an integer thickness.
///
/// The width is multiplied by `scale`, rounded half-to-even and clamped to
/// `[MIN_THICKNESS, MAX_THICKNESS]`. A missing width maps to
/// [`DEFAULT_THICKNESS`].
pub fn thickness_from_line_width(width: Option<f64>, scale: f64) -> u32 {
    let Some(width) = width else {
        return DEFAULT_THICKNESS;
    };
    let value = (width * scale).round_ties_even();
    // NaN saturates to 0 in the cast and is clamped up like any other small value.
    (value as i64).clamp(i64::from(MIN_THICKNESS), i64::from(MAX_THICKNESS)) as u32
}
