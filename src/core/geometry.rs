//! Plain geometry values shared by layout, charts and backends.
//!
//! Engine coordinates are y-up: `Rect::origin` is the bottom-left corner and
//! `max_y` is the top edge. Backends never see these values directly; the
//! draw context converts them into y-down pixel space.

use std::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns a size whose width is this size's height and vice versa.
    ///
    /// Used when an extent measured for a horizontal edge has to be
    /// reinterpreted on a vertical one.
    #[must_use]
    pub const fn swapping_components(self) -> Self {
        Self::new(self.height, self.width)
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }
}

/// One side of a rectangular region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl RectEdge {
    /// All edges in the canonical visiting order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// `true` for edges that run along the x axis (top and bottom).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}

/// Axis-aligned rectangle with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Self = Self::new(Point::ZERO, Size::ZERO);

    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[must_use]
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    #[must_use]
    pub const fn width(self) -> f64 {
        self.size.width
    }

    #[must_use]
    pub const fn height(self) -> f64 {
        self.size.height
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    #[must_use]
    pub fn max_x(self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    #[must_use]
    pub fn max_y(self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Same region expressed with a non-negative size.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self::from_xywh(
            self.min_x(),
            self.min_y(),
            self.size.width.abs(),
            self.size.height.abs(),
        )
    }

    /// Shrinks the rectangle by one amount per edge.
    ///
    /// The origin moves right by `left` and up by `bottom`; the size loses
    /// `left + right` and `top + bottom`. Insets larger than the rectangle
    /// yield a negative size: the result is exact and is never clamped here.
    /// Use [`Rect::checked_inset`] where a negative size is a layout error.
    #[must_use]
    pub fn inset(self, insets: &EdgeComponents<f64>) -> Self {
        Self::from_xywh(
            self.origin.x + insets.left,
            self.origin.y + insets.bottom,
            self.size.width - insets.horizontal_sum(),
            self.size.height - insets.vertical_sum(),
        )
    }

    /// Like [`Rect::inset`] but fails with `GeometryUnderflow` when the
    /// resulting width or height would be negative.
    pub fn checked_inset(self, insets: &EdgeComponents<f64>) -> PlotResult<Self> {
        let rect = self.inset(insets);
        if rect.size.is_negative() {
            return Err(PlotError::GeometryUnderflow {
                width: rect.size.width,
                height: rect.size.height,
            });
        }
        Ok(rect)
    }

    /// Grows the rectangle by `amount` on every edge (shrinks when negative).
    #[must_use]
    pub fn outset(self, amount: f64) -> Self {
        self.inset(&EdgeComponents::all(-amount))
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        (self.min_x()..=self.max_x()).contains(&point.x)
            && (self.min_y()..=self.max_y()).contains(&point.y)
    }
}

/// A container holding one value per rectangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeComponents<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T> EdgeComponents<T> {
    #[must_use]
    pub const fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same `value` on every edge.
    #[must_use]
    pub fn all(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value.clone(), value.clone(), value)
    }

    /// Builds a new container by applying `transform` once per edge.
    ///
    /// Edges are visited in the fixed order left, top, right, bottom.
    pub fn map_by_edge<U>(self, mut transform: impl FnMut(RectEdge, T) -> U) -> EdgeComponents<U> {
        let left = transform(RectEdge::Left, self.left);
        let top = transform(RectEdge::Top, self.top);
        let right = transform(RectEdge::Right, self.right);
        let bottom = transform(RectEdge::Bottom, self.bottom);
        EdgeComponents::new(left, top, right, bottom)
    }

    pub fn map<U>(self, mut transform: impl FnMut(T) -> U) -> EdgeComponents<U> {
        self.map_by_edge(|_, value| transform(value))
    }

    #[must_use]
    pub fn as_ref(&self) -> EdgeComponents<&T> {
        EdgeComponents::new(&self.left, &self.top, &self.right, &self.bottom)
    }

    /// Iterates `(edge, value)` pairs in canonical edge order.
    pub fn iter(&self) -> impl Iterator<Item = (RectEdge, &T)> {
        RectEdge::ALL.into_iter().map(move |edge| (edge, &self[edge]))
    }
}

impl<T: Default> EdgeComponents<T> {
    /// Default value on every edge; an empty collection for collection types.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(T::default(), T::default(), T::default(), T::default())
    }
}

impl EdgeComponents<f64> {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub fn horizontal_sum(&self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical_sum(&self) -> f64 {
        self.top + self.bottom
    }
}

impl<T> Index<RectEdge> for EdgeComponents<T> {
    type Output = T;

    fn index(&self, edge: RectEdge) -> &T {
        match edge {
            RectEdge::Left => &self.left,
            RectEdge::Top => &self.top,
            RectEdge::Right => &self.right,
            RectEdge::Bottom => &self.bottom,
        }
    }
}

impl<T> IndexMut<RectEdge> for EdgeComponents<T> {
    fn index_mut(&mut self, edge: RectEdge) -> &mut T {
        match edge {
            RectEdge::Left => &mut self.left,
            RectEdge::Top => &mut self.top,
            RectEdge::Right => &mut self.right,
            RectEdge::Bottom => &mut self.bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeComponents, Rect, RectEdge};

    #[test]
    fn map_by_edge_visits_edges_in_canonical_order() {
        let mut visited = Vec::new();
        let mapped = EdgeComponents::all(1).map_by_edge(|edge, value| {
            visited.push(edge);
            value + visited.len()
        });

        assert_eq!(visited, RectEdge::ALL.to_vec());
        assert_eq!(mapped, EdgeComponents::new(2, 3, 4, 5));
    }

    #[test]
    fn normalized_flips_negative_extents() {
        let rect = Rect::from_xywh(10.0, 50.0, 20.0, -30.0).normalized();
        assert_eq!(rect, Rect::from_xywh(10.0, 20.0, 20.0, 30.0));
    }
}
