//! Pointer hit-testing.
//!
//! Hit regions live in logical chart space. [`Viewport`] converts client
//! (CSS pixel) coordinates into that space using the host element's current
//! bounding rect, so results stay correct after scrolling or resizing.

use crate::geometry::{Point, Rect, Size};

/// Element index per logical region. Regions never overlap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    regions: Vec<(Rect, usize)>,
}

impl HitMap {
    pub fn push(&mut self, region: Rect, index: usize) {
        self.regions.push((region, index));
    }

    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.regions
            .iter()
            .find(|(region, _)| region.contains(point))
            .map(|&(_, index)| index)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Placement of the chart on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Host element bounding rect in client coordinates.
    pub client: Rect,
    pub logical: Size,
}

impl Viewport {
    pub fn new(client: Rect, logical: Size) -> Self {
        Self { client, logical }
    }

    /// Logical point under a client position. `None` outside the element
    /// or while it has no measurable size.
    pub fn to_logical(&self, client_x: f64, client_y: f64) -> Option<Point> {
        if !self.client.size().is_measurable() {
            return None;
        }
        if !self.client.contains(Point::new(client_x, client_y)) {
            return None;
        }
        Some(Point::new(
            (client_x - self.client.x) * self.logical.width / self.client.width,
            (client_y - self.client.y) * self.logical.height / self.client.height,
        ))
    }

    /// Client position of a logical point.
    pub fn to_client(&self, point: Point) -> Point {
        let sx = if self.logical.width > 0.0 {
            self.client.width / self.logical.width
        } else {
            0.0
        };
        let sy = if self.logical.height > 0.0 {
            self.client.height / self.logical.height
        } else {
            0.0
        };
        Point::new(self.client.x + point.x * sx, self.client.y + point.y * sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_columns() -> HitMap {
        let mut map = HitMap::default();
        map.push(Rect::new(0.0, 0.0, 50.0, 100.0), 0);
        map.push(Rect::new(50.0, 0.0, 50.0, 100.0), 1);
        map
    }

    #[test]
    fn hit_test_finds_column() {
        let map = two_columns();
        assert_eq!(map.hit_test(Point::new(10.0, 10.0)), Some(0));
        assert_eq!(map.hit_test(Point::new(50.0, 99.0)), Some(1));
        assert_eq!(map.hit_test(Point::new(150.0, 10.0)), None);
    }

    #[test]
    fn viewport_accounts_for_offset_and_scale() {
        // Element scrolled to (100, 40) and shown at half size.
        let viewport = Viewport::new(Rect::new(100.0, 40.0, 400.0, 200.0), Size::new(800.0, 400.0));
        assert_eq!(viewport.to_logical(100.0, 40.0), Some(Point::new(0.0, 0.0)));
        assert_eq!(viewport.to_logical(300.0, 140.0), Some(Point::new(400.0, 200.0)));
        assert_eq!(viewport.to_logical(90.0, 140.0), None);
        assert_eq!(viewport.to_client(Point::new(400.0, 200.0)), Point::new(300.0, 140.0));
    }

    #[test]
    fn unmeasured_viewport_maps_nothing() {
        let viewport = Viewport::new(Rect::default(), Size::new(800.0, 400.0));
        assert_eq!(viewport.to_logical(0.0, 0.0), None);
    }
}
