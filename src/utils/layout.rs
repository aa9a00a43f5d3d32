use ratatui::layout::{Position, Rect};

/// Center a `width` x `height` rectangle inside `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Clickable regions recorded during render, looked up on mouse click.
#[derive(Debug, Clone)]
pub struct HitAreas<T> {
    areas: Vec<(Rect, T)>,
}

impl<T> Default for HitAreas<T> {
    fn default() -> Self {
        Self { areas: Vec::new() }
    }
}

impl<T: Clone> HitAreas<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame's regions.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn push(&mut self, area: Rect, target: T) {
        self.areas.push((area, target));
    }

    /// The target under a terminal cell, last pushed wins.
    pub fn hit(&self, column: u16, row: u16) -> Option<T> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target.clone())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_rect(area, 40, 20), Rect::new(30, 10, 40, 20));
        assert_eq!(center_rect(area, 200, 80), area);
    }

    #[test]
    fn test_hit_areas() {
        let mut hits = HitAreas::new();
        hits.push(Rect::new(0, 0, 10, 2), "a");
        hits.push(Rect::new(5, 1, 10, 2), "b");
        assert_eq!(hits.hit(1, 0), Some("a"));
        assert_eq!(hits.hit(6, 1), Some("b"));
        assert_eq!(hits.hit(50, 50), None);
        hits.clear();
        assert!(hits.is_empty());
    }
}
