use raylib::prelude::*;
use slidedeck::DeckInput;
use slidedeck::constants::*;

pub fn rect_contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Previous/next arrows on either side of the slide area.
#[derive(Debug, Clone)]
pub struct Controls {
    pub prev: Rectangle,
    pub next: Rectangle,
}

impl Controls {
    pub fn new(area: Rectangle) -> Self {
        let y = area.y + (area.height - CONTROL_SIZE) * 0.5;
        Self {
            prev: Rectangle::new(area.x, y, CONTROL_SIZE, CONTROL_SIZE),
            next: Rectangle::new(area.x + area.width - CONTROL_SIZE, y, CONTROL_SIZE, CONTROL_SIZE),
        }
    }

    pub fn hit(&self, point: Vector2) -> Option<DeckInput> {
        if rect_contains(&self.prev, point) {
            Some(DeckInput::PrevControl)
        } else if rect_contains(&self.next, point) {
            Some(DeckInput::NextControl)
        } else {
            None
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let shade = Color::new(0, 0, 0, 120);
        d.draw_rectangle_rec(self.prev, shade);
        d.draw_rectangle_rec(self.next, shade);

        let inset = CONTROL_SIZE * 0.3;
        let (p, n) = (self.prev, self.next);

        // Vertices counter-clockwise
        d.draw_triangle(
            Vector2::new(p.x + inset, p.y + p.height * 0.5),
            Vector2::new(p.x + p.width - inset, p.y + p.height - inset),
            Vector2::new(p.x + p.width - inset, p.y + inset),
            Color::WHITE,
        );
        d.draw_triangle(
            Vector2::new(n.x + n.width - inset, n.y + n.height * 0.5),
            Vector2::new(n.x + inset, n.y + inset),
            Vector2::new(n.x + inset, n.y + n.height - inset),
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_sit_on_the_area_edges() {
        let controls = Controls::new(Rectangle::new(0.0, 0.0, 800.0, 600.0));

        assert_eq!(controls.hit(Vector2::new(10.0, 300.0)), Some(DeckInput::PrevControl));
        assert_eq!(controls.hit(Vector2::new(790.0, 300.0)), Some(DeckInput::NextControl));
        assert_eq!(controls.hit(Vector2::new(400.0, 300.0)), None);
        assert_eq!(controls.hit(Vector2::new(10.0, 10.0)), None);
    }
}
