use raylib::prelude::*;
use slidedeck::constants::*;
use slidedeck::{DeckError, Indicator, IndicatorHost};

/// A clickable position dot.
#[derive(Debug, Clone)]
pub struct Dot {
    pub center: Vector2,
    pub radius: f32,
    pub active: bool,
}

impl Dot {
    pub fn contains(&self, point: Vector2) -> bool {
        // Slightly larger than the dot so it is easy to hit
        let reach = self.radius * 1.5;
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        dx * dx + dy * dy <= reach * reach
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if self.active {
            d.draw_circle_v(self.center, self.radius, Color::WHITE);
        } else {
            d.draw_circle_v(self.center, self.radius, Color::new(255, 255, 255, 90));
        }
    }
}

impl Indicator for Dot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Horizontal strip the dots are laid out in, centered on `center_x`.
#[derive(Debug, Clone)]
pub struct DotStrip {
    pub center_x: f32,
    pub y: f32,
    pub max_width: f32,
}

impl DotStrip {
    pub fn new(center_x: f32, y: f32, max_width: f32) -> Self {
        Self { center_x, y, max_width }
    }

    fn required_width(count: usize) -> f32 {
        count.saturating_sub(1) as f32 * DOT_SPACING + DOT_RADIUS * 2.0
    }
}

impl IndicatorHost for DotStrip {
    type Indicator = Dot;

    fn create_indicator(&mut self, index: usize, count: usize) -> slidedeck::Result<Dot> {
        let width = Self::required_width(count);
        if width > self.max_width {
            return Err(DeckError::IndicatorUnavailable(format!(
                "{} dots need {}px but the strip is {}px wide",
                count, width, self.max_width
            )));
        }

        let first_x = self.center_x - count.saturating_sub(1) as f32 * DOT_SPACING * 0.5;
        Ok(Dot {
            center: Vector2::new(first_x + index as f32 * DOT_SPACING, self.y),
            radius: DOT_RADIUS,
            active: false,
        })
    }
}
