pub mod controls;
pub mod indicator;
pub mod slide;

use log::{debug, warn};
use raylib::prelude::*;
use slidedeck::{ArrowKey, DeckConfig, DeckInput, SlideDeck};

use crate::viewer::controls::{Controls, rect_contains};
use crate::viewer::indicator::{Dot, DotStrip};
use crate::viewer::slide::GallerySlide;

const FOOTER_HEIGHT: f32 = 48.0;

/// Decides what a press at `point` means: a control, an indicator, or the
/// start of a swipe.
pub fn route_press(controls: &Controls, dots: &[Dot], point: Vector2) -> DeckInput {
    if let Some(input) = controls.hit(point) {
        return input;
    }
    match dots.iter().position(|dot| dot.contains(point)) {
        Some(index) => DeckInput::Indicator(index),
        None => DeckInput::TouchStart(point.x),
    }
}

/// The slide deck plus the window regions that feed it.
pub struct Gallery {
    deck: SlideDeck<GallerySlide, Dot>,
    controls: Controls,
    slide_area: Rectangle,
    footer_y: f32,

    pointer_inside: bool,
    swiping: bool,
}

impl Gallery {
    /// Builds the deck once from the loaded slides and lays out its
    /// controls and indicator strip for a `width` x `height` window.
    pub fn assemble(
        slides: Vec<GallerySlide>,
        width: i32,
        height: i32,
        config: &DeckConfig,
        with_indicators: bool,
    ) -> Self {
        let width = width as f32;
        let height = height as f32;
        let slide_area = Rectangle::new(0.0, 0.0, width, (height - FOOTER_HEIGHT).max(0.0));
        let footer_y = slide_area.height;

        let mut strip = DotStrip::new(width * 0.5, footer_y + FOOTER_HEIGHT * 0.5, width * 0.6);
        let deck = SlideDeck::with_optional_indicators(
            slides,
            with_indicators.then_some(&mut strip),
            config,
        );

        Self {
            deck,
            controls: Controls::new(slide_area),
            slide_area,
            footer_y,
            pointer_inside: false,
            swiping: false,
        }
    }

    fn poll_inputs(&mut self, rl: &RaylibHandle) -> Vec<DeckInput> {
        let mut inputs = Vec::new();

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            inputs.push(DeckInput::Key(ArrowKey::Left));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            inputs.push(DeckInput::Key(ArrowKey::Right));
        }

        let mouse = rl.get_mouse_position();

        let inside = rect_contains(&self.slide_area, mouse);
        if inside != self.pointer_inside {
            self.pointer_inside = inside;
            inputs.push(if inside { DeckInput::PointerEnter } else { DeckInput::PointerLeave });
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let input = route_press(&self.controls, self.deck.indicators(), mouse);
            self.swiping = matches!(input, DeckInput::TouchStart(_));
            inputs.push(input);
        }
        if self.swiping && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.swiping = false;
            inputs.push(DeckInput::TouchEnd(mouse.x));
        }

        inputs
    }

    pub fn update(&mut self, rl: &RaylibHandle, dt: f32) {
        for input in self.poll_inputs(rl) {
            match self.deck.handle(input) {
                Ok(Some(index)) => debug!("{:?} moved to slide {}", input, index),
                Ok(None) => {}
                Err(e) => warn!("Ignoring {:?}: {}", input, e),
            }
        }

        if self.deck.tick(dt) > 0 {
            debug!("Auto-rotation moved to slide {:?}", self.deck.current_index());
        }

        for slide in self.deck.slides_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let Some(index) = self.deck.current_index() else {
            d.draw_text("No slides loaded.", 20, 20, 20, Color::RED);
            return;
        };

        if let Some(slide) = self.deck.current_slide() {
            slide.draw(d, self.slide_area);
        }
        self.controls.draw(d);

        for dot in self.deck.indicators() {
            dot.draw(d);
        }

        let caption = format!("{} / {}", index + 1, self.deck.len());
        d.draw_text(&caption, 16, (self.footer_y + FOOTER_HEIGHT * 0.5 - 10.0) as i32, 20, Color::LIGHTGRAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dots() -> Vec<Dot> {
        (0..3)
            .map(|i| Dot {
                center: Vector2::new(380.0 + i as f32 * 20.0, 580.0),
                radius: 6.0,
                active: false,
            })
            .collect()
    }

    #[test]
    fn presses_on_controls_win() {
        let controls = Controls::new(Rectangle::new(0.0, 0.0, 800.0, 552.0));
        assert_eq!(
            route_press(&controls, &dots(), Vector2::new(5.0, 276.0)),
            DeckInput::PrevControl
        );
        assert_eq!(
            route_press(&controls, &dots(), Vector2::new(795.0, 276.0)),
            DeckInput::NextControl
        );
    }

    #[test]
    fn presses_on_dots_jump() {
        let controls = Controls::new(Rectangle::new(0.0, 0.0, 800.0, 552.0));
        assert_eq!(
            route_press(&controls, &dots(), Vector2::new(420.0, 581.0)),
            DeckInput::Indicator(2)
        );
    }

    #[test]
    fn other_presses_start_a_swipe() {
        let controls = Controls::new(Rectangle::new(0.0, 0.0, 800.0, 552.0));
        assert_eq!(
            route_press(&controls, &dots(), Vector2::new(400.0, 200.0)),
            DeckInput::TouchStart(400.0)
        );
        assert_eq!(
            route_press(&controls, &[], Vector2::new(420.0, 581.0)),
            DeckInput::TouchStart(420.0)
        );
    }
}
