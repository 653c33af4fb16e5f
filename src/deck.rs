use log::{debug, info, warn};

use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::input::{ArrowKey, DeckInput};
use crate::rotation::AutoRotate;
use crate::state::SwipeDirection;
use crate::swipe::SwipeTracker;

/// Something the deck can present as the active slide.
pub trait Slide {
    fn set_active(&mut self, active: bool);
}

/// A position marker, one per slide, mirroring the active slide.
pub trait Indicator {
    fn set_active(&mut self, active: bool);
}

/// The container indicators are appended to, in slide order.
pub trait IndicatorHost {
    type Indicator: Indicator;

    fn create_indicator(&mut self, index: usize, count: usize) -> Result<Self::Indicator>;
}

/// Indicator type of a deck built without a container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoIndicator;

impl Indicator for NoIndicator {
    fn set_active(&mut self, _active: bool) {}
}

/// An ordered set of slides with exactly one active slide.
///
/// A deck built from zero slides is inert: it never creates indicators,
/// never arms its timer, and every operation is a no-op.
#[derive(Debug)]
pub struct SlideDeck<S, I = NoIndicator> {
    slides: Vec<S>,
    indicators: Vec<I>,
    current: usize,

    swipe: SwipeTracker,
    rotation: AutoRotate,
    pause_on_hover: bool,
    hovered: bool,
    paused_by_hover: bool,
}

impl<S: Slide> SlideDeck<S, NoIndicator> {
    /// Builds a deck with no indicator container.
    pub fn new(slides: Vec<S>, config: &DeckConfig) -> Self {
        Self::assemble(slides, Vec::new(), config)
    }
}

impl<S: Slide, I: Indicator> SlideDeck<S, I> {
    /// Builds a deck and asks `host` for one indicator per slide.
    ///
    /// If the host cannot provide every indicator the deck runs without any;
    /// navigation is unaffected.
    pub fn with_indicators<H>(slides: Vec<S>, host: &mut H, config: &DeckConfig) -> Self
    where
        H: IndicatorHost<Indicator = I>,
    {
        Self::with_optional_indicators(slides, Some(host), config)
    }

    pub fn with_optional_indicators<H>(slides: Vec<S>, host: Option<&mut H>, config: &DeckConfig) -> Self
    where
        H: IndicatorHost<Indicator = I>,
    {
        let indicators = match host {
            Some(host) if !slides.is_empty() => match create_indicators(host, slides.len()) {
                Ok(indicators) => indicators,
                Err(e) => {
                    warn!("Continuing without slide indicators: {}", e);
                    Vec::new()
                }
            },
            Some(_) => Vec::new(),
            None => {
                if !slides.is_empty() {
                    info!("No indicator container, continuing without slide indicators");
                }
                Vec::new()
            }
        };
        Self::assemble(slides, indicators, config)
    }

    fn assemble(slides: Vec<S>, indicators: Vec<I>, config: &DeckConfig) -> Self {
        let mut deck = Self {
            slides,
            indicators,
            current: 0,
            swipe: SwipeTracker::new(config.swipe_threshold),
            rotation: AutoRotate::new(config.auto_rotate, config.interval),
            pause_on_hover: config.pause_on_hover,
            hovered: false,
            paused_by_hover: false,
        };

        if deck.is_inert() {
            debug!("Slide deck has no slides, staying inert");
            return deck;
        }

        for slide in deck.slides.iter_mut() {
            slide.set_active(false);
        }
        for indicator in deck.indicators.iter_mut() {
            indicator.set_active(false);
        }
        deck.activate(0);

        if config.auto_rotate && !deck.start_rotation() {
            warn!("Auto-rotation requested with unusable interval {}", config.interval);
        }

        debug!(
            "Slide deck ready: {} slides, {} indicators",
            deck.slides.len(),
            deck.indicators.len()
        );
        deck
    }

    /// Makes `index` the active slide.
    ///
    /// Out-of-range indices are reported and leave the deck untouched. An
    /// inert deck accepts any index and does nothing.
    pub fn show_slide(&mut self, index: usize) -> Result<()> {
        if self.is_inert() {
            return Ok(());
        }
        if index >= self.slides.len() {
            return Err(DeckError::IndexOutOfRange { index, len: self.slides.len() });
        }
        self.activate(index);
        Ok(())
    }

    /// Moves forward, wrapping from the last slide to the first.
    pub fn next_slide(&mut self) -> Option<usize> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        let index = (self.current + 1) % len;
        self.activate(index);
        Some(index)
    }

    /// Moves back, wrapping from the first slide to the last.
    pub fn prev_slide(&mut self) -> Option<usize> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        let index = (self.current + len - 1) % len;
        self.activate(index);
        Some(index)
    }

    /// Applies one input event. Returns the new index when the event caused
    /// a transition.
    pub fn handle(&mut self, input: DeckInput) -> Result<Option<usize>> {
        if self.is_inert() {
            return Ok(None);
        }

        let moved = match input {
            DeckInput::PrevControl | DeckInput::Key(ArrowKey::Left) => self.prev_slide(),
            DeckInput::NextControl | DeckInput::Key(ArrowKey::Right) => self.next_slide(),
            DeckInput::Indicator(index) => {
                self.show_slide(index)?;
                Some(index)
            }
            DeckInput::TouchStart(x) => {
                self.swipe.begin(x);
                None
            }
            DeckInput::TouchEnd(x) => match self.swipe.end(x) {
                Some(SwipeDirection::Next) => self.next_slide(),
                Some(SwipeDirection::Previous) => self.prev_slide(),
                None => None,
            },
            DeckInput::PointerEnter => {
                self.pointer_entered();
                None
            }
            DeckInput::PointerLeave => {
                self.pointer_left();
                None
            }
        };
        Ok(moved)
    }

    /// Arms auto-rotation if it is enabled. Calling it again while running
    /// has no effect.
    pub fn start_rotation(&mut self) -> bool {
        if self.is_inert() {
            return false;
        }
        self.rotation.start()
    }

    pub fn stop_rotation(&mut self) {
        self.paused_by_hover = false;
        self.rotation.stop();
    }

    /// Feeds `dt` seconds of frame time to the rotation timer, advancing once
    /// per elapsed interval. Returns the number of advances.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let fired = self.rotation.advance(dt);
        if fired == 0 || self.is_inert() {
            return fired;
        }
        // Whole laps land back on the same slide
        let steps = fired as usize % self.slides.len();
        let index = (self.current + steps) % self.slides.len();
        self.activate(index);
        fired
    }

    fn pointer_entered(&mut self) {
        if self.hovered {
            return;
        }
        self.hovered = true;
        if self.pause_on_hover && self.rotation.is_running() {
            debug!("Pointer over slides, pausing rotation");
            self.rotation.stop();
            self.paused_by_hover = true;
        }
    }

    fn pointer_left(&mut self) {
        if !self.hovered {
            return;
        }
        self.hovered = false;
        // Only resume what the hover paused; an explicit stop stays stopped
        if self.paused_by_hover {
            debug!("Pointer left slides, resuming rotation");
            self.paused_by_hover = false;
            self.rotation.start();
        }
    }

    fn activate(&mut self, index: usize) {
        if let Some(slide) = self.slides.get_mut(self.current) {
            slide.set_active(false);
        }
        if let Some(indicator) = self.indicators.get_mut(self.current) {
            indicator.set_active(false);
        }

        if let Some(slide) = self.slides.get_mut(index) {
            slide.set_active(true);
        }
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.set_active(true);
        }
        self.current = index;
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn is_inert(&self) -> bool {
        self.slides.is_empty()
    }

    /// `None` for an inert deck.
    pub fn current_index(&self) -> Option<usize> {
        if self.is_inert() { None } else { Some(self.current) }
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    /// Mutable access for per-frame updates such as animations.
    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn current_slide(&self) -> Option<&S> {
        self.current_index().and_then(|index| self.slides.get(index))
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_running()
    }
}

fn create_indicators<H: IndicatorHost>(host: &mut H, count: usize) -> Result<Vec<H::Indicator>> {
    (0..count).map(|index| host.create_indicator(index, count)).collect()
}
