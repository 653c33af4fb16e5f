/// Arrow keys the deck reacts to, regardless of focus.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrowKey {
    Left,
    Right,
}

/// One event from any of the input channels feeding a deck.
///
/// Channels are independent; the deck applies each event in arrival order.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DeckInput {
    PrevControl,
    NextControl,
    /// Click on the indicator for the given slide.
    Indicator(usize),
    Key(ArrowKey),
    /// Touch (or press) began at this horizontal position.
    TouchStart(f32),
    TouchEnd(f32),
    PointerEnter,
    PointerLeave,
}
