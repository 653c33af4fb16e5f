#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RotationState {
    Stopped,                   // No pending tick
    Running { elapsed: f32 },  // Armed, seconds accumulated towards the next advance
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SwipeDirection {
    Next,     // Finger moved right-to-left (start > end)
    Previous, // Finger moved left-to-right
}
