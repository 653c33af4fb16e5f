pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (pixels)
pub const AUTO_ROTATE_INTERVAL: f32 = 5.0;    // Time between automatic advances (seconds)
pub const MIN_ROTATE_INTERVAL: f32 = 1.0 / FPS as f32; // Shortest accepted rotation interval: one frame
pub const FADE_DURATION: f32 = 0.35;          // Fade-in of the newly active slide (seconds)

pub const SLIDE_FILL: f32 = 0.9;              // Share of the slide area an image may cover
pub const DOT_RADIUS: f32 = 6.0;              // Indicator dot radius (pixels)
pub const DOT_SPACING: f32 = 22.0;            // Distance between indicator centers (pixels)
pub const CONTROL_SIZE: f32 = 56.0;           // Side of the prev/next hit boxes (pixels)
