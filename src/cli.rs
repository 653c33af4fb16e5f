use std::path::PathBuf;

use clap::Parser;
use slidedeck::DeckConfig;
use slidedeck::constants::*;

/// Browse a directory of photos as a slide gallery.
#[derive(Parser, Debug)]
#[command(name = "slidedeck", version, about)]
pub struct Args {
    /// Directory holding the images to show
    pub image_directory: PathBuf,

    /// Advance to the next slide automatically
    #[arg(long)]
    pub auto_rotate: bool,

    /// Seconds between automatic advances
    #[arg(long, default_value_t = AUTO_ROTATE_INTERVAL)]
    pub interval: f32,

    /// Pause automatic advances while the pointer is over the slides
    #[arg(long)]
    pub pause_on_hover: bool,

    /// Horizontal drag distance (pixels) a swipe must exceed
    #[arg(long, default_value_t = SWIPE_THRESHOLD)]
    pub swipe_threshold: f32,

    /// Show the slides in random order
    #[arg(long)]
    pub shuffle: bool,

    /// Do not draw the position indicators
    #[arg(long)]
    pub no_indicators: bool,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,
}

impl Args {
    pub fn deck_config(&self) -> DeckConfig {
        DeckConfig {
            auto_rotate: self.auto_rotate,
            interval: self.interval,
            pause_on_hover: self.pause_on_hover,
            swipe_threshold: self.swipe_threshold,
        }
    }
}
