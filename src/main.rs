use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use slidedeck::constants::*;

mod cli;
mod texture_loader;
mod viewer;

use crate::cli::Args;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use crate::viewer::Gallery;
use crate::viewer::slide::GallerySlide;

fn load_slides(rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> Vec<GallerySlide> {
    let mut slides = Vec::with_capacity(paths.len());
    for path in paths {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => slides.push(GallerySlide::new(texture)),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    slides
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.deck_config();
    config.validate()?;

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Photo Gallery")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut image_paths = match load_sorted_image_paths(&args.image_directory) {
        Ok(paths) => paths,
        Err(e) => {
            error!("{:#}", e);
            Vec::new()
        }
    };
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }

    let slides = load_slides(&mut rl, &thread, image_paths);
    info!("Loaded {} slides from {}", slides.len(), args.image_directory.display());

    let mut gallery = Gallery::assemble(slides, args.width, args.height, &config, !args.no_indicators);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        gallery.update(&rl, dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        gallery.draw(&mut d);
    }

    Ok(())
}
