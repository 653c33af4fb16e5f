use raylib::prelude::*;
use slidedeck::Slide;
use slidedeck::constants::*;

/// Largest scale (never above 1.0) at which an image fits `SLIDE_FILL` of
/// the area.
pub fn fit_scale(image_width: f32, image_height: f32, area_width: f32, area_height: f32) -> f32 {
    if image_width <= 0.0 || image_height <= 0.0 {
        return 1.0;
    }
    let max_width = area_width * SLIDE_FILL;
    let max_height = area_height * SLIDE_FILL;
    (max_width / image_width).min(max_height / image_height).min(1.0)
}

pub struct GallerySlide {
    image: Texture2D,

    active: bool,
    opacity: f32,
    animation_timer: f32,
    is_animating: bool,
}

impl GallerySlide {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            active: false,
            opacity: 0.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / FADE_DURATION).min(1.0);
        self.opacity = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        if self.animation_timer >= FADE_DURATION {
            self.is_animating = false;
            self.opacity = 1.0;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if !self.active {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, area.width, area.height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            area.x + (area.width - scaled_width) * 0.5,
            area.y + (area.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (self.opacity * 255.0) as u8),
        );
    }
}

impl Slide for GallerySlide {
    fn set_active(&mut self, active: bool) {
        if active && !self.active {
            self.opacity = 0.0;
            self.animation_timer = 0.0;
            self.is_animating = true;
        }
        self.active = active;
    }
}
