// File: src/gender.rs
use crate::color::{PRIMARY_BLUE, PRIMARY_GREEN, PRIMARY_PINK, Rgba};

const BADGE_BACKGROUND_OPACITY: f32 = 0.1;

/// Which badge palette a gender label gets. Anything but male/female is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderTone {
    Male,
    Female,
    Other,
}

impl GenderTone {
    pub fn from_label(gender: &str) -> Self {
        match gender.to_lowercase().as_str() {
            "male" => GenderTone::Male,
            "female" => GenderTone::Female,
            _ => GenderTone::Other,
        }
    }

    pub fn text_color(self) -> Rgba {
        match self {
            GenderTone::Male => PRIMARY_BLUE,
            GenderTone::Female => PRIMARY_PINK,
            GenderTone::Other => PRIMARY_GREEN,
        }
    }

    pub fn background_color(self) -> Rgba {
        self.text_color().opacity(BADGE_BACKGROUND_OPACITY)
    }
}

pub fn gender_background_color(gender: &str) -> Rgba {
    GenderTone::from_label(gender).background_color()
}

pub fn gender_text_color(gender: &str) -> Rgba {
    GenderTone::from_label(gender).text_color()
}

/// `(background, foreground)` for a gender badge.
pub fn gender_colors(gender: &str) -> (Rgba, Rgba) {
    let tone = GenderTone::from_label(gender);
    (tone.background_color(), tone.text_color())
}
