use serde::{Deserialize, Serialize};

use crate::weather_code::WeatherCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MascotMood {
    Panting,
    Comfortable,
    Cool,
    Cold,
    Worried,
}

impl MascotMood {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Panting => "panting",
            Self::Comfortable => "comfortable",
            Self::Cool => "cool",
            Self::Cold => "cold",
            Self::Worried => "worried",
        }
    }

    pub fn face(self) -> FaceHints {
        face_for(self)
    }
}

/// Picks the mascot mood for a day. Storms override temperature; otherwise
/// the high temperature decides, with 25 and 15 counted as comfortable and
/// 10 as cold.
pub fn resolve_mood(category: WeatherCategory, high_c: f64) -> MascotMood {
    if category == WeatherCategory::Storm {
        MascotMood::Worried
    } else if high_c > 25.0 {
        MascotMood::Panting
    } else if (15.0..=25.0).contains(&high_c) {
        MascotMood::Comfortable
    } else if high_c > 10.0 && high_c < 15.0 {
        MascotMood::Cool
    } else if high_c <= 10.0 {
        MascotMood::Cold
    } else {
        // NaN: keep the resting face.
        MascotMood::Comfortable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaceHints {
    pub eye: &'static str,
    pub mouth: &'static str,
    pub tongue: bool,
    pub ear_tilt: i16,
    pub eye_narrow: bool,
    pub ears_back: bool,
}

impl FaceHints {
    /// Left and right ear rotation in degrees. Ears pinned back override the tilt.
    pub fn ear_rotation(self) -> (i16, i16) {
        if self.ears_back {
            (-25, 25)
        } else {
            (self.ear_tilt, -self.ear_tilt)
        }
    }
}

pub fn face_for(mood: MascotMood) -> FaceHints {
    match mood {
        MascotMood::Panting => FaceHints {
            eye: "◠",
            mouth: "ᴖ",
            tongue: true,
            ear_tilt: -15,
            eye_narrow: true,
            ears_back: true,
        },
        MascotMood::Comfortable => FaceHints {
            eye: "◉",
            mouth: "‿",
            tongue: false,
            ear_tilt: 0,
            eye_narrow: false,
            ears_back: false,
        },
        MascotMood::Cool => FaceHints {
            eye: "◉",
            mouth: "‿",
            tongue: false,
            ear_tilt: 5,
            eye_narrow: false,
            ears_back: false,
        },
        MascotMood::Cold => FaceHints {
            eye: "◔",
            mouth: "︿",
            tongue: false,
            ear_tilt: -20,
            eye_narrow: false,
            ears_back: true,
        },
        MascotMood::Worried => FaceHints {
            eye: "●",
            mouth: "_",
            tongue: false,
            ear_tilt: 0,
            eye_narrow: false,
            ears_back: true,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Motion {
    Still,
    Bob { period_ms: u32 },
    Shiver { period_ms: u32 },
}

/// Idle animation loop for the muzzle.
pub fn motion_for(mood: MascotMood) -> Motion {
    match mood {
        MascotMood::Panting => Motion::Bob { period_ms: 350 },
        MascotMood::Cold => Motion::Shiver { period_ms: 800 },
        MascotMood::Comfortable | MascotMood::Cool | MascotMood::Worried => Motion::Still,
    }
}
