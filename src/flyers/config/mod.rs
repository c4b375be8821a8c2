use rand::seq::SliceRandom;

use super::enums::genre::Genre;

/// Output canvas sizes selectable per request. The first entry is the default
/// when the request omits or misspells the format value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasPreset {
    pub name: &'static str,
    pub value: &'static str,
    pub width: u32,
    pub height: u32,
}

pub static CANVAS_PRESETS: [CanvasPreset; 4] = [
    CanvasPreset {
        name: "Instagram Post",
        value: "1:1",
        width: 1080,
        height: 1080,
    },
    CanvasPreset {
        name: "Instagram Story",
        value: "9:16",
        width: 1080,
        height: 1920,
    },
    CanvasPreset {
        name: "Facebook Event",
        value: "16:9",
        width: 1920,
        height: 1080,
    },
    CanvasPreset {
        name: "Print A4",
        value: "210:297",
        width: 2480,
        height: 3508,
    },
];

pub fn preset_for_value(value: Option<&str>) -> &'static CanvasPreset {
    match value {
        Some(value) => CANVAS_PRESETS
            .iter()
            .find(|preset| preset.value == value)
            .unwrap_or(&CANVAS_PRESETS[0]),
        None => &CANVAS_PRESETS[0],
    }
}

/// Background art direction appended to the generation prompt per genre.
/// Shuffle draws one of the concrete genres at random on every call.
pub fn style_prompt(genre: Genre) -> &'static str {
    match genre {
        Genre::ElectroBreaksUkg => {
            "minimalist Y2K-inspired electronic music flyer, blue and magenta neon glow, sleek digital aesthetic, geometric shapes, holographic elements, dark background, futuristic interface design, high contrast, essential composition"
        }
        Genre::HouseTechHouse => {
            "ultra-minimal house music event poster with black background, subtle cyan blue accents, abstract geometric elements, clean negative space, 2000s tech-inspired grid layout, precise typography, digital essence"
        }
        Genre::TechnoHardTechnoIndustrial => {
            "sharp-edged techno flyer, industrial neo-futurism, monochromatic with electric blue accents, dystopian minimal design, digital glitches, black background, sparse geometric elements, precise grid"
        }
        Genre::HipHopTrap => {
            "minimal hip-hop event flyer with Y2K aesthetic, dark space, fluorescent orange and blue, clean silhouettes, high-tech minimal elements, digital noise texture, futuristic but essential"
        }
        Genre::UrbanFunkReggaeton => {
            "minimalist urban music flyer, selective neon color highlights on black, clean lines, subtle gradient effects, Y2K-inspired digital aesthetics, sleek composition"
        }
        Genre::MainstreamPop => {
            "crisp minimal pop flyer design, selective neon pink highlights, neo-Y2K aesthetic, clean black background, futuristic interface elements, essential geometric shapes, digital minimalism"
        }
        Genre::RockIndieAlternative => {
            "stark minimalist rock poster, high contrast black background, selective color accents, subtle texture, Y2K-inspired tech elements, sparse composition, digital noise, essential aesthetic"
        }
        Genre::Shuffle => {
            let mut rng = rand::thread_rng();

            match Genre::base_genres().choose(&mut rng) {
                Some(genre) => style_prompt(*genre),
                None => style_prompt(Genre::ElectroBreaksUkg),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_presets_by_value() {
        let preset = preset_for_value(Some("9:16"));
        assert_eq!(preset.width, 1080);
        assert_eq!(preset.height, 1920);

        let preset = preset_for_value(Some("210:297"));
        assert_eq!(preset.width, 2480);
        assert_eq!(preset.height, 3508);
    }

    #[test]
    fn falls_back_to_square_preset() {
        assert_eq!(preset_for_value(None), &CANVAS_PRESETS[0]);
        assert_eq!(preset_for_value(Some("4:3")), &CANVAS_PRESETS[0]);
    }

    #[test]
    fn every_genre_has_a_style_prompt() {
        for genre in Genre::all() {
            assert!(!style_prompt(genre).is_empty());
        }
    }

    #[test]
    fn shuffle_borrows_a_concrete_prompt() {
        let concrete: Vec<&str> = Genre::base_genres()
            .iter()
            .map(|genre| style_prompt(*genre))
            .collect();

        for _ in 0..20 {
            assert!(concrete.contains(&style_prompt(Genre::Shuffle)));
        }
    }
}
