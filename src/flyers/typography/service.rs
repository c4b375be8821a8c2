use crate::flyers::enums::genre::Genre;

use super::models::genre_typography::{GenreTypography, TextStyle};

const fn style(
    font_size_px: f32,
    font_weight: u16,
    letter_spacing_em: f32,
    color_hex: &'static str,
) -> TextStyle {
    TextStyle {
        font_size_px,
        font_weight,
        letter_spacing_em,
        color_hex,
    }
}

static ELECTRO_BREAKS_UKG: GenreTypography = GenreTypography {
    event_name: style(48.0, 200, 0.1, "#00f0ff"),
    date: style(24.0, 300, 0.2, "#ffffff"),
    location: style(20.0, 200, 0.15, "#ffffff80"),
    lineup: style(16.0, 200, 0.1, "#ffffff"),
};

static HOUSE_TECH_HOUSE: GenreTypography = GenreTypography {
    event_name: style(52.0, 100, 0.05, "#00ffcc"),
    date: style(24.0, 200, 0.3, "#ffffff"),
    location: style(18.0, 200, 0.2, "#ffffff80"),
    lineup: style(16.0, 300, 0.1, "#ffffff"),
};

static TECHNO_HARD_TECHNO_INDUSTRIAL: GenreTypography = GenreTypography {
    event_name: style(56.0, 300, 0.15, "#ff3366"),
    date: style(28.0, 200, 0.25, "#ffffff"),
    location: style(20.0, 200, 0.2, "#ffffff80"),
    lineup: style(18.0, 200, 0.15, "#ffffff"),
};

static HIP_HOP_TRAP: GenreTypography = GenreTypography {
    event_name: style(54.0, 700, 0.02, "#ffcc00"),
    date: style(26.0, 300, 0.1, "#ffffff"),
    location: style(20.0, 200, 0.05, "#ffffff80"),
    lineup: style(18.0, 400, 0.05, "#ffffff"),
};

static URBAN_FUNK_REGGAETON: GenreTypography = GenreTypography {
    event_name: style(50.0, 500, 0.05, "#ff9900"),
    date: style(24.0, 300, 0.15, "#ffffff"),
    location: style(18.0, 200, 0.1, "#ffffff80"),
    lineup: style(16.0, 300, 0.05, "#ffffff"),
};

static MAINSTREAM_POP: GenreTypography = GenreTypography {
    event_name: style(52.0, 400, 0.1, "#ff66cc"),
    date: style(26.0, 300, 0.2, "#ffffff"),
    location: style(20.0, 200, 0.15, "#ffffff80"),
    lineup: style(18.0, 300, 0.1, "#ffffff"),
};

static ROCK_INDIE_ALTERNATIVE: GenreTypography = GenreTypography {
    event_name: style(54.0, 600, 0.05, "#cc0000"),
    date: style(26.0, 300, 0.2, "#ffffff"),
    location: style(20.0, 200, 0.15, "#ffffff80"),
    lineup: style(18.0, 400, 0.1, "#ffffff"),
};

/// Total lookup over the closed genre set. Shuffle resolves to the exact
/// Electro / Breaks / UKG record, not a copy.
pub fn resolve_typography(genre: Genre) -> &'static GenreTypography {
    match genre.style_genre() {
        Genre::ElectroBreaksUkg | Genre::Shuffle => &ELECTRO_BREAKS_UKG,
        Genre::HouseTechHouse => &HOUSE_TECH_HOUSE,
        Genre::TechnoHardTechnoIndustrial => &TECHNO_HARD_TECHNO_INDUSTRIAL,
        Genre::HipHopTrap => &HIP_HOP_TRAP,
        Genre::UrbanFunkReggaeton => &URBAN_FUNK_REGGAETON,
        Genre::MainstreamPop => &MAINSTREAM_POP,
        Genre::RockIndieAlternative => &ROCK_INDIE_ALTERNATIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_genre() {
        for genre in Genre::all() {
            let typography = resolve_typography(genre);
            assert!(typography.event_name.font_size_px > 0.0);
        }
    }

    #[test]
    fn shuffle_shares_the_electro_record() {
        assert!(std::ptr::eq(
            resolve_typography(Genre::Shuffle),
            resolve_typography(Genre::ElectroBreaksUkg),
        ));
    }

    #[test]
    fn techno_title_style_matches_the_table() {
        let typography = resolve_typography(Genre::TechnoHardTechnoIndustrial);
        assert_eq!(typography.event_name.color_hex, "#ff3366");
        assert_eq!(typography.event_name.font_size_px, 56.0);
        assert_eq!(typography.event_name.font_weight, 300);
        assert_eq!(typography.location.color_rgba8(), [255, 255, 255, 128]);
    }
}
