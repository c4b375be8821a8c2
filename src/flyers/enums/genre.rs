use serde::{Deserialize, Serialize};

/// Closed set of selectable genres. `Shuffle` is an alias value with no table
/// entries of its own; it borrows another genre's typography and draws a random
/// genre's background prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Electro / Breaks / UKG")]
    ElectroBreaksUkg,
    #[serde(rename = "House / Tech-House")]
    HouseTechHouse,
    #[serde(rename = "Techno / Hard Techno / Industrial")]
    TechnoHardTechnoIndustrial,
    #[serde(rename = "Hip-Hop / Trap")]
    HipHopTrap,
    #[serde(rename = "Urban / Funk / Reggaeton")]
    UrbanFunkReggaeton,
    #[serde(rename = "Mainstream / Pop")]
    MainstreamPop,
    #[serde(rename = "Rock / Indie / Alternative")]
    RockIndieAlternative,
    Shuffle,
}

impl Genre {
    pub fn all() -> [Genre; 8] {
        [
            Genre::ElectroBreaksUkg,
            Genre::HouseTechHouse,
            Genre::TechnoHardTechnoIndustrial,
            Genre::HipHopTrap,
            Genre::UrbanFunkReggaeton,
            Genre::MainstreamPop,
            Genre::RockIndieAlternative,
            Genre::Shuffle,
        ]
    }

    pub fn base_genres() -> [Genre; 7] {
        [
            Genre::ElectroBreaksUkg,
            Genre::HouseTechHouse,
            Genre::TechnoHardTechnoIndustrial,
            Genre::HipHopTrap,
            Genre::UrbanFunkReggaeton,
            Genre::MainstreamPop,
            Genre::RockIndieAlternative,
        ]
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Genre::ElectroBreaksUkg => "Electro / Breaks / UKG",
            Genre::HouseTechHouse => "House / Tech-House",
            Genre::TechnoHardTechnoIndustrial => "Techno / Hard Techno / Industrial",
            Genre::HipHopTrap => "Hip-Hop / Trap",
            Genre::UrbanFunkReggaeton => "Urban / Funk / Reggaeton",
            Genre::MainstreamPop => "Mainstream / Pop",
            Genre::RockIndieAlternative => "Rock / Indie / Alternative",
            Genre::Shuffle => "Shuffle",
        }
    }

    /// Typography alias: Shuffle renders with the Electro / Breaks / UKG styles.
    pub fn style_genre(&self) -> Genre {
        match *self {
            Genre::Shuffle => Genre::ElectroBreaksUkg,
            genre => genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_display_names() {
        let genre: Genre =
            serde_json::from_str("\"Techno / Hard Techno / Industrial\"").unwrap();
        assert_eq!(genre, Genre::TechnoHardTechnoIndustrial);

        let genre: Genre = serde_json::from_str("\"Shuffle\"").unwrap();
        assert_eq!(genre, Genre::Shuffle);
    }

    #[test]
    fn shuffle_aliases_electro_for_styling() {
        assert_eq!(Genre::Shuffle.style_genre(), Genre::ElectroBreaksUkg);
        for genre in Genre::base_genres() {
            assert_eq!(genre.style_genre(), genre);
        }
    }
}
