//! The Europe region atlas.
//!
//! One representative point per country, keyed by ISO-3166 alpha-2 code.
//! The world-map backdrop is the rendering library's own shape data; this
//! table only supplies the viewport bounds and where to anchor markers and
//! labels within it.

use crate::model::{Region, RegionAtlas};

pub static EUROPE: RegionAtlas = RegionAtlas {
    id: "custom/europe",
    name: "Europe",
    credits: "Map data: Natural Earth",
    lon_bounds: [-25.0, 45.0],
    lat_bounds: [33.0, 72.0],
    regions: REGIONS,
};

const REGIONS: &[Region] = &[
    Region { code: "AD", name: "Andorra", lon: 1.5, lat: 42.5, label_rank: 6 },
    Region { code: "AL", name: "Albania", lon: 20.1, lat: 41.1, label_rank: 5 },
    Region { code: "AT", name: "Austria", lon: 14.1, lat: 47.6, label_rank: 4 },
    Region { code: "BA", name: "Bosnia and Herzegovina", lon: 17.8, lat: 44.2, label_rank: 5 },
    Region { code: "BE", name: "Belgium", lon: 4.6, lat: 50.7, label_rank: 4 },
    Region { code: "BG", name: "Bulgaria", lon: 25.2, lat: 42.8, label_rank: 4 },
    Region { code: "BY", name: "Belarus", lon: 28.0, lat: 53.5, label_rank: 3 },
    Region { code: "CH", name: "Switzerland", lon: 8.2, lat: 46.8, label_rank: 4 },
    Region { code: "CY", name: "Cyprus", lon: 33.2, lat: 35.0, label_rank: 5 },
    Region { code: "CZ", name: "Czech Republic", lon: 15.3, lat: 49.8, label_rank: 4 },
    Region { code: "DE", name: "Germany", lon: 10.3, lat: 51.1, label_rank: 2 },
    Region { code: "DK", name: "Denmark", lon: 9.3, lat: 56.0, label_rank: 3 },
    Region { code: "EE", name: "Estonia", lon: 25.8, lat: 58.7, label_rank: 5 },
    Region { code: "ES", name: "Spain", lon: -3.6, lat: 40.3, label_rank: 2 },
    Region { code: "FI", name: "Finland", lon: 26.0, lat: 64.5, label_rank: 3 },
    Region { code: "FR", name: "France", lon: 2.5, lat: 46.6, label_rank: 2 },
    Region { code: "GB", name: "United Kingdom", lon: -1.5, lat: 52.8, label_rank: 2 },
    Region { code: "GR", name: "Greece", lon: 22.5, lat: 39.3, label_rank: 3 },
    Region { code: "HR", name: "Croatia", lon: 16.4, lat: 45.5, label_rank: 4 },
    Region { code: "HU", name: "Hungary", lon: 19.4, lat: 47.2, label_rank: 4 },
    Region { code: "IE", name: "Ireland", lon: -8.0, lat: 53.2, label_rank: 3 },
    Region { code: "IS", name: "Iceland", lon: -18.6, lat: 64.9, label_rank: 3 },
    Region { code: "IT", name: "Italy", lon: 12.1, lat: 42.8, label_rank: 2 },
    Region { code: "LI", name: "Liechtenstein", lon: 9.5, lat: 47.1, label_rank: 6 },
    Region { code: "LT", name: "Lithuania", lon: 23.9, lat: 55.3, label_rank: 5 },
    Region { code: "LU", name: "Luxembourg", lon: 6.1, lat: 49.8, label_rank: 6 },
    Region { code: "LV", name: "Latvia", lon: 24.9, lat: 56.9, label_rank: 5 },
    Region { code: "MC", name: "Monaco", lon: 7.4, lat: 43.7, label_rank: 6 },
    Region { code: "MD", name: "Moldova", lon: 28.5, lat: 47.2, label_rank: 5 },
    Region { code: "ME", name: "Montenegro", lon: 19.2, lat: 42.8, label_rank: 6 },
    Region { code: "MK", name: "North Macedonia", lon: 21.7, lat: 41.6, label_rank: 5 },
    Region { code: "MT", name: "Malta", lon: 14.4, lat: 35.9, label_rank: 6 },
    Region { code: "NL", name: "Netherlands", lon: 5.3, lat: 52.2, label_rank: 4 },
    Region { code: "NO", name: "Norway", lon: 9.0, lat: 61.5, label_rank: 2 },
    Region { code: "PL", name: "Poland", lon: 19.3, lat: 52.1, label_rank: 2 },
    Region { code: "PT", name: "Portugal", lon: -8.2, lat: 39.6, label_rank: 3 },
    Region { code: "RO", name: "Romania", lon: 25.0, lat: 45.8, label_rank: 3 },
    Region { code: "RS", name: "Serbia", lon: 20.8, lat: 44.2, label_rank: 4 },
    Region { code: "RU", name: "Russia", lon: 40.0, lat: 56.0, label_rank: 1 },
    Region { code: "SE", name: "Sweden", lon: 15.0, lat: 62.0, label_rank: 2 },
    Region { code: "SI", name: "Slovenia", lon: 14.8, lat: 46.1, label_rank: 5 },
    Region { code: "SK", name: "Slovakia", lon: 19.5, lat: 48.7, label_rank: 4 },
    Region { code: "SM", name: "San Marino", lon: 12.4, lat: 43.9, label_rank: 6 },
    Region { code: "TR", name: "Turkey", lon: 35.2, lat: 39.1, label_rank: 2 },
    Region { code: "UA", name: "Ukraine", lon: 31.4, lat: 49.0, label_rank: 2 },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_codes_are_unique_and_sorted() {
        let codes: Vec<&str> = EUROPE.regions.iter().map(|r| r.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_points_are_inside_the_bounds() {
        for region in EUROPE.regions {
            assert!(
                region.lon >= EUROPE.lon_bounds[0] && region.lon <= EUROPE.lon_bounds[1],
                "{} lon out of bounds",
                region.code
            );
            assert!(
                region.lat >= EUROPE.lat_bounds[0] && region.lat <= EUROPE.lat_bounds[1],
                "{} lat out of bounds",
                region.code
            );
        }
    }

    #[test]
    fn test_label_ranks_are_plausible() {
        for region in EUROPE.regions {
            assert!((1..=6).contains(&region.label_rank), "{}", region.code);
        }
    }
}
