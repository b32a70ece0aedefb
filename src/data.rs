//! Static datasets.
//!
//! Everything the dashboard displays is hand-written data: the browser
//! market shares, the time zone country groups, and the Europe region
//! atlas. Nothing is fetched or computed at runtime.

pub mod browsers;
pub mod europe;
pub mod timezones;

pub use browsers::browser_market_shares;
pub use timezones::timezone_series;

use crate::model::RegionAtlas;

/// Resolve an atlas id from a map configuration, mirroring how the map
/// references its topology source by name.
pub fn find_atlas(id: &str) -> Option<&'static RegionAtlas> {
    [&europe::EUROPE].into_iter().find(|atlas| atlas.id == id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_find_atlas() {
        assert_eq!(find_atlas("custom/europe").map(|a| a.name), Some("Europe"));
        assert!(find_atlas("custom/mars").is_none());
    }
}
