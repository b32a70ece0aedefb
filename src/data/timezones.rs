//! European time zone groups.

use crate::model::MapDataSeries;

/// The four map series, one per UTC offset, each a list of country codes
/// joined to atlas regions by ISO alpha-2 code. Every member carries the
/// same unit value; the series a country belongs to is the data.
pub fn timezone_series() -> Vec<MapDataSeries> {
    let mut list = Vec::new();

    let mut series = MapDataSeries::new("UTC");
    for code in ["IE", "IS", "GB", "PT"] {
        series.add(code, 1.0);
    }
    series.set_join_by("iso-a2", "code");
    list.push(series);

    let mut series = MapDataSeries::new("UTC + 1");
    for code in [
        "NO", "SE", "DK", "DE", "NL", "BE", "LU", "ES", "FR", "PL", "CZ", "AT", "CH", "LI", "SK",
        "HU", "SI", "IT", "SM", "HR", "BA", "YF", "ME", "AL", "MK",
    ] {
        series.add(code, 1.0);
    }
    series.set_join_by("iso-a2", "code");
    list.push(series);

    let mut series = MapDataSeries::new("UTC + 2");
    for code in [
        "FI", "EE", "LV", "LT", "BY", "UA", "MD", "RO", "BG", "GR", "TR", "CY",
    ] {
        series.add(code, 1.0);
    }
    series.set_join_by("iso-a2", "code");
    list.push(series);

    let mut series = MapDataSeries::new("UTC + 3");
    series.add("RU", 1.0);
    series.set_join_by("iso-a2", "code");
    list.push(series);

    list
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::europe::EUROPE;

    #[test]
    fn test_series_shape() {
        let series = timezone_series();
        let names: Vec<&str> = series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["UTC", "UTC + 1", "UTC + 2", "UTC + 3"]);

        let sizes: Vec<usize> = series.iter().map(|s| s.items.len()).collect();
        assert_eq!(sizes, vec![4, 25, 12, 1]);
    }

    #[test]
    fn test_all_series_join_by_iso_code() {
        for series in timezone_series() {
            assert_eq!(series.join_by.0, "iso-a2");
            assert_eq!(series.join_by.1, "code");
        }
    }

    #[test]
    fn test_codes_resolve_against_the_atlas() {
        // One code in the UTC + 1 group matches no region and is skipped by
        // the join; everything else must resolve.
        for series in timezone_series() {
            let unmatched: Vec<&str> = series
                .items
                .iter()
                .filter(|item| !EUROPE.contains(&item.code))
                .map(|item| item.code.as_str())
                .collect();
            if series.name == "UTC + 1" {
                assert_eq!(unmatched, vec!["YF"]);
            } else {
                assert!(unmatched.is_empty(), "{}: {unmatched:?}", series.name);
            }
        }
    }

    #[test]
    fn test_no_country_is_in_two_zones() {
        let series = timezone_series();
        let mut seen = std::collections::HashSet::new();
        for s in &series {
            for item in &s.items {
                assert!(seen.insert(item.code.clone()), "{} twice", item.code);
            }
        }
    }
}
