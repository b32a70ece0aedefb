//! Browser market shares, January 2018.

use crate::model::{DataSeries, DataSeriesItem};

/// The pie chart series: nine labeled percentages, with Chrome sliced out
/// and selected from the start.
pub fn browser_market_shares() -> DataSeries {
    let mut series = DataSeries::new();

    let mut chrome = DataSeriesItem::new("Chrome", 61.41);
    chrome.sliced = true;
    chrome.selected = true;
    series.add(chrome);

    series.add(DataSeriesItem::new("Internet Explorer", 11.84));
    series.add(DataSeriesItem::new("Firefox", 10.85));
    series.add(DataSeriesItem::new("Edge", 4.67));
    series.add(DataSeriesItem::new("Safari", 4.18));
    series.add(DataSeriesItem::new("Sogou Explorer", 1.64));
    series.add(DataSeriesItem::new("Opera", 6.2));
    series.add(DataSeriesItem::new("QQ", 1.2));
    series.add(DataSeriesItem::new("Others", 2.61));

    series
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_series_shape() {
        let series = browser_market_shares();
        assert_eq!(series.len(), 9);
        assert_eq!(series.items[0].name, "Chrome");
        assert!(series.items[0].sliced);
        assert_eq!(series.selected(), Some(0));
    }

    #[test]
    fn test_shares_are_fixed() {
        let series = browser_market_shares();
        assert_eq!(series.items[0].y, 61.41);
        assert_eq!(series.items[8].name, "Others");
        assert_eq!(series.items[8].y, 2.61);
    }
}
