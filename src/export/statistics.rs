use std::collections::HashMap;

use serde::Serialize;

use crate::models::ListingRecord;

pub const STATISTICS_COLUMNS: [&str; 10] = [
    "event_name", "count", "mean", "std", "min", "25%", "50%", "75%", "max", "IQR",
];

/// Price distribution of the listings of one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventStatistics {
    pub event_name: String,
    /// Listings with a price.
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation, absent below two prices.
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    pub max: Option<f64>,
    #[serde(rename = "IQR")]
    pub iqr: Option<f64>,
}

/// Groups listings by event name, in order of first appearance, and summarises
/// their prices. Listings without an event name are left out; listings without
/// a price still open their group.
pub fn compute_event_statistics<'a, I>(records: I) -> Vec<EventStatistics>
where
    I: IntoIterator<Item = &'a ListingRecord>,
{
    let mut order: Vec<(&'a str, Vec<f64>)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        let Some(event_name) = record.event_name.as_deref() else {
            continue;
        };

        let slot = *index.entry(event_name).or_insert_with(|| {
            order.push((event_name, Vec::new()));
            order.len() - 1
        });

        if let Some(price) = record.price {
            order[slot].1.push(price);
        }
    }

    order
        .into_iter()
        .map(|(event_name, prices)| summarise(event_name, prices))
        .collect()
}

fn summarise(event_name: &str, mut prices: Vec<f64>) -> EventStatistics {
    prices.sort_by(|a, b| a.total_cmp(b));

    let count = prices.len();
    let mean = (count > 0).then(|| prices.iter().sum::<f64>() / count as f64);
    let std = mean.filter(|_| count > 1).map(|mean| {
        let squares: f64 = prices.iter().map(|price| (price - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    });
    let q1 = quantile(&prices, 0.25);
    let q3 = quantile(&prices, 0.75);

    EventStatistics {
        event_name: event_name.to_string(),
        count,
        mean,
        std,
        min: prices.first().copied(),
        q1,
        median: quantile(&prices, 0.5),
        q3,
        max: prices.last().copied(),
        iqr: q1.zip(q3).map(|(q1, q3)| q3 - q1),
    }
}

/// Linear interpolation between the closest ranks of an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::ListingStatus;

    fn listing(event_name: Option<&str>, price: Option<f64>) -> ListingRecord {
        ListingRecord {
            fetch_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            event_date: None,
            event_name: event_name.map(str::to_string),
            detail: None,
            price,
            quantity: None,
            status: ListingStatus::BeforeTrade,
        }
    }

    #[test]
    fn quartiles_interpolate_between_ranks() {
        let records: Vec<_> = [4000.0, 1000.0, 3000.0, 2000.0]
            .into_iter()
            .map(|price| listing(Some("浦和 vs 鹿島"), Some(price)))
            .collect();

        let stats = compute_event_statistics(&records);

        assert_eq!(stats.len(), 1);
        let reds = &stats[0];
        assert_eq!(reds.count, 4);
        assert_eq!(reds.mean, Some(2500.0));
        assert_eq!(reds.min, Some(1000.0));
        assert_eq!(reds.q1, Some(1750.0));
        assert_eq!(reds.median, Some(2500.0));
        assert_eq!(reds.q3, Some(3250.0));
        assert_eq!(reds.max, Some(4000.0));
        assert_eq!(reds.iqr, Some(1500.0));
        assert!((reds.std.unwrap() - 1290.994_448_735_805_6).abs() < 1e-6);
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let records = vec![
            listing(Some("B"), Some(100.0)),
            listing(None, Some(999.0)),
            listing(Some("A"), None),
            listing(Some("B"), Some(300.0)),
        ];

        let stats = compute_event_statistics(&records);

        let names: Vec<_> = stats.iter().map(|s| s.event_name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].median, Some(200.0));
    }

    #[test]
    fn group_without_prices_is_all_missing() {
        let stats = compute_event_statistics(&vec![listing(Some("A"), None)]);

        assert_eq!(
            stats[0],
            EventStatistics {
                event_name: "A".to_string(),
                count: 0,
                mean: None,
                std: None,
                min: None,
                q1: None,
                median: None,
                q3: None,
                max: None,
                iqr: None,
            }
        );
    }

    #[test]
    fn single_price_has_no_spread() {
        let stats = compute_event_statistics(&vec![listing(Some("A"), Some(8000.0))]);

        assert_eq!(stats[0].std, None);
        assert_eq!(stats[0].q1, Some(8000.0));
        assert_eq!(stats[0].iqr, Some(0.0));
    }
}
