use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Trade state of a listing as labelled on the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ListingStatus {
    #[default]
    #[serde(rename = "取引前")]
    BeforeTrade,
    #[serde(rename = "取引中")]
    InTrade,
    #[serde(rename = "取引済")]
    CompletedTrade,
}

impl ListingStatus {
    pub const IN_TRADE_LABEL: &'static str = "取引中";
    pub const COMPLETED_TRADE_LABEL: &'static str = "取引済";

    /// Maps a status label to a status. Unknown labels fall back to `BeforeTrade`.
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::IN_TRADE_LABEL => ListingStatus::InTrade,
            Self::COMPLETED_TRADE_LABEL => ListingStatus::CompletedTrade,
            _ => ListingStatus::BeforeTrade,
        }
    }
}

/// One ticket offer found on a listing page.
///
/// Every field other than `fetch_date` and `status` is optional: a missing
/// sub-element in the markup leaves that field `None` without touching the
/// others.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRecord {
    #[serde(serialize_with = "serialize_date_key")]
    pub fetch_date: NaiveDate,
    #[serde(serialize_with = "serialize_optional_date_key")]
    pub event_date: Option<NaiveDate>,
    pub event_name: Option<String>,
    pub detail: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u64>,
    pub status: ListingStatus,
}

/// Column names of the exported listing table, in output order.
pub const LISTING_COLUMNS: [&str; 7] = [
    "fetch_date",
    "event_date",
    "event_name",
    "detail",
    "price",
    "quantity",
    "status",
];

/// Canonical `YYYYMMDD` form used for dates in exports and file names.
pub fn date_key(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn serialize_date_key<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&date_key(date))
}

fn serialize_optional_date_key<S: Serializer>(
    date: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.serialize_str(&date_key(date)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_are_a_closed_set() {
        assert_eq!(ListingStatus::from_label("取引中"), ListingStatus::InTrade);
        assert_eq!(ListingStatus::from_label("取引済"), ListingStatus::CompletedTrade);
        assert_eq!(ListingStatus::from_label("取引前"), ListingStatus::BeforeTrade);
        assert_eq!(ListingStatus::from_label("売り切れ"), ListingStatus::BeforeTrade);
        assert_eq!(ListingStatus::from_label(""), ListingStatus::BeforeTrade);
    }

    #[test]
    fn date_key_is_compact() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
        assert_eq!(date_key(&date), "20250412");
    }
}
