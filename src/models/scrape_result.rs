use std::fmt;

use crate::models::listing::ListingRecord;
use crate::utilities::fetch_page::FetchError;

/// Why a team's pagination loop ended.
#[derive(Debug)]
pub enum StopReason {
    /// The last fetched page had no next link.
    LastPage,
    /// A page could not be fetched; it contributed no records.
    FetchFailed { page: u32, error: FetchError },
    /// The configured page cap was reached while a next link was still present.
    PageLimit { max_pages: u32 },
    /// Too many consecutive pages without listings.
    EmptyPages { count: u32 },
    Cancelled,
    TimedOut,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::LastPage => write!(f, "reached last page"),
            StopReason::FetchFailed { page, error } => write!(f, "page {} failed: {}", page, error),
            StopReason::PageLimit { max_pages } => write!(f, "stopped at page limit ({})", max_pages),
            StopReason::EmptyPages { count } => write!(f, "stopped after {} empty pages", count),
            StopReason::Cancelled => write!(f, "cancelled"),
            StopReason::TimedOut => write!(f, "timed out"),
        }
    }
}

/// User-facing verdict for one team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamOutcome {
    Succeeded,
    PartiallySucceeded,
    Failed,
}

impl fmt::Display for TeamOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TeamOutcome::Succeeded => "succeeded",
            TeamOutcome::PartiallySucceeded => "partially succeeded",
            TeamOutcome::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Records of one team, in page then document order.
#[derive(Debug)]
pub struct ScrapeResult {
    pub slug: String,
    pub records: Vec<ListingRecord>,
    /// Pages whose markup was fetched and extracted.
    pub pages_scraped: u32,
    pub stop_reason: StopReason,
}

impl ScrapeResult {
    pub fn outcome(&self) -> TeamOutcome {
        match (&self.stop_reason, self.pages_scraped) {
            (StopReason::LastPage, _) => TeamOutcome::Succeeded,
            (_, 0) => TeamOutcome::Failed,
            _ => TeamOutcome::PartiallySucceeded,
        }
    }
}

/// Results of every team selected in one run, in selection order.
#[derive(Debug, Default)]
pub struct CombinedResult {
    pub teams: Vec<ScrapeResult>,
}

impl CombinedResult {
    pub fn push(&mut self, result: ScrapeResult) {
        self.teams.push(result);
    }

    /// All records, team after team.
    pub fn records(&self) -> impl Iterator<Item = &ListingRecord> + '_ {
        self.teams.iter().flat_map(|team| team.records.iter())
    }

    pub fn len(&self) -> usize {
        self.teams.iter().map(|team| team.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
