use std::future::Future;

use chrono::NaiveDate;
use tokio::time::{sleep, sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ScraperConfig;
use crate::extractors::ticketjam::extract_page;
use crate::models::{CombinedResult, ScrapeResult, StopReason, TeamOutcome};
use crate::utilities::fetch_page::{page_url, FetchError, FetchPage};
use crate::utilities::generate_random_delay::generate_random_delay;

/// Position of a team's pagination loop.
#[derive(Debug)]
enum PaginationState {
    Fetching { page: u32 },
    HasMore { next_page: u32 },
    Exhausted,
    Failed { page: u32, error: FetchError },
    Halted(StopReason),
}

enum Guarded<T> {
    Done(T),
    Cancelled,
    TimedOut,
}

/// Runs `work` unless the token is cancelled or the deadline passes first.
async fn guarded<T>(
    work: impl Future<Output = T>,
    cancel: &CancellationToken,
    deadline: Option<Instant>,
) -> Guarded<T> {
    let deadline_reached = async {
        match deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Guarded::Cancelled,
        _ = deadline_reached => Guarded::TimedOut,
        output = work => Guarded::Done(output),
    }
}

/// Follows a team's listing index page by page and collects every listing.
///
/// Pagination continues while a page advertises a next link, bounded by
/// `max_pages`, `max_empty_pages`, the per-team deadline and `cancel`. A page
/// that cannot be fetched contributes nothing and ends the loop; the failure
/// is kept in the returned [`StopReason`].
pub async fn scrape_team<F: FetchPage>(
    fetcher: &F,
    slug: &str,
    config: &ScraperConfig,
    fetch_date: NaiveDate,
    cancel: &CancellationToken,
) -> ScrapeResult {
    let deadline = config.team_timeout().map(|timeout| Instant::now() + timeout);

    let mut records = Vec::new();
    let mut pages_scraped = 0;
    let mut empty_streak = 0;
    let mut state = PaginationState::Fetching { page: 1 };

    let stop_reason = loop {
        state = match state {
            PaginationState::Fetching { page } => {
                let url = page_url(&config.base_url, slug, page);
                debug!(slug, page, %url, "fetching listing page");

                match guarded(fetcher.fetch_page(&url), cancel, deadline).await {
                    Guarded::Done(Ok(body)) => {
                        let extracted = extract_page(&body, fetch_date);
                        pages_scraped += 1;
                        info!(slug, page, listings = extracted.records.len(), "scraped listing page");

                        empty_streak = if extracted.records.is_empty() { empty_streak + 1 } else { 0 };
                        records.extend(extracted.records);

                        if !extracted.has_next {
                            PaginationState::Exhausted
                        } else if page >= config.max_pages {
                            warn!(slug, page, "page limit reached with a next link still present");
                            PaginationState::Halted(StopReason::PageLimit { max_pages: config.max_pages })
                        } else if config.max_empty_pages > 0 && empty_streak >= config.max_empty_pages {
                            warn!(slug, page, empty_streak, "too many consecutive empty pages");
                            PaginationState::Halted(StopReason::EmptyPages { count: empty_streak })
                        } else {
                            PaginationState::HasMore { next_page: page + 1 }
                        }
                    }
                    Guarded::Done(Err(error)) => {
                        warn!(slug, page, %error, "listing page failed");
                        PaginationState::Failed { page, error }
                    }
                    Guarded::Cancelled => PaginationState::Halted(StopReason::Cancelled),
                    Guarded::TimedOut => PaginationState::Halted(StopReason::TimedOut),
                }
            }
            PaginationState::HasMore { next_page } => {
                let delay = generate_random_delay(config.delay_min_ms, config.delay_max_ms);
                debug!(slug, delay_ms = delay.as_millis() as u64, "waiting before next page");

                match guarded(sleep(delay), cancel, deadline).await {
                    Guarded::Done(()) => PaginationState::Fetching { page: next_page },
                    Guarded::Cancelled => PaginationState::Halted(StopReason::Cancelled),
                    Guarded::TimedOut => PaginationState::Halted(StopReason::TimedOut),
                }
            }
            PaginationState::Exhausted => break StopReason::LastPage,
            PaginationState::Failed { page, error } => break StopReason::FetchFailed { page, error },
            PaginationState::Halted(reason) => break reason,
        };
    };

    info!(slug, pages_scraped, listings = records.len(), reason = %stop_reason, "pagination finished");

    ScrapeResult {
        slug: slug.to_string(),
        records,
        pages_scraped,
        stop_reason,
    }
}

/// Scrapes each team in turn and concatenates the results in the given order.
pub async fn scrape_teams<F, I, S>(
    fetcher: &F,
    slugs: I,
    config: &ScraperConfig,
    fetch_date: NaiveDate,
    cancel: &CancellationToken,
) -> CombinedResult
where
    F: FetchPage,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut combined = CombinedResult::default();

    for slug in slugs {
        let result = scrape_team(fetcher, slug.as_ref(), config, fetch_date, cancel).await;

        match result.outcome() {
            TeamOutcome::Succeeded => info!(slug = %result.slug, "team scrape succeeded"),
            outcome => warn!(slug = %result.slug, %outcome, reason = %result.stop_reason, "team scrape incomplete"),
        }

        combined.push(result);
    }

    combined
}
