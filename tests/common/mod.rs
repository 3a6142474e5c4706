#![allow(dead_code)]

use std::cell::RefCell;

use soccer_ticket_scrapping::config::ScraperConfig;
use soccer_ticket_scrapping::utilities::fetch_page::{FetchError, FetchPage};

pub const BASE_URL: &str = "https://ticketjam.test/tickets";

pub enum Reply {
    Page(String),
    Status(u16),
    Hang,
}

/// Stand-in for the resale site: answers each URL through `respond` and
/// remembers every URL requested.
pub struct ScriptedSite<R: Fn(&str) -> Reply> {
    respond: R,
    requests: RefCell<Vec<String>>,
}

impl<R: Fn(&str) -> Reply> ScriptedSite<R> {
    pub fn new(respond: R) -> Self {
        ScriptedSite {
            respond,
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl<R: Fn(&str) -> Reply> FetchPage for ScriptedSite<R> {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        match (self.respond)(url) {
            Reply::Page(body) => Ok(body),
            Reply::Status(status) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            Reply::Hang => std::future::pending().await,
        }
    }
}

pub fn test_config() -> ScraperConfig {
    ScraperConfig {
        base_url: BASE_URL.to_string(),
        delay_min_ms: 0,
        delay_max_ms: 0,
        team_timeout_secs: 0,
        ..ScraperConfig::default()
    }
}

pub fn url(slug: &str, page: u32) -> String {
    if page == 1 {
        format!("{}/{}", BASE_URL, slug)
    } else {
        format!("{}/{}?page={}", BASE_URL, slug, page)
    }
}

/// Page number encoded in a listing URL.
pub fn page_of(url: &str) -> u32 {
    url.rsplit_once("?page=")
        .and_then(|(_, page)| page.parse().ok())
        .unwrap_or(1)
}

pub fn listing_item(event_name: &str, price: &str) -> String {
    format!(
        r#"<div class="eventlist__item active">
             <div class="eventlist__title">{} <small>J1</small></div>
             <div class="venue">2025/05/03(土) 15:00</div>
             <div class="eventlist__description">バックスタンド自由席</div>
             <span class="u-text-vivid-red u-text-size-md font-weight-bold">{}</span>
             <span class="ml-1 bold sell-true">残り2枚</span>
             <div class="eventlist__links"><a href="/detail">詳細</a></div>
           </div>"#,
        event_name, price
    )
}

/// A listing page; `next` adds a `rel="next"` link to that page number.
pub fn listing_page(items: &[String], next: Option<u32>) -> String {
    let pagination = match next {
        Some(page) => format!(r#"<nav class="pagination"><a rel="next" href="?page={}">次へ</a></nav>"#, page),
        None => r#"<nav class="pagination"><span class="current">1</span></nav>"#.to_string(),
    };

    format!(
        "<html><body><div class=\"eventlist\">{}</div>{}</body></html>",
        items.concat(),
        pagination
    )
}
