use crate::config::JobSettings;
use crate::core::source::fetch_or_fallback;
use crate::core::{FallibleSource, JobListing};
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const LISTING_SELECTOR: &str = ".job-listing, .job-card, .job-result";
const TITLE_SELECTOR: &str = ".job-title, .title";
const COMPANY_SELECTOR: &str = ".company, .employer";
const LOCATION_SELECTOR: &str = ".location, .job-location";
const LISTINGS_PER_BOARD: usize = 3;

const SYNTHETIC_ROLES: [&str; 2] = ["Developer", "Engineer"];
const SYNTHETIC_COMPANIES: [&str; 5] = ["TechCorp", "Innovate Ltd", "Future Systems", "Global Tech", "NextGen"];
const SYNTHETIC_LOCATIONS: [&str; 5] = ["Remote", "Bangalore, India", "San Francisco, CA", "London, UK", "Hybrid"];

/// A job board search page with a `{domain}` placeholder in its URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBoard {
    pub name: String,
    pub url_template: String,
    /// Boards that expect `data-science` style path segments instead of `data%20science`.
    #[serde(default)]
    pub hyphenate: bool,
}

impl JobBoard {
    pub fn new(name: &str, url_template: &str) -> Self {
        Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
            hyphenate: false,
        }
    }

    pub fn defaults() -> Vec<JobBoard> {
        vec![
            JobBoard::new("LinkedIn", "https://www.linkedin.com/jobs/search/?keywords={domain}"),
            JobBoard::new("Glassdoor", "https://www.glassdoor.com/Job/jobs.htm?sc.keyword={domain}"),
            JobBoard::new("Internshala", "https://internshala.com/jobs/keyword-{domain}"),
            JobBoard::new("Indeed", "https://www.indeed.com/jobs?q={domain}"),
            JobBoard {
                hyphenate: true,
                ..JobBoard::new("Naukri", "https://www.naukri.com/{domain}-jobs")
            },
        ]
    }

    pub fn url_for(&self, domain: &str) -> String {
        let query = if self.hyphenate {
            urlencoding::encode(&domain.trim().replace(' ', "-")).into_owned()
        } else {
            urlencoding::encode(domain.trim()).into_owned()
        };
        self.url_template.replace("{domain}", &query)
    }
}

pub struct JobFetcher {
    client: Client,
    boards: Vec<JobBoard>,
    max_listings: usize,
    rng: Mutex<StdRng>,
}

impl JobFetcher {
    pub fn new(settings: &JobSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;

        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            client,
            boards: settings.boards.clone(),
            max_listings: settings.max_listings,
            rng: Mutex::new(rng),
        })
    }

    pub fn boards(&self) -> &[JobBoard] {
        &self.boards
    }

    /// Queries every board in order, one at a time. Boards that fail or
    /// return nothing contribute synthetic listings instead.
    pub async fn fetch(&self, domain: &str) -> Vec<JobListing> {
        let mut jobs = Vec::new();

        for board in &self.boards {
            let query = BoardQuery {
                fetcher: self,
                board,
                domain,
            };
            jobs.extend(fetch_or_fallback(&query).await);
        }

        tracing::info!("Collected {} job listings for {}", jobs.len(), domain);
        jobs.truncate(self.max_listings);
        jobs
    }

    async fn scrape(&self, board: &JobBoard, domain: &str) -> std::result::Result<Vec<JobListing>, FetchError> {
        let url = board.url_for(domain);
        let request_error = |source: reqwest::Error| FetchError::Request {
            platform: board.name.clone(),
            source,
        };

        tracing::debug!("Fetching jobs from {}: {}", board.name, url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(request_error)?;
        let body = response.text().await.map_err(request_error)?;

        let listings = parse_listings(&body, domain, &board.name, &url)?;
        if listings.is_empty() {
            return Err(FetchError::NoListings {
                platform: board.name.clone(),
            });
        }
        Ok(listings)
    }

    fn synthetic_listings(&self, board: &JobBoard, domain: &str) -> Vec<JobListing> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        SYNTHETIC_ROLES
            .iter()
            .map(|role| JobListing {
                job_title: format!("{} {}", domain, role),
                company: SYNTHETIC_COMPANIES.choose(&mut *rng).copied().unwrap_or_default().to_string(),
                location: SYNTHETIC_LOCATIONS.choose(&mut *rng).copied().unwrap_or_default().to_string(),
                platform: board.name.clone(),
                link: board.url_for(domain),
                posted_date: "Recent".to_string(),
                description: format!("Exciting opportunity in {} with {}", domain, board.name),
            })
            .collect()
    }
}

struct BoardQuery<'a> {
    fetcher: &'a JobFetcher,
    board: &'a JobBoard,
    domain: &'a str,
}

#[async_trait]
impl FallibleSource for BoardQuery<'_> {
    type Item = JobListing;
    type Error = FetchError;

    fn label(&self) -> &str {
        &self.board.name
    }

    async fn try_fetch(&self) -> std::result::Result<Vec<JobListing>, FetchError> {
        self.fetcher.scrape(self.board, self.domain).await
    }

    fn fallback(&self) -> Vec<JobListing> {
        self.fetcher.synthetic_listings(self.board, self.domain)
    }
}

fn selector(css: &str) -> std::result::Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Applies the generic listing selectors to a board page.
pub fn parse_listings(
    html: &str,
    domain: &str,
    platform: &str,
    page_url: &str,
) -> std::result::Result<Vec<JobListing>, FetchError> {
    let listing_sel = selector(LISTING_SELECTOR)?;
    let title_sel = selector(TITLE_SELECTOR)?;
    let anchor_sel = selector("a")?;
    let company_sel = selector(COMPANY_SELECTOR)?;
    let location_sel = selector(LOCATION_SELECTOR)?;

    let document = Html::parse_document(html);
    let base = Url::parse(page_url).ok();

    let listings = document
        .select(&listing_sel)
        .take(LISTINGS_PER_BOARD)
        .map(|job| {
            let title = job
                .select(&title_sel)
                .next()
                .or_else(|| job.select(&anchor_sel).next());
            let company = job.select(&company_sel).next().map(element_text);
            let location = job.select(&location_sel).next().map(element_text);

            // 標題本身或其內部的第一個連結
            let link = title
                .and_then(|t| {
                    t.value()
                        .attr("href")
                        .or_else(|| t.select(&anchor_sel).next().and_then(|a| a.value().attr("href")))
                })
                .and_then(|href| match &base {
                    Some(base) => base.join(href).ok().map(String::from),
                    None => Some(href.to_string()),
                })
                .unwrap_or_else(|| page_url.to_string());

            JobListing {
                job_title: title
                    .map(element_text)
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| format!("{} Job", domain)),
                company: company
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| "Unknown Company".to_string()),
                location: location
                    .filter(|l| !l.is_empty())
                    .unwrap_or_else(|| "Remote/Unknown".to_string()),
                platform: platform.to_string(),
                link,
                posted_date: "Recent".to_string(),
                description: "Visit the link for more details".to_string(),
            }
        })
        .collect();

    Ok(listings)
}
