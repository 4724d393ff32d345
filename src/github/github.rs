use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_USER: &str = "jayprajapati-dev";
pub const API_BASE: &str = "https://api.github.com";
pub const PROJECTS_FAILED: &str = "Failed to load projects. Please try again later.";
/// Cards shown before the list is collapsed behind "show more".
pub const VISIBLE_PROJECTS: usize = 4;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url}: HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Source of raw API responses, keyed by path under the API root.
pub trait Fetch {
    fn get(&self, path: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, path: &str) -> Result<String, FetchError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        debug!(%url, "GET");
        let resp = self.client.get(&url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(resp.text()?)
    }
}

fn get_json<T: DeserializeOwned>(fetch: &dyn Fetch, path: &str) -> Result<T, FetchError> {
    let body = fetch.get(path)?;
    Ok(serde_json::from_str(&body)?)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub fork: bool,
}

#[derive(Debug, Deserialize)]
struct User {
    #[serde(default)]
    followers: Option<u64>,
    #[serde(default)]
    public_repos: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Event {
    #[serde(rename = "type")]
    kind: String,
}

/// Own repositories, most starred first.
pub fn fetch_projects(fetch: &dyn Fetch, user: &str) -> Result<Vec<Project>, FetchError> {
    let mut projects: Vec<Project> = get_json(fetch, &format!("/users/{user}/repos"))?;
    projects.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    projects.retain(|p| !p.fork);
    debug!(count = projects.len(), "fetched projects");
    Ok(projects)
}

/// Case-insensitive match on name or description. An empty term keeps all.
pub fn filter_projects<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    let term = term.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&term))
        })
        .collect()
}

pub fn render_projects(result: &Result<Vec<Project>, FetchError>, show_all: bool) -> Vec<String> {
    let projects = match result {
        Ok(projects) => projects,
        Err(_) => return vec![PROJECTS_FAILED.to_string()],
    };

    let shown = if show_all {
        projects.len()
    } else {
        projects.len().min(VISIBLE_PROJECTS)
    };
    let mut out: Vec<String> = projects[..shown]
        .iter()
        .map(|p| format!("{} ({}★) {}", p.name, p.stargazers_count, p.html_url))
        .collect();
    if shown < projects.len() {
        out.push(format!("... {} more (use --all)", projects.len() - shown));
    }
    out
}

/// A counter, or the placeholder when it is unknown or zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Count(u64),
    Unavailable,
}

impl From<Option<u64>> for Stat {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(n) if n > 0 => Stat::Count(n),
            _ => Stat::Unavailable,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Count(n) => write!(f, "{n}"),
            Stat::Unavailable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub followers: Stat,
    pub repositories: Stat,
    pub languages: Stat,
    pub contributions: Stat,
}

impl ProfileStats {
    pub fn unavailable() -> Self {
        Self {
            followers: Stat::Unavailable,
            repositories: Stat::Unavailable,
            languages: Stat::Unavailable,
            contributions: Stat::Unavailable,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Followers:     {}", self.followers),
            format!("Repositories:  {}", self.repositories),
            format!("Languages:     {}", self.languages),
            format!("Contributions: {}", self.contributions),
        ]
    }
}

pub fn try_fetch_stats(fetch: &dyn Fetch, user: &str) -> Result<ProfileStats, FetchError> {
    let profile: User = get_json(fetch, &format!("/users/{user}"))?;

    let repos: Vec<Project> = get_json(fetch, &format!("/users/{user}/repos"))?;
    let languages: BTreeSet<&str> = repos.iter().filter_map(|r| r.language.as_deref()).collect();

    let events: Vec<Event> = get_json(fetch, &format!("/users/{user}/events"))?;
    let pushes = events.iter().filter(|e| e.kind == "PushEvent").count();

    Ok(ProfileStats {
        followers: profile.followers.into(),
        repositories: profile.public_repos.into(),
        languages: Some(languages.len() as u64).into(),
        contributions: Some(pushes as u64).into(),
    })
}

/// Any failure turns every counter into the placeholder.
pub fn fetch_stats(fetch: &dyn Fetch, user: &str) -> ProfileStats {
    try_fetch_stats(fetch, user).unwrap_or_else(|e| {
        warn!("fetching profile stats for {user}: {e}");
        ProfileStats::unavailable()
    })
}
