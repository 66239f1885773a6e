//! GitHub contents API host

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tracing::{debug, error};

use super::host::{ContentHost, ContentsFile, PutContents};
use super::{StoreError, StoreResult};
use crate::config::GithubSettings;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const CLIENT_USER_AGENT: &str = concat!("academy-admin/", env!("CARGO_PKG_VERSION"));

/// Write body as the contents API expects it
#[derive(Debug, Serialize)]
struct PutBody<'a> {
    #[serde(flatten)]
    contents: &'a PutContents,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

/// Reads and writes documents in a GitHub repository
///
/// Token and repository are checked on every call so a missing setting only
/// surfaces when storage is first used.
pub struct GithubHost {
    client: Client,
    api_url: String,
    token: Option<String>,
    repo: Option<String>,
    branch: Option<String>,
}

impl GithubHost {
    pub fn new(settings: &GithubSettings) -> Self {
        Self {
            client: Client::new(),
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            token: non_empty(settings.token.as_deref()),
            repo: non_empty(settings.repo.as_deref()),
            branch: non_empty(settings.branch.as_deref()),
        }
    }

    fn credentials(&self) -> StoreResult<(&str, &str)> {
        match (self.token.as_deref(), self.repo.as_deref()) {
            (Some(token), Some(repo)) => Ok((token, repo)),
            (None, _) => Err(StoreError::Configuration(
                "GitHub token is not set (ACADEMY_GITHUB_TOKEN)".to_string(),
            )),
            (_, None) => Err(StoreError::Configuration(
                "GitHub repository is not set (ACADEMY_GITHUB_REPO)".to_string(),
            )),
        }
    }

    fn contents_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.api_url,
            repo,
            path.trim_start_matches('/')
        )
    }

    fn request(&self, method: Method, url: &str, token: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT)
    }
}

#[async_trait]
impl ContentHost for GithubHost {
    async fn get_file(&self, path: &str) -> StoreResult<ContentsFile> {
        let (token, repo) = self.credentials()?;
        let url = self.contents_url(repo, path);
        debug!("Fetching {}", url);

        let mut request = self.request(Method::GET, &url, token);
        if let Some(branch) = &self.branch {
            request = request.query(&[("ref", branch)]);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| StoreError::fetch(path, None, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            debug!("GitHub responded {} for {}: {}", status, path, body);
            return Err(StoreError::fetch(
                path,
                Some(status.as_u16()),
                format!("GitHub API error: {}", status),
            ));
        }

        resp.json::<ContentsFile>()
            .await
            .map_err(|e| StoreError::fetch(path, None, format!("unexpected response: {}", e)))
    }

    async fn put_file(&self, path: &str, body: &PutContents) -> StoreResult<()> {
        let (token, repo) = self.credentials()?;
        let url = self.contents_url(repo, path);

        let payload = PutBody {
            contents: body,
            branch: self.branch.as_deref(),
        };

        let resp = self
            .request(Method::PUT, &url, token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| StoreError::write(path, None, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            error!("GitHub rejected write of {} ({}): {}", path, status, body);
            return Err(StoreError::write(
                path,
                Some(status.as_u16()),
                format!("GitHub API error: {}", status),
            ));
        }

        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
