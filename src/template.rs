use anyhow::Context;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::cache::TemplateCache;
use crate::error::{CliError, Result};

pub const TEMPLATE_API: &str = "https://www.gitignore.io/api";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECTION_HINT: &str = "check your connection and try again";

pub struct TemplateClient {
    client: Client,
    base_url: String,
}

impl TemplateClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(TEMPLATE_API)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("gitignore-cli/0.3")
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns the template as non-blank lines, served from the cache when
    /// possible. A successful fetch populates the cache before returning, so
    /// repeated calls for the same name stay off the network.
    ///
    /// `"list"` is a template name like any other; by convention the service
    /// answers it with a comma-separated catalog of available names.
    pub async fn fetch(&self, name: &str, cache: &mut TemplateCache) -> Result<Vec<String>> {
        if let Some(body) = cache.get(name) {
            return Ok(non_blank_lines(body));
        }

        let url = format!("{}/{}", self.base_url, name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|_| CliError::fetch_failed(name, CONNECTION_HINT))?;

        match response.status() {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(|_| CliError::fetch_failed(name, CONNECTION_HINT))?;
                let template = strip_service_boilerplate(&body);
                cache.set(name, template.join("\n"))?;
                Ok(template)
            }
            StatusCode::NOT_FOUND => Err(CliError::TemplateNotFound(name.to_string())),
            status => Err(CliError::fetch_failed(
                name,
                format!("the service returned {status}"),
            )),
        }
    }
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(String::from)
        .collect()
}

/// The service wraps every payload in two header lines and one footer line.
fn strip_service_boilerplate(body: &str) -> Vec<String> {
    let lines = non_blank_lines(body);
    if lines.len() <= 3 {
        return Vec::new();
    }
    lines[2..lines.len() - 1].to_vec()
}
