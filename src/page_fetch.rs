use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::{debug, info};

pub const DEFAULT_STANDINGS_URL: &str = "http://www.ussoccerda.com/sam/standings/regevent/index.php?containerId=MzgzNDMwMA%3D%3D&partialGames=0";

/// GET `url` and return the body. The response is consumed here, so the connection is
/// released before any parsing starts.
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    info!(url, "fetching standings page");
    let resp = client
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .header(ACCEPT, "text/html")
        .send()
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!("http {status} from {url}"));
    }
    debug!(bytes = body.len(), "page body read");
    Ok(body)
}
