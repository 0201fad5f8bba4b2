use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use crate::error::{GenError, GenResult};

pub const DEFAULT_LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

const USER_AGENT: &str = concat!("psl-gen/", env!("CARGO_PKG_VERSION"));

/// Download the list body with a single GET.
pub fn fetch_list(url: &str, timeout: Duration) -> GenResult<String> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    fetch_with_client(&client, url)
}

fn fetch_with_client(client: &Client, url: &str) -> GenResult<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(GenError::Runtime)?;
    runtime.block_on(fetch_list_async(client, url))
}

async fn fetch_list_async(client: &Client, url: &str) -> GenResult<String> {
    log::debug!("GET {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenError::Status {
            url: url.to_string(),
            status,
        });
    }

    let text = response.text().await?;
    log::info!("Fetched {} bytes from {}", text.len(), url);
    Ok(text)
}

/// Read a list from disk instead of the network.
pub fn read_list(path: &Path) -> GenResult<String> {
    let text = fs::read_to_string(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Read {} bytes from '{}'", text.len(), path.display());
    Ok(text)
}
