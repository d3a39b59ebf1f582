use anyhow::Result;
use log::{debug, warn};

use super::volume::{normalize, CatalogDocument, Volume};

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/jgfrigo2/apps_data/refs/heads/main/spidey/spidey.json";

/// Fetches and normalizes the remote catalog. A sync either fully replaces
/// the caller's volume collection or yields nothing: network errors, bad
/// statuses, and parse failures all collapse to an empty list.
pub async fn fetch_catalog(url: &str) -> Vec<Volume> {
    match try_fetch(url).await {
        Ok(volumes) => {
            debug!("catalog sync: {} volumes from {}", volumes.len(), url);
            volumes
        }
        Err(error) => {
            warn!("catalog sync failed: {:#}", error);
            Vec::new()
        }
    }
}

async fn try_fetch(url: &str) -> Result<Vec<Volume>> {
    let document = reqwest::get(url)
        .await?
        .error_for_status()?
        .json::<CatalogDocument>()
        .await?;

    Ok(normalize(document))
}
