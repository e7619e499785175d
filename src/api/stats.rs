use crate::error::ApiError;
use crate::models::stats::{Results, Stats, VotingPatterns};
use log::{error, info};
use reqwest::Client;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
) -> Result<T, ApiError> {
    let url = format!("{}/{}", base_url, path);
    let resp = client.get(&url).send().await?;
    if resp.status().is_success() {
        let response = resp.json::<T>().await?;
        info!("{} received successfully", path);
        Ok(response)
    } else {
        error!("Failed to get {}: {}", path, resp.status());
        Err(ApiError::Status(resp.status()))
    }
}

pub async fn get_results(client: &Client, base_url: &str) -> Result<Results, ApiError> {
    get_json(client, base_url, "results").await
}

pub async fn get_stats(client: &Client, base_url: &str) -> Result<Stats, ApiError> {
    get_json(client, base_url, "stats").await
}

pub async fn get_voting_patterns(
    client: &Client,
    base_url: &str,
) -> Result<VotingPatterns, ApiError> {
    get_json(client, base_url, "voting-patterns").await
}
