use crate::error::ApiError;
use crate::models::vote::{VoteRequest, VoteResponse};
use log::{debug, error, info, warn};
use reqwest::Client;

use super::decode_outcome;

pub async fn cast_vote(
    client: &Client,
    base_url: &str,
    request: &VoteRequest,
) -> Result<VoteResponse, ApiError> {
    debug!("Casting vote: {:?}", request);
    let url = format!("{}/vote", base_url);
    let resp = client.post(&url).json(request).send().await?;
    let response = decode_outcome::<VoteResponse>(resp).await?;
    if response.success {
        info!("Vote recorded for candidate {}", request.candidate_id);
    } else if response.fraud_detected {
        warn!("Vote for candidate {} flagged as suspicious", request.candidate_id);
    } else {
        error!("Vote rejected: {:?}", response.message);
    }
    Ok(response)
}
