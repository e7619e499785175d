use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CandidateResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    pub votes: u64,
}

/// `/results` keys candidates by id.
pub type Results = BTreeMap<u32, CandidateResult>;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_votes: u64,
    pub fraudulent_votes: u64,
    pub voter_turnout: f64,
    pub avg_voting_time: f64,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VotingPatterns {
    #[serde(default)]
    pub candidate_distribution: BTreeMap<u32, u64>,
    #[serde(default)]
    pub fraud_by_hour: Option<BTreeMap<u32, u64>>,
}

impl VotingPatterns {
    pub fn legitimate_total(&self) -> u64 {
        self.candidate_distribution.values().sum()
    }

    pub fn flagged_total(&self) -> u64 {
        self.fraud_by_hour
            .as_ref()
            .map(|by_hour| by_hour.values().sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_keys_parse_as_candidate_ids() {
        let body = r#"{
            "1": {"name": "John Anderson", "party": "Progressive Alliance Party", "votes": 17},
            "3": {"votes": 4}
        }"#;
        let results: Results = serde_json::from_str(body).unwrap();
        assert_eq!(results[&1].votes, 17);
        assert_eq!(results[&1].name.as_deref(), Some("John Anderson"));
        assert_eq!(results[&3].name, None);
    }

    #[test]
    fn pattern_totals() {
        let body = r#"{"candidate_distribution": {"1": 10, "2": 5},
                       "fraud_by_hour": {"9": 2, "23": 1}}"#;
        let patterns: VotingPatterns = serde_json::from_str(body).unwrap();
        assert_eq!(patterns.legitimate_total(), 15);
        assert_eq!(patterns.flagged_total(), 3);

        let without_fraud: VotingPatterns =
            serde_json::from_str(r#"{"candidate_distribution": {"1": 1}}"#).unwrap();
        assert_eq!(without_fraud.flagged_total(), 0);
    }
}
