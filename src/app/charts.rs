use std::collections::BTreeMap;

use crate::models::stats::VotingPatterns;

use super::state::CandidateCard;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChartName {
    VoteDistribution,
    FraudSplit,
}

impl ChartName {
    pub fn title(self) -> &'static str {
        match self {
            ChartName::VoteDistribution => "Vote Distribution by Candidate",
            ChartName::FraudSplit => "Fraud Detection Analysis",
        }
    }
}

/// Anything that can display a labelled numeric series.
pub trait ChartSink {
    fn set_series(&mut self, name: ChartName, labels: Vec<String>, data: Vec<u64>);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

/// Series are rewritten in place; the chart set itself lives until the window closes.
#[derive(Clone, Debug)]
pub struct Charts {
    vote_distribution: Series,
    fraud_split: Series,
}

impl Charts {
    pub fn new() -> Self {
        Self {
            vote_distribution: Series::default(),
            fraud_split: Series {
                labels: vec!["Legitimate Votes".to_owned(), "Flagged Votes".to_owned()],
                data: vec![0, 0],
            },
        }
    }

    pub fn series(&self, name: ChartName) -> &Series {
        match name {
            ChartName::VoteDistribution => &self.vote_distribution,
            ChartName::FraudSplit => &self.fraud_split,
        }
    }

    pub fn apply_patterns(
        &mut self,
        patterns: &VotingPatterns,
        candidates: &BTreeMap<u32, CandidateCard>,
    ) {
        let (labels, data) = distribution_series(patterns, candidates);
        self.set_series(ChartName::VoteDistribution, labels, data);

        let fraud = &self.fraud_split;
        let labels = fraud.labels.clone();
        self.set_series(
            ChartName::FraudSplit,
            labels,
            vec![patterns.legitimate_total(), patterns.flagged_total()],
        );
    }
}

impl Default for Charts {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSink for Charts {
    fn set_series(&mut self, name: ChartName, labels: Vec<String>, data: Vec<u64>) {
        let series = match name {
            ChartName::VoteDistribution => &mut self.vote_distribution,
            ChartName::FraudSplit => &mut self.fraud_split,
        };
        series.labels = labels;
        series.data = data;
    }
}

/// One bar per known candidate, ordered by id; ids missing from the breakdown count zero.
fn distribution_series(
    patterns: &VotingPatterns,
    candidates: &BTreeMap<u32, CandidateCard>,
) -> (Vec<String>, Vec<u64>) {
    let mut ids: Vec<u32> = candidates.keys().copied().collect();
    ids.extend(patterns.candidate_distribution.keys().copied());
    ids.sort_unstable();
    ids.dedup();

    ids.into_iter()
        .map(|id| {
            let label = candidates
                .get(&id)
                .map(CandidateCard::display_name)
                .unwrap_or_else(|| format!("Candidate {id}"));
            let votes = patterns.candidate_distribution.get(&id).copied().unwrap_or(0);
            (label, votes)
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, name: &str) -> CandidateCard {
        CandidateCard {
            id,
            name: Some(name.to_owned()),
            party: None,
            votes: None,
        }
    }

    #[test]
    fn patterns_fill_both_series() {
        let mut candidates = BTreeMap::new();
        candidates.insert(1, card(1, "John Anderson"));
        candidates.insert(2, card(2, "Sarah Johnson"));
        candidates.insert(3, card(3, "Michael Chen"));

        let patterns = VotingPatterns {
            candidate_distribution: [(1, 20), (3, 7)].into_iter().collect(),
            fraud_by_hour: Some([(14, 2), (15, 1)].into_iter().collect()),
        };

        let mut charts = Charts::new();
        charts.apply_patterns(&patterns, &candidates);

        let votes = charts.series(ChartName::VoteDistribution);
        assert_eq!(
            votes.labels,
            vec!["John Anderson", "Sarah Johnson", "Michael Chen"]
        );
        assert_eq!(votes.data, vec![20, 0, 7]);

        let fraud = charts.series(ChartName::FraudSplit);
        assert_eq!(fraud.labels, vec!["Legitimate Votes", "Flagged Votes"]);
        assert_eq!(fraud.data, vec![27, 3]);
    }

    #[test]
    fn unknown_candidates_get_placeholder_labels() {
        let patterns = VotingPatterns {
            candidate_distribution: [(4, 1)].into_iter().collect(),
            fraud_by_hour: None,
        };
        let mut charts = Charts::new();
        charts.apply_patterns(&patterns, &BTreeMap::new());

        let votes = charts.series(ChartName::VoteDistribution);
        assert_eq!(votes.labels, vec!["Candidate 4"]);
        assert_eq!(charts.series(ChartName::FraudSplit).data, vec![1, 0]);
    }
}
