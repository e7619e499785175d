use std::collections::BTreeMap;
use std::time::Duration;

use crate::models::stats::{CandidateResult, Stats};

use super::alert::AlertBoard;
use super::charts::Charts;
use super::poller::PollerHandle;
use super::session::Session;
use super::view::{LoginForm, Modal, RegisterForm, View};

#[derive(Clone, Debug, PartialEq)]
pub struct CandidateCard {
    pub id: u32,
    pub name: Option<String>,
    pub party: Option<String>,
    /// Absent until the first results load.
    pub votes: Option<u64>,
}

impl CandidateCard {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: None,
            party: None,
            votes: None,
        }
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Candidate {}", self.id))
    }

    pub fn vote_label(&self) -> Option<String> {
        self.votes.map(|votes| format!("{votes} votes"))
    }

    pub fn apply(&mut self, result: CandidateResult) {
        if result.name.is_some() {
            self.name = result.name;
        }
        if result.party.is_some() {
            self.party = result.party;
        }
        self.votes = Some(result.votes);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PendingVote {
    pub candidate_id: u32,
    pub candidate_name: String,
}

impl PendingVote {
    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to vote for {}? This action cannot be undone.",
            self.candidate_name
        )
    }
}

/// Admin counters as shown in their display slots.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsDisplay {
    pub total_votes: String,
    pub fraud_alerts: String,
    pub voter_turnout: String,
    pub avg_voting_time: String,
}

impl Default for StatsDisplay {
    fn default() -> Self {
        Self {
            total_votes: "0".to_owned(),
            fraud_alerts: "0".to_owned(),
            voter_turnout: "0%".to_owned(),
            avg_voting_time: "0s".to_owned(),
        }
    }
}

impl From<&Stats> for StatsDisplay {
    fn from(stats: &Stats) -> Self {
        Self {
            total_votes: group_thousands(stats.total_votes),
            fraud_alerts: group_thousands(stats.fraudulent_votes),
            voter_turnout: format!("{}%", stats.voter_turnout),
            avg_voting_time: format!("{}s", stats.avg_voting_time),
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Everything the view renders. Shared between the UI thread and request tasks.
pub struct AppState {
    pub session: Session,
    pub view: View,
    pub modal: Option<Modal>,
    pub alerts: AlertBoard,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub candidates: BTreeMap<u32, CandidateCard>,
    pub vote_controls_enabled: bool,
    pub pending_vote: Option<PendingVote>,
    pub stats: StatsDisplay,
    pub charts: Option<Charts>,
    pub auth_in_flight: bool,
    pub vote_in_flight: bool,
    pub stats_poller: Option<PollerHandle>,
}

impl AppState {
    pub fn new(alert_ttl: Duration) -> Self {
        Self {
            session: Session::default(),
            view: View::default(),
            modal: None,
            alerts: AlertBoard::new(alert_ttl),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            candidates: BTreeMap::new(),
            vote_controls_enabled: false,
            pending_vote: None,
            stats: StatsDisplay::default(),
            charts: None,
            auth_in_flight: false,
            vote_in_flight: false,
            stats_poller: None,
        }
    }

    pub fn vote_button_label(&self) -> &'static str {
        if self.session.has_voted() {
            "Vote Cast"
        } else {
            "Vote Now"
        }
    }

    pub fn entry_button_label(&self) -> &'static str {
        if self.session.has_voted() {
            "View Results"
        } else {
            "Vote Now"
        }
    }
}
