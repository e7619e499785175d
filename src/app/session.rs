use std::time::Instant;

use crate::models::user::Identity;

#[derive(Default, Debug)]
pub struct Session {
    pub user: Option<Identity>,
    pub vote_started: Option<Instant>,
}

impl Session {
    pub fn sign_in(&mut self, user: Identity) {
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.vote_started = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_voted(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.voted)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.is_admin)
    }

    /// Once set, `voted` is never reset on the client.
    pub fn mark_voted(&mut self) {
        if let Some(user) = self.user.as_mut() {
            user.voted = true;
        }
    }

    pub fn start_vote_timer(&mut self, now: Instant) {
        self.vote_started = Some(now);
    }

    /// Seconds since the dashboard was opened, or `fallback` without a start time.
    pub fn voting_duration(&self, now: Instant, fallback: f64) -> f64 {
        self.vote_started
            .map(|started| now.saturating_duration_since(started).as_secs_f64())
            .unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn voter() -> Identity {
        Identity {
            id: Some(7),
            name: "Alice Johnson".to_owned(),
            email: "voter1@example.com".to_owned(),
            voted: false,
            is_admin: false,
        }
    }

    #[test]
    fn duration_falls_back_without_timer() {
        let session = Session::default();
        assert_eq!(session.voting_duration(Instant::now(), 5.0), 5.0);
    }

    #[test]
    fn duration_measures_from_dashboard_entry() {
        let mut session = Session::default();
        let opened = Instant::now();
        session.start_vote_timer(opened);
        let duration = session.voting_duration(opened + Duration::from_millis(12_500), 5.0);
        assert!((duration - 12.5).abs() < 1e-9);
    }

    #[test]
    fn clear_forgets_user_and_timer() {
        let mut session = Session::default();
        session.sign_in(voter());
        session.mark_voted();
        session.start_vote_timer(Instant::now());
        assert!(session.has_voted());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(!session.has_voted());
        assert!(session.vote_started.is_none());
    }
}
