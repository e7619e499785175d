pub mod auth;
pub mod stats;
pub mod user;
pub mod vote;
