use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Request rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("Vote flagged as suspicious")]
    FraudFlagged { message: Option<String> },
}

/// Local checks that fail before any request is sent. The message is shown verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Please login to vote")]
    NotAuthenticated,

    #[error("You have already voted!")]
    AlreadyVoted,

    #[error("Access denied. Admin privileges required.")]
    NotAdmin,
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    Ok(())
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    min_len: usize,
) -> Result<(), ValidationError> {
    if [name, email, password, confirm_password]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(ValidationError::MissingFields);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < min_len {
        return Err(ValidationError::PasswordTooShort { min: min_len });
    }
    Ok(())
}
