use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Identity {
    /// The server may omit it.
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub voted: bool,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct UserStatus {
    #[serde(default)]
    pub user: Option<Identity>,
}
