// src/fixtures.rs

//! Static fixture data: banners, the demo user, and the credential check.

use crate::constants::{BANNER_COUNT, LOGIN_PASSWORD, LOGIN_USERNAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub image: String,
}

/// The single demo account returned by `/login` and `/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub nickname: String,
    pub avatar: String,
    pub email: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserProfile,
}

/// Builds the banner list with image URLs below `base_url`.
pub fn banners(base_url: &str) -> Vec<Banner> {
    (1..=BANNER_COUNT)
        .map(|n| Banner {
            id: n.to_string(),
            image: format!("{}/assets/images/banners/banner{}.jpg", base_url, n),
        })
        .collect()
}

pub fn user_profile(base_url: &str) -> UserProfile {
    UserProfile {
        id: "1".to_string(),
        username: LOGIN_USERNAME.to_string(),
        nickname: "Mock User".to_string(),
        avatar: format!("{}/assets/images/avatar.jpg", base_url),
        email: "admin@example.com".to_string(),
    }
}

/// Constant-credential check. Anything missing is a mismatch.
pub fn credentials_match(username: Option<&str>, password: Option<&str>) -> bool {
    username == Some(LOGIN_USERNAME) && password == Some(LOGIN_PASSWORD)
}
