//! # Account models
//!
//! Two client-side views of a Studymap account:
//!
//! - [`UserInfo`]: name and email returned by sign-up. The password is only
//!   ever sent outward and is never kept in a model.
//! - [`SignedIn`]: the result of sign-in: the account plus the auth token the
//!   [`crate::Client`] has already persisted into the session.
//!
//! [`UserInfo::display_name`] falls back to the email when no name was given.

use serde::{Deserialize, Serialize};

use crate::proto;

/// Account information safe to keep in the UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

impl From<proto::User> for UserInfo {
    fn from(user: proto::User) -> Self {
        Self {
            name: user.name,
            email: user.email,
        }
    }
}

/// Outcome of a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedIn {
    pub token: String,
    pub user: UserInfo,
}

impl From<proto::SignInResponse> for SignedIn {
    fn from(response: proto::SignInResponse) -> Self {
        Self {
            token: response.token,
            user: UserInfo {
                name: response.name,
                email: response.email,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            name: String::new(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "ada@example.com");

        let user = UserInfo {
            name: "Ada".to_string(),
            ..user
        };
        assert_eq!(user.display_name(), "Ada");
    }
}
