use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::Result;

/// Profile of the authenticated user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub developer: bool,
    pub created_time: i64,
    pub email: String,
    pub emails: Vec<Email>,
    pub storage: Storage,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
    pub primary: bool,
    pub confirmed: bool,
    pub email: String,
    pub gravatar: String,
}

/// Storage counters, in bytes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub used: u64,
    pub quota: u64,
    pub saved: u64,
}

/// Profile retrieval and update.
///
/// https://www.copy.com/developer/documentation#api-calls/profile
#[derive(Debug, Clone)]
pub struct UserService {
    client: Client,
}

const USER_ENDPOINT: &str = "user";

impl UserService {
    pub fn new(client: Client) -> Self {
        UserService { client }
    }

    /// Fetches the authenticated user.
    pub async fn get(&self) -> Result<User> {
        self.client.request_json(Method::GET, USER_ENDPOINT, &[]).await
    }

    /// Updates the profile and returns the server's view of it. Only first
    /// and last name are writable through the API.
    pub async fn update(&self, user: &User) -> Result<User> {
        let form = [
            ("first_name", user.first_name.as_str()),
            ("last_name", user.last_name.as_str()),
        ];
        self.client
            .request_json(Method::PUT, USER_ENDPOINT, &form)
            .await
    }
}
