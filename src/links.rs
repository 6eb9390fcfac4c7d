use http::Method;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::users::Email;
use crate::Result;

/// A shareable, optionally public, token-addressed reference to one or more
/// files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub id: String,
    pub public: bool,
    pub expires: bool,
    pub expired: bool,
    pub url: String,
    pub url_short: String,
    pub recipients: Vec<Recipient>,
    pub creator_id: String,
    pub confirmation_required: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipient {
    pub contact_type: String,
    pub contact_id: String,
    pub contact_source: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub permissions: String,
    pub emails: Vec<Email>,
}

/// Shared-link management.
///
/// https://www.copy.com/developer/documentation#api-calls/links
#[derive(Debug, Clone)]
pub struct LinkService {
    client: Client,
}

const LINKS_ENDPOINT: &str = "links";

impl LinkService {
    pub fn new(client: Client) -> Self {
        LinkService { client }
    }

    /// All links owned by the authenticated user.
    pub async fn list(&self) -> Result<Vec<Link>> {
        self.client
            .request_json(Method::GET, LINKS_ENDPOINT, &[])
            .await
    }

    /// The link addressed by `token`.
    pub async fn get(&self, token: &str) -> Result<Link> {
        self.client
            .request_json(Method::GET, &format!("{}/{}", LINKS_ENDPOINT, token), &[])
            .await
    }

    /// Creates a link over the given paths.
    pub async fn create(&self, name: &str, public: bool, paths: &[&str]) -> Result<Link> {
        let public = if public { "true" } else { "false" };
        let mut form: Vec<(&str, &str)> = vec![("name", name), ("public", public)];
        for path in paths {
            form.push(("paths[]", path));
        }
        self.client
            .request_json(Method::POST, LINKS_ENDPOINT, &form)
            .await
    }

    /// Revokes the link addressed by `token`.
    pub async fn delete(&self, token: &str) -> Result<()> {
        self.client
            .request_empty(Method::DELETE, &format!("{}/{}", LINKS_ENDPOINT, token), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_decodes_with_recipients() {
        let payload = r#"{
            "id": "link1",
            "public": true,
            "expires": true,
            "expired": false,
            "url": "https://copy.com/link1",
            "url_short": "https://copy.com/s1",
            "creator_id": "1381231",
            "confirmation_required": true,
            "recipients": [
                {
                    "contact_type": "person",
                    "contact_id": "fgffsd",
                    "contact_source": "copy",
                    "user_id": "3343",
                    "first_name": "Thomas",
                    "last_name": "Hunter",
                    "email": "thomashunter@example.com",
                    "permissions": "all",
                    "emails": [
                        {
                            "confirmed": true,
                            "primary": true,
                            "email": "thomashunter@example.com",
                            "gravatar": "eca957c6552e783627a0ced1035e1888"
                        }
                    ]
                }
            ]
        }"#;

        let link: Link = serde_json::from_str(payload).unwrap();
        assert_eq!(link.id, "link1");
        assert!(link.public);
        assert!(!link.expired);
        assert_eq!(link.recipients.len(), 1);
        assert_eq!(link.recipients[0].first_name, "Thomas");
        assert_eq!(link.recipients[0].emails[0].gravatar.len(), 32);
    }
}
