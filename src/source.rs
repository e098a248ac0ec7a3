//! # Data Source Adapter
//!
//! The member collection comes from exactly one place: a one-shot fetch at
//! session startup. [`MemberSource`] is the seam; [`HttpSource`] is the
//! production implementation (HTTP GET, JSON array of members), and
//! [`StaticSource`] serves canned data for tests and offline embedding.
//!
//! Failure handling is deliberately blunt: any failure (network, non-2xx
//! status, malformed payload) leaves the collection empty, gets logged, and
//! becomes observable through the session's `load_error`. There is no retry
//! and no partial load.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Member;

/// Where the initial member collection comes from.
#[async_trait]
pub trait MemberSource {
    /// Retrieve the full member collection, or fail as a unit.
    async fn fetch(&self) -> Result<Vec<Member>>;
}

/// Production source: HTTP GET against a fixed URL returning a JSON array
/// shaped `[{"id", "name", "email", "role"}, ...]`.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MemberSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Member>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let members = response.json::<Vec<Member>>().await?;
        Ok(members)
    }
}

/// Canned source for tests and offline use.
pub struct StaticSource {
    members: Vec<Member>,
}

impl StaticSource {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl MemberSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Member>> {
        Ok(self.members.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::RosterError;

    /// Source that always fails, for exercising the load-failure path.
    pub struct FailingSource {
        message: String,
    }

    impl FailingSource {
        pub fn new(message: impl Into<String>) -> Self {
            Self {
                message: message.into(),
            }
        }
    }

    #[async_trait]
    impl MemberSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Member>> {
            Err(RosterError::Source(self.message.clone()))
        }
    }

    pub fn roster(count: usize) -> Vec<Member> {
        (1..=count)
            .map(|i| {
                let role = if i % 5 == 0 { "Admin" } else { "member" };
                Member::new(
                    i.to_string().as_str(),
                    format!("User {i}"),
                    format!("user{i}@example.com"),
                    role,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::FailingSource;
    use super::*;
    use crate::error::RosterError;

    #[tokio::test]
    async fn static_source_returns_its_members() {
        let source = StaticSource::new(fixtures::roster(3));
        let members = source.fetch().await.unwrap();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].name, "User 1");
    }

    #[tokio::test]
    async fn failing_source_reports_its_message() {
        let source = FailingSource::new("connection refused");
        match source.fetch().await {
            Err(RosterError::Source(msg)) => assert_eq!(msg, "connection refused"),
            other => panic!("expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn wire_payload_decodes_to_members() {
        let payload = r#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"admin"}
        ]"#;
        let members: Vec<Member> = serde_json::from_str(payload).unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].role, "admin");
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_panic() {
        let payload = r#"{"not":"an array"}"#;
        assert!(serde_json::from_str::<Vec<Member>>(payload).is_err());
    }

    #[test]
    fn http_source_keeps_its_url() {
        let source = HttpSource::new("https://example.com/members.json");
        assert_eq!(source.url(), "https://example.com/members.json");
    }
}
