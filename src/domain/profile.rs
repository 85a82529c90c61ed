use serde::Deserialize;

/// An author's profile as the users endpoint returns it. Every field is
/// optional: a missing `name` is the "no such author" signal, so an
/// unknown username deserializes into the default (empty) profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
}

impl AuthorProfile {
    pub fn is_found(&self) -> bool {
        self.name.is_some()
    }
}
