use console::style;

use crate::domain::AuthorProfile;

/// Print an author card, skipping fields the profile doesn't carry.
/// Callers have already routed the "not found" case away.
pub fn render(profile: &AuthorProfile) {
    if let Some(name) = &profile.name {
        println!("{}", style(name).cyan().bold());
    }
    if let Some(username) = &profile.username {
        println!("{}", style(format!("@{username}")).dim());
    }
    if let Some(summary) = &profile.summary {
        if !summary.is_empty() {
            println!("\n{summary}");
        }
    }

    println!();
    field("Location", profile.location.as_deref());
    field("Joined", profile.joined_at.as_deref());
    field(
        "Followers",
        profile.followers_count.map(|n| n.to_string()).as_deref(),
    );
    field("Website", profile.website_url.as_deref());
    field(
        "GitHub",
        profile
            .github_username
            .as_ref()
            .map(|h| format!("@{h}"))
            .as_deref(),
    );
    field(
        "Twitter",
        profile
            .twitter_username
            .as_ref()
            .map(|h| format!("@{h}"))
            .as_deref(),
    );
}

fn field(label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        println!("{:>10}  {}", style(label).green(), value);
    }
}
