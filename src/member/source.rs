//! # Member Source
//!
//! Loads the member list once at startup, either over HTTP or from a local
//! JSON file carrying the same payload.

use super::Member;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Public dataset the admin table is built around.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Parse a JSON array of members.
pub fn parse_members(content: &str) -> Result<Vec<Member>> {
    serde_json::from_str(content).context("Failed to parse member list")
}

/// Fetch the member list with a single unauthenticated GET.
pub async fn fetch_members(url: &str) -> Result<Vec<Member>> {
    tracing::info!(url, "fetching member list");

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("Failed to request member list: {url}"))?
        .error_for_status()
        .with_context(|| format!("Member source returned an error status: {url}"))?;

    let body = response
        .text()
        .await
        .with_context(|| format!("Failed to read member list body: {url}"))?;

    let members = parse_members(&body).with_context(|| format!("Invalid payload from {url}"))?;
    tracing::info!(count = members.len(), "member list fetched");
    Ok(members)
}

/// Load the member list from a JSON file on disk.
pub fn load_members_from_file(path: &Path) -> Result<Vec<Member>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read member file: {}", path.display()))?;
    parse_members(&content).with_context(|| format!("Invalid member file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_members_valid() {
        let content = r#"[
  {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
  {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
]"#;
        let members = parse_members(content).expect("parse");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "Aaron Miles");
        assert_eq!(members[1].role, "admin");
        assert!(members.iter().all(|m| !m.selected));
    }

    #[test]
    fn test_parse_members_keeps_negative_ids() {
        let content = r#"[
  {"id": -1, "name": "Ghost", "email": "ghost@x.com", "role": "member"},
  {"id": 2, "name": "Bob", "email": "bob@x.com", "role": "admin"}
]"#;
        let members = parse_members(content).expect("parse");
        let ids: Vec<_> = members.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![-1, 2]);
    }

    #[test]
    fn test_parse_members_empty_array() {
        let members = parse_members("[]").expect("parse");
        assert!(members.is_empty());
    }

    #[test]
    fn test_parse_members_malformed() {
        assert!(parse_members("{not json").is_err());
        assert!(parse_members(r#"{"id": 1}"#).is_err());
        assert!(parse_members(r#"[{"id": 1, "name": "x"}]"#).is_err());
    }

    #[test]
    fn test_load_members_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("members.json");
        fs::write(
            &path,
            r#"[{"id": 3, "name": "Bob", "email": "b@x.com", "role": "member"}]"#,
        )
        .expect("write");

        let members = load_members_from_file(&path).expect("load");
        assert_eq!(members, vec![Member::new(3, "Bob", "b@x.com", "member")]);
    }

    #[test]
    fn test_load_members_from_missing_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("missing.json");

        let err = load_members_from_file(&path).expect_err("missing file");
        assert!(err.to_string().contains("Failed to read member file"));
    }

    #[tokio::test]
    async fn test_fetch_members_invalid_url() {
        let result = fetch_members("not a url").await;
        assert!(result.is_err());
    }
}
