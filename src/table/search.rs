//! # Search Filter
//!
//! Turns the text typed in the search box into a matcher over the three
//! visible fields of a member. The query is a case-insensitive regular
//! expression fragment; text that does not compile as one is matched
//! literally instead.

use crate::member::Member;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Pattern(Regex),
    /// Lowercased query text, used when the query is not a valid pattern.
    Literal(String),
}

#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    matcher: Matcher,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            matcher: Matcher::All,
        }
    }
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let matcher = if text.is_empty() {
            Matcher::All
        } else {
            match RegexBuilder::new(&text).case_insensitive(true).build() {
                Ok(regex) => Matcher::Pattern(regex),
                Err(e) => {
                    tracing::warn!(query = %text, error = %e, "invalid search pattern, matching literally");
                    Matcher::Literal(text.to_lowercase())
                }
            }
        };
        Self { text, matcher }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the query failed to compile and is being matched as plain text.
    pub fn is_literal(&self) -> bool {
        matches!(self.matcher, Matcher::Literal(_))
    }

    pub fn matches(&self, member: &Member) -> bool {
        let fields = [&member.name, &member.email, &member.role];
        match &self.matcher {
            Matcher::All => true,
            Matcher::Pattern(regex) => fields.iter().any(|f| regex.is_match(f)),
            Matcher::Literal(needle) => fields.iter().any(|f| f.to_lowercase().contains(needle)),
        }
    }

    /// Members matching the query, in store order.
    pub fn filter<'a>(&self, members: &'a [Member]) -> Vec<&'a Member> {
        match self.matcher {
            Matcher::All => members.iter().collect(),
            _ => members.iter().filter(|m| self.matches(m)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members() -> Vec<Member> {
        vec![
            Member::new(1, "Alice", "a@x.com", "admin"),
            Member::new(2, "Bob", "b@x.com", "member"),
            Member::new(3, "Carol [ops]", "carol@y.org", "member"),
        ]
    }

    fn ids(found: &[&Member]) -> Vec<i64> {
        found.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let members = members();
        let query = Query::default();
        assert!(query.is_empty());
        assert_eq!(ids(&query.filter(&members)), vec![1, 2, 3]);
    }

    #[test]
    fn test_case_insensitive_any_field() {
        let members = members();
        assert_eq!(ids(&Query::new("BOB").filter(&members)), vec![2]);
        assert_eq!(ids(&Query::new("y.org").filter(&members)), vec![3]);
        assert_eq!(ids(&Query::new("Member").filter(&members)), vec![2, 3]);
        assert!(Query::new("zzz").filter(&members).is_empty());
    }

    #[test]
    fn test_query_is_a_pattern() {
        let members = members();
        let query = Query::new("^(alice|bob)$");
        assert!(!query.is_literal());
        assert_eq!(ids(&query.filter(&members)), vec![1, 2]);
    }

    #[test]
    fn test_invalid_pattern_matches_literally() {
        let members = members();
        let query = Query::new("[ops");
        assert!(query.is_literal());
        assert_eq!(ids(&query.filter(&members)), vec![3]);

        let query = Query::new("(");
        assert!(query.is_literal());
        assert!(query.filter(&members).is_empty());
    }
}
