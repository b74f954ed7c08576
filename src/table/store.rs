//! # Data Store
//!
//! The single owned copy of every member in the session. All other views
//! (search results, the visible page, the selection) are derived from it.

use crate::member::{Member, MemberId};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    members: Vec<Member>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full record set. Later duplicates of an id are dropped so
    /// ids stay unique.
    pub fn load(&mut self, members: Vec<Member>) {
        let mut seen = HashSet::with_capacity(members.len());
        let mut unique = Vec::with_capacity(members.len());
        for member in members {
            if seen.insert(member.id) {
                unique.push(member);
            } else {
                tracing::warn!(id = member.id, "dropping duplicate member id");
            }
        }
        self.members = unique;
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.get(id).is_some()
    }

    /// Ids currently checked.
    pub fn selection(&self) -> BTreeSet<MemberId> {
        self.members
            .iter()
            .filter(|m| m.selected)
            .map(|m| m.id)
            .collect()
    }

    pub fn all_selected(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|m| m.selected)
    }

    /// Replace the editable fields of `id`. Returns `false` (and changes
    /// nothing) when the id is unknown.
    pub fn update(&mut self, id: MemberId, name: &str, email: &str, role: &str) -> bool {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.name = name.to_string();
                member.email = email.to_string();
                member.role = role.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.id != id);
        self.members.len() != before
    }

    /// Remove every member whose id is in `ids`, returning how many went.
    pub fn remove_many(&mut self, ids: &BTreeSet<MemberId>) -> usize {
        let before = self.members.len();
        self.members.retain(|m| !ids.contains(&m.id));
        before - self.members.len()
    }

    pub fn set_selected(&mut self, id: MemberId, selected: bool) -> bool {
        match self.members.iter_mut().find(|m| m.id == id) {
            Some(member) => {
                member.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        for member in &mut self.members {
            member.selected = selected;
        }
    }
}
