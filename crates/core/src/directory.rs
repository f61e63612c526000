//! Lookup tables for resolving codes and e-mails to display names
//!
//! Both directories are rebuilt from a full snapshot every time; entries that
//! lack a key are dropped, and later entries with the same key replace
//! earlier ones.

use std::collections::HashMap;

use assetdesk_domain::{StaffMember, Topic};

/// Topic code → topic name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDirectory {
    names: HashMap<String, String>,
}

impl TopicDirectory {
    pub fn from_topics<'a, I>(topics: I) -> Self
    where
        I: IntoIterator<Item = &'a Topic>,
    {
        let names = topics
            .into_iter()
            .filter_map(|topic| match (&topic.code, &topic.name) {
                (Some(code), Some(name)) => Some((code.clone(), name.clone())),
                _ => None,
            })
            .collect();
        Self { names }
    }

    /// Display name for a topic code; unknown codes resolve to themselves.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map_or(code, String::as_str)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// E-mail → staff member
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    members: Vec<StaffMember>,
    by_email: HashMap<String, usize>,
}

impl UserDirectory {
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = StaffMember>,
    {
        let mut directory = Self::default();
        for member in members {
            let Some(email) = member.email.clone() else {
                continue;
            };
            match directory.by_email.get(&email) {
                Some(&index) => directory.members[index] = member,
                None => {
                    directory.by_email.insert(email, directory.members.len());
                    directory.members.push(member);
                }
            }
        }
        directory
    }

    /// Full name for an e-mail, falling back to the e-mail itself.
    pub fn display_name<'a>(&'a self, email: &'a str) -> &'a str {
        self.get(email)
            .and_then(|m| m.full_name.as_deref())
            .unwrap_or(email)
    }

    pub fn get(&self, email: &str) -> Option<&StaffMember> {
        self.by_email.get(email).map(|&index| &self.members[index])
    }

    /// Members holding one of `positions`, in directory order.
    pub fn staff<'a>(&'a self, positions: &'a [String]) -> impl Iterator<Item = &'a StaffMember> {
        self.members
            .iter()
            .filter(move |member| member.holds_any(positions))
    }

    pub fn members(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
