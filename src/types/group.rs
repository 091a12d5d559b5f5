//! Group and member types
//!
//! A group owns its membership list; members are identified by an opaque
//! string that is unique within the group.

use serde::Serialize;

/// Group identifier
pub type GroupId = u32;

/// Expense identifier, unique within a group
pub type ExpenseId = u32;

/// Opaque member identifier
pub type MemberId = String;

/// A participant in a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    /// Identifier used by payments and splits
    pub id: MemberId,

    /// Display name used by reports
    pub name: String,
}

impl Member {
    /// Create a member with a display name
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>) -> Self {
        Member {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Create a member from an input record, defaulting the name to the id
    pub fn from_record(id: impl Into<MemberId>, name: Option<String>) -> Self {
        match name {
            Some(name) => Member::new(id, name),
            None => Member::with_id(id),
        }
    }

    /// Create a member whose display name is its identifier
    pub fn with_id(id: impl Into<MemberId>) -> Self {
        let id = id.into();
        Member {
            name: id.clone(),
            id,
        }
    }
}

/// A group of members sharing expenses
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Group identifier
    pub id: GroupId,

    /// Display name of the group
    pub name: String,

    /// Members in the order they joined
    pub members: Vec<Member>,
}

impl Group {
    /// Create an empty group
    pub fn new(id: GroupId, name: impl Into<String>) -> Self {
        Group {
            id,
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Whether `member` currently belongs to the group
    pub fn has_member(&self, member: &str) -> bool {
        self.members.iter().any(|m| m.id == member)
    }

    /// Whether `member` was among the first `roster` members to join
    ///
    /// With `None` this is the same as [`Group::has_member`].
    pub fn had_member(&self, member: &str, roster: Option<usize>) -> bool {
        let joined = roster.map_or(self.members.len(), |n| n.min(self.members.len()));
        self.members[..joined].iter().any(|m| m.id == member)
    }

    /// Add a member unless one with the same id already exists
    ///
    /// Returns `true` when the member was added. Re-adding keeps the
    /// original display name.
    pub fn add_member(&mut self, member: Member) -> bool {
        if self.has_member(&member.id) {
            return false;
        }
        self.members.push(member);
        true
    }
}
