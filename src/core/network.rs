use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphResult};

/// Stable handle addressing a member of a `Network`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(usize);

impl MemberId {
    /// Raw slot index, for diagnostics only.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A member of the professional network: a company label plus an ordered
/// list of connection handles. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    company: String,
    connections: Vec<MemberId>,
}

impl Professional {
    /// The company this member works for.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Direct connections in insertion order.
    pub fn connections(&self) -> &[MemberId] {
        &self.connections
    }
}

/// Arena of professionals addressed by `MemberId` handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    members: Vec<Professional>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Register a member employed at `company` and return their handle.
    pub fn add_member(&mut self, company: impl Into<String>) -> MemberId {
        let id = MemberId(self.members.len());
        self.members.push(Professional {
            company: company.into(),
            connections: Vec::new(),
        });
        id
    }

    /// Record a directed connection between two members.
    pub fn connect(&mut self, from: MemberId, to: MemberId) -> GraphResult<()> {
        if !self.contains(to) {
            warn!("connection rejected: member {} out of range", to.0);
            return Err(GraphError::UnknownMember(to.0));
        }
        match self.members.get_mut(from.0) {
            Some(member) => {
                member.connections.push(to);
                Ok(())
            }
            None => {
                warn!("connection rejected: member {} out of range", from.0);
                Err(GraphError::UnknownMember(from.0))
            }
        }
    }

    /// Whether `id` addresses a registered member.
    pub fn contains(&self, id: MemberId) -> bool {
        id.0 < self.members.len()
    }

    /// The member record, or `None` for an unknown handle.
    pub fn get(&self, id: MemberId) -> Option<&Professional> {
        self.members.get(id.0)
    }

    /// The member's company, or `None` for an unknown handle.
    pub fn company(&self, id: MemberId) -> Option<&str> {
        self.members.get(id.0).map(|member| member.company.as_str())
    }

    /// The member's connections. An unknown handle yields an empty slice.
    pub fn connections(&self, id: MemberId) -> &[MemberId] {
        self.members
            .get(id.0)
            .map(|member| member.connections.as_slice())
            .unwrap_or(&[])
    }
}
