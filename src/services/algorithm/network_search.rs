use std::collections::HashSet;

use crate::core::{MemberId, Network};

/// Extended-network membership search
pub struct NetworkSearch;

impl NetworkSearch {
    /// Returns whether anyone in the starting member's extended network
    /// (the member themself included) works at the given company.
    /// A `None` or unknown starting handle yields false without traversal.
    pub fn has_extended_connection_at_company(
        network: &Network,
        starting: Option<MemberId>,
        company_name: &str,
    ) -> bool {
        let start = match starting {
            Some(id) if network.contains(id) => id,
            _ => return false,
        };

        let mut visited: HashSet<MemberId> = HashSet::new();
        Self::search(network, start, company_name, &mut visited)
    }

    // Order matters here: the company test fires even for an already
    // visited member reached on a second path.
    fn search(
        network: &Network,
        current: MemberId,
        company_name: &str,
        visited: &mut HashSet<MemberId>,
    ) -> bool {
        if network.company(current) == Some(company_name) {
            return true;
        }
        if visited.contains(&current) {
            return false;
        }
        visited.insert(current);

        for connection in network.connections(current) {
            if Self::search(network, *connection, company_name, visited) {
                return true;
            }
        }
        false
    }
}
