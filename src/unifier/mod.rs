use indexmap::map::Entry;
use indexmap::IndexMap;
use log::debug;

use crate::model::{FunctionalDependency, InclusionDependency, UnifiedInd};

/// Merge functional dependencies that share a determining key.
///
/// The key is the pair `(table, lhs)` with the left-hand columns compared
/// as an ordered tuple. Right-hand sides of a group are concatenated in
/// encounter order; duplicates across contributing lines are kept as-is.
/// Output preserves first-encounter order of the group keys.
pub fn unify_fds(fds: Vec<FunctionalDependency>) -> Vec<FunctionalDependency> {
    let mut groups: IndexMap<(String, Vec<String>), FunctionalDependency> = IndexMap::new();

    for fd in fds {
        match groups.entry((fd.table.clone(), fd.lhs.clone())) {
            Entry::Occupied(mut entry) => {
                debug!("Merging into existing FD group {} {:?}", fd.table, fd.lhs);
                entry.get_mut().rhs.extend(fd.rhs);
            }
            Entry::Vacant(entry) => {
                entry.insert(fd);
            }
        }
    }

    groups.into_values().collect()
}

/// Collapse mirror-pair inclusion dependencies into equivalences.
///
/// INDs are grouped by the ordered table pair `(left, right)`; the groups
/// `(A, B)` and `(B, A)` stay distinct. An IND whose exact reverse exists
/// in the opposite group is an equivalence, surfaced exactly once per
/// unordered pair: the side whose left table sorts after its right table
/// emits, the other side skips. INDs without a mirror pass through as
/// one-directional subsets.
pub fn unify_inds(inds: Vec<InclusionDependency>) -> Vec<UnifiedInd> {
    let mut groups: IndexMap<(String, String), Vec<InclusionDependency>> = IndexMap::new();

    for ind in inds {
        groups
            .entry((ind.left_table.clone(), ind.right_table.clone()))
            .or_default()
            .push(ind);
    }

    let mut unified = Vec::new();
    for ((left_table, right_table), members) in &groups {
        let reverse = groups.get(&(right_table.clone(), left_table.clone()));

        for ind in members {
            let has_mirror = reverse
                .map(|candidates| candidates.iter().any(|rev| rev.is_mirror_of(ind)))
                .unwrap_or(false);

            if has_mirror {
                // Each equivalence would otherwise surface from both
                // groups; the lexicographically smaller left table yields.
                if left_table < right_table {
                    debug!(
                        "Skipping {} <= {}: mirror emits the equivalence",
                        left_table, right_table
                    );
                    continue;
                }
                unified.push(UnifiedInd::Equivalence(ind.clone()));
            } else {
                unified.push(UnifiedInd::Subset(ind.clone()));
            }
        }
    }

    unified
}
