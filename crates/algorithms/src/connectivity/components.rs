//! Component aggregation over the link graph
//!
//! Groups linked patches into connected components. Only patches that
//! participate in at least one link belong to a component; an isolated
//! patch, however large, appears in no component. Callers that need
//! singleton components must add them themselves.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Connected components of the link graph.
///
/// Builds an adjacency map once, then grows each component breadth-first
/// with an explicit queue. Returns one sorted member list per component,
/// ordered by smallest member ID.
pub fn components(links: &BTreeSet<(u32, u32)>) -> Vec<Vec<u32>> {
    let mut adjacency: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
    for &(a, b) in links {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    let mut seen: BTreeSet<u32> = BTreeSet::new();
    let mut result: Vec<Vec<u32>> = Vec::new();
    let mut queue: VecDeque<u32> = VecDeque::new();

    for &start in adjacency.keys() {
        if seen.contains(&start) {
            continue;
        }

        let mut members: Vec<u32> = Vec::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            members.push(id);
            for &next in &adjacency[&id] {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        members.sort_unstable();
        result.push(members);
    }

    result
}

/// Total habitat area of each link-graph component.
///
/// One value per component, in the same order as [`components`]. A patch
/// missing from the size index contributes zero area.
pub fn component_areas(links: &BTreeSet<(u32, u32)>, sizes: &HashMap<u32, usize>) -> Vec<usize> {
    components(links)
        .iter()
        .map(|members| {
            members
                .iter()
                .map(|id| sizes.get(id).copied().unwrap_or(0))
                .sum()
        })
        .collect()
}
