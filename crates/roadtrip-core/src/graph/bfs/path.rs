//! Path reconstruction from a BFS predecessor map

use std::collections::HashMap;

/// Walk predecessor links from `to` back to `from`, then reverse.
///
/// Returns an empty path if the chain breaks before reaching `from`.
pub fn reconstruct_path(
    from: &str,
    to: &str,
    predecessors: &HashMap<&str, &str>,
) -> Vec<String> {
    let mut path = vec![to.to_string()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(&pred) => {
                path.push(pred.to_string());
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
