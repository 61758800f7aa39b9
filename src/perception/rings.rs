/// Flags every bond that lies on at least one cycle.
///
/// A bond is a ring bond exactly when it is not a bridge. Bridges are found
/// with an iterative low-link depth-first search so deep chains do not
/// exhaust the call stack.
pub(super) fn ring_bonds(adjacency: &[Vec<(usize, usize)>], bond_count: usize) -> Vec<bool> {
    const UNVISITED: usize = usize::MAX;

    let n = adjacency.len();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![0usize; n];
    let mut bridge = vec![false; bond_count];
    let mut timer = 0usize;

    for root in 0..n {
        if disc[root] != UNVISITED {
            continue;
        }

        disc[root] = timer;
        low[root] = timer;
        timer += 1;

        // (atom, bond used to reach it, next adjacency slot to visit)
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];

        while let Some(top) = stack.len().checked_sub(1) {
            let (atom, via, cursor) = stack[top];

            if let Some(&(next, bond)) = adjacency[atom].get(cursor) {
                stack[top].2 += 1;
                if Some(bond) == via {
                    continue;
                }
                if disc[next] == UNVISITED {
                    disc[next] = timer;
                    low[next] = timer;
                    timer += 1;
                    stack.push((next, Some(bond), 0));
                } else {
                    low[atom] = low[atom].min(disc[next]);
                }
                continue;
            }

            stack.pop();
            if let (Some(bond), Some(&(parent, _, _))) = (via, stack.last()) {
                low[parent] = low[parent].min(low[atom]);
                if low[atom] > disc[parent] {
                    bridge[bond] = true;
                }
            }
        }
    }

    bridge.into_iter().map(|is_bridge| !is_bridge).collect()
}
