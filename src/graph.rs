//! Graph traversal exercises.

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnPath,
    Safe,
    Unsafe,
}

/// Nodes from which every walk eventually stops at a terminal node.
///
/// `graph[i]` lists the successors of node `i`. A node is unsafe exactly when
/// it can reach a cycle; a three-colour DFS marks nodes on the current path
/// and treats any back edge as a cycle. Returned in ascending order.
///
/// The search keeps its own stack of `(node, next successor)` frames, so path
/// length is bounded by memory rather than by the call stack.
pub fn eventual_safe_nodes(graph: &[Vec<usize>]) -> Vec<usize> {
    let mut color = vec![Color::Unvisited; graph.len()];
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for root in 0..graph.len() {
        if color[root] == Color::Unvisited {
            visit(root, graph, &mut color, &mut stack);
        }
    }
    (0..graph.len())
        .filter(|&node| color[node] == Color::Safe)
        .collect()
}

fn visit(
    root: usize,
    graph: &[Vec<usize>],
    color: &mut [Color],
    stack: &mut Vec<(usize, usize)>,
) {
    color[root] = Color::OnPath;
    stack.push((root, 0));
    // Verdict of the frame popped last, consumed by its parent.
    let mut child_safe = true;

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        if !child_safe {
            // A successor reaches a cycle, so every node on the path does.
            color[node] = Color::Unsafe;
            stack.pop();
            continue;
        }
        let Some(&succ) = graph[node].get(next) else {
            color[node] = Color::Safe;
            stack.pop();
            child_safe = true;
            continue;
        };
        frame.1 += 1;
        match color[succ] {
            Color::Safe => {}
            Color::OnPath | Color::Unsafe => child_safe = false,
            Color::Unvisited => {
                color[succ] = Color::OnPath;
                stack.push((succ, 0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eventual_safe_nodes() {
        let graph = vec![
            vec![1, 2],
            vec![2, 3],
            vec![5],
            vec![0],
            vec![5],
            vec![],
            vec![],
        ];
        assert_eq!(eventual_safe_nodes(&graph), vec![2, 4, 5, 6]);
    }

    #[test]
    fn test_eventual_safe_nodes_self_loop() {
        let graph = vec![vec![0], vec![2], vec![]];
        assert_eq!(eventual_safe_nodes(&graph), vec![1, 2]);
        assert!(eventual_safe_nodes(&[]).is_empty());
    }

    #[test]
    fn test_eventual_safe_nodes_long_chain() {
        let n = 200_000;
        let mut graph: Vec<Vec<usize>> = (0..n).map(|i| vec![i + 1]).collect();
        graph[n - 1].clear();
        assert_eq!(eventual_safe_nodes(&graph), (0..n).collect::<Vec<_>>());

        // Closing the chain into a cycle makes every node unsafe.
        graph[n - 1].push(0);
        assert!(eventual_safe_nodes(&graph).is_empty());
    }

    #[test]
    fn test_eventual_safe_nodes_shared_descendants() {
        // 0 and 1 both lead into the cycle 2 <-> 3; 4 reaches only a sink.
        let graph = vec![vec![4, 2], vec![2], vec![3], vec![2], vec![5], vec![]];
        assert_eq!(eventual_safe_nodes(&graph), vec![4, 5]);
    }
}
