// ported and modified from: https://github.com/TheAlgorithms/Rust/blob/master/src/graph/topological_sort.rs
use errors::SortError;
use std::collections::{BTreeSet, HashMap};
pub mod errors;

/// A type alias representing a directed graph as a list of edges, where each
/// `(a, b)` pair means `a` must come before `b`.
pub type DAGAsAdjacencyList<Node> = Vec<(Node, Node)>;

/// A graph data structure used for topological sorting.
#[derive(Debug, Clone)]
pub struct Graph<Node> {
    /// Represents all nodes in the graph, in their preferred order
    pub nodes: Vec<Node>,
    /// An adjacency list representing the directed edges between nodes.
    pub edges: DAGAsAdjacencyList<Node>,
}

/// A stable variant of [Kahn's algorithm](https://en.wikipedia.org/wiki/Topological_sorting).
///
/// Whenever several nodes are ready, the one listed first in `graph.nodes` wins, so an input
/// that already respects every edge comes back unchanged and the result never depends on
/// hashing order. Nodes that only appear in `edges` are ordered after the listed ones, by
/// first appearance.
///
/// If the graph contains a cycle, a `SortError::CycleDetected` error is returned.
/// # Example
/// ```
/// use tampopo::Graph;
///
/// let nodes = vec!["docs/api", "docs", "tests"];
/// let edges = vec![("docs", "docs/api")];
/// let graph = Graph { nodes, edges };
/// let sorted = tampopo::sort_graph(&graph).unwrap();
///
/// assert_eq!(sorted, vec!["docs", "docs/api", "tests"]);
/// ```
pub fn sort_graph<Node: std::hash::Hash + Eq + Clone>(
    graph: &Graph<Node>,
) -> Result<Vec<Node>, SortError<Node>> {
    // assign every node a position, listed nodes first
    let mut order: Vec<Node> = Vec::new();
    let mut position: HashMap<Node, usize> = HashMap::new();

    let endpoints = graph.edges.iter().flat_map(|(src, dest)| [src, dest]);
    for node in graph.nodes.iter().chain(endpoints) {
        if !position.contains_key(node) {
            position.insert(node.clone(), order.len());
            order.push(node.clone());
        }
    }

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); order.len()];
    let mut in_degree: Vec<usize> = vec![0; order.len()];

    for (src, dest) in &graph.edges {
        let (src, dest) = (position[src], position[dest]);

        dependents[src].push(dest);
        in_degree[dest] += 1;
    }

    // ready nodes keyed by position, so the earliest one is always taken next
    let mut ready: BTreeSet<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(index, _)| index)
        .collect();

    let mut sorted: Vec<Node> = Vec::with_capacity(order.len());

    while let Some(index) = ready.pop_first() {
        sorted.push(order[index].clone());

        for &neighbor in &dependents[index] {
            in_degree[neighbor] -= 1;

            if in_degree[neighbor] == 0 {
                ready.insert(neighbor);
            }
        }
    }

    if sorted.len() == order.len() {
        Ok(sorted)
    } else {
        Err(SortError::CycleDetected(graph.edges.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_graph_is_ok_integer() {
        let nodes: Vec<usize> = vec![2, 3, 5, 7, 8, 9, 10, 11];
        let edges: Vec<(usize, usize)> = vec![
            (5, 11),
            (7, 8),
            (7, 11),
            (3, 8),
            (3, 10),
            (11, 2),
            (11, 9),
            (11, 10),
            (8, 9),
        ];
        let graph: Graph<usize> = Graph { nodes, edges };
        let sorted = sort_graph::<usize>(&graph);

        assert_eq!(sorted, Ok(vec![3, 5, 7, 8, 11, 2, 9, 10]));
    }

    #[test]
    fn test_sort_graph_is_err_integer() {
        let nodes: Vec<usize> = vec![2, 3, 5, 7, 8, 9, 10, 11];
        let edges: Vec<(usize, usize)> = vec![
            (5, 11),
            (7, 8),
            (7, 11),
            (3, 8),
            (3, 10),
            (11, 2),
            (11, 9),
            (11, 10),
            (8, 9),
            (9, 11), // <-- cycle introduced
        ];
        let graph: Graph<usize> = Graph { nodes, edges };
        let sorted = sort_graph::<usize>(&graph);

        assert!(sorted.is_err());
    }

    #[test]
    fn test_sort_graph_keeps_valid_order() {
        let nodes = vec!["docs", "docs/api", "tests", "tests/unit"];
        let edges = vec![("docs", "docs/api"), ("tests", "tests/unit")];
        let graph = Graph {
            nodes: nodes.clone(),
            edges,
        };

        assert_eq!(sort_graph(&graph), Ok(nodes));
    }

    #[test]
    fn test_sort_graph_moves_parents_first() {
        let nodes = vec!["a/b/c", "z", "a/b", "a"];
        let edges = vec![("a/b", "a/b/c"), ("a", "a/b")];
        let graph = Graph { nodes, edges };

        assert_eq!(sort_graph(&graph), Ok(vec!["z", "a", "a/b", "a/b/c"]));
    }

    #[test]
    fn test_sort_graph_includes_edge_only_nodes() {
        let graph = Graph {
            nodes: vec!["x/y"],
            edges: vec![("x", "x/y")],
        };

        assert_eq!(sort_graph(&graph), Ok(vec!["x", "x/y"]));
    }

    #[test]
    fn test_is_err_strings() {
        let nodes = vec![
            "shirt",
            "hoodie",
            "socks",
            "underwear",
            "pants",
            "shoes",
            "glasses",
            "watch",
            "school",
        ];
        let edges = vec![
            ("shirt", "hoodie"),
            ("hoodie", "school"),
            ("school", "shirt"), // <-- cycle introduced
            ("underwear", "pants"),
            ("pants", "shoes"),
            ("socks", "shoes"),
            ("shoes", "school"),
        ];
        let graph: Graph<&str> = Graph { nodes, edges };
        let sorted = sort_graph::<&str>(&graph);

        assert!(sorted.is_err());
    }
}
