use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum SortError<Node> {
    /// The graph's edges, reported whole since any subset of them may form the cycle.
    CycleDetected(Vec<(Node, Node)>),
}

impl<Node: fmt::Debug> std::error::Error for SortError<Node> {}

impl<Node: fmt::Debug> fmt::Display for SortError<Node> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::CycleDetected(edges) => {
                writeln!(f, "Cycle detected in the following graph:")?;
                for (src, dest) in edges {
                    writeln!(f, "  {:?} → {:?}", src, dest)?;
                }
                Ok(())
            }
        }
    }
}
