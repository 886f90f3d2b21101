//! DOT export for visualizing a dependency graph.

use super::types::DependencyGraph;

impl DependencyGraph {
    /// Render the graph as a Graphviz `digraph`.
    ///
    /// Vertices and edges are emitted in insertion order, so the output
    /// is stable across runs on identical input.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph dependencies {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box];\n\n");

        for key in self.vertices() {
            dot.push_str(&format!("  \"{}\";\n", self.resolve(key)));
        }

        dot.push('\n');

        for key in self.vertices() {
            let from = self.resolve(key);
            for &target in self.edges_of(key) {
                dot.push_str(&format!("  \"{}\" -> \"{}\";\n", from, self.resolve(target)));
            }
        }

        dot.push_str("}\n");
        dot
    }
}
