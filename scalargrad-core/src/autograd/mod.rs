//! Reverse-mode backpropagation over the node arena.

pub mod grad_check;

use crate::graph::{Graph, NodeId, Op};

enum Visit {
    Enter(NodeId),
    Exit(NodeId),
}

impl Graph {
    /// Post-order depth-first sequence of the nodes reachable from `root`.
    ///
    /// Every operand appears before its consumer and every distinct node
    /// appears exactly once, however many paths reach it. Identity is the
    /// arena index, so the visited set is a plain boolean vector. The
    /// traversal keeps its own stack; deep fold chains cannot overflow the
    /// call stack.
    pub fn topo_order(&self, root: NodeId) -> Vec<NodeId> {
        let mut visited = vec![false; self.len()];
        let mut order = Vec::new();
        let mut stack = vec![Visit::Enter(root)];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(id) => {
                    if visited[id.index()] {
                        continue;
                    }
                    visited[id.index()] = true;
                    stack.push(Visit::Exit(id));
                    // Reversed so the first operand is explored first.
                    for &operand in self.op(id).operands().as_slice().iter().rev() {
                        stack.push(Visit::Enter(operand));
                    }
                }
                Visit::Exit(id) => order.push(id),
            }
        }
        order
    }

    /// Populates `grad` on every node reachable from `root`.
    ///
    /// The pass resets those gradients to zero first, then seeds
    /// `root.grad = 1` and applies each node's backward rule in reverse
    /// post-order. That order guarantees a node's gradient has been fully
    /// accumulated from all of its consumers before the node propagates to
    /// its own operands, so shared subexpressions sum contributions instead
    /// of overwriting them.
    ///
    /// Because the reset lives here, callers never zero gradients between
    /// passes and a repeated call cannot double-accumulate. A root with no
    /// operands just ends up with gradient 1.
    ///
    /// # Panics
    /// Panics if `root` does not address a node of this graph.
    pub fn backward(&mut self, root: NodeId) {
        let order = self.topo_order(root);

        for &id in &order {
            self.nodes[id.index()].grad = 0.0;
        }
        self.nodes[root.index()].grad = 1.0;

        for &id in order.iter().rev() {
            let out_grad = self.nodes[id.index()].grad;
            match self.nodes[id.index()].op {
                Op::Leaf => {}
                Op::Add(a, b) => {
                    self.nodes[a.index()].grad += out_grad;
                    self.nodes[b.index()].grad += out_grad;
                }
                Op::Mul(a, b) => {
                    let a_value = self.nodes[a.index()].value;
                    let b_value = self.nodes[b.index()].value;
                    self.nodes[a.index()].grad += b_value * out_grad;
                    self.nodes[b.index()].grad += a_value * out_grad;
                }
                Op::Pow(a, exponent) => {
                    let base = self.nodes[a.index()].value;
                    self.nodes[a.index()].grad += exponent * base.powf(exponent - 1.0) * out_grad;
                }
                Op::Relu(a) => {
                    if self.nodes[a.index()].value > 0.0 {
                        self.nodes[a.index()].grad += out_grad;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn shared_operand_accumulates_instead_of_overwriting() {
        let mut graph = Graph::new();
        let a = graph.leaf(3.0);
        let c = graph.add(a, a);
        graph.backward(c);
        assert_eq!(graph.grad(a), 2.0);
    }

    #[test]
    fn diamond_graph_sums_both_paths() {
        let mut graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(5.0);
        let c = graph.leaf(-3.0);
        let ab = graph.mul(a, b);
        let ac = graph.mul(a, c);
        let d = graph.add(ab, ac);

        graph.backward(d);
        assert_eq!(graph.grad(a), graph.value(b) + graph.value(c));
        assert_eq!(graph.grad(b), 2.0);
        assert_eq!(graph.grad(c), 2.0);
    }

    #[test]
    fn repeated_backward_does_not_double_accumulate() {
        let mut graph = Graph::new();
        let a = graph.leaf(3.0);
        let b = graph.leaf(4.0);
        let c = graph.mul(a, b);

        graph.backward(c);
        graph.backward(c);
        assert_eq!(graph.grad(a), 4.0);
        assert_eq!(graph.grad(b), 3.0);
    }

    #[test]
    fn bare_leaf_root_backpropagates_trivially() {
        let mut graph = Graph::new();
        let a = graph.leaf(42.0);
        graph.backward(a);
        assert_eq!(graph.grad(a), 1.0);
    }

    #[test]
    fn backward_only_touches_the_reachable_subgraph() {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(2.0);
        let first = graph.mul(a, b);
        graph.backward(first);
        assert_eq!(graph.grad(a), 2.0);

        // A second root that only uses `a` resets and repopulates `a`'s
        // gradient; `b` keeps its stale one from the first pass.
        let second = graph.add(a, a);
        graph.backward(second);
        assert_eq!(graph.grad(a), 2.0);
        assert_eq!(graph.grad(b), 1.0);
    }

    #[test]
    fn topo_order_visits_operands_first_and_each_node_once() {
        let mut graph = Graph::new();
        let a = graph.leaf(2.0);
        let b = graph.leaf(5.0);
        let ab = graph.mul(a, b);
        let ab_again = graph.mul(a, b);
        let root = graph.add(ab, ab_again);

        let order = graph.topo_order(root);
        assert_eq!(order.len(), 5);
        assert_eq!(*order.last().unwrap(), root);
        for (position, &id) in order.iter().enumerate() {
            for &operand in graph.op(id).operands().as_slice() {
                let operand_position = order
                    .iter()
                    .position(|&other| other == operand)
                    .expect("operand missing from topological order");
                assert!(operand_position < position);
            }
        }
    }

    #[test]
    fn deep_chains_do_not_overflow_the_stack() {
        let mut graph = Graph::new();
        let terms: Vec<_> = (0..50_000).map(|_| graph.leaf(1.0)).collect();
        let total = graph.sum(&terms);
        graph.backward(total);
        assert_eq!(graph.value(total), 50_000.0);
        assert_eq!(graph.grad(terms[0]), 1.0);
    }
}
