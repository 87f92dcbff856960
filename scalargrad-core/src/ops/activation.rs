use crate::graph::{Graph, NodeId, Op};

impl Graph {
    /// Rectified linear unit: `max(0, a)`.
    ///
    /// The sub-gradient at exactly zero is zero (strict `> 0` test), both
    /// here and in the backward rule.
    pub fn relu(&mut self, a: NodeId) -> NodeId {
        let input = self.value(a);
        let value = if input > 0.0 { input } else { 0.0 };
        self.push(value, Op::Relu(a))
    }
}
