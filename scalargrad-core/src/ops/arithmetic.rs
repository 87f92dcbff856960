use crate::graph::{Graph, NodeId, Op};

impl Graph {
    /// `a + b`.
    pub fn add(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let value = self.value(a) + self.value(b);
        self.push(value, Op::Add(a, b))
    }

    /// `a * b`.
    pub fn mul(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let value = self.value(a) * self.value(b);
        self.push(value, Op::Mul(a, b))
    }

    /// Raises `a` to a constant exponent.
    ///
    /// Degenerate bases (zero with a negative exponent, negative with a
    /// fractional exponent) propagate IEEE-754 `powf` results (`NaN`,
    /// `inf`); nothing is special-cased. The graph stays constructible and
    /// symbolically differentiable either way.
    pub fn pow(&mut self, a: NodeId, exponent: f64) -> NodeId {
        let value = self.value(a).powf(exponent);
        self.push(value, Op::Pow(a, exponent))
    }

    /// `-a`, recorded as `a * (-1)`.
    pub fn neg(&mut self, a: NodeId) -> NodeId {
        let minus_one = self.leaf(-1.0);
        self.mul(a, minus_one)
    }

    /// `a - b`, recorded as `a + (b * -1)`.
    pub fn sub(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let negated = self.neg(b);
        self.add(a, negated)
    }

    /// `a / b`, recorded as `a * b^-1`.
    pub fn div(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let inverse = self.pow(b, -1.0);
        self.mul(a, inverse)
    }

    /// Left fold of `add` over `terms`, seeded with a fresh zero leaf.
    ///
    /// The fold order is fixed so repeated runs over the same inputs produce
    /// identical graph shapes. An empty slice yields the zero leaf alone.
    pub fn sum(&mut self, terms: &[NodeId]) -> NodeId {
        let mut acc = self.leaf(0.0);
        for &term in terms {
            acc = self.add(acc, term);
        }
        acc
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests; // Link to the test file
