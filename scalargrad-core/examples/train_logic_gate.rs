//! Fits a tiny perceptron to an AND-style truth table with the mean-squared
//! error objective and a manual gradient-descent loop.
//!
//! Run with: `cargo run --example train_logic_gate`

use rand::rngs::StdRng;
use rand::SeedableRng;

use scalargrad_core::graph::Graph;
use scalargrad_core::nn::losses::mse_loss;
use scalargrad_core::nn::{Init, Mlp};
use scalargrad_core::optim::{Optimizer, Sgd};
use scalargrad_core::ScalarGradError;

fn main() -> Result<(), ScalarGradError> {
    let samples: [([f64; 2], f64); 4] = [
        ([-1.0, -1.0], -1.0),
        ([-1.0, 1.0], -1.0),
        ([1.0, -1.0], -1.0),
        ([1.0, 1.0], 1.0),
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = Graph::new();
    let mut model = Mlp::with_init(&mut graph, 2, &[4], 1, Init::default(), &mut rng)?;
    let mut optimizer = Sgd::new(model.parameters(), 0.05);

    // Everything past this point is rebuilt on each step; only the model
    // parameters survive the rollback.
    let mark = graph.checkpoint();

    for step in 0..200 {
        graph.rollback(mark);

        let mut predictions = Vec::with_capacity(samples.len());
        let mut targets = Vec::with_capacity(samples.len());
        for (point, label) in &samples {
            let inputs = [
                graph.labeled_leaf(point[0], "input"),
                graph.labeled_leaf(point[1], "input"),
            ];
            predictions.extend(model.predict(&mut graph, &inputs)?);
            targets.push(graph.labeled_leaf(*label, "target"));
        }

        let loss = mse_loss(&mut graph, &predictions, &targets)?;
        graph.backward(loss);
        optimizer.step(&mut graph)?;

        if step % 20 == 0 {
            println!("step {:3} loss {:.6}", step, graph.value(loss));
        }
    }

    Ok(())
}
