//! Trains a 2 -> [16, 16] -> 1 perceptron on the two-moons dataset with the
//! hinge objective, L2 regularization, and a linearly decaying learning
//! rate, reporting loss and accuracy after every step.
//!
//! Run with: `cargo run --example train_moons`

use rand::rngs::StdRng;
use rand::SeedableRng;

use scalargrad_core::graph::Graph;
use scalargrad_core::nn::losses::hinge_loss;
use scalargrad_core::nn::{Init, Mlp};
use scalargrad_core::optim::{LinearDecay, Optimizer, Sgd};
use scalargrad_core::ScalarGradError;
use scalargrad_data::moons;

fn main() -> Result<(), ScalarGradError> {
    let mut rng = StdRng::seed_from_u64(7);
    let data = moons(100, 0.01, &mut rng);

    let mut graph = Graph::new();
    let mut model = Mlp::with_init(&mut graph, 2, &[16, 16], 1, Init::default(), &mut rng)?;
    let params = model.parameters();
    let mut optimizer = Sgd::new(params.clone(), 1.0);
    let mut schedule = LinearDecay::new(1.0, 0.1, 1000);

    let mark = graph.checkpoint();

    for step in 0..200 {
        graph.rollback(mark);

        let mut scores = Vec::with_capacity(data.len());
        let mut targets = Vec::with_capacity(data.len());
        for (point, label) in data.iter() {
            let inputs = [
                graph.labeled_leaf(point[0], "input"),
                graph.labeled_leaf(point[1], "input"),
            ];
            scores.extend(model.predict(&mut graph, &inputs)?);
            targets.push(graph.labeled_leaf(label, "target"));
        }

        let hinge = hinge_loss(&mut graph, &scores, &targets, &params)?;
        graph.backward(hinge.total_loss);
        schedule.step(&mut optimizer);
        optimizer.step(&mut graph)?;

        println!(
            "step {} loss {:.6} accuracy {:.1}%",
            step,
            graph.value(hinge.total_loss),
            hinge.accuracy * 100.0
        );
    }

    Ok(())
}
