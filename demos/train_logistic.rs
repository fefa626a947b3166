// demos/train_logistic.rs
//
// RUST_LOG=debug cargo run --example train_logistic
use gradlogit::metrics::accuracy;
use gradlogit::{CpuBackend, LogisticConfig, LogisticRegression, Tensor1D, Tensor2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Two well separated groups on one feature
    let x = Tensor2D::<CpuBackend>::from_rows(&[
        vec![0.0],
        vec![1.0],
        vec![2.0],
        vec![3.0],
        vec![10.0],
        vec![11.0],
        vec![12.0],
        vec![13.0],
    ])?;
    let y = Tensor1D::new(vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);

    let config = LogisticConfig::builder()
        .iterations(15_000)
        .learning_rate(0.1)
        .build();
    let mut model = LogisticRegression::from_config(config);
    model.fit(&x, &y)?;

    let preds = model.predict(&x)?;
    println!("Weights: {:?}", model.weights());
    println!("Predictions: {:?}", preds.to_vec());
    println!("Training accuracy: {:.2}", accuracy(&preds, &y)?);

    let unseen = Tensor2D::from_rows(&[vec![-4.0], vec![6.5], vec![20.0]])?;
    let probs = model.predict_proba(&unseen)?;
    println!("P(y = 1 | x in [-4, 6.5, 20]): {:?}", probs.to_vec());

    Ok(())
}
