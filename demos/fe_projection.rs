//! Load vector assembly and evaluation on a quadratic mesh.
//!
//! Run with: `cargo run --example fe_projection`
//! Set `RUST_LOG=debug` (or `trace`) to see construction and per-element logs.

use std::f64::consts::PI;

use lagrange_fem::{
    differentiation_matrix, DomainPolicy, EvaluationConfig, FeFunction, GaussLegendre,
    LoadAssembler, Mesh1D, NodeSet,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let u = |x: f64| (PI * x).sin();

    let degree = 2;
    let mesh = Mesh1D::uniform(0.0, 1.0, 8, degree)?;
    log::info!(
        "Mesh: {} elements of degree {}, {} nodes",
        mesh.n_elements(),
        mesh.degree(),
        mesh.n_nodes()
    );

    // Load vector with adaptive and fixed quadrature
    let adaptive = LoadAssembler::new(degree)?;
    let b = adaptive.assemble(u, &mesh)?;
    let fixed = adaptive
        .clone()
        .with_integrator(GaussLegendre::exact_for_degree(2 * degree + 4)?);
    let b_fixed = fixed.assemble(u, &mesh)?;

    let max_diff = b
        .iter()
        .zip(&b_fixed)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0_f64, f64::max);
    let total: f64 = b.iter().sum();
    println!("load vector: {:?}", b);
    println!("sum(b) = {:.12} (exact {:.12})", total, 2.0 / PI);
    println!("max |b_adaptive - b_fixed| = {:.3e}", max_diff);

    // Interpolate and evaluate at scattered points
    let dofs = mesh.interpolate(u);
    let fe = FeFunction::new(&mesh, &adaptive.reference().basis, &dofs)?;
    let points: Vec<f64> = (0..=10).map(|i| ((i * 7) % 11) as f64 / 10.0).collect();
    let values = fe.evaluate_batch(&points)?;
    for (p, v) in points.iter().zip(&values) {
        println!("u_h({:.1}) = {:+.8}  error {:.2e}", p, v, (v - u(*p)).abs());
    }

    let strict = fe.with_config(EvaluationConfig::default().with_policy(DomainPolicy::Reject));
    match strict.evaluate(1.5) {
        Ok(v) => println!("u_h(1.5) = {}", v),
        Err(e) => log::warn!("{}", e),
    }

    // Reference derivative of x^3 on Gauss-Lobatto nodes
    let nodes = NodeSet::gauss_lobatto(4);
    let d = differentiation_matrix(&nodes);
    for (i, &x) in nodes.as_slice().iter().enumerate() {
        let du: f64 = nodes
            .as_slice()
            .iter()
            .enumerate()
            .map(|(j, &xj)| d[(i, j)] * xj.powi(3))
            .sum();
        println!("d/dx x^3 at {:+.4}: {:+.10} (exact {:+.10})", x, du, 3.0 * x * x);
    }

    Ok(())
}
