//! Assembly and evaluation on whole meshes.

use approx::assert_relative_eq;
use lagrange_fem::{
    assemble_load_vector, fe_evaluate, fe_evaluate_batch, DomainPolicy, EvaluationConfig,
    FeFunction, FemError, GaussKronrod, GaussLegendre, LagrangeBasis, LoadAssembler, Mesh1D,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_load_vector_of_constant() {
    init();
    let mesh = Mesh1D::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], 1).unwrap();
    let basis = LagrangeBasis::equispaced(1).unwrap();
    let b = assemble_load_vector(|_| 1.0, &mesh, &basis, &GaussKronrod::default()).unwrap();
    let expected = [0.5, 1.0, 1.0, 1.0, 0.5];
    assert_eq!(b.len(), expected.len());
    for (&got, &want) in b.iter().zip(&expected) {
        assert_relative_eq!(got, want, epsilon = 1e-14);
    }
}

#[test]
fn test_load_vector_matches_hand_computation() {
    // Linear elements, u = x on [0, 2] with h = 1:
    // element e contributes ∫ x φ over [e, e+1]
    let mesh = Mesh1D::uniform(0.0, 2.0, 2, 1).unwrap();
    let b = LoadAssembler::new(1).unwrap().assemble(|x| x, &mesh).unwrap();
    assert_relative_eq!(b[0], 1.0 / 6.0, epsilon = 1e-14);
    assert_relative_eq!(b[1], 1.0, epsilon = 1e-14);
    assert_relative_eq!(b[2], 5.0 / 6.0, epsilon = 1e-14);
}

#[test]
fn test_load_vector_integrators_agree_on_smooth_data() {
    let mesh = Mesh1D::uniform(0.0, 1.0, 6, 2).unwrap();
    let u = |x: f64| (4.0 * x).exp();
    let adaptive = LoadAssembler::new(2).unwrap();
    let fixed = adaptive
        .clone()
        .with_integrator(GaussLegendre::new(12).unwrap());
    let b1 = adaptive.assemble(u, &mesh).unwrap();
    let b2 = fixed.assemble(u, &mesh).unwrap();
    for (x, y) in b1.iter().zip(&b2) {
        assert_relative_eq!(*x, *y, max_relative = 1e-10);
    }
}

#[test]
fn test_evaluation_example() {
    init();
    let mesh = Mesh1D::new(vec![0.0, 1.0, 2.0, 3.0], 1).unwrap();
    let dofs = [0.0, 1.0, 4.0, 9.0];
    assert_relative_eq!(fe_evaluate(&dofs, 1.5, &mesh).unwrap(), 2.5, epsilon = 1e-14);
    // Interior boundary belongs to the right element but the function is continuous
    assert_relative_eq!(fe_evaluate(&dofs, 2.0, &mesh).unwrap(), 4.0, epsilon = 1e-14);
}

#[test]
fn test_batch_equals_scalar_for_shuffled_and_repeated_points() {
    init();
    let mesh = Mesh1D::new(
        vec![-1.0, -0.8, -0.2, 0.0, 0.15, 0.6, 0.9, 1.2, 2.0, 2.1],
        3,
    )
    .unwrap();
    let dofs = mesh.interpolate(|x| (2.0 * x).sin() + x * x);

    let mut points: Vec<f64> = (0..50).map(|i| -1.0 + 3.1 * ((i * 17) % 50) as f64 / 49.0).collect();
    points.extend([0.0, 0.0, -1.0, 2.1, 1.2, 1.2, -0.2]);

    let batch = fe_evaluate_batch(&dofs, &points, &mesh).unwrap();
    assert_eq!(batch.len(), points.len());
    for (&p, &b) in points.iter().zip(&batch) {
        assert_eq!(fe_evaluate(&dofs, p, &mesh).unwrap(), b, "point {}", p);
    }
}

#[test]
fn test_interpolation_error_decreases_with_refinement() {
    let f = |x: f64| (3.0 * x).cos();
    let points: Vec<f64> = (0..101).map(|i| i as f64 / 100.0).collect();
    let max_error = |n_elements: usize| {
        let mesh = Mesh1D::uniform(0.0, 1.0, n_elements, 2).unwrap();
        let dofs = mesh.interpolate(f);
        let values = fe_evaluate_batch(&dofs, &points, &mesh).unwrap();
        points
            .iter()
            .zip(&values)
            .map(|(&p, &v)| (v - f(p)).abs())
            .fold(0.0_f64, f64::max)
    };
    let coarse = max_error(4);
    let fine = max_error(8);
    // Quadratic elements: error ~ h^3
    assert!(coarse / fine > 5.0, "ratio {} too small", coarse / fine);
}

#[test]
fn test_reject_policy_is_shared() {
    let mesh = Mesh1D::uniform(0.0, 1.0, 2, 1).unwrap();
    let basis = LagrangeBasis::equispaced(1).unwrap();
    let dofs = [0.0, 1.0, 0.0];
    let fe = FeFunction::new(&mesh, &basis, &dofs)
        .unwrap()
        .with_config(EvaluationConfig::default().with_policy(DomainPolicy::Reject));

    assert!(matches!(fe.evaluate(1.5), Err(FemError::OutOfDomain { .. })));
    assert!(matches!(
        fe.evaluate_batch(&[0.2, 1.5]),
        Err(FemError::OutOfDomain { .. })
    ));

    // Default clamps to the last element and extrapolates
    let clamped = FeFunction::new(&mesh, &basis, &dofs).unwrap();
    assert_relative_eq!(clamped.evaluate(1.5).unwrap(), -1.0, epsilon = 1e-14);
}

#[test]
fn test_dof_length_mismatch() {
    let mesh = Mesh1D::uniform(0.0, 1.0, 2, 2).unwrap();
    let err = fe_evaluate(&[1.0, 2.0, 3.0], 0.5, &mesh).unwrap_err();
    assert!(matches!(
        err,
        FemError::DimensionMismatch {
            expected: 5,
            actual: 3,
            ..
        }
    ));
}
