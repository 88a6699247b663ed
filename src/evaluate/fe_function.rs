//! Scalar and batched evaluation of a mesh function.

use faer::Mat;

use super::{DomainPolicy, EvaluationConfig};
use crate::basis::{combine, LagrangeBasis};
use crate::error::{FemError, Result};
use crate::mesh::Mesh1D;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// DOF vector bound to its mesh and reference basis.
#[derive(Clone, Copy, Debug)]
pub struct FeFunction<'a> {
    mesh: &'a Mesh1D,
    basis: &'a LagrangeBasis,
    dofs: &'a [f64],
    config: EvaluationConfig,
}

impl<'a> FeFunction<'a> {
    /// Bind `dofs` (one value per global node) to a mesh and reference basis.
    pub fn new(mesh: &'a Mesh1D, basis: &'a LagrangeBasis, dofs: &'a [f64]) -> Result<Self> {
        if dofs.len() != mesh.n_nodes() {
            return Err(FemError::dimension_mismatch(
                "DOF vector",
                mesh.n_nodes(),
                dofs.len(),
            ));
        }
        if basis.len() != mesh.degree() + 1 {
            return Err(FemError::dimension_mismatch(
                "basis functions per element",
                mesh.degree() + 1,
                basis.len(),
            ));
        }
        Ok(Self {
            mesh,
            basis,
            dofs,
            config: EvaluationConfig::default(),
        })
    }

    pub fn with_config(mut self, config: EvaluationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> EvaluationConfig {
        self.config
    }

    pub fn mesh(&self) -> &Mesh1D {
        self.mesh
    }

    pub fn dofs(&self) -> &[f64] {
        self.dofs
    }

    /// DOFs of element `e`, in local order.
    pub fn local_dofs(&self, e: usize) -> Result<&'a [f64]> {
        self.mesh.element(e)?;
        Ok(self.element_dofs(e))
    }

    /// `e` must come from `locate_element`.
    fn element_dofs(&self, e: usize) -> &'a [f64] {
        let dofs = self.dofs;
        &dofs[self.mesh.global_range(e)]
    }

    fn check_point(&self, p: f64) -> Result<()> {
        match self.config.policy {
            DomainPolicy::Clamp => Ok(()),
            DomainPolicy::Reject if self.mesh.contains(p) => Ok(()),
            DomainPolicy::Reject => Err(FemError::OutOfDomain {
                point: p,
                x_min: self.mesh.x_min(),
                x_max: self.mesh.x_max(),
            }),
        }
    }

    /// Owning element and reference coordinate of `p`.
    fn locate(&self, p: f64) -> (usize, f64) {
        let e = self.mesh.locate_element(p);
        let xi = self.mesh.element_unchecked(e).reference_from_physical(p);
        (e, xi)
    }

    /// Evaluate at a single physical point.
    pub fn evaluate(&self, p: f64) -> Result<f64> {
        self.check_point(p)?;
        let (e, xi) = self.locate(p);
        Ok(combine(self.basis, self.element_dofs(e), xi))
    }

    /// Evaluate at many physical points in any order.
    ///
    /// Elements are located per point, all points are mapped to reference
    /// coordinates, the basis is evaluated at every mapped point in one
    /// matrix V[(r, p)], and each result is the dot product of the point's
    /// local DOFs with its column of V. The result equals calling
    /// [`FeFunction::evaluate`] on each point. If any point is rejected by the
    /// domain policy the whole batch fails.
    pub fn evaluate_batch(&self, points: &[f64]) -> Result<Vec<f64>> {
        for &p in points {
            self.check_point(p)?;
        }

        let (elements, xis): (Vec<usize>, Vec<f64>) =
            points.iter().map(|&p| self.locate(p)).unzip();

        let n_local = self.basis.len();
        let v = self.basis.evaluate_matrix(&xis);
        let local = Mat::from_fn(points.len(), n_local, |p, r| {
            self.dofs[self.mesh.local_to_global(elements[p], r)]
        });

        Ok((0..points.len())
            .map(|p| (0..n_local).fold(0.0, |acc, r| acc + local[(p, r)] * v[(r, p)]))
            .collect())
    }

    /// Batched evaluation with points processed in parallel.
    #[cfg(feature = "parallel")]
    pub fn evaluate_batch_parallel(&self, points: &[f64]) -> Result<Vec<f64>> {
        points.par_iter().map(|&p| self.check_point(p)).collect::<Result<()>>()?;
        Ok(points
            .par_iter()
            .map(|&p| {
                let (e, xi) = self.locate(p);
                combine(self.basis, self.element_dofs(e), xi)
            })
            .collect())
    }
}

/// Evaluate `dofs` on `mesh` at `p` with the equispaced reference basis.
pub fn fe_evaluate(dofs: &[f64], p: f64, mesh: &Mesh1D) -> Result<f64> {
    let basis = LagrangeBasis::equispaced(mesh.degree())?;
    FeFunction::new(mesh, &basis, dofs)?.evaluate(p)
}

/// Evaluate `dofs` on `mesh` at every point with the equispaced reference basis.
pub fn fe_evaluate_batch(dofs: &[f64], points: &[f64], mesh: &Mesh1D) -> Result<Vec<f64>> {
    let basis = LagrangeBasis::equispaced(mesh.degree())?;
    FeFunction::new(mesh, &basis, dofs)?.evaluate_batch(points)
}
