//! Load vector assembly.
//!
//! For a continuous function u(x) the global load vector is
//!
//! b[d*e + r] += (h_e / 2) * ∫_{-1}^{1} u(x_e(ξ)) ℓ_r(ξ) dξ
//!
//! summed over every element e and local basis index r. Endpoint nodes are
//! shared, so they collect contributions from both neighbouring elements.
//! The Jacobian h_e / 2 is applied per element because element lengths vary.

use crate::basis::LagrangeBasis;
use crate::error::{FemError, Result};
use crate::mesh::{Element, Mesh1D};
use crate::operators::ReferenceElement;
use crate::quadrature::{GaussKronrod, Integrator};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn check_basis(mesh: &Mesh1D, basis: &LagrangeBasis) -> Result<()> {
    let expected = mesh.degree() + 1;
    if basis.len() != expected {
        return Err(FemError::dimension_mismatch(
            "basis functions per element",
            expected,
            basis.len(),
        ));
    }
    Ok(())
}

/// Local load vector of one element, Jacobian included.
pub fn element_load_vector<F, I>(
    u: &F,
    element: &Element,
    basis: &LagrangeBasis,
    integrator: &I,
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64 + ?Sized,
    I: Integrator,
{
    let u_ref = element.pull_back(u);
    let jac = element.jacobian();

    (0..basis.len())
        .map(|r| {
            let integral = integrator.integrate(|xi| u_ref(xi) * basis.evaluate_unchecked(r, xi), -1.0, 1.0)?;
            Ok(jac * integral.value)
        })
        .collect()
}

/// Scatter one local vector into the global vector.
fn scatter(b: &mut [f64], mesh: &Mesh1D, e: usize, local: &[f64]) {
    for (r, &v) in local.iter().enumerate() {
        b[mesh.local_to_global(e, r)] += v;
    }
}

/// Assemble the global load vector of length N + 1.
///
/// # Arguments
/// * `u` - Function in physical coordinates
/// * `mesh` - Mesh of local degree d
/// * `basis` - Reference basis with d + 1 functions
/// * `integrator` - 1D rule used on [-1, 1]; only its value is used
pub fn assemble_load_vector<F, I>(
    u: F,
    mesh: &Mesh1D,
    basis: &LagrangeBasis,
    integrator: &I,
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
    I: Integrator,
{
    check_basis(mesh, basis)?;

    let mut b = vec![0.0; mesh.n_nodes()];
    for element in mesh.elements() {
        let local = element_load_vector(&u, &element, basis, integrator)?;
        log::trace!("Element {}: local load {:?}", element.index, local);
        scatter(&mut b, mesh, element.index, &local);
    }
    Ok(b)
}

/// Assemble the global load vector with elements processed in parallel.
///
/// Local vectors are computed concurrently, then merged in element order, so
/// the result is identical to [`assemble_load_vector`].
#[cfg(feature = "parallel")]
pub fn assemble_load_vector_parallel<F, I>(
    u: F,
    mesh: &Mesh1D,
    basis: &LagrangeBasis,
    integrator: &I,
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64 + Sync,
    I: Integrator + Sync,
{
    check_basis(mesh, basis)?;

    let locals: Vec<Vec<f64>> = (0..mesh.n_elements())
        .into_par_iter()
        .map(|e| element_load_vector(&u, &mesh.element_unchecked(e), basis, integrator))
        .collect::<Result<_>>()?;

    let mut b = vec![0.0; mesh.n_nodes()];
    for (e, local) in locals.iter().enumerate() {
        scatter(&mut b, mesh, e, local);
    }
    Ok(b)
}

/// Load vector assembler owning the reference element and integrator.
///
/// Builds the equispaced reference basis for the mesh degree once and reuses
/// it for every call.
#[derive(Clone, Debug)]
pub struct LoadAssembler<I = GaussKronrod> {
    reference: ReferenceElement,
    integrator: I,
}

impl LoadAssembler<GaussKronrod> {
    /// Assembler for elements of local degree `degree` with adaptive quadrature.
    pub fn new(degree: usize) -> Result<Self> {
        Ok(Self {
            reference: ReferenceElement::new(degree)?,
            integrator: GaussKronrod::default(),
        })
    }
}

impl<I: Integrator> LoadAssembler<I> {
    /// Replace the integrator.
    pub fn with_integrator<J: Integrator>(self, integrator: J) -> LoadAssembler<J> {
        LoadAssembler {
            reference: self.reference,
            integrator,
        }
    }

    pub fn reference(&self) -> &ReferenceElement {
        &self.reference
    }

    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    /// Assemble the load vector of `u` on `mesh`.
    pub fn assemble<F>(&self, u: F, mesh: &Mesh1D) -> Result<Vec<f64>>
    where
        F: Fn(f64) -> f64,
    {
        assemble_load_vector(u, mesh, &self.reference.basis, &self.integrator)
    }
}
