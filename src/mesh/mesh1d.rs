//! 1D finite-element mesh with shared endpoint nodes.
//!
//! Global nodes x_0 < x_1 < ... < x_N are partitioned into Ne = N / d
//! elements of local degree d. Element e owns the global nodes
//! d*e ..= d*(e+1), so neighbouring elements share their endpoint node.

use std::ops::RangeInclusive;

use super::Element;
use crate::error::{FemError, Result};

/// 1D mesh of an interval with elements of uniform local degree.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh1D {
    /// Global node coordinates, strictly increasing
    nodes: Vec<f64>,
    /// Local polynomial degree d
    degree: usize,
    /// Number of elements N / d
    n_elements: usize,
}

impl Mesh1D {
    /// Create a mesh from global node coordinates and local degree.
    ///
    /// Requires `degree >= 1`, at least two finite strictly increasing nodes,
    /// and a node count of the form `d * Ne + 1`.
    pub fn new(nodes: Vec<f64>, degree: usize) -> Result<Self> {
        if degree == 0 {
            return Err(FemError::InvalidDegree(degree));
        }
        if nodes.len() < 2 {
            return Err(FemError::InvalidMesh(format!(
                "need at least 2 nodes, got {}",
                nodes.len()
            )));
        }
        if let Some((i, x)) = nodes.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(FemError::InvalidMesh(format!("node {i} is not finite: {x}")));
        }
        if let Some(i) = nodes.windows(2).position(|w| w[1] <= w[0]) {
            return Err(FemError::InvalidMesh(format!(
                "nodes must be strictly increasing: x[{}] = {} >= x[{}] = {}",
                i,
                nodes[i],
                i + 1,
                nodes[i + 1]
            )));
        }
        let n = nodes.len() - 1;
        if n % degree != 0 {
            return Err(FemError::InvalidMesh(format!(
                "{} intervals do not form whole elements of degree {}",
                n, degree
            )));
        }

        let n_elements = n / degree;
        log::debug!(
            "Mesh1D: {} nodes, {} elements of degree {} on [{}, {}]",
            nodes.len(),
            n_elements,
            degree,
            nodes[0],
            nodes[n]
        );

        Ok(Self {
            nodes,
            degree,
            n_elements,
        })
    }

    /// Uniform mesh of [x_min, x_max] with equispaced nodes inside each element.
    pub fn uniform(x_min: f64, x_max: f64, n_elements: usize, degree: usize) -> Result<Self> {
        if n_elements == 0 {
            return Err(FemError::InvalidMesh("need at least one element".into()));
        }
        if !(x_max > x_min) {
            return Err(FemError::InvalidMesh(format!(
                "x_max ({x_max}) must be greater than x_min ({x_min})"
            )));
        }
        if degree == 0 {
            return Err(FemError::InvalidDegree(degree));
        }

        let n = n_elements * degree;
        let h = (x_max - x_min) / n as f64;
        let mut nodes: Vec<f64> = (0..=n).map(|i| x_min + i as f64 * h).collect();
        nodes[n] = x_max;

        Self::new(nodes, degree)
    }

    /// Global node coordinates.
    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    /// Local polynomial degree.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of global nodes (N + 1), which is also the DOF count.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn n_elements(&self) -> usize {
        self.n_elements
    }

    pub fn x_min(&self) -> f64 {
        self.nodes[0]
    }

    pub fn x_max(&self) -> f64 {
        self.nodes[self.nodes.len() - 1]
    }

    /// Total domain length.
    pub fn length(&self) -> f64 {
        self.x_max() - self.x_min()
    }

    /// Left boundary of every element: x_{d*e}.
    pub fn left_boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes[..self.nodes.len() - 1]
            .iter()
            .step_by(self.degree)
            .copied()
    }

    /// View of element `e`.
    pub fn element(&self, e: usize) -> Result<Element> {
        if e >= self.n_elements {
            return Err(FemError::ElementOutOfRange {
                element: e,
                n_elements: self.n_elements,
            });
        }
        Ok(self.element_unchecked(e))
    }

    /// Element view without the range check; `e` must be < `n_elements`.
    pub(crate) fn element_unchecked(&self, e: usize) -> Element {
        Element::new(
            e,
            self.nodes[self.degree * e],
            self.nodes[self.degree * (e + 1)],
        )
    }

    /// Iterate over all elements in order.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        (0..self.n_elements).map(move |e| self.element_unchecked(e))
    }

    /// Physical boundaries (x_L, x_R) of element `e`.
    pub fn element_boundaries(&self, e: usize) -> Result<(f64, f64)> {
        self.element(e).map(|el| (el.x_left, el.x_right))
    }

    /// Length h_e = x_R - x_L of element `e`.
    pub fn element_length(&self, e: usize) -> Result<f64> {
        self.element(e).map(|el| el.length())
    }

    /// Global index of local node `r` of element `e`: d*e + r.
    #[inline]
    pub fn local_to_global(&self, e: usize, r: usize) -> usize {
        self.degree * e + r
    }

    /// Global indices owned by element `e`: d*e ..= d*(e+1).
    #[inline]
    pub fn global_range(&self, e: usize) -> RangeInclusive<usize> {
        self.degree * e..=self.degree * (e + 1)
    }

    /// Whether `p` lies in [x_0, x_N].
    pub fn contains(&self, p: f64) -> bool {
        p >= self.x_min() && p <= self.x_max()
    }

    /// Element owning physical point `p`.
    ///
    /// Largest element index whose left boundary is <= p. Points at or
    /// below x_0 (and NaN) go to element 0; points above x_N go to the last
    /// element. Interior element boundaries belong to the element on their right.
    pub fn locate_element(&self, p: f64) -> usize {
        // Binary search for the number of left boundaries <= p
        let (mut lo, mut hi) = (0, self.n_elements);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.nodes[self.degree * mid] <= p {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo.saturating_sub(1)
    }

    /// Sample `f` at every global node to obtain a DOF vector.
    pub fn interpolate<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(f64) -> f64,
    {
        self.nodes.iter().map(|&x| f(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_mesh() {
        let mesh = Mesh1D::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(mesh.n_elements(), 4);
        assert_eq!(mesh.n_nodes(), 5);
        assert_eq!(mesh.element_boundaries(2).unwrap(), (2.0, 3.0));
        assert_eq!(mesh.element_length(3).unwrap(), 1.0);
    }

    #[test]
    fn test_quadratic_mesh_layout() {
        let mesh = Mesh1D::new(vec![0.0, 0.5, 1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(mesh.n_elements(), 2);
        assert_eq!(mesh.element_boundaries(0).unwrap(), (0.0, 1.0));
        assert_eq!(mesh.element_boundaries(1).unwrap(), (1.0, 3.0));
        assert_eq!(mesh.global_range(1), 2..=4);
        assert_eq!(mesh.local_to_global(1, 0), 2);
        assert_eq!(mesh.local_to_global(0, 2), 2);
        let lefts: Vec<f64> = mesh.left_boundaries().collect();
        assert_eq!(lefts, vec![0.0, 1.0]);
    }

    #[test]
    fn test_uniform() {
        let mesh = Mesh1D::uniform(0.0, 1.0, 4, 2).unwrap();
        assert_eq!(mesh.n_nodes(), 9);
        assert_eq!(mesh.x_max(), 1.0);
        assert!((mesh.element_length(1).unwrap() - 0.25).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_meshes() {
        assert!(matches!(
            Mesh1D::new(vec![0.0, 1.0, 1.0, 2.0], 1),
            Err(FemError::InvalidMesh(_))
        ));
        assert!(matches!(
            Mesh1D::new(vec![0.0, 2.0, 1.0], 1),
            Err(FemError::InvalidMesh(_))
        ));
        assert!(matches!(
            Mesh1D::new(vec![0.0, 1.0, 2.0, 3.0], 2),
            Err(FemError::InvalidMesh(_))
        ));
        assert!(matches!(
            Mesh1D::new(vec![0.0], 1),
            Err(FemError::InvalidMesh(_))
        ));
        assert_eq!(
            Mesh1D::new(vec![0.0, 1.0], 0),
            Err(FemError::InvalidDegree(0))
        );
        assert!(Mesh1D::uniform(1.0, 1.0, 3, 1).is_err());
        assert!(Mesh1D::uniform(0.0, 1.0, 0, 1).is_err());
    }

    #[test]
    fn test_element_out_of_range() {
        let mesh = Mesh1D::uniform(0.0, 1.0, 2, 1).unwrap();
        assert_eq!(
            mesh.element(2).unwrap_err(),
            FemError::ElementOutOfRange {
                element: 2,
                n_elements: 2
            }
        );
    }

    #[test]
    fn test_locate_element() {
        let mesh = Mesh1D::new(vec![0.0, 1.0, 2.0, 3.0], 1).unwrap();
        assert_eq!(mesh.locate_element(0.0), 0);
        assert_eq!(mesh.locate_element(0.5), 0);
        assert_eq!(mesh.locate_element(1.0), 1);
        assert_eq!(mesh.locate_element(1.5), 1);
        assert_eq!(mesh.locate_element(3.0), 2);
        // Clamp outside the domain
        assert_eq!(mesh.locate_element(-4.0), 0);
        assert_eq!(mesh.locate_element(7.0), 2);
        assert_eq!(mesh.locate_element(f64::NAN), 0);
    }

    #[test]
    fn test_locate_element_higher_degree() {
        let mesh = Mesh1D::uniform(0.0, 2.0, 2, 3).unwrap();
        // Interior nodes of element 0 do not start a new element
        assert_eq!(mesh.locate_element(0.7), 0);
        assert_eq!(mesh.locate_element(1.0), 1);
        assert_eq!(mesh.locate_element(1.9), 1);
    }

    #[test]
    fn test_interpolate() {
        let mesh = Mesh1D::new(vec![0.0, 1.0, 2.0, 3.0], 1).unwrap();
        assert_eq!(mesh.interpolate(|x| x * x), vec![0.0, 1.0, 4.0, 9.0]);
    }
}
