//! Affine maps between a physical element and the reference interval [-1, 1].
//!
//! x(ξ) = (x_L + x_R) / 2 + h ξ / 2
//! ξ(x) = (2x - (x_L + x_R)) / h
//!
//! with h = x_R - x_L. The Jacobian dx/dξ = h / 2 is constant per element.

/// Copyable view of one mesh element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    /// Element index in the mesh
    pub index: usize,
    /// Left physical boundary
    pub x_left: f64,
    /// Right physical boundary
    pub x_right: f64,
}

impl Element {
    pub(crate) fn new(index: usize, x_left: f64, x_right: f64) -> Self {
        Self {
            index,
            x_left,
            x_right,
        }
    }

    /// h = x_R - x_L
    #[inline]
    pub fn length(&self) -> f64 {
        self.x_right - self.x_left
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.x_left + self.x_right) / 2.0
    }

    /// dx/dξ = h / 2
    #[inline]
    pub fn jacobian(&self) -> f64 {
        self.length() / 2.0
    }

    /// Map reference coordinate ξ to physical coordinate x.
    #[inline]
    pub fn physical_from_reference(&self, xi: f64) -> f64 {
        (self.x_left + self.x_right) / 2.0 + self.length() * xi / 2.0
    }

    /// Map physical coordinate x to reference coordinate ξ.
    #[inline]
    pub fn reference_from_physical(&self, x: f64) -> f64 {
        (2.0 * x - (self.x_left + self.x_right)) / self.length()
    }

    /// Express a physical-space function in reference coordinates: ξ ↦ u(x(ξ)).
    pub fn pull_back<'a, F>(&self, u: &'a F) -> impl Fn(f64) -> f64 + 'a
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let element = *self;
        move |xi| u(element.physical_from_reference(xi))
    }

    /// Whether `x` lies in [x_L, x_R].
    pub fn contains(&self, x: f64) -> bool {
        x >= self.x_left && x <= self.x_right
    }
}
