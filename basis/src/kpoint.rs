extern crate nalgebra as na;

use na::Vector3;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Integer index triple (n, m, l) of a reciprocal lattice vector.
#[derive(Debug, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
pub struct KPoint {
    pub n: i32,
    pub m: i32,
    pub l: i32,
}

impl KPoint {
    pub fn new(n: i32, m: i32, l: i32) -> Self {
        Self { n, m, l }
    }

    pub fn indices(&self) -> Vector3<i32> {
        Vector3::new(self.n, self.m, self.l)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.n as f64, self.m as f64, self.l as f64)
    }

    /// Kinetic energy of this k-point, see [`kinetic`].
    pub fn kinetic(&self) -> f64 {
        kinetic(self)
    }
}

impl From<(i32, i32, i32)> for KPoint {
    fn from((n, m, l): (i32, i32, i32)) -> Self {
        KPoint::new(n, m, l)
    }
}

impl From<Vector3<i32>> for KPoint {
    fn from(v: Vector3<i32>) -> Self {
        KPoint::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for KPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:>3},{:>3},{:>3})", self.n, self.m, self.l)
    }
}

/// Kinetic energy of a k-point: the L2 norm sqrt(n^2 + m^2 + l^2).
///
/// No tolerance is applied anywhere this value is compared, so a point whose
/// norm equals the cutoff exactly is inside the basis.
pub fn kinetic(k: &KPoint) -> f64 {
    k.to_vector().norm()
}

/// Orders two k-points by kinetic energy only. Equal energies compare equal,
/// so the relative order of degenerate points is left to the sort.
pub fn compare_kinetic(a: &KPoint, b: &KPoint) -> Ordering {
    kinetic(a).total_cmp(&kinetic(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kinetic_reference_values() {
        assert_eq!(kinetic(&KPoint::new(0, 0, 0)), 0.0);
        assert_eq!(kinetic(&KPoint::new(1, 0, 0)), 1.0);
        assert_relative_eq!(kinetic(&KPoint::new(1, 1, 1)), 3.0_f64.sqrt(), epsilon = 1e-15);
        assert_relative_eq!(kinetic(&KPoint::new(-2, 1, -2)), 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_compare_kinetic() {
        let a = KPoint::new(1, 0, 0);
        let b = KPoint::new(0, -1, 0);
        let c = KPoint::new(1, 1, 0);
        assert_eq!(compare_kinetic(&a, &b), Ordering::Equal);
        assert_eq!(compare_kinetic(&a, &c), Ordering::Less);
        assert_eq!(compare_kinetic(&c, &b), Ordering::Greater);
    }

    #[test]
    fn test_display_fixed_width() {
        assert_eq!(KPoint::new(1, -2, 10).to_string(), "(  1, -2, 10)");
    }

    #[test]
    fn test_vector_conversions() {
        let k = KPoint::from((3, -1, 2));
        assert_eq!(k.indices(), Vector3::new(3, -1, 2));
        assert_eq!(KPoint::from(k.indices()), k);
        assert_eq!(k.to_vector(), Vector3::new(3.0, -1.0, 2.0));
    }
}
