//! Springs connecting pairs of cloth particles.

use crate::float::Float;
use crate::particle::Particle;

/// Role of a spring in the cloth topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpringKind {
    /// Axis-adjacent neighbors. Resists stretch along the grid axes.
    Structural,
    /// Diagonal neighbors. Resists shearing.
    Shear,
    /// Neighbors two cells apart along an axis. Resists folding.
    Bend,
}

/// A spring between particles `p0` and `p1` of the owning mesh.
///
/// Endpoints are indices into the mesh's particle array; the rest length is
/// captured once at generation time and never changes.
#[derive(Clone, Debug)]
pub struct Spring<F: Float> {
    pub p0: usize,
    pub p1: usize,
    pub rest_length: F,
    pub kind: SpringKind,
}

impl<F: Float> Spring<F> {
    pub fn new(p0: usize, p1: usize, rest_length: F, kind: SpringKind) -> Self {
        Spring { p0, p1, rest_length, kind }
    }

    /// Current distance between the two endpoints.
    pub fn length(&self, particles: &[Particle<F>]) -> F {
        particles[self.p0].pos.distance(particles[self.p1].pos)
    }

    /// Signed deviation from rest length (positive when stretched).
    pub fn stretch(&self, particles: &[Particle<F>]) -> F {
        self.length(particles) - self.rest_length
    }

    /// Move both endpoints halfway toward satisfying the rest length.
    ///
    /// The correction is `d * (1 - rest / |d|) * 0.5` with `d = p0 - p1`,
    /// subtracted from `p0` and added to `p1`. Pinned endpoints stay put,
    /// and the other endpoint still only receives its half.
    pub fn relax(&self, particles: &mut [Particle<F>]) {
        let delta = particles[self.p0].pos - particles[self.p1].pos;
        let dist = delta.length();

        let correction = (delta * (F::one() - self.rest_length / dist)) * F::half();

        if !particles[self.p0].pinned {
            particles[self.p0].pos = particles[self.p0].pos - correction;
        }
        if !particles[self.p1].pinned {
            particles[self.p1].pos = particles[self.p1].pos + correction;
        }
    }
}
