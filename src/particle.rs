//! Verlet particles for the cloth mesh.

use crate::float::Float;
use crate::vec::Vec3;

/// RGBA render tag carried by each particle. Never read by the physics.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Off-white used for most of the cloth.
    pub const LINEN: Rgba = Rgba::new(0.996, 1.0, 0.906, 1.0);
    /// Orange used on odd-row, odd-column particles.
    pub const ORANGE: Rgba = Rgba::new(0.941, 0.427, 0.102, 1.0);
}

/// A Verlet particle. Velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Debug)]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub prev_pos: Vec3<F>,
    /// Per-tick acceleration, overwritten by every force accumulation.
    pub acceleration: Vec3<F>,
    pub color: Rgba,
    pub mass: F,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// A resting, unpinned particle.
    pub fn new(pos: Vec3<F>, mass: F, color: Rgba) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec3::zero(),
            color,
            mass,
            pinned: false,
        }
    }

    /// Advance one Verlet step:
    /// `pos' = 2 * pos - prev_pos * damping + acceleration * dt_sq`.
    ///
    /// The damping factor scales the previous position, not the velocity.
    /// Pinned particles never move.
    pub fn integrate(&mut self, damping: F, dt_sq: F) {
        if self.pinned {
            return;
        }
        let current = self.pos;
        self.pos = (self.pos * F::two() - self.prev_pos * damping) + self.acceleration * dt_sq;
        self.prev_pos = current;
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec3<F> {
        self.pos - self.prev_pos
    }
}
