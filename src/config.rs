//! Physics constants for the cloth engine.

use crate::float::Float;
use crate::vec::Vec3;

/// Physics constants applied by [`Cloth`](crate::cloth::Cloth) every tick.
///
/// # Builder Pattern
/// ```
/// use billow::config::ClothConfig;
/// use billow::vec::Vec3;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_iterations(20)
///     .with_gravity(Vec3::new(0.0, -0.05, 0.0))
///     .with_damping(0.999)
///     .with_spring_constant(0.0);
/// ```
#[derive(Clone, Debug)]
pub struct ClothConfig<F: Float> {
    /// Mass of every particle. Default: 50.0.
    pub particle_mass: F,
    /// Constraint relaxation passes per tick. Default: 50.
    pub iterations: usize,
    /// Spring stiffness used by the force accumulator. Default: 2e-11.
    pub spring_constant: F,
    /// Multiplier on the previous position in the Verlet step.
    /// Slightly below 1.0 bleeds velocity. Default: 1.0 - 0.00002.
    pub damping: F,
    /// Gravity acceleration, divided by particle mass per incident spring.
    /// Default: (0, -0.02, 0).
    pub gravity: Vec3<F>,
    /// Fixed timestep squared. Wall-clock time never enters the integrator.
    /// Default: 0.01.
    pub timestep_sq: F,
    /// Extra push past a collider's surface, as a fraction of its radius.
    /// Default: 0.03.
    pub collision_offset: F,
    /// Whether collision projection also moves pinned particles. Default: true.
    pub collide_pinned: bool,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            particle_mass: F::from_f32(50.0),
            iterations: 50,
            spring_constant: F::from_f32(0.000_000_000_02),
            damping: F::one() - F::from_f32(0.000_02),
            gravity: Vec3::new(F::zero(), F::from_f32(-0.02), F::zero()),
            timestep_sq: F::from_f32(0.01),
            collision_offset: F::from_f32(0.03),
            collide_pinned: true,
        }
    }

    /// Set the particle mass.
    pub fn with_particle_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    /// Set the number of constraint relaxation passes.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the spring constant.
    pub fn with_spring_constant(mut self, k: F) -> Self {
        self.spring_constant = k;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the squared timestep.
    pub fn with_timestep_sq(mut self, timestep_sq: F) -> Self {
        self.timestep_sq = timestep_sq;
        self
    }

    /// Set the collision surface offset.
    pub fn with_collision_offset(mut self, offset: F) -> Self {
        self.collision_offset = offset;
        self
    }

    /// Choose whether collisions displace pinned particles.
    pub fn with_pinned_collisions(mut self, collide_pinned: bool) -> Self {
        self.collide_pinned = collide_pinned;
        self
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
