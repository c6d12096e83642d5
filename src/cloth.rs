//! The cloth engine: one mesh advanced by explicit ticks.

use crate::collision::{resolve_collisions, Collidable};
use crate::config::ClothConfig;
use crate::constraint::satisfy_constraints;
use crate::error::ClothError;
use crate::float::Float;
use crate::force::accumulate_forces;
use crate::mesh::{ClothMesh, Faces, MeshConfig};
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::vec::Vec3;
use alloc::vec::Vec as AllocVec;

/// A self-contained cloth simulation value.
///
/// Each [`step`](Cloth::step) runs, in order: force accumulation, constraint
/// relaxation, Verlet integration, collision resolution. Nothing happens
/// between steps and no state is global.
#[derive(Clone, Debug)]
pub struct Cloth<F: Float> {
    mesh: ClothMesh<F>,
    config: ClothConfig<F>,
}

impl<F: Float> Cloth<F> {
    pub fn new(mesh: &MeshConfig<F>, config: ClothConfig<F>) -> Result<Self, ClothError> {
        let mesh = ClothMesh::new(mesh, config.particle_mass)?;
        Ok(Cloth { mesh, config })
    }

    /// Advance one tick under `wind`, then push particles out of `colliders`.
    pub fn step<C: Collidable<F>, O: StepObserver>(
        &mut self,
        wind: Vec3<F>,
        colliders: &[C],
        observer: &mut O,
    ) {
        self.accumulate_forces(wind);
        observer.on_forces_accumulated();

        self.satisfy_constraints(observer);

        self.integrate();
        observer.on_integrate();

        let corrections = self.resolve_collisions(colliders);
        observer.on_collisions_resolved(corrections);

        observer.on_step_complete();
    }

    /// Overwrite every particle's acceleration for this tick.
    pub fn accumulate_forces(&mut self, wind: Vec3<F>) {
        accumulate_forces(&mut self.mesh, wind, &self.config);
    }

    /// Run the configured number of relaxation passes.
    pub fn satisfy_constraints<O: StepObserver>(&mut self, observer: &mut O) {
        satisfy_constraints(&mut self.mesh, self.config.iterations, observer);
    }

    /// Verlet-step every unpinned particle with its stored acceleration.
    pub fn integrate(&mut self) {
        let (damping, dt_sq) = (self.config.damping, self.config.timestep_sq);
        for p in self.mesh.particles_mut() {
            p.integrate(damping, dt_sq);
        }
    }

    /// Project penetrating particles onto collider surfaces.
    pub fn resolve_collisions<C: Collidable<F>>(&mut self, colliders: &[C]) -> usize {
        resolve_collisions(
            self.mesh.particles_mut(),
            colliders,
            self.config.collision_offset,
            self.config.collide_pinned,
        )
    }

    /// Release every pinned particle. Returns how many were released.
    pub fn detach(&mut self) -> usize {
        let released = self.mesh.detach();
        log::debug!("cloth detached, {} particles released", released);
        released
    }

    pub fn pin(&mut self, row: usize, col: usize) {
        self.mesh.pin(row, col);
    }

    /// Read-only view of the grid for rendering.
    pub fn particles(&self) -> &[Particle<F>] {
        self.mesh.particles()
    }

    pub fn positions(&self) -> AllocVec<Vec3<F>> {
        self.mesh.particles().iter().map(|p| p.pos).collect()
    }

    pub fn position_at(&self, row: usize, col: usize) -> Vec3<F> {
        self.mesh.particle_at(row, col).pos
    }

    /// Triangles to draw, as particle index triples.
    pub fn faces(&self) -> Faces {
        self.mesh.faces()
    }

    pub fn mesh(&self) -> &ClothMesh<F> { &self.mesh }
    pub fn mesh_mut(&mut self) -> &mut ClothMesh<F> { &mut self.mesh }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn rows(&self) -> usize { self.mesh.rows() }
    pub fn cols(&self) -> usize { self.mesh.cols() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::SphereCollider;
    use crate::observer::NoOpStepObserver;

    #[derive(Default)]
    struct PhaseLog {
        forces: usize,
        passes: usize,
        integrated: bool,
        corrections: usize,
        complete: bool,
    }

    impl StepObserver for PhaseLog {
        fn on_forces_accumulated(&mut self) {
            self.forces += 1;
        }
        fn on_constraint_iteration(&mut self, _iteration: usize) {
            assert_eq!(self.forces, 1, "relaxation must follow force accumulation");
            self.passes += 1;
        }
        fn on_integrate(&mut self) {
            self.integrated = true;
        }
        fn on_collisions_resolved(&mut self, corrections: usize) {
            assert!(self.integrated, "collisions must follow integration");
            self.corrections = corrections;
        }
        fn on_step_complete(&mut self) {
            self.complete = true;
        }
    }

    #[test]
    fn step_runs_phases_in_order() {
        let mut cloth = Cloth::<f32>::new(&MeshConfig::new(4, 4), ClothConfig::new().with_iterations(5)).unwrap();
        let mut phases = PhaseLog::default();
        let none: [SphereCollider<f32>; 0] = [];
        cloth.step(Vec3::zero(), &none, &mut phases);
        assert_eq!(phases.forces, 1);
        assert_eq!(phases.passes, 5);
        assert!(phases.complete);
        assert_eq!(phases.corrections, 0);
    }

    #[test]
    fn rejects_bad_mass() {
        let err = Cloth::<f32>::new(&MeshConfig::new(4, 4), ClothConfig::new().with_particle_mass(-1.0));
        assert_eq!(err.unwrap_err(), ClothError::InvalidMass);
    }

    #[test]
    fn sphere_under_cloth_displaces_particles() {
        let mut cloth = Cloth::<f32>::new(&MeshConfig::new(5, 5), ClothConfig::new()).unwrap();
        let center = cloth.position_at(2, 2) + Vec3::new(0.0, 0.0, 0.1);
        let sphere = SphereCollider::new(center, 0.3f32).unwrap();
        cloth.step(Vec3::zero(), &[sphere], &mut NoOpStepObserver);
        for p in cloth.particles() {
            assert!(p.pos.distance(center) >= 0.3);
        }
    }
}
