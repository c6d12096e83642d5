//! Iterative spring-length relaxation (Gauss-Seidel style).
//!
//! Springs are relaxed one after another in mesh order; each correction is
//! visible to the springs processed after it in the same pass. The result
//! converges toward rest lengths without solving them exactly.

use crate::float::Float;
use crate::mesh::ClothMesh;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::spring::Spring;

/// Run `iterations` relaxation passes over every spring in the mesh.
pub fn satisfy_constraints<F: Float, O: StepObserver>(
    mesh: &mut ClothMesh<F>,
    iterations: usize,
    observer: &mut O,
) {
    let (particles, springs) = mesh.parts_mut();
    for i in 0..iterations {
        relax_pass(particles, springs);
        observer.on_constraint_iteration(i);
    }
}

/// A single in-order pass over `springs`.
pub fn relax_pass<F: Float>(particles: &mut [Particle<F>], springs: &[Spring<F>]) {
    for spring in springs {
        spring.relax(particles);
    }
}
