//! Per-tick force accumulation: wind on faces, gravity and spring tension.
//!
//! Every call rewrites each particle's acceleration from zero. Nothing
//! carries over from the previous tick.

use crate::config::ClothConfig;
use crate::float::Float;
use crate::mesh::ClothMesh;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::Vec3;

/// Recompute every particle's acceleration from wind, gravity, and springs.
pub fn accumulate_forces<F: Float>(mesh: &mut ClothMesh<F>, wind: Vec3<F>, config: &ClothConfig<F>) {
    for p in mesh.particles_mut() {
        p.acceleration = Vec3::zero();
    }

    let faces = mesh.faces();
    let (particles, springs) = mesh.parts_mut();

    for face in faces {
        apply_wind(particles, face, wind);
    }

    for spring in springs {
        apply_spring(particles, spring, config.gravity, config.spring_constant);
    }
}

/// Wind pushes a triangle along its normal in proportion to how squarely it
/// faces the wind. The same acceleration goes to all three corners.
fn apply_wind<F: Float>(particles: &mut [Particle<F>], face: [usize; 3], wind: Vec3<F>) {
    let [i0, i1, i2] = face;
    let v0 = particles[i0].pos;
    let v1 = particles[i1].pos;
    let v2 = particles[i2].pos;

    let normal = (v1 - v0).cross(v2 - v0).normalize();
    let total_mass = particles[i0].mass + particles[i1].mass + particles[i2].mass;
    let accel = (normal * normal.dot(wind)) / total_mass;

    for i in face {
        particles[i].acceleration = particles[i].acceleration + accel;
    }
}

/// Gravity on both endpoints plus Hooke tension along the spring.
///
/// The tension term is divided by `p0`'s mass for both endpoints. Gravity is
/// added once per incident spring, so interior particles collect more of it
/// than edge particles.
fn apply_spring<F: Float>(
    particles: &mut [Particle<F>],
    spring: &Spring<F>,
    gravity: Vec3<F>,
    spring_constant: F,
) {
    let (i0, i1) = (spring.p0, spring.p1);
    let m0 = particles[i0].mass;
    let m1 = particles[i1].mass;

    let delta = particles[i0].pos - particles[i1].pos;
    let dist = delta.length();
    let stretch = dist - spring.rest_length;

    let tension = ((delta / dist) * (spring_constant * stretch)) / m0;

    particles[i0].acceleration = (gravity / m0 - tension) + particles[i0].acceleration;
    particles[i1].acceleration = (gravity / m1 + tension) + particles[i1].acceleration;
}
