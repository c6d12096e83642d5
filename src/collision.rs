//! Sphere colliders and positional collision response.

use crate::error::ClothError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// Something particles can penetrate and be pushed out of.
pub trait Collidable<F: Float> {
    /// Whether `point` lies strictly inside the body.
    fn contains(&self, point: Vec3<F>) -> bool;

    /// Where to put a penetrating `point`: on the surface, pushed a further
    /// `offset` fraction of the way outward.
    fn project_to_surface(&self, point: Vec3<F>, offset: F) -> Vec3<F>;
}

/// A sphere used purely as a geometric predicate. The cloth never moves it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereCollider<F: Float> {
    center: Vec3<F>,
    radius: F,
}

impl<F: Float> SphereCollider<F> {
    pub fn new(center: Vec3<F>, radius: F) -> Result<Self, ClothError> {
        if !radius.is_positive_finite() {
            return Err(ClothError::InvalidRadius);
        }
        Ok(SphereCollider { center, radius })
    }

    /// A unit-mesh sphere of `radius` drawn at `scale`; the collider keeps
    /// the post-scale radius.
    pub fn scaled(center: Vec3<F>, radius: F, scale: F) -> Result<Self, ClothError> {
        if !scale.is_positive_finite() {
            return Err(ClothError::InvalidScale);
        }
        Self::new(center, radius * scale)
    }

    pub fn center(&self) -> Vec3<F> { self.center }
    pub fn radius(&self) -> F { self.radius }

    pub fn set_center(&mut self, center: Vec3<F>) {
        self.center = center;
    }
}

impl<F: Float> Collidable<F> for SphereCollider<F> {
    fn contains(&self, point: Vec3<F>) -> bool {
        (point - self.center).length() < self.radius
    }

    fn project_to_surface(&self, point: Vec3<F>, offset: F) -> Vec3<F> {
        let normal = (point - self.center).normalize();
        let surface = normal * self.radius;
        self.center + surface + surface * offset
    }
}

/// Push every particle found inside a collider back out to its surface.
///
/// Colliders are processed in order, each against every particle. This is a
/// hard positional correction; `prev_pos` is left alone. Pinned particles are
/// corrected too unless `include_pinned` is false.
///
/// Returns the number of corrections made.
pub fn resolve_collisions<F: Float, C: Collidable<F>>(
    particles: &mut [Particle<F>],
    colliders: &[C],
    offset: F,
    include_pinned: bool,
) -> usize {
    let mut corrections = 0;
    for collider in colliders {
        for p in particles.iter_mut() {
            if p.pinned && !include_pinned {
                continue;
            }
            if collider.contains(p.pos) {
                p.pos = collider.project_to_surface(p.pos, offset);
                corrections += 1;
            }
        }
    }
    corrections
}
