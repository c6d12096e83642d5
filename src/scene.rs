//! A ready-made scene: one cloth, moving spheres, wind, frame pacing.
//!
//! This is the non-graphical part of an interactive cloth demo. A host
//! feeds it wall-clock time and key presses and draws whatever
//! [`Scene::cloth`] and [`Scene::spheres`] report.

use alloc::vec::Vec as AllocVec;
use core::time::Duration;

use crate::cloth::Cloth;
use crate::collision::{Collidable, SphereCollider};
use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::mesh::MeshConfig;
use crate::observer::StepObserver;
use crate::sim::{ClothSimulation, TickInput};
use crate::vec::Vec3;
use crate::wind::Wind;

/// Something that moves on its own each tick.
pub trait Movable {
    fn advance(&mut self, elapsed: Duration);
}

/// Scene pacing and sphere motion parameters.
#[derive(Clone, Debug)]
pub struct SceneConfig<F: Float> {
    /// A tick only runs once more than this much time has built up.
    pub min_step: Duration,
    /// X bounds between which spheres bounce.
    pub sphere_bounds: (F, F),
    /// Sphere displacement per tick along X.
    pub sphere_speed: F,
}

impl<F: Float> Default for SceneConfig<F> {
    fn default() -> Self {
        SceneConfig {
            min_step: Duration::from_millis(16),
            sphere_bounds: (F::from_f32(-1.5), F::from_f32(1.5)),
            sphere_speed: F::from_f32(0.05),
        }
    }
}

/// A sphere sliding back and forth along X.
///
/// It moves a fixed distance per tick regardless of elapsed time, and turns
/// around once it has passed a bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovingSphere<F: Float> {
    collider: SphereCollider<F>,
    velocity: F,
    bounds: (F, F),
    speed: F,
    moving: bool,
}

impl<F: Float> MovingSphere<F> {
    pub fn new(collider: SphereCollider<F>, bounds: (F, F), speed: F) -> Self {
        MovingSphere { collider, velocity: speed, bounds, speed, moving: true }
    }

    pub fn toggle_movement(&mut self) {
        self.moving = !self.moving;
    }

    pub fn is_moving(&self) -> bool { self.moving }
    pub fn collider(&self) -> &SphereCollider<F> { &self.collider }
    pub fn position(&self) -> Vec3<F> { self.collider.center() }
    pub fn radius(&self) -> F { self.collider.radius() }
}

impl<F: Float> Movable for MovingSphere<F> {
    fn advance(&mut self, _elapsed: Duration) {
        if !self.moving {
            return;
        }
        let mut center = self.collider.center();
        if center.x < self.bounds.0 {
            self.velocity = self.speed;
        } else if center.x > self.bounds.1 {
            self.velocity = -self.speed;
        }
        center.x = center.x + self.velocity;
        self.collider.set_center(center);
    }
}

impl<F: Float> Collidable<F> for MovingSphere<F> {
    fn contains(&self, point: Vec3<F>) -> bool {
        self.collider.contains(point)
    }

    fn project_to_surface(&self, point: Vec3<F>, offset: F) -> Vec3<F> {
        self.collider.project_to_surface(point, offset)
    }
}

/// Cloth, spheres, and the user-facing toggles around them.
#[derive(Clone, Debug)]
pub struct Scene<F: Float> {
    sim: ClothSimulation<F>,
    spheres: AllocVec<MovingSphere<F>>,
    config: SceneConfig<F>,
    pending: Duration,
    paused: bool,
    wind_enabled: bool,
    applied_wind: Vec3<F>,
}

impl<F: Float> Scene<F> {
    pub fn new(sim: ClothSimulation<F>, config: SceneConfig<F>) -> Self {
        let wind_enabled = sim.wind().is_enabled();
        Scene {
            sim,
            spheres: AllocVec::new(),
            config,
            pending: Duration::ZERO,
            paused: false,
            wind_enabled,
            applied_wind: Vec3::zero(),
        }
    }

    /// The classic setup: a 50x50 cloth hanging in front of a half-size
    /// sphere, with wind blowing down and away.
    pub fn demo() -> Result<Self, ClothError> {
        let mesh = MeshConfig::new(50, 50).with_origin(Vec3::new(
            F::from_f32(-1.0),
            F::one(),
            F::from_f32(-2.0),
        ));
        let cloth = Cloth::new(&mesh, ClothConfig::new())?;
        let wind = Wind::new(Vec3::new(F::zero(), F::from_f32(-2.0), F::from_f32(-1.5)));

        let mut scene = Scene::new(ClothSimulation::new(cloth, wind), SceneConfig::default());
        let sphere = SphereCollider::scaled(
            Vec3::new(F::from_f32(-0.5), F::from_f32(-0.5), F::from_f32(-2.5)),
            F::one(),
            F::half(),
        )?;
        scene.add_sphere(sphere);
        Ok(scene)
    }

    /// Add a sphere that moves with this scene's bounds and speed.
    pub fn add_sphere(&mut self, collider: SphereCollider<F>) {
        self.spheres.push(MovingSphere::new(
            collider,
            self.config.sphere_bounds,
            self.config.sphere_speed,
        ));
    }

    /// Feed wall-clock time. Runs at most one tick, and only once more than
    /// the minimum step has accumulated since the last one. Pending time is
    /// consumed even while paused.
    ///
    /// Returns whether physics ran.
    pub fn advance<O: StepObserver>(&mut self, elapsed: Duration, observer: &mut O) -> bool {
        self.pending += elapsed;
        if self.pending <= self.config.min_step {
            return false;
        }
        let delta = core::mem::replace(&mut self.pending, Duration::ZERO);
        if self.paused {
            return false;
        }

        for sphere in self.spheres.iter_mut() {
            sphere.advance(delta);
        }

        let input = TickInput::new(delta, &self.spheres[..]).with_wind(self.wind_enabled);
        self.applied_wind = self.sim.tick(input, observer);
        true
    }

    /// Release every pinned particle now, paused or not. The cloth starts
    /// falling on the next tick that runs.
    pub fn request_detach(&mut self) -> usize {
        self.sim.cloth_mut().detach()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("scene {}", if self.paused { "paused" } else { "resumed" });
    }

    pub fn toggle_wind(&mut self) {
        self.wind_enabled = !self.wind_enabled;
    }

    pub fn toggle_sphere_movement(&mut self) {
        for sphere in self.spheres.iter_mut() {
            sphere.toggle_movement();
        }
    }

    pub fn cloth(&self) -> &Cloth<F> { self.sim.cloth() }
    pub fn simulation(&self) -> &ClothSimulation<F> { &self.sim }
    pub fn spheres(&self) -> &[MovingSphere<F>] { &self.spheres }
    pub fn is_paused(&self) -> bool { self.paused }
    pub fn wind_enabled(&self) -> bool { self.wind_enabled }
    /// Wind vector used by the most recent tick.
    pub fn applied_wind(&self) -> Vec3<F> { self.applied_wind }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;
    use crate::particle::Rgba;

    fn sphere_at(x: f32) -> MovingSphere<f32> {
        let collider = SphereCollider::new(Vec3::new(x, 0.0, 0.0), 0.5).unwrap();
        MovingSphere::new(collider, (-1.5, 1.5), 0.05)
    }

    fn small_scene() -> Scene<f32> {
        let cloth = Cloth::new(&MeshConfig::new(5, 5), ClothConfig::new().with_iterations(4)).unwrap();
        let sim = ClothSimulation::new(cloth, Wind::new(Vec3::new(0.0, -2.0, -1.5)));
        Scene::new(sim, SceneConfig::default())
    }

    #[test]
    fn sphere_turns_around_past_bounds() {
        let mut sphere = sphere_at(1.48);
        sphere.advance(Duration::from_millis(17));
        assert!((sphere.position().x - 1.53).abs() < 1e-5);
        sphere.advance(Duration::from_millis(17));
        assert!((sphere.position().x - 1.48).abs() < 1e-5);
    }

    #[test]
    fn frozen_sphere_stays_put() {
        let mut sphere = sphere_at(0.0);
        sphere.toggle_movement();
        sphere.advance(Duration::from_millis(17));
        assert_eq!(sphere.position().x, 0.0);
    }

    #[test]
    fn waits_for_minimum_step() {
        let mut scene = small_scene();
        assert!(!scene.advance(Duration::from_millis(10), &mut NoOpStepObserver));
        assert!(!scene.advance(Duration::from_millis(6), &mut NoOpStepObserver));
        assert!(scene.advance(Duration::from_millis(1), &mut NoOpStepObserver));
        assert_eq!(scene.simulation().ticks(), 1);
    }

    #[test]
    fn paused_scene_consumes_time_without_ticking() {
        let mut scene = small_scene();
        scene.toggle_pause();
        assert!(!scene.advance(Duration::from_millis(40), &mut NoOpStepObserver));
        scene.toggle_pause();
        assert!(!scene.advance(Duration::from_millis(10), &mut NoOpStepObserver));
        assert_eq!(scene.simulation().ticks(), 0);
    }

    #[test]
    fn detach_releases_pins_immediately() {
        let mut scene = small_scene();
        assert_eq!(scene.request_detach(), 5);
        assert!(scene.cloth().mesh().pinned_indices().is_empty());
        assert!(scene.cloth().particles().iter().all(|p| !p.pinned));
        assert!(scene.advance(Duration::from_millis(17), &mut NoOpStepObserver));
        assert!(scene.cloth().mesh().pinned_indices().is_empty());
    }

    #[test]
    fn detach_while_paused() {
        let mut scene = small_scene();
        scene.toggle_pause();
        scene.request_detach();
        assert!(!scene.advance(Duration::from_millis(17), &mut NoOpStepObserver));
        assert!(scene.cloth().particles().iter().all(|p| !p.pinned));
    }

    #[test]
    fn wind_toggle_calms_cloth_but_keeps_clock() {
        let mut scene = small_scene();
        assert!(scene.advance(Duration::from_millis(17), &mut NoOpStepObserver));
        assert_eq!(scene.applied_wind(), Vec3::new(0.0, -2.0, -1.5));

        scene.toggle_wind();
        assert!(!scene.wind_enabled());
        // 70 more ticks bring the wind clock to 1207 ms.
        for _ in 0..70 {
            assert!(scene.advance(Duration::from_millis(17), &mut NoOpStepObserver));
            assert_eq!(scene.applied_wind(), Vec3::zero());
        }
        assert!(!scene.simulation().wind().is_enabled());
        assert_eq!(scene.simulation().wind().reversals(), 1);

        scene.toggle_wind();
        scene.advance(Duration::from_millis(17), &mut NoOpStepObserver);
        assert_eq!(scene.applied_wind(), Vec3::new(0.0, 2.0, 1.5));
    }

    #[test]
    fn frozen_spheres_hold_across_ticks() {
        let mut scene = small_scene();
        scene.add_sphere(SphereCollider::new(Vec3::new(0.3, -1.0, 0.8), 0.5).unwrap());
        scene.toggle_sphere_movement();
        assert!(!scene.spheres()[0].is_moving());
        for _ in 0..5 {
            scene.advance(Duration::from_millis(17), &mut NoOpStepObserver);
        }
        assert_eq!(scene.spheres()[0].position(), Vec3::new(0.3, -1.0, 0.8));

        scene.toggle_sphere_movement();
        scene.advance(Duration::from_millis(17), &mut NoOpStepObserver);
        assert!((scene.spheres()[0].position().x - 0.35).abs() < 1e-6);
    }

    #[test]
    fn custom_colors_reach_the_checkerboard() {
        let base = Rgba::new(0.1, 0.2, 0.3, 1.0);
        let accent = Rgba::new(0.9, 0.8, 0.7, 1.0);
        let mesh = MeshConfig::new(4, 4).with_colors(base, accent);
        let cloth = Cloth::<f32>::new(&mesh, ClothConfig::new()).unwrap();
        let scene = Scene::new(
            ClothSimulation::new(cloth, Wind::new(Vec3::zero())),
            SceneConfig::default(),
        );
        for row in 0..4 {
            for col in 0..4 {
                let expected = if row % 2 == 1 && col % 2 == 1 { accent } else { base };
                assert_eq!(scene.cloth().mesh().particle_at(row, col).color, expected);
            }
        }
    }

    #[test]
    fn demo_scene_layout() {
        let scene = Scene::<f32>::demo().unwrap();
        assert_eq!(scene.cloth().rows(), 50);
        assert_eq!(scene.spheres().len(), 1);
        assert_eq!(scene.spheres()[0].radius(), 0.5);
        assert_eq!(scene.cloth().mesh().pinned_indices().len(), 6);
    }
}
