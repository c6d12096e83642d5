//! Verlet cloth simulation with wind, spring forces, and sphere collisions.
//!
//! `billow` simulates a rectangular cloth as a grid of Verlet particles tied
//! together by structural, shear, and bend springs. Each tick it accumulates
//! wind, gravity, and spring accelerations, relaxes spring lengths, integrates,
//! and pushes particles out of colliding spheres. It draws nothing: the host
//! reads particle positions and colors back out.
//!
//! # Features
//!
//! - **Cloth mesh**: particle grid with structural, shear, and bend springs
//! - **Wind**: per-triangle normal forces from a periodically reversing source
//! - **Constraint solver**: Gauss-Seidel spring relaxation with pinning
//! - **Collisions**: positional projection out of spheres
//! - **Observable**: monitor tick phases via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use billow::{Cloth, ClothConfig, MeshConfig, NoOpStepObserver, SphereCollider, Vec3};
//!
//! let mut cloth: Cloth<f32> = Cloth::new(&MeshConfig::new(20, 20), ClothConfig::new()).unwrap();
//! let sphere = SphereCollider::new(Vec3::new(1.0, -1.5, 0.5), 0.5).unwrap();
//! for _ in 0..10 {
//!     cloth.step(Vec3::new(0.0, -2.0, -1.5), &[sphere], &mut NoOpStepObserver);
//! }
//! assert_eq!(cloth.particles().len(), 400);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod mesh;
pub mod force;
pub mod constraint;
pub mod collision;
pub mod wind;
pub mod cloth;
pub mod sim;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::{Particle, Rgba};
pub use spring::{Spring, SpringKind};
pub use mesh::{ClothMesh, MeshConfig, Faces};
pub use collision::{Collidable, SphereCollider};
pub use wind::Wind;
pub use cloth::Cloth;
pub use sim::{ClothSimulation, TickInput};
pub use scene::{Movable, MovingSphere, Scene, SceneConfig};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
