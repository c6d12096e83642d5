use std::time::Duration;

use billow::{
    Cloth, ClothConfig, ClothSimulation, MeshConfig, NoOpStepObserver, Scene, SphereCollider,
    TickInput, Vec3, Wind,
};

#[test]
fn simulation_deterministic() {
    let results: Vec<_> = (0..4)
        .map(|_| {
            let cloth = Cloth::<f32>::new(&MeshConfig::new(10, 10), ClothConfig::new()).unwrap();
            let mut sim = ClothSimulation::new(cloth, Wind::new(Vec3::new(0.0, -2.0, -1.5)));
            let spheres = [SphereCollider::new(Vec3::new(1.0, -1.2, -0.3), 0.5).unwrap()];
            for _ in 0..60 {
                sim.tick(TickInput::new(Duration::from_millis(17), &spheres), &mut NoOpStepObserver);
            }
            sim.cloth().positions()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.y.to_bits(), b.y.to_bits());
            assert_eq!(a.z.to_bits(), b.z.to_bits());
        }
    }
}

#[test]
fn scene_deterministic() {
    let run = || {
        let mut scene = Scene::<f32>::demo().unwrap();
        for frame in 0..40 {
            if frame == 25 {
                scene.request_detach();
            }
            scene.advance(Duration::from_millis(17), &mut NoOpStepObserver);
        }
        scene.cloth().positions()
    };
    assert_eq!(run(), run());
}
