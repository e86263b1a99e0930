//! Decorative animated backgrounds.
//!
//! Buffers and meshes are generated once when a scene is built. Each frame
//! only [`BackgroundScene::advance`] runs, and it writes nothing but the
//! per-group [`Transform`]s.

mod camera;
mod geometry;
mod motion;
mod sampling;

use std::f32::consts::FRAC_PI_4;

pub use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SceneConfig;

pub use camera::{Camera, Projected};
pub use geometry::{Polyhedron, Wireframe, edges};
pub use motion::{Motion, Pointer, Transform, Wave};
pub use sampling::ParticleBuffer;

/// Cyan and magenta of the timeline's two lights, as `0..=1` channels.
pub const TIMELINE_PALETTE: [Vec3; 2] = [Vec3::new(0.0, 0.83, 1.0), Vec3::new(1.0, 0.0, 1.0)];

/// Deterministic generator for scene construction.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Environment read by a frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the scene was mounted.
    pub elapsed: f32,
    pub pointer: Pointer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    pub buffer: ParticleBuffer,
    pub color: String,
    pub opacity: f32,
    /// Point size in world units, attenuated with depth.
    pub size: f32,
    pub motion: Motion,
    pub transform: Transform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineStrip {
    pub points: Vec<Vec3>,
    pub color: String,
    pub opacity: f32,
    pub motion: Motion,
    pub transform: Transform,
}

/// Wireframes that rotate together as one rigid body.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeGroup {
    pub shapes: Vec<Wireframe>,
    pub motion: Motion,
    pub transform: Transform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundScene {
    pub camera: Camera,
    pub clouds: Vec<PointCloud>,
    pub lines: Vec<LineStrip>,
    pub shapes: Option<ShapeGroup>,
}

impl BackgroundScene {
    /// Hero backdrop: a slowly spinning particle shell that follows the
    /// pointer, plus three wireframe solids.
    pub fn hero<R: Rng + ?Sized>(cfg: &SceneConfig, rng: &mut R) -> Self {
        let [r_min, r_max] = cfg.hero_radius;
        let shell = PointCloud {
            buffer: ParticleBuffer::sphere_shell(cfg.hero_particles, r_min, r_max, rng),
            color: "#6366f1".to_string(),
            opacity: 1.0,
            size: 0.005,
            motion: Motion {
                tilt: Vec3::new(0.0, 0.0, FRAC_PI_4),
                parallax: 0.2,
                ..Motion::spin(0.05, 0.075)
            },
            transform: Transform::default(),
        };
        let shapes = ShapeGroup {
            shapes: vec![
                Wireframe::new(Polyhedron::Icosahedron, 0.3, Vec3::new(2.0, 0.0, 0.0), "#8b5cf6"),
                Wireframe::new(Polyhedron::Octahedron, 0.4, Vec3::new(-2.0, 1.0, -1.0), "#6366f1"),
                Wireframe::new(Polyhedron::Tetrahedron, 0.5, Vec3::new(0.0, -2.0, 1.0), "#a855f7"),
            ],
            motion: Motion::spin(0.1, 0.15),
            transform: Transform::default(),
        };
        let mut scene = BackgroundScene {
            camera: Camera::default(),
            clouds: vec![shell],
            lines: Vec::new(),
            shapes: Some(shapes),
        };
        scene.advance(FrameInput::default());
        scene
    }

    /// Timeline backdrop: drifting box of particles tinted by the two lights,
    /// and a swaying neon line.
    pub fn timeline<R: Rng + ?Sized>(cfg: &SceneConfig, rng: &mut R) -> Self {
        let drift = PointCloud {
            buffer: ParticleBuffer::in_box(cfg.timeline_particles, Vec3::new(20.0, 20.0, 10.0), rng)
                .with_colors(&TIMELINE_PALETTE, rng),
            color: "#00d4ff".to_string(),
            opacity: 0.6,
            size: 0.05,
            motion: Motion {
                bob: Wave::Sine {
                    amplitude: 0.1,
                    frequency: 0.5,
                },
                ..Motion::spin(0.03, 0.06)
            },
            transform: Transform::default(),
        };
        let line = LineStrip {
            points: (0..=40).map(|i| Vec3::new(0.0, -10.0 + i as f32 * 0.5, 0.0)).collect(),
            color: "#ff00ff".to_string(),
            opacity: 0.3,
            motion: Motion {
                rotation: [
                    Wave::Still,
                    Wave::Still,
                    Wave::Sine {
                        amplitude: 0.05,
                        frequency: 0.3,
                    },
                ],
                ..Default::default()
            },
            transform: Transform::default(),
        };
        let mut scene = BackgroundScene {
            camera: Camera::default(),
            clouds: vec![drift],
            lines: vec![line],
            shapes: None,
        };
        scene.advance(FrameInput::default());
        scene
    }

    /// Update every group's transform for this frame.
    pub fn advance(&mut self, input: FrameInput) {
        let FrameInput { elapsed, pointer } = input;
        for cloud in &mut self.clouds {
            cloud.transform = cloud.motion.transform_at(elapsed, pointer);
        }
        for line in &mut self.lines {
            line.transform = line.motion.transform_at(elapsed, pointer);
        }
        if let Some(group) = &mut self.shapes {
            group.transform = group.motion.transform_at(elapsed, pointer);
        }
    }

    pub fn particle_count(&self) -> usize {
        self.clouds.iter().map(|c| c.buffer.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> SceneConfig {
        SceneConfig {
            hero_particles: 600,
            ..Default::default()
        }
    }

    #[test]
    fn hero_layout() {
        let scene = BackgroundScene::hero(&small(), &mut seeded_rng(1));
        assert_eq!(scene.particle_count(), 600);
        let group = scene.shapes.as_ref().unwrap();
        assert_eq!(group.shapes.len(), 3);
        assert_eq!(group.shapes[2].kind, Polyhedron::Tetrahedron);
        assert!(scene.clouds[0].buffer.colors().is_none());
        assert_eq!(scene.clouds[0].transform.tilt.z, FRAC_PI_4);
    }

    #[test]
    fn timeline_layout() {
        let scene = BackgroundScene::timeline(&SceneConfig::default(), &mut seeded_rng(1));
        assert_eq!(scene.particle_count(), 100);
        let colors = scene.clouds[0].buffer.colors().unwrap();
        assert_eq!(colors.len(), 100);
        assert!(colors.iter().all(|c| TIMELINE_PALETTE.contains(c)));
        assert_eq!(scene.lines[0].points.len(), 41);
        assert_eq!(scene.lines[0].points[40], Vec3::new(0.0, 10.0, 0.0));
        assert!(scene.shapes.is_none());
    }

    #[test]
    fn advance_never_touches_buffers() {
        let mut scene = BackgroundScene::hero(&small(), &mut seeded_rng(9));
        let before = scene.clouds[0].buffer.clone();
        let ptr = scene.clouds[0].buffer.positions().as_ptr();
        for frame in 0..120 {
            scene.advance(FrameInput {
                elapsed: frame as f32 / 60.0,
                pointer: Pointer { x: 0.3, y: -0.2 },
            });
        }
        assert_eq!(scene.clouds[0].buffer, before);
        assert_eq!(scene.clouds[0].buffer.positions().as_ptr(), ptr);
    }

    #[test]
    fn transforms_are_a_function_of_time_and_pointer() {
        let mut a = BackgroundScene::hero(&small(), &mut seeded_rng(2));
        let mut b = a.clone();
        let input = FrameInput {
            elapsed: 12.5,
            pointer: Pointer { x: -0.4, y: 0.9 },
        };
        a.advance(FrameInput {
            elapsed: 3.0,
            ..Default::default()
        });
        a.advance(input);
        b.advance(input);
        assert_eq!(a, b);
    }

    #[test]
    fn only_the_shell_follows_the_pointer() {
        let mut scene = BackgroundScene::hero(&small(), &mut seeded_rng(3));
        scene.advance(FrameInput::default());
        let shapes_still = scene.shapes.as_ref().unwrap().transform;
        let shell_still = scene.clouds[0].transform;
        scene.advance(FrameInput {
            elapsed: 0.0,
            pointer: Pointer { x: 1.0, y: 1.0 },
        });
        assert_eq!(scene.shapes.as_ref().unwrap().transform, shapes_still);
        assert_ne!(scene.clouds[0].transform, shell_still);
    }
}
