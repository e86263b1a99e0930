use glam::{EulerRot, Mat3, Vec3};

/// Pointer position normalized to `[-1, 1]` on both axes, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// From client coordinates inside a `width` x `height` viewport.
    pub fn from_client(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        let w = width.max(1.0);
        let h = height.max(1.0);
        Pointer {
            x: ((cx / w) * 2.0 - 1.0).clamp(-1.0, 1.0) as f32,
            y: (1.0 - (cy / h) * 2.0).clamp(-1.0, 1.0) as f32,
        }
    }
}

/// A scalar as a function of elapsed seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wave {
    Still,
    /// `rate * t`
    Linear(f32),
    /// `amplitude * sin(frequency * t)`
    Sine { amplitude: f32, frequency: f32 },
}

impl Wave {
    pub fn at(self, t: f32) -> f32 {
        match self {
            Wave::Still => 0.0,
            Wave::Linear(rate) => rate * t,
            Wave::Sine {
                amplitude,
                frequency,
            } => amplitude * (frequency * t).sin(),
        }
    }
}

/// Per-frame pose of an object group.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    /// Fixed parent rotation applied after `rotation`.
    pub tilt: Vec3,
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat3 {
        let parent = Mat3::from_euler(EulerRot::XYZ, self.tilt.x, self.tilt.y, self.tilt.z);
        let own = Mat3::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        parent * own
    }

    pub fn apply(&self, m: &Mat3, p: Vec3) -> Vec3 {
        *m * p + self.position
    }
}

/// How a group moves over time. Deterministic in `(t, pointer)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub tilt: Vec3,
    pub rotation: [Wave; 3],
    /// Vertical translation.
    pub bob: Wave,
    /// Radians of extra rotation per unit of normalized pointer offset.
    pub parallax: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            tilt: Vec3::ZERO,
            rotation: [Wave::Still; 3],
            bob: Wave::Still,
            parallax: 0.0,
        }
    }
}

impl Motion {
    pub fn spin(x: f32, y: f32) -> Self {
        Motion {
            rotation: [Wave::Linear(x), Wave::Linear(y), Wave::Still],
            ..Default::default()
        }
    }

    pub fn transform_at(&self, t: f32, pointer: Pointer) -> Transform {
        let [rx, ry, rz] = self.rotation;
        Transform {
            tilt: self.tilt,
            rotation: Vec3::new(
                rx.at(t) - pointer.y * self.parallax,
                ry.at(t) + pointer.x * self.parallax,
                rz.at(t),
            ),
            position: Vec3::new(0.0, self.bob.at(t), 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_normalization() {
        assert_eq!(Pointer::from_client(0.0, 0.0, 800.0, 600.0), Pointer { x: -1.0, y: 1.0 });
        assert_eq!(Pointer::from_client(400.0, 300.0, 800.0, 600.0), Pointer { x: 0.0, y: 0.0 });
        assert_eq!(Pointer::from_client(900.0, 700.0, 800.0, 600.0), Pointer { x: 1.0, y: -1.0 });
    }

    #[test]
    fn linear_spin_is_proportional_to_time() {
        let m = Motion::spin(0.1, 0.15);
        let a = m.transform_at(2.0, Pointer::default());
        assert!((a.rotation.x - 0.2).abs() < 1e-6);
        assert!((a.rotation.y - 0.3).abs() < 1e-6);
        assert_eq!(a.rotation.z, 0.0);
    }

    #[test]
    fn parallax_only_when_configured() {
        let p = Pointer { x: 0.5, y: -0.5 };
        let still = Motion::spin(0.0, 0.0).transform_at(1.0, p);
        assert_eq!(still.rotation, Vec3::ZERO);
        let m = Motion {
            parallax: 0.2,
            ..Motion::spin(0.0, 0.0)
        };
        let moved = m.transform_at(1.0, p);
        assert!((moved.rotation.x - 0.1).abs() < 1e-6);
        assert!((moved.rotation.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn bob_is_sinusoidal() {
        let m = Motion {
            bob: Wave::Sine {
                amplitude: 0.1,
                frequency: 0.5,
            },
            ..Default::default()
        };
        let t = std::f32::consts::PI; // sin(pi/2) = 1
        assert!((m.transform_at(t, Pointer::default()).position.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn identity_transform_keeps_points() {
        let tr = Transform::default();
        let m = tr.matrix();
        assert!(tr.apply(&m, Vec3::new(1.0, 2.0, 3.0)).abs_diff_eq(Vec3::new(1.0, 2.0, 3.0), 1e-6));
    }
}
