use glam::Vec3;

/// Perspective camera looking down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub near: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Vec3::new(0.0, 0.0, 5.0),
            fov_y: 60.0,
            near: 0.1,
        }
    }
}

/// A point on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Distance in front of the camera.
    pub depth: f32,
    /// Pixels per world unit at this depth.
    pub scale: f32,
}

impl Camera {
    /// Project `p` onto a `width` x `height` canvas. `None` behind the near plane.
    pub fn project(&self, p: Vec3, width: f32, height: f32) -> Option<Projected> {
        let v = p - self.position;
        let depth = -v.z;
        if depth < self.near || width <= 0.0 || height <= 0.0 {
            return None;
        }
        let f = 1.0 / (self.fov_y.to_radians() * 0.5).tan();
        let aspect = width / height;
        let ndc_x = f / aspect * v.x / depth;
        let ndc_y = f * v.y / depth;
        Some(Projected {
            x: (ndc_x + 1.0) * 0.5 * width,
            y: (1.0 - ndc_y) * 0.5 * height,
            depth,
            scale: f / depth * height * 0.5,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_center() {
        let p = Camera::default().project(Vec3::ZERO, 800.0, 600.0).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.depth - 5.0).abs() < 1e-6);
    }

    #[test]
    fn up_is_up_on_screen() {
        let cam = Camera::default();
        let p = cam.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).unwrap();
        assert!(p.y < 300.0);
        let q = cam.project(Vec3::new(1.0, 0.0, 0.0), 800.0, 600.0).unwrap();
        assert!(q.x > 400.0);
    }

    #[test]
    fn behind_camera_is_clipped() {
        assert!(Camera::default().project(Vec3::new(0.0, 0.0, 6.0), 800.0, 600.0).is_none());
        assert!(Camera::default().project(Vec3::ZERO, 0.0, 600.0).is_none());
    }
}
