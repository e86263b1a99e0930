use std::f64::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Point positions (and optional per-point colors) generated once.
///
/// The fields are private: after construction the buffer can be read but
/// never resized or rewritten.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBuffer {
    positions: Vec<Vec3>,
    colors: Option<Vec<Vec3>>,
}

impl ParticleBuffer {
    /// Uniform density in a spherical shell with radius in `[r_min, r_max]`.
    ///
    /// The polar angle is `acos(2u - 1)` so points do not bunch at the poles.
    ///
    /// # Panics
    /// If `r_min > r_max`.
    pub fn sphere_shell<R: Rng + ?Sized>(count: usize, r_min: f32, r_max: f32, rng: &mut R) -> Self {
        let (r_min, r_max) = (f64::from(r_min), f64::from(r_max));
        let positions = (0..count)
            .map(|_| {
                let r = rng.gen_range(r_min..=r_max);
                let theta = rng.gen_range(0.0..TAU);
                let phi = rng.gen_range(-1.0f64..=1.0).acos();
                let (sp, cp) = phi.sin_cos();
                let (st, ct) = theta.sin_cos();
                let p = Vec3::new((r * sp * ct) as f32, (r * sp * st) as f32, (r * cp) as f32);
                fit_to_shell(p, r_min as f32, r_max as f32)
            })
            .collect();
        ParticleBuffer {
            positions,
            colors: None,
        }
    }

    /// Uniform in an axis-aligned box of the given size centered on the origin.
    pub fn in_box<R: Rng + ?Sized>(count: usize, size: Vec3, rng: &mut R) -> Self {
        let half = size * 0.5;
        let mut axis = |h: f32| {
            if h > 0.0 {
                rng.gen_range(-h..h)
            } else {
                0.0
            }
        };
        let positions = (0..count)
            .map(|_| Vec3::new(axis(half.x), axis(half.y), axis(half.z)))
            .collect();
        ParticleBuffer {
            positions,
            colors: None,
        }
    }

    /// Attach one color per point, each picked from `palette`.
    pub fn with_colors<R: Rng + ?Sized>(mut self, palette: &[Vec3], rng: &mut R) -> Self {
        if palette.is_empty() {
            return self;
        }
        let colors = (0..self.positions.len())
            .map(|_| palette[rng.gen_range(0..palette.len())])
            .collect();
        self.colors = Some(colors);
        self
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[Vec3]> {
        self.colors.as_deref()
    }
}

/// Nudge a point back inside the shell after rounding to `f32` pushed it a
/// few ulps past a bound. Gives up after a handful of steps when the shell is
/// thinner than the rounding error.
fn fit_to_shell(mut p: Vec3, r_min: f32, r_max: f32) -> Vec3 {
    for _ in 0..8 {
        let len = p.length();
        if len > r_max {
            p *= 1.0 - f32::EPSILON;
        } else if len < r_min && len > 0.0 {
            p *= 1.0 + f32::EPSILON;
        } else {
            break;
        }
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn same_seed_same_buffer() {
        let a = ParticleBuffer::sphere_shell(64, 1.0, 3.0, &mut StdRng::seed_from_u64(7));
        let b = ParticleBuffer::sphere_shell(64, 1.0, 3.0, &mut StdRng::seed_from_u64(7));
        let c = ParticleBuffer::sphere_shell(64, 1.0, 3.0, &mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rounding_overshoot_is_pulled_back() {
        let over = f32::from_bits(3.0f32.to_bits() + 1);
        assert!(fit_to_shell(Vec3::new(over, 0.0, 0.0), 1.0, 3.0).length() <= 3.0);
        let under = f32::from_bits(1.0f32.to_bits() - 1);
        assert!(fit_to_shell(Vec3::new(0.0, under, 0.0), 1.0, 3.0).length() >= 1.0);
        assert_eq!(fit_to_shell(Vec3::ZERO, 0.0, 1.0), Vec3::ZERO);
    }

    #[test]
    fn shell_radii_stay_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let buf = ParticleBuffer::sphere_shell(5000, 1.0, 3.0, &mut rng);
        assert!(buf.positions().iter().all(|p| (1.0..=3.0).contains(&p.length())));
    }

    #[test]
    fn box_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let buf = ParticleBuffer::in_box(500, Vec3::new(20.0, 20.0, 10.0), &mut rng);
        assert_eq!(buf.len(), 500);
        for p in buf.positions() {
            assert!(p.x >= -10.0 && p.x < 10.0);
            assert!(p.y >= -10.0 && p.y < 10.0);
            assert!(p.z >= -5.0 && p.z < 5.0);
        }
    }

    #[test]
    fn flat_box_axis_is_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        let buf = ParticleBuffer::in_box(10, Vec3::new(4.0, 0.0, 4.0), &mut rng);
        assert!(buf.positions().iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn colors_match_positions() {
        let mut rng = StdRng::seed_from_u64(3);
        let palette = [Vec3::X, Vec3::Y];
        let buf = ParticleBuffer::in_box(32, Vec3::ONE, &mut rng).with_colors(&palette, &mut rng);
        let colors = buf.colors().unwrap();
        assert_eq!(colors.len(), buf.len());
        assert!(colors.iter().all(|c| palette.contains(c)));
        assert!(ParticleBuffer::in_box(4, Vec3::ONE, &mut rng).colors().is_none());
    }
}
