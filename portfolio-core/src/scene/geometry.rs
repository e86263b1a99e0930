use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polyhedron {
    Tetrahedron,
    Octahedron,
    Icosahedron,
}

impl Polyhedron {
    /// Vertices on a sphere of `radius`.
    pub fn vertices(self, radius: f32) -> Vec<Vec3> {
        let raw: Vec<Vec3> = match self {
            Polyhedron::Tetrahedron => vec![
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
            Polyhedron::Octahedron => vec![
                Vec3::X,
                Vec3::NEG_X,
                Vec3::Y,
                Vec3::NEG_Y,
                Vec3::Z,
                Vec3::NEG_Z,
            ],
            Polyhedron::Icosahedron => {
                let t = (1.0 + 5.0f32.sqrt()) / 2.0;
                vec![
                    Vec3::new(-1.0, t, 0.0),
                    Vec3::new(1.0, t, 0.0),
                    Vec3::new(-1.0, -t, 0.0),
                    Vec3::new(1.0, -t, 0.0),
                    Vec3::new(0.0, -1.0, t),
                    Vec3::new(0.0, 1.0, t),
                    Vec3::new(0.0, -1.0, -t),
                    Vec3::new(0.0, 1.0, -t),
                    Vec3::new(t, 0.0, -1.0),
                    Vec3::new(t, 0.0, 1.0),
                    Vec3::new(-t, 0.0, -1.0),
                    Vec3::new(-t, 0.0, 1.0),
                ]
            }
        };
        raw.into_iter().map(|v| v.normalize() * radius).collect()
    }
}

/// Edges of a regular polyhedron: every vertex pair at the minimum distance.
pub fn edges(vertices: &[Vec3]) -> Vec<[usize; 2]> {
    let mut min = f32::INFINITY;
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            min = min.min(vertices[i].distance(vertices[j]));
        }
    }
    let tol = min * 1e-3;
    let mut out = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if (vertices[i].distance(vertices[j]) - min).abs() <= tol {
                out.push([i, j]);
            }
        }
    }
    out
}

/// A wireframe polyhedron placed at a fixed offset inside its group.
#[derive(Clone, Debug, PartialEq)]
pub struct Wireframe {
    pub kind: Polyhedron,
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[usize; 2]>,
    pub offset: Vec3,
    pub color: String,
    pub opacity: f32,
}

impl Wireframe {
    pub fn new(kind: Polyhedron, radius: f32, offset: Vec3, color: &str) -> Self {
        let vertices = kind.vertices(radius);
        let edges = edges(&vertices);
        Wireframe {
            kind,
            vertices,
            edges,
            offset,
            color: color.to_string(),
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_counts() {
        for (kind, n) in [
            (Polyhedron::Tetrahedron, 6),
            (Polyhedron::Octahedron, 12),
            (Polyhedron::Icosahedron, 30),
        ] {
            let w = Wireframe::new(kind, 0.5, Vec3::ZERO, "#fff");
            assert_eq!(w.edges.len(), n, "{kind:?}");
        }
    }

    #[test]
    fn vertices_on_radius() {
        for v in Polyhedron::Icosahedron.vertices(0.3) {
            assert!((v.length() - 0.3).abs() < 1e-5);
        }
    }
}
