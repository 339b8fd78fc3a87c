// Heart mesh: a Bézier outline, ear-clipped caps and extruded side walls.

use glam::{Vec2, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

// Start point followed by six cubic segments (c1, c2, end).
const HEART_START: [f32; 2] = [0.25, 0.25];
const HEART_CURVES: [[[f32; 2]; 3]; 6] = [
    [[0.25, 0.25], [0.2, 0.0], [0.0, 0.0]],
    [[-0.3, 0.0], [-0.3, 0.35], [-0.3, 0.35]],
    [[-0.3, 0.55], [-0.1, 0.77], [0.25, 0.95]],
    [[0.6, 0.77], [0.8, 0.55], [0.8, 0.35]],
    [[0.8, 0.35], [0.8, 0.0], [0.5, 0.0]],
    [[0.35, 0.0], [0.25, 0.25], [0.25, 0.25]],
];

#[inline]
fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Closed heart outline sampled at `segments` points per curve. The closing
/// point is not repeated and near-duplicate points are merged.
pub fn heart_outline(segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    let mut pts = vec![Vec2::from(HEART_START)];
    let mut cursor = Vec2::from(HEART_START);
    for [c1, c2, end] in HEART_CURVES {
        let (c1, c2, end) = (Vec2::from(c1), Vec2::from(c2), Vec2::from(end));
        for s in 1..=segments {
            let t = s as f32 / segments as f32;
            let p = cubic(cursor, c1, c2, end, t);
            if pts.last().map_or(true, |last| last.distance(p) > 1e-5) {
                pts.push(p);
            }
        }
        cursor = end;
    }
    if pts.len() > 1 && pts[0].distance(pts[pts.len() - 1]) <= 1e-5 {
        pts.pop();
    }
    pts
}

/// Shoelace area; positive for counter-clockwise winding.
pub fn signed_area(poly: &[Vec2]) -> f32 {
    let n = poly.len();
    (0..n)
        .map(|i| poly[i].perp_dot(poly[(i + 1) % n]))
        .sum::<f32>()
        * 0.5
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = (b - a).perp_dot(p - a);
    let d2 = (c - b).perp_dot(p - b);
    let d3 = (a - c).perp_dot(p - c);
    d1 >= 0.0 && d2 >= 0.0 && d3 >= 0.0
}

/// Ear-clipping triangulation of a simple polygon. Triangles are returned
/// counter-clockwise regardless of the input winding.
pub fn triangulate(poly: &[Vec2]) -> Vec<[u32; 3]> {
    let n = poly.len();
    if n < 3 {
        return Vec::new();
    }
    let mut ring: Vec<usize> = (0..n).collect();
    if signed_area(poly) < 0.0 {
        ring.reverse();
    }
    let mut tris = Vec::with_capacity(n - 2);
    while ring.len() > 3 {
        let m = ring.len();
        let ear = (0..m).find(|&i| {
            let (a, b, c) = (ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]);
            let (pa, pb, pc) = (poly[a], poly[b], poly[c]);
            if (pb - pa).perp_dot(pc - pb) <= 0.0 {
                return false;
            }
            !ring
                .iter()
                .filter(|&&j| j != a && j != b && j != c)
                .any(|&j| point_in_triangle(poly[j], pa, pb, pc))
        });
        // Degenerate rings with no clean ear still have to make progress.
        let i = ear.unwrap_or(0);
        let (a, b, c) = (ring[(i + m - 1) % m], ring[i], ring[(i + 1) % m]);
        tris.push([a as u32, b as u32, c as u32]);
        ring.remove(i);
    }
    tris.push([ring[0] as u32, ring[1] as u32, ring[2] as u32]);
    tris
}

/// Extrude `outline` along +Z by `depth` with flat-shaded caps and walls.
pub fn extrude(outline: &[Vec2], depth: f32) -> Mesh {
    let mut mesh = Mesh::default();
    let n = outline.len();
    if n < 3 {
        return mesh;
    }
    let tris = triangulate(outline);

    // Front cap at z = depth facing +Z
    let base = mesh.vertices.len() as u32;
    for p in outline {
        mesh.vertices.push(MeshVertex {
            position: [p.x, p.y, depth],
            normal: [0.0, 0.0, 1.0],
        });
    }
    for [a, b, c] in &tris {
        mesh.indices.extend_from_slice(&[base + a, base + b, base + c]);
    }

    // Back cap at z = 0 facing -Z, reversed winding
    let base = mesh.vertices.len() as u32;
    for p in outline {
        mesh.vertices.push(MeshVertex {
            position: [p.x, p.y, 0.0],
            normal: [0.0, 0.0, -1.0],
        });
    }
    for [a, b, c] in &tris {
        mesh.indices.extend_from_slice(&[base + a, base + c, base + b]);
    }

    // Side walls, one quad per outline edge
    let ccw = signed_area(outline) >= 0.0;
    for i in 0..n {
        let (p, q) = (outline[i], outline[(i + 1) % n]);
        let edge = q - p;
        let outward = if ccw {
            Vec3::new(edge.y, -edge.x, 0.0)
        } else {
            Vec3::new(-edge.y, edge.x, 0.0)
        }
        .normalize_or_zero()
        .to_array();
        let base = mesh.vertices.len() as u32;
        for (v, z) in [(p, 0.0), (q, 0.0), (q, depth), (p, depth)] {
            mesh.vertices.push(MeshVertex {
                position: [v.x, v.y, z],
                normal: outward,
            });
        }
        if ccw {
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        } else {
            mesh.indices
                .extend_from_slice(&[base, base + 2, base + 1, base, base + 3, base + 2]);
        }
    }
    mesh
}

/// The heart used for every floating decoration.
pub fn heart_mesh(segments: usize, depth: f32) -> Mesh {
    extrude(&heart_outline(segments), depth)
}
