/// Floats per vertex in [`QUAD`] (x, y, z).
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Full-screen quad as a triangle strip covering clip space [-1, 1]².
#[rustfmt::skip]
pub const QUAD: [f32; 12] = [
    -1.0, -1.0, 0.0,
    1.0, -1.0, 0.0,
    -1.0, 1.0, 0.0,
    1.0, 1.0, 0.0,
];

/// Number of vertices drawn per pass.
pub const fn vertex_count() -> i32 {
    (QUAD.len() / COMPONENTS_PER_VERTEX) as i32
}

/// Iterates the quad's vertices as `[x, y, z]`.
pub fn vertices() -> impl Iterator<Item = [f32; 3]> {
    QUAD.chunks_exact(COMPONENTS_PER_VERTEX)
        .map(|v| [v[0], v[1], v[2]])
}
