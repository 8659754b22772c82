//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen space (y down).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::rotate_about;
use crate::sim::Rect;

/// Two triangles covering the quad a-b-c-d (in winding order)
fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = r.min;
    let max = r.max();
    quad(
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
        color,
    )
    .to_vec()
}

/// Filled rectangle of `size`, placed so that `origin` (local, from its top-left)
/// sits on `position`, then rotated by `degrees` around `position`
pub fn rotated_rect(position: Vec2, size: Vec2, origin: Vec2, degrees: f32, color: [f32; 4]) -> Vec<Vertex> {
    let top_left = position - origin;
    let corners = [
        top_left,
        top_left + Vec2::new(size.x, 0.0),
        top_left + size,
        top_left + Vec2::new(0.0, size.y),
    ]
    .map(|c| rotate_about(c, position, degrees));
    quad(corners[0], corners[1], corners[2], corners[3], color).to_vec()
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line segment of the given width
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad(from + perp, to + perp, to - perp, from - perp, color).to_vec()
}
