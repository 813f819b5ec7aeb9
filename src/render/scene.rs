//! Immediate-mode drawing of the arena and its units.
//!
//! Every shape is emitted straight from unit state each frame. Triangles are
//! wound counter-clockwise as seen from +Z so they survive backface culling.
use raylib::prelude::*;

use crate::core::math::Vec3;
use crate::core::unit::{HealthLevel, Unit};
use crate::core::world::World;

const ARROW_SIZE: f32 = 0.15;
const BAR_HALF_HEIGHT: f32 = 0.05;
const BAR_MAX: f32 = 0.9;
const BAR_LIFT: f32 = 0.2;
const DIMMED: f32 = 0.35;

#[inline]
fn v(p: Vec3) -> Vector3 {
    Vector3::new(p.x, p.y, p.z)
}

/// Float RGB in [0, 1] to an opaque raylib colour.
pub fn color(rgb: [f32; 3]) -> Color {
    let c = |x: f32| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::new(c(rgb[0]), c(rgb[1]), c(rgb[2]), 255)
}

/// Rim points of a triangle fan: `segments + 1` points so the last closes the loop.
pub fn fan_rim(center: Vec3, radius: f32, segments: u32, angle_offset: f32) -> Vec<Vec3> {
    let segments = segments.max(3);
    (0..=segments)
        .map(|i| {
            let a = std::f32::consts::TAU * i as f32 / segments as f32 + angle_offset;
            center + Vec3::new(radius * a.cos(), radius * a.sin(), 0.0)
        })
        .collect()
}

/// Length and colour of the health bar; `Empty` draws no bars at all.
pub fn health_bar(level: HealthLevel) -> Option<(f32, [f32; 3])> {
    match level {
        HealthLevel::Low => Some((0.3, [0.8, 0.2, 0.3])),
        HealthLevel::Medium => Some((0.6, [0.8, 0.8, 0.2])),
        HealthLevel::High => Some((BAR_MAX, [0.2, 0.8, 0.3])),
        HealthLevel::Empty => None,
    }
}

pub fn energy_bar_length(energy_pt: f32) -> f32 {
    BAR_MAX * energy_pt.clamp(0.0, 100.0) / 100.0
}

pub fn render_scene<D: RaylibDraw3D>(d: &mut D, world: &World, grid_spacing: f32) {
    draw_grid(d, world.half_size, grid_spacing);
    for unit in &world.units {
        draw_unit(d, unit);
    }
}

/// Floor lines on z = 0 plus a brighter arena border.
pub fn draw_grid<D: RaylibDraw3D>(d: &mut D, half_size: f32, spacing: f32) {
    let line = Color::new(70, 70, 80, 255);
    let lines = (2.0 * half_size / spacing).floor() as i32;
    for i in 0..=lines {
        let k = -half_size + i as f32 * spacing;
        d.draw_line3D(v(Vec3::new(k, -half_size, 0.0)), v(Vec3::new(k, half_size, 0.0)), line);
        d.draw_line3D(v(Vec3::new(-half_size, k, 0.0)), v(Vec3::new(half_size, k, 0.0)), line);
    }
    let border = Color::new(200, 200, 210, 255);
    let h = half_size;
    let corners = [
        Vec3::new(-h, -h, 0.01), Vec3::new(h, -h, 0.01),
        Vec3::new(h, h, 0.01), Vec3::new(-h, h, 0.01),
    ];
    for i in 0..corners.len() {
        d.draw_line3D(v(corners[i]), v(corners[(i + 1) % corners.len()]), border);
    }
}

pub fn draw_unit<D: RaylibDraw3D>(d: &mut D, unit: &Unit) {
    let angle_offset = unit.body.front.heading();
    let dim = if unit.is_empty() { DIMMED } else { 1.0 };
    draw_body(d, unit, angle_offset, dim);
    draw_arrow(d, unit, angle_offset, dim);
    draw_bars(d, unit);
}

fn draw_fan<D: RaylibDraw3D>(d: &mut D, center: Vec3, rim: &[Vec3], col: Color) {
    for pair in rim.windows(2) {
        d.draw_triangle3D(v(center), v(pair[0]), v(pair[1]), col);
    }
}

fn shade(rgb: [f32; 3], k: f32) -> Color {
    color([rgb[0] * k, rgb[1] * k, rgb[2] * k])
}

fn draw_body<D: RaylibDraw3D>(d: &mut D, unit: &Unit, angle_offset: f32, dim: f32) {
    let center = unit.body.pos;
    let rim = fan_rim(center, unit.body.radius, unit.segment_count, angle_offset);
    draw_fan(d, center, &rim, shade(unit.body_color, dim));
}

fn draw_arrow<D: RaylibDraw3D>(d: &mut D, unit: &Unit, angle_offset: f32, dim: f32) {
    let r = unit.body.radius;
    let center = unit.body.pos + unit.body.front * (1.25 * r) + Vec3::new(0.0, 0.0, 0.01);
    let rim = fan_rim(center, ARROW_SIZE, 3, angle_offset);
    draw_fan(d, center, &rim, shade(unit.arrow_color, dim));
}

fn draw_quad<D: RaylibDraw3D>(d: &mut D, center: Vec3, half_len: f32, col: Color) {
    let (l, h) = (half_len, BAR_HALF_HEIGHT);
    let a = center + Vec3::new(-l, -h, 0.0);
    let b = center + Vec3::new(l, -h, 0.0);
    let c = center + Vec3::new(l, h, 0.0);
    let e = center + Vec3::new(-l, h, 0.0);
    d.draw_triangle3D(v(a), v(b), v(c), col);
    d.draw_triangle3D(v(a), v(c), v(e), col);
}

fn draw_bars<D: RaylibDraw3D>(d: &mut D, unit: &Unit) {
    let Some((length, rgb)) = health_bar(unit.health) else { return };
    let r = unit.body.radius;
    let anchor = unit.body.pos + Vec3::new(0.0, 1.75 * r, BAR_LIFT);

    // filled part sits a hair above its grey backing
    draw_quad(d, anchor + Vec3::new(0.0, 0.0, 0.005), length, color(rgb));
    draw_quad(d, anchor, BAR_MAX, color([0.5, 0.5, 0.5]));

    let energy = energy_bar_length(unit.energy_pt);
    if energy > 0.0 {
        draw_quad(d, anchor + Vec3::new(0.0, -0.15, 0.0), energy, color([0.8, 0.8, 0.8]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_rim_closes_loop() {
        let rim = fan_rim(Vec3::ZERO, 1.0, 5, 0.3);
        assert_eq!(rim.len(), 6);
        assert!((rim[0] - rim[5]).len() < 1e-5);
        for p in &rim {
            assert!((p.len() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn fan_rim_is_counter_clockwise() {
        let rim = fan_rim(Vec3::ZERO, 1.0, 4, 0.0);
        let (a, b) = (rim[0], rim[1]);
        // z of cross(a, b) is positive for CCW seen from +Z
        assert!(a.x * b.y - a.y * b.x > 0.0);
    }

    #[test]
    fn bars_follow_levels() {
        assert_eq!(health_bar(HealthLevel::Empty), None);
        assert_eq!(health_bar(HealthLevel::Low).map(|b| b.0), Some(0.3));
        assert_eq!(health_bar(HealthLevel::High).map(|b| b.0), Some(BAR_MAX));
        assert!((energy_bar_length(50.0) - 0.45).abs() < 1e-6);
        assert_eq!(energy_bar_length(150.0), BAR_MAX);
    }

    #[test]
    fn colors_scale_to_bytes() {
        assert_eq!(color([1.0, 0.0, 0.5]), Color::new(255, 0, 128, 255));
    }
}
