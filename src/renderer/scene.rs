//! Frame assembly
//!
//! Turns a [`RenderFeed`] into one triangle list. Output is in view space:
//! origin at the track center, +y up (the simulation uses canvas space, +y down).

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::RenderFeed;
use crate::tuning::Tuning;

/// Grid line width in canvas pixels
const GRID_LINE_WIDTH: f32 = 1.0;
/// Angle between the player wedge's nose and its back corners
const PLAYER_WEDGE_SPREAD: f32 = 2.5;
const ENEMY_CIRCLE_SEGMENTS: u32 = 16;
const BULLET_CIRCLE_SEGMENTS: u32 = 6;

/// Canvas space to view space
#[inline]
fn to_view(p: Vec2, center: Vec2) -> Vec2 {
    Vec2::new(p.x - center.x, center.y - p.y)
}

/// Build every triangle for one frame
pub fn build_scene(feed: &RenderFeed<'_>, tuning: &Tuning) -> Vec<Vertex> {
    let center = feed.grid.center();
    let view = |p: Vec2| to_view(p, center);
    let mut vertices = Vec::new();

    // Spokes, then inner and outer rims
    let spokes = feed.grid.spokes();
    for (i, spoke) in spokes.iter().enumerate() {
        let next = feed.grid.spoke(i + 1);
        vertices.extend(shapes::line(view(spoke.inner), view(spoke.outer), GRID_LINE_WIDTH, colors::GRID));
        vertices.extend(shapes::line(view(spoke.inner), view(next.inner), GRID_LINE_WIDTH, colors::GRID));
        vertices.extend(shapes::line(view(spoke.outer), view(next.outer), GRID_LINE_WIDTH, colors::GRID));
    }

    // Player wedge, nose toward the center
    let player = view(feed.player_position());
    let aim = (-player).y.atan2(-player.x);
    let corner = |angle: f32| player + Vec2::new(angle.cos(), angle.sin()) * tuning.player_size;
    vertices.extend(shapes::triangle(
        corner(aim),
        corner(aim + PLAYER_WEDGE_SPREAD),
        corner(aim - PLAYER_WEDGE_SPREAD),
        colors::PLAYER,
    ));

    for pos in feed.enemy_positions() {
        vertices.extend(shapes::circle(
            view(pos),
            tuning.enemy_size,
            colors::ENEMY,
            ENEMY_CIRCLE_SEGMENTS,
        ));
    }

    for pos in feed.bullet_positions() {
        vertices.extend(shapes::circle(
            view(pos),
            tuning.bullet_radius,
            colors::BULLET,
            BULLET_CIRCLE_SEGMENTS,
        ));
    }

    if feed.game_over {
        let extent = Vec2::splat(feed.grid.outer_radius() * 1.5);
        vertices.extend(shapes::rect(-extent, extent, colors::GAME_OVER_TINT));
    }

    vertices
}
