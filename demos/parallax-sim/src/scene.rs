//! Frame drawing for the parallax diagram.
//!
//! Every step rebuilds the whole scene back to front: starfield, Sun,
//! orbit, Earth at its current orbital position, the target star, the
//! two sightlines (from Earth and from the opposite point of the orbit)
//! with the exaggerated parallax arc between them, and the text labels.

use glam::Vec2;
use parallax_engine::{SimContext, TextAlign, VectorColor, VectorState};

use crate::state::{SimState, AU_PX};

// ── Palette ──────────────────────────────────────────────────────────

const SPACE_EDGE: VectorColor = VectorColor::new(0.0, 0.02, 0.078, 1.0);
const SPACE_CORE: VectorColor = VectorColor::new(0.039, 0.098, 0.275, 1.0);

const SUN_OUTER: VectorColor = VectorColor::new(1.0, 0.549, 0.0, 1.0);
const SUN_MID: VectorColor = VectorColor::new(1.0, 0.647, 0.0, 1.0);
const SUN_CORE: VectorColor = VectorColor::new(1.0, 0.843, 0.0, 1.0);
const GOLD: VectorColor = VectorColor::new(1.0, 0.843, 0.0, 1.0);

const EARTH_OUTER: VectorColor = VectorColor::new(0.102, 0.212, 0.365, 1.0);
const EARTH_MID: VectorColor = VectorColor::new(0.18, 0.349, 0.518, 1.0);
const EARTH_CORE: VectorColor = VectorColor::new(0.29, 0.565, 0.886, 1.0);
const CONTINENT: VectorColor = VectorColor::new(0.133, 0.545, 0.133, 1.0);

const ORBIT_COLOR: VectorColor = VectorColor::new(1.0, 1.0, 1.0, 0.3);
const SIGHTLINE_NOW: VectorColor = VectorColor::new(1.0, 0.843, 0.0, 0.6);
const SIGHTLINE_LATER: VectorColor = VectorColor::new(1.0, 0.647, 0.0, 0.6);
const ARC_COLOR: VectorColor = VectorColor::new(1.0, 0.392, 0.392, 0.8);

const STARFIELD_COUNT: usize = 100;
const PARALLAX_ARC_RADIUS: f32 = 40.0;

/// Draw the complete scene for the current state.
pub fn draw(state: &SimState, ctx: &mut SimContext) {
    let geo = state.geometry();

    draw_background(state, ctx);
    draw_sun(state.center, &mut ctx.vectors);
    draw_orbit(state.center, &mut ctx.vectors);
    draw_earth(geo.earth, &mut ctx.vectors);
    draw_star(geo.star, &mut ctx.vectors);
    draw_sightlines(geo.earth, geo.earth_opposite, geo.star, &mut ctx.vectors);
    draw_labels(state, ctx);
}

/// Night-sky backdrop: a dark fill brightening toward the center, with a
/// deterministic scatter of faint stars.
fn draw_background(state: &SimState, ctx: &mut SimContext) {
    let w = state.center.x * 2.0;
    let h = state.center.y * 2.0;

    ctx.vectors.fill_rect(Vec2::ZERO, w, h, SPACE_EDGE);

    // Layered translucent discs stand in for a radial gradient
    let max_r = w.max(h) * 0.7;
    for i in 0..4 {
        let r = max_r * (1.0 - i as f32 * 0.22);
        ctx.vectors
            .fill_circle(state.center, r, SPACE_CORE.with_alpha(0.16));
    }

    for _ in 0..STARFIELD_COUNT {
        let x = ctx.rng.next_f32() * w;
        let y = ctx.rng.next_f32() * h;
        let r = ctx.rng.next_f32() * 2.0;
        let alpha = ctx.rng.next_f32() * 0.8 + 0.2;
        ctx.vectors
            .fill_circle(Vec2::new(x, y), r, VectorColor::WHITE.with_alpha(alpha));
    }
}

/// The Sun: three layered discs approximating a radial gradient, plus
/// eight short rays.
fn draw_sun(center: Vec2, vectors: &mut VectorState) {
    vectors.fill_circle(center, 12.0, SUN_OUTER);
    vectors.fill_circle(center, 9.0, SUN_MID);
    vectors.fill_circle(center, 5.0, SUN_CORE);

    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::TAU / 8.0;
        let dir = Vec2::new(angle.cos(), angle.sin());
        vectors.stroke_line(center + dir * 18.0, center + dir * 25.0, 2.0, GOLD);
    }
}

fn draw_orbit(center: Vec2, vectors: &mut VectorState) {
    vectors.stroke_dashed_circle(center, AU_PX, 5.0, 5.0, 1.0, ORBIT_COLOR);
}

/// Earth: layered blue discs with two green continent dots.
fn draw_earth(pos: Vec2, vectors: &mut VectorState) {
    vectors.fill_circle(pos, 6.0, EARTH_OUTER);
    vectors.fill_circle(pos, 4.0, EARTH_MID);
    vectors.fill_circle(pos, 2.0, EARTH_CORE);

    vectors.fill_circle(pos + Vec2::new(-2.0, -1.0), 2.0, CONTINENT);
    vectors.fill_circle(pos + Vec2::new(1.0, 2.0), 1.5, CONTINENT);
}

/// Vertices of a five-pointed star, alternating outer and inner radius.
fn star_points(center: Vec2, outer: f32, inner: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(10);
    let mut angle = 3.0 * std::f32::consts::FRAC_PI_2;
    let step = std::f32::consts::PI / 5.0;
    for i in 0..10 {
        let r = if i % 2 == 0 { outer } else { inner };
        points.push(center + Vec2::new(angle.cos(), angle.sin()) * r);
        angle += step;
    }
    points
}

/// The target star: soft glow layers behind a filled five-pointed star.
fn draw_star(pos: Vec2, vectors: &mut VectorState) {
    vectors.fill_circle(pos, 20.0, VectorColor::WHITE.with_alpha(0.15));
    vectors.fill_circle(pos, 14.0, VectorColor::WHITE.with_alpha(0.25));
    vectors.fill_circle(pos, 7.0, VectorColor::WHITE.with_alpha(0.4));

    vectors.fill_polygon(&star_points(pos, 8.0, 4.0), VectorColor::WHITE);
}

/// The two dashed sightlines and the arc marking the apparent shift.
fn draw_sightlines(earth: Vec2, earth_opposite: Vec2, star: Vec2, vectors: &mut VectorState) {
    vectors.stroke_dashed_line(earth, star, 3.0, 3.0, 2.0, SIGHTLINE_NOW);
    vectors.stroke_dashed_line(earth_opposite, star, 3.0, 3.0, 2.0, SIGHTLINE_LATER);

    // Arc spans the bearings from the star back toward each Earth position
    let bearing_now = (earth.y - star.y).atan2(earth.x - star.x);
    let bearing_later = (earth_opposite.y - star.y).atan2(earth_opposite.x - star.x);
    vectors.stroke_arc(
        star,
        PARALLAX_ARC_RADIUS,
        bearing_now.min(bearing_later),
        bearing_now.max(bearing_later),
        3.0,
        ARC_COLOR,
    );
}

fn draw_labels(state: &SimState, ctx: &mut SimContext) {
    let geo = state.geometry();
    let labels = &mut ctx.labels;

    labels.text(
        state.center.x,
        state.center.y + 30.0,
        14.0,
        true,
        "#FFD700",
        TextAlign::Center,
        "Sun",
    );
    labels.text(
        geo.earth.x,
        geo.earth.y - 15.0,
        14.0,
        true,
        "#FFD700",
        TextAlign::Center,
        "Earth",
    );
    labels.text(
        geo.star.x,
        geo.star.y - 25.0,
        14.0,
        true,
        "#FFD700",
        TextAlign::Center,
        "Target star",
    );
    labels.text(
        geo.star.x,
        geo.star.y + 30.0,
        12.0,
        false,
        "#FFFFFF",
        TextAlign::Center,
        format!("Distance: {} pc", state.star_distance_parsecs),
    );
    labels.text(
        geo.star.x,
        geo.star.y + 45.0,
        12.0,
        false,
        "#FFFFFF",
        TextAlign::Center,
        format!("Parallax: {:.3}\"", state.parallax_arcsec()),
    );

    let mid = (geo.earth + geo.star) / 2.0;
    labels.text(
        mid.x,
        mid.y - 10.0,
        11.0,
        false,
        "rgba(255, 215, 0, 0.8)",
        TextAlign::Center,
        "Line of sight",
    );
}
