//! Lyon-based vector drawing surface.
//!
//! All shapes are tessellated on the CPU into a flat triangle-list float
//! buffer (6 floats per vertex: x, y, r, g, b, a) that the host copies out
//! each frame. Besides plain fills and strokes, the surface offers dashed
//! lines, dashed circles and sampled arcs, which the scene layer uses for
//! orbit paths and sightlines.
//!
//! # Usage
//!
//! ```ignore
//! // In your Simulation::update():
//! ctx.vectors.fill_circle(sun, 12.0, VectorColor::rgb8(255, 140, 0));
//! ctx.vectors.stroke_dashed_circle(sun, 50.0, 5.0, 5.0, 1.0, faint);
//! ctx.vectors.stroke_dashed_line(earth, star, 3.0, 3.0, 2.0, gold);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24
}

/// RGBA color for vector drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color from RGBA u8 values (0-255).
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a copy with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for VectorColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: VectorColor,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        VectorVertex {
            x: vertex.position().x,
            y: vertex.position().y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: self.color.a,
        }
    }
}

/// Drawing surface state.
///
/// Holds lyon tessellators and the output vertex buffer. Cleared at the
/// start of each simulation step and repopulated by drawing commands.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new() -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each step.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer, for copy-out by the host.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flat buffer contents as a float slice.
    pub fn vertices(&self) -> &[f32] {
        &self.buffer
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate and fill a polygon.
    ///
    /// The polygon is closed automatically. Supports convex and concave shapes.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: VectorColor) {
        if points.len() < 3 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
        let path = builder.build();

        self.fill_path(&path, color);
    }

    /// Tessellate and fill a rectangle.
    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: VectorColor) {
        let points = [
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ];
        self.fill_polygon(&points, color);
    }

    /// Tessellate and fill a circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.fill_path(&path, color);
    }

    /// Tessellate and fill an arbitrary lyon Path.
    pub fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => log::warn!("fill tessellation failed: {:?}", err),
        }
    }

    /// Tessellate a stroked polyline (open path).
    pub fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: VectorColor) {
        if points.len() < 2 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(false); // open path

        let path = builder.build();
        self.stroke_path(&path, width, color);
    }

    /// Tessellate a stroked line segment.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: VectorColor) {
        self.stroke_polyline(&[from, to], width, color);
    }

    /// Tessellate a stroked circle.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: VectorColor) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.stroke_path(&path, width, color);
    }

    /// Tessellate a stroked circular arc between two angles (radians),
    /// sampled into chords of roughly 4px.
    pub fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        width: f32,
        color: VectorColor,
    ) {
        if radius <= 0.0 {
            return;
        }
        let sweep = end_angle - start_angle;
        if sweep.abs() < f32::EPSILON {
            return;
        }

        let arc_len = sweep.abs() * radius;
        let segments = ((arc_len / 4.0).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(segments + 1);
        for i in 0..=segments {
            let t = start_angle + sweep * (i as f32 / segments as f32);
            points.push(center + Vec2::new(t.cos(), t.sin()) * radius);
        }
        self.stroke_polyline(&points, width, color);
    }

    /// Tessellate a dashed line segment. `dash` and `gap` are lengths in
    /// world units; the pattern starts with a dash at `from`.
    pub fn stroke_dashed_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        dash: f32,
        gap: f32,
        width: f32,
        color: VectorColor,
    ) {
        let total = from.distance(to);
        if total <= 0.0 || dash <= 0.0 || gap < 0.0 {
            return;
        }

        let dir = (to - from) / total;
        let mut travelled = 0.0;
        while travelled < total {
            let seg_end = (travelled + dash).min(total);
            self.stroke_line(
                from + dir * travelled,
                from + dir * seg_end,
                width,
                color,
            );
            travelled = seg_end + gap;
        }
    }

    /// Tessellate a dashed circle. Dash and gap lengths are measured along
    /// the circumference.
    pub fn stroke_dashed_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        dash: f32,
        gap: f32,
        width: f32,
        color: VectorColor,
    ) {
        if radius <= 0.0 || dash <= 0.0 || gap < 0.0 {
            return;
        }

        let circumference = std::f32::consts::TAU * radius;
        let mut travelled = 0.0;
        while travelled < circumference {
            let seg_end = (travelled + dash).min(circumference);
            self.stroke_arc(
                center,
                radius,
                travelled / radius,
                seg_end / radius,
                width,
                color,
            );
            travelled = seg_end + gap;
        }
    }

    /// Tessellate an arbitrary stroked lyon Path.
    pub fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(0.5).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, StrokeVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => log::warn!("stroke tessellation failed: {:?}", err),
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}
