//! Simulation state and the parallax geometry derived from it.

use glam::Vec2;

/// Earth-Sun distance (1 AU) in screen pixels.
pub const AU_PX: f32 = 50.0;
/// Horizontal pixels per parsec of star distance.
pub const DISTANCE_SCALE: f32 = 4.0;
/// Multiplier applied to the scaled distance for the star's x offset.
pub const STAR_OFFSET_FACTOR: f32 = 15.0;
/// Star sits this many pixels above the vertical center.
pub const STAR_Y_OFFSET: f32 = 80.0;
/// Light-years per parsec.
pub const LY_PER_PARSEC: f64 = 3.26;
/// Orbital advance per animation step, in degrees.
pub const ORBIT_STEP_DEG: f64 = 2.0;

/// Screen positions derived from the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneGeometry {
    /// Earth at its current orbital position.
    pub earth: Vec2,
    /// Earth six months later (opposite side of the orbit).
    pub earth_opposite: Vec2,
    /// The target star.
    pub star: Vec2,
}

/// The authoritative simulation state.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Distance to the target star in parsecs. Always > 0.
    pub star_distance_parsecs: f64,
    /// Earth's orbital position in degrees, normalized to [0, 360).
    pub earth_position_deg: f64,
    /// Whether the orbit animation loop is running.
    pub is_animating: bool,
    /// Center of the orbit diagram (the Sun).
    pub center: Vec2,
}

impl SimState {
    pub fn new(world_width: f32, world_height: f32) -> Self {
        Self {
            star_distance_parsecs: 10.0,
            earth_position_deg: 0.0,
            is_animating: false,
            center: Vec2::new(world_width / 2.0, world_height / 2.0),
        }
    }

    /// Simplified parallax angle in arcseconds: p = 1 / d.
    pub fn parallax_arcsec(&self) -> f64 {
        1.0 / self.star_distance_parsecs
    }

    /// Star distance converted to light-years.
    pub fn distance_light_years(&self) -> f64 {
        self.star_distance_parsecs * LY_PER_PARSEC
    }

    /// Exaggerated on-screen parallax angle in radians, used for display
    /// only. The true angle would be invisible at screen scale, so the
    /// arcsecond value is inflated by a factor of 1000.
    pub fn visual_arc_angle(&self) -> f64 {
        self.parallax_arcsec() * (std::f64::consts::PI / 180.0) * (1.0 / 3600.0) * 1000.0
    }

    /// Advance Earth along its orbit by one animation step.
    pub fn step_orbit(&mut self) {
        self.earth_position_deg = (self.earth_position_deg + ORBIT_STEP_DEG) % 360.0;
    }

    /// Set Earth's orbital position, normalizing into [0, 360).
    pub fn set_position(&mut self, degrees: f64) {
        self.earth_position_deg = degrees.rem_euclid(360.0);
    }

    /// Recenter the diagram after a viewport resize.
    pub fn resize(&mut self, world_width: f32, world_height: f32) {
        self.center = Vec2::new(world_width / 2.0, world_height / 2.0);
    }

    /// Screen position of a point on Earth's orbit at the given angle.
    pub fn orbit_point(&self, degrees: f64) -> Vec2 {
        let rad = degrees.to_radians();
        self.center + Vec2::new(rad.cos() as f32, rad.sin() as f32) * AU_PX
    }

    /// Compute the screen geometry for the current state.
    ///
    /// The star's horizontal offset grows linearly with distance so that
    /// nearer stars sit visibly closer to the Sun.
    pub fn geometry(&self) -> SceneGeometry {
        let offset =
            self.star_distance_parsecs as f32 * DISTANCE_SCALE * STAR_OFFSET_FACTOR;
        SceneGeometry {
            earth: self.orbit_point(self.earth_position_deg),
            earth_opposite: self.orbit_point(self.earth_position_deg + 180.0),
            star: Vec2::new(self.center.x + offset, self.center.y - STAR_Y_OFFSET),
        }
    }
}
