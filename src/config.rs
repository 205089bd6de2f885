use log::Level;

/// Tunables for the landing page. Everything here is decided at compile time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    /// Duration of the CSS transition between card placements.
    pub transition_ms: u32,
    /// Minimum delay between two processed scroll samples. 0 samples every event.
    pub coalesce_ms: u32,
    pub ring_radius: f64,
    pub ring_arc_length: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            transition_ms: 700,
            coalesce_ms: default_coalesce_ms(),
            ring_radius: 45.0,
            // 2 * PI * 45, rounded the way the ring has always been drawn
            ring_arc_length: 283.0,
        }
    }
}

#[cfg(debug_assertions)]
fn default_coalesce_ms() -> u32 {
    0 // Every scroll event is processed when developing locally
}

#[cfg(not(debug_assertions))]
fn default_coalesce_ms() -> u32 {
    16 // About one frame
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
