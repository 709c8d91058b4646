//! Static loudspeaker layout the impulse responses are exported for.
//!
//! The layout is compile-time configuration: an ordered list mapping an
//! output file stem to the direction that speaker sits at. There is no
//! runtime layout surface.

/// Direction of a source relative to the listener, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    /// Azimuth in degrees, counterclockwise from front center.
    pub azimuth: f64,
    /// Elevation in degrees above the horizontal plane.
    pub elevation: f64,
}

impl Direction {
    pub const fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }
}

/// One speaker of the layout: output label plus target direction.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    /// Output file stem, e.g. `"FC_0"` becomes `FC_0.wav`.
    pub label: &'static str,
    pub direction: Direction,
}

impl Target {
    pub const fn new(label: &'static str, azimuth: f64, elevation: f64) -> Self {
        Self {
            label,
            direction: Direction::new(azimuth, elevation),
        }
    }
}

/// Calibration layout: seven bed channels plus two height channels.
///
/// Targets are processed in slice order, one WAV file per entry.
pub const DEFAULT_LAYOUT: &[Target] = &[
    // bed layer
    Target::new("FC_0", 0.0, 0.0),
    Target::new("FL_45", 45.0, 0.0),
    Target::new("FR_315", 315.0, 0.0),
    Target::new("SL_90", 90.0, 0.0),
    Target::new("SR_270", 270.0, 0.0),
    Target::new("BL_135", 135.0, 0.0),
    Target::new("BR_225", 225.0, 0.0),
    // height layer
    Target::new("TopL_90", 90.0, 45.0),
    Target::new("TopR_270", 270.0, 45.0),
];
