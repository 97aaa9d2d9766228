//! Algorithm constants and runtime configuration defaults

// Grid size bounds enforced by the caller before generation
/// Smallest supported dot-grid dimension
pub const MIN_GRID_SIZE: usize = 4;
/// Largest supported dot-grid dimension
pub const MAX_GRID_SIZE: usize = 20;
/// Default dot-grid dimension
pub const DEFAULT_GRID_SIZE: usize = 8;

// Complexity clamps; the walkers accept any finite value in (0, 1)
/// Lower complexity clamp
pub const MIN_COMPLEXITY: f64 = 0.1;
/// Upper complexity clamp
pub const MAX_COMPLEXITY: f64 = 0.9;
/// Default complexity
pub const DEFAULT_COMPLEXITY: f64 = 0.5;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Progress reporting settings
/// Steps between progress callbacks during a single-stroke walk
pub const PROGRESS_REPORT_INTERVAL: usize = 100;
/// Total work below which no progress bar is shown
pub const PROGRESS_STEP_THRESHOLD: u64 = 1000;

// Rendering settings
/// Square canvas edge in pixels
pub const CANVAS_SIZE_PX: u32 = 1000;
/// Fraction of the canvas left as margin on each side
pub const CANVAS_MARGIN_FRACTION: f64 = 0.1;
/// Radius of the main stroke in pixels
pub const STROKE_RADIUS_PX: i32 = 3;
/// Radius of the low-alpha accent underlay in pixels
pub const ACCENT_RADIUS_PX: i32 = 5;
/// Radius of decorative dots in pixels
pub const DOT_RADIUS_PX: i32 = 5;
/// Approximate number of decorative dots along a path
pub const DOT_SAMPLE_TARGET: usize = 15;
/// Paths shorter than this get no decorative dots
pub const MIN_POINTS_FOR_DOTS: usize = 5;

/// Default stroke color palette (RGB)
pub const DEFAULT_PALETTE: [[u8; 3]; 15] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
    [0x3b, 0x82, 0xf6],
    [0x10, 0xb9, 0x81],
    [0xf5, 0x9e, 0x0b],
    [0xef, 0x44, 0x44],
    [0x8b, 0x5c, 0xf6],
];
