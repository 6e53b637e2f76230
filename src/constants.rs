// Tuning values for the page effects - these are the single source of truth
// so the canvas code and the tests agree on the same numbers.

// Particle backdrop
pub const PARTICLE_COUNT: usize = 60;
pub const MAX_AXIS_SPEED: f64 = 0.2; // px per frame, per axis
pub const MIN_RADIUS: f64 = 0.5;
pub const MAX_RADIUS: f64 = 2.5;
pub const MIN_OPACITY: f64 = 0.1;
pub const MAX_OPACITY: f64 = 0.5;
pub const LINK_DISTANCE: f64 = 120.0;
pub const LINK_BASE_ALPHA: f64 = 0.06;
pub const LINK_LINE_WIDTH: f64 = 0.5;
pub const ACCENT_RGB: (u8, u8, u8) = (124, 106, 239); // page accent purple

// Custom cursor
pub const CURSOR_MIN_VIEWPORT: f64 = 768.0; // touch layouts keep the native cursor
pub const CURSOR_OUTLINE_SIZE: &str = "36px";
pub const CURSOR_OUTLINE_SIZE_HOVER: &str = "50px";
pub const CURSOR_OUTLINE_BORDER: &str = "rgba(124, 106, 239, 0.4)";
pub const CURSOR_OUTLINE_BORDER_HOVER: &str = "rgba(124, 106, 239, 0.7)";
pub const CURSOR_HOVER_TARGETS: &str = "a, button, .skill-card, .info-card, .contact-method";

// Scroll-driven chrome
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0; // keeps headings clear of the fixed header
pub const NAV_PROBE_OFFSET: f64 = 100.0;

// Viewport-entry effects
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const SKILL_FILL_THRESHOLD: f64 = 0.5;

// Typewriter
pub const TYPE_SPEED_MS: u32 = 80;
pub const DELETE_SPEED_MS: u32 = 40;
pub const HOLD_AT_END_MS: u32 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u32 = 400;
pub const TYPEWRITER_PHRASES: [&str; 5] = [
    "Student at NIT Patna",
    "Frontend Developer",
    "AI Enthusiast",
    "Problem Solver",
    "VLSI Explorer",
];
