pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second
pub const MAX_FRAME_TIME: f32 = 0.25;         // Longest delta fed to timers after a stall (seconds)

pub const AUTOPLAY_INTERVAL: f32 = 5.0;       // Time between automatic advances (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (window pixels)
pub const SLIDE_FADE_DURATION: f32 = 0.6;     // Cross-fade between slides (seconds)

pub const BUTTON_SIZE: f32 = 72.0;            // Prev/next button edge (render pixels)
pub const BUTTON_MARGIN: f32 = 32.0;          // Distance from the left/right edges
pub const INDICATOR_SIZE: f32 = 18.0;         // Indicator dot diameter
pub const INDICATOR_SPACING: f32 = 16.0;      // Gap between indicator dots
pub const INDICATOR_BOTTOM_MARGIN: f32 = 48.0;

pub const COUNTER_STEPS: f32 = 200.0;         // Frames a stat counter takes to reach its target
pub const STATS_STRIP_HEIGHT: f32 = 140.0;
