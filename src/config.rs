use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Hero video
pub const HOVER_PREVIEW_DELAY_MS: u32 = 300;

// Theme
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Navigation and scrolling
pub const NAV_SCROLLED_THRESHOLD: f64 = 10.0;
pub const NAV_FALLBACK_HEIGHT: f64 = 80.0;
pub const ANCHOR_SCROLL_GAP: f64 = 20.0;
pub const FLOATING_CTA_VIEWPORT_RATIO: f64 = 0.8;
pub const FLOATING_CTA_SETTLE_MS: u32 = 150;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_SECS: f64 = 0.1;
pub const PARALLAX_STRENGTH: f64 = 20.0;

// ROI assumptions
pub const MINUTES_SAVED_PER_DAY: f64 = 12.0;
pub const WORK_DAYS_PER_YEAR: f64 = 250.0;
pub const HOURS_PER_WORK_DAY: f64 = 8.0;
pub const COST_PER_EMPLOYEE_PER_YEAR: f64 = 300.0;
pub const DEFAULT_AVG_SALARY: f64 = 60_000.0;

// Forms
pub const FORM_SUBMIT_DELAY_MS: u32 = 1_500;
pub const FORM_MESSAGE_LIFETIME_MS: u32 = 5_000;

// Network nodes
pub const NODE_RADIUS: f64 = 200.0;
pub const NODE_CENTER: (f64, f64) = (250.0, 250.0);
