use log::Level;

/// Spreadsheet-backed intake script that records submitted leads.
pub const INTAKE_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzxYFjboovAOU0JwbzS_cpvo_mekEchSu4Ze7dKj-RqZISpHRk7IVq7q72ajxZe-SD5/exec";

pub const SCHEDULING_URL: &str = "https://calendly.com/vyvabrill/30min";

pub const THEME_STORAGE_KEY: &str = "vyvabrill-theme";

pub const CONTACT_EMAIL: &str = "hi@vyvabrill.com";

/// Scroll offset (px) past which the back-to-top button shows up.
pub const BACK_TO_TOP_THRESHOLD: f64 = 500.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
