use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const PRIMARY: &str = "#00a4e6";
pub const PRIMARY_DARK: &str = "#0057B8";
pub const INK: &str = "#101618";
pub const PAGE_BG: &str = "#F8F9FA";

pub const HEART_RATE_TICK_MS: u32 = 2_000;
pub const SCAN_TICK_MS: u32 = 50;

pub const HEART_RATE_MIN: u32 = 90;
pub const HEART_RATE_MAX: u32 = 105;
pub const INITIAL_HEART_RATE: u32 = 98;

pub const READINESS_PERCENT: u32 = 94;
pub const READINESS_DELTA: &str = "+2%";
