//! Value domains of generated fields.
//!
//! Every bound is inclusive. Generators draw from exactly these ranges and
//! the schema adapters enforce them, so changing one here changes both sides.

/// Simple record: minimum `age`.
pub const AGE_MIN: u8 = 18;
/// Simple record: maximum `age`.
pub const AGE_MAX: u8 = 80;

/// Earliest `created_at`: 2020-01-01T00:00:00Z.
pub const CREATED_AT_MIN_SECS: i64 = 1_577_836_800;
/// Latest `created_at`: 2024-12-31T23:59:59Z.
pub const CREATED_AT_MAX_SECS: i64 = 1_735_689_599;
/// `updated_at` lies within this many seconds after `created_at`.
pub const UPDATED_AT_MAX_LAG_SECS: i64 = 30 * 24 * 60 * 60;
/// Probability that an event carries `updated_at`.
pub const UPDATED_AT_PROBABILITY: f64 = 0.5;

pub const SCREEN_WIDTH_MIN: u32 = 320;
pub const SCREEN_WIDTH_MAX: u32 = 3840;
pub const SCREEN_HEIGHT_MIN: u32 = 240;
pub const SCREEN_HEIGHT_MAX: u32 = 2160;

pub const DEVICE_PIXEL_RATIO_MIN: f64 = 1.0;
pub const DEVICE_PIXEL_RATIO_MAX: f64 = 4.0;

pub const PAGE_LOAD_TIME_MIN_MS: f64 = 50.0;
pub const PAGE_LOAD_TIME_MAX_MS: f64 = 10_000.0;
pub const DOM_CONTENT_LOADED_MIN_MS: f64 = 20.0;
pub const DOM_CONTENT_LOADED_MAX_MS: f64 = 8_000.0;
pub const FIRST_CONTENTFUL_PAINT_MIN_MS: f64 = 10.0;
pub const FIRST_CONTENTFUL_PAINT_MAX_MS: f64 = 6_000.0;
pub const TIME_TO_INTERACTIVE_MIN_MS: f64 = 100.0;
pub const TIME_TO_INTERACTIVE_MAX_MS: f64 = 15_000.0;

pub const SCROLL_DEPTH_MIN: u8 = 0;
pub const SCROLL_DEPTH_MAX: u8 = 100;
pub const CLICK_COUNT_MIN: u32 = 0;
pub const CLICK_COUNT_MAX: u32 = 500;
pub const SESSION_DURATION_MIN_SECS: u32 = 0;
pub const SESSION_DURATION_MAX_SECS: u32 = 86_400;
pub const PAGE_VIEWS_MIN: u32 = 1;
pub const PAGE_VIEWS_MAX: u32 = 200;

pub const LATITUDE_MIN: f64 = -90.0;
pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MIN: f64 = -180.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Each IPv4 octet is drawn from `1..=254`.
pub const IP_OCTET_MIN: u8 = 1;
pub const IP_OCTET_MAX: u8 = 254;

pub const PAGE_TITLE_MIN_LEN: usize = 1;
pub const PAGE_TITLE_MAX_LEN: usize = 120;
pub const MESSAGE_MAX_LEN: usize = 500;
pub const COUNTRY_CODE_LEN: usize = 2;
/// Length of a hyphenated UUID string.
pub const UUID_LEN: usize = 36;

/// Number of entries in `properties`.
pub const PROPERTY_COUNT: usize = 3;
pub const PROPERTY_NUMBER_MIN: f64 = 0.0;
pub const PROPERTY_NUMBER_MAX: f64 = 1_000.0;
