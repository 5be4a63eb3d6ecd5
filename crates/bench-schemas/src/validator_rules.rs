//! `validator` schemas.
//!
//! Enumerated fields reuse the closed enums from `bench-core`, so membership
//! is enforced while deserializing; the derive rules cover lengths and ranges.

use crate::adapter::DeserializeValidator;
use crate::library::Library;
use bench_core::{
    BrowserName, ConnectionType, DeviceType, EventType, Language, OsName, PropertyValue, Shape,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimpleSchema {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 80))]
    pub age: u8,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EventSchema {
    #[validate(length(min = 36, max = 36))]
    pub event_id: String,
    #[validate(length(min = 36, max = 36))]
    pub session_id: String,
    #[validate(length(min = 36, max = 36))]
    pub user_id: String,
    #[validate(length(min = 36, max = 36))]
    pub anonymous_id: String,
    pub event_type: EventType,
    #[validate(length(min = 20, max = 40))]
    pub created_at: String,
    #[serde(default)]
    #[validate(length(min = 20, max = 40))]
    pub updated_at: Option<String>,
    #[validate(length(min = 9))]
    pub url: String,
    #[validate(length(min = 9))]
    pub referrer: String,
    #[validate(length(min = 1, max = 120))]
    pub page_title: String,
    #[validate(length(min = 1))]
    pub user_agent: String,
    #[validate(length(min = 7, max = 15))]
    pub ip_address: String,
    pub language: Language,
    #[validate(length(min = 1))]
    pub timezone: String,
    pub connection_type: ConnectionType,
    pub device_type: DeviceType,
    pub os_name: OsName,
    pub browser_name: BrowserName,
    #[validate(range(min = 320, max = 3840))]
    pub screen_width: u32,
    #[validate(range(min = 240, max = 2160))]
    pub screen_height: u32,
    #[validate(range(min = 320, max = 3840))]
    pub viewport_width: u32,
    #[validate(range(min = 240, max = 2160))]
    pub viewport_height: u32,
    #[validate(range(min = 1.0, max = 4.0))]
    pub device_pixel_ratio: f64,
    #[validate(range(min = 50.0, max = 10000.0))]
    pub page_load_time_ms: f64,
    #[validate(range(min = 20.0, max = 8000.0))]
    pub dom_content_loaded_ms: f64,
    #[validate(range(min = 10.0, max = 6000.0))]
    pub first_contentful_paint_ms: f64,
    #[validate(range(min = 100.0, max = 15000.0))]
    pub time_to_interactive_ms: f64,
    #[validate(range(max = 100))]
    pub scroll_depth: u8,
    #[validate(range(max = 500))]
    pub click_count: u32,
    #[validate(range(max = 86400))]
    pub session_duration_secs: u32,
    #[validate(range(min = 1, max = 200))]
    pub page_views: u32,
    pub is_bounce: bool,
    pub is_new_user: bool,
    #[validate(length(min = 2, max = 2))]
    pub country_code: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(max = 500))]
    pub message: String,
    #[validate(length(min = 3, max = 3))]
    pub properties: BTreeMap<String, PropertyValue>,
}

fn run_rules<S: Validate>(schema: &S) -> Result<(), String> {
    schema.validate().map_err(|errors| errors.to_string())
}

pub fn simple() -> DeserializeValidator<SimpleSchema> {
    DeserializeValidator::new(Library::Validator, Shape::Simple, run_rules::<SimpleSchema>)
}

pub fn event() -> DeserializeValidator<EventSchema> {
    DeserializeValidator::new(Library::Validator, Shape::Event, run_rules::<EventSchema>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Validator;
    use serde_json::json;

    #[test]
    fn test_simple_bounds_match_ranges() {
        use bench_core::ranges::{AGE_MAX, AGE_MIN};

        let validator = simple();
        assert!(validator
            .validate(&json!({"name": "A", "age": AGE_MIN}))
            .is_ok());
        assert!(validator
            .validate(&json!({"name": "A", "age": AGE_MAX}))
            .is_ok());
        assert!(validator
            .validate(&json!({"name": "A", "age": AGE_MIN - 1}))
            .is_err());
        assert!(validator
            .validate(&json!({"name": "A", "age": AGE_MAX + 1}))
            .is_err());
    }

    #[test]
    fn test_simple_rejects_empty_name() {
        let err = simple()
            .validate(&json!({"name": "", "age": 30}))
            .unwrap_err();
        assert_eq!(err.library, Library::Validator);
        assert!(err.message.contains("name"));
    }
}
