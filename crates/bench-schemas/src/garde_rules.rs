//! `garde` schemas.

use crate::adapter::DeserializeValidator;
use crate::library::Library;
use bench_core::{
    BrowserName, ConnectionType, DeviceType, EventType, Language, OsName, PropertyValue, Shape,
};
use garde::Validate;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimpleSchema {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(range(min = 18, max = 80))]
    pub age: u8,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EventSchema {
    #[garde(length(min = 36, max = 36))]
    pub event_id: String,
    #[garde(length(min = 36, max = 36))]
    pub session_id: String,
    #[garde(length(min = 36, max = 36))]
    pub user_id: String,
    #[garde(length(min = 36, max = 36))]
    pub anonymous_id: String,
    #[garde(skip)]
    pub event_type: EventType,
    #[garde(length(min = 20, max = 40))]
    pub created_at: String,
    #[serde(default)]
    #[garde(length(min = 20, max = 40))]
    pub updated_at: Option<String>,
    #[garde(length(min = 9))]
    pub url: String,
    #[garde(length(min = 9))]
    pub referrer: String,
    #[garde(length(min = 1, max = 120))]
    pub page_title: String,
    #[garde(length(min = 1))]
    pub user_agent: String,
    #[garde(length(min = 7, max = 15))]
    pub ip_address: String,
    #[garde(skip)]
    pub language: Language,
    #[garde(length(min = 1))]
    pub timezone: String,
    #[garde(skip)]
    pub connection_type: ConnectionType,
    #[garde(skip)]
    pub device_type: DeviceType,
    #[garde(skip)]
    pub os_name: OsName,
    #[garde(skip)]
    pub browser_name: BrowserName,
    #[garde(range(min = 320, max = 3840))]
    pub screen_width: u32,
    #[garde(range(min = 240, max = 2160))]
    pub screen_height: u32,
    #[garde(range(min = 320, max = 3840))]
    pub viewport_width: u32,
    #[garde(range(min = 240, max = 2160))]
    pub viewport_height: u32,
    #[garde(range(min = 1.0, max = 4.0))]
    pub device_pixel_ratio: f64,
    #[garde(range(min = 50.0, max = 10000.0))]
    pub page_load_time_ms: f64,
    #[garde(range(min = 20.0, max = 8000.0))]
    pub dom_content_loaded_ms: f64,
    #[garde(range(min = 10.0, max = 6000.0))]
    pub first_contentful_paint_ms: f64,
    #[garde(range(min = 100.0, max = 15000.0))]
    pub time_to_interactive_ms: f64,
    #[garde(range(max = 100))]
    pub scroll_depth: u8,
    #[garde(range(max = 500))]
    pub click_count: u32,
    #[garde(range(max = 86400))]
    pub session_duration_secs: u32,
    #[garde(range(min = 1, max = 200))]
    pub page_views: u32,
    #[garde(skip)]
    pub is_bounce: bool,
    #[garde(skip)]
    pub is_new_user: bool,
    #[garde(length(min = 2, max = 2))]
    pub country_code: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[garde(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[garde(length(max = 500))]
    pub message: String,
    #[garde(length(min = 3, max = 3))]
    pub properties: BTreeMap<String, PropertyValue>,
}

fn run_rules<S: Validate<Context = ()>>(schema: &S) -> Result<(), String> {
    schema.validate().map_err(|report| report.to_string())
}

pub fn simple() -> DeserializeValidator<SimpleSchema> {
    DeserializeValidator::new(Library::Garde, Shape::Simple, run_rules::<SimpleSchema>)
}

pub fn event() -> DeserializeValidator<EventSchema> {
    DeserializeValidator::new(Library::Garde, Shape::Event, run_rules::<EventSchema>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Validator;
    use serde_json::json;

    #[test]
    fn test_simple_bounds() {
        let validator = simple();
        assert!(validator.validate(&json!({"name": "A", "age": 18})).is_ok());
        assert!(validator.validate(&json!({"name": "A", "age": 81})).is_err());
    }

    #[test]
    fn test_simple_rejects_wrong_type() {
        let err = simple()
            .validate(&json!({"name": 12, "age": 30}))
            .unwrap_err();
        assert_eq!(err.library, Library::Garde);
    }
}
