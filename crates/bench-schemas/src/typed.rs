//! `serde` schemas: strict typed deserialization into the record structs,
//! followed by hand-written range checks against [`bench_core::ranges`].

use crate::adapter::DeserializeValidator;
use crate::library::Library;
use bench_core::ranges::*;
use bench_core::{EventRecord, Shape, SimpleRecord};

pub fn simple() -> DeserializeValidator<SimpleRecord> {
    DeserializeValidator::new(Library::Serde, Shape::Simple, check_simple)
}

pub fn event() -> DeserializeValidator<EventRecord> {
    DeserializeValidator::new(Library::Serde, Shape::Event, check_event)
}

fn in_range<T: PartialOrd + std::fmt::Display>(
    field: &str,
    value: T,
    min: T,
    max: T,
) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("{field}: {value} is outside [{min}, {max}]"));
    }
    Ok(())
}

fn len_in_range(field: &str, value: &str, min: usize, max: usize) -> Result<(), String> {
    in_range(field, value.len(), min, max)
}

fn check_simple(record: &SimpleRecord) -> Result<(), String> {
    if record.name.is_empty() {
        return Err("name: must not be empty".to_string());
    }
    in_range("age", record.age, AGE_MIN, AGE_MAX)
}

fn check_event(record: &EventRecord) -> Result<(), String> {
    if !record.is_chronological() {
        return Err("updated_at: precedes created_at".to_string());
    }
    len_in_range(
        "page_title",
        &record.page_title,
        PAGE_TITLE_MIN_LEN,
        PAGE_TITLE_MAX_LEN,
    )?;
    len_in_range("message", &record.message, 0, MESSAGE_MAX_LEN)?;
    len_in_range(
        "country_code",
        &record.country_code,
        COUNTRY_CODE_LEN,
        COUNTRY_CODE_LEN,
    )?;
    if record.url.is_empty() || record.referrer.is_empty() || record.user_agent.is_empty() {
        return Err("url, referrer and user_agent must not be empty".to_string());
    }
    if record.ip_address.parse::<std::net::Ipv4Addr>().is_err() {
        return Err(format!("ip_address: {} is not IPv4", record.ip_address));
    }

    in_range(
        "screen_width",
        record.screen_width,
        SCREEN_WIDTH_MIN,
        SCREEN_WIDTH_MAX,
    )?;
    in_range(
        "screen_height",
        record.screen_height,
        SCREEN_HEIGHT_MIN,
        SCREEN_HEIGHT_MAX,
    )?;
    in_range(
        "viewport_width",
        record.viewport_width,
        SCREEN_WIDTH_MIN,
        SCREEN_WIDTH_MAX,
    )?;
    in_range(
        "viewport_height",
        record.viewport_height,
        SCREEN_HEIGHT_MIN,
        SCREEN_HEIGHT_MAX,
    )?;
    in_range(
        "device_pixel_ratio",
        record.device_pixel_ratio,
        DEVICE_PIXEL_RATIO_MIN,
        DEVICE_PIXEL_RATIO_MAX,
    )?;
    in_range(
        "page_load_time_ms",
        record.page_load_time_ms,
        PAGE_LOAD_TIME_MIN_MS,
        PAGE_LOAD_TIME_MAX_MS,
    )?;
    in_range(
        "dom_content_loaded_ms",
        record.dom_content_loaded_ms,
        DOM_CONTENT_LOADED_MIN_MS,
        DOM_CONTENT_LOADED_MAX_MS,
    )?;
    in_range(
        "first_contentful_paint_ms",
        record.first_contentful_paint_ms,
        FIRST_CONTENTFUL_PAINT_MIN_MS,
        FIRST_CONTENTFUL_PAINT_MAX_MS,
    )?;
    in_range(
        "time_to_interactive_ms",
        record.time_to_interactive_ms,
        TIME_TO_INTERACTIVE_MIN_MS,
        TIME_TO_INTERACTIVE_MAX_MS,
    )?;
    in_range(
        "scroll_depth",
        record.scroll_depth,
        SCROLL_DEPTH_MIN,
        SCROLL_DEPTH_MAX,
    )?;
    in_range(
        "click_count",
        record.click_count,
        CLICK_COUNT_MIN,
        CLICK_COUNT_MAX,
    )?;
    in_range(
        "session_duration_secs",
        record.session_duration_secs,
        SESSION_DURATION_MIN_SECS,
        SESSION_DURATION_MAX_SECS,
    )?;
    in_range(
        "page_views",
        record.page_views,
        PAGE_VIEWS_MIN,
        PAGE_VIEWS_MAX,
    )?;
    in_range("latitude", record.latitude, LATITUDE_MIN, LATITUDE_MAX)?;
    in_range("longitude", record.longitude, LONGITUDE_MIN, LONGITUDE_MAX)?;

    if record.properties.len() != PROPERTY_COUNT {
        return Err(format!(
            "properties: expected {PROPERTY_COUNT} entries, found {}",
            record.properties.len()
        ));
    }
    if record.properties.keys().any(|key| key.is_empty()) {
        return Err("properties: keys must not be empty".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Validator;
    use serde_json::json;

    #[test]
    fn test_simple_accepts_bounds() {
        let validator = simple();
        assert!(validator.validate(&json!({"name": "A", "age": 18})).is_ok());
        assert!(validator.validate(&json!({"name": "A", "age": 80})).is_ok());
    }

    #[test]
    fn test_simple_rejects() {
        let validator = simple();
        assert!(validator.validate(&json!({"name": "A", "age": 17})).is_err());
        assert!(validator.validate(&json!({"name": "", "age": 30})).is_err());
        assert!(validator.validate(&json!({"name": "A"})).is_err());
        assert!(validator
            .validate(&json!({"name": "A", "age": 30, "extra": 1}))
            .is_err());
    }

    #[test]
    fn test_error_carries_library_and_shape() {
        let err = simple()
            .validate(&json!({"name": "A", "age": 99}))
            .unwrap_err();
        assert_eq!(err.library, Library::Serde);
        assert_eq!(err.shape, Shape::Simple);
        assert!(err.message.contains("age"));
    }
}
