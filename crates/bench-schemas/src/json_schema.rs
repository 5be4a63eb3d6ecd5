//! JSON Schema documents and the `jsonschema` adapter.
//!
//! The default mode builds a validator from the document on every call;
//! the compiled mode builds it once and reuses it.

use crate::adapter::Validator;
use crate::error::{SchemaError, ValidationError};
use crate::library::{Library, Mode};
use bench_core::ranges::*;
use bench_core::{BrowserName, ConnectionType, DeviceType, EventType, Language, OsName, Shape};
use serde_json::{json, Value};

fn uuid_field() -> Value {
    json!({"type": "string", "format": "uuid", "minLength": UUID_LEN, "maxLength": UUID_LEN})
}

fn enum_field(values: Vec<&'static str>) -> Value {
    json!({"type": "string", "enum": values})
}

/// Schema document for [`bench_core::SimpleRecord`].
pub fn simple_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "name": {"type": "string", "minLength": 1},
            "age": {"type": "integer", "minimum": AGE_MIN, "maximum": AGE_MAX}
        },
        "required": ["name", "age"],
        "additionalProperties": false
    })
}

/// Schema document for [`bench_core::EventRecord`].
pub fn event_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "event_id": uuid_field(),
            "session_id": uuid_field(),
            "user_id": uuid_field(),
            "anonymous_id": uuid_field(),
            "event_type": enum_field(EventType::ALL.iter().map(EventType::as_str).collect()),
            "created_at": {"type": "string", "format": "date-time"},
            "updated_at": {"type": "string", "format": "date-time"},
            "url": {"type": "string", "pattern": "^https?://"},
            "referrer": {"type": "string", "pattern": "^https?://"},
            "page_title": {
                "type": "string",
                "minLength": PAGE_TITLE_MIN_LEN,
                "maxLength": PAGE_TITLE_MAX_LEN
            },
            "user_agent": {"type": "string", "minLength": 1},
            "ip_address": {"type": "string", "format": "ipv4"},
            "language": enum_field(Language::ALL.iter().map(Language::as_str).collect()),
            "timezone": {"type": "string", "minLength": 1},
            "connection_type": enum_field(
                ConnectionType::ALL.iter().map(ConnectionType::as_str).collect()
            ),
            "device_type": enum_field(DeviceType::ALL.iter().map(DeviceType::as_str).collect()),
            "os_name": enum_field(OsName::ALL.iter().map(OsName::as_str).collect()),
            "browser_name": enum_field(BrowserName::ALL.iter().map(BrowserName::as_str).collect()),
            "screen_width": {
                "type": "integer", "minimum": SCREEN_WIDTH_MIN, "maximum": SCREEN_WIDTH_MAX
            },
            "screen_height": {
                "type": "integer", "minimum": SCREEN_HEIGHT_MIN, "maximum": SCREEN_HEIGHT_MAX
            },
            "viewport_width": {
                "type": "integer", "minimum": SCREEN_WIDTH_MIN, "maximum": SCREEN_WIDTH_MAX
            },
            "viewport_height": {
                "type": "integer", "minimum": SCREEN_HEIGHT_MIN, "maximum": SCREEN_HEIGHT_MAX
            },
            "device_pixel_ratio": {
                "type": "number",
                "minimum": DEVICE_PIXEL_RATIO_MIN,
                "maximum": DEVICE_PIXEL_RATIO_MAX
            },
            "page_load_time_ms": {
                "type": "number",
                "minimum": PAGE_LOAD_TIME_MIN_MS,
                "maximum": PAGE_LOAD_TIME_MAX_MS
            },
            "dom_content_loaded_ms": {
                "type": "number",
                "minimum": DOM_CONTENT_LOADED_MIN_MS,
                "maximum": DOM_CONTENT_LOADED_MAX_MS
            },
            "first_contentful_paint_ms": {
                "type": "number",
                "minimum": FIRST_CONTENTFUL_PAINT_MIN_MS,
                "maximum": FIRST_CONTENTFUL_PAINT_MAX_MS
            },
            "time_to_interactive_ms": {
                "type": "number",
                "minimum": TIME_TO_INTERACTIVE_MIN_MS,
                "maximum": TIME_TO_INTERACTIVE_MAX_MS
            },
            "scroll_depth": {
                "type": "integer", "minimum": SCROLL_DEPTH_MIN, "maximum": SCROLL_DEPTH_MAX
            },
            "click_count": {
                "type": "integer", "minimum": CLICK_COUNT_MIN, "maximum": CLICK_COUNT_MAX
            },
            "session_duration_secs": {
                "type": "integer",
                "minimum": SESSION_DURATION_MIN_SECS,
                "maximum": SESSION_DURATION_MAX_SECS
            },
            "page_views": {
                "type": "integer", "minimum": PAGE_VIEWS_MIN, "maximum": PAGE_VIEWS_MAX
            },
            "is_bounce": {"type": "boolean"},
            "is_new_user": {"type": "boolean"},
            "country_code": {"type": "string", "pattern": "^[A-Z]{2}$"},
            "city": {"type": "string", "minLength": 1},
            "latitude": {"type": "number", "minimum": LATITUDE_MIN, "maximum": LATITUDE_MAX},
            "longitude": {"type": "number", "minimum": LONGITUDE_MIN, "maximum": LONGITUDE_MAX},
            "message": {"type": "string", "maxLength": MESSAGE_MAX_LEN},
            "properties": {
                "type": "object",
                "minProperties": PROPERTY_COUNT,
                "maxProperties": PROPERTY_COUNT,
                "propertyNames": {"minLength": 1},
                "additionalProperties": {"type": ["string", "number", "boolean"]}
            }
        },
        "required": [
            "event_id", "session_id", "user_id", "anonymous_id", "event_type", "created_at",
            "url", "referrer", "page_title", "user_agent", "ip_address", "language", "timezone",
            "connection_type", "device_type", "os_name", "browser_name", "screen_width",
            "screen_height", "viewport_width", "viewport_height", "device_pixel_ratio",
            "page_load_time_ms", "dom_content_loaded_ms", "first_contentful_paint_ms",
            "time_to_interactive_ms", "scroll_depth", "click_count", "session_duration_secs",
            "page_views", "is_bounce", "is_new_user", "country_code", "city", "latitude",
            "longitude", "message", "properties"
        ],
        "additionalProperties": false
    })
}

/// Schema document for `shape`.
pub fn schema_for(shape: Shape) -> Value {
    match shape {
        Shape::Simple => simple_schema(),
        Shape::Event => event_schema(),
    }
}

fn compile(shape: Shape, schema: &Value) -> Result<jsonschema::Validator, SchemaError> {
    jsonschema::validator_for(schema).map_err(|e| SchemaError::InvalidJsonSchema {
        shape,
        message: e.to_string(),
    })
}

/// `jsonschema` adapter for one shape in one mode.
pub struct JsonSchemaValidator {
    shape: Shape,
    schema: Value,
    /// Present in compiled mode only.
    compiled: Option<jsonschema::Validator>,
}

impl JsonSchemaValidator {
    /// Prepare the adapter. The document is compiled once here in both
    /// modes so an invalid schema fails at registration, not mid-run.
    pub fn new(shape: Shape, mode: Mode) -> Result<Self, SchemaError> {
        let schema = schema_for(shape);
        let compiled = compile(shape, &schema)?;
        Ok(Self {
            shape,
            schema,
            compiled: (mode == Mode::Compiled).then_some(compiled),
        })
    }

    fn error(&self, message: impl Into<String>) -> ValidationError {
        ValidationError::new(Library::JsonSchema, self.shape, message)
    }
}

impl Validator for JsonSchemaValidator {
    fn library(&self) -> Library {
        Library::JsonSchema
    }

    fn mode(&self) -> Mode {
        if self.compiled.is_some() {
            Mode::Compiled
        } else {
            Mode::Default
        }
    }

    fn shape(&self) -> Shape {
        self.shape
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match &self.compiled {
            Some(validator) => validator
                .validate(value)
                .map_err(|e| self.error(e.to_string())),
            None => {
                let validator =
                    compile(self.shape, &self.schema).map_err(|e| self.error(e.to_string()))?;
                validator
                    .validate(value)
                    .map_err(|e| self.error(e.to_string()))
            }
        }
    }
}
