//! Concrete record types for the two benchmarked shapes.
//!
//! Records serialize to the JSON objects the validators receive. Enumerated
//! fields are closed Rust enums whose serde names are the wire strings.

use crate::shape::Shape;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A record type that belongs to one [`Shape`].
pub trait Record: Serialize {
    const SHAPE: Shape;
}

/// Declares a closed string enum with its wire names.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:tt),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!("Unknown {}: {s}", stringify!($name))),
                }
            }
        }
    };
}

string_enum! {
    /// Kind of analytics event.
    EventType {
        PageView => "page_view",
        Click => "click",
        Scroll => "scroll",
        FormSubmit => "form_submit",
        Purchase => "purchase",
        Signup => "signup",
    }
}

string_enum! {
    /// Network connection reported by the client.
    ConnectionType {
        FourG => "4g",
        Wifi => "wifi",
        Ethernet => "ethernet",
        Slow2g => "slow-2g",
        TwoG => "2g",
        ThreeG => "3g",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Browser UI language.
    Language {
        EnUs => "en-US",
        EnGb => "en-GB",
        FrFr => "fr-FR",
        DeDe => "de-DE",
        EsEs => "es-ES",
        JaJp => "ja-JP",
        ZhCn => "zh-CN",
        PtBr => "pt-BR",
    }
}

string_enum! {
    DeviceType {
        Desktop => "desktop",
        Mobile => "mobile",
        Tablet => "tablet",
    }
}

string_enum! {
    OsName {
        Windows => "windows",
        MacOs => "macos",
        Linux => "linux",
        Ios => "ios",
        Android => "android",
    }
}

string_enum! {
    BrowserName {
        Chrome => "chrome",
        Firefox => "firefox",
        Safari => "safari",
        Edge => "edge",
        Opera => "opera",
    }
}

/// Baseline two-field record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimpleRecord {
    pub name: String,
    pub age: u8,
}

impl Record for SimpleRecord {
    const SHAPE: Shape = Shape::Simple;
}

/// Scalar stored in an event's `properties` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Analytics/telemetry event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventRecord {
    pub event_id: Uuid,
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub anonymous_id: Uuid,
    pub event_type: EventType,
    pub created_at: DateTime<Utc>,
    /// Present on roughly half the events; never earlier than `created_at`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub url: String,
    pub referrer: String,
    pub page_title: String,
    pub user_agent: String,
    pub ip_address: String,
    pub language: Language,
    pub timezone: String,
    pub connection_type: ConnectionType,
    pub device_type: DeviceType,
    pub os_name: OsName,
    pub browser_name: BrowserName,
    pub screen_width: u32,
    pub screen_height: u32,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub device_pixel_ratio: f64,
    pub page_load_time_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub first_contentful_paint_ms: f64,
    pub time_to_interactive_ms: f64,
    pub scroll_depth: u8,
    pub click_count: u32,
    pub session_duration_secs: u32,
    pub page_views: u32,
    pub is_bounce: bool,
    pub is_new_user: bool,
    pub country_code: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub message: String,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl EventRecord {
    /// Whether `updated_at`, when present, does not precede `created_at`.
    pub fn is_chronological(&self) -> bool {
        self.updated_at
            .map(|updated| updated >= self.created_at)
            .unwrap_or(true)
    }
}

impl Record for EventRecord {
    const SHAPE: Shape = Shape::Event;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_type_wire_names() {
        let names: Vec<&str> = ConnectionType::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["4g", "wifi", "ethernet", "slow-2g", "2g", "3g", "unknown"]
        );
        assert_eq!(
            serde_json::to_value(ConnectionType::Slow2g).unwrap(),
            serde_json::json!("slow-2g")
        );
    }

    #[test]
    fn test_string_enum_from_str() {
        assert_eq!("pt-BR".parse::<Language>().unwrap(), Language::PtBr);
        assert_eq!(
            "form_submit".parse::<EventType>().unwrap(),
            EventType::FormSubmit
        );
        let err = "5g".parse::<ConnectionType>().unwrap_err();
        assert!(err.contains("ConnectionType"));
    }

    #[test]
    fn test_simple_record_keys() {
        let record = SimpleRecord {
            name: "Ada".to_string(),
            age: 36,
        };
        let value = serde_json::to_value(&record).unwrap();
        let keys: std::collections::BTreeSet<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["age", "name"].into_iter().collect());
    }

    #[test]
    fn test_simple_record_rejects_unknown_fields() {
        let value = serde_json::json!({"name": "Ada", "age": 36, "extra": true});
        assert!(serde_json::from_value::<SimpleRecord>(value).is_err());
    }

    #[test]
    fn test_property_value_untagged() {
        let value: PropertyValue = serde_json::from_value(serde_json::json!(true)).unwrap();
        assert_eq!(value, PropertyValue::Bool(true));
        let value: PropertyValue = serde_json::from_value(serde_json::json!(2.5)).unwrap();
        assert_eq!(value, PropertyValue::Number(2.5));
        let value: PropertyValue = serde_json::from_value(serde_json::json!("x")).unwrap();
        assert_eq!(value, PropertyValue::Text("x".to_string()));
    }
}
