//! Main data generator producing records of both shapes.

use crate::generators::{numeric, pick_copy, text, timestamp, uuid::generate_uuid_v4};
use bench_core::ranges::*;
use bench_core::{
    BrowserName, ConnectionType, Dataset, DatasetError, DeviceType, EventRecord, EventType,
    Language, OsName, Shape, SimpleRecord,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::debug;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Generated records could not be turned into a dataset
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}

/// How simple records get their `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameStyle {
    /// Random "First Last" names.
    #[default]
    Random,
    /// `user_{index}` by position within the batch.
    Sequential,
}

/// Data generator that produces synthetic records.
///
/// Without a seed the RNG is seeded from OS entropy, so values differ from
/// run to run while the shape stays fixed. With a seed, output is
/// reproducible.
pub struct DataGenerator {
    rng: StdRng,
    seed: Option<u64>,
    name_style: NameStyle,
}

impl DataGenerator {
    /// Create a generator, seeded when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            seed,
            name_style: NameStyle::default(),
        }
    }

    pub fn with_name_style(mut self, name_style: NameStyle) -> Self {
        self.name_style = name_style;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate the simple record at position `index` of a batch.
    pub fn next_simple(&mut self, index: usize) -> SimpleRecord {
        let name = match self.name_style {
            NameStyle::Random => text::full_name(&mut self.rng),
            NameStyle::Sequential => text::sequential_name(index),
        };
        SimpleRecord {
            name,
            age: numeric::int_range(&mut self.rng, AGE_MIN, AGE_MAX),
        }
    }

    /// Generate one event record.
    pub fn next_event(&mut self) -> EventRecord {
        let rng = &mut self.rng;

        let created_at = timestamp::created_at(rng);
        let updated_at = timestamp::updated_at(rng, created_at);
        let screen_width = numeric::int_range(rng, SCREEN_WIDTH_MIN, SCREEN_WIDTH_MAX);
        let screen_height = numeric::int_range(rng, SCREEN_HEIGHT_MIN, SCREEN_HEIGHT_MAX);

        EventRecord {
            event_id: generate_uuid_v4(rng),
            session_id: generate_uuid_v4(rng),
            user_id: generate_uuid_v4(rng),
            anonymous_id: generate_uuid_v4(rng),
            event_type: pick_copy(rng, EventType::ALL),
            created_at,
            updated_at,
            url: text::url(rng),
            referrer: text::url(rng),
            page_title: text::page_title(rng),
            user_agent: text::user_agent(rng),
            ip_address: text::ip_address(rng),
            language: pick_copy(rng, Language::ALL),
            timezone: text::timezone(rng),
            connection_type: pick_copy(rng, ConnectionType::ALL),
            device_type: pick_copy(rng, DeviceType::ALL),
            os_name: pick_copy(rng, OsName::ALL),
            browser_name: pick_copy(rng, BrowserName::ALL),
            screen_width,
            screen_height,
            viewport_width: numeric::int_range(rng, SCREEN_WIDTH_MIN, screen_width),
            viewport_height: numeric::int_range(rng, SCREEN_HEIGHT_MIN, screen_height),
            device_pixel_ratio: numeric::float_range(
                rng,
                DEVICE_PIXEL_RATIO_MIN,
                DEVICE_PIXEL_RATIO_MAX,
                2,
            ),
            page_load_time_ms: numeric::float_range(
                rng,
                PAGE_LOAD_TIME_MIN_MS,
                PAGE_LOAD_TIME_MAX_MS,
                2,
            ),
            dom_content_loaded_ms: numeric::float_range(
                rng,
                DOM_CONTENT_LOADED_MIN_MS,
                DOM_CONTENT_LOADED_MAX_MS,
                2,
            ),
            first_contentful_paint_ms: numeric::float_range(
                rng,
                FIRST_CONTENTFUL_PAINT_MIN_MS,
                FIRST_CONTENTFUL_PAINT_MAX_MS,
                2,
            ),
            time_to_interactive_ms: numeric::float_range(
                rng,
                TIME_TO_INTERACTIVE_MIN_MS,
                TIME_TO_INTERACTIVE_MAX_MS,
                2,
            ),
            scroll_depth: numeric::int_range(rng, SCROLL_DEPTH_MIN, SCROLL_DEPTH_MAX),
            click_count: numeric::int_range(rng, CLICK_COUNT_MIN, CLICK_COUNT_MAX),
            session_duration_secs: numeric::int_range(
                rng,
                SESSION_DURATION_MIN_SECS,
                SESSION_DURATION_MAX_SECS,
            ),
            page_views: numeric::int_range(rng, PAGE_VIEWS_MIN, PAGE_VIEWS_MAX),
            is_bounce: rng.random_bool(0.5),
            is_new_user: rng.random_bool(0.5),
            country_code: text::country_code(rng),
            city: text::city(rng),
            latitude: numeric::float_range(rng, LATITUDE_MIN, LATITUDE_MAX, 6),
            longitude: numeric::float_range(rng, LONGITUDE_MIN, LONGITUDE_MAX, 6),
            message: text::message(rng),
            properties: properties(rng),
        }
    }

    /// Generate exactly `count` simple records.
    pub fn simple_records(&mut self, count: usize) -> Vec<SimpleRecord> {
        (0..count).map(|index| self.next_simple(index)).collect()
    }

    /// Generate exactly `count` event records.
    pub fn event_records(&mut self, count: usize) -> Vec<EventRecord> {
        (0..count).map(|_| self.next_event()).collect()
    }

    /// Generate `count` records of `shape` and render them as a dataset.
    pub fn dataset(&mut self, shape: Shape, count: usize) -> Result<Dataset, GeneratorError> {
        debug!(%shape, count, "Generating dataset");
        let dataset = match shape {
            Shape::Simple => Dataset::from_records(&self.simple_records(count))?,
            Shape::Event => Dataset::from_records(&self.event_records(count))?,
        };
        Ok(dataset)
    }
}

fn properties<R: Rng>(rng: &mut R) -> BTreeMap<String, bench_core::PropertyValue> {
    debug_assert!(text::property_key_pool_len() >= PROPERTY_COUNT);
    let mut properties = BTreeMap::new();
    while properties.len() < PROPERTY_COUNT {
        let key = text::property_key(rng);
        if !properties.contains_key(&key) {
            let value = text::property_value(rng);
            properties.insert(key, value);
        }
    }
    properties
}
