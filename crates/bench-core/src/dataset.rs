//! Fixed, read-only record pools shared by every benchmark.

use crate::records::Record;
use crate::shape::Shape;
use serde_json::Value;
use std::sync::Arc;

/// Error building a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A record could not be rendered as JSON
    #[error("Failed to serialize {shape} record {index}: {source}")]
    Serialize {
        shape: Shape,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// An ordered, immutable pool of records of one shape.
///
/// Records are rendered to JSON once at construction. Cloning a dataset is
/// cheap and every clone sees the same values.
#[derive(Debug, Clone)]
pub struct Dataset {
    shape: Shape,
    values: Arc<[Value]>,
}

impl Dataset {
    /// Render typed records into a dataset.
    pub fn from_records<R: Record>(records: &[R]) -> Result<Self, DatasetError> {
        let values = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::to_value(record).map_err(|source| DatasetError::Serialize {
                    shape: R::SHAPE,
                    index,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            shape: R::SHAPE,
            values: values.into(),
        })
    }

    /// Build a dataset from values that are already JSON.
    pub fn from_values(shape: Shape, values: Vec<Value>) -> Self {
        Self {
            shape,
            values: values.into(),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Shared handle to the underlying values.
    pub fn shared(&self) -> Arc<[Value]> {
        Arc::clone(&self.values)
    }
}
