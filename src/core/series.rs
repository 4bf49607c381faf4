use ordered_float::OrderedFloat;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Ordered, read-only sequence of non-negative counts plotted by the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSeries {
    values: Vec<f64>,
}

impl DataSeries {
    /// Builds a series, rejecting negative or non-finite values.
    ///
    /// An empty series is accepted here and rejected when a layout is computed.
    pub fn new(values: Vec<f64>) -> GraphResult<Self> {
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() || *value < 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "series value at index {index} must be finite and >= 0"
                )));
            }
        }
        Ok(Self { values })
    }

    /// Placeholder feed: `count` values drawn as `round(random * 10 + 5)`.
    pub fn random_counts<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let values = (0..count)
            .map(|_| (rng.random::<f64>() * 10.0 + 5.0).round())
            .collect();
        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .max_by_key(|value| OrderedFloat(*value))
    }
}

impl TryFrom<Vec<f64>> for DataSeries {
    type Error = GraphError;

    fn try_from(values: Vec<f64>) -> GraphResult<Self> {
        Self::new(values)
    }
}
