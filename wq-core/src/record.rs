use serde::{Deserialize, Serialize};

/// A single yearly observation summary for one parameter at one site.
///
/// Numeric fields are optional because source data is dirty: a field that
/// failed to parse is `None`, and a field that parsed to a non-finite value
/// is treated the same way by the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub parameter: String,
    pub site: String,
    /// Observation year. `None` when the source value was not a finite integer.
    pub year: Option<i32>,
    /// Mean of the observations taken that year.
    pub average: Option<f64>,
    /// Declared minimum observation for the year.
    pub min: Option<f64>,
    /// Declared maximum observation for the year.
    pub max: Option<f64>,
    /// Number of observations behind the summary.
    pub count: Option<f64>,
}

impl Record {
    /// Create a record with only its identifying fields set.
    pub fn new(parameter: impl Into<String>, site: impl Into<String>, year: i32) -> Self {
        Self {
            parameter: parameter.into(),
            site: site.into(),
            year: Some(year),
            average: None,
            min: None,
            max: None,
            count: None,
        }
    }

    pub fn with_average(mut self, average: f64) -> Self {
        self.average = Some(average);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_count(mut self, count: f64) -> Self {
        self.count = Some(count);
        self
    }

    /// The average, if it is usable for aggregation.
    pub fn finite_average(&self) -> Option<f64> {
        self.average.filter(|v| v.is_finite())
    }

    pub fn finite_min(&self) -> Option<f64> {
        self.min.filter(|v| v.is_finite())
    }

    pub fn finite_max(&self) -> Option<f64> {
        self.max.filter(|v| v.is_finite())
    }

    /// Contribution of this record to a group's observation count.
    /// Non-finite counts contribute nothing.
    pub fn finite_count(&self) -> Option<f64> {
        self.count.filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_fields_are_unusable() {
        let record = Record {
            average: Some(f64::NAN),
            min: Some(f64::INFINITY),
            max: Some(2.0),
            count: Some(f64::NEG_INFINITY),
            ..Record::new("pH", "A", 2020)
        };
        assert_eq!(record.finite_average(), None);
        assert_eq!(record.finite_min(), None);
        assert_eq!(record.finite_max(), Some(2.0));
        assert_eq!(record.finite_count(), None);
    }

    #[test]
    fn builder_sets_fields() {
        let record = Record::new("pH", "A", 2020)
            .with_average(7.1)
            .with_range(6.5, 7.9)
            .with_count(4.0);
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.finite_average(), Some(7.1));
        assert_eq!(record.finite_min(), Some(6.5));
        assert_eq!(record.finite_max(), Some(7.9));
        assert_eq!(record.finite_count(), Some(4.0));
    }
}
