//! Donut chart of portfolio weights

use serde::Serialize;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::response::OrderedMap;

/// Labels and values handed to the chart library.
///
/// `labels[i]` belongs to `series[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub labels: Vec<String>,
    pub series: Vec<f64>,
}

impl ChartSpec {
    /// Build from the weights map in a single pass, so labels and values
    /// cannot drift apart
    pub fn from_weights(weights: &OrderedMap<f64>) -> Self {
        let (labels, series) = weights
            .iter()
            .map(|(ticker, weight)| (ticker.to_string(), *weight))
            .unzip();
        Self { labels, series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// ApexCharts options for a donut chart with the given instance id
    pub fn donut_options(&self, instance_id: &str) -> Value {
        json!({
            "chart": {
                "id": instance_id,
                "type": "donut",
                "height": 350,
            },
            "series": self.series,
            "labels": self.labels,
            "legend": { "position": "bottom" },
            "dataLabels": { "enabled": true },
        })
    }
}

/// Fresh id for a chart instance
pub fn new_instance_id() -> String {
    format!("allocation-donut-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(entries: &[(&str, f64)]) -> OrderedMap<f64> {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_labels_and_series_are_paired() {
        let spec = ChartSpec::from_weights(&weights(&[("KO", 0.5), ("AAPL", 0.25), ("TSLA", 0.25)]));

        assert_eq!(spec.len(), 3);
        assert_eq!(spec.labels, ["KO", "AAPL", "TSLA"]);
        assert_eq!(spec.series, [0.5, 0.25, 0.25]);
    }

    #[test]
    fn test_donut_options() {
        let spec = ChartSpec::from_weights(&weights(&[("MSFT", 1.0)]));
        let options = spec.donut_options("allocation-donut-test");

        assert_eq!(options["chart"]["type"], "donut");
        assert_eq!(options["chart"]["id"], "allocation-donut-test");
        assert_eq!(options["labels"], json!(["MSFT"]));
        assert_eq!(options["series"], json!([1.0]));
    }

    #[test]
    fn test_instance_ids_are_unique() {
        assert_ne!(new_instance_id(), new_instance_id());
    }
}
