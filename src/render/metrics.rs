//! Performance metric registry
//!
//! Maps the optimizer's metric names to a display label and a formatting
//! rule. Metrics the registry does not know are ignored, so the optimizer
//! can add new ones without breaking the page.

use crate::response::OrderedMap;

/// How a metric value is turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricScale {
    /// A proportion, shown as a percentage (0.1234 -> "12.34%")
    Percent,
    /// A dimensionless ratio, shown as-is (1.5 -> "1.50")
    Ratio,
}

impl MetricScale {
    pub fn format(self, value: f64) -> String {
        match self {
            MetricScale::Percent => format!("{:.2}%", value * 100.0),
            MetricScale::Ratio => format!("{value:.2}"),
        }
    }
}

/// Display rule for one named metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRule {
    /// Key in the response's `performance` object
    pub key: String,
    pub label: String,
    pub scale: MetricScale,
}

/// Ordered set of known metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRegistry {
    rules: Vec<MetricRule>,
}

impl Default for MetricRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("Expected annual return", "Expected Annual Return", MetricScale::Percent)
            .register("Sharpe Ratio", "Sharpe Ratio", MetricScale::Ratio)
            .register("Conditional Value at Risk", "Conditional Value at Risk", MetricScale::Percent)
            .register("Annual semi-deviation", "Annual Semi-Deviation", MetricScale::Percent)
            .register("Sortino Ratio", "Sortino Ratio", MetricScale::Ratio)
            .register("Annual volatility", "Annual Volatility", MetricScale::Percent);
        registry
    }
}

impl MetricRegistry {
    /// Registry that knows no metrics
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a metric, or replace the rule for an already registered key
    pub fn register(
        &mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        scale: MetricScale,
    ) -> &mut Self {
        let rule = MetricRule {
            key: key.into(),
            label: label.into(),
            scale,
        };
        match self.rules.iter_mut().find(|r| r.key == rule.key) {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
        self
    }

    pub fn rules(&self) -> &[MetricRule] {
        &self.rules
    }

    /// `(label, formatted value)` for every registered metric that is
    /// present and non-null, in registry order
    pub fn lines(&self, performance: &OrderedMap<Option<f64>>) -> Vec<(String, String)> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let value = (*performance.get(&rule.key)?)?;
                Some((rule.label.clone(), rule.scale.format(value)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn performance(entries: &[(&str, Option<f64>)]) -> OrderedMap<Option<f64>> {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    #[test]
    fn test_scaling() {
        assert_eq!(MetricScale::Percent.format(0.25), "25.00%");
        assert_eq!(MetricScale::Percent.format(-0.0525), "-5.25%");
        assert_eq!(MetricScale::Ratio.format(1.5), "1.50");
    }

    #[test]
    fn test_lines_follow_registry_order_and_skip_nulls() {
        let registry = MetricRegistry::default();
        let lines = registry.lines(&performance(&[
            ("Annual volatility", Some(0.125)),
            ("Sharpe Ratio", Some(0.75)),
            ("Sortino Ratio", None),
            ("Expected annual return", Some(0.5)),
        ]));

        assert_eq!(
            lines,
            [
                ("Expected Annual Return".to_string(), "50.00%".to_string()),
                ("Sharpe Ratio".to_string(), "0.75".to_string()),
                ("Annual Volatility".to_string(), "12.50%".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_metrics_ignored() {
        let registry = MetricRegistry::default();
        assert!(registry.lines(&performance(&[("Omega Ratio", Some(1.25))])).is_empty());
    }

    #[test]
    fn test_registry_is_extensible() {
        let mut registry = MetricRegistry::default();
        registry.register("Omega Ratio", "Omega Ratio", MetricScale::Ratio);
        registry.register("Sharpe Ratio", "Sharpe", MetricScale::Ratio);

        assert_eq!(registry.rules().len(), 7);
        let lines = registry.lines(&performance(&[
            ("Omega Ratio", Some(1.25)),
            ("Sharpe Ratio", Some(2.0)),
        ]));
        assert_eq!(
            lines,
            [
                ("Sharpe".to_string(), "2.00".to_string()),
                ("Omega Ratio".to_string(), "1.25".to_string()),
            ]
        );
    }
}
