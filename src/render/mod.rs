//! Result rendering
//!
//! Turns an `OptimizationResult` into the allocation card and, when weights
//! are present, a donut chart spec. Rendering is a pure function of its
//! input: the same result always yields the same card HTML.
//!
//! # Architecture
//! - `metrics.rs`: metric names, labels and scaling rules
//! - `chart.rs`: chart series/labels and ApexCharts options

mod chart;
mod metrics;

pub use chart::{ChartSpec, new_instance_id};
pub use metrics::{MetricRegistry, MetricRule, MetricScale};

use crate::config::Config;
use crate::error::FrontendError;
use crate::response::{OptimizationResult, OrderedMap};

/// Output of rendering one result
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedResult {
    pub card_html: String,
    pub chart: Option<ChartSpec>,
}

/// What the display region should show next
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    Result(RenderedResult),
    /// Alert fragment that replaces the card
    Error(String),
}

/// Renders results and errors into HTML fragments
#[derive(Debug, Clone)]
pub struct Renderer {
    metrics: MetricRegistry,
    currency_symbol: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(MetricRegistry::default(), "$")
    }
}

impl Renderer {
    pub fn new(metrics: MetricRegistry, currency_symbol: impl Into<String>) -> Self {
        Self {
            metrics,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(MetricRegistry::default(), config.currency_symbol.clone())
    }

    pub fn metrics_mut(&mut self) -> &mut MetricRegistry {
        &mut self.metrics
    }

    /// Render a successful result
    pub fn render(&self, result: &OptimizationResult) -> RenderedResult {
        let allocation_list: String = result
            .allocations
            .iter()
            .map(|(ticker, allocation)| {
                format!(
                    r#"<li class="list-group-item">{}</li>"#,
                    escape_html(&allocation.describe(ticker))
                )
            })
            .collect();

        let leftover = result
            .leftover
            .map(|amount| {
                // sub-cent negatives would print as "-0.00"
                let amount = if amount.abs() < 0.005 { 0.0 } else { amount };
                format!(
                    r#"<p class="card-text">Leftover: {}{amount:.2}</p>"#,
                    escape_html(&self.currency_symbol)
                )
            })
            .unwrap_or_default();

        let performance = result
            .performance
            .as_ref()
            .map(|p| self.performance_panel(p))
            .unwrap_or_default();

        let errors = result
            .errors
            .as_ref()
            .map(error_panel)
            .unwrap_or_default();

        let card_html = format!(
            r#"<div class="card">
    <div class="card-header">Allocations</div>
    <div class="card-body">
        <h5 class="card-title">Allocations Details</h5>
        <ul class="list-group">{allocation_list}</ul>
        {leftover}{performance}{errors}
    </div>
</div>"#
        );

        RenderedResult {
            card_html,
            chart: result
                .weights
                .as_ref()
                .map(ChartSpec::from_weights)
                .filter(|spec| !spec.is_empty()),
        }
    }

    /// Render the alert shown in place of the card
    pub fn render_error(&self, err: &FrontendError) -> String {
        format!(
            r#"<div class="alert alert-danger" role="alert">{}</div>"#,
            escape_html(&err.user_message())
        )
    }

    fn performance_panel(&self, performance: &OrderedMap<Option<f64>>) -> String {
        let lines = self.metrics.lines(performance);
        if lines.is_empty() {
            return String::new();
        }
        let body: String = lines
            .iter()
            .map(|(label, value)| {
                format!(
                    r#"<p class="card-text">{}: {}</p>"#,
                    escape_html(label),
                    escape_html(value)
                )
            })
            .collect();
        format!(r#"<div class="performance-panel">{body}</div>"#)
    }
}

fn error_panel(errors: &OrderedMap<String>) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let body: String = errors
        .iter()
        .map(|(ticker, message)| {
            format!(
                r#"<p class="card-text text-danger">{}: {}</p>"#,
                escape_html(ticker),
                escape_html(message)
            )
        })
        .collect();
    format!(r#"<div class="error-panel"><h6 class="card-subtitle">Errors</h6>{body}</div>"#)
}

/// Escape text for insertion into HTML element content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
