//! Display region
//!
//! The card element and chart container are one shared resource. Every
//! dispatch takes a `RequestToken` before it awaits anything; an update is
//! applied only while its token is still the latest one issued, so a slow
//! response can never overwrite the answer to a newer request.
//!
//! The region also owns the active chart and destroys it before a
//! replacement is created.

use log::{debug, info};

use crate::error::Result;
use crate::render::{ChartSpec, DisplayUpdate};

/// Where rendered output ends up. The browser implementation writes to the
/// DOM and drives ApexCharts.
pub trait Surface {
    /// Handle to a live chart instance
    type Chart;

    /// Replace the card element's content
    fn write_card(&mut self, html: &str) -> Result<()>;

    /// Create and render a chart in the chart container
    fn create_chart(&mut self, spec: &ChartSpec) -> Result<Self::Chart>;

    /// Tear down a chart created by `create_chart`
    fn destroy_chart(&mut self, chart: Self::Chart);
}

/// Sequence number of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What happened to an update handed to the region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Result card (and chart, if any) written
    Rendered,
    /// Error alert written in place of the card
    ShowedError,
    /// A newer request was issued; update discarded
    Stale,
}

/// Single-writer owner of the card element and chart container
pub struct DisplayRegion<S: Surface> {
    surface: S,
    latest: u64,
    chart: Option<S::Chart>,
}

impl<S: Surface> DisplayRegion<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            latest: 0,
            chart: None,
        }
    }

    /// Issue the token for a new dispatch, superseding all earlier ones
    pub fn issue_token(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    pub fn has_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Apply `update` if `token` is still current
    pub fn apply(&mut self, token: RequestToken, update: DisplayUpdate) -> Result<Applied> {
        if !self.is_current(token) {
            info!(
                "Discarding stale response for request #{} (latest is #{})",
                token.0, self.latest
            );
            return Ok(Applied::Stale);
        }

        match update {
            DisplayUpdate::Result(rendered) => {
                self.surface.write_card(&rendered.card_html)?;
                self.dispose_chart();
                if let Some(spec) = rendered.chart {
                    let chart = self.surface.create_chart(&spec)?;
                    debug!("Chart created for request #{} ({} slices)", token.0, spec.len());
                    self.chart = Some(chart);
                }
                Ok(Applied::Rendered)
            }
            DisplayUpdate::Error(html) => {
                self.surface.write_card(&html)?;
                self.dispose_chart();
                Ok(Applied::ShowedError)
            }
        }
    }

    fn dispose_chart(&mut self) {
        if let Some(chart) = self.chart.take() {
            self.surface.destroy_chart(chart);
            debug!("Previous chart destroyed");
        }
    }
}
