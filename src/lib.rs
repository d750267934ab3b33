//! Portfolio Frontend - browser front end for a portfolio optimization API
//!
//! Collects form input, sends it to the optimizer service, and renders the
//! returned allocations, performance metrics and weights.
//!
//! # Architecture
//! - `request`/`client`: typed request per optimization mode, one POST each
//! - `response`: decoding and classification of the optimizer's answer
//! - `render`: allocation card, metric registry, donut chart spec
//! - `display`: single-writer display region with request tokens
//! - `dispatcher`: runs one submission end to end
//! - `web` (wasm32 only): DOM surface, form wiring, entry point
//!
//! # Features
//! - Seven optimization modes with validated, typed inputs
//! - Stale responses discarded when a newer request was issued
//! - Previous chart destroyed before a new one is drawn
//! - Extensible performance metric formatting

// Clippy configuration for front end code patterns
#![allow(clippy::cast_precision_loss)] // Float casts OK for display
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::future_not_send)] // Browser futures are single-threaded

mod client;
mod config;
mod dispatcher;
mod display;
mod error;
mod logging;
mod page;
mod render;
mod request;
mod response;
mod types;
#[cfg(target_arch = "wasm32")]
mod web;

pub use client::{OptimizerApi, OptimizerClient};
pub use config::{Config, DEFAULT_API_ORIGIN};
pub use dispatcher::Dispatcher;
pub use display::{Applied, DisplayRegion, RequestToken, Surface};
pub use error::{FrontendError, Result};
pub use logging::init as init_logging;
pub use page::{CARD_ID, CHART_ID, ROOT_ID, page_html};
pub use render::{
    ChartSpec, DisplayUpdate, MetricRegistry, MetricRule, MetricScale, RenderedResult, Renderer,
    escape_html, new_instance_id,
};
pub use request::OptimizationRequest;
pub use response::{Allocation, OptimizationResponse, OptimizationResult, OrderedMap};
pub use types::{FieldKind, FormField, FormValues, OptimizationMode};
#[cfg(target_arch = "wasm32")]
pub use web::{DomSurface, start};
