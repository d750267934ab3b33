//! Request dispatcher
//!
//! Runs one form submission end to end:
//! - issue a request token (superseding earlier submissions)
//! - build the typed request, showing input errors without touching the network
//! - exchange it with the optimizer
//! - classify and render the answer
//! - hand the update to the display region, which drops it if it went stale

use std::cell::{Ref, RefCell};

use log::{error, info, warn};

use crate::client::OptimizerApi;
use crate::display::{Applied, DisplayRegion, Surface};
use crate::error::{FrontendError, Result};
use crate::render::{DisplayUpdate, Renderer};
use crate::request::OptimizationRequest;
use crate::response::OptimizationResponse;
use crate::types::{FormValues, OptimizationMode};

/// Ties an optimizer API, a renderer and the display region together
pub struct Dispatcher<A, S: Surface> {
    api: A,
    renderer: Renderer,
    display: RefCell<DisplayRegion<S>>,
}

impl<A: OptimizerApi, S: Surface> Dispatcher<A, S> {
    pub fn new(api: A, renderer: Renderer, surface: S) -> Self {
        Self {
            api,
            renderer,
            display: RefCell::new(DisplayRegion::new(surface)),
        }
    }

    /// Borrow the display region
    pub fn display(&self) -> Ref<'_, DisplayRegion<S>> {
        self.display.borrow()
    }

    /// Handle one submission of `mode`'s form.
    ///
    /// Only surface failures are returned as errors; every other failure is
    /// shown to the user.
    pub async fn dispatch(&self, mode: OptimizationMode, form: &FormValues) -> Result<Applied> {
        // Never hold the borrow across the await below.
        let token = self.display.borrow_mut().issue_token();

        let update = match OptimizationRequest::from_form(mode, form) {
            Ok(request) => {
                info!(
                    "Dispatching {mode} request #{} for {} tickers",
                    token.value(),
                    request.tickers().len()
                );
                let outcome = self
                    .api
                    .optimize(&request)
                    .await
                    .and_then(OptimizationResponse::into_result);

                match outcome {
                    Ok(result) => DisplayUpdate::Result(self.renderer.render(&result)),
                    Err(err) => {
                        if err.is_transport() {
                            error!("{mode} request #{} failed: {err}", token.value());
                        } else {
                            warn!("{mode} request #{} rejected: {err}", token.value());
                        }
                        DisplayUpdate::Error(self.renderer.render_error(&err))
                    }
                }
            }
            Err(err) => {
                warn!("{mode} form rejected: {err}");
                DisplayUpdate::Error(self.renderer.render_error(&err))
            }
        };

        self.display.borrow_mut().apply(token, update)
    }

    /// Show a failure that happened before a request could be built,
    /// superseding any submission still in flight
    pub fn show_error(&self, err: &FrontendError) -> Result<Applied> {
        let mut display = self.display.borrow_mut();
        let token = display.issue_token();
        display.apply(token, DisplayUpdate::Error(self.renderer.render_error(err)))
    }
}
