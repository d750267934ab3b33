//! Browser bindings
//!
//! Everything that touches the DOM lives here and only builds for wasm32:
//! - `DomSurface` writes the card and drives ApexCharts
//! - form submissions are turned into `FormValues` and dispatched
//! - `start` loads configuration from `window` globals and wires the page

use std::rc::Rc;

use js_sys::Reflect;
use log::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

use crate::client::OptimizerClient;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::display::Surface;
use crate::error::{FrontendError, Result};
use crate::logging;
use crate::page::{self, CARD_ID, CHART_ID, ROOT_ID};
use crate::render::{ChartSpec, Renderer, new_instance_id};
use crate::types::{FormValues, OptimizationMode};

#[wasm_bindgen]
extern "C" {
    /// Global `ApexCharts` constructor provided by the host page
    pub type ApexCharts;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &Element, options: &JsValue) -> std::result::Result<ApexCharts, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn render(this: &ApexCharts) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ApexCharts);
}

type AppDispatcher = Dispatcher<OptimizerClient, DomSurface>;

/// Card element and chart container in the live document
pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| FrontendError::Dom(format!("#{id} not found")))
    }
}

impl Surface for DomSurface {
    type Chart = ApexCharts;

    fn write_card(&mut self, html: &str) -> Result<()> {
        self.element(CARD_ID)?.set_inner_html(html);
        Ok(())
    }

    fn create_chart(&mut self, spec: &ChartSpec) -> Result<ApexCharts> {
        let container = self.element(CHART_ID)?;
        let options = spec.donut_options(&new_instance_id());
        let options = js_sys::JSON::parse(&options.to_string())?;
        let chart = ApexCharts::new(&container, &options)?;
        chart.render()?;
        Ok(chart)
    }

    fn destroy_chart(&mut self, chart: ApexCharts) {
        chart.destroy();
    }
}

fn read_global(key: &str) -> Option<String> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn read_form(form: &HtmlFormElement, mode: OptimizationMode) -> Result<FormValues> {
    let data = FormData::new_with_form(form)?;
    Ok(mode
        .fields()
        .iter()
        .filter_map(|field| data.get(field.name).as_string().map(|v| (field.name, v)))
        .collect())
}

/// Mount the page into `#app` unless the host already supplied markup
fn mount_page(document: &Document) {
    match document.get_element_by_id(ROOT_ID) {
        Some(root) if root.child_element_count() == 0 => root.set_inner_html(&page::page_html()),
        Some(_) => info!("#{ROOT_ID} already has content, using host markup"),
        None => warn!("#{ROOT_ID} not found, expecting host markup"),
    }
}

fn wire_form(document: &Document, mode: OptimizationMode, dispatcher: Rc<AppDispatcher>) -> Result<()> {
    let Some(element) = document.get_element_by_id(mode.form_id()) else {
        warn!("Form #{} not found, {mode} disabled", mode.form_id());
        return Ok(());
    };
    let form: HtmlFormElement = element
        .dyn_into()
        .map_err(|_| FrontendError::Dom(format!("#{} is not a form", mode.form_id())))?;

    let target = form.clone();
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let values = match read_form(&target, mode) {
            Ok(values) => values,
            Err(err) => {
                error!("Could not read {mode} form: {err}");
                if let Err(err) = dispatcher.show_error(&err) {
                    error!("{mode} display update failed: {err}");
                }
                return;
            }
        };
        let dispatcher = Rc::clone(&dispatcher);
        spawn_local(async move {
            if let Err(err) = dispatcher.dispatch(mode, &values).await {
                error!("{mode} display update failed: {err}");
            }
        });
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // handler lives as long as the page
    on_submit.forget();
    Ok(())
}

/// Entry point, run when the wasm module is instantiated
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = Config::from_lookup(read_global)?;
    config.validate()?;
    logging::init(config.log_filter())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FrontendError::Dom("no document".into()))?;
    mount_page(&document);

    let dispatcher = Rc::new(Dispatcher::new(
        OptimizerClient::from_config(&config),
        Renderer::from_config(&config),
        DomSurface::new(document.clone()),
    ));
    for mode in OptimizationMode::ALL {
        wire_form(&document, mode, Rc::clone(&dispatcher))?;
    }

    info!(
        "Portfolio optimizer ready ({}, API at {})",
        config.environment, config.api_origin
    );
    Ok(())
}
