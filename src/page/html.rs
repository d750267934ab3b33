//! Page HTML template
//!
//! Contains the page structure:
//! - Header
//! - One form per optimization mode, generated from the mode's fields
//! - Allocation card and chart container

use crate::types::{FieldKind, FormField, OptimizationMode};

use super::{CARD_ID, CHART_ID};

/// Markup for the whole page body
pub fn template() -> String {
    let forms: String = OptimizationMode::ALL.into_iter().map(form).collect();

    format!(
        r#"
    <div class="container">
        <header>
            <h1>📈 Portfolio Optimizer</h1>
            <p class="subtitle">Pick a strategy, enter tickers, and optimize.</p>
        </header>

        <div class="grid">
{forms}
            <!-- Results -->
            <div class="wide" id="{CARD_ID}"></div>
            <div class="card wide chart-container" id="{CHART_ID}"></div>
        </div>
    </div>
"#
    )
}

fn form(mode: OptimizationMode) -> String {
    let fields: String = mode
        .fields()
        .iter()
        .map(|field| input(mode, field))
        .collect();

    format!(
        r#"            <div class="card">
                <div class="card-header">{title}</div>
                <form class="optimizer-form" id="{form_id}">
{fields}                    <button type="submit" class="btn btn-primary">Optimize</button>
                </form>
            </div>
"#,
        title = mode.title(),
        form_id = mode.form_id(),
    )
}

fn input(mode: OptimizationMode, field: &FormField) -> String {
    let input_type = match field.kind {
        FieldKind::Tickers => r#"type="text""#,
        FieldKind::Integer => r#"type="number" step="1" min="1""#,
        FieldKind::Decimal => r#"type="number" step="any""#,
    };
    let id = format!("{}-{}", mode.form_id(), field.name);

    format!(
        r#"                    <div class="field">
                        <label for="{id}">{label}</label>
                        <input {input_type} id="{id}" name="{name}" placeholder="{placeholder}" required>
                    </div>
"#,
        label = field.label,
        name = field.name,
        placeholder = field.placeholder,
    )
}
