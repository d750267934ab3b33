//! Page module - optimizer web interface
//!
//! Builds the markup mounted into the host page's `#app` element.
//! Separated into HTML and CSS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: forms (generated from the optimization modes) and result regions
//! - `css.rs`: styling with CSS custom properties

mod css;
mod html;

/// Host element the page is mounted into
pub const ROOT_ID: &str = "app";

/// Element that receives the allocation card or error alert
pub const CARD_ID: &str = "allocationsCard";

/// Container the donut chart is rendered into
pub const CHART_ID: &str = "allocationChart";

/// Generate the markup mounted into `#app`
pub fn page_html() -> String {
    format!(
        r"<style>
{css}
</style>
{html}",
        css = css::STYLES,
        html = html::template()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_includes_styles_and_forms() {
        let page = page_html();
        assert!(page.starts_with("<style>"));
        assert!(page.contains(".list-group-item"));
        assert!(page.contains(r#"id="minVolatilityForm""#));
    }
}
