use blockpage_render::renderer::Options;
use blockpage_render::{PageView, page_to_html, render_page_json};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Render Config
// ============================================================================

/// Configuration accepted by the WASM render functions.
/// Every field is optional; missing fields keep the renderer defaults.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmRenderConfig {
    #[serde(default, alias = "childPageNotice")]
    pub child_page_notice: Option<String>,
    #[serde(default, alias = "enableLazyEmbeds")]
    pub enable_lazy_embeds: Option<bool>,
    #[serde(default, alias = "homePath")]
    pub home_path: Option<String>,
}

fn parse_config(config: JsValue) -> Result<WasmRenderConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmRenderConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn build_options(cfg: WasmRenderConfig) -> Result<Options, JsError> {
    let mut options = Options::default();
    if let Some(notice) = cfg.child_page_notice {
        options.child_page_notice = notice;
    }
    if let Some(lazy) = cfg.enable_lazy_embeds {
        options.enable_lazy_embeds = lazy;
    }
    if let Some(home_path) = cfg.home_path {
        options.home_path = home_path;
    }
    options.validate().map_err(|e| JsError::new(&e.to_string()))?;
    Ok(options)
}

fn options_from_js(config: JsValue) -> Result<Options, JsError> {
    build_options(parse_config(config)?)
}

// ============================================================================
// Render API
// ============================================================================

/// Renders a page response into structured render descriptors.
///
/// # Returns
///
/// A JavaScript object `{ title, blocks }` where each block carries a `type`
/// tag (`paragraph`, `heading`, `bulletedList`, ...) and its fields.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { render_page } from './blockpage_wasm';
///
/// const page = render_page(await response.text(), { homePath: '/' });
/// // page = { title: "Proyectos", blocks: [{ type: "paragraph", id: "...", children: [...] }] }
/// ```
#[wasm_bindgen(js_name = render_page)]
pub fn render_page(input: &str, config: JsValue) -> Result<JsValue, JsError> {
    let options = options_from_js(config)?;
    let page = render_page_json(input, &options).map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&page)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders a page response straight to HTML.
#[wasm_bindgen(js_name = render_page_html)]
pub fn render_page_html(input: &str, config: JsValue) -> Result<String, JsError> {
    let options = options_from_js(config)?;
    let page = render_page_json(input, &options).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(page_to_html(&page))
}

/// Renders the view for a completed page data request.
///
/// Never fails on bad page data: 404 yields the not-found view, other
/// failures the error view.
#[wasm_bindgen(js_name = render_response_html)]
pub fn render_response_html(
    page_id: &str,
    status: u16,
    body: &str,
    config: JsValue,
) -> Result<String, JsError> {
    let options = options_from_js(config)?;
    Ok(PageView::from_response(page_id, status, body, &options).to_html())
}

// ============================================================================
// Routing API
// ============================================================================

/// Extracts the page id from a `/id/<pageId>` route.
#[wasm_bindgen(js_name = page_id_from_path)]
pub fn page_id_from_path(path: &str) -> Option<String> {
    blockpage_core::page_id_from_path(path).map(str::to_string)
}

/// Path of the JSON document holding a page's data.
#[wasm_bindgen(js_name = page_data_path)]
pub fn page_data_path(page_id: &str) -> String {
    blockpage_core::page_data_path(page_id)
}
