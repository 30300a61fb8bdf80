//! cosmos-folio — a personal academic site rendered as a client-side app
//!
//! A constellation background drawn frame by frame, a scrolling page with
//! fade-in sections, scroll-tracked nav highlighting, and a filterable
//! publication list. Runs natively (preview window) and on WASM attached to
//! a browser canvas.

pub mod app;
pub mod constellation;
pub mod core;
pub mod theme;
pub mod time;

pub use app::FolioApp;
pub use self::core::content::SiteContent;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

/// Canvas element the site attaches to in the browser.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
const CANVAS_ID: &str = "cosmos-bg";

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Route tracing to the browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        // Optional inline content override set by the host page
        let content_json = js_sys::eval("window.__folio_content")
            .ok()
            .and_then(|v| v.as_string());
        let content = SiteContent::from_override(content_json.as_deref());

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(FolioApp::new(cc, content)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
