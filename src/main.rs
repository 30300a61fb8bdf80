//! Native preview window for the site
//!
//! Run with: cargo run --bin folio --features native

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use cosmos_folio::{FolioApp, SiteContent};
    use tracing::warn;
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cosmos_folio=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    // FOLIO_CONTENT points at an alternative content file
    let override_json = std::env::var("FOLIO_CONTENT")
        .ok()
        .and_then(|path| match std::fs::read_to_string(&path) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(path = %path, error = %e, "content override unreadable, using embedded");
                None
            }
        });
    let content = SiteContent::from_override(override_json.as_deref());

    let title = if content.profile.name.is_empty() {
        "cosmos-folio".to_string()
    } else {
        content.profile.name.clone()
    };
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 840.0])
            .with_title(title),
        ..Default::default()
    };
    eframe::run_native(
        "cosmos-folio",
        options,
        Box::new(|cc| Ok(Box::new(FolioApp::new(cc, content)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
