use danial_core::csv::{self, CsvTable};

/// Render half of one sheet pipeline. DOM implementations own their target
/// subtree and fully replace its contents on every call; tests substitute a
/// recording fake.
pub trait SheetView {
    type Model;

    fn render(&self, model: &Self::Model);
    fn render_error(&self, message: &str);
}

/// Fetch one sheet tab's CSV export as raw text.
pub async fn fetch_csv_text(url: &str) -> Result<String, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.text().await.map_err(|e| format!("read error: {e}"))
}

/// Apply one settled fetch to a view: parse and shape on success, the
/// pipeline's fixed message on failure. The error comes back to the caller,
/// which owns logging.
pub fn apply_fetch<V: SheetView>(
    view: &V,
    shape: fn(&CsvTable) -> V::Model,
    fetched: Result<String, String>,
    failure_message: &str,
) -> Result<(), String> {
    match fetched {
        Ok(text) => {
            let model = shape(&csv::parse(&text));
            view.render(&model);
            Ok(())
        }
        Err(err) => {
            view.render_error(failure_message);
            Err(err)
        }
    }
}

/// One full poll cycle for `sheet`: fetch, parse, shape, render. Failures
/// stay local to the cycle; the next tick polls again regardless.
pub async fn run_cycle<V: SheetView>(
    sheet: &str,
    url: &str,
    view: &V,
    shape: fn(&CsvTable) -> V::Model,
    failure_message: &str,
) {
    let fetched = fetch_csv_text(url).await;
    if let Err(err) = apply_fetch(view, shape, fetched, failure_message) {
        web_sys::console::error_1(&format!("{sheet} sheet: {err}").into());
    }
}
