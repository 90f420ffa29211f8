use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use danial_core::PageConfig;
use danial_core::rules::rule_entries;

use crate::poll;
use crate::sheet::{self, SheetView};

pub(crate) const CONTAINER_SELECTOR: &str = ".rules-content";
const SHEET: &str = "rules";
const FAILURE_MESSAGE: &str = "Failed to load rules. Please try again later.";

/// Keeps the rules list in sync with the rules sheet tab.
pub fn start(document: &Document, container: Option<Element>, config: &PageConfig) {
    let Some(container) = container else {
        return;
    };
    let view = RulesView {
        document: document.clone(),
        container,
    };
    let url = config.csv_url(SHEET);
    poll::run_every(config.rules_refresh_ms, move || {
        let view = view.clone();
        let url = url.clone();
        spawn_local(async move {
            sheet::run_cycle(SHEET, &url, &view, rule_entries, FAILURE_MESSAGE).await;
        });
    });
}

#[derive(Clone)]
struct RulesView {
    document: Document,
    container: Element,
}

impl SheetView for RulesView {
    type Model = Vec<String>;

    fn render(&self, entries: &Self::Model) {
        self.container.set_inner_html("");
        for entry in entries {
            let Ok(item) = self.document.create_element("li") else {
                continue;
            };
            item.set_text_content(Some(entry));
            let _ = self.container.append_child(&item);
        }
    }

    fn render_error(&self, message: &str) {
        self.container.set_text_content(Some(message));
    }
}
