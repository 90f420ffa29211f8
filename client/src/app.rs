use danial_core::PageConfig;
use web_sys::{Document, Element};

use crate::{drawer, momaiz, rank, reveal, rules};

const CONFIG_ELEMENT_ID: &str = "page-config";

/// Composition root. Resolves the containers each behavior targets and
/// starts whichever ones have their markup present; a missing container
/// just leaves that behavior uninstalled.
pub fn init(document: &Document) {
    let config = load_config(document);

    drawer::install(
        query(document, drawer::TRIGGER_SELECTOR),
        query(document, drawer::PANEL_SELECTOR),
    );
    reveal::install(document);

    rules::start(document, query(document, rules::CONTAINER_SELECTOR), &config);
    momaiz::start(document, query(document, momaiz::CONTAINER_SELECTOR), &config);
    rank::start(document, query(document, rank::CONTAINER_SELECTOR), &config);
}

fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Settings come from the optional `#page-config` JSON element; anything
/// missing or unparsable falls back to the defaults.
fn load_config(document: &Document) -> PageConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let text = element.text_content().unwrap_or_default();
    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("ignoring invalid #{CONFIG_ELEMENT_ID} override: {err}").into(),
            );
            PageConfig::default()
        }
    }
}
