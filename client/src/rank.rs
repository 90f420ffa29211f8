use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use danial_core::PageConfig;
use danial_core::rank::{RankModel, rank_model};

use crate::poll;
use crate::sheet::{self, SheetView};

pub(crate) const CONTAINER_SELECTOR: &str = ".rank-table";
const SHEET: &str = "rank";
const FAILURE_MESSAGE: &str = "Failed to load data. Check console for details.";
const NO_DATA_ROW: &str = "<tr><td>No data</td></tr>";

/// Keeps the rank table in sync with the rank sheet tab. The container is
/// the `<table>` itself; its `<thead>` and `<tbody>` are resolved once and
/// either may be absent, in which case that section is skipped.
pub fn start(document: &Document, container: Option<Element>, config: &PageConfig) {
    let Some(container) = container else {
        return;
    };
    let view = RankView {
        document: document.clone(),
        head: container.query_selector("thead").ok().flatten(),
        body: container.query_selector("tbody").ok().flatten(),
    };
    let url = config.csv_url(SHEET);
    poll::run_every(config.rank_refresh_ms, move || {
        let view = view.clone();
        let url = url.clone();
        spawn_local(async move {
            sheet::run_cycle(SHEET, &url, &view, rank_model, FAILURE_MESSAGE).await;
        });
    });
}

#[derive(Clone)]
struct RankView {
    document: Document,
    head: Option<Element>,
    body: Option<Element>,
}

impl RankView {
    fn clear(&self) {
        if let Some(head) = &self.head {
            head.set_inner_html("");
        }
        if let Some(body) = &self.body {
            body.set_inner_html("");
        }
    }

    fn append_row(&self, section: &Element, cell_tag: &str, fields: &[String]) {
        let Ok(row) = self.document.create_element("tr") else {
            return;
        };
        for field in fields {
            let Ok(cell) = self.document.create_element(cell_tag) else {
                continue;
            };
            cell.set_text_content(Some(field));
            let _ = row.append_child(&cell);
        }
        let _ = section.append_child(&row);
    }
}

impl SheetView for RankView {
    type Model = RankModel;

    fn render(&self, model: &Self::Model) {
        self.clear();
        match model {
            RankModel::Empty => {
                if let Some(body) = &self.body {
                    body.set_inner_html(NO_DATA_ROW);
                }
            }
            RankModel::Table { header, body } => {
                if let Some(head) = &self.head {
                    self.append_row(head, "th", header);
                }
                if let Some(section) = &self.body {
                    for row in body {
                        self.append_row(section, "td", row);
                    }
                }
            }
        }
    }

    fn render_error(&self, message: &str) {
        self.clear();
        if let Some(body) = &self.body {
            body.set_inner_html(&format!("<tr><td>{message}</td></tr>"));
        }
    }
}
