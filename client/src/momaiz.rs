use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlImageElement};

use danial_core::momaiz::{MomaizItem, momaiz_items};
use danial_core::{PageConfig, drive};

use crate::poll;
use crate::sheet::{self, SheetView};

pub(crate) const CONTAINER_SELECTOR: &str = ".content";
const SHEET: &str = "momaiz";
const FAILURE_MESSAGE: &str = "Failed to load items.";
const FALLBACK_ALT: &str = "momaiz image";

/// Keeps the momaiz member grid in sync with the momaiz sheet tab.
pub fn start(document: &Document, container: Option<Element>, config: &PageConfig) {
    let Some(container) = container else {
        return;
    };
    let view = MomaizView::new(document.clone(), container, config.default_image.clone());
    let url = config.csv_url(SHEET);
    poll::run_every(config.momaiz_refresh_ms, move || {
        let view = view.clone();
        let url = url.clone();
        spawn_local(async move {
            sheet::run_cycle(SHEET, &url, &view, momaiz_items, FAILURE_MESSAGE).await;
        });
    });
}

#[derive(Clone)]
struct MomaizView {
    document: Document,
    container: Element,
    default_image: String,
    // One handler shared by every grid image; swaps broken images to the
    // default. Must outlive all imgs that reference it, hence Rc.
    image_fallback: Rc<wasm_bindgen::closure::Closure<dyn Fn(web_sys::Event)>>,
}

impl MomaizView {
    fn new(document: Document, container: Element, default_image: String) -> Self {
        let fallback_src = default_image.clone();
        let image_fallback = wasm_bindgen::closure::Closure::<dyn Fn(web_sys::Event)>::new(
            move |event: web_sys::Event| {
                let Some(target) = event.target() else {
                    return;
                };
                let Ok(img) = target.dyn_into::<HtmlImageElement>() else {
                    return;
                };
                img.set_src(&fallback_src);
            },
        );
        Self {
            document,
            container,
            default_image,
            image_fallback: Rc::new(image_fallback),
        }
    }

    fn grid_cell(&self, item: &MomaizItem) -> Option<Element> {
        let cell = self.document.create_element("div").ok()?;
        cell.set_class_name("momaiz-item");

        let img = self
            .document
            .create_element("img")
            .ok()?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        img.set_class_name("momaiz-img");
        let fallback: &js_sys::Function = self.image_fallback.as_ref().as_ref().unchecked_ref();
        img.set_onerror(Some(fallback));
        img.set_src(&drive::resolve_image_link(&item.image, &self.default_image));
        if item.name.is_empty() {
            img.set_alt(FALLBACK_ALT);
        } else {
            img.set_alt(&item.name);
        }
        cell.append_child(&img).ok()?;

        let caption = self.document.create_element("div").ok()?;
        caption.set_class_name("momaiz-caption");
        caption.set_text_content(Some(&item.name));
        cell.append_child(&caption).ok()?;

        Some(cell)
    }
}

impl SheetView for MomaizView {
    type Model = Vec<MomaizItem>;

    fn render(&self, items: &Self::Model) {
        self.container.set_inner_html("");
        if items.is_empty() {
            return;
        }
        let Ok(grid) = self.document.create_element("div") else {
            return;
        };
        grid.set_class_name("momaiz-grid");
        for item in items {
            if let Some(cell) = self.grid_cell(item) {
                let _ = grid.append_child(&cell);
            }
        }
        let _ = self.container.append_child(&grid);
    }

    fn render_error(&self, message: &str) {
        self.container.set_text_content(Some(message));
    }
}
