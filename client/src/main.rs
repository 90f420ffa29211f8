mod app;
mod drawer;
mod momaiz;
mod poll;
mod rank;
mod reveal;
mod rules;
mod sheet;

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    app::init(&document);
}
