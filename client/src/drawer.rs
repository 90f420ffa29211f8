use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;

pub(crate) const TRIGGER_SELECTOR: &str = ".hamburger";
pub(crate) const PANEL_SELECTOR: &str = ".drawer";
const OPEN_CLASS: &str = "open";
const AUTO_CLOSE_MS: u32 = 3_000;

/// Open/closed bookkeeping, kept apart from the DOM so the transition rules
/// are testable. The runtime cancels any pending timer before every toggle;
/// at most one close timer is ever pending.
#[derive(Debug, Default)]
pub struct DrawerLogic {
    open: bool,
}

impl DrawerLogic {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer. Returns true when the new state is open, the only
    /// case that arms a fresh auto-close timer.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn auto_close(&mut self) {
        self.open = false;
    }
}

struct DrawerRuntime {
    panel: Element,
    logic: DrawerLogic,
    pending_close: Option<Timeout>,
}

struct DrawerBinding {
    trigger: Element,
    _on_click: wasm_bindgen::closure::Closure<dyn Fn()>,
}

thread_local! {
    static DRAWER_BINDING: RefCell<Option<DrawerBinding>> = const { RefCell::new(None) };
}

/// Click-to-toggle drawer with a timed auto-close. Installs only when both
/// the trigger and the panel exist in the document.
pub fn install(trigger: Option<Element>, panel: Option<Element>) {
    let (Some(trigger), Some(panel)) = (trigger, panel) else {
        return;
    };

    DRAWER_BINDING.with(|slot| {
        if let Some(old) = slot.borrow_mut().take() {
            let _ = old
                .trigger
                .remove_event_listener_with_callback("click", old._on_click.as_ref().unchecked_ref());
        }
    });

    let runtime = Rc::new(RefCell::new(DrawerRuntime {
        panel,
        logic: DrawerLogic::default(),
        pending_close: None,
    }));

    let on_click = {
        let runtime = Rc::clone(&runtime);
        wasm_bindgen::closure::Closure::<dyn Fn()>::new(move || handle_click(&runtime))
    };
    let _ = trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());

    DRAWER_BINDING.with(|slot| {
        *slot.borrow_mut() = Some(DrawerBinding {
            trigger,
            _on_click: on_click,
        });
    });
}

fn handle_click(runtime: &Rc<RefCell<DrawerRuntime>>) {
    let mut state = runtime.borrow_mut();
    // Every click clears whatever timer is pending before toggling.
    if let Some(pending) = state.pending_close.take() {
        pending.cancel();
    }
    let arm = state.logic.toggle();
    sync_panel_class(&state);
    if arm {
        let runtime = Rc::clone(runtime);
        state.pending_close = Some(Timeout::new(AUTO_CLOSE_MS, move || {
            let mut state = runtime.borrow_mut();
            state.pending_close = None;
            state.logic.auto_close();
            sync_panel_class(&state);
        }));
    }
}

fn sync_panel_class(state: &DrawerRuntime) {
    let classes = state.panel.class_list();
    if state.logic.is_open() {
        let _ = classes.add_1(OPEN_CLASS);
    } else {
        let _ = classes.remove_1(OPEN_CLASS);
    }
}

#[cfg(test)]
mod tests {
    use super::DrawerLogic;

    #[test]
    fn first_click_opens_and_arms_a_timer() {
        let mut logic = DrawerLogic::default();
        assert!(logic.toggle());
        assert!(logic.is_open());
    }

    #[test]
    fn second_click_closes_without_arming() {
        let mut logic = DrawerLogic::default();
        logic.toggle();
        assert!(!logic.toggle());
        assert!(!logic.is_open());
    }

    #[test]
    fn timer_expiry_closes_the_drawer() {
        let mut logic = DrawerLogic::default();
        logic.toggle();
        logic.auto_close();
        assert!(!logic.is_open());
    }

    #[test]
    fn reopening_after_auto_close_arms_again() {
        let mut logic = DrawerLogic::default();
        logic.toggle();
        logic.auto_close();
        assert!(logic.toggle());
        assert!(logic.is_open());
    }
}
