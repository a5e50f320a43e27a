//! Browser history adapter: feeds back/forward events into the
//! [`NavigationStore`] and pushes store navigations into the history API.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use crate::navigation::NavigationStore;

/// Reads the path currently shown in the address bar.
pub fn current_path() -> String {
    web_sys::window()
        .expect("window not found")
        .location()
        .pathname()
        .expect("pathname not found")
}

/// Subscribes the store to the browser's `popstate` events, so back and
/// forward navigation re-enters the store like any other navigation.
pub fn attach(store: Rc<NavigationStore>) {
    let window = web_sys::window().expect("window not found");

    let popstate_callback = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
        store.navigate(&current_path());
    }) as Box<dyn FnMut(_)>);

    let _ = window
        .add_event_listener_with_callback("popstate", popstate_callback.as_ref().unchecked_ref());

    popstate_callback.forget();
}

/// Pushes a new entry onto the browser history and records it in the
/// store.
pub fn push(store: &NavigationStore, path: &str) {
    let window = web_sys::window().expect("window not found");
    let history = window.history().expect("history not found");

    let _ = history.push_state_with_url(&js_sys::Object::new(), "", Some(path));

    store.navigate(path);
}
