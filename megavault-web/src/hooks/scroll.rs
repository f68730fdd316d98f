#[cfg(target_arch = "wasm32")]
use super::reducers::ScrollEvent;
use super::reducers::ScrollState;
#[cfg(target_arch = "wasm32")]
use crate::dom;
use gloo::events::EventListener;
use megavault_core::ScrollTracker;
use yew::prelude::*;

/// Previous and current scroll offsets, updated on every `scroll` event.
#[hook]
pub fn use_scroll_tracker() -> ScrollTracker {
    let state = use_reducer_eq(ScrollState::default);
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |()| {
            let listener = watch_scroll(dispatcher);
            move || drop(listener)
        });
    }
    state.0
}

#[cfg(target_arch = "wasm32")]
fn watch_scroll(dispatcher: UseReducerDispatcher<ScrollState>) -> Option<EventListener> {
    dispatcher.dispatch(ScrollEvent::Mounted(dom::scroll_y().unwrap_or_default()));
    log::debug!("scroll listener attached");
    Some(EventListener::new(&dom::window(), "scroll", move |_| {
        if let Some(offset) = dom::scroll_y() {
            dispatcher.dispatch(ScrollEvent::Scrolled(offset));
        }
    }))
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_scroll(_dispatcher: UseReducerDispatcher<ScrollState>) -> Option<EventListener> {
    None
}
