use megavault_core::page_size_for_width;
use megavault_web::dom;
use megavault_web::pages::HomePage;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::prelude::*;

#[function_component(Host)]
fn host() -> Html {
    let history = use_memo((), |()| AnyHistory::from(MemoryHistory::new()));
    html! {
        <Router history={(*history).clone()}>
            <HomePage />
        </Router>
    }
}

#[wasm_bindgen_test]
fn first_page_is_filled_for_the_viewport() {
    yew::Renderer::<Host>::with_root(super::app_root()).render();
    let doc = dom::document().expect("document");
    let width = dom::inner_width().expect("inner width");
    let cards = doc
        .query_selector_all(".blog-card")
        .expect("query cards")
        .length();
    assert_eq!(cards as usize, page_size_for_width(width));
    let buttons = doc
        .query_selector_all(".blog-pagination button")
        .expect("query buttons")
        .length();
    assert!(buttons >= 1 && buttons <= 3);
}

#[wasm_bindgen_test]
fn header_starts_visible() {
    yew::Renderer::<Host>::with_root(super::app_root()).render();
    let doc = dom::document().expect("document");
    let header = doc
        .query_selector(".site-header")
        .expect("query header")
        .expect("header exists");
    assert_eq!(header.get_attribute("data-hidden").as_deref(), Some("false"));
}
