#![cfg(target_arch = "wasm32")]

mod app_tests;
mod home_tests;

use megavault_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

/// Empty `#app` element to mount into.
pub fn app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}
