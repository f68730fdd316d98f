use megavault_web::app::AppRoutes;
use megavault_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct HostProps {
    path: AttrValue,
}

#[function_component(Host)]
fn host(props: &HostProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(path.to_string());
        history
    });
    html! {
        <Router history={(*history).clone()}>
            <AppRoutes />
        </Router>
    }
}

fn mount(path: &'static str) {
    yew::Renderer::<Host>::with_root_and_props(super::app_root(), HostProps { path: path.into() })
        .render();
}

fn type_into(name: &str, value: &str) {
    let doc = dom::document().expect("document");
    let input: HtmlInputElement = doc
        .query_selector(&format!("input[name='{name}']"))
        .expect("query input")
        .expect("input exists")
        .dyn_into()
        .expect("input element");
    input.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("input event");
    input.dispatch_event(&event).expect("dispatch input");
}

fn click_submit() {
    let doc = dom::document().expect("document");
    let button: HtmlElement = doc
        .query_selector("button[type='submit']")
        .expect("query submit")
        .expect("submit exists")
        .dyn_into()
        .expect("html element");
    button.click();
}

fn current_step() -> String {
    dom::document()
        .and_then(|doc| doc.get_element_by_id("register-form"))
        .and_then(|form| form.get_attribute("data-step"))
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn login_route_mounts_the_login_form() {
    mount("/login");
    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id("login-form").is_some());
    assert!(doc.get_element_by_id("input-usernameOrEmail").is_some());
}

#[wasm_bindgen_test]
fn register_wizard_advances_after_filled_step() {
    mount("/register");
    assert_eq!(current_step(), "1");
    click_submit();
    assert_eq!(current_step(), "1", "empty step must not advance");

    type_into("firstname", "John");
    type_into("lastname", "Doe");
    click_submit();
    assert_eq!(current_step(), "2");

    let doc = dom::document().expect("document");
    let back: HtmlElement = doc
        .query_selector("button[aria-label='Previous page']")
        .expect("query back")
        .expect("back exists")
        .dyn_into()
        .expect("html element");
    back.click();
    assert_eq!(current_step(), "1");
    let first: HtmlInputElement = doc
        .query_selector("input[name='firstname']")
        .expect("query")
        .expect("exists")
        .dyn_into()
        .expect("input");
    assert_eq!(first.value(), "John");
}
