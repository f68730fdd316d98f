use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AtProps {
    pub path: AttrValue,
    #[prop_or_default]
    pub query: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Router on a memory history positioned at `path`.
#[function_component(At)]
pub fn at(props: &AtProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    match props.query.as_deref() {
        Some(token) => history
            .push_with_query(props.path.to_string(), [("token", token)])
            .expect("encode query"),
        None => history.push(props.path.to_string()),
    }
    html! {
        <Router history={history}>
            { for props.children.iter() }
        </Router>
    }
}
