use super::foundation as f;
use crate::router::Route;
use megavault_core::styles::button_classes;
use yew_router::prelude::Link;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: f::ButtonVariant,
    #[prop_or_default]
    pub size: f::ButtonSize,
    #[prop_or_default]
    pub radius: f::Radius,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    /// `type` attribute of a plain button; defaults to `button`.
    #[prop_or_default]
    pub button_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
    /// Render as a router link.
    #[prop_or_default]
    pub to: Option<Route>,
    /// Render as a link; internal paths become router links.
    #[prop_or_default]
    pub href: Option<f::AttrValue>,
    #[prop_or_default]
    pub target: Option<f::AttrValue>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let class = f::classes(button_classes(
        props.variant,
        props.size,
        props.radius,
        &f::extra(&props.class),
    ));
    let route = props
        .to
        .or_else(|| props.href.as_deref().and_then(Route::for_href));

    if let Some(route) = route {
        return f::html! {
            <Link<Route> to={route} classes={class}>
                { for props.children.iter() }
            </Link<Route>>
        };
    }

    if let Some(href) = props.href.clone() {
        let target = props.target.clone().unwrap_or_else(|| "_self".into());
        return f::html! {
            <a
                id={f::attr_value(&props.id)}
                class={class}
                href={href}
                target={target}
                aria-label={f::attr_value(&props.aria_label)}
            >
                { for props.children.iter() }
            </a>
        };
    }

    let button_type = props.button_type.clone().unwrap_or_else(|| "button".into());
    f::html! {
        <button
            id={f::attr_value(&props.id)}
            class={class}
            type={button_type}
            disabled={props.disabled}
            aria-label={f::attr_value(&props.aria_label)}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
