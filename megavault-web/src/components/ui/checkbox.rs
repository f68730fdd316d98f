use super::foundation as f;
use crate::components::icons::{Icon, IconKind};
use megavault_core::styles::{checkbox_classes, checkbox_label_classes};

#[derive(f::Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    pub name: f::AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: f::CheckboxVariant,
    #[prop_or_default]
    pub size: f::CheckboxSize,
    #[prop_or_default]
    pub radius: f::Radius,
    #[prop_or_default]
    pub label_color: f::LabelColor,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub label_class: f::Classes,
    #[prop_or_default]
    pub container_class: f::Classes,
    /// Receives the toggled state.
    #[prop_or_default]
    pub on_field: f::Callback<f::FieldChange>,
    /// Rich label content, rendered after `label`.
    #[prop_or_default]
    pub children: f::Children,
}

/// Checkbox drawn as a `role="checkbox"` button so the checked state can be
/// styled through `data-state`.
#[f::function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> f::Html {
    let onclick = {
        let on_field = props.on_field.clone();
        let name = props.name.to_string();
        let next = !props.checked;
        f::Callback::from(move |_: f::MouseEvent| {
            on_field.emit((name.clone(), f::FieldValue::Flag(next)));
        })
    };
    let id = format!("checkbox-{}", props.name);
    let state = if props.checked { "checked" } else { "unchecked" };
    let mut container = f::Classes::from("flex flex-row-reverse gap-2");
    container.push(props.container_class.clone());
    let class = f::classes(checkbox_classes(
        props.variant,
        props.size,
        props.radius,
        &f::extra(&props.class),
    ));
    let label_class = f::classes(checkbox_label_classes(
        props.size,
        props.label_color,
        &f::extra(&props.label_class),
    ));
    f::html! {
        <div class={container}>
            if props.label.is_some() || !props.children.is_empty() {
                <label for={id.clone()} class={label_class}>
                    { props.label.clone().unwrap_or_default() }
                    { for props.children.iter() }
                </label>
            }
            <button
                id={id.clone()}
                type="button"
                role="checkbox"
                name={props.name.clone()}
                aria-checked={props.checked.to_string()}
                data-state={state}
                disabled={props.disabled}
                class={class}
                onclick={onclick}
            >
                if props.checked {
                    <span class="flex items-center justify-center text-current">
                        <Icon kind={IconKind::Check} />
                    </span>
                }
            </button>
        </div>
    }
}
