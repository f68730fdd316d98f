use super::foundation as f;
use crate::components::icons::{Icon, IconKind};
use f::TargetCast;
use megavault_core::styles::{input_classes, input_label_classes};

#[derive(f::Properties, PartialEq, Clone)]
pub struct InputProps {
    /// Field name, reported back with every change.
    pub name: f::AttrValue,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub icon: Option<IconKind>,
    #[prop_or_default]
    pub input_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: f::InputVariant,
    #[prop_or_default]
    pub font_size: f::FontSize,
    #[prop_or_default]
    pub radius: f::Radius,
    #[prop_or_default]
    pub label_color: f::LabelColor,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub label_class: f::Classes,
    #[prop_or_default]
    pub container_class: f::Classes,
    #[prop_or_default]
    pub on_field: f::Callback<f::FieldChange>,
}

#[f::function_component(Input)]
pub fn input(props: &InputProps) -> f::Html {
    let oninput = {
        let on_field = props.on_field.clone();
        let name = props.name.to_string();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                on_field.emit((name.clone(), f::FieldValue::Text(input.value())));
            }
        })
    };
    let id = format!("input-{}", props.name);
    let mut container = f::Classes::from("flex flex-col");
    container.push(props.container_class.clone());
    let label_class = f::classes(input_label_classes(
        props.font_size,
        props.label_color,
        &f::extra(&props.label_class),
    ));
    let class = f::classes(input_classes(
        props.variant,
        props.font_size,
        props.radius,
        &f::extra(&props.class),
    ));
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    f::html! {
        <div class={container}>
            <label for={id.clone()} class={label_class}>
                { props.icon.map(|kind| f::html! { <Icon kind={kind} /> }).unwrap_or_default() }
                <span>{ props.label.clone().unwrap_or_default() }</span>
            </label>
            <input
                id={id}
                class={class}
                type={input_type}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={f::attr_value(&props.placeholder)}
                required={props.required}
                autofocus={props.autofocus}
                disabled={props.disabled}
                oninput={oninput}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(name: &str) -> InputProps {
        InputProps {
            name: name.to_string().into(),
            value: f::AttrValue::default(),
            label: Some("Email".into()),
            icon: Some(IconKind::Email),
            input_type: Some("email".into()),
            placeholder: Some("example@example.com".into()),
            variant: f::InputVariant::OutlinedMuted,
            font_size: f::FontSize::default(),
            radius: f::Radius::default(),
            label_color: f::LabelColor::default(),
            required: true,
            autofocus: false,
            disabled: false,
            class: f::Classes::new(),
            label_class: f::Classes::new(),
            container_class: f::Classes::from("mt-6"),
            on_field: f::Callback::noop(),
        }
    }

    #[test]
    fn label_points_at_named_input() {
        let html = block_on(LocalServerRenderer::<Input>::with_props(props("email")).render());
        assert!(html.contains("for=\"input-email\""));
        assert!(html.contains("id=\"input-email\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("data-icon=\"email\""));
        assert!(html.contains("border-white/70"));
        assert!(html.contains("mt-6"));
    }

    #[test]
    fn current_value_is_rendered_into_the_field() {
        let mut p = props("password");
        p.value = "hunter2".into();
        p.input_type = Some("password".into());
        let html = block_on(LocalServerRenderer::<Input>::with_props(p).render());
        assert!(html.contains("value=\"hunter2\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("id=\"input-password\""));
    }
}
