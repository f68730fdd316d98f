pub use megavault_core::forms::FieldValue;
pub use megavault_core::styles::{
    ButtonSize, ButtonVariant, CheckboxSize, CheckboxVariant, FontSize, InputVariant, LabelColor,
    Radius,
};
pub use web_sys::{Event, HtmlInputElement, InputEvent, MouseEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

/// `(name, value)` reported by a named form control.
pub type FieldChange = (String, FieldValue);

/// Render caller classes as a plain string for [`megavault_core::compose`].
#[must_use]
pub fn extra(classes: &Classes) -> String {
    classes.to_string()
}

/// Turn a composed class string back into `Classes`.
#[must_use]
pub fn classes(composed: String) -> Classes {
    Classes::from(composed)
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}
