use super::{field_sink, log_submission};
use crate::components::AuthCard;
use crate::components::icons::{Icon, IconKind};
use crate::components::ui::{Button, Checkbox, FieldChange, Input};
use crate::hooks::{FormState, Wizard};
use crate::router::Route;
use megavault_core::{
    ButtonSize, ButtonVariant, CheckboxSize, CheckboxVariant, InputVariant, Radius, RegisterForm,
    RegisterStep, WizardAction,
};
use yew::prelude::*;

/// Three-step registration form.
///
/// Submitting an intermediate step validates that step and advances; the
/// final step logs the whole record.
#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let wizard = use_reducer_eq(Wizard::default);
    let form = use_reducer_eq(FormState::<RegisterForm>::default);
    let step = wizard.0;

    let onsubmit = {
        let wizard = wizard.dispatcher();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if step.is_last() {
                log_submission(&form.0);
                return;
            }
            match form.0.validate_step(step) {
                Ok(()) => wizard.dispatch(WizardAction::Next),
                Err(err) => log::warn!("register step {} incomplete: {err}", step.number()),
            }
        })
    };
    let on_back = {
        let wizard = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| wizard.dispatch(WizardAction::Back))
    };
    let on_field = field_sink(&form);

    let fields = match step {
        RegisterStep::Identity => identity_fields(&form.0, &on_field),
        RegisterStep::Contact => contact_fields(&form.0, &on_field),
        RegisterStep::Credentials => credential_fields(&form.0, &on_field),
    };
    let submit_label = if step.is_last() { "Submit" } else { "Next" };

    html! {
        <AuthCard>
            <form
                id="register-form"
                data-step={step.number().to_string()}
                onsubmit={onsubmit}
                class="relative max-w-[460px] w-full flex flex-col items-center"
            >
                if !step.is_first() {
                    <Button
                        size={ButtonSize::Icon}
                        variant={ButtonVariant::LinkAccent}
                        class="self-start"
                        aria_label="Previous page"
                        onclick={on_back}
                    >
                        <Icon kind={IconKind::ArrowBack} />
                    </Button>
                }
                <h1 class="text-center text-lg font-bold mb-2">{ "Register" }</h1>
                <p class="text-center text-xs font-normal mb-12">{ step.caption() }</p>
                { fields }
                <Button
                    variant={ButtonVariant::ContainedAccent}
                    class="w-full max-w-36 self-center mb-12"
                    button_type="submit"
                >
                    { submit_label }
                </Button>
                if step.is_first() {
                    <span class="flex flex-col items-center text-center">
                        { "Already have an account? " }
                        <Button variant={ButtonVariant::LinkPrimary} to={Route::Login}>
                            { "Login NOW!" }
                        </Button>
                    </span>
                }
            </form>
        </AuthCard>
    }
}

fn identity_fields(form: &RegisterForm, on_field: &Callback<FieldChange>) -> Html {
    html! {
        <>
            <Input
                name="firstname"
                value={form.firstname.clone()}
                label="First Name"
                placeholder="John"
                variant={InputVariant::ContainedPrimary}
                container_class="mb-6 w-full"
                required={true}
                on_field={on_field.clone()}
            />
            <Input
                name="lastname"
                value={form.lastname.clone()}
                label="Last Name"
                placeholder="Doe"
                variant={InputVariant::ContainedPrimary}
                container_class="mb-8 w-full"
                required={true}
                on_field={on_field.clone()}
            />
        </>
    }
}

fn contact_fields(form: &RegisterForm, on_field: &Callback<FieldChange>) -> Html {
    html! {
        <>
            <Input
                name="email"
                value={form.email.clone()}
                input_type="email"
                label="Email"
                icon={IconKind::Email}
                placeholder="JohnDoe@email.com"
                variant={InputVariant::ContainedPrimary}
                container_class="mb-6 w-full"
                required={true}
                on_field={on_field.clone()}
            />
            <Input
                name="username"
                value={form.username.clone()}
                label="Username"
                icon={IconKind::User}
                placeholder="JohnDoe"
                variant={InputVariant::ContainedPrimary}
                container_class="mb-8 w-full"
                required={true}
                on_field={on_field.clone()}
            />
        </>
    }
}

fn credential_fields(form: &RegisterForm, on_field: &Callback<FieldChange>) -> Html {
    html! {
        <>
            <Input
                name="password"
                value={form.password.clone()}
                input_type="password"
                label="Password"
                icon={IconKind::Lock}
                placeholder="***********"
                variant={InputVariant::ContainedPrimary}
                container_class="mb-6 w-full"
                required={true}
                on_field={on_field.clone()}
            />
            <Input
                name="confirmPassword"
                value={form.confirm_password.clone()}
                input_type="password"
                label="Confirm Password"
                icon={IconKind::Lock}
                placeholder="***********"
                variant={InputVariant::ContainedPrimary}
                container_class="mb-3 w-full"
                required={true}
                on_field={on_field.clone()}
            />
            <Checkbox
                name="serviceCheck"
                checked={form.service_check}
                radius={Radius::Full}
                variant={CheckboxVariant::Accent}
                size={CheckboxSize::Sm}
                container_class="mb-12"
                on_field={on_field.clone()}
            >
                { "I agree to the " }
                <a href="/privacy-policy" target="_blank" class="text-accent p-0">{ "privacy & policy" }</a>
                { " and " }
                <a href="/terms-of-service" target="_blank" class="text-accent p-0">{ "terms of service" }</a>
                { " of " }
                <span class="text-primary">{ "MegaVault" }</span>
            </Checkbox>
        </>
    }
}
