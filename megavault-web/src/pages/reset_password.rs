use super::{field_sink, submit_logger};
use crate::components::AuthCard;
use crate::components::icons::IconKind;
use crate::components::ui::{Button, Input};
use crate::hooks::{FormState, use_token_gate};
use megavault_core::{AppPath, ButtonVariant, InputVariant, ResetPasswordForm};
use yew::prelude::*;

/// New-password form; requires a `token` query parameter.
#[function_component(ResetPasswordPage)]
pub fn reset_password_page() -> Html {
    let _token = use_token_gate(AppPath::ResetPassword);
    let form = use_reducer_eq(FormState::<ResetPasswordForm>::default);
    let on_field = field_sink(&form);
    let onsubmit = submit_logger(&form);
    html! {
        <AuthCard>
            <form id="reset-password-form" onsubmit={onsubmit} class="max-w-[460px] w-full flex flex-col items-center">
                <h1 class="text-center text-lg font-bold mb-2">{ "Reset Password" }</h1>
                <p class="mb-12 text-center text-sm">{ "Enter your new password down below." }</p>
                <Input
                    name="password"
                    value={form.0.password.clone()}
                    input_type="password"
                    label="Password"
                    icon={IconKind::Lock}
                    placeholder="***********"
                    variant={InputVariant::ContainedPrimary}
                    container_class="mb-6 w-full"
                    required={true}
                    autofocus={true}
                    on_field={on_field.clone()}
                />
                <Input
                    name="confirmPassword"
                    value={form.0.confirm_password.clone()}
                    input_type="password"
                    label="Confirm Password"
                    icon={IconKind::Lock}
                    placeholder="***********"
                    variant={InputVariant::ContainedPrimary}
                    container_class="mb-12 w-full"
                    required={true}
                    on_field={on_field}
                />
                <Button
                    variant={ButtonVariant::ContainedAccent}
                    class="w-full max-w-36 self-center mb-12"
                    button_type="submit"
                >
                    { "Submit" }
                </Button>
            </form>
        </AuthCard>
    }
}
