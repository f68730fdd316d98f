use super::{field_sink, submit_logger};
use crate::components::AuthCard;
use crate::components::icons::IconKind;
use crate::components::ui::{Button, Input};
use crate::hooks::FormState;
use megavault_core::{ButtonVariant, ForgotPasswordForm, InputVariant};
use yew::prelude::*;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let form = use_reducer_eq(FormState::<ForgotPasswordForm>::default);
    let onsubmit = submit_logger(&form);
    html! {
        <AuthCard>
            <form id="forgot-password-form" onsubmit={onsubmit} class="max-w-[460px] w-full flex flex-col items-center">
                <h1 class="text-center text-lg font-bold mb-2">{ "Reset Password" }</h1>
                <p class="mb-12 text-center text-sm">
                    { "If you forget your password and you cannot login into your account, please provide your username or email. We will send you an email containing the instructions to reset your password." }
                </p>
                <Input
                    name="username"
                    value={form.0.username.clone()}
                    label="Enter your username (or email)"
                    icon={IconKind::User}
                    placeholder="JohnDoe (or JohnDoe@email.com)"
                    variant={InputVariant::ContainedPrimary}
                    container_class="mb-16 w-full"
                    required={true}
                    autofocus={true}
                    on_field={field_sink(&form)}
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
