use super::{field_sink, submit_logger};
use crate::components::AuthCard;
use crate::components::icons::IconKind;
use crate::components::ui::{Button, Input};
use crate::hooks::FormState;
use crate::router::Route;
use megavault_core::{ButtonSize, ButtonVariant, InputVariant, LoginForm};
use yew::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_reducer_eq(FormState::<LoginForm>::default);
    let on_field = field_sink(&form);
    let onsubmit = submit_logger(&form);
    html! {
        <AuthCard>
            <form id="login-form" onsubmit={onsubmit} class="max-w-[460px] w-full flex flex-col items-center">
                <h1 class="text-center text-lg font-bold mb-12">{ "Login" }</h1>
                <Input
                    name="usernameOrEmail"
                    value={form.0.username_or_email.clone()}
                    label="Username (or email)"
                    icon={IconKind::User}
                    placeholder="JohnDoe"
                    variant={InputVariant::ContainedPrimary}
                    container_class="mb-6 w-full"
                    required={true}
                    autofocus={true}
                    on_field={on_field.clone()}
                />
                <Input
                    name="password"
                    value={form.0.password.clone()}
                    input_type="password"
                    label="Password"
                    icon={IconKind::Lock}
                    placeholder="*********"
                    variant={InputVariant::ContainedPrimary}
                    container_class="mb-1 w-full"
                    required={true}
                    on_field={on_field}
                />
                <Button
                    variant={ButtonVariant::LinkAccent}
                    size={ButtonSize::Sm}
                    class="self-start mb-8"
                    to={Route::ForgotPassword}
                >
                    { "I've forgot my password" }
                </Button>
                <Button
                    variant={ButtonVariant::ContainedAccent}
                    class="w-full max-w-36 self-center mb-12"
                    button_type="submit"
                >
                    { "Submit" }
                </Button>
                <span class="flex flex-col items-center text-center">
                    { "Don't have an account? " }
                    <Button variant={ButtonVariant::LinkPrimary} to={Route::Register}>
                        { "Register NOW!" }
                    </Button>
                </span>
            </form>
        </AuthCard>
    }
}
