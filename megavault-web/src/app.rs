use crate::pages::{
    AccountVerificationSuccessPage, ForgotPasswordPage, HomePage, LoginPage, NotFoundPage,
    RegisterPage, RegisterSuccessPage, ResetPasswordPage, ResetPasswordSuccessPage,
};
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppRoutes />
        </BrowserRouter>
    }
}

/// Route switch; needs a router above it.
#[function_component(AppRoutes)]
pub fn app_routes() -> Html {
    html! { <Switch<Route> render={switch} /> }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    log::debug!("rendering {}", route.app_path().path());
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Register => html! { <RegisterPage /> },
        Route::RegisterSuccess => html! { <RegisterSuccessPage /> },
        Route::AccountVerificationSuccess => html! { <AccountVerificationSuccessPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::ResetPasswordSuccess => html! { <ResetPasswordSuccessPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
