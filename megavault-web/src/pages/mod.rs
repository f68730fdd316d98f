//! One component per route.

pub mod account_verification_success;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod register_success;
pub mod reset_password;
pub mod reset_password_success;

pub use account_verification_success::AccountVerificationSuccessPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::{BlogSection, HomePage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use register_success::RegisterSuccessPage;
pub use reset_password::ResetPasswordPage;
pub use reset_password_success::ResetPasswordSuccessPage;

use crate::components::ui::FieldChange;
use crate::hooks::FormState;
use megavault_core::FormRecord;
use yew::prelude::*;

/// Feed control changes into the form reducer.
pub(crate) fn field_sink<F: FormRecord + 'static>(
    form: &UseReducerHandle<FormState<F>>,
) -> Callback<FieldChange> {
    let dispatcher = form.dispatcher();
    Callback::from(move |change: FieldChange| dispatcher.dispatch(change))
}

/// Log a submitted record with its secrets masked.
pub(crate) fn log_submission<F: FormRecord>(record: &F) {
    match record.validate() {
        Ok(()) => log::info!("submitted {}", record.summary()),
        Err(err) => log::warn!("{} not submitted: {err}", F::NAME),
    }
}

/// Submit handler that stops the page reload and logs the record.
pub(crate) fn submit_logger<F: FormRecord + 'static>(
    form: &UseReducerHandle<FormState<F>>,
) -> Callback<SubmitEvent> {
    let form = form.clone();
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        log_submission(&form.0);
    })
}
