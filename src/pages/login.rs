//! Login Page
//!
//! Credential form gating the dashboard. There is no account store:
//! any non-empty email/password pair is accepted.

use leptos::*;
use leptos_router::{use_navigate, Redirect};

use crate::state::global::GlobalState;

/// Validate the login form. The only rule is that both fields are
/// filled in; the values themselves are never checked.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.trim().is_empty() {
        return Err("Please fill in both fields");
    }
    Ok(())
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let authenticated = state.authenticated;

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let navigate = use_navigate();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match validate_credentials(&email.get(), &password.get()) {
            Ok(()) => {
                state_for_submit.authenticated.set(true);
                state_for_submit.show_success("Welcome to the dashboard!");
                navigate("/", Default::default());
            }
            Err(msg) => state_for_submit.show_error(msg),
        }
    };

    view! {
        // Already signed in: straight to the dashboard
        {move || authenticated.get().then(|| view! { <Redirect path="/" /> })}

        <div class="min-h-screen flex items-center justify-center bg-gray-900 p-4">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 shadow-lg border border-gray-700">
                <div class="text-center mb-8">
                    <div class="inline-flex items-center justify-center w-20 h-20 bg-primary-600 rounded-2xl mb-4">
                        <span class="text-3xl font-bold">"F"</span>
                    </div>
                    <h1 class="text-3xl font-bold mb-2">"Footfall Analytics"</h1>
                    <p class="text-gray-400">"Store visitor monitoring"</p>
                </div>

                <form on:submit=on_submit class="space-y-6">
                    <div>
                        <label for="email" class="block text-sm text-gray-400 mb-2">"E-mail"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="you@company.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label for="password" class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                               font-semibold transition-colors"
                    >
                        "Sign in"
                    </button>
                </form>

                <p class="text-center text-sm text-gray-500 mt-6">
                    "Analytics and monitoring suite"
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_fail_validation() {
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("someone@example.com", "").is_err());
        assert!(validate_credentials("", "hunter2").is_err());
        assert!(validate_credentials("   ", "hunter2").is_err());
    }

    #[test]
    fn test_any_non_empty_pair_passes() {
        assert!(validate_credentials("someone@example.com", "hunter2").is_ok());
        assert!(validate_credentials("not-an-email", "x").is_ok());
    }
}
