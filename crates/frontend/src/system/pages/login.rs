use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};

/// Trimmed username and password, or the message to show
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), String> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Identifiant requis".into());
    }
    if password.is_empty() {
        return Err("Mot de passe requis".into());
    }
    Ok((username.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let (username_val, password_val) =
            match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
                Ok(credentials) => credentials,
                Err(msg) => {
                    error_message.set(Some(msg));
                    return;
                }
            };

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    storage::save_access_token(&response.access_token);
                    storage::save_refresh_token(&response.refresh_token);

                    log::info!("Logged in as {}", response.user.username);
                    set_auth_state.set(AuthState {
                        access_token: Some(response.access_token),
                        user_info: Some(response.user),
                        restoring: false,
                    });
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    error_message.set(Some(format!("Échec de la connexion : {}", e)));
                }
            }
            is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Administration"</h1>
                <h2>"Connexion"</h2>

                {move || error_message.get().map(|msg| view! {
                    <div class="alert alert--error">{msg}</div>
                })}

                <form on:submit=on_submit>
                    <Flex vertical=true gap=FlexGap::Medium>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Identifiant"</Label>
                            <Input value=username attr:autocomplete="username" />
                        </Flex>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Mot de passe"</Label>
                            <Input
                                value=password
                                input_type=InputType::Password
                                attr:autocomplete="current-password"
                            />
                        </Flex>
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Connexion..." } else { "Se connecter" }}
                        </button>
                    </Flex>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert_eq!(
            validate_credentials("  admin ", "secret"),
            Ok(("admin".to_string(), "secret".to_string()))
        );
        assert!(validate_credentials(" ", "secret").is_err());
        assert!(validate_credentials("admin", "").is_err());
    }
}
