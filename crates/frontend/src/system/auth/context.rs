use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Session restore from localStorage still running
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let has_token = storage::get_access_token().is_some();
    let (auth_state, set_auth_state) = signal(AuthState {
        restoring: has_token,
        ..AuthState::default()
    });

    if has_token {
        spawn_local(async move {
            let restored = restore_session().await;
            set_auth_state.set(restored.unwrap_or_default());
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Validate the stored access token, falling back to the refresh token
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;
    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some(AuthState {
            access_token: Some(access_token),
            user_info: Some(user_info),
            restoring: false,
        });
    }

    let Some(refresh_token) = storage::get_refresh_token() else {
        log::info!("Stored session expired, no refresh token");
        storage::clear_tokens();
        return None;
    };

    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user(&response.access_token).await {
                Ok(user_info) => Some(AuthState {
                    access_token: Some(response.access_token),
                    user_info: Some(user_info),
                    restoring: false,
                }),
                Err(e) => {
                    log::warn!("Failed to load user after refresh: {}", e);
                    None
                }
            }
        }
        Err(e) => {
            log::info!("Session refresh failed: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive admin flag of the current session
pub fn use_is_admin() -> Signal<bool> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.is_admin()))
}

/// Revoke the refresh token and clear the session
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    let refresh_token = storage::get_refresh_token();
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());

    if let Some(refresh_token) = refresh_token {
        spawn_local(async move {
            if let Err(e) = api::logout(refresh_token).await {
                log::warn!("Logout request failed: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "agent".into(),
            full_name: None,
            email: None,
            is_admin,
        }
    }

    #[test]
    fn test_admin_requires_token_and_flag() {
        let mut state = AuthState {
            access_token: Some("token".into()),
            user_info: Some(user(true)),
            restoring: false,
        };
        assert!(state.is_admin());

        state.user_info = Some(user(false));
        assert!(state.is_authenticated());
        assert!(!state.is_admin());

        state.access_token = None;
        state.user_info = Some(user(true));
        assert!(!state.is_admin());
        assert!(!AuthState::default().is_admin());
    }
}
