//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::Api;
use crate::config::PortalConfig;
use crate::models::{Role, User};
use crate::storage;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Resolved config (defaults + stored override)
    config: StoredValue<PortalConfig>,
    /// Logged-in user, mirrored to local storage
    pub session: RwSignal<Option<User>>,
    /// Banner message - read
    pub notice: ReadSignal<Option<String>>,
    /// Banner message - write
    set_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: PortalConfig, session: Option<User>) -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            config: StoredValue::new(config),
            session: RwSignal::new(session),
            notice,
            set_notice,
        }
    }

    pub fn config(&self) -> PortalConfig {
        self.config.get_value()
    }

    pub fn api(&self) -> Api {
        self.config.with_value(Api::new)
    }

    pub fn user(&self) -> Option<User> {
        self.session.get()
    }

    /// Role of the session user; `None` when logged out
    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(User::role))
    }

    /// Replace the session user and persist it
    pub fn set_user(&self, user: User) {
        storage::save_user(&user);
        self.session.set(Some(user));
    }

    pub fn logout(&self) {
        storage::clear_user();
        self.session.set(None);
        log::info!("session cleared");
    }

    /// Show a banner message
    pub fn notify(&self, message: impl Into<String>) {
        self.set_notice.set(Some(message.into()));
    }

    pub fn clear_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context; the root component always provides it
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
