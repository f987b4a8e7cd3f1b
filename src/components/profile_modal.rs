//! Profile Components
//!
//! Sidebar profile badge and the edit-profile modal shared by the student
//! and professor layouts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::ProfileUpdate;
use crate::context::use_app_context;
use crate::error::ApiResult;
use crate::format::profile_image_url;
use crate::models::User;

/// Avatar + name; clicking it opens the profile modal
#[component]
pub fn ProfileBadge(
    /// Prefix before the username, e.g. "Prof. "
    #[prop(into, optional)] name_prefix: String,
    open: RwSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let config = StoredValue::new(ctx.config());

    let name = move || {
        ctx.session
            .with(|s| s.as_ref().map(|u| format!("{}{}", name_prefix, u.username)))
            .unwrap_or_default()
    };
    let image = move || {
        ctx.session.with(|s| {
            s.as_ref()
                .and_then(|u| u.profile_image.clone())
                .filter(|img| !img.is_empty())
                .map(|img| config.with_value(|c| profile_image_url(c, &img)))
        })
    };

    view! {
        <div class="profile-badge" on:click=move |_| open.set(true)>
            {move || match image() {
                Some(src) => view! { <img class="profile-img" src=src alt="Profile" /> }.into_any(),
                None => view! {
                    <div class="profile-placeholder"><i class="fa-solid fa-user"></i></div>
                }.into_any(),
            }}
            <span class="profile-name">{name}</span>
        </div>
    }
}

/// Edit username, password and photo of the session user
#[component]
pub fn ProfileModal(open: RwSignal<bool>) -> impl IntoView {
    let ctx = use_app_context();
    let config = StoredValue::new(ctx.config());

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let photo = RwSignal::new_local(None::<web_sys::File>);
    let preview = RwSignal::new(None::<String>);

    // Object URLs live until revoked
    let set_preview = move |next: Option<String>| {
        let stale = preview.try_update(|slot| swap_preview(slot, next)).flatten();
        if let Some(url) = stale {
            if let Err(e) = web_sys::Url::revoke_object_url(&url) {
                log::warn!("failed to revoke preview {}: {:?}", url, e);
            }
        }
    };

    // Refill the form whenever the modal opens; drop the preview either way
    Effect::new(move |_| {
        let is_open = open.get();
        set_preview(None);
        photo.set(None);
        if is_open {
            let current = ctx.session.get_untracked().map(|u| u.username).unwrap_or_default();
            set_username.set(current);
            set_password.set(String::new());
        }
    });
    on_cleanup(move || set_preview(None));

    let on_pick = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => set_preview(Some(url)),
            Err(e) => log::warn!("no preview for {}: {:?}", file.name(), e),
        }
        photo.set(Some(file));
    };

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = ctx.user() else { return };
        let update = ProfileUpdate::from_form(&user, &username.get(), &password.get());
        let file = photo.get_untracked();
        let api = ctx.api();
        set_saving.set(true);

        spawn_local(async move {
            let result: ApiResult<User> = async {
                let mut user = user;
                if let Some(file) = file.as_ref() {
                    let uploaded = api.upload_photo(user.id, file).await?;
                    user.profile_image = Some(uploaded.image);
                }
                if !update.is_empty() {
                    let updated = api.update_profile(user.id, &update).await?;
                    if !updated.username.is_empty() {
                        user.username = updated.username;
                    }
                }
                Ok(user)
            }
            .await;

            set_saving.set(false);
            match result {
                Ok(user) => {
                    log::info!("profile of user {} saved", user.id);
                    ctx.set_user(user);
                    open.set(false);
                    ctx.notify("Profile saved successfully!");
                }
                Err(e) => {
                    log::error!("profile update failed: {}", e);
                    ctx.notify(format!("Update failed: {}", e.user_message()));
                }
            }
        });
    };

    let current_image = move || {
        preview.get().or_else(|| {
            ctx.session.with(|s| {
                s.as_ref()
                    .and_then(|u| u.profile_image.clone())
                    .filter(|img| !img.is_empty())
                    .map(|img| config.with_value(|c| profile_image_url(c, &img)))
            })
        })
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| open.set(false)>
                <form class="modal-content" on:click=|ev| ev.stop_propagation() on:submit=on_save>
                    <h2>"Edit Profile"</h2>
                    <label class="profile-photo-picker">
                        {move || match current_image() {
                            Some(src) => view! { <img class="modal-profile-img" src=src alt="Profile" /> }.into_any(),
                            None => view! {
                                <div class="modal-profile-placeholder"><i class="fa-solid fa-camera"></i></div>
                            }.into_any(),
                        }}
                        <input type="file" accept="image/*" class="hidden-input" on:change=on_pick />
                    </label>
                    <label>"Username"</label>
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <label>"New Password"</label>
                    <input
                        type="password"
                        placeholder="Leave blank to keep current"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

/// Install `next` as the preview URL, returning the one it replaces
fn swap_preview(slot: &mut Option<String>, next: Option<String>) -> Option<String> {
    std::mem::replace(slot, next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_preview_hands_back_previous_url() {
        let mut slot = None;
        assert_eq!(swap_preview(&mut slot, Some("blob:a".into())), None);
        assert_eq!(swap_preview(&mut slot, Some("blob:b".into())), Some("blob:a".to_string()));
        assert_eq!(swap_preview(&mut slot, None), Some("blob:b".to_string()));
        assert_eq!(slot, None);
    }
}
