//! Timed success/error banners.
//!
//! One banner is visible at a time. A newer banner replaces the current one;
//! the older banner's timer then finds a different id and leaves it alone.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::icon;

pub const SUCCESS_BANNER_MS: u32 = 3_000;
pub const ERROR_BANNER_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Banner>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(BannerKind::Success, message.into(), SUCCESS_BANNER_MS);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(BannerKind::Error, message.into(), ERROR_BANNER_MS);
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Banner> {
        self.current.get()
    }

    fn show(&self, kind: BannerKind, message: String, timeout_ms: u32) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.current.set(Some(Banner { id, kind, message }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            let still_shown = current
                .try_with_untracked(|b| b.as_ref().map(|b| b.id) == Some(id))
                .unwrap_or(false);
            if still_shown {
                current.set(None);
            }
        });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

/// Renders the active banner; mounted once at the app root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        {move || notifications.current().map(|banner| {
            let (id, class) = match banner.kind {
                BannerKind::Success => ("success", "banner banner--success"),
                BannerKind::Error => ("error", "banner banner--error"),
            };
            view! {
                <div id=id class=class role="alert">
                    <span class="banner__text">{banner.message}</span>
                    <button
                        class="banner__close"
                        title="Dismiss"
                        on:click=move |_| notifications.dismiss()
                    >
                        {icon("close")}
                    </button>
                </div>
            }
        })}
    }
}
