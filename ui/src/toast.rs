//! Transient notifications, as a signal-backed list rendered by [`Toaster`].

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    next_id: u64,
    pub entries: Vec<Toast>,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a notification; on the web build it auto-dismisses after a few
/// seconds, elsewhere it stays until clicked.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = {
        let mut state = toasts.write();
        state.next_id += 1;
        let id = state.next_id;
        state.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    #[cfg(target_arch = "wasm32")]
    {
        let mut toasts = *toasts;
        spawn(async move {
            let secs = if level == ToastLevel::Error { 5 } else { 3 };
            gloo_timers::future::sleep(std::time::Duration::from_secs(secs)).await;
            toasts.write().entries.retain(|t| t.id != id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Provides the toast signal and renders the stacked notification area on top
/// of its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Toasts::default);
    use_context_provider(|| toasts);

    rsx! {
        {children}
        Toaster {}
    }
}

#[component]
fn Toaster() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div { class: "toaster",
            for toast in toasts().entries.iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    onclick: move |_| {
                        toasts.write().entries.retain(|t| t.id != toast.id);
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
