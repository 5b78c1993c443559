use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
}

/// Transient notifications, provided at the composition root. Each toast
/// dismisses itself after a fixed duration.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    fn new() -> Self {
        Toasts {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, title: &str, body: impl Into<String>) {
        self.push(ToastKind::Success, title, body.into());
    }

    pub fn error(&self, title: &str, body: impl Into<String>) {
        self.push(ToastKind::Error, title, body.into());
    }

    fn push(&self, kind: ToastKind, title: &str, body: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                title: title.to_string(),
                body,
            })
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            // no-op if the app was torn down in the meantime
            let _ = items.try_update(|items| items.retain(|toast| toast.id != id));
        });
    }
}

pub fn provide_toasts() {
    provide_context(Toasts::new());
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col gap-3">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=kind_class role="status">
                            <p class="font-semibold">{toast.title}</p>
                            <p class="text-sm">{toast.body}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
