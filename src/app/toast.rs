use std::time::Duration;

use leptos::prelude::*;

use crate::contact::Notice;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Handle to the page-wide notification stack, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.into(),
            })
        });
        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_LIFETIME);
    }

    pub fn notice(&self, notice: Notice) {
        let kind = if notice.is_success() {
            ToastKind::Success
        } else {
            ToastKind::Error
        };
        self.push(kind, notice.message());
    }

    pub fn dismiss(&self, id: u64) {
        // the timer may fire after the page is gone
        self.items.try_update(|items| items.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-4 right-4 z-[60] flex flex-col gap-2 pointer-events-none">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let (icon, accent) = match toast.kind {
                        ToastKind::Success => ("✔", "text-green-400"),
                        ToastKind::Error => ("✖", "text-red-400"),
                    };
                    let id = toast.id;
                    view! {
                        <div
                            role="status"
                            class="toast pointer-events-auto flex items-center gap-3 px-4 py-3 rounded-lg shadow-lg bg-gray-800 border border-gray-700 text-sm cursor-pointer"
                            on:click=move |_| toasts.dismiss(id)
                        >
                            <span class=accent>{icon}</span>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
