use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use super::{reveal::Reveal, toast::use_toasts};
use crate::{
    contact::{deliver, ContactDesk, Field},
    relay::EmailJsRelay,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-700/50 border border-gray-600 rounded-lg focus:ring-2 focus:ring-purple-500 focus:border-purple-500 outline-none text-white placeholder-gray-400 transition-all";

#[component]
pub fn ContactSection() -> impl IntoView {
    let desk = RwSignal::new(ContactDesk::default());
    let toasts = use_toasts();
    let submitting = move || desk.with(|d| d.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        desk.maybe_update(|d| {
            payload = d.begin();
            payload.is_some()
        });
        let Some(payload) = payload else {
            return;
        };

        spawn_local(async move {
            let result = match EmailJsRelay::from_build_env() {
                Ok(relay) => deliver(&relay, &payload).await,
                Err(e) => {
                    log::error!("contact relay unavailable: {e}");
                    Err(e)
                }
            };
            // the section may have been unmounted while the request was in flight
            if let Some(notice) = desk.try_update(|d| d.finish(result)) {
                toasts.notice(notice);
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto w-full py-16 px-4 sm:px-6 lg:px-8">
            <Reveal class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4">
                    <span class="inline-block mr-3">"💬"</span>
                    <span class="bg-gradient-to-r from-blue-400 to-cyan-300 bg-clip-text text-transparent">
                        "Send Me a Message"
                    </span>
                </h2>
            </Reveal>
            <Reveal
                class="max-w-lg mx-auto bg-gray-800/50 backdrop-blur-sm p-6 sm:p-8 rounded-xl shadow-xl border border-gray-700 hover:border-purple-400/50 transition-colors"
                delay_ms=100
            >
                <form class="space-y-5" on:submit=on_submit>
                    <FormField desk field=Field::Name label="Your Name" placeholder="John Doe" />
                    <FormField
                        desk
                        field=Field::Email
                        label="Your Email"
                        placeholder="your.email@example.com"
                        input_type="email"
                    />
                    <FormField
                        desk
                        field=Field::Subject
                        label="Subject"
                        placeholder="Your subject here..."
                    />
                    <FormField
                        desk
                        field=Field::Message
                        label="Message"
                        placeholder="Your message here..."
                    />
                    <div class="pt-2">
                        <button
                            type="submit"
                            disabled=submitting
                            class=move || {
                                if submitting() {
                                    "w-full px-6 py-3 rounded-lg font-semibold text-white transition-all bg-blue-700 cursor-not-allowed"
                                } else {
                                    "w-full px-6 py-3 rounded-lg font-semibold text-white transition-all bg-gradient-to-r from-cyan-600 to-blue-500 hover:to-blue-600 hover:scale-[1.03] active:scale-[0.98] cursor-pointer"
                                }
                            }
                        >
                            {move || {
                                if submitting() {
                                    view! {
                                        <span class="flex items-center justify-center">
                                            <span class="animate-spin -ml-1 mr-3 h-5 w-5 rounded-full border-2 border-white/25 border-t-white"></span>
                                            "Sending..."
                                        </span>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <span class="flex items-center justify-center">
                                            "Send Message" <span class="ml-2">"🚀"</span>
                                        </span>
                                    }
                                        .into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </Reveal>
        </div>
    }
}

#[component]
fn FormField(
    desk: RwSignal<ContactDesk>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || desk.with(|d| d.form().get(field).to_string());
    let on_input = move |ev: Event| desk.update(|d| d.set(field, event_target_value(&ev)));

    view! {
        <div>
            <label for=field.name() class="block text-sm font-medium text-gray-300 mb-2">
                {label}
            </label>
            {if field == Field::Message {
                view! {
                    <textarea
                        id=field.name()
                        name=field.name()
                        placeholder=placeholder
                        rows="5"
                        required
                        class=format!("{INPUT_CLASS} resize-none")
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        id=field.name()
                        type=input_type
                        name=field.name()
                        placeholder=placeholder
                        required
                        class=INPUT_CLASS
                        prop:value=value
                        on:input=on_input
                    />
                }
                    .into_any()
            }}
        </div>
    }
}
