use leptos::prelude::*;

use super::viewport::DomPage;
use crate::sections::{scroll_to_section, scroll_to_top, NavigationState, Section};

const ACTIVE_CLASS: &str = "bg-gradient-to-r from-blue-500/20 to-purple-500/20 text-white border border-purple-500/30 shadow-lg shadow-purple-500/20";
const IDLE_CLASS: &str = "text-gray-400 hover:text-white hover:bg-gray-700/30";

fn nav_icon(section: Section) -> &'static str {
    match section {
        Section::Intro => "🏠",
        Section::About => "👤",
        Section::Skills => "🛠",
        Section::Projects => "📂",
        Section::Contact => "✉",
    }
}

#[component]
pub fn Navigation(nav: RwSignal<NavigationState>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let is_active = move |section: Section| nav.with(|n| n.is_active(section));

    let go_to = move |section: Section| {
        scroll_to_section(&DomPage, section);
        set_menu_open(false);
    };

    view! {
        <Show when=move || nav.with(|n| n.scrolled_past_threshold)>
            <button
                class="pop-in fixed bottom-6 right-6 bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white p-3 rounded-full shadow-2xl z-50 transition-all duration-300 hover:scale-110"
                aria-label="Scroll to top"
                on:click=move |_| scroll_to_top(&DomPage)
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="20"
                    height="20"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <polyline points="18 15 12 9 6 15"></polyline>
                </svg>
            </button>
        </Show>

        <button
            class="fixed top-6 left-6 lg:hidden bg-gray-800/80 backdrop-blur-md text-white p-3 rounded-full shadow-lg z-50 border border-gray-700"
            aria-label="Toggle navigation"
            on:click=move |_| set_menu_open.update(|open| *open = !*open)
        >
            {move || if menu_open() { "✕" } else { "☰" }}
        </button>

        <nav class="slide-in-left hidden lg:flex fixed left-0 top-0 h-full w-20 bg-gray-800/30 backdrop-blur-xl border-r border-gray-700/50 z-40 flex-col items-center justify-center space-y-8">
            {Section::ALL
                .into_iter()
                .enumerate()
                .map(|(i, section)| {
                    view! {
                        <button
                            class=move || {
                                format!(
                                    "relative w-14 h-14 rounded-xl flex items-center justify-center text-xl transition-all duration-300 group {}",
                                    if is_active(section) { ACTIVE_CLASS } else { IDLE_CLASS },
                                )
                            }
                            style=format!("animation-delay: {}ms", i * 100)
                            aria-label=section.label()
                            on:click=move |_| go_to(section)
                        >
                            {nav_icon(section)}
                            <span class="absolute left-full ml-4 px-3 py-1 bg-gray-800 text-white text-sm rounded-lg opacity-0 group-hover:opacity-100 transition-opacity duration-300 whitespace-nowrap pointer-events-none">
                                {section.label()}
                            </span>
                            <Show when=move || is_active(section)>
                                <span class="absolute -left-1 top-1/2 -translate-y-1/2 w-1 h-8 bg-gradient-to-b from-blue-500 to-purple-500 rounded-full"></span>
                            </Show>
                        </button>
                    }
                })
                .collect_view()}
        </nav>

        <Show when=move || menu_open.get()>
            <div
                class="fixed inset-0 bg-black/50 backdrop-blur-sm z-40 lg:hidden"
                on:click=move |_| set_menu_open(false)
            ></div>
            <nav class="slide-in-left fixed left-0 top-0 h-full w-64 bg-gray-800/95 backdrop-blur-xl border-r border-gray-700 z-50 lg:hidden flex flex-col pt-20">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class=move || {
                                    format!(
                                        "flex items-center space-x-4 px-6 py-4 transition-all duration-300 {}",
                                        if is_active(section) {
                                            "bg-gradient-to-r from-blue-500/20 to-purple-500/20 text-white border-r-2 border-purple-500"
                                        } else {
                                            "text-gray-300 hover:text-white hover:bg-gray-700/30"
                                        },
                                    )
                                }
                                on:click=move |_| go_to(section)
                            >
                                <span class="text-xl">{nav_icon(section)}</span>
                                <span class="font-medium">{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
