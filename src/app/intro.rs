use leptos::prelude::*;

use super::viewport::DomPage;
use crate::sections::{scroll_to_section, Section};

pub const PROFILE_IMAGE: &str = "/profile/dp.jpeg";
pub const RESUME_FILE: &str = "/resume.pdf";

#[component]
pub fn Intro() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="orb absolute top-20 left-20 w-32 h-32 md:w-48 md:h-48 bg-gradient-to-r from-blue-500/20 to-purple-500/20 rounded-full blur-3xl"></div>
            <div class="orb orb-slow absolute bottom-20 right-20 w-40 h-40 md:w-56 md:h-56 bg-gradient-to-r from-pink-500/20 to-orange-500/20 rounded-full blur-3xl"></div>
        </div>
        <div class="relative z-10 max-w-4xl mx-auto text-center rise-in">
            <div class="relative inline-block mb-8">
                <div class="spin-slow absolute -inset-2 rounded-full bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 opacity-60 blur-sm"></div>
                <img
                    src=PROFILE_IMAGE
                    alt="Roshami Thashmantha"
                    class="relative w-40 h-40 md:w-52 md:h-52 rounded-full object-cover border-4 border-gray-900 hover:scale-105 transition-transform duration-300"
                />
            </div>
            <h1 class="gradient-text text-4xl sm:text-5xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 bg-clip-text text-transparent">
                "Hi, I'm Roshami"
            </h1>
            <p class="text-xl md:text-2xl text-gray-300 font-medium mb-6">"Full Stack Developer"</p>
            <p class="text-gray-400 italic max-w-xl mx-auto mb-10">
                "\"Every expert was once a beginner. Every pro was once an amateur.\""
            </p>
            <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                <a
                    href=RESUME_FILE
                    download="Roshami-Thashmantha-CV.pdf"
                    class="px-6 py-3 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 font-semibold shadow-lg transition-all duration-300 hover:scale-105"
                >
                    "Download CV"
                </a>
                <button
                    class="px-6 py-3 rounded-full border border-purple-500/50 text-purple-200 hover:bg-purple-500/10 font-semibold transition-all duration-300 hover:scale-105"
                    on:click=move |_| scroll_to_section(&DomPage, Section::Contact)
                >
                    "Get in Touch"
                </button>
            </div>
        </div>
    }
}
