use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <div class="py-6 px-4 sm:px-6 lg:px-8 border-t border-gray-800">
            <div class="max-w-7xl mx-auto flex flex-col items-center justify-center gap-3">
                <div class="flex gap-4 text-gray-400">
                    <a
                        href="https://github.com/Roshami"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:text-white hover:scale-110 transition-all"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain text-2xl"></i>
                    </a>
                </div>
                <p class="text-gray-500 text-sm">
                    {format!("© {year} Roshami Thashmantha. All rights reserved.")}
                </p>
            </div>
        </div>
    }
}
