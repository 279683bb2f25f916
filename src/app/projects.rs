use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::reveal::Reveal;

struct Project {
    title: &'static str,
    description: &'static str,
    tech_frontend: &'static [&'static str],
    tech_backend: &'static [&'static str],
    image: &'static str,
    github: &'static str,
    live: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "KV-Audio",
        description: "A modern full-stack rental platform for audio equipment with booking, reviews, and admin management features.",
        tech_frontend: &["React", "TailwindCSS", "React Router"],
        tech_backend: &["Node.js", "Express", "MongoDB"],
        image: "https://placehold.co/600x400?text=KV+Audio",
        github: "https://github.com/Roshami/kv-audio-frontend.git",
        live: Some("https://kv-audio-frontend-kohl.vercel.app/"),
    },
    Project {
        title: "Grand Haven Hotel",
        description: "A modern and user-friendly website showcasing The Grand Haven Hotel's facilities, rooms, and booking options.",
        tech_frontend: &["HTML", "CSS", "JavaScript"],
        tech_backend: &[],
        image: "https://placehold.co/600x400?text=Grand+Haven",
        github: "https://github.com/Roshami/Grand-Haven-Hotel.git",
        live: Some("https://roshami.github.io/Grand-Haven-Hotel/index.html"),
    },
    Project {
        title: "Grinny-Online-Store",
        description: "An e-commerce website for Grinny-Online-Store, offering a variety of hair bands, ribbons, and stylish accessories.",
        tech_frontend: &["HTML", "CSS"],
        tech_backend: &[],
        image: "https://placehold.co/600x400?text=Grinny",
        github: "https://github.com/Roshami/Grinny-Online-Store.git",
        live: None,
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    // index into PROJECTS of the open modal
    let (selected, set_selected) = signal(None::<usize>);

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && selected.get_untracked().is_some() {
            set_selected(None);
        }
    });

    view! {
        <div class="container mx-auto px-4 sm:px-6 lg:px-8">
            <Reveal class="text-center mb-12">
                <h2 class="text-3xl sm:text-4xl md:text-5xl font-bold mb-4">
                    <span class="inline-block mr-3">"🛠️"</span>
                    <span class="bg-gradient-to-r from-blue-400 to-cyan-300 bg-clip-text text-transparent">
                        "My Projects"
                    </span>
                </h2>
                <p class="text-gray-400 max-w-2xl mx-auto text-lg">
                    "Some of my recent work and experiments"
                </p>
            </Reveal>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        view! {
                            <Reveal delay_ms={i as u32 * 200}>
                                <div
                                    class="bg-gray-800/50 backdrop-blur-sm border border-gray-700 rounded-xl shadow-lg p-6 h-full flex flex-col cursor-pointer hover:border-blue-400 hover:shadow-blue-500/20 hover:-translate-y-1 transition-all duration-300"
                                    on:click=move |_| set_selected(Some(i))
                                >
                                    <div class="flex-grow">
                                        <h3 class="text-xl font-semibold mb-3 text-white">
                                            {project.title}
                                        </h3>
                                        <p class="text-gray-300 text-sm mb-4">{project.description}</p>
                                    </div>
                                    <div class="mt-auto">
                                        <TechList
                                            heading="Frontend"
                                            techs=project.tech_frontend
                                            chip="bg-gray-700/80 text-xs px-2 py-1 rounded-full text-gray-300"
                                        />
                                        <TechList
                                            heading="Backend"
                                            techs=project.tech_backend
                                            chip="bg-gray-700/80 text-xs px-2 py-1 rounded-full text-gray-300"
                                        />
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
        {move || {
            selected.get().and_then(|i| PROJECTS.get(i)).map(|project| view! {
                <ProjectModal project on_close=move || set_selected(None) />
            })
        }}
    }
}

#[component]
fn TechList(
    heading: &'static str,
    techs: &'static [&'static str],
    chip: &'static str,
) -> impl IntoView {
    (!techs.is_empty())
        .then(|| {
            view! {
                <div class="mb-3">
                    <h4 class="text-xs font-medium text-gray-400 mb-1">{heading}</h4>
                    <div class="flex flex-wrap gap-2">
                        {techs.iter().map(|tech| view! { <span class=chip>{*tech}</span> }).collect_view()}
                    </div>
                </div>
            }
        })
}

#[component]
fn ProjectModal(
    project: &'static Project,
    on_close: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/80 backdrop-blur-sm" on:click=move |_| on_close()></div>
            <div
                class="pop-in relative bg-gray-800/90 backdrop-blur-lg rounded-xl shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto border border-gray-700"
                role="dialog"
                aria-modal="true"
            >
                <button
                    class="absolute top-4 right-4 text-gray-400 hover:text-white z-10 hover:scale-110 transition-transform"
                    aria-label="Close"
                    on:click=move |_| on_close()
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="h-6 w-6"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M6 18L18 6M6 6l12 12"
                        />
                    </svg>
                </button>
                <div class="p-6 sm:p-8">
                    <h2 class="text-2xl sm:text-3xl font-bold mb-4 text-white">{project.title}</h2>
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-48 sm:h-64 object-cover rounded-lg mb-6"
                    />
                    <div class="mb-6">
                        <h3 class="text-lg font-semibold mb-2 text-gray-300">"Description"</h3>
                        <p class="text-gray-400">{project.description}</p>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-6 mb-8">
                        <TechList
                            heading="Frontend"
                            techs=project.tech_frontend
                            chip="bg-blue-900/30 text-blue-300 px-3 py-1 rounded-full text-sm border border-blue-800"
                        />
                        <TechList
                            heading="Backend"
                            techs=project.tech_backend
                            chip="bg-cyan-900/30 text-cyan-300 px-3 py-1 rounded-full text-sm border border-cyan-800"
                        />
                    </div>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href=project.github
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 text-center px-4 py-3 rounded-lg bg-gray-700 hover:bg-gray-600 text-white font-medium transition-colors"
                        >
                            "View Code"
                        </a>
                        {project.live.map(|live| view! {
                            <a
                                href=live
                                target="_blank"
                                rel="noopener noreferrer"
                                class="flex-1 text-center px-4 py-3 rounded-lg bg-gradient-to-r from-blue-500 to-purple-600 hover:from-blue-600 hover:to-purple-700 text-white font-medium transition-all"
                            >
                                "Live Demo"
                            </a>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
