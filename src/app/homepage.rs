use leptos::{ev, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_event_listener, use_window};

use super::{
    about::About, contact::ContactSection, footer::Footer, intro::Intro, navigation::Navigation,
    projects::Projects, skills::Skills, viewport::DomPage,
};
use crate::sections::{NavigationState, ScrollSurface, Section};

const STAR_COUNT: usize = 50;

#[component]
pub fn HomePage() -> impl IntoView {
    let nav = RwSignal::new(NavigationState::default());

    let refresh = move || {
        let page = DomPage;
        nav.maybe_update(|state| state.observe(page.viewport(), &page));
    };

    // Both listeners are removed when this view's owner is disposed
    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());
    let _ = use_event_listener(use_window(), ev::resize, move |_| refresh());
    Effect::new(move |_| refresh());

    let section_class = "min-h-screen flex items-center justify-center py-20 px-6";

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gradient-to-br from-gray-900 via-black to-gray-900 relative overflow-hidden">
            <Starfield />
            <Navigation nav />
            <div class="lg:ml-20 relative z-10">
                <section
                    id=Section::Intro.id()
                    class="min-h-screen flex flex-col items-center justify-center px-6 relative fade-in"
                >
                    <Intro />
                </section>
                <section id=Section::About.id() class=section_class>
                    <About />
                </section>
                <section id=Section::Skills.id() class=section_class>
                    <Skills />
                </section>
                <section id=Section::Projects.id() class=section_class>
                    <Projects />
                </section>
                <section id=Section::Contact.id() class=section_class>
                    <ContactSection />
                </section>
                <footer class="bg-gray-900/50 backdrop-blur-xl border-t border-gray-700/50 mt-20">
                    <Footer />
                </footer>
            </div>
        </div>
    }
}

#[component]
fn Starfield() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-0 pointer-events-none" aria-hidden="true">
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_center,_var(--tw-gradient-stops))] from-purple-900/20 via-transparent to-transparent"></div>
            {(0..STAR_COUNT)
                .map(|i| view! { <span class="star absolute text-white/20" style=star_style(i)>"★"</span> })
                .collect_view()}
        </div>
    }
}

/// Scatters stars without randomness so server and browser render the same markup.
fn star_style(i: usize) -> String {
    let spread = |seed: usize, modulo: usize| (i * seed + seed / 3) % modulo;
    format!(
        "left: {}%; top: {}%; font-size: {}px; animation-duration: {}s; animation-delay: -{}s",
        spread(37, 100),
        spread(61, 100),
        5 + spread(7, 15),
        10 + spread(13, 10),
        spread(17, 10),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_style_is_deterministic() {
        assert_eq!(star_style(7), star_style(7));
        let distinct = (0..STAR_COUNT)
            .map(star_style)
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), STAR_COUNT);
    }
}
