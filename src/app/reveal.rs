use leptos::{html::Div, prelude::*};
use leptos_use::use_element_visibility;

/// Plays the CSS entrance animation the first time its content scrolls into view.
#[component]
pub fn Reveal(
    #[prop(optional, into)] class: String,
    /// Stagger relative to siblings.
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let el = NodeRef::<Div>::new();
    let visible = use_element_visibility(el);
    let (revealed, set_revealed) = signal(false);

    // latch: leaving the viewport again doesn't hide it
    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed(true);
        }
    });

    view! {
        <div
            node_ref=el
            class=move || {
                if revealed() {
                    format!("reveal reveal-visible {class}")
                } else {
                    format!("reveal {class}")
                }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
