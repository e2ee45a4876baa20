use leptos::prelude::*;

use crate::components::ContentButton;

/// Mounts a few `ContentButton` variants so they can be inspected in a browser.
#[component]
pub fn ShowcasePage() -> impl IntoView {
    let composed = view! {
        <div data-testid="showcase-element">
            <strong>"Composed"</strong>
            " content"
        </div>
    };
    let empty: Option<&'static str> = None;

    view! {
        <h1>"Content Button"</h1>
        <section class="showcase" data-testid="showcase">
            <div class="showcase__item">
                <h2>"Text"</h2>
                <ContentButton content="Click me" />
            </div>
            <div class="showcase__item">
                <h2>"Element"</h2>
                <ContentButton content=composed />
            </div>
            <div class="showcase__item">
                <h2>"Empty"</h2>
                <ContentButton content=empty />
            </div>
        </section>
    }
}
