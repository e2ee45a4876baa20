use leptos::prelude::*;
use thaw::Button;

/// `data-testid` attached to the outer button.
pub const TEST_ID: &str = "test-component";

/// `data-testid` attached to the span that wraps the caller's content.
pub const CONTENT_TEST_ID: &str = "test-component__content";

/// A `thaw::Button` whose body is whatever the caller passes as `content`.
///
/// The content is rendered as-is inside a plain `<span>`. Nothing is
/// substituted when it is empty, so `None` gives an empty wrapper.
#[component]
pub fn ContentButton<C>(
    /// Any renderable value: text, an element, a fragment or an `Option` of those.
    content: C,
) -> impl IntoView
where
    C: IntoView + Send + 'static,
{
    view! {
        <Button attr:data-testid=TEST_ID>
            <span data-testid=CONTENT_TEST_ID>{content}</span>
        </Button>
    }
}
