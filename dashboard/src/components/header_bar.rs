//! Header bar component
//!
//! Maps `shared::render` output onto leptos views, tag by tag. Only the
//! attributes the header emits are forwarded (`src`/`alt` on img,
//! `aria-label` on nav); `strong` is the one element without a class.
//! The start/stop buttons get no event handlers.

use leptos::prelude::*;
use shared::{Element, HeaderConfiguration, Node, Tag};

#[component]
pub fn HeaderBar(config: HeaderConfiguration) -> impl IntoView {
    let tree = shared::render(&config);
    element_view(&tree.root)
}

fn node_view(node: &Node) -> AnyView {
    match node {
        Node::Text(text) => text.clone().into_any(),
        Node::Element(el) => element_view(el),
    }
}

fn element_view(el: &Element) -> AnyView {
    let class = el.class.unwrap_or_default();
    let attr = |name: &str| el.attr(name).unwrap_or_default().to_string();
    let children = el.children.iter().map(node_view).collect::<Vec<_>>();

    match el.tag {
        Tag::Header => view! { <header class=class>{children}</header> }.into_any(),
        Tag::Div => view! { <div class=class>{children}</div> }.into_any(),
        Tag::Span => view! { <span class=class>{children}</span> }.into_any(),
        Tag::Nav => view! {
            <nav class=class aria-label=attr("aria-label")>{children}</nav>
        }
        .into_any(),
        Tag::Button => view! { <button class=class>{children}</button> }.into_any(),
        Tag::Strong => view! { <strong>{children}</strong> }.into_any(),
        Tag::Img => view! { <img class=class src=attr("src") alt=attr("alt") /> }.into_any(),
    }
}
