use leptos::either::Either;
use leptos::prelude::*;

use crate::models::Markup;

#[component]
pub fn RichText(segments: &'static [Markup]) -> impl IntoView {
    segments
        .iter()
        .map(|segment| match *segment {
            Markup::Text(text) => Either::Left(text),
            Markup::Code(code) => Either::Right(view! { <code>{code}</code> }),
        })
        .collect_view()
}
