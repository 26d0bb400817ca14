//! TopHeader component - application menu bar.
//!
//! Brand icon followed by one menu item per collection.

use crate::layout::global_context::{AppGlobalContext, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">{icon("lab")}</div>
            <nav class="top-header__menu">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <Button
                                appearance=Signal::derive(move || {
                                    if ctx.is_active(section) {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Transparent
                                    }
                                })
                                on_click=move |_| ctx.select(section)
                            >
                                <b>{section.label()}</b>
                            </Button>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
