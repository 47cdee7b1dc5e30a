use yew::prelude::*;

use crate::{Model, Msg, View};

const NAV_ITEMS: [(View, &str, &str); 4] = [
    (View::Detection, "fa-solid fa-eye", "Detection Tool"),
    (View::AboutDiabetes, "fa-solid fa-book-open", "About Diabetes"),
    (
        View::CausesEffects,
        "fa-solid fa-triangle-exclamation",
        "Causes & Effects",
    ),
    (
        View::DiabetesTypes,
        "fa-solid fa-heart-pulse",
        "Types of Diabetes",
    ),
];

pub fn render_navigation(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <nav class="top-nav">
            <div class="nav-inner">
                <div class="nav-brand">
                    <div class="brand-icon"><i class="fa-solid fa-eye"></i></div>
                    <div>
                        <h1 class="brand-title">{"Diabetic Retinopathy Center"}</h1>
                        <p class="brand-subtitle">{"AI-powered detection & education"}</p>
                    </div>
                </div>
                <div class="nav-items">
                    { for NAV_ITEMS.iter().map(|(view, icon, label)| {
                        let target = *view;
                        let is_active = model.view == target;
                        html! {
                            <button
                                class={classes!("nav-item", is_active.then_some("active"))}
                                onclick={link.callback(move |_| Msg::Navigate(target))}
                            >
                                <i class={*icon}></i>
                                <span class="nav-label">{ *label }</span>
                            </button>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}
