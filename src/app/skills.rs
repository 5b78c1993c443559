use leptos::prelude::*;

use super::toast::use_toasts;
use crate::content::client::ContentClient;
use crate::content::{additional_expertise, grid_categories, SkillCategory};
use crate::fetch::{use_fetch, FetchState};

fn category_icon(name: &str) -> &'static str {
    match name {
        "Frontend" => "🧠",
        "Backend" => "⚙",
        "Tools & Others" => "🔧",
        "Additional Expertise" => "★",
        _ => "🏷",
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let client = expect_context::<ContentClient>();
    let categories = use_fetch(async move { client.skill_categories().await });

    let toasts = use_toasts();
    Effect::new(move |_| {
        if let FetchState::Failed(err) = categories.get() {
            toasts.error("Error Loading Skills", err.to_string());
        }
    });

    view! {
        <section id="skills" class="section-padding bg-background">
            <div class="container-custom">
                <div class="text-center mb-20 section-content">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Technical " <span class="gradient-text">"Arsenal"</span>
                    </h2>
                    <p class="text-foreground/70 max-w-2xl mx-auto text-lg">
                        "A glimpse into the technologies and tools I wield to craft digital experiences."
                    </p>
                    <div class="w-24 h-1.5 gradient-bg mx-auto mt-6 rounded-full"></div>
                </div>

                {move || match categories.get() {
                    FetchState::Idle | FetchState::Loading => {
                        view! {
                            <div class="flex flex-col justify-center items-center py-12">
                                <div class="spinner spinner-lg mb-4"></div>
                                <p class="text-lg text-foreground/70">"Loading skills..."</p>
                            </div>
                        }
                            .into_any()
                    }
                    FetchState::Failed(_) => {
                        view! {
                            <div class="flex flex-col items-center justify-center py-12 text-destructive bg-destructive/10 p-8 rounded-lg">
                                <p class="text-xl font-semibold">
                                    "Failed to load skills. Please try again later."
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                    FetchState::Ready(all) if all.is_empty() => {
                        view! {
                            <div class="text-center py-16">
                                <p class="text-xl text-foreground/50">"No skills listed yet."</p>
                            </div>
                        }
                            .into_any()
                    }
                    FetchState::Ready(all) => {
                        let grid: Vec<SkillCategory> =
                            grid_categories(&all).into_iter().cloned().collect();
                        let extra = additional_expertise(&all).cloned();
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-10">
                                {grid
                                    .into_iter()
                                    .map(|category| view! { <SkillCard category /> })
                                    .collect_view()}
                            </div>
                            {extra
                                .map(|category| {
                                    view! {
                                        <div class="mt-20 bg-card/80 rounded-xl shadow-xl p-8 md:p-12 border border-border/50">
                                            <h3 class="text-3xl font-bold mb-8 text-center text-foreground/90">
                                                <span class="mr-2 text-primary">
                                                    {category_icon(&category.name)}
                                                </span>
                                                {category.name.clone()}
                                            </h3>
                                            <div class="flex flex-wrap justify-center gap-4">
                                                {category
                                                    .skills
                                                    .into_iter()
                                                    .map(|skill| {
                                                        view! {
                                                            <span class="badge text-lg px-5 py-2.5 bg-background/70 border border-primary/40 text-primary/90 shadow-sm">
                                                                {skill.name}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })}
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="h-full card-hover bg-card/80 border border-border/50 shadow-lg rounded-xl">
            <div class="pt-8 pb-8 px-6">
                <h3 class="text-2xl font-semibold mb-8 flex items-center text-foreground/90">
                    <span class="mr-2 text-primary">{category_icon(&category.name)}</span>
                    {category.name.clone()}
                </h3>
                <div class="flex flex-wrap gap-3">
                    {category
                        .skills
                        .into_iter()
                        .map(|skill| {
                            view! {
                                <span class="badge px-4 py-2 bg-primary/10 text-primary border border-primary/20 shadow-sm">
                                    {skill.name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
