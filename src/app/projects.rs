use leptos::prelude::*;

use super::toast::use_toasts;
use crate::content::client::ContentClient;
use crate::content::{filter_by_category, Project, PROJECT_CATEGORIES};
use crate::fetch::{use_fetch, FetchState, Panel};

#[component]
pub fn Projects() -> impl IntoView {
    let client = expect_context::<ContentClient>();
    let projects = use_fetch(async move { client.projects().await });

    let toasts = use_toasts();
    Effect::new(move |_| {
        if let FetchState::Failed(err) = projects.get() {
            toasts.error("Error Loading Projects", err.to_string());
        }
    });

    let (active, set_active) = signal("All".to_string());
    // Filtering is derived from the one fetched collection; switching
    // categories never issues a request.
    let filtered = Memo::new(move |_| match projects.get() {
        FetchState::Ready(list) => filter_by_category(&list, &active.get()),
        _ => Vec::new(),
    });

    view! {
        <section id="projects" class="section-padding bg-background/30">
            <div class="container-custom">
                <div class="text-center mb-20 section-content">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "My " <span class="gradient-text">"Creations"</span>
                    </h2>
                    <p class="text-foreground/70 max-w-2xl mx-auto text-lg">
                        "A showcase of my passion for building and designing. Explore projects that reflect my skills and creativity."
                    </p>
                    <div class="w-24 h-1.5 gradient-bg mx-auto mt-6 rounded-full"></div>
                </div>

                <div class="flex justify-center mb-12">
                    <div class="bg-background/70 p-2 rounded-xl shadow-md flex flex-wrap gap-1">
                        {PROJECT_CATEGORIES
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == category {
                                                "tab-trigger tab-trigger-active"
                                            } else {
                                                "tab-trigger"
                                            }
                                        }
                                        on:click=move |_| set_active.set(category.to_string())
                                    >
                                        {category}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="min-h-[400px]">
                    {move || match projects.get().panel() {
                        Panel::Loading => {
                            view! {
                                <div class="flex flex-col justify-center items-center py-12">
                                    <div class="spinner spinner-lg mb-4"></div>
                                    <p class="text-lg text-foreground/70">"Loading projects..."</p>
                                </div>
                            }
                                .into_any()
                        }
                        Panel::Error => {
                            view! {
                                <div class="flex flex-col items-center justify-center py-12 text-destructive bg-destructive/10 p-8 rounded-lg">
                                    <p class="text-xl font-semibold">
                                        "Failed to load projects. Please try again later."
                                    </p>
                                </div>
                            }
                                .into_any()
                        }
                        Panel::Empty | Panel::Content => {
                            view! {
                                {move || {
                                    let visible = filtered.get();
                                    if visible.is_empty() {
                                        view! {
                                            <div class="text-center py-16">
                                                <p class="text-xl text-foreground/50">
                                                    {format!("No projects found for \"{}\".", active.get())}
                                                </p>
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-10">
                                                <For
                                                    each=move || filtered.get()
                                                    key=|project| project.id
                                                    children=move |project| {
                                                        view! { <ProjectCard project /> }
                                                    }
                                                />
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }}
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let image_src = project.image_src();
    let image_alt = project.image_alt().to_string();
    let technologies = project.visible_technologies().to_vec();
    let category = project.category.clone();

    view! {
        <div class="overflow-hidden card-hover h-full flex flex-col bg-card/80 border border-border/50 shadow-lg rounded-xl">
            <div class="h-56 overflow-hidden relative group">
                <img
                    alt=image_alt
                    class="w-full h-full object-cover transition-transform duration-500 ease-in-out group-hover:scale-110"
                    src=image_src
                />
            </div>
            <div class="pt-6 px-6 flex-grow flex flex-col">
                <div class="flex justify-between items-start mb-3">
                    <h3 class="text-xl font-bold gradient-text">{project.title.clone()}</h3>
                    {category
                        .map(|category| {
                            view! {
                                <span class="badge bg-primary/10 text-primary font-semibold">
                                    {category}
                                </span>
                            }
                        })}
                </div>
                <p class="text-foreground/60 mb-5 text-sm flex-grow">
                    {project.description.clone()}
                </p>
                <div class="flex flex-wrap gap-2 mt-auto mb-2">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="badge border border-primary/30 text-primary/80 bg-primary/5 text-xs">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="border-t border-border/50 p-5">
                <div class="flex gap-3 w-full">
                    {project
                        .github_link
                        .clone()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-outline flex-1 text-center text-sm py-2.5"
                                >
                                    "Code"
                                </a>
                            }
                        })}
                    {project
                        .demo_link
                        .clone()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn-primary flex-1 text-center text-sm py-2.5"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
