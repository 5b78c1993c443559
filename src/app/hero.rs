use leptos::prelude::*;

use crate::content::SiteProfile;

const DEFAULT_HERO_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d";

fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Hero() -> impl IntoView {
    let profile = expect_context::<SiteProfile>();

    let headline = profile
        .introduction_headline
        .clone()
        .unwrap_or_else(|| "Hello, I'm".to_string());
    let name = profile.display_name().to_string();
    let job_title = profile
        .job_title
        .clone()
        .unwrap_or_else(|| "Your Job Title".to_string());
    let introduction = profile
        .introduction_paragraph
        .clone()
        .unwrap_or_else(|| "Your introduction goes here.".to_string());
    let image_src = profile
        .hero_image_url
        .clone()
        .unwrap_or_else(|| DEFAULT_HERO_IMAGE.to_string());
    let image_alt = profile
        .hero_image_alt
        .clone()
        .unwrap_or_else(|| "Professional portrait".to_string());

    let socials: Vec<(String, &'static str, &'static str)> = [
        (profile.github_url.clone(), "GitHub", "devicon-github-plain"),
        (
            profile.linkedin_url.clone(),
            "LinkedIn",
            "devicon-linkedin-plain",
        ),
        (profile.mailto(), "Email", "extra-mail"),
    ]
    .into_iter()
    .filter_map(|(href, label, icon)| href.map(|href| (href, label, icon)))
    .collect();

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden pt-20 md:pt-0"
        >
            <div class="absolute inset-0 -z-10">
                <div class="hero-blob hero-blob-purple"></div>
                <div class="hero-blob hero-blob-blue"></div>
                <div class="hero-blob hero-blob-pink"></div>
            </div>

            <div class="container-custom grid md:grid-cols-5 gap-8 items-center">
                <div class="md:col-span-3 order-2 md:order-1 text-center md:text-left section-content">
                    <p class="text-primary font-semibold text-lg mb-2">{headline}</p>
                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-extrabold mb-4 gradient-text">
                        {name}
                    </h1>
                    <h2 class="text-2xl md:text-3xl font-medium text-foreground/80 mb-8">
                        {job_title}
                    </h2>
                    <p class="text-foreground/70 mb-10 max-w-xl mx-auto md:mx-0 text-lg">
                        {introduction}
                    </p>

                    <div class="flex flex-wrap gap-4 justify-center md:justify-start">
                        <button
                            class="btn-primary px-8 py-3 text-lg"
                            on:click=move |_| scroll_to_section("contact")
                        >
                            "Contact Me"
                        </button>
                        <button
                            class="btn-outline px-8 py-3 text-lg"
                            on:click=move |_| scroll_to_section("projects")
                        >
                            "View Projects"
                        </button>
                    </div>

                    <div class="flex gap-6 mt-12 justify-center md:justify-start">
                        {socials
                            .into_iter()
                            .map(|(href, label, icon)| {
                                let external = label != "Email";
                                view! {
                                    <a
                                        href=href
                                        target=external.then_some("_blank")
                                        rel=external.then_some("noopener noreferrer")
                                        class="text-foreground/60 hover:text-primary transition-colors duration-300 text-2xl"
                                        aria-label=label
                                    >
                                        <i class=icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="md:col-span-2 order-1 md:order-2 flex justify-center items-center">
                    <div class="relative w-72 h-72 md:w-96 md:h-96">
                        <div class="absolute inset-0 rounded-full gradient-bg opacity-30"></div>
                        <div class="relative w-full h-full rounded-full overflow-hidden shadow-2xl border-4 border-background/50">
                            <img alt=image_alt class="w-full h-full object-cover" src=image_src />
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 hidden md:block text-primary text-2xl animate-bounce">
                "↓"
            </div>
        </section>
    }
}
