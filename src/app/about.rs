use leptos::prelude::*;

use crate::content::SiteProfile;

#[component]
pub fn About() -> impl IntoView {
    let profile = expect_context::<SiteProfile>();

    let headline = profile
        .about_headline
        .clone()
        .unwrap_or_else(|| "A brief introduction".to_string());
    let paragraph1 = profile
        .about_paragraph1
        .clone()
        .unwrap_or_else(|| "Details about your experience and passion.".to_string());
    let paragraph2 = profile
        .about_paragraph2
        .clone()
        .unwrap_or_else(|| "More about your goals and learning.".to_string());
    let image = profile.about_image_url.clone().filter(|url| !url.is_empty());
    let image_alt = profile
        .about_image_alt
        .clone()
        .unwrap_or_else(|| "About me image".to_string());

    let details: [(&str, &str, Option<String>); 4] = [
        ("✓", "Experience", profile.experience_years.clone()),
        ("⚡", "Projects", profile.projects_completed.clone()),
        ("◎", "Education", profile.education.clone()),
        ("⌖", "Location", profile.location.clone()),
    ];

    view! {
        <section id="about" class="section-padding bg-background/30 overflow-hidden">
            <div class="container-custom">
                <div class="text-center mb-20 section-content">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "About " <span class="gradient-text">"Me"</span>
                    </h2>
                    <div class="w-24 h-1.5 gradient-bg mx-auto rounded-full mt-3"></div>
                </div>

                <div class="grid md:grid-cols-2 gap-16 items-center">
                    <div class="relative group">
                        <div class="relative z-10 rounded-xl overflow-hidden shadow-2xl aspect-square md:aspect-[4/3]">
                            {match image {
                                Some(src) => {
                                    view! {
                                        <img
                                            alt=image_alt
                                            class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                                            src=src
                                        />
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <div class="w-full h-full bg-card flex items-center justify-center">
                                            <p class="text-foreground/50">
                                                "About image URL not provided in database."
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="section-content">
                        <h3 class="text-3xl font-semibold mb-6 text-foreground/90">{headline}</h3>
                        <p class="text-foreground/70 mb-6 text-lg leading-relaxed">{paragraph1}</p>
                        <p class="text-foreground/70 mb-10 text-lg leading-relaxed">{paragraph2}</p>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-6">
                            {details
                                .into_iter()
                                .map(|(icon, title, detail)| {
                                    let detail = detail.unwrap_or_else(|| "N/A".to_string());
                                    view! {
                                        <div class="flex items-center gap-4 p-4 bg-background/50 rounded-lg shadow-sm hover:shadow-md transition-shadow duration-300">
                                            <div class="p-2 rounded-full bg-primary/10 flex items-center justify-center text-primary">
                                                {icon}
                                            </div>
                                            <div>
                                                <h4 class="font-semibold text-foreground/90 text-lg">
                                                    {title}
                                                </h4>
                                                <p class="text-foreground/60">{detail}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
