use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::SiteProfile;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = expect_context::<SiteProfile>();
    let name = profile.display_name().to_string();
    let year = Utc::now().year();

    let socials: Vec<(String, &'static str, &'static str)> = [
        (profile.github_url.clone(), "GitHub", "devicon-github-plain"),
        (
            profile.linkedin_url.clone(),
            "LinkedIn",
            "devicon-linkedin-plain",
        ),
        (
            profile.twitter_url.clone(),
            "Twitter",
            "devicon-twitter-plain",
        ),
    ]
    .into_iter()
    .filter_map(|(href, label, icon)| href.map(|href| (href, label, icon)))
    .collect();

    view! {
        <footer class="bg-card/50 text-foreground/70 py-10 border-t border-border/50">
            <div class="container-custom text-center">
                {(!socials.is_empty())
                    .then(|| {
                        view! {
                            <div class="flex justify-center gap-6 mb-6">
                                {socials
                                    .into_iter()
                                    .map(|(href, label, icon)| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=label
                                                class="hover:text-primary transition-colors duration-300 text-xl"
                                            >
                                                <i class=icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })}

                <p class="text-sm">
                    "Crafted with ♥ by " <span class="font-semibold gradient-text">{name.clone()}</span>
                </p>
                <p class="text-xs mt-2 text-foreground/50">
                    {format!("© {year} {name}. All Rights Reserved.")}
                </p>
            </div>
        </footer>
    }
}
