mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen_futures::spawn_local;

use crate::content::client::ContentClient;
use crate::content::{ContentError, SiteProfile};
use crate::fetch::{use_fetch, FetchState};
use crate::health;

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use toast::Toaster;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    toast::provide_toasts();

    let client = ContentClient::from_env();
    provide_context(client.clone());

    // Connectivity diagnostics run beside the profile fetch, never gating it.
    {
        let client = client.clone();
        spawn_local(async move {
            health::report_backend_reachability(&client).await;
        });
    }

    let profile = use_fetch(async move { client.site_profile().await });

    view! {
        {move || match profile.get() {
            FetchState::Idle | FetchState::Loading => view! { <StartupScreen /> }.into_any(),
            FetchState::Failed(ContentError::NotFound) => view! { <SeedGuidance /> }.into_any(),
            FetchState::Failed(err) => {
                view! { <InitError message=err.to_string() /> }.into_any()
            }
            FetchState::Ready(profile) => view! { <Portfolio profile /> }.into_any(),
        }}
    }
}

/// Everything below the profile gate. The profile is injected once here and
/// read-only for the rest of the page session.
#[component]
fn Portfolio(profile: SiteProfile) -> impl IntoView {
    let title = profile.display_name().to_string();
    provide_context(profile);

    view! {
        <Title text=title />
        <Navbar />
        <main>
            <Hero />
            <About />
            <Projects />
            <Skills />
            <Contact />
        </main>
        <Footer />
        <Toaster />
    }
}

#[component]
fn StartupScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-background">
            <div class="spinner spinner-lg"></div>
            <p class="mt-4 text-lg text-foreground/70">"Loading Portfolio Data..."</p>
        </div>
    }
}

#[component]
fn SeedGuidance() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-destructive/5 p-8">
            <h2 class="text-2xl font-bold text-destructive mb-4">"Initialization Error"</h2>
            <p class="text-destructive text-center max-w-md">
                "Personal information not found. Please set it up in your content backend."
            </p>
            <p class="text-sm text-foreground/50 mt-4">
                "Make sure the 'personal_info' table exists and contains one row."
            </p>
        </div>
    }
}

#[component]
fn InitError(message: String) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-destructive/5 p-8">
            <h2 class="text-2xl font-bold text-destructive mb-4">"Initialization Error"</h2>
            <p class="text-destructive text-center max-w-md">
                "Could not load personal information."
            </p>
            <p class="text-sm text-foreground/50 mt-4">{message}</p>
        </div>
    }
}
