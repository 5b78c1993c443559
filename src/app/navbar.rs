use codee::string::JsonSerdeWasmCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;
use leptos_use::use_window_scroll;
use wasm_bindgen::JsCast;

use crate::content::SiteProfile;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#contact", "Contact"),
];

/// Anchor whose section currently sits at the top of the viewport.
fn active_anchor(scroll_y: f64) -> &'static str {
    let mut current = "#home";
    for (href, _) in NAV_LINKS {
        let id = &href[1..];
        let Some(element) = document().get_element_by_id(id) else {
            continue;
        };
        if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
            if f64::from(element.offset_top()) <= scroll_y + 100.0 {
                current = href;
            }
        }
    }
    current
}

#[component]
pub fn Navbar() -> impl IntoView {
    let profile = expect_context::<SiteProfile>();
    let logo = profile.logo_name().to_string();

    let (open, set_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > 50.0);
    let active = Memo::new(move |_| active_anchor(scroll_y.get()));

    let (dark_mode, set_dark_mode, _) = use_local_storage::<bool, JsonSerdeWasmCodec>("dark_mode");
    Effect::new(move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let result = if dark_mode.get() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if let Err(err) = result {
            log::warn!("could not toggle theme class: {err:?}");
        }
    });

    let link_class = move |href: &'static str| {
        if active.get() == href {
            "nav-link nav-link-active font-semibold"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class=move || {
            let surface = if scrolled.get() || open.get() {
                "shadow-lg glassmorphic"
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 left-0 right-0 z-40 transition-all duration-300 {surface}")
        }>
            <div class="container-custom flex items-center justify-between h-20">
                <a href="#home" class="text-2xl font-bold gradient-text flex items-center">
                    <span class="mr-2 text-primary">"</>"</span>
                    {logo}
                </a>

                <div class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class=move || format!("{} text-lg", link_class(href))>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle dark_mode set_dark_mode />
                </div>

                <div class="md:hidden flex items-center">
                    <ThemeToggle dark_mode set_dark_mode />
                    <button
                        class="p-2 text-primary text-2xl"
                        aria-label="Toggle menu"
                        on:click=move |_| set_open.update(|open| *open = !*open)
                    >
                        {move || if open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="md:hidden absolute top-20 left-0 right-0 bg-background/95 backdrop-blur-md shadow-xl pb-6 border-t border-border/50">
                                <ul class="flex flex-col items-center space-y-6 pt-6">
                                    {NAV_LINKS
                                        .into_iter()
                                        .map(|(href, label)| {
                                            view! {
                                                <li>
                                                    <a
                                                        href=href
                                                        class=move || format!("{} text-xl", link_class(href))
                                                        on:click=move |_| set_open.set(false)
                                                    >
                                                        {label}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn ThemeToggle(dark_mode: Signal<bool>, set_dark_mode: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            class="p-2 mr-2 rounded-full hover:bg-foreground/10 transition-colors text-xl"
            aria-label="Toggle dark mode"
            on:click=move |_| set_dark_mode.update(|dark| *dark = !*dark)
        >
            {move || if dark_mode.get() { "☀" } else { "☾" }}
        </button>
    }
}
