use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::toast::use_toasts;
use crate::content::client::ContentClient;
use crate::content::{MessageDraft, SiteProfile};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section-padding bg-background">
            <div class="container-custom">
                <div class="text-center mb-20 section-content">
                    <h2 class="text-4xl md:text-5xl font-bold mb-4">
                        "Let's " <span class="gradient-text">"Connect"</span>
                    </h2>
                    <p class="text-foreground/70 max-w-2xl mx-auto text-lg">
                        "Have a project, an idea, or just want to say hi? I'd love to hear from you."
                    </p>
                    <div class="w-24 h-1.5 gradient-bg mx-auto mt-6 rounded-full"></div>
                </div>

                <div class="grid lg:grid-cols-5 gap-12 items-start">
                    <div class="lg:col-span-2">
                        <ContactInfo />
                    </div>
                    <div class="lg:col-span-3">
                        <ContactForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    let profile = expect_context::<SiteProfile>();

    let items: Vec<(&'static str, &'static str, String, Option<String>)> = vec![
        (
            "⌖",
            "Location",
            profile
                .location
                .clone()
                .unwrap_or_else(|| "Not specified".to_string()),
            None,
        ),
        (
            "✉",
            "Email",
            profile
                .email
                .clone()
                .unwrap_or_else(|| "Not specified".to_string()),
            profile.mailto(),
        ),
        (
            "☎",
            "Phone",
            profile
                .phone
                .clone()
                .unwrap_or_else(|| "Not specified".to_string()),
            profile.tel(),
        ),
    ];

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
        (
            profile.instagram_url.clone(),
            "Instagram",
            "extra-instagram",
        ),
    ]
    .into_iter()
    .filter_map(|(href, label, icon)| href.map(|href| (href, label, icon)))
    .collect();

    let resume_url = profile.resume_url().map(str::to_string);

    view! {
        <div class="bg-card/80 rounded-xl shadow-xl p-8 md:p-10 border border-border/50 h-full flex flex-col">
            <h3 class="text-3xl font-semibold mb-8 text-center gradient-text">"Contact Details"</h3>
            <div class="space-y-8">
                {items
                    .into_iter()
                    .map(|(icon, title, details, href)| {
                        view! {
                            <div class="flex items-center gap-5 p-4 rounded-lg hover:bg-background/50 transition-colors duration-300">
                                <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center shrink-0 text-primary text-xl">
                                    {icon}
                                </div>
                                <div>
                                    <h4 class="font-semibold text-lg text-foreground/90">{title}</h4>
                                    {match href {
                                        Some(href) => {
                                            view! {
                                                <a
                                                    href=href
                                                    class="text-foreground/70 hover:text-primary transition-colors"
                                                >
                                                    {details}
                                                </a>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! { <p class="text-foreground/70">{details}</p> }
                                                .into_any()
                                        }
                                    }}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            {(!socials.is_empty())
                .then(|| {
                    view! {
                        <div class="mt-10 pt-8 border-t border-border/50">
                            <h4 class="font-semibold text-xl mb-6 text-center text-foreground/90">
                                "Follow Me Online"
                            </h4>
                            <div class="flex flex-wrap justify-center gap-5">
                                {socials
                                    .into_iter()
                                    .map(|(href, label, icon)| {
                                        view! {
                                            <a
                                                href=href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=label
                                                class="w-12 h-12 rounded-full bg-background/70 flex items-center justify-center text-foreground/60 shadow-md hover:shadow-lg hover:text-primary transition-all duration-300 text-xl"
                                            >
                                                <i class=icon></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })}

            {resume_url
                .map(|href| {
                    view! {
                        <div class="mt-auto pt-10">
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn-primary w-full block text-center text-lg py-3.5"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    }
                })}
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let client = expect_context::<ContentClient>();
    let toasts = use_toasts();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let draft = MessageDraft {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        set_submitting.set(true);
        let client = client.clone();
        spawn_local(async move {
            match client.send_message(&draft).await {
                Ok(()) => {
                    toasts.success(
                        "Message Sent Successfully!",
                        "Thank you for reaching out. I'll get back to you as soon as possible.",
                    );
                    // entered values are only discarded on success
                    let _ = set_name.try_set(String::new());
                    let _ = set_email.try_set(String::new());
                    let _ = set_subject.try_set(String::new());
                    let _ = set_message.try_set(String::new());
                }
                Err(err) => {
                    toasts.error("Oops! Message Failed", err.to_string());
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <div class="bg-card/80 rounded-xl shadow-xl p-8 md:p-10 border border-border/50">
            <h3 class="text-3xl font-semibold mb-8 text-center gradient-text">"Send a Message"</h3>
            <form class="space-y-6" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-6">
                    <input
                        id="name"
                        class="form-input"
                        placeholder="Your Name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        id="email"
                        type="email"
                        class="form-input"
                        placeholder="Your Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <input
                    id="subject"
                    class="form-input"
                    placeholder="Subject"
                    required
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
                <textarea
                    id="message"
                    class="form-input resize-none"
                    placeholder="Your Message..."
                    rows="5"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>

                <button
                    type="submit"
                    class="btn-primary w-full text-lg py-3.5"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
