use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::typed_text::use_typed_text;
use crate::{
    config::SiteConfig,
    content::{FLOATING_TECH, HERO_SOCIALS},
    sections::{parallax_offset, SectionId},
};

#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let typed = use_typed_text(config.phrases.clone(), config.typing).unwrap_or_else(|e| {
        log::error!("typing headline disabled: {e}");
        signal(String::new()).0
    });
    let (_, scroll_y) = use_window_scroll();
    let parallax = move || format!("transform: translateY({}px)", parallax_offset(scroll_y.get()));

    view! {
        <section
            id=SectionId::Home.id()
            class="relative flex min-h-screen items-center overflow-hidden px-6 pt-24"
            style=parallax
        >
            <div class="pointer-events-none absolute inset-0">
                {(0..8usize)
                    .map(|i| {
                        let style = format!(
                            "left: {}%; top: {}%; animation-delay: {}s",
                            10 + i * 12,
                            20 + (i % 3) * 20,
                            i as f32 * 0.5,
                        );
                        view! { <div class=format!("floating-shape shape-{}", i % 3) style=style></div> }
                    })
                    .collect_view()}
            </div>

            <div class="mx-auto grid w-full max-w-7xl items-center gap-12 lg:grid-cols-2">
                <div class="space-y-6 animate-rise">
                    <div class="text-lg text-cyan-300">"👋 Hello, I'm"</div>
                    <h1 class="text-5xl font-bold lg:text-7xl">
                        <span class="gradient-text">{config.owner_name.clone()}</span>
                    </h1>
                    <div class="h-10 text-2xl font-medium text-slate-200 lg:text-3xl">
                        <span>{typed}</span>
                        <span class="typing-caret">"|"</span>
                    </div>
                    <p class="max-w-xl text-lg leading-relaxed text-slate-400">
                        "Passionate about creating exceptional digital experiences with modern technologies. I turn ideas into reality through clean code and innovative solutions."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href=SectionId::Projects.href()
                            class="cta-button rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500 px-8 py-3 font-semibold text-black transition-transform hover:scale-105 active:scale-95"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="/cv.pdf"
                            download="cv.pdf"
                            class="rounded-full border border-cyan-400/50 px-8 py-3 font-semibold text-cyan-300 transition-transform hover:scale-105 active:scale-95"
                        >
                            "⬇ Download CV"
                        </a>
                    </div>
                    <div class="flex gap-4">
                        {HERO_SOCIALS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.name
                                        class="social-link text-2xl transition-transform hover:-translate-y-1 hover:scale-110"
                                        style=format!("--hover-color: {}", social.color)
                                    >
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="relative hidden h-96 items-center justify-center lg:flex">
                    <div class="avatar-glow absolute h-72 w-72 rounded-full"></div>
                    <div class="relative flex h-64 w-64 flex-col justify-center gap-3 rounded-3xl border border-cyan-400/30 bg-black/40 p-8 backdrop-blur">
                        {(0..4)
                            .map(|_| view! { <div class="code-line h-2 rounded bg-cyan-400/40"></div> })
                            .collect_view()}
                    </div>
                    {FLOATING_TECH
                        .iter()
                        .enumerate()
                        .map(|(i, tech)| {
                            view! {
                                <div class=format!(
                                    "floating-element tech-{} absolute rounded-full bg-black/60 px-4 py-2 text-sm text-cyan-200",
                                    i + 1,
                                )>{*tech}</div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <a
                href=SectionId::About.href()
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-center text-sm text-slate-400"
            >
                <div>"Scroll Down"</div>
                <div class="animate-bounce text-2xl">"⌄"</div>
            </a>
        </section>
    }
}
