use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::reveal_once;
use crate::{
    content::{STATS, VALUES},
    sections::SectionId,
};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section id=SectionId::About.id() node_ref=section_ref class="px-6 py-24">
            <div class="mx-auto max-w-7xl reveal" class:revealed=revealed>
                <div class="mb-16 text-center">
                    <h2 class="text-4xl font-bold lg:text-5xl">
                        "About " <span class="gradient-text">"Me"</span>
                    </h2>
                    <p class="mt-4 text-lg text-slate-400">
                        "Crafting digital experiences with passion and precision"
                    </p>
                </div>

                <div class="grid items-start gap-12 lg:grid-cols-2">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold text-cyan-300">"My Journey"</h3>
                        <p class="leading-relaxed text-slate-300">
                            "I'm a full stack developer who loves turning ideas into fast, accessible products. I started with plain "
                            <strong>"HTML and CSS"</strong>
                            ", picked up JavaScript to make pages come alive, and now build complete applications on the "
                            <strong>"MERN stack"</strong> "."
                        </p>
                        <p class="leading-relaxed text-slate-300">
                            "Every project is a chance to learn something new, whether that's a cleaner API design, a smoother animation or a better way to ship."
                        </p>
                        <div class="rounded-xl border-l-4 border-fuchsia-500 bg-white/5 p-4">
                            <p class="text-sm font-medium text-fuchsia-300">
                                "🎯 Currently open to freelance work and full time roles"
                            </p>
                        </div>
                        <a
                            href=SectionId::Contact.href()
                            class="inline-block rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500 px-8 py-3 font-semibold text-black transition-transform hover:scale-105"
                        >
                            "Let's Work Together"
                        </a>
                    </div>

                    <div class="grid gap-6 sm:grid-cols-2">
                        {VALUES
                            .iter()
                            .enumerate()
                            .map(|(i, value)| {
                                view! {
                                    <div
                                        class="value-card rounded-2xl border border-white/10 bg-white/5 p-6 transition-transform"
                                        class=("-translate-y-2", move || hovered.get() == Some(i))
                                        style=move || {
                                            if hovered.get() == Some(i) {
                                                format!("border-color: {}", value.color)
                                            } else {
                                                String::new()
                                            }
                                        }
                                        on:mouseenter=move |_| set_hovered(Some(i))
                                        on:mouseleave=move |_| set_hovered(None)
                                    >
                                        <div class="mb-3 text-3xl">{value.icon}</div>
                                        <h4 class="mb-2 font-semibold" style=format!("color: {}", value.color)>
                                            {value.title}
                                        </h4>
                                        <p class="text-sm text-slate-400">{value.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="mt-16 grid grid-cols-2 gap-6 lg:grid-cols-4">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="rounded-2xl bg-white/5 p-6 text-center">
                                    <div class="text-3xl">{stat.icon}</div>
                                    <div class="gradient-text mt-2 text-3xl font-bold">{stat.number}</div>
                                    <div class="mt-1 text-sm text-slate-400">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
