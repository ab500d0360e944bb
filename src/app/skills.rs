use leptos::{either::Either, html, prelude::*};
use leptos_use::use_element_visibility;

use super::reveal_once;
use crate::{
    content::{self, SkillCategory, ACHIEVEMENTS, TECH_ORBIT},
    sections::SectionId,
};

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    view! {
        <section id=SectionId::Skills.id() node_ref=section_ref class="px-6 py-24">
            <div class="mx-auto max-w-7xl reveal" class:revealed=revealed>
                <div class="mb-16 text-center">
                    <h2 class="text-4xl font-bold lg:text-5xl">
                        "My " <span class="gradient-text">"Skills"</span>
                    </h2>
                    <p class="mt-4 text-lg text-slate-400">
                        "Technologies I work with to bring ideas to life"
                    </p>
                </div>
                {match content::skill_categories() {
                    Ok(categories) => Either::Left(view! { <SkillTabs categories /> }),
                    Err(e) => {
                        log::error!("skills unavailable: {e}");
                        Either::Right(
                            view! { <p class="text-center text-red-400">"Skills couldn't be loaded."</p> },
                        )
                    }
                }}
                <Achievements />
                <TechOrbit />
            </div>
        </section>
    }
}

#[component]
fn SkillTabs(categories: &'static [SkillCategory]) -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    view! {
        <div class="mb-12 flex flex-wrap justify-center gap-3">
            {categories
                .iter()
                .enumerate()
                .map(|(i, category)| {
                    view! {
                        <button
                            class="rounded-full border border-white/10 px-5 py-2 transition-all hover:scale-105"
                            style=move || {
                                if selected.get() == i {
                                    format!("background: {}; color: #000", category.color)
                                } else {
                                    String::new()
                                }
                            }
                            on:click=move |_| set_selected(i)
                        >
                            <span class="mr-2">{category.icon.clone()}</span>
                            {category.title.clone()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
            {move || {
                categories
                    .get(selected.get())
                    .map(|category| {
                        category
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="skill-card rounded-2xl border border-white/10 bg-white/5 p-6 transition-transform hover:-translate-y-2">
                                        <div class="mb-3 flex items-center justify-between">
                                            <span class="text-3xl">{skill.icon.clone()}</span>
                                            <span class="text-sm font-semibold" style=format!("color: {}", category.color)>
                                                {format!("{}%", skill.level)}
                                            </span>
                                        </div>
                                        <h4 class="font-semibold">{skill.name.clone()}</h4>
                                        <p class="mb-4 text-sm text-slate-400">{skill.description.clone()}</p>
                                        <div class="h-2 overflow-hidden rounded-full bg-white/10">
                                            <div
                                                class="h-full rounded-full transition-all duration-1000"
                                                style=format!(
                                                    "width: {}%; background: {}",
                                                    skill.level.min(100),
                                                    category.color,
                                                )
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}

#[component]
fn Achievements() -> impl IntoView {
    view! {
        <div class="mt-20">
            <h3 class="mb-8 text-center text-2xl font-semibold">"🏆 Achievements"</h3>
            <div class="grid gap-6 md:grid-cols-2">
                {ACHIEVEMENTS
                    .iter()
                    .map(|achievement| {
                        view! {
                            <div class="rounded-2xl bg-white/5 p-6">
                                <div class="flex items-center gap-4">
                                    <span class="text-3xl">{achievement.icon}</span>
                                    <div class="flex-1">
                                        <h4 class="font-semibold">{achievement.title}</h4>
                                        <p class="text-sm text-slate-400">{achievement.description}</p>
                                    </div>
                                    <span class="font-bold text-cyan-300">
                                        {format!("{}%", achievement.progress)}
                                    </span>
                                </div>
                                <div class="mt-4 h-2 overflow-hidden rounded-full bg-white/10">
                                    <div
                                        class="h-full rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500"
                                        style=format!("width: {}%", achievement.progress)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TechOrbit() -> impl IntoView {
    let step = 360.0 / TECH_ORBIT.len() as f64;
    view! {
        <div class="relative mx-auto mt-20 hidden h-80 w-80 md:block">
            <div class="absolute inset-1/3 flex items-center justify-center rounded-full bg-gradient-to-br from-cyan-400 to-fuchsia-500 text-4xl">
                "💻"
            </div>
            <div class="animate-spin-slow absolute inset-0">
                {TECH_ORBIT
                    .iter()
                    .enumerate()
                    .map(|(i, icon)| {
                        let style = format!(
                            "transform: rotate({0}deg) translate(140px) rotate(-{0}deg)",
                            step * i as f64,
                        );
                        view! {
                            <div class="absolute left-1/2 top-1/2 -ml-5 -mt-5 flex h-10 w-10 items-center justify-center rounded-full bg-black/60 text-xl" style=style>
                                {*icon}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
