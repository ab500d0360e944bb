use leptos::{either::Either, html, prelude::*};
use leptos_use::use_element_visibility;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::reveal_once;
use crate::{
    content::{self, Project},
    gallery::{ProjectFilter, PROJECT_CATEGORIES},
    sections::SectionId,
};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    view! {
        <section id=SectionId::Projects.id() node_ref=section_ref class="px-6 py-24">
            <div class="mx-auto max-w-7xl reveal" class:revealed=revealed>
                <div class="mb-12 text-center">
                    <h2 class="text-4xl font-bold lg:text-5xl">
                        "My " <span class="gradient-text">"Projects"</span>
                    </h2>
                    <p class="mt-4 text-lg text-slate-400">
                        "A showcase of my work across different technologies"
                    </p>
                </div>
                {match content::projects() {
                    Ok(projects) => Either::Left(view! { <Gallery projects /> }),
                    Err(e) => {
                        log::error!("projects unavailable: {e}");
                        Either::Right(
                            view! { <p class="text-center text-red-400">"Projects couldn't be loaded."</p> },
                        )
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn Gallery(projects: &'static [Project]) -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::All);

    #[cfg(feature = "hydrate")]
    let (stored_filter, set_stored_filter, _) =
        use_local_storage::<ProjectFilter, JsonSerdeWasmCodec>("project_filter");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| set_filter(stored_filter.get_untracked().sanitized()),
        true,
    );

    let select = move |next: ProjectFilter| {
        #[cfg(feature = "hydrate")]
        set_stored_filter.set(next.clone());
        set_filter(next);
    };

    let visible = Memo::new(move |_| filter.with(|f| f.apply(projects)));

    view! {
        <div class="mb-6 flex flex-wrap justify-center gap-3">
            {PROJECT_CATEGORIES
                .iter()
                .map(|category| {
                    let is_selected = move || filter.with(|f| f.id() == category.id);
                    view! {
                        <button
                            class="rounded-full border border-white/10 px-5 py-2 transition-all hover:scale-105"
                            class=("bg-gradient-to-r", is_selected)
                            class=("from-cyan-400", is_selected)
                            class=("to-fuchsia-500", is_selected)
                            class=("text-black", is_selected)
                            on:click=move |_| select(ProjectFilter::from_id(category.id))
                        >
                            <span class="mr-2">{category.icon}</span>
                            {category.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        <p class="mb-10 text-center text-sm text-slate-400">
            {move || filter.with(|f| f.count_label(visible.with(Vec::len)))}
        </p>
        <div class="grid gap-8 md:grid-cols-2 lg:grid-cols-3">
            {move || {
                let shown = visible.get();
                if shown.is_empty() {
                    Either::Left(
                        view! {
                            <div class="col-span-full py-16 text-center text-slate-400">
                                <div class="mb-4 text-5xl">"🔍"</div>
                                <p>"No projects in this category yet."</p>
                            </div>
                        },
                    )
                } else {
                    Either::Right(
                        shown
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view(),
                    )
                }
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="project-card group overflow-hidden rounded-2xl border border-white/10 bg-white/5 transition-transform hover:-translate-y-2">
            <div class="relative h-48 overflow-hidden">
                <img
                    src=project.image_url()
                    alt=project.title.clone()
                    loading="lazy"
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="absolute left-3 top-3 rounded-full bg-fuchsia-500 px-3 py-1 text-xs font-semibold text-white">
                                "⭐ Featured"
                            </span>
                        }
                    })}
            </div>
            <div class="space-y-4 p-6">
                <h3 class="text-xl font-semibold">{project.title.clone()}</h3>
                <p class="text-sm leading-relaxed text-slate-400">{project.description.clone()}</p>
                <div class="flex justify-between text-xs text-slate-300">
                    <span>{format!("⚡ {}%", project.stats.performance)}</span>
                    <span>{format!("👥 {}", project.stats.users)}</span>
                    <span>{format!("⭐ {:.1}", project.stats.rating)}</span>
                </div>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-full bg-cyan-400/10 px-3 py-1 text-xs text-cyan-300">
                                    {tech.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-3 pt-2">
                    {project
                        .live_demo_url()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500 py-2 text-center text-sm font-semibold text-black"
                                >
                                    "🔗 Live Demo"
                                </a>
                            }
                        })}
                    <a
                        href=project.source_code.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 rounded-full border border-white/20 py-2 text-center text-sm"
                    >
                        <i class="devicon-github-original mr-1"></i>
                        "Code"
                    </a>
                </div>
            </div>
        </article>
    }
}
