use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::sections::{SectionBounds, SectionId, SectionTracker};

/// Current viewport bounds of every section present in the document.
fn section_bounds() -> Vec<(SectionId, SectionBounds)> {
    SectionId::ALL
        .into_iter()
        .filter_map(|id| {
            let rect = document().get_element_by_id(id.id())?.get_bounding_client_rect();
            Some((
                id,
                SectionBounds {
                    top: rect.top(),
                    bottom: rect.bottom(),
                },
            ))
        })
        .collect()
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (tracker, set_tracker) = signal(SectionTracker::default());
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    Effect::watch(
        move || scroll_y.get(),
        move |scroll_y, _, _| {
            let mut next = tracker.get_untracked();
            if next.update(*scroll_y, section_bounds()) {
                set_tracker(next);
            }
        },
        true,
    );

    let is_active = move |id: SectionId| tracker.with(|t| t.active() == id);
    let nav_class = move || {
        if tracker.with(SectionTracker::is_scrolled) {
            "fixed inset-x-0 top-0 z-40 bg-black/70 py-3 shadow-lg backdrop-blur transition-all"
        } else {
            "fixed inset-x-0 top-0 z-40 bg-transparent py-6 transition-all"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="mx-auto flex max-w-7xl items-center justify-between px-6">
                <a href=SectionId::Home.href() class="text-2xl font-bold">
                    <span class="gradient-text">"<Dev />"</span>
                </a>
                <ul class="hidden gap-2 md:flex">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <li>
                                    <a
                                        href=id.href()
                                        class="rounded-full px-4 py-2 text-sm transition-colors hover:text-cyan-300"
                                        class=("bg-cyan-400/10", move || is_active(id))
                                        class=("text-cyan-300", move || is_active(id))
                                    >
                                        <span class="mr-1">{id.icon()}</span>
                                        {id.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="text-2xl md:hidden"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="fixed inset-0 top-16 z-30 flex flex-col items-center justify-center gap-6 bg-black/90 backdrop-blur md:hidden">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <a
                                    href=id.href()
                                    class="text-2xl"
                                    class=("text-cyan-300", move || is_active(id))
                                    on:click=move |_| set_menu_open(false)
                                >
                                    <span class="mr-2">{id.icon()}</span>
                                    {id.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>

        <a
            href=SectionId::Contact.href()
            class="fixed bottom-8 right-8 z-40 flex items-center gap-2 rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500 px-5 py-3 font-semibold text-black shadow-lg transition-transform hover:scale-105"
        >
            <span>"💬"</span>
            <span class="hidden sm:inline">"Let's Talk"</span>
        </a>
    }
}
