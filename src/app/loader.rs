use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::{
    config::{millis, SiteConfig},
    loader::{LoaderProgress, LoadingCaption},
};

/// Splash screen shown while the page "boots".
#[component]
pub fn Loader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (progress, set_progress) = signal(LoaderProgress::new(config.progress_step));
    let (caption, set_caption) = signal(LoadingCaption::default());

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            set_progress.update(|p| {
                p.advance();
            })
        },
        millis(config.progress_interval),
    );
    Effect::new(move |_| {
        if progress.with(LoaderProgress::is_complete) {
            pause();
        }
    });

    use_interval_fn(
        move || set_caption.update(|c| *c = c.next()),
        millis(config.loading_text_interval),
    );

    let percent = move || progress.with(LoaderProgress::percent);

    view! {
        <div class="fixed inset-0 z-50 flex flex-col items-center justify-center bg-[#0c0c0c]">
            <div class="relative mb-10 h-32 w-32">
                <div class="absolute inset-0 animate-spin rounded-full border-4 border-cyan-400/20 border-t-cyan-400"></div>
                <div class="animate-spin-slow absolute inset-4 rounded-full border-4 border-fuchsia-500/20 border-b-fuchsia-500"></div>
                <div class="absolute inset-0 flex items-center justify-center text-3xl">"💻"</div>
            </div>
            <h1 class="gradient-text mb-6 text-3xl font-bold">{config.owner_name.clone()}</h1>
            <div class="h-2 w-64 overflow-hidden rounded-full bg-white/10">
                <div
                    class="h-full rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500 transition-all"
                    style=move || format!("width: {}%", percent())
                ></div>
            </div>
            <div class="mt-3 text-sm text-slate-400">{move || format!("{}%", percent())}</div>
            <div class="mt-2 animate-pulse text-sm text-cyan-300">
                {move || caption.get().text()}
            </div>
        </div>
    }
}
