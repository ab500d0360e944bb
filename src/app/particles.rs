use leptos::prelude::*;

use crate::starfield::{self, Pointer, STAR_COUNT, STAR_SEED};

#[component]
pub fn ParticleBackground(pointer: Signal<Pointer>) -> impl IntoView {
    let stars = starfield::generate(STAR_SEED, STAR_COUNT);

    view! {
        <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden [perspective:800px]">
            <div
                class="absolute inset-0 transition-transform duration-300 ease-out"
                style=move || format!("transform: {}", pointer.get().tilt())
            >
                <div class="animate-spin-slower absolute -inset-1/4">
                    {stars
                        .into_iter()
                        .map(|star| {
                            view! { <span class="star absolute rounded-full bg-cyan-200" style=star.style()></span> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Dot trailing the pointer on devices with a mouse.
#[component]
pub fn Cursor(pointer: Signal<Pointer>, width: Signal<f64>, height: Signal<f64>) -> impl IntoView {
    let style = move || {
        let (left, top) = pointer.get().cursor_origin(width.get(), height.get());
        format!("transform: translate3d({left:.1}px, {top:.1}px, 0)")
    };

    view! {
        <div
            class="custom-cursor pointer-events-none fixed left-0 top-0 z-[60] hidden h-5 w-5 rounded-full border-2 border-cyan-400 mix-blend-difference md:block"
            style=style
        ></div>
    }
}
