mod about;
mod contact;
mod hero;
mod loader;
mod navigation;
mod particles;
mod projects;
mod skills;
mod typed_text;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{
    use_mouse_with_options, use_window_size, UseMouseCoordType, UseMouseOptions, UseMouseReturn,
    UseWindowSizeReturn,
};

use crate::{config::SiteConfig, starfield::Pointer};

use about::About;
use contact::Contact;
use hero::Hero;
use loader::Loader;
use navigation::Navigation;
use particles::{Cursor, ParticleBackground};
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Portfolio of a full stack developer: projects, skills and contact."
                />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-[#0c0c0c] text-slate-100 font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::from_env();
    if let Err(e) = config.validate() {
        log::error!("invalid site configuration: {e}");
    }
    provide_context(config);

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Splash screen first, then the whole single-page portfolio.
#[component]
fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (loading, set_loading) = signal(true);

    let splash = config.splash_duration;
    Effect::new(move |_| {
        match set_timeout_with_handle(move || set_loading(false), splash) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => {
                log::warn!("couldn't schedule splash timeout: {e:?}");
                set_loading(false);
            }
        }
    });

    let UseMouseReturn { x, y, .. } =
        use_mouse_with_options(UseMouseOptions::default().coord_type(UseMouseCoordType::<std::convert::Infallible>::Client));
    let UseWindowSizeReturn { width, height } = use_window_size();
    let pointer = Signal::derive(move || {
        Pointer::from_client(x.get(), y.get(), width.get(), height.get())
    });

    view! {
        <Title text="Home" />
        <Show when=move || !loading.get() fallback=|| view! { <Loader /> }>
            <div class="relative min-h-screen animate-fade-in">
                <ParticleBackground pointer />
                <Navigation />
                <main>
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <Contact />
                </main>
                <Footer />
                <Cursor pointer width height />
            </div>
        </Show>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let stamp = config.build_stamp();
    view! {
        <footer class="py-8 text-center text-sm text-slate-500">
            <p>
                "© " {config.owner_name} " · Built with Rust and Leptos"
                {(!stamp.is_empty()).then(|| format!(" · Updated {stamp}"))}
            </p>
        </footer>
    }
}

/// Flips to `true` the first time `visible` does and then stays there.
pub(crate) fn reveal_once(visible: Signal<bool>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    Effect::watch(
        move || visible.get(),
        move |is_visible, _, _| {
            if *is_visible {
                set_revealed(true);
            }
        },
        true,
    );
    revealed
}
