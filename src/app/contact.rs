use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    html,
    prelude::*,
};
use leptos_use::{use_element_visibility, use_timeout_fn, UseTimeoutFnReturn};

use super::reveal_once;
use crate::{
    config::{millis, SiteConfig},
    contact::{ContactError, ContactForm, Field, SubmitStatus},
    content::{CONTACT_DETAILS, HERO_SOCIALS},
    sections::SectionId,
};

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(use_element_visibility(section_ref));

    let form = RwSignal::new(ContactForm::default());
    let (status, set_status) = signal(SubmitStatus::Idle);
    let (error, set_error) = signal(None::<String>);
    let (focused, set_focused) = signal(None::<Field>);

    let UseTimeoutFnReturn {
        start: schedule_reset,
        stop: cancel_reset,
        ..
    } = use_timeout_fn(
        move |_: ()| set_status.update(|s| *s = s.after_reset()),
        millis(config.status_reset) as f64,
    );
    let finish = move |result: Result<(), ContactError>| {
        set_status(SubmitStatus::from_result(&result));
        match result {
            Ok(()) => {
                form.set(ContactForm::default());
                set_error(None);
            }
            Err(e) => {
                log::warn!("contact form not sent: {e}");
                set_error(Some(e.to_string()));
            }
        }
        schedule_reset(());
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !status.get_untracked().can_submit() {
            return;
        }
        let snapshot = form.get_untracked();
        if let Err(e) = snapshot.validate() {
            finish(Err(e));
            return;
        }
        // a reset left over from the previous attempt must not fire mid-request
        cancel_reset();
        set_error(None);
        set_status(SubmitStatus::Submitting);
        send(&config, snapshot, finish.clone());
    };

    view! {
        <section id=SectionId::Contact.id() node_ref=section_ref class="px-6 py-24">
            <div class="mx-auto max-w-7xl reveal" class:revealed=revealed>
                <div class="mb-16 text-center">
                    <h2 class="text-4xl font-bold lg:text-5xl">
                        "Get In " <span class="gradient-text">"Touch"</span>
                    </h2>
                    <p class="mt-4 text-lg text-slate-400">
                        "Have a project in mind? Let's build something amazing together"
                    </p>
                </div>

                <div class="grid gap-12 lg:grid-cols-2">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold text-cyan-300">"Let's Talk 💬"</h3>
                        <p class="leading-relaxed text-slate-300">
                            "I'm always happy to hear about new projects, creative ideas or opportunities to be part of your vision."
                        </p>
                        {CONTACT_DETAILS
                            .iter()
                            .map(|(icon, text)| {
                                view! {
                                    <div class="flex items-center gap-4 rounded-xl bg-white/5 p-4">
                                        <span class="text-2xl">{*icon}</span>
                                        <span class="text-slate-300">{*text}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="flex gap-4 pt-2">
                            {HERO_SOCIALS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.name
                                            class="flex h-12 w-12 items-center justify-center rounded-full bg-white/5 text-2xl transition-transform hover:scale-110"
                                        >
                                            <i class=social.icon></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <form class="space-y-6 rounded-2xl border border-white/10 bg-white/5 p-8" on:submit=on_submit>
                        {Field::ALL
                            .into_iter()
                            .map(|field| view! { <FormField field form focused set_focused /> })
                            .collect_view()}
                        <button
                            type="submit"
                            disabled=move || status.get().is_busy()
                            class="w-full rounded-full bg-gradient-to-r from-cyan-400 to-fuchsia-500 py-3 font-semibold text-black transition-transform hover:scale-[1.02] disabled:opacity-60"
                        >
                            <span class="mr-2">{move || status.get().button_icon()}</span>
                            {move || status.get().button_label()}
                        </button>
                        {move || {
                            match status.get() {
                                SubmitStatus::Success => {
                                    Some(
                                        view! {
                                            <p class="text-center text-emerald-400">
                                                "🎉 Thanks! Your message is on its way."
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                                SubmitStatus::Error => {
                                    Some(
                                        view! {
                                            <p class="text-center text-red-400">
                                                "❌ " {error.get().unwrap_or_default()}
                                            </p>
                                        }
                                            .into_any(),
                                    )
                                }
                                SubmitStatus::Idle | SubmitStatus::Submitting => None,
                            }
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    form: RwSignal<ContactForm>,
    focused: ReadSignal<Option<Field>>,
    set_focused: WriteSignal<Option<Field>>,
) -> impl IntoView {
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));
    let is_focused = move || focused.get() == Some(field);
    let class = "w-full rounded-xl border border-white/10 bg-black/40 px-4 py-3 outline-none transition-colors focus:border-cyan-400";

    view! {
        <label class="block">
            <span class="mb-2 block text-sm" class=("text-cyan-300", is_focused)>
                {field.label()}
            </span>
            {match field {
                Field::Message => {
                    Either::Left(
                        view! {
                            <textarea
                                name=field.name()
                                rows="5"
                                class=class
                                prop:value=value
                                on:input=on_input
                                on:focus=move |_| set_focused(Some(field))
                                on:blur=move |_| set_focused(None)
                            ></textarea>
                        },
                    )
                }
                _ => {
                    Either::Right(
                        view! {
                            <input
                                type=if field == Field::Email { "email" } else { "text" }
                                name=field.name()
                                class=class
                                prop:value=value
                                on:input=on_input
                                on:focus=move |_| set_focused(Some(field))
                                on:blur=move |_| set_focused(None)
                            />
                        },
                    )
                }
            }}
        </label>
    }
}

#[cfg(feature = "hydrate")]
fn send(
    config: &SiteConfig,
    form: ContactForm,
    finish: impl FnOnce(Result<(), ContactError>) + 'static,
) {
    let endpoint = config.form_endpoint.clone();
    let access_key = config.form_access_key.clone();
    leptos::task::spawn_local(async move {
        finish(crate::contact::submit(&endpoint, access_key.as_deref(), &form).await);
    });
}

#[cfg(not(feature = "hydrate"))]
fn send(
    _config: &SiteConfig,
    _form: ContactForm,
    finish: impl FnOnce(Result<(), ContactError>) + 'static,
) {
    finish(Err(ContactError::Transport(
        "messages can only be sent from the browser".to_string(),
    )));
}
