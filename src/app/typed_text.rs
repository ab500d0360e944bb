use std::time::Duration;

use leptos::prelude::*;

use crate::{
    config::ConfigError,
    typing::{PendingTick, Scheduler, TypingCycler, TypingDelays, TypingTimer},
};

/// Schedules ticks with `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, tick: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        set_timeout_with_handle(tick, delay)
            .map_err(|e| log::error!("couldn't schedule typing tick: {e:?}"))
            .ok()
    }
}

impl PendingTick for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Text of a typing headline cycling through `phrases`.
///
/// The timer lives in a value owned by the calling component and is disposed
/// with it, which cancels the pending tick.
pub fn use_typed_text(
    phrases: Vec<String>,
    delays: TypingDelays,
) -> Result<ReadSignal<String>, ConfigError> {
    let cycler = TypingCycler::new(phrases, delays)?;
    let (text, set_text) = signal(cycler.visible().to_string());
    let timer = StoredValue::new_local(None::<TypingTimer<BrowserScheduler>>);

    // effects only run in the browser, so SSR renders the empty first frame
    Effect::new(move |_| {
        let started = TypingTimer::start(cycler.clone(), BrowserScheduler, move |visible| {
            set_text.set(visible.to_string())
        });
        timer.set_value(Some(started));
    });
    on_cleanup(move || timer.dispose());

    Ok(text)
}
