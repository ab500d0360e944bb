//! Typed-headline cycler.
//!
//! [`TypingCycler`] is the pure state machine that types a phrase out one
//! character at a time, holds it, deletes it and moves on to the next phrase.
//! [`TypingTimer`] drives it through a [`Scheduler`], owning the single pending
//! tick so that dropping the timer is enough to stop the animation.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelays {
    pub type_delay: Duration,
    pub pause_delay: Duration,
    pub delete_delay: Duration,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            pause_delay: Duration::from_millis(2000),
            delete_delay: Duration::from_millis(50),
        }
    }
}

impl TypingDelays {
    pub fn uniform(delay: Duration) -> Self {
        Self {
            type_delay: delay,
            pause_delay: delay,
            delete_delay: delay,
        }
    }

    /// Delay before the tick that follows a transition into `mode`.
    pub fn for_mode(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Typing => self.type_delay,
            Mode::Pausing => self.pause_delay,
            Mode::Deleting => self.delete_delay,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingCycler {
    phrases: Vec<String>,
    // char counts, so prefixes never split a multi-byte character
    lengths: Vec<usize>,
    index: usize,
    typed: usize,
    mode: Mode,
    delays: TypingDelays,
}

impl TypingCycler {
    pub fn new<I, S>(phrases: I, delays: TypingDelays) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Vec<String>>();
        if phrases.is_empty() {
            return Err(ConfigError::EmptyPhrases);
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self {
            phrases,
            lengths,
            index: 0,
            typed: 0,
            mode: Mode::Typing,
            delays,
        })
    }

    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn typed_len(&self) -> usize {
        self.typed
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn delays(&self) -> TypingDelays {
        self.delays
    }

    /// The currently visible prefix of the current phrase.
    pub fn visible(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.typed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Delay before the very first tick after construction.
    pub fn first_delay(&self) -> Duration {
        self.delays.for_mode(self.mode)
    }

    /// Applies one transition and returns the delay before the next tick.
    pub fn tick(&mut self) -> Duration {
        let len = self.lengths[self.index];
        match self.mode {
            Mode::Typing if self.typed < len => self.typed += 1,
            Mode::Typing => self.mode = Mode::Pausing,
            Mode::Pausing => self.mode = Mode::Deleting,
            Mode::Deleting if self.typed > 0 => self.typed -= 1,
            Mode::Deleting => {
                self.index = (self.index + 1) % self.phrases.len();
                self.mode = Mode::Typing;
            }
        }
        self.delays.for_mode(self.mode)
    }
}

/// A tick that has been handed to a [`Scheduler`] and has not fired yet.
pub trait PendingTick {
    fn cancel(self);
}

/// Runs a callback once after a delay.
///
/// Returns `None` when the tick could not be scheduled; the animation then
/// simply stops at its current frame.
pub trait Scheduler {
    type Handle: PendingTick;

    fn schedule(&self, delay: Duration, tick: Box<dyn FnOnce()>) -> Option<Self::Handle>;
}

struct TimerState<S: Scheduler> {
    cycler: TypingCycler,
    scheduler: S,
    pending: Option<S::Handle>,
    on_change: Box<dyn FnMut(&str)>,
}

/// Drives a [`TypingCycler`] with one pending tick at a time.
///
/// Scheduled callbacks only hold a weak reference to the timer state, so once
/// the timer is dropped no further transition can run even if the scheduler
/// fires a stale callback.
pub struct TypingTimer<S: Scheduler + 'static> {
    state: Rc<RefCell<TimerState<S>>>,
}

impl<S: Scheduler + 'static> TypingTimer<S> {
    pub fn start(
        cycler: TypingCycler,
        scheduler: S,
        on_change: impl FnMut(&str) + 'static,
    ) -> Self {
        let delay = cycler.first_delay();
        let state = Rc::new(RefCell::new(TimerState {
            cycler,
            scheduler,
            pending: None,
            on_change: Box::new(on_change),
        }));
        Self::schedule(&state, delay);
        Self { state }
    }

    pub fn visible(&self) -> String {
        self.state.borrow().cycler.visible().to_string()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    /// Stops the animation, leaving the last visible frame in place.
    pub fn cancel(self) {
        drop(self);
    }

    fn schedule(state: &Rc<RefCell<TimerState<S>>>, delay: Duration) {
        let weak = Rc::downgrade(state);
        let tick: Box<dyn FnOnce()> = Box::new(move || Self::fire(&weak));
        let mut guard = state.borrow_mut();
        let pending = guard.scheduler.schedule(delay, tick);
        guard.pending = pending;
    }

    fn fire(weak: &Weak<RefCell<TimerState<S>>>) {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let delay = {
            let mut guard = state.borrow_mut();
            guard.pending = None;
            let delay = guard.cycler.tick();
            let TimerState {
                cycler, on_change, ..
            } = &mut *guard;
            on_change(cycler.visible());
            delay
        };
        // the owner may have dropped the timer from inside `on_change`
        if Rc::strong_count(&state) > 1 {
            Self::schedule(&state, delay);
        }
    }
}

impl<S: Scheduler + 'static> Drop for TypingTimer<S> {
    fn drop(&mut self) {
        // a failed borrow means we are inside `fire`; the weak ref handles that case
        if let Ok(mut guard) = self.state.try_borrow_mut() {
            if let Some(pending) = guard.pending.take() {
                pending.cancel();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Queue = Rc<RefCell<Vec<(u64, Duration, Box<dyn FnOnce()>)>>>;

    // Fires ticks only when the test asks it to.
    #[derive(Clone, Default)]
    struct ManualScheduler {
        queue: Queue,
        next_id: Rc<Cell<u64>>,
        elapsed: Rc<Cell<Duration>>,
    }

    struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Vec<(u64, Duration, Box<dyn FnOnce()>)>>>,
    }

    impl PendingTick for ManualHandle {
        fn cancel(self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().retain(|(id, _, _)| *id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, tick: Box<dyn FnOnce()>) -> Option<ManualHandle> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, delay, tick));
            Some(ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            })
        }
    }

    impl ManualScheduler {
        fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        fn run_next(&self) -> bool {
            let next = {
                let mut queue = self.queue.borrow_mut();
                if queue.is_empty() {
                    None
                } else {
                    Some(queue.remove(0))
                }
            };
            match next {
                Some((_, delay, tick)) => {
                    self.elapsed.set(self.elapsed.get() + delay);
                    tick();
                    true
                }
                None => false,
            }
        }
    }

    fn cycler(phrases: &[&str]) -> TypingCycler {
        TypingCycler::new(phrases.iter().copied(), TypingDelays::uniform(Duration::from_millis(1)))
            .expect("non-empty phrase list")
    }

    fn run_ticks(cycler: &mut TypingCycler, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| {
                cycler.tick();
                cycler.visible().to_string()
            })
            .collect()
    }

    #[test]
    fn test_empty_phrase_list_is_rejected() {
        let res = TypingCycler::new(Vec::<String>::new(), TypingDelays::default());
        assert_eq!(res.unwrap_err(), ConfigError::EmptyPhrases);
    }

    #[test]
    fn test_initial_state() {
        let c = cycler(&["Go", "Rust"]);
        assert_eq!(c.phrase_index(), 0);
        assert_eq!(c.typed_len(), 0);
        assert_eq!(c.mode(), Mode::Typing);
        assert_eq!(c.visible(), "");
    }

    #[test]
    fn test_go_rust_scenario() {
        let mut c = cycler(&["Go", "Rust"]);
        let frames = run_ticks(&mut c, 18);
        let expected = [
            "G", "Go", // typing
            "Go", // -> pausing
            "Go", // -> deleting
            "G", "", // deleting
            "", // advance to "Rust"
            "R", "Ru", "Rus", "Rust", // typing
            "Rust", "Rust", // pause, then deleting
            "Rus", "Ru", "R", "", // deleting
            "", // advance back to "Go"
        ];
        assert_eq!(frames, expected);
        assert_eq!(c.phrase_index(), 0);
        assert_eq!(c.mode(), Mode::Typing);

        c.tick();
        assert_eq!(c.visible(), "G");
    }

    #[test]
    fn test_distinct_frames_follow_the_cycle() {
        let mut c = cycler(&["Go", "Rust"]);
        let mut frames = vec![c.visible().to_string()];
        for frame in run_ticks(&mut c, 19) {
            if frames.last() != Some(&frame) {
                frames.push(frame);
            }
        }
        assert_eq!(
            frames,
            ["", "G", "Go", "G", "", "R", "Ru", "Rus", "Rust", "Rus", "Ru", "R", "", "G"]
        );
    }

    #[test]
    fn test_mode_transitions_and_delays() {
        let delays = TypingDelays {
            type_delay: Duration::from_millis(100),
            pause_delay: Duration::from_millis(2000),
            delete_delay: Duration::from_millis(50),
        };
        let mut c = TypingCycler::new(["ab"], delays).unwrap();
        assert_eq!(c.first_delay(), Duration::from_millis(100));
        assert_eq!(c.tick(), Duration::from_millis(100)); // "a"
        assert_eq!(c.tick(), Duration::from_millis(100)); // "ab"
        assert_eq!(c.tick(), Duration::from_millis(2000));
        assert_eq!(c.mode(), Mode::Pausing);
        assert_eq!(c.tick(), Duration::from_millis(50));
        assert_eq!(c.mode(), Mode::Deleting);
        assert_eq!(c.visible(), "ab");
        assert_eq!(c.tick(), Duration::from_millis(50)); // "a"
        assert_eq!(c.tick(), Duration::from_millis(50)); // ""
        assert_eq!(c.tick(), Duration::from_millis(100));
        assert_eq!(c.mode(), Mode::Typing);
        // single phrase wraps onto itself
        assert_eq!(c.phrase_index(), 0);
    }

    #[test]
    fn test_visible_is_always_a_prefix() {
        let phrases = ["Full Stack Developer", "UI/UX Enthusiast", "", "Été 🦀"];
        let mut c = cycler(&phrases);
        for _ in 0..500 {
            c.tick();
            let phrase = c.phrase();
            assert!(phrase.starts_with(c.visible()));
            assert!(c.typed_len() <= phrase.chars().count());
            assert_eq!(c.visible().chars().count(), c.typed_len());
        }
    }

    #[test]
    fn test_multibyte_prefix() {
        let mut c = cycler(&["é🦀"]);
        c.tick();
        assert_eq!(c.visible(), "é");
        c.tick();
        assert_eq!(c.visible(), "é🦀");
    }

    #[test]
    fn test_deterministic_given_tick_count() {
        let mut a = cycler(&["Problem Solver", "MERN Expert"]);
        let mut b = cycler(&["Problem Solver", "MERN Expert"]);
        assert_eq!(run_ticks(&mut a, 200), run_ticks(&mut b, 200));
        assert_eq!(a, b);
    }

    #[test]
    fn test_timer_keeps_one_pending_tick() {
        let scheduler = ManualScheduler::default();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let timer = TypingTimer::start(cycler(&["Go", "Rust"]), scheduler.clone(), move |s| {
            sink.borrow_mut().push(s.to_string())
        });

        assert_eq!(scheduler.pending(), 1);
        for _ in 0..7 {
            assert!(scheduler.run_next());
            assert_eq!(scheduler.pending(), 1);
        }
        assert!(timer.is_pending());
        assert_eq!(timer.visible(), "");
        assert_eq!(*frames.borrow(), ["G", "Go", "Go", "Go", "G", "", ""]);
        assert_eq!(scheduler.elapsed.get(), Duration::from_millis(7));
    }

    #[test]
    fn test_cancel_freezes_output() {
        let scheduler = ManualScheduler::default();
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        let timer = TypingTimer::start(cycler(&["Go", "Rust"]), scheduler.clone(), move |s| {
            sink.borrow_mut().push(s.to_string())
        });

        scheduler.run_next();
        assert_eq!(timer.visible(), "G");

        timer.cancel();
        assert_eq!(scheduler.pending(), 0);
        assert!(!scheduler.run_next());
        assert_eq!(*frames.borrow(), ["G"]);
    }

    #[test]
    fn test_drop_from_change_callback_schedules_nothing() {
        let scheduler = ManualScheduler::default();
        let owner: Rc<RefCell<Option<TypingTimer<ManualScheduler>>>> =
            Rc::new(RefCell::new(None));
        let slot = owner.clone();
        let timer = TypingTimer::start(cycler(&["Go"]), scheduler.clone(), move |_| {
            let taken = slot.borrow_mut().take();
            drop(taken);
        });
        *owner.borrow_mut() = Some(timer);

        assert!(scheduler.run_next());
        assert!(owner.borrow().is_none());
        assert_eq!(scheduler.pending(), 0);
        assert!(!scheduler.run_next());
    }

    #[test]
    fn test_stale_callback_after_drop_is_a_no_op() {
        // a scheduler whose handles cannot actually cancel anything
        struct Leaky(Rc<RefCell<Vec<Box<dyn FnOnce()>>>>);
        struct NoCancel;
        impl PendingTick for NoCancel {
            fn cancel(self) {}
        }
        impl Scheduler for Leaky {
            type Handle = NoCancel;
            fn schedule(&self, _: Duration, tick: Box<dyn FnOnce()>) -> Option<NoCancel> {
                self.0.borrow_mut().push(tick);
                Some(NoCancel)
            }
        }

        let queue = Rc::new(RefCell::new(Vec::new()));
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let timer = TypingTimer::start(cycler(&["Go"]), Leaky(queue.clone()), move |_| {
            counter.set(counter.get() + 1)
        });
        drop(timer);

        let stale = queue.borrow_mut().pop().expect("first tick was scheduled");
        stale();
        assert_eq!(calls.get(), 0);
        assert!(queue.borrow().is_empty());
    }
}
