pub const LOADING_TEXTS: [&str; 5] = [
    "Initializing...",
    "Loading Components...",
    "Rendering 3D Elements...",
    "Applying Animations...",
    "Almost Ready...",
];

const COMPLETE: u8 = 100;

/// Splash-screen progress, advanced by a fixed-interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderProgress {
    percent: u8,
    step: u8,
}

impl LoaderProgress {
    pub fn new(step: u8) -> Self {
        Self { percent: 0, step }
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= COMPLETE
    }

    /// Adds one step, saturating at 100. Returns whether loading is complete.
    pub fn advance(&mut self) -> bool {
        self.percent = self.percent.saturating_add(self.step).min(COMPLETE);
        self.is_complete()
    }
}

/// Rotating caption under the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingCaption {
    index: usize,
}

impl LoadingCaption {
    pub fn text(&self) -> &'static str {
        LOADING_TEXTS[self.index]
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % LOADING_TEXTS.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_completes_after_fifty_ticks() {
        let mut progress = LoaderProgress::new(2);
        for tick in 1..50 {
            assert!(!progress.advance());
            assert_eq!(progress.percent(), (tick * 2) as u8);
        }
        assert!(progress.advance());
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_progress_saturates() {
        let mut progress = LoaderProgress::new(30);
        progress.advance();
        progress.advance();
        progress.advance();
        assert_eq!(progress.percent(), 90);
        assert!(progress.advance());
        assert_eq!(progress.percent(), 100);
        assert!(progress.advance());
        assert_eq!(progress.percent(), 100);

        let mut big = LoaderProgress::new(u8::MAX);
        assert!(big.advance());
        assert_eq!(big.percent(), 100);
    }

    #[test]
    fn test_caption_rotates() {
        let mut caption = LoadingCaption::default();
        assert_eq!(caption.text(), "Initializing...");
        for _ in 0..LOADING_TEXTS.len() - 1 {
            caption = caption.next();
        }
        assert_eq!(caption.text(), "Almost Ready...");
        assert_eq!(caption.next().text(), "Initializing...");
    }
}
