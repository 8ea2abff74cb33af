//! First-run warning banner animation state

use std::time::{Duration, Instant};

/// Animation phase for the warning banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Banner resting at the top of the screen
    Display,
    /// Banner sliding up off the screen
    SlideOut,
    /// Animation finished
    Complete,
}

/// Warning banner animation state
#[derive(Debug)]
pub struct BannerState {
    /// When the banner appeared
    pub start_time: Instant,
    /// How long the banner rests before sliding out
    pub display_duration: Duration,
    /// Current animation phase
    pub phase: BannerPhase,
    /// Rows the banner has moved up by
    pub scroll_offset: f32,
}

impl BannerState {
    /// Duration of the slide-out animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub const TITLE: &'static str = "Important";
    pub const MESSAGE: &'static str = "This tool is for entertainment only. Do not use it for \
        anything unlawful; you bear sole responsibility for whatever you do with it.";

    pub fn new(display_duration: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            display_duration,
            phase: BannerPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state from the wall clock
    pub fn update(&mut self, banner_height: u16) {
        self.update_elapsed(self.start_time.elapsed(), banner_height);
    }

    /// Update animation state for a given elapsed time
    pub fn update_elapsed(&mut self, elapsed: Duration, banner_height: u16) {
        if self.phase == BannerPhase::Complete {
            return;
        }

        if elapsed < self.display_duration {
            self.phase = BannerPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < self.display_duration + Self::ANIMATION_DURATION {
            self.phase = BannerPhase::SlideOut;
            let animation_elapsed = elapsed - self.display_duration;
            let progress =
                animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * f32::from(banner_height);
        } else {
            self.phase = BannerPhase::Complete;
        }
    }

    /// Skip to completion (user dismissed the banner)
    pub fn dismiss(&mut self) {
        self.phase = BannerPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == BannerPhase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banner() -> BannerState {
        BannerState::new(Duration::from_secs(3))
    }

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = banner();
        assert_eq!(state.phase, BannerPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = banner();
        state.update(5);
        assert_eq!(state.phase, BannerPhase::Display);
    }

    #[test]
    fn test_slide_out_after_display_duration() {
        let mut state = banner();
        state.update_elapsed(Duration::from_millis(3200), 5);
        assert_eq!(state.phase, BannerPhase::SlideOut);
        assert!(state.scroll_offset > 0.0);
        assert!(state.scroll_offset <= 5.0);
    }

    #[test]
    fn test_complete_after_animation() {
        let mut state = banner();
        state.update_elapsed(Duration::from_secs(4), 5);
        assert!(state.is_complete());
    }

    #[test]
    fn test_dismiss_is_final() {
        let mut state = banner();
        state.dismiss();
        state.update_elapsed(Duration::ZERO, 5);
        assert!(state.is_complete());
    }

    #[test]
    fn test_zero_duration_slides_immediately() {
        let mut state = BannerState::new(Duration::ZERO);
        state.update_elapsed(Duration::from_millis(1), 5);
        assert_eq!(state.phase, BannerPhase::SlideOut);
    }
}
