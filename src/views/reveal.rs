//! Scroll-triggered reveal.
//!
//! Markup is wrapped in a `.reveal-trigger` element that `static/site.js`
//! watches with an `IntersectionObserver`. The first time the element crosses
//! its threshold (with a non-zero intersection) it gains `.is-visible` and is
//! no longer observed, so the reveal happens at most once.

use super::html::escape;

pub const DEFAULT_THRESHOLD: f32 = 0.1;
pub const DEFAULT_DELAY: &str = "0s";

/// Reveal wrapper configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub threshold: f32,
    /// CSS time, applied as `--reveal-delay`.
    pub delay: String,
    pub class: String,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            delay: DEFAULT_DELAY.to_string(),
            class: String::new(),
        }
    }
}

impl Reveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay: impl Into<String>) -> Self {
        self.delay = delay.into();
        self
    }

    /// Delay in whole milliseconds, e.g. for staggering items of a list.
    pub fn delay_ms(self, ms: u32) -> Self {
        self.delay(format!("{ms}ms"))
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn wrap(&self, inner: &str) -> String {
        let class = if self.class.is_empty() {
            "reveal-trigger".to_string()
        } else {
            format!("reveal-trigger {}", self.class)
        };
        format!(
            r#"<div class="{}" data-reveal-threshold="{}" style="--reveal-delay: {}">{inner}</div>"#,
            escape(&class),
            self.threshold,
            escape(&self.delay)
        )
    }
}
