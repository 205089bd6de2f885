//! Scroll geometry to normalized progress and the active card bucket.
//!
//! Nothing in here touches the DOM; `hooks` feeds it samples.

/// Raw geometry read from the window on a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSample {
    pub scroll_offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ViewportSample {
    /// How far the page can scroll. Zero or less when the content fits on one screen.
    pub fn scrollable_extent(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Normalized scroll position in [0, 1].
///
/// A non-scrollable page (extent <= 0 or not finite) is at progress 0. NaN and
/// negative offsets count as the top; overscroll past either end is clamped.
pub fn progress(scroll_offset: f64, scrollable_extent: f64) -> f64 {
    if !scrollable_extent.is_finite() || scrollable_extent <= 0.0 {
        return 0.0;
    }
    sanitize_progress(scroll_offset / scrollable_extent)
}

/// Forces any value into [0, 1], mapping NaN to 0.
pub fn sanitize_progress(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, 1.0)
    }
}

/// Index of the bucket containing `progress` when [0, 1) is split into
/// `card_count` equal buckets. Boundaries belong to the upper bucket and
/// progress >= 1 stays on the last card.
pub fn active_index(progress: f64, card_count: usize) -> usize {
    if card_count == 0 {
        return 0;
    }
    let p = sanitize_progress(progress);
    let bucket = (p * card_count as f64).floor() as usize;
    bucket.min(card_count - 1)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub progress: f64,
    pub active_index: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            active_index: 0,
        }
    }
}

impl ScrollState {
    pub fn from_progress(raw_progress: f64, card_count: usize) -> Self {
        let progress = sanitize_progress(raw_progress);
        Self {
            progress,
            active_index: active_index(progress, card_count),
        }
    }

    pub fn from_sample(sample: &ViewportSample, card_count: usize) -> Self {
        Self::from_progress(
            progress(sample.scroll_offset, sample.scrollable_extent()),
            card_count,
        )
    }
}
