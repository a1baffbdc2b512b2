// Sequential chapter navigation with wraparound. The player element and
// playback belong to the page; this only owns the index arithmetic and
// the label/source strings the page writes back.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// 1-based chapter index cycling over a fixed chapter count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterCycle {
    current: u32,
    count: u32,
}

impl ChapterCycle {
    /// Start at chapter 1. A zero count is bumped to one so the cycle
    /// always has somewhere to land.
    pub fn new(count: u32) -> Self {
        ChapterCycle {
            current: 1,
            count: count.max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Step to the next chapter, wrapping from the last back to 1.
    pub fn advance(&mut self) -> u32 {
        if self.current < self.count {
            self.current += 1;
        } else {
            self.current = 1;
        }
        self.current
    }

    /// Step to the previous chapter, wrapping from 1 to the last.
    pub fn rewind(&mut self) -> u32 {
        if self.current == 1 {
            self.current = self.count;
        } else {
            self.current -= 1;
        }
        self.current
    }

    /// Display label for the current chapter.
    pub fn label(&self) -> String {
        format!("Capítulo {}", self.current)
    }

    /// Source path for the current chapter's track.
    pub fn track_src(&self) -> String {
        format!("./audios/{}.mp3", self.current)
    }
}

// =============================================================================
// WASM Bindings
// =============================================================================

/// WASM-exposed chapter cycle for the page's player controls.
#[wasm_bindgen]
pub struct WasmChapterCycle {
    inner: ChapterCycle,
}

#[wasm_bindgen]
impl WasmChapterCycle {
    /// Create a cycle over `count` chapters, positioned at chapter 1.
    #[wasm_bindgen(constructor)]
    pub fn new(count: u32) -> WasmChapterCycle {
        WasmChapterCycle {
            inner: ChapterCycle::new(count),
        }
    }

    /// Current 1-based chapter index.
    #[wasm_bindgen]
    pub fn current(&self) -> u32 {
        self.inner.current()
    }

    /// Total number of chapters.
    #[wasm_bindgen]
    pub fn count(&self) -> u32 {
        self.inner.count()
    }

    /// Advance with wraparound; returns the new index.
    #[wasm_bindgen]
    pub fn advance(&mut self) -> u32 {
        self.inner.advance()
    }

    /// Rewind with wraparound; returns the new index.
    #[wasm_bindgen]
    pub fn rewind(&mut self) -> u32 {
        self.inner.rewind()
    }

    /// Label text for the page, e.g. "Capítulo 3".
    #[wasm_bindgen]
    pub fn label(&self) -> String {
        self.inner.label()
    }

    /// Track source for the audio element, e.g. "./audios/3.mp3".
    #[wasm_bindgen]
    pub fn track_src(&self) -> String {
        self.inner.track_src()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn advance_wraps_at_the_end() {
        let mut cycle = ChapterCycle::new(10);
        for expected in 2..=10 {
            assert_eq!(cycle.advance(), expected);
        }
        assert_eq!(cycle.advance(), 1);
    }

    #[test]
    fn rewind_wraps_at_the_start() {
        let mut cycle = ChapterCycle::new(10);
        assert_eq!(cycle.rewind(), 10);
        assert_eq!(cycle.rewind(), 9);
    }

    #[test]
    fn labels_follow_the_index() {
        let mut cycle = ChapterCycle::new(3);
        assert_eq!(cycle.label(), "Capítulo 1");
        assert_eq!(cycle.track_src(), "./audios/1.mp3");
        cycle.advance();
        assert_eq!(cycle.label(), "Capítulo 2");
        assert_eq!(cycle.track_src(), "./audios/2.mp3");
    }

    #[test]
    fn zero_count_is_bumped_to_one() {
        let mut cycle = ChapterCycle::new(0);
        assert_eq!(cycle.count(), 1);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.rewind(), 1);
    }

    #[test]
    fn wasm_wrapper_tracks_inner_state() {
        let mut cycle = WasmChapterCycle::new(2);
        assert_eq!(cycle.current(), 1);
        assert_eq!(cycle.advance(), 2);
        assert_eq!(cycle.advance(), 1);
        assert_eq!(cycle.label(), "Capítulo 1");
    }

    proptest! {
        /// Advancing `count` times is a full lap back to the start.
        #[test]
        fn full_lap_returns_to_start(count in 1u32..100, start_steps in 0u32..100) {
            let mut cycle = ChapterCycle::new(count);
            for _ in 0..start_steps {
                cycle.advance();
            }
            let origin = cycle.current();
            for _ in 0..count {
                cycle.advance();
            }
            prop_assert_eq!(cycle.current(), origin);
        }

        /// Rewind undoes advance from any position.
        #[test]
        fn rewind_undoes_advance(count in 1u32..100, steps in 0u32..100) {
            let mut cycle = ChapterCycle::new(count);
            for _ in 0..steps {
                cycle.advance();
            }
            let origin = cycle.current();
            cycle.advance();
            cycle.rewind();
            prop_assert_eq!(cycle.current(), origin);
        }

        /// The index never leaves [1, count].
        #[test]
        fn index_stays_in_bounds(count in 1u32..50, steps in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut cycle = ChapterCycle::new(count);
            for forward in steps {
                if forward {
                    cycle.advance();
                } else {
                    cycle.rewind();
                }
                prop_assert!(cycle.current() >= 1 && cycle.current() <= count);
            }
        }
    }
}
