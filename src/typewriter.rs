//! Looping typewriter effect for the hero tagline.
//!
//! The cadence lives in a pure state machine ([`Typewriter`]) that yields
//! the next text prefix plus the delay before the following step; the DOM
//! driver just applies the text and chains a `gloo` timeout.  Splitting it
//! this way keeps the whole type/hold/delete/advance cycle testable off the
//! browser.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use unicode_segmentation::UnicodeSegmentation;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{
    DELETE_SPEED_MS, HOLD_AT_END_MS, NEXT_PHRASE_DELAY_MS, TYPEWRITER_PHRASES, TYPE_SPEED_MS,
};

/// One step of output: what to show and how long to wait before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub text: String,
    pub delay_ms: u32,
}

pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    /// `phrases` must be non-empty; the machine cycles through them forever.
    pub fn new(phrases: Vec<String>) -> Typewriter {
        assert!(!phrases.is_empty(), "typewriter needs at least one phrase");
        Typewriter {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advance the machine by one keystroke (or deletion) and report the new
    /// visible text.  Grapheme clusters are the unit of "one character" so
    /// multi-byte text never splits mid-glyph.
    pub fn step(&mut self) -> Step {
        let current = &self.phrases[self.phrase];
        let len = current.graphemes(true).count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.graphemes(true).take(self.chars).collect();

        let mut delay_ms = if self.deleting {
            DELETE_SPEED_MS
        } else {
            TYPE_SPEED_MS
        };

        if !self.deleting && self.chars == len {
            // Hold the finished phrase before unwinding it.
            delay_ms = HOLD_AT_END_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        Step { text, delay_ms }
    }
}

pub fn setup_typewriter(document: &Document) -> Result<(), JsValue> {
    let el = match document.get_element_by_id("typewriter") {
        Some(el) => el,
        None => return Ok(()),
    };

    let phrases = TYPEWRITER_PHRASES.iter().map(|p| p.to_string()).collect();
    let machine = Rc::new(RefCell::new(Typewriter::new(phrases)));
    run_step(el, machine);

    Ok(())
}

/// Apply one step, then chain the next one after the step's own delay.
/// Like the render loop this runs for the lifetime of the page.
fn run_step(el: Element, machine: Rc<RefCell<Typewriter>>) {
    let step = machine.borrow_mut().step();
    el.set_text_content(Some(&step.text));

    Timeout::new(step.delay_ms, move || {
        run_step(el, machine);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|p| p.to_string()).collect())
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut tw = machine(&["ab", "cd"]);

        // Typing one grapheme per step.
        assert_eq!(
            tw.step(),
            Step { text: "a".into(), delay_ms: TYPE_SPEED_MS }
        );
        // Phrase complete: long hold, then deletion starts.
        assert_eq!(
            tw.step(),
            Step { text: "ab".into(), delay_ms: HOLD_AT_END_MS }
        );
        assert_eq!(
            tw.step(),
            Step { text: "a".into(), delay_ms: DELETE_SPEED_MS }
        );
        // Empty again: advance to the next phrase after a short beat.
        assert_eq!(
            tw.step(),
            Step { text: "".into(), delay_ms: NEXT_PHRASE_DELAY_MS }
        );
        assert_eq!(
            tw.step(),
            Step { text: "c".into(), delay_ms: TYPE_SPEED_MS }
        );
    }

    #[test]
    fn wraps_around_to_the_first_phrase() {
        let mut tw = machine(&["x", "y"]);
        // "x": type, hold, delete-to-empty, then "y" the same, then back to "x".
        let mut texts = Vec::new();
        for _ in 0..7 {
            texts.push(tw.step().text);
        }
        assert_eq!(texts, vec!["x", "", "y", "", "x", "", "y"]);
    }

    #[test]
    fn grapheme_clusters_never_split() {
        let mut tw = machine(&["héy"]);
        assert_eq!(tw.step().text, "h");
        assert_eq!(tw.step().text, "hé");
        let done = tw.step();
        assert_eq!(done.text, "héy");
        assert_eq!(done.delay_ms, HOLD_AT_END_MS);
        assert_eq!(tw.step().text, "hé");
    }

    #[test]
    fn visible_text_is_always_a_prefix_of_a_phrase() {
        let phrases = ["Frontend Developer", "AI Enthusiast"];
        let mut tw = machine(&phrases);
        for _ in 0..200 {
            let step = tw.step();
            assert!(phrases.iter().any(|p| p.starts_with(&step.text)));
        }
    }
}
