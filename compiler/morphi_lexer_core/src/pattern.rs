//! Token-shape patterns.

use std::fmt;

use regex::Regex;
use regex_automata::dfa::{dense, Automaton, StartKind};
use regex_automata::{Anchored, Input};

use crate::Interval;

/// Cap on the memory spent determinizing one pattern's prefix automaton.
/// Patterns over the cap fall back to the conservative `may_extend`.
const PREFIX_DFA_LIMIT: usize = 8 << 20;

/// A rule describing the shape of a token.
///
/// Matching is anchored at offset 0 of `content`: a successful match always
/// yields `[0, end)` with `end > 0`. Empty matches are reported as `None`,
/// since a zero-length token would never consume input.
pub trait TokenPattern: fmt::Debug + Send + Sync {
    fn matches(&self, content: &str) -> Option<Interval>;

    /// Whether text appended to `content` could still let this pattern
    /// match further than `content.len()` allows today.
    ///
    /// The engine asks this before settling on a match inside a bulk that
    /// may still grow. Answering `true` is always safe; it only makes the
    /// engine read further ahead before deciding.
    fn may_extend(&self, _content: &str) -> bool {
        true
    }
}

/// A [`TokenPattern`] backed by a compiled regular expression.
///
/// The expression is wrapped as `^(?:raw)` at compile time, so the raw
/// text does not need its own anchor. An anchored DFA built from the same
/// text answers [`TokenPattern::may_extend`].
#[derive(Clone)]
pub struct RegexPattern {
    raw: String,
    regex: Regex,
    prefix: Option<dense::DFA<Vec<u32>>>,
}

impl RegexPattern {
    /// Compile a pattern from its textual form.
    pub fn new(raw: impl Into<String>) -> Result<Self, regex::Error> {
        let raw = raw.into();
        let regex = Regex::new(&format!("^(?:{raw})"))?;
        let prefix = prefix_automaton(&raw);
        Ok(RegexPattern { raw, regex, prefix })
    }

    /// The pattern text as configured.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl TokenPattern for RegexPattern {
    fn matches(&self, content: &str) -> Option<Interval> {
        self.regex
            .find(content)
            .filter(|found| !found.is_empty())
            .map(|found| Interval::new(found.start(), found.end()))
    }

    fn may_extend(&self, content: &str) -> bool {
        let Some(dfa) = &self.prefix else {
            return true;
        };
        let input = Input::new(content).anchored(Anchored::Yes);
        let Ok(mut state) = dfa.start_state_forward(&input) else {
            return true;
        };
        for &byte in content.as_bytes() {
            state = dfa.next_state(state, byte);
            if dfa.is_dead_state(state) {
                return false;
            }
        }
        // Matches are reported one byte late, so a live state can still
        // belong to a match that already ended. Look one byte further.
        (0..=u8::MAX).any(|byte| !dfa.is_dead_state(dfa.next_state(state, byte)))
    }
}

/// Build the anchored DFA used for prefix liveness. `None` when the
/// pattern needs features a dense DFA lacks or exceeds the size cap.
fn prefix_automaton(raw: &str) -> Option<dense::DFA<Vec<u32>>> {
    dense::Builder::new()
        .configure(
            dense::DFA::config()
                .start_kind(StartKind::Anchored)
                .dfa_size_limit(Some(PREFIX_DFA_LIMIT))
                .determinize_size_limit(Some(PREFIX_DFA_LIMIT)),
        )
        .build(raw)
        .ok()
}

impl fmt::Debug for RegexPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegexPattern").field(&self.raw).finish()
    }
}
