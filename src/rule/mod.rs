//! Everything related to the description of a cellular automaton rule:
//! configurations, rulesets, and the rule-string parser.
//!
//! A [`Ruleset`] is an ordered list of [`Configuration`]s. Applying a ruleset
//! to a cell evaluates the configurations in order and takes the next state
//! of the first one that matches; if none match, the cell keeps its state.

use noisy_float::prelude::{r64, R64};
use std::fmt;
use std::sync::Arc;

mod parse;

pub use parse::{parse, presets, RuleFormat};

/// Predicate over a cell's own state and its neighborhood states.
#[derive(Clone)]
pub enum Matcher {
    /// Matches when the count of neighbors equal to `target` is a member of
    /// `counts`. This is the Life-family building block: birth and survival
    /// digit sets each become one `Count` matcher.
    Count {
        /// The state to count occurrences of.
        target: u8,
        /// The admissible counts.
        counts: Vec<u8>,
    },
    /// Matches when the neighborhood states equal `expected` exactly, in
    /// template order.
    Exact(Vec<u8>),
    /// Matches when the fraction of neighborhood states equal to the
    /// corresponding `expected` entry is at least `threshold` (in `0..=1`).
    Tolerate {
        /// Expected state per offset, in template order.
        expected: Vec<u8>,
        /// Minimum fraction of matching entries.
        threshold: R64,
    },
    /// Matches when the supplied predicate returns true. The predicate is
    /// given the cell's own state and the neighborhood states; it must be a
    /// pure function of them.
    Satisfy(Arc<dyn Fn(u8, &[u8]) -> bool + Send + Sync>),
    /// Always matches. Useful as an explicit else-arm at the end of a
    /// ruleset.
    Always,
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Count { target, counts } => f
                .debug_struct("Count")
                .field("target", target)
                .field("counts", counts)
                .finish(),
            Matcher::Exact(expected) => f.debug_tuple("Exact").field(expected).finish(),
            Matcher::Tolerate {
                expected,
                threshold,
            } => f
                .debug_struct("Tolerate")
                .field("expected", expected)
                .field("threshold", threshold)
                .finish(),
            Matcher::Satisfy(_) => f.write_str("Satisfy(..)"),
            Matcher::Always => f.write_str("Always"),
        }
    }
}

impl Matcher {
    /// Evaluates the matcher against a cell state and its neighborhood.
    fn matches(&self, self_state: u8, neighbors: &[u8]) -> bool {
        match self {
            Matcher::Count { target, counts } => {
                let n = neighbors.iter().filter(|&&s| s == *target).count();
                n <= u8::MAX as usize && counts.contains(&(n as u8))
            }
            Matcher::Exact(expected) => expected[..] == neighbors[..],
            Matcher::Tolerate {
                expected,
                threshold,
            } => {
                if expected.len() != neighbors.len() {
                    return false;
                }
                if expected.is_empty() {
                    return true;
                }
                let matching = expected
                    .iter()
                    .zip(neighbors)
                    .filter(|(e, s)| e == s)
                    .count();
                r64(matching as f64 / expected.len() as f64) >= *threshold
            }
            Matcher::Satisfy(predicate) => predicate(self_state, neighbors),
            Matcher::Always => true,
        }
    }
}

/// One predicate + outcome rule within a ruleset.
///
/// A configuration may be gated on the focal cell's own state; an ungated
/// configuration is evaluated for every cell.
#[derive(Debug, Clone)]
pub struct Configuration {
    when_self: Option<u8>,
    matcher: Matcher,
    next_state: u8,
}

impl Configuration {
    /// Creates a configuration from a matcher.
    pub fn new(when_self: Option<u8>, matcher: Matcher, next_state: u8) -> Self {
        Self {
            when_self,
            matcher,
            next_state,
        }
    }

    /// Creates a count-matching configuration (Life-family building block).
    pub fn count(when_self: Option<u8>, target: u8, counts: Vec<u8>, next_state: u8) -> Self {
        Self::new(when_self, Matcher::Count { target, counts }, next_state)
    }

    /// Creates an exact-match configuration.
    pub fn exact(when_self: Option<u8>, expected: Vec<u8>, next_state: u8) -> Self {
        Self::new(when_self, Matcher::Exact(expected), next_state)
    }

    /// Creates a tolerance-match configuration; `threshold` is the minimum
    /// fraction of entries that must match, in `0..=1`.
    pub fn tolerate(
        when_self: Option<u8>,
        expected: Vec<u8>,
        threshold: R64,
        next_state: u8,
    ) -> Self {
        Self::new(
            when_self,
            Matcher::Tolerate {
                expected,
                threshold,
            },
            next_state,
        )
    }

    /// Creates a configuration from an arbitrary predicate over the cell
    /// state and neighborhood states.
    pub fn satisfy(
        when_self: Option<u8>,
        predicate: impl Fn(u8, &[u8]) -> bool + Send + Sync + 'static,
        next_state: u8,
    ) -> Self {
        Self::new(when_self, Matcher::Satisfy(Arc::new(predicate)), next_state)
    }

    /// Creates an unconditional configuration (an explicit else-arm).
    pub fn always(when_self: Option<u8>, next_state: u8) -> Self {
        Self::new(when_self, Matcher::Always, next_state)
    }

    /// Evaluates the configuration, returning the proposed next state if it
    /// matches.
    pub fn evaluate(&self, self_state: u8, neighbors: &[u8]) -> Option<u8> {
        if let Some(gate) = self.when_self {
            if gate != self_state {
                return None;
            }
        }
        if self.matcher.matches(self_state, neighbors) {
            Some(self.next_state)
        } else {
            None
        }
    }
}

/// Ordered list of configurations with an unchanged-state fallback.
///
/// Built once (by hand or by [`parse`]) and then shared read-only across all
/// ticks and all cells. The empty ruleset is the identity rule: every cell
/// keeps its state.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    configurations: Vec<Configuration>,
}

impl Ruleset {
    /// Creates an empty ruleset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ruleset from a list of configurations.
    pub fn with_configurations(configurations: Vec<Configuration>) -> Self {
        Self { configurations }
    }

    /// Appends a configuration at the end of the evaluation order.
    pub fn push(&mut self, configuration: Configuration) {
        self.configurations.push(configuration);
    }

    /// Returns the configurations, in evaluation order.
    #[inline]
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }
    /// Returns the number of configurations.
    #[inline]
    pub fn len(&self) -> usize {
        self.configurations.len()
    }
    /// Returns true if the ruleset has no configurations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Returns the next state for a cell: the outcome of the first matching
    /// configuration, or `self_state` unchanged if none match.
    pub fn apply(&self, self_state: u8, neighbors: &[u8]) -> u8 {
        self.configurations
            .iter()
            .find_map(|configuration| configuration.evaluate(self_state, neighbors))
            .unwrap_or(self_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matcher() {
        // Birth-on-3 against a binary alphabet.
        let config = Configuration::count(Some(0), 1, vec![3], 1);
        assert_eq!(Some(1), config.evaluate(0, &[1, 1, 1, 0, 0, 0, 0, 0]));
        assert_eq!(None, config.evaluate(0, &[1, 1, 0, 0, 0, 0, 0, 0]));
        // Gated on dead cells only.
        assert_eq!(None, config.evaluate(1, &[1, 1, 1, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_exact_matcher() {
        let config = Configuration::exact(None, vec![1, 0, 1], 1);
        assert_eq!(Some(1), config.evaluate(0, &[1, 0, 1]));
        assert_eq!(None, config.evaluate(0, &[1, 1, 1]));
        assert_eq!(None, config.evaluate(0, &[1, 0]));
    }

    #[test]
    fn test_tolerate_matcher() {
        let config = Configuration::tolerate(None, vec![1, 1, 1, 1], r64(0.5), 1);
        assert_eq!(Some(1), config.evaluate(0, &[1, 1, 0, 0]));
        assert_eq!(Some(1), config.evaluate(0, &[1, 1, 1, 0]));
        assert_eq!(None, config.evaluate(0, &[1, 0, 0, 0]));
    }

    #[test]
    fn test_satisfy_matcher() {
        // Alive iff more neighbors are alive than dead.
        let config = Configuration::satisfy(
            None,
            |_, neighbors| {
                let alive = neighbors.iter().filter(|&&s| s != 0).count();
                alive * 2 > neighbors.len()
            },
            1,
        );
        assert_eq!(Some(1), config.evaluate(0, &[1, 1, 0]));
        assert_eq!(None, config.evaluate(0, &[1, 0, 0]));
    }

    #[test]
    fn test_ruleset_first_match_wins() {
        let ruleset = Ruleset::with_configurations(vec![
            Configuration::count(None, 1, vec![2], 7),
            Configuration::always(None, 9),
        ]);
        assert_eq!(7, ruleset.apply(0, &[1, 1, 0]));
        assert_eq!(9, ruleset.apply(0, &[1, 0, 0]));
    }

    #[test]
    fn test_ruleset_fallback_unchanged() {
        let ruleset = Ruleset::new();
        assert_eq!(5, ruleset.apply(5, &[1, 2, 3]));

        let gated = Ruleset::with_configurations(vec![Configuration::always(Some(1), 0)]);
        assert_eq!(0, gated.apply(1, &[]));
        assert_eq!(2, gated.apply(2, &[]));
    }
}
