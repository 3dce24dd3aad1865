//! Parsing of compact rule notations into rulesets.
//!
//! Each supported grammar is one [`RuleFormat`] variant; all variants produce
//! the same concrete [`Ruleset`] + [`Neighborhood`] pair, so grammars stay
//! pluggable without any inheritance.

use log::debug;
use regex::Regex;

use super::{Configuration, Ruleset};
use crate::cam::{NdCam, ALIVE, DEAD};
use crate::dim::Dim;
use crate::error::{CaError, CaResult};
use crate::neighborhood::Neighborhood;

lazy_static! {
    static ref BIRTH_SURVIVAL_REGEX: Regex = Regex::new(r"^[Bb](\d*)/[Ss](\d*)$").unwrap();
    static ref MCELL_REGEX: Regex = Regex::new(r"^(\d*)/(\d*)$").unwrap();
}

/// Supported rule-string grammars.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RuleFormat {
    /// `B<digits>/S<digits>`: birth digit set, then survival digit set.
    /// `B3/S23` is Conway's Game of Life.
    BirthSurvival,
    /// MCell `<digits>/<digits>`: survival digit set, then birth digit set.
    /// `23/3` is Conway's Game of Life.
    MCell,
}

impl RuleFormat {
    /// Returns the grammar `notation` is written in, if any.
    pub fn detect(notation: &str) -> Option<Self> {
        if BIRTH_SURVIVAL_REGEX.is_match(notation) {
            Some(Self::BirthSurvival)
        } else if MCELL_REGEX.is_match(notation) {
            Some(Self::MCell)
        } else {
            None
        }
    }
}

/// Parses a rule string into a ruleset and the neighborhood it is defined
/// over (radius-1 Moore, for all supported grammars).
///
/// The ruleset is the Life family's: a dead cell becomes alive when its live
/// neighbor count is in the birth set, a live cell stays alive when its count
/// is in the survival set, and every other live cell dies. The three
/// configurations are mutually exclusive, so evaluation order never changes
/// the outcome.
///
/// Fails with [`CaError::MalformedRule`] when `notation` matches no supported
/// grammar, when a digit set is not strictly ascending, or when a digit
/// exceeds the neighbor count.
pub fn parse<D: Dim>(notation: &str, cam: &NdCam<D>) -> CaResult<(Ruleset, Neighborhood<D>)> {
    let format =
        RuleFormat::detect(notation).ok_or_else(|| CaError::MalformedRule(notation.to_owned()))?;

    let (survival_digits, birth_digits) = match format {
        RuleFormat::BirthSurvival => {
            let captures = BIRTH_SURVIVAL_REGEX
                .captures(notation)
                .ok_or_else(|| CaError::MalformedRule(notation.to_owned()))?;
            (captures[2].to_owned(), captures[1].to_owned())
        }
        RuleFormat::MCell => {
            let captures = MCELL_REGEX
                .captures(notation)
                .ok_or_else(|| CaError::MalformedRule(notation.to_owned()))?;
            (captures[1].to_owned(), captures[2].to_owned())
        }
    };

    let neighborhood = Neighborhood::moore();
    let survival = digit_set(&survival_digits, neighborhood.len(), notation)?;
    let birth = digit_set(&birth_digits, neighborhood.len(), notation)?;

    let ruleset = Ruleset::with_configurations(vec![
        Configuration::count(Some(DEAD), ALIVE, birth, ALIVE),
        Configuration::count(Some(ALIVE), ALIVE, survival, ALIVE),
        Configuration::always(Some(ALIVE), DEAD),
    ]);

    debug!(
        "parsed rule {:?} ({:?}) for a {}-dimensional CAM: {} neighbors",
        notation,
        format,
        cam.ndim(),
        neighborhood.len(),
    );
    Ok((ruleset, neighborhood))
}

/// Converts a digit string into a count set, requiring strictly ascending
/// digits no greater than `max`.
fn digit_set(digits: &str, max: usize, notation: &str) -> CaResult<Vec<u8>> {
    let mut counts = Vec::with_capacity(digits.len());
    for ch in digits.chars() {
        // The grammar regexes only let decimal digits through.
        let digit = ch.to_digit(10).expect("Non-digit in digit set") as u8;
        if digit as usize > max || counts.last().map_or(false, |&last| digit <= last) {
            return Err(CaError::MalformedRule(notation.to_owned()));
        }
        counts.push(digit);
    }
    Ok(counts)
}

pub mod presets {
    //! Named rule strings for well-known Life-family automata.

    /// Conway's Game of Life.
    pub const LIFE: &str = "B3/S23";
    /// HighLife: like Life, plus birth on 6 neighbors.
    pub const HIGHLIFE: &str = "B36/S23";
    /// Seeds: every live cell dies; explosive growth.
    pub const SEEDS: &str = "B2/S";
    /// Morley (Move): slow spaceships and puffers.
    pub const MORLEY: &str = "B368/S245";
    /// Replicator: every pattern replicates itself.
    pub const REPLICATOR: &str = "B1357/S1357";
    /// Life without death: live cells never die.
    pub const LIFE_WITHOUT_DEATH: &str = "B3/S012345678";
    /// Day & Night: symmetric under state inversion.
    pub const DAY_AND_NIGHT: &str = "B3678/S34678";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cam::Cam2D;
    use crate::ndvec::NdVec;

    fn cam2d() -> Cam2D {
        NdCam::square(0, 10, 2).unwrap()
    }

    #[test]
    fn test_parse_life() {
        let cam = cam2d();
        let (ruleset, neighborhood) = parse(presets::LIFE, &cam).unwrap();
        assert_eq!(3, ruleset.len());
        assert_eq!(8, neighborhood.len());

        // Birth on exactly 3 live neighbors.
        assert_eq!(ALIVE, ruleset.apply(DEAD, &[1, 1, 1, 0, 0, 0, 0, 0]));
        assert_eq!(DEAD, ruleset.apply(DEAD, &[1, 1, 0, 0, 0, 0, 0, 0]));
        // Survival on 2 or 3; death otherwise (explicit else-arm).
        assert_eq!(ALIVE, ruleset.apply(ALIVE, &[1, 1, 0, 0, 0, 0, 0, 0]));
        assert_eq!(DEAD, ruleset.apply(ALIVE, &[1, 1, 1, 1, 0, 0, 0, 0]));
        assert_eq!(DEAD, ruleset.apply(ALIVE, &[0, 0, 0, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_parse_mcell_equivalent() {
        let cam = cam2d();
        let (from_mcell, _) = parse("23/3", &cam).unwrap();
        let (from_bs, _) = parse("B3/S23", &cam).unwrap();
        for self_state in &[DEAD, ALIVE] {
            for live in 0..=8 {
                let mut neighbors = vec![0u8; 8];
                neighbors[..live].fill(1);
                assert_eq!(
                    from_bs.apply(*self_state, &neighbors),
                    from_mcell.apply(*self_state, &neighbors),
                );
            }
        }
    }

    #[test]
    fn test_parse_format_detection() {
        assert_eq!(Some(RuleFormat::BirthSurvival), RuleFormat::detect("B3/S23"));
        assert_eq!(Some(RuleFormat::BirthSurvival), RuleFormat::detect("b36/s23"));
        assert_eq!(Some(RuleFormat::MCell), RuleFormat::detect("23/3"));
        assert_eq!(Some(RuleFormat::MCell), RuleFormat::detect("/"));
        assert_eq!(None, RuleFormat::detect("XYZ"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let cam = cam2d();
        for bad in &["XYZ", "", "B3S23", "B3/S23/C4", "3/3/3"] {
            assert_eq!(
                CaError::MalformedRule((*bad).to_owned()),
                parse(bad, &cam).unwrap_err(),
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_ascending_digits() {
        let cam = cam2d();
        assert!(parse("B33/S23", &cam).is_err());
        assert!(parse("B3/S32", &cam).is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_digits() {
        // A 1D Moore neighborhood only has 2 cells, so digits above 2 are
        // out of range.
        let cam: crate::cam::Cam1D = NdCam::new(0, NdVec([10]), 2).unwrap();
        assert!(parse("B2/S12", &cam).is_ok());
        assert!(parse("B3/S23", &cam).is_err());
    }

    #[test]
    fn test_parse_seeds() {
        let cam = cam2d();
        let (ruleset, _) = parse(presets::SEEDS, &cam).unwrap();
        assert_eq!(ALIVE, ruleset.apply(DEAD, &[1, 1, 0, 0, 0, 0, 0, 0]));
        // No survival set: every live cell dies.
        assert_eq!(DEAD, ruleset.apply(ALIVE, &[1, 1, 0, 0, 0, 0, 0, 0]));
    }
}
