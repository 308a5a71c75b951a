//! Resolving weak types (W1-W7).
//!
//! Each rule is a full pass over the sequence before the next one starts.

use crate::chain::BidiChain;
use crate::class::{BidiClass, ClassSet};

/// Apply W1-W7 to the positions of one isolating run sequence.
pub(crate) fn resolve_weak(chain: &mut BidiChain, positions: &[usize], sos: BidiClass) {
    resolve_nonspacing_marks(chain, positions, sos);
    resolve_arabic_context(chain, positions, sos);
    resolve_separators(chain, positions);
    resolve_terminators(chain, positions);
    resolve_remaining_separators(chain, positions);
    resolve_european_numbers(chain, positions, sos);
}

/// W1: NSM takes the class of the preceding character, or ON after an
/// isolate initiator or PDI, or sos at the start.
fn resolve_nonspacing_marks(chain: &mut BidiChain, positions: &[usize], sos: BidiClass) {
    let mut previous = sos;
    for &i in positions {
        if chain.class(i) == BidiClass::NSM {
            let resolved = if previous.is(ClassSet::ISOLATE_CONTROL) {
                BidiClass::ON
            } else {
                previous
            };
            chain.set_class(i, resolved);
        }
        previous = chain.class(i);
    }
}

/// W2 and W3: EN after AL becomes AN, then AL becomes R.
fn resolve_arabic_context(chain: &mut BidiChain, positions: &[usize], sos: BidiClass) {
    let mut last_strong = sos;
    for &i in positions {
        match chain.class(i) {
            class @ (BidiClass::L | BidiClass::R | BidiClass::AL) => last_strong = class,
            BidiClass::EN if last_strong == BidiClass::AL => chain.set_class(i, BidiClass::AN),
            _ => {}
        }
    }
    for &i in positions {
        if chain.class(i) == BidiClass::AL {
            chain.set_class(i, BidiClass::R);
        }
    }
}

/// W4: a single ES between ENs, or a single CS between numbers of one type.
fn resolve_separators(chain: &mut BidiChain, positions: &[usize]) {
    for window in positions.windows(3) {
        let (before, at, after) = (
            chain.class(window[0]),
            chain.class(window[1]),
            chain.class(window[2]),
        );
        let resolved = match (before, at, after) {
            (BidiClass::EN, BidiClass::ES | BidiClass::CS, BidiClass::EN) => BidiClass::EN,
            (BidiClass::AN, BidiClass::CS, BidiClass::AN) => BidiClass::AN,
            _ => continue,
        };
        chain.set_class(window[1], resolved);
    }
}

/// W5: a run of ET next to an EN becomes EN.
fn resolve_terminators(chain: &mut BidiChain, positions: &[usize]) {
    let mut start = 0;
    while start < positions.len() {
        if chain.class(positions[start]) != BidiClass::ET {
            start += 1;
            continue;
        }
        let end = positions[start..]
            .iter()
            .position(|&i| chain.class(i) != BidiClass::ET)
            .map_or(positions.len(), |len| start + len);

        let before_is_number = start > 0 && chain.class(positions[start - 1]) == BidiClass::EN;
        let after_is_number = end < positions.len() && chain.class(positions[end]) == BidiClass::EN;
        if before_is_number || after_is_number {
            for &i in &positions[start..end] {
                chain.set_class(i, BidiClass::EN);
            }
        }
        start = end;
    }
}

/// W6: separators and terminators left over become ON.
fn resolve_remaining_separators(chain: &mut BidiChain, positions: &[usize]) {
    for &i in positions {
        if matches!(chain.class(i), BidiClass::ES | BidiClass::ET | BidiClass::CS) {
            chain.set_class(i, BidiClass::ON);
        }
    }
}

/// W7: EN in an L context becomes L.
fn resolve_european_numbers(chain: &mut BidiChain, positions: &[usize], sos: BidiClass) {
    let mut last_strong = sos;
    for &i in positions {
        match chain.class(i) {
            class @ (BidiClass::L | BidiClass::R) => last_strong = class,
            BidiClass::EN if last_strong == BidiClass::L => chain.set_class(i, BidiClass::L),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use BidiClass::*;

    fn weak(classes: &[BidiClass], sos: BidiClass) -> Vec<BidiClass> {
        let mut chain = BidiChain::new(classes, &[], Level::LTR);
        let positions: Vec<_> = (0..classes.len()).collect();
        resolve_weak(&mut chain, &positions, sos);
        positions.iter().map(|&i| chain.class(i)).collect()
    }

    #[test]
    fn w1_nsm_follows_previous() {
        assert_eq!(weak(&[AL, NSM, NSM], R), vec![R, R, R]);
        assert_eq!(weak(&[NSM], R), vec![R]);
        assert_eq!(weak(&[NSM], L), vec![L]);
    }

    #[test]
    fn w1_nsm_after_isolate_control_is_on() {
        assert_eq!(weak(&[LRI, NSM], L), vec![LRI, ON]);
        assert_eq!(weak(&[PDI, NSM], R), vec![PDI, ON]);
    }

    #[test]
    fn w2_en_after_al_is_an() {
        assert_eq!(weak(&[AL, EN], L), vec![R, AN]);
        assert_eq!(weak(&[AL, ON, EN], L), vec![R, ON, AN]);
        assert_eq!(weak(&[AL, L, EN], L), vec![R, L, L]);
    }

    #[test]
    fn w4_single_separators() {
        assert_eq!(weak(&[EN, ES, EN], R), vec![EN, EN, EN]);
        assert_eq!(weak(&[EN, CS, EN], R), vec![EN, EN, EN]);
        assert_eq!(weak(&[AN, CS, AN], R), vec![AN, AN, AN]);
        assert_eq!(weak(&[AN, ES, AN], R), vec![AN, ON, AN]);
        assert_eq!(weak(&[EN, CS, CS, EN], R), vec![EN, ON, ON, EN]);
        assert_eq!(weak(&[EN, CS, AN], R), vec![EN, ON, AN]);
    }

    #[test]
    fn w5_terminators_next_to_numbers() {
        assert_eq!(weak(&[ET, ET, EN], R), vec![EN, EN, EN]);
        assert_eq!(weak(&[EN, ET, ET], R), vec![EN, EN, EN]);
        assert_eq!(weak(&[AN, ET, EN], R), vec![AN, EN, EN]);
        assert_eq!(weak(&[ET, ON, EN], R), vec![ON, ON, EN]);
    }

    #[test]
    fn w5_runs_after_al_stay_neutral() {
        // W2 already turned the EN into AN.
        assert_eq!(weak(&[AL, ET, EN], L), vec![R, ON, AN]);
    }

    #[test]
    fn w7_en_in_l_context() {
        assert_eq!(weak(&[L, ON, EN], R), vec![L, ON, L]);
        assert_eq!(weak(&[EN], L), vec![L]);
        assert_eq!(weak(&[R, EN], L), vec![R, EN]);
    }

    #[test]
    fn percent_sign_joins_number_then_takes_l() {
        assert_eq!(weak(&[L, WS, EN, ET], L), vec![L, WS, L, L]);
    }
}
