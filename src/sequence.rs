//! Level runs and isolating run sequences (BD7, BD13, X10).

use crate::chain::BidiChain;
use crate::class::BidiClass;
use crate::level::Level;

/// Maximal span of live chain positions sharing one level.
///
/// `first` and `last` are chain indices of live positions, inclusive. Removed
/// positions between them belong to the run implicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LevelRun {
    pub first: usize,
    pub last: usize,
    pub level: Level,
}

/// Level runs chained across isolate initiator / matching PDI boundaries.
///
/// Runs are referenced by index into the paragraph's run table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct IsolatingRunSequence {
    pub runs: Vec<usize>,
    pub level: Level,
    pub sos: BidiClass,
    pub eos: BidiClass,
}

impl IsolatingRunSequence {
    /// Live chain positions of the sequence in logical order.
    pub fn positions(&self, chain: &BidiChain, runs: &[LevelRun]) -> Vec<usize> {
        self.runs
            .iter()
            .flat_map(|&run| {
                let run = runs[run];
                chain.span(run.first, run.last)
            })
            .collect()
    }
}

/// Split the live positions of `chain` into level runs.
pub(crate) fn level_runs(chain: &BidiChain) -> Vec<LevelRun> {
    let mut runs: Vec<LevelRun> = Vec::new();
    for i in chain.iter() {
        let level = chain.level(i);
        match runs.last_mut() {
            Some(run) if run.level == level => run.last = i,
            _ => runs.push(LevelRun {
                first: i,
                last: i,
                level,
            }),
        }
    }
    runs
}

/// Group level runs into isolating run sequences.
///
/// `matching_pdi` is the BD9 table from
/// [`match_isolates`](crate::explicit::match_isolates), parallel to the chain.
/// Sequences come out ordered by their first position.
pub(crate) fn isolating_run_sequences(
    chain: &BidiChain,
    runs: &[LevelRun],
    matching_pdi: &[Option<usize>],
) -> Vec<IsolatingRunSequence> {
    let mut consumed = vec![false; runs.len()];
    let mut sequences = Vec::new();

    for start in 0..runs.len() {
        if consumed[start] {
            continue;
        }
        consumed[start] = true;
        let mut members = vec![start];
        let mut current = start;

        while let Some(next) = continuation(chain, runs, matching_pdi, current) {
            if consumed[next] {
                break;
            }
            consumed[next] = true;
            members.push(next);
            current = next;
        }

        let sequence = boundary_types(chain, runs, members);
        tracing::trace!(
            runs = sequence.runs.len(),
            level = sequence.level.number(),
            sos = %sequence.sos,
            eos = %sequence.eos,
            "isolating run sequence"
        );
        sequences.push(sequence);
    }

    sequences
}

/// Run that resumes the sequence after `run`, if `run` ends with an isolate
/// initiator whose matching PDI starts another run.
fn continuation(
    chain: &BidiChain,
    runs: &[LevelRun],
    matching_pdi: &[Option<usize>],
    run: usize,
) -> Option<usize> {
    let last = runs[run].last;
    if !chain.original(last).is_isolate_initiator() {
        return None;
    }
    let pdi = matching_pdi.get(last).copied().flatten()?;
    runs.binary_search_by_key(&pdi, |run| run.first).ok()
}

fn boundary_types(
    chain: &BidiChain,
    runs: &[LevelRun],
    members: Vec<usize>,
) -> IsolatingRunSequence {
    let base_level = chain.base_level();
    let first = runs[members[0]];
    let last = runs[members[members.len() - 1]];
    let level = first.level;

    let preceding = chain
        .prev(first.first)
        .map_or(base_level, |i| chain.level(i));
    let following = if chain.original(last.last).is_isolate_initiator() {
        base_level
    } else {
        chain.next(last.last).map_or(base_level, |i| chain.level(i))
    };

    IsolatingRunSequence {
        runs: members,
        level,
        sos: level.max(preceding).embedding_class(),
        eos: last.level.max(following).embedding_class(),
    }
}
