//! Reconstruction of the expected-token set at a parse failure.

use crate::LuceneTokenStream;
use crate::lookahead::Speculation;
use crate::lookahead::SpeculationRecord;
use crate::token::LuceneTokenKind;
use crate::token::LuceneTokenKindSet;
use crate::token_source::LuceneTokenSource;

/// Number of consumed tokens between prunings of stale speculation records.
const GC_INTERVAL: usize = 100;

/// Bookkeeping the parser keeps so that a failure can report every token
/// kind that would have been accepted.
///
/// Two sources feed the expected set:
/// - single-token choice points (optional tokens, loop continuations,
///   alternatives) evaluated at the failure index since the last consume;
/// - speculative attempts whose frontier lies beyond the failure index,
///   replayed in rescan mode.
#[derive(Debug, Default)]
pub(crate) struct ParseDiagnostics {
    choice_index: usize,
    choice_kinds: LuceneTokenKindSet,
    speculations: Vec<SpeculationRecord>,
    consumed_since_gc: usize,
}

impl ParseDiagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records that the parser checked for any of `kinds` at token `index`.
    ///
    /// Kinds recorded at an earlier index are discarded: the parser has
    /// moved on, so they can no longer be part of a failure report.
    pub(crate) fn record_choice(&mut self, index: usize, kinds: LuceneTokenKindSet) {
        if index != self.choice_index {
            self.choice_index = index;
            self.choice_kinds = LuceneTokenKindSet::EMPTY;
        }
        self.choice_kinds.extend_from(kinds);
    }

    pub(crate) fn record_speculation(&mut self, record: SpeculationRecord) {
        self.speculations.push(record);
    }

    /// Called after every committed token; periodically drops speculation
    /// records that can no longer reach past the commit point.
    pub(crate) fn on_consume(&mut self, commit: usize) {
        self.consumed_since_gc += 1;
        if self.consumed_since_gc >= GC_INTERVAL {
            self.consumed_since_gc = 0;
            self.speculations.retain(|record| record.frontier > commit);
        }
    }

    /// Number of speculation records currently retained.
    #[cfg(test)]
    pub(crate) fn speculation_count(&self) -> usize {
        self.speculations.len()
    }

    /// Builds the expected-kind set for a failure at token `index`.
    ///
    /// Failing `expect`s record their kinds as choice points, so they are
    /// covered by the choice set. `found` is removed from the result.
    pub(crate) fn expected_at<'src, S: LuceneTokenSource<'src>>(
        &self,
        stream: &mut LuceneTokenStream<'src, S>,
        index: usize,
        found: LuceneTokenKind,
    ) -> LuceneTokenKindSet {
        let mut set = LuceneTokenKindSet::EMPTY;
        if self.choice_index == index {
            set.extend_from(self.choice_kinds);
        }

        for record in self.speculations.iter().filter(|r| r.frontier > index) {
            let mut replay = Speculation::rescan(
                record.start,
                record.production.budget(),
                index,
            );
            let outcome = replay.run(record.production, stream);
            log::trace!(
                "rescanned {:?} from token {} for diagnostics at {index}: {outcome:?}",
                record.production,
                record.start,
            );
            set.extend_from(replay.rescanned_kinds());
        }

        set.remove(found);
        set
    }
}
