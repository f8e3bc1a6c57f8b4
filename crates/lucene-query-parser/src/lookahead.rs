//! Bounded speculative matching of grammar fragments.
//!
//! Two decisions inside a clause cannot be made from the next token alone:
//! whether a leading term is a field name, and whether a fielded clause is a
//! plain term/range or a comparison like `price>=10`. A [`Speculation`]
//! walks the token arena with its own cursor to answer these without moving
//! the parser's commit point.
//!
//! Each production has a token budget. Running out of budget before seeing
//! a mismatch counts as success: the remaining tokens are then parsed for
//! real and any error surfaces there.

use crate::LuceneTokenStream;
use crate::token::LuceneTokenKind;
use crate::token::LuceneTokenKindSet;
use crate::token_source::LuceneTokenSource;

/// A grammar fragment that can be matched speculatively.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LookaheadProduction {
    /// `TERM (':' | '=')`
    FieldPrefix,

    /// `TERM ( (':' | '=') TermStart | CmpOp (TERM | QUOTED | NUMBER) )`
    FieldedClause,
}

impl LookaheadProduction {
    /// Maximum number of tokens the production may look at.
    pub(crate) fn budget(self) -> usize {
        match self {
            LookaheadProduction::FieldPrefix => 2,
            LookaheadProduction::FieldedClause => 3,
        }
    }
}

/// Kinds that can follow `field:` in a fielded term or range.
const TERM_START: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    LuceneTokenKind::Term,
    LuceneTokenKind::RegexpTerm,
    LuceneTokenKind::Number,
    LuceneTokenKind::RangeInclusiveStart,
    LuceneTokenKind::RangeExclusiveStart,
    LuceneTokenKind::Quoted,
]);

const FIELD_OPERATOR: LuceneTokenKindSet =
    LuceneTokenKindSet::of(&[LuceneTokenKind::Colon, LuceneTokenKind::Equals]);

const COMPARISON_OPERATOR: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    LuceneTokenKind::LessThan,
    LuceneTokenKind::LessThanEq,
    LuceneTokenKind::GreaterThan,
    LuceneTokenKind::GreaterThanEq,
]);

const COMPARISON_VALUE: LuceneTokenKindSet = LuceneTokenKindSet::of(&[
    LuceneTokenKind::Term,
    LuceneTokenKind::Quoted,
    LuceneTokenKind::Number,
]);

/// Result of matching a production speculatively.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeculationOutcome {
    /// Every token of the production matched.
    Matched,
    /// A token did not match.
    Mismatched,
    /// The budget ran out before any mismatch (optimistic success).
    BudgetExhausted,
}

impl SpeculationOutcome {
    /// Whether the parser should commit to the speculated production.
    pub fn is_success(self) -> bool {
        !matches!(self, SpeculationOutcome::Mismatched)
    }
}

/// Early exit from a scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanStop {
    Mismatched,
    BudgetExhausted,
}

type ScanResult = Result<(), ScanStop>;

/// A memoized speculative attempt, kept so that error diagnostics can replay
/// it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SpeculationRecord {
    pub(crate) production: LookaheadProduction,
    /// Commit index the attempt started at.
    pub(crate) start: usize,
    /// One past the furthest token index the attempt charged to its budget.
    pub(crate) frontier: usize,
}

/// The state of one speculative attempt.
///
/// `scan_pos` is the index of the next token to look at. `last_pos` is the
/// furthest index reached so far; only scans that extend it are charged to
/// the budget, so re-scanning a token while trying an alternative is free.
#[derive(Debug)]
pub(crate) struct Speculation {
    scan_pos: usize,
    last_pos: usize,
    remaining: usize,
    /// In rescan mode, the index whose scanned kinds are collected.
    rescan_target: Option<usize>,
    rescanned: LuceneTokenKindSet,
}

impl Speculation {
    pub(crate) fn new(start: usize, budget: usize) -> Self {
        Self {
            scan_pos: start,
            last_pos: start,
            remaining: budget,
            rescan_target: None,
            rescanned: LuceneTokenKindSet::EMPTY,
        }
    }

    /// A speculation that records every kind it tries at index `target`.
    pub(crate) fn rescan(start: usize, budget: usize, target: usize) -> Self {
        Self {
            rescan_target: Some(target),
            ..Self::new(start, budget)
        }
    }

    /// One past the furthest token index charged to the budget.
    pub(crate) fn frontier(&self) -> usize {
        self.last_pos
    }

    /// Kinds scanned at the rescan target.
    pub(crate) fn rescanned_kinds(&self) -> LuceneTokenKindSet {
        self.rescanned
    }

    /// Matches `production` starting at this speculation's start index.
    pub(crate) fn run<'src, S: LuceneTokenSource<'src>>(
        &mut self,
        production: LookaheadProduction,
        stream: &mut LuceneTokenStream<'src, S>,
    ) -> SpeculationOutcome {
        let result = match production {
            LookaheadProduction::FieldPrefix => self.scan_field_prefix(stream),
            LookaheadProduction::FieldedClause => self.scan_fielded_clause(stream),
        };
        match result {
            Ok(()) => SpeculationOutcome::Matched,
            Err(ScanStop::Mismatched) => SpeculationOutcome::Mismatched,
            Err(ScanStop::BudgetExhausted) => SpeculationOutcome::BudgetExhausted,
        }
    }

    fn scan_field_prefix<'src, S: LuceneTokenSource<'src>>(
        &mut self,
        stream: &mut LuceneTokenStream<'src, S>,
    ) -> ScanResult {
        self.scan_one_of(stream, LuceneTokenKindSet::of(&[LuceneTokenKind::Term]))?;
        self.scan_one_of(stream, FIELD_OPERATOR)
    }

    fn scan_fielded_clause<'src, S: LuceneTokenSource<'src>>(
        &mut self,
        stream: &mut LuceneTokenStream<'src, S>,
    ) -> ScanResult {
        self.scan_one_of(stream, LuceneTokenKindSet::of(&[LuceneTokenKind::Term]))?;

        let saved = self.scan_pos;
        match self.scan_fielded_term(stream) {
            Err(ScanStop::Mismatched) => {
                self.scan_pos = saved;
                self.scan_comparison(stream)
            },
            other => other,
        }
    }

    fn scan_fielded_term<'src, S: LuceneTokenSource<'src>>(
        &mut self,
        stream: &mut LuceneTokenStream<'src, S>,
    ) -> ScanResult {
        self.scan_one_of(stream, FIELD_OPERATOR)?;
        self.scan_one_of(stream, TERM_START)
    }

    fn scan_comparison<'src, S: LuceneTokenSource<'src>>(
        &mut self,
        stream: &mut LuceneTokenStream<'src, S>,
    ) -> ScanResult {
        self.scan_one_of(stream, COMPARISON_OPERATOR)?;
        self.scan_one_of(stream, COMPARISON_VALUE)
    }

    /// Scans one token, which must be of one of `kinds`.
    fn scan_one_of<'src, S: LuceneTokenSource<'src>>(
        &mut self,
        stream: &mut LuceneTokenStream<'src, S>,
        kinds: LuceneTokenKindSet,
    ) -> ScanResult {
        let index = self.scan_pos;
        if self.scan_pos == self.last_pos {
            self.remaining = self.remaining.saturating_sub(1);
            self.last_pos += 1;
        }
        self.scan_pos += 1;

        if self.rescan_target == Some(index) {
            self.rescanned.extend_from(kinds);
        }

        if !kinds.contains(stream.kind_at(index)) {
            return Err(ScanStop::Mismatched);
        }
        if self.remaining == 0 && self.scan_pos == self.last_pos {
            return Err(ScanStop::BudgetExhausted);
        }
        Ok(())
    }
}
