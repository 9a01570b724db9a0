use std::fmt::{self, Display};

use crossfill_core::{Assignment, Crossword, Variable, Word};

use crate::{
    Consistency, Domains,
    arc_consistency::{self, Arc},
    backtrack::Backtracker,
    ordering,
};

/// Counters collected while solving.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::CrosswordSolver;
///
/// let crossword = Crossword::new("_____\n".parse()?, "CAT\nLION".parse()?)?;
/// let mut solver = CrosswordSolver::new(&crossword);
///
/// assert!(solver.solve().is_none());
/// // the five-letter slot has no candidates, so no search was needed
/// assert_eq!(solver.stats().backtrack_calls(), 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub(crate) backtrack_calls: usize,
    pub(crate) values_tried: usize,
    pub(crate) rejected_values: usize,
}

impl SolverStats {
    /// Returns how many times the backtracking step was entered.
    #[must_use]
    pub fn backtrack_calls(&self) -> usize {
        self.backtrack_calls
    }

    /// Returns how many candidate bindings were tried.
    #[must_use]
    pub fn values_tried(&self) -> usize {
        self.values_tried
    }

    /// Returns how many tried bindings broke a constraint.
    #[must_use]
    pub fn rejected_values(&self) -> usize {
        self.rejected_values
    }
}

/// Why a crossword has no fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum UnsolvableReason {
    /// No word has the length of this variable.
    #[display("no word fits {variable}")]
    EmptyDomain {
        /// The variable without candidates.
        variable: Variable,
    },
    /// Arc consistency removed every candidate of this variable.
    #[display("no word for {variable} agrees with its crossings")]
    ArcInconsistent {
        /// The variable whose domain was wiped out.
        variable: Variable,
    },
    /// Backtracking tried every combination without success.
    #[display("search exhausted without a fill")]
    SearchExhausted,
}

/// Result of [`CrosswordSolver::solve_with_outcome`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A complete, consistent assignment.
    Solved(Assignment),
    /// No assignment exists.
    Unsolvable(UnsolvableReason),
}

impl SolveOutcome {
    /// Returns the assignment, if solved.
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveOutcome::Solved(assignment) => Some(assignment),
            SolveOutcome::Unsolvable(_) => None,
        }
    }
}

impl Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Solved(assignment) => write!(f, "solved {} slots", assignment.len()),
            SolveOutcome::Unsolvable(reason) => write!(f, "unsolvable: {reason}"),
        }
    }
}

/// Fills a crossword by constraint propagation and backtracking search.
///
/// The solver owns the domains of the crossword's variables. Solving runs in
/// three stages:
///
/// 1. node consistency drops words of the wrong length,
/// 2. AC-3 drops words without a compatible crossing word,
/// 3. backtracking search picks words using MRV/degree and
///    least-constraining-value ordering.
///
/// If either of the first two stages leaves a domain empty, search is skipped.
/// The domains are not modified during search.
///
/// # Examples
///
/// ```
/// use crossfill_core::Crossword;
/// use crossfill_solver::CrosswordSolver;
///
/// let crossword = Crossword::new("___\n_##\n_##\n".parse()?, "CAT\nCAR\nDOG".parse()?)?;
/// let mut solver = CrosswordSolver::new(&crossword);
///
/// let assignment = solver.solve().expect("solvable");
/// assert!(crossword.is_complete(&assignment));
/// assert!(crossword.is_consistent(&assignment));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct CrosswordSolver<'a> {
    crossword: &'a Crossword,
    domains: Domains,
    stats: SolverStats,
}

impl<'a> CrosswordSolver<'a> {
    /// Creates a solver whose domains hold the whole vocabulary.
    #[must_use]
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            domains: Domains::new(crossword),
            stats: SolverStats::default(),
        }
    }

    /// Returns the crossword being solved.
    #[must_use]
    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Returns the current domains.
    #[must_use]
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Returns the counters collected so far.
    #[must_use]
    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// Drops candidates whose length differs from their variable's.
    ///
    /// See [`Domains::enforce_node_consistency`].
    pub fn enforce_node_consistency(&mut self) -> bool {
        self.domains.enforce_node_consistency()
    }

    /// Makes `x` arc consistent with `y`.
    ///
    /// See [`arc_consistency::revise`].
    pub fn revise(&mut self, x: &Variable, y: &Variable) -> bool {
        arc_consistency::revise(self.crossword, &mut self.domains, x, y)
    }

    /// Runs AC-3 from every arc of the crossword.
    ///
    /// See [`arc_consistency::ac3`].
    pub fn ac3(&mut self) -> Consistency {
        arc_consistency::ac3(self.crossword, &mut self.domains)
    }

    /// Runs AC-3 from the given arcs.
    ///
    /// See [`arc_consistency::ac3_with_arcs`].
    pub fn ac3_with_arcs(&mut self, arcs: impl IntoIterator<Item = Arc>) -> Consistency {
        arc_consistency::ac3_with_arcs(self.crossword, &mut self.domains, arcs)
    }

    /// Picks the next variable to branch on.
    ///
    /// See [`ordering::select_unassigned_variable`].
    #[must_use]
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Variable> {
        ordering::select_unassigned_variable(self.crossword, &self.domains, assignment)
    }

    /// Orders the candidates of `variable`, least constraining first.
    ///
    /// See [`ordering::order_domain_values`].
    #[must_use]
    pub fn order_domain_values(&self, variable: &Variable, assignment: &Assignment) -> Vec<&Word> {
        ordering::order_domain_values(self.crossword, &self.domains, variable, assignment)
    }

    /// Searches for a complete, consistent extension of `assignment` using the
    /// current domains.
    ///
    /// Returns `None` if the search space is exhausted.
    pub fn backtrack(&mut self, mut assignment: Assignment) -> Option<Assignment> {
        let mut backtracker = Backtracker::new(self.crossword, &self.domains, &mut self.stats);
        backtracker.search(&mut assignment).then_some(assignment)
    }

    /// Solves the crossword, reporting why it failed if it did.
    pub fn solve_with_outcome(&mut self) -> SolveOutcome {
        self.enforce_node_consistency();
        log::debug!(
            "node consistency: {} candidates over {} variables",
            self.domains.total_len(),
            self.crossword.variables().len()
        );
        if let Some(variable) = self.domains.first_empty() {
            log::debug!("no candidates for {variable}; skipping search");
            return SolveOutcome::Unsolvable(UnsolvableReason::EmptyDomain { variable });
        }

        if let Consistency::Inconsistent { variable } = self.ac3() {
            log::debug!("arc consistency failed at {variable}; skipping search");
            return SolveOutcome::Unsolvable(UnsolvableReason::ArcInconsistent { variable });
        }
        log::debug!(
            "arc consistency: {} candidates left",
            self.domains.total_len()
        );

        let outcome = match self.backtrack(Assignment::new()) {
            Some(assignment) => SolveOutcome::Solved(assignment),
            None => SolveOutcome::Unsolvable(UnsolvableReason::SearchExhausted),
        };
        log::debug!(
            "search finished after {} calls ({} values tried, {} rejected): {outcome}",
            self.stats.backtrack_calls,
            self.stats.values_tried,
            self.stats.rejected_values
        );
        outcome
    }

    /// Solves the crossword.
    ///
    /// Returns a complete, consistent assignment, or `None` if none exists.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.solve_with_outcome().into_assignment()
    }
}
