use crossfill_core::{Assignment, Crossword};

use crate::{Domains, SolverStats, ordering};

/// Depth-first chronological backtracking over a single assignment.
///
/// Bindings are made in place and undone when a branch fails, so sibling
/// branches never see each other's tentative words.
pub(crate) struct Backtracker<'a> {
    crossword: &'a Crossword,
    domains: &'a Domains,
    stats: &'a mut SolverStats,
}

impl<'a> Backtracker<'a> {
    pub(crate) fn new(
        crossword: &'a Crossword,
        domains: &'a Domains,
        stats: &'a mut SolverStats,
    ) -> Self {
        Self {
            crossword,
            domains,
            stats,
        }
    }

    /// Extends `assignment` to a complete, consistent one.
    ///
    /// Returns `true` with `assignment` completed on success. On failure
    /// `assignment` is left as it was passed in.
    pub(crate) fn search(&mut self, assignment: &mut Assignment) -> bool {
        self.stats.backtrack_calls += 1;
        if self.crossword.is_complete(assignment) {
            return true;
        }

        let Some(var) =
            ordering::select_unassigned_variable(self.crossword, self.domains, assignment)
        else {
            return false;
        };
        let values = ordering::order_domain_values(self.crossword, self.domains, &var, assignment);
        log::trace!(
            "depth {}: branching on {var} with {} values",
            assignment.len(),
            values.len()
        );

        for word in values {
            self.stats.values_tried += 1;
            assignment.assign(var, word.clone());
            if self.crossword.is_consistent(assignment) {
                if self.search(assignment) {
                    return true;
                }
            } else {
                self.stats.rejected_values += 1;
            }
            assignment.unassign(&var);
        }
        false
    }
}
