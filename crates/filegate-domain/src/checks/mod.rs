use crate::model::{CheckedFile, StatOutcome};
use filegate_types::Finding;
use time::OffsetDateTime;

mod access;
mod age;
mod blacklist;
mod max_lines;
mod size;

#[cfg(test)]
mod tests;

/// Run every applicable check for one file, in fixed order, with no
/// short-circuit between predicates: a file that is both too big and stale
/// reports both violations in one pass.
///
/// A failed stat is terminal for the file (there is nothing to measure); it
/// produces exactly one error finding.
pub fn run_all(file: &CheckedFile, now: OffsetDateTime, out: &mut Vec<Finding>) {
    let facts = match &file.evidence {
        StatOutcome::Missing | StatOutcome::Failed(_) => {
            access::run(&file.path, &file.evidence, out);
            return;
        }
        StatOutcome::Found(facts) => facts,
    };

    size::run(&file.path, &file.rule, facts, out);
    age::run(&file.path, &file.rule, facts, now, out);

    if file.rule.needs_content() {
        match &facts.content {
            Some(Ok(data)) => {
                max_lines::run(&file.path, &file.rule, data, out);
                blacklist::run(&file.path, &file.rule, data, out);
            }
            Some(Err(err)) => access::read_failure(&file.path, err, out),
            // Inspect gathers content whenever the rule needs it; nothing to
            // evaluate if it is absent.
            None => {}
        }
    }
}
