use crate::parent::resolve_parent;
use camino::Utf8Path;
use filegate_domain::model::{CheckedFile, FileFacts, ParentEvidence, StatOutcome};
use filegate_domain::policy::{CheckPlan, PlanEntry};
use filegate_types::RelPath;
use thiserror::Error;
use time::OffsetDateTime;

#[derive(Debug, Error)]
enum StatError {
    #[error("File not found")]
    NotFound,
    #[error("{0}")]
    Other(String),
}

fn stat(path: &Utf8Path) -> Result<std::fs::Metadata, StatError> {
    std::fs::metadata(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => StatError::NotFound,
        _ => StatError::Other(err.to_string()),
    })
}

/// Gather evidence for one planned file.
///
/// Runs as an independent task and never fails: a missing file, a stat
/// error, or an unreadable content are all recorded as evidence and turned
/// into findings by the checks.
pub async fn inspect_file(base_dir: &Utf8Path, entry: &PlanEntry) -> CheckedFile {
    let absolute = entry.path.resolve_in(base_dir);

    let evidence = match stat(&absolute) {
        Err(StatError::NotFound) => StatOutcome::Missing,
        Err(StatError::Other(err)) => StatOutcome::Failed(err),
        Ok(metadata) => {
            let content = entry
                .rule
                .needs_content()
                .then(|| std::fs::read_to_string(&absolute).map_err(|err| err.to_string()));
            let parent = entry
                .rule
                .needs_parent()
                .then(|| probe_parent(base_dir, &entry.path));

            StatOutcome::Found(FileFacts {
                size: metadata.len(),
                mtime: metadata.modified().ok().map(OffsetDateTime::from),
                content,
                parent,
            })
        }
    };

    CheckedFile {
        path: entry.path.clone(),
        rule: entry.rule.clone(),
        evidence,
    }
}

/// Gather evidence for every planned file and wait for all of them. The
/// join is the only synchronization point; there is no cancellation, no
/// timeout, and no failure channel.
pub async fn inspect_plan(base_dir: &Utf8Path, plan: &CheckPlan) -> Vec<CheckedFile> {
    futures::future::join_all(
        plan.entries
            .iter()
            .map(|entry| inspect_file(base_dir, entry)),
    )
    .await
}

fn probe_parent(base_dir: &Utf8Path, path: &RelPath) -> ParentEvidence {
    let parent_rel = resolve_parent(Utf8Path::new(path.as_str()));
    if parent_rel.as_str() == path.as_str() {
        return ParentEvidence::SameAsFile;
    }

    let parent = RelPath::new(parent_rel.as_str());
    match stat(&parent.resolve_in(base_dir)) {
        Ok(metadata) => ParentEvidence::Found {
            parent,
            size: metadata.len(),
        },
        // A parent that cannot be statted counts as missing: the size check
        // warns and moves on.
        Err(_) => ParentEvidence::Missing { parent },
    }
}
