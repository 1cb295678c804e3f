//! Card display rules: how names, titles, departments and icons land on a card.

use contracts::{IdCard, JobPrototype, StatusIconPrototype, MAX_FULL_NAME_LENGTH, MAX_JOB_TITLE_LENGTH};

use crate::prototype::PrototypeManager;

/// Trim, cap at `max_chars` characters, and treat blank input as "cleared".
/// The cap is applied after trimming, so a cut can leave trailing whitespace.
fn sanitize(raw: &str, max_chars: usize) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(max_chars).collect())
}

pub fn change_full_name(card: &mut IdCard, full_name: &str) {
    card.full_name = sanitize(full_name, MAX_FULL_NAME_LENGTH);
}

pub fn change_job_title(card: &mut IdCard, job_title: &str) {
    card.job_title = sanitize(job_title, MAX_JOB_TITLE_LENGTH);
}

pub fn change_job_department(card: &mut IdCard, job: &JobPrototype, prototypes: &PrototypeManager) {
    card.job_departments = prototypes
        .departments_for_job(&job.id)
        .map(|department| department.id.clone())
        .collect();
}

pub fn change_job_icon(card: &mut IdCard, icon: &StatusIconPrototype) {
    card.job_icon = Some(icon.id.clone());
}
