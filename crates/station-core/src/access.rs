//! Access grants derived from job prototypes.

use contracts::{AccessTags, JobPrototype};
use tracing::debug;

use crate::prototype::PrototypeManager;

/// Replace `tags` with the access a job grants. Extended access adds the
/// job's extended tags and groups on top of the base set.
pub fn set_access_to_job(
    tags: &mut AccessTags,
    job: &JobPrototype,
    extended: bool,
    prototypes: &PrototypeManager,
) {
    tags.tags.clear();
    tags.tags.extend(job.access.iter().cloned());
    add_groups(tags, &job.access_groups, prototypes);

    if !extended {
        return;
    }
    tags.tags.extend(job.extended_access.iter().cloned());
    add_groups(tags, &job.extended_access_groups, prototypes);
}

fn add_groups(tags: &mut AccessTags, groups: &[String], prototypes: &PrototypeManager) {
    for group_id in groups {
        match prototypes.try_index_access_group(group_id) {
            Some(group) => tags.tags.extend(group.tags.iter().cloned()),
            None => debug!(group = %group_id, "skipping unknown access group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::ScenarioConfig;

    fn prototypes() -> PrototypeManager {
        PrototypeManager::from_catalog(ScenarioConfig::default().prototypes).expect("catalog")
    }

    #[test]
    fn base_access_replaces_previous_tags() {
        let prototypes = prototypes();
        let job = prototypes.try_index_job("Janitor").expect("janitor").clone();
        let mut tags = AccessTags::default();
        tags.tags.insert("Security".to_string());

        set_access_to_job(&mut tags, &job, false, &prototypes);
        assert!(tags.contains("Janitor"));
        assert!(tags.contains("Maintenance"));
        assert!(!tags.contains("Security"));
        assert!(!tags.contains("Service"));
    }

    #[test]
    fn extended_access_adds_extra_tags_and_groups() {
        let prototypes = prototypes();
        let janitor = prototypes.try_index_job("Janitor").expect("janitor").clone();
        let passenger = prototypes.try_index_job("Passenger").expect("passenger").clone();

        let mut tags = AccessTags::default();
        set_access_to_job(&mut tags, &janitor, true, &prototypes);
        assert!(tags.contains("Service"));

        set_access_to_job(&mut tags, &passenger, false, &prototypes);
        assert!(tags.tags.is_empty());
        set_access_to_job(&mut tags, &passenger, true, &prototypes);
        assert_eq!(tags.tags.len(), 1);
        assert!(tags.contains("Maintenance"));
    }

    #[test]
    fn groups_expand_into_tags_and_unknown_groups_are_skipped() {
        let prototypes = prototypes();
        let mut captain = prototypes.try_index_job("Captain").expect("captain").clone();
        captain.access_groups.push("Bridge".to_string());

        let mut tags = AccessTags::default();
        set_access_to_job(&mut tags, &captain, false, &prototypes);
        assert!(tags.contains("Command"));
        assert!(tags.contains("Medical"));
        assert!(!tags.contains("Bridge"));
    }
}
