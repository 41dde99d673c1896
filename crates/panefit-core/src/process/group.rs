use std::cmp::Ordering;
use std::collections::HashMap;

use crate::ProcessRecord;

/// Collapses records sharing an image name (case-insensitive) into one.
///
/// Groups are returned in the order their first member appears. Each
/// multi-record group is reduced with [`compare_candidates`].
pub fn group_by_image(records: Vec<ProcessRecord>) -> Vec<ProcessRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<ProcessRecord>> = Vec::new();

    for record in records {
        let slot = *index.entry(record.image_key()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(record);
    }

    groups
        .into_iter()
        .filter_map(|group| group.into_iter().max_by(compare_candidates))
        .collect()
}

/// Orders two instances of the same application; the greater one is the
/// better representative.
///
/// Longer window title first, then higher memory usage, then lower pid.
/// Title length is counted in characters, not UTF-8 bytes.
pub fn compare_candidates(a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
    title_len(a)
        .cmp(&title_len(b))
        .then(a.memory_bytes.cmp(&b.memory_bytes))
        .then(b.pid.cmp(&a.pid))
}

fn title_len(record: &ProcessRecord) -> usize {
    record.title().chars().count()
}
