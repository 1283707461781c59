use std::collections::HashMap;

use crate::constants::MATERIAL_ASSET_CHANGE_RATIO;
use crate::rankings::{BankRecord, ChangeRecord};

/// Compare `current` against `previous`, keyed by bank name.
///
/// Walks `current` in order and emits at most one change per record, the
/// first rule that applies:
/// 1. no previous record with that name: new entrant
/// 2. rank differs: rank change
/// 3. assets moved by more than 5% of the previous value: asset change
///
/// A record whose rank changed is never also reported for its assets.
/// Banks that only appear in `previous` are not reported.
pub fn detect_changes(previous: &[BankRecord], current: &[BankRecord]) -> Vec<ChangeRecord> {
    let mut by_name: HashMap<&str, &BankRecord> = HashMap::with_capacity(previous.len());
    for record in previous {
        // First occurrence wins on duplicate names.
        by_name.entry(record.bank_name.as_str()).or_insert(record);
    }

    current
        .iter()
        .filter_map(|record| match by_name.get(record.bank_name.as_str()) {
            None => Some(ChangeRecord::new_entrant(&record.bank_name, record.rank)),
            Some(prev) if prev.rank != record.rank => Some(ChangeRecord::rank_change(
                &record.bank_name,
                prev.rank,
                record.rank,
            )),
            Some(prev) => asset_change_percent(prev.assets, record.assets)
                .map(|percent| ChangeRecord::asset_change(&record.bank_name, percent)),
        })
        .collect()
}

/// Signed percentage move rounded to 2 places, when it is material.
fn asset_change_percent(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    if (current - previous).abs() <= previous * MATERIAL_ASSET_CHANGE_RATIO {
        return None;
    }
    let percent = (current - previous) / previous * 100.0;
    Some((percent * 100.0).round() / 100.0)
}
