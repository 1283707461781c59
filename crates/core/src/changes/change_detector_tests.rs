#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::changes::detect_changes;
    use crate::rankings::{BankRecord, ChangeKind};

    fn bank(name: &str, rank: u32, assets: f64) -> BankRecord {
        BankRecord {
            rank,
            bank_name: name.to_string(),
            holding_company: String::new(),
            location: String::new(),
            assets,
            scraped_at: Utc.with_ymd_and_hms(2026, 10, 12, 6, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_identical_snapshots_have_no_changes() {
        let banks = vec![bank("Bank A", 1, 1_000_000.0), bank("Bank B", 2, 500_000.0)];
        assert!(detect_changes(&banks, &banks).is_empty());
    }

    #[test]
    fn test_new_entrant_and_asset_change_drop_is_silent() {
        let previous = vec![bank("Bank A", 1, 1_000_000.0), bank("Bank B", 2, 500_000.0)];
        let current = vec![bank("Bank A", 1, 1_100_000.0), bank("Bank C", 2, 600_000.0)];

        let changes = detect_changes(&previous, &current);

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].bank_name, "Bank A");
        assert_eq!(changes[0].kind, ChangeKind::AssetChange { percent: 10.0 });
        assert_eq!(changes[0].description, "Bank A: assets changed by +10.00%");
        assert_eq!(changes[1].bank_name, "Bank C");
        assert_eq!(changes[1].kind, ChangeKind::NewEntrant { rank: 2 });
        assert!(changes.iter().all(|c| c.bank_name != "Bank B"));
    }

    /// Rank changes take precedence: assets are not evaluated once the rank
    /// moved, even when they also moved materially.
    #[test]
    fn test_rank_change_suppresses_asset_change() {
        let previous = vec![bank("X", 2, 100.0)];
        let current = vec![bank("X", 1, 100.0)];
        let changes = detect_changes(&previous, &current);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::RankChange { from: 2, to: 1 });
        assert_eq!(changes[0].description, "X: rank changed from 2 to 1");

        let current = vec![bank("X", 1, 500.0)];
        let changes = detect_changes(&previous, &current);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind, ChangeKind::RankChange { from: 2, to: 1 });
    }

    #[test]
    fn test_small_asset_moves_are_ignored() {
        let previous = vec![bank("Bank A", 1, 1_000.0)];
        let current = vec![bank("Bank A", 1, 1_040.0)];
        assert!(detect_changes(&previous, &current).is_empty());

        let current = vec![bank("Bank A", 1, 960.0)];
        assert!(detect_changes(&previous, &current).is_empty());
    }

    #[test]
    fn test_asset_decrease_is_signed_and_rounded() {
        let previous = vec![bank("Bank A", 1, 3_000.0)];
        let current = vec![bank("Bank A", 1, 2_000.0)];

        let changes = detect_changes(&previous, &current);

        assert_eq!(changes[0].kind, ChangeKind::AssetChange { percent: -33.33 });
        assert_eq!(changes[0].description, "Bank A: assets changed by -33.33%");
    }

    #[test]
    fn test_zero_previous_assets_reports_nothing() {
        let previous = vec![bank("Bank A", 1, 0.0)];
        let current = vec![bank("Bank A", 1, 1_000.0)];
        assert!(detect_changes(&previous, &current).is_empty());
    }

    #[test]
    fn test_duplicate_previous_names_use_first_match() {
        let previous = vec![bank("Dup", 3, 100.0), bank("Dup", 7, 100.0)];
        let current = vec![bank("Dup", 3, 100.0)];
        assert!(detect_changes(&previous, &current).is_empty());
    }

    #[test]
    fn test_output_follows_current_order() {
        let previous = vec![bank("A", 1, 100.0), bank("B", 2, 100.0)];
        let current = vec![bank("C", 1, 100.0), bank("B", 2, 200.0), bank("A", 3, 100.0)];

        let changes = detect_changes(&previous, &current);
        let names: Vec<&str> = changes.iter().map(|c| c.bank_name.as_str()).collect();

        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_empty_previous_marks_everything_new() {
        let current = vec![bank("A", 1, 100.0), bank("B", 2, 50.0)];
        let changes = detect_changes(&[], &current);
        assert_eq!(changes.len(), 2);
        assert!(changes
            .iter()
            .all(|c| matches!(c.kind, ChangeKind::NewEntrant { .. })));
    }
}
