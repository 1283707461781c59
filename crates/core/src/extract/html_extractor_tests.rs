#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use crate::extract::{ColumnMapping, HtmlTableExtractor, RawRow, TableExtractor};

    const HEADER: &str = "<tr><th>Bank Name / Holding Co Name</th><th>Nat'l Rank</th><th>Bank ID</th>\
        <th>Bank Location</th><th>Charter</th><th>Consol Assets (Mil $)</th></tr>";

    fn data_row(name: &str, rank: &str, location: &str, assets: &str) -> String {
        format!(
            "<tr><td>{}</td><td>{}</td><td>852218</td><td>{}</td><td>NAT</td><td>{}</td></tr>",
            name, rank, location, assets
        )
    }

    fn page(tables: &[String]) -> String {
        format!(
            "<html><head><title>Large Commercial Banks</title></head><body>{}</body></html>",
            tables.join("\n")
        )
    }

    fn ranking_table(rows: &[String]) -> String {
        format!("<table>{}{}</table>", HEADER, rows.concat())
    }

    #[test]
    fn test_extracts_records_from_ranking_table() {
        let doc = page(&[ranking_table(&[
            data_row(
                "JPMORGAN CH BK NA/JPMORGAN CHASE &amp; CO",
                "1",
                "COLUMBUS, OH",
                "$3,640,000",
            ),
            data_row(
                "BANK OF AMER NA/BANK OF AMER CORP",
                "2",
                "CHARLOTTE, NC",
                "$2,540,000",
            ),
        ])]);

        let at = Utc.with_ymd_and_hms(2026, 10, 12, 6, 0, 0).unwrap();
        let records = HtmlTableExtractor::default().extract(&doc, at);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[0].bank_name, "JPMORGAN CH BK NA");
        assert_eq!(records[0].holding_company, "JPMORGAN CHASE & CO");
        assert_eq!(records[0].location, "COLUMBUS, OH");
        assert_eq!(records[0].assets, 3_640_000.0);
        assert_eq!(records[0].scraped_at, at);
        assert_eq!(records[1].bank_name, "BANK OF AMER NA");
        assert_eq!(records[1].assets, 2_540_000.0);
    }

    #[test]
    fn test_selects_first_table_with_both_header_tokens() {
        let layout = "<table><tr><td>Release date</td><td>Assets</td></tr>\
            <tr><td>x</td><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td></tr></table>"
            .to_string();
        let first = ranking_table(&[data_row("FIRST BK", "1", "A, OH", "100")]);
        let second = ranking_table(&[data_row("SECOND BK", "1", "B, OH", "200")]);

        let records = HtmlTableExtractor::default().extract(&page(&[layout, first, second]), Utc::now());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bank_name, "FIRST BK");
    }

    #[test]
    fn test_no_qualifying_table_yields_nothing() {
        let doc = page(&["<table><tr><th>Name</th><th>Total</th></tr>\
            <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>1</td></tr></table>"
            .to_string()]);
        assert!(HtmlTableExtractor::default().extract_rows(&doc).is_empty());
        assert!(HtmlTableExtractor::default().extract_rows("").is_empty());
    }

    #[test]
    fn test_header_tokens_are_case_sensitive() {
        let doc = page(&["<table><tr><th>bank name</th><th>assets</th></tr></table>".to_string()]);
        assert!(HtmlTableExtractor::default().extract_rows(&doc).is_empty());
    }

    #[test]
    fn test_rejects_malformed_rows() {
        let doc = page(&[ranking_table(&[
            "<tr><td>SHORT BK</td><td>1</td><td>x</td><td>y</td><td>100</td></tr>".to_string(),
            data_row("Summary:", "", "", "$9,999,999"),
            data_row("", "2", "NOWHERE", "100"),
            data_row(" / ORPHAN HOLDING", "2", "NOWHERE", "100"),
            data_row("NO ASSETS BK", "3", "A, OH", ""),
            data_row("UNKNOWN BK", "4", "A, OH", "n/a"),
            data_row("ZERO BK", "5", "A, OH", "$0"),
            data_row("GOOD BK", "6", "A, OH", "$1,000"),
        ])]);

        let records = HtmlTableExtractor::default().extract(&doc, Utc::now());

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].bank_name, "GOOD BK");
        assert_eq!(records[0].rank, 6);
    }

    #[test]
    fn test_rank_falls_back_to_accepted_count() {
        let doc = page(&[ranking_table(&[
            data_row("FIRST BK", "", "A, OH", "300"),
            data_row("SKIPPED BK", "", "A, OH", "n/a"),
            data_row("SECOND BK", "unranked", "B, OH", "200"),
        ])]);

        let records = HtmlTableExtractor::default().extract(&doc, Utc::now());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[1].rank, 2);
    }

    #[test]
    fn test_caps_at_forty_records() {
        let rows: Vec<String> = (1..=55)
            .map(|i| data_row(&format!("BANK {}", i), &i.to_string(), "A, OH", "1,000"))
            .collect();
        let doc = page(&[ranking_table(&rows)]);

        let records = HtmlTableExtractor::default().extract(&doc, Utc::now());

        assert_eq!(records.len(), 40);
        assert_eq!(records[39].bank_name, "BANK 40");
    }

    #[test]
    fn test_only_td_cells_count_in_data_rows() {
        let row = "<tr><th>BANK WITH TH</th><td>1</td><td>x</td><td>A, OH</td><td>NAT</td><td>100</td></tr>";
        let doc = page(&[ranking_table(&[row.to_string()])]);

        assert!(HtmlTableExtractor::default().extract_rows(&doc).is_empty());
    }

    #[test]
    fn test_custom_mapping_moves_columns() {
        let mapping = ColumnMapping {
            version: 2,
            assets: 6,
            min_cells: 7,
            ..ColumnMapping::default()
        };
        let doc = page(&["<table><tr><th>Bank Name</th><th>Rank</th><th>ID</th><th>Location</th>\
            <th>Charter</th><th>Domestic</th><th>Consol Assets</th></tr>\
            <tr><td>MOVED BK</td><td>1</td><td>9</td><td>A, OH</td><td>NAT</td><td>5</td><td>$700</td></tr></table>"
            .to_string()]);

        let rows = HtmlTableExtractor::new(mapping.clone()).extract_rows(&doc);
        assert_eq!(
            rows,
            vec![RawRow::new(
                ["MOVED BK", "1", "9", "A, OH", "NAT", "5", "$700"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            )]
        );

        let records = HtmlTableExtractor::new(mapping).extract(&doc, Utc::now());
        assert_eq!(records[0].assets, 700.0);
    }
}
