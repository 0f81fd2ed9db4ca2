use chrono::NaiveDate;
use insights_highlights::{
    highlight_pages, page_index_for_year, ArtistSparklines, CareerHighlightCategory,
    DigestConfig, DigestIssue, DigestParser, HighlightKey,
};

const SPARKLINES: &str = r#"{
  "edges": [
    { "node": { "eventDigest": null, "sparkles": "0", "year": "2016" } },
    { "node": { "eventDigest": "2017Solo Show@Ignored", "sparkles": "", "year": "2017" } },
    { "node": {
        "eventDigest": "2014Solo Show@Old Gallery;2018Group Show@Tate;2018Group Show@Whitney;2018Group Show@Tate;2021Solo Show@MoMA;2021Reviewed Solo Show@Artforum;2021Reviewed Group Show@Frieze;2022Biennial Inclusion@Venice;2022Art Fair@Basel;no year here",
        "sparkles": "4",
        "year": "2022"
    } }
  ]
}"#;

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn sparklines_to_pages() {
    let sparklines = ArtistSparklines::from_json(SPARKLINES).expect("valid sparklines");
    let digest = sparklines.select_event_digest().expect("digest selected");

    let report = DigestParser::default().parse_with_report(digest, &now());
    let map = &report.highlights;

    assert_eq!(map.years().collect::<Vec<_>>(), vec![2018, 2021, 2022]);
    assert_eq!(
        map.get(2018).unwrap().get(CareerHighlightCategory::GroupShow),
        Some(&["Tate".to_string(), "Whitney".to_string()][..])
    );
    assert_eq!(
        map.get(2021).unwrap().get(CareerHighlightCategory::Review),
        Some(&["Artforum".to_string(), "Frieze".to_string()][..])
    );
    assert_eq!(
        map.get(2022).unwrap().unknown(),
        Some(&["Basel".to_string()][..])
    );

    let issues: Vec<&DigestIssue> = report.issues.iter().map(|r| &r.issue).collect();
    assert_eq!(
        issues,
        vec![
            &DigestIssue::StaleEntry {
                year: 2014,
                minimum_year: 2016,
            },
            &DigestIssue::UnknownCategory {
                year: 2022,
                title: "Art Fair".to_string(),
            },
            &DigestIssue::UnparseableEntry,
        ]
    );
    assert_eq!(report.dropped().count(), 2);

    let pages = highlight_pages(map);
    assert_eq!(page_index_for_year(&pages, 2022), Some(2));
    let last = pages[2].sections();
    assert_eq!(last[0].headline, "Included in a major biennial");
    assert_eq!(last[1].key, HighlightKey::Unknown);
}

#[test]
fn every_year_has_a_body() {
    let digest = "2020Solo Show;2020Group Show@;2021Solo Show@MoMA;2022@Somewhere";
    let map = DigestParser::default().parse(digest, &now());

    assert!(!map.contains_year(2020));
    for (year, highlights) in &map {
        assert!(
            highlights.iter().any(|(_, bodies)| !bodies.is_empty()),
            "year {year} has no bodies"
        );
    }
    // An empty title still lands in the year, under the unknown key
    assert_eq!(
        map.get(2022).unwrap().unknown(),
        Some(&["Somewhere".to_string()][..])
    );
}

#[test]
fn window_follows_reference_date() {
    let digest = "2015Solo Show@A;2016Solo Show@B";
    let parser = DigestParser::default();

    let at_2023 = parser.parse(digest, &NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    assert_eq!(at_2023.years().collect::<Vec<_>>(), vec![2015, 2016]);

    let at_2025 = parser.parse(digest, &NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert!(at_2025.is_empty());

    let narrow = DigestParser::new(DigestConfig::with_window(2)).unwrap();
    assert!(narrow.parse_year(digest, 2019).is_empty());
}

#[test]
fn report_serializes_issue_kinds() {
    let report = DigestParser::default().parse_year_with_report("2010Solo Show@A;2023Fair@B", 2024);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["issues"][0]["issue"]["kind"], "stale_entry");
    assert_eq!(json["issues"][1]["issue"]["kind"], "unknown_category");
    assert_eq!(json["highlights"]["2023"]["Unknown"][0], "B");
}
