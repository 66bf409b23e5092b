use ecoinsights_reports::ingestion::dataset_from_json_path;
use ecoinsights_reports::sink::MemorySink;
use ecoinsights_reports::summary::summarize;
use ecoinsights_reports::types::{Dataset, GridStatus, ReportKind};
use ecoinsights_reports::ReportService;

#[test]
fn waste_fixture_feeds_a_full_csv_export() {
    let ds = dataset_from_json_path(ReportKind::Waste, "tests/fixtures/wasteData.json").unwrap();
    assert_eq!(ds.record_count(), 6);

    let service = ReportService::new(MemorySink::new());
    service
        .generate_csv(ReportKind::Waste, &ds, "waste_data")
        .unwrap();

    let text = String::from_utf8(service.sink().artifacts()[0].bytes.clone()).unwrap();
    let lines: Vec<&str> = text.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Month,Plastic,Paper,Glass,Organic,E-Waste");
    assert_eq!(lines[1], "Jan,12,8,5,20,2");
}

#[test]
fn energy_fixture_reports_only_weekly_readings() {
    let ds = dataset_from_json_path(ReportKind::Energy, "tests/fixtures/energyData.json").unwrap();
    assert_eq!(ds.record_count(), 7);

    // 320+280+305+340+360+290+250
    let text = summarize(ReportKind::Energy, &ds).unwrap();
    assert!(text.contains("2145 kWh"), "summary was: {text}");
}

#[test]
fn grid_fixture_counts_critical_blocks() {
    let ds = dataset_from_json_path(ReportKind::Grid, "tests/fixtures/gridData.json").unwrap();
    match &ds {
        Dataset::Grid(blocks) => {
            assert_eq!(blocks.len(), 10);
            let critical = blocks
                .iter()
                .filter(|b| b.status == GridStatus::Critical)
                .count();
            assert_eq!(critical, 3);
        }
        other => panic!("expected grid dataset, got {:?}", other.kind()),
    }

    let text = summarize(ReportKind::Grid, &ds).unwrap();
    assert!(text.contains("Out of 10 monitored blocks"));
    assert!(text.contains("3 are currently flagged as 'Critical'"));
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let err = dataset_from_json_path(ReportKind::Waste, "tests/fixtures/nope.json").unwrap_err();
    assert!(err.to_string().contains("io error"));
}
