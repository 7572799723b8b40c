use std::collections::HashSet;
use std::fs;

use recruitdata::{
    parse, Candidate, ErrorKind, FileSink, GeneratorConfig, PipelineDriver, RecordGenerator,
    TestDataConfig,
};
use tempfile::tempdir;

fn seeded_driver(dir: &std::path::Path, seed: u64) -> (PipelineDriver, Vec<Candidate>) {
    let config = GeneratorConfig::default();
    let driver = PipelineDriver::new(TestDataConfig::new(dir), &config)
        .with_generator(RecordGenerator::with_seed(&config, seed));
    let expected = RecordGenerator::with_seed(&config, seed).generate(64);
    (driver, expected)
}

#[test]
fn generate_three_via_csv_round_trips() {
    let dir = tempdir().unwrap();
    let (mut driver, expected) = seeded_driver(dir.path(), 2024);

    let read_back = driver.generate_via_csv(3, "out.csv", "out.json").unwrap();

    assert_eq!(read_back.len(), 3);
    assert_eq!(read_back, expected[..3]);
    assert!(dir.path().join("out.csv").exists());
    assert!(dir.path().join("out.json").exists());
}

#[test]
fn round_trip_keeps_fields_for_any_batch_size() {
    for n in [0usize, 1, 7, 50] {
        let dir = tempdir().unwrap();
        let config = GeneratorConfig::default();
        let batch = RecordGenerator::with_seed(&config, n as u64).generate(n);
        let sink = FileSink::new(TestDataConfig::new(dir.path()));

        sink.write_csv(&batch, "batch.csv").unwrap();
        let rows = parse(&fs::read_to_string(dir.path().join("batch.csv")).unwrap(), ',').unwrap();
        let parsed: Vec<Candidate> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Candidate::from_row(row, i + 1).unwrap())
            .collect();
        sink.write_json(&parsed, "batch.json").unwrap();
        let read_back = sink.read_json("batch.json").unwrap();

        assert_eq!(read_back.len(), n);
        for (original, copy) in batch.iter().zip(&read_back) {
            assert_eq!(copy.firstname, original.firstname);
            assert_eq!(copy.lastname, original.lastname);
            assert_eq!(copy.vacancy, original.vacancy);
            assert_eq!(copy.email, original.email);
            assert_eq!(copy.contact_no, original.contact_no);
        }
    }
}

#[test]
fn header_order_does_not_matter() {
    let rows = parse(
        "contactNo,email,vacancy,lastname,firstname\n0123456789,jo@example.com,Senior QA Lead,Bloggs,Jo\n",
        ',',
    )
    .unwrap();

    assert_eq!(rows[0].get("firstname"), Some("Jo"));
    assert_eq!(rows[0].get("lastname"), Some("Bloggs"));
    assert_eq!(rows[0].get("vacancy"), Some("Senior QA Lead"));
    assert_eq!(rows[0].get("email"), Some("jo@example.com"));
    assert_eq!(rows[0].get("contactNo"), Some("0123456789"));
}

#[test]
fn short_rows_fill_with_empty_strings() {
    let rows = parse("firstname,lastname,vacancy,email,contactNo\nJo,Bloggs\n", ',').unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("vacancy"), Some(""));
    assert_eq!(rows[0].get("email"), Some(""));
    assert_eq!(rows[0].get("contactNo"), Some(""));
}

#[test]
fn trailing_blank_line_produces_no_row() {
    let rows = parse("firstname,lastname\nJo,Bloggs\n\n", ',').unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn empty_batch_is_not_an_error() {
    let dir = tempdir().unwrap();
    let (mut driver, _) = seeded_driver(dir.path(), 1);

    assert!(driver.generate_to_json(0, "empty.json").unwrap().is_empty());
    assert!(driver.generate_via_csv(0, "empty.csv", "empty2.json").unwrap().is_empty());
}

#[test]
fn vacancy_stays_in_configured_set() {
    let config = GeneratorConfig::new(["Software Engineer", "Senior QA Lead"]).unwrap();
    let allowed: HashSet<&String> = config.designations().iter().collect();

    let batch = RecordGenerator::new(&config).generate(1000);

    assert_eq!(batch.len(), 1000);
    assert!(batch.iter().all(|c| allowed.contains(&c.vacancy)));
}

#[test]
fn semicolon_delimited_flow() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig::default();
    let data = TestDataConfig::new(dir.path()).with_delimiter(';').unwrap();
    let mut driver = PipelineDriver::new(data, &config).with_generator(RecordGenerator::with_seed(&config, 9));

    let read_back = driver.generate_via_csv(5, "semi.csv", "semi.json").unwrap();

    assert_eq!(read_back, RecordGenerator::with_seed(&config, 9).generate(5));
    let csv = fs::read_to_string(dir.path().join("semi.csv")).unwrap();
    assert!(csv.starts_with("firstname;lastname;vacancy;email;contactNo\n"));
}

#[test]
fn corrupt_json_is_malformed_input() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("broken.json"), "[{\"firstname\": ").unwrap();
    let sink = FileSink::new(TestDataConfig::new(dir.path()));

    let err = sink.read_json("broken.json").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn whitespace_delimiter_is_refused_up_front() {
    let dir = tempdir().unwrap();

    let err = TestDataConfig::new(dir.path()).with_delimiter(' ').unwrap_err();

    assert_eq!(recruitdata::PipelineError::from(err).kind(), ErrorKind::Configuration);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
