use dsp_datagen::{Record, Region};
use rstest::rstest;

const SOURCE: &str = "\
// Hand-written header.
use std::fmt::Debug;

pub enum DSPItem {
    // DSPItem enum start
    Old = 1,
    Older = 2,
    // DSPItem enum end
}

impl DSPItem {}
";

fn records(count: u32) -> Vec<Record> {
    (1..=count)
        .map(|n| Record::new(n, format!("Item {n}"), format!("物品 {n}")).unwrap())
        .collect()
}

/// Removes everything strictly between the two marker lines.
fn outside_region(text: &str, region: &Region) -> String {
    let mut kept = String::new();
    let mut inside = false;
    for line in text.split_inclusive('\n') {
        if line.contains(&region.end_marker()) {
            inside = false;
        }
        if !inside {
            kept.push_str(line);
        }
        if line.contains(&region.start_marker()) {
            inside = true;
        }
    }
    kept
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(50)]
fn test_content_outside_region_is_preserved(#[case] count: u32) {
    let region = Region::enum_variants("DSPItem");
    let output = region.rewrite(SOURCE, &records(count)).unwrap();

    assert_eq!(outside_region(&output, &region), outside_region(SOURCE, &region));
    assert_eq!(output.lines().count(), SOURCE.lines().count() - 2 + count as usize);
}

#[test]
fn test_generated_lines_follow_record_order() {
    let region = Region::enum_variants("DSPItem");
    let records = vec![
        Record::new(3, "Gamma", "丙").unwrap(),
        Record::new(1, "Alpha", "甲").unwrap(),
        Record::new(2, "Beta", "乙").unwrap(),
    ];

    let output = region.rewrite(SOURCE, &records).unwrap();

    let generated: Vec<&str> = output
        .lines()
        .skip_while(|line| !line.contains("DSPItem enum start"))
        .skip(1)
        .take_while(|line| !line.contains("DSPItem enum end"))
        .collect();
    assert_eq!(
        generated,
        vec!["    Gamma = 3,", "    Alpha = 1,", "    Beta = 2,"]
    );
}

#[test]
fn test_rewrite_is_idempotent() {
    let region = Region::enum_variants("DSPItem");
    let once = region.rewrite(SOURCE, &records(4)).unwrap();
    let twice = region.rewrite(&once, &records(4)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_file_without_trailing_newline() {
    let source = "a\n//DSPItem enum start\n//DSPItem enum end";
    let output = Region::enum_variants("DSPItem")
        .rewrite(source, &records(1))
        .unwrap();
    assert_eq!(output, "a\n//DSPItem enum start\n    Item1 = 1,\n//DSPItem enum end");
}
