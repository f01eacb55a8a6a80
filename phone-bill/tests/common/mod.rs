use std::{
    error::Error,
    fs::{read_dir, read_to_string},
    path::PathBuf,
    str::FromStr,
};

use rust_decimal::Decimal;

pub struct FixtureTest {
    pub path: PathBuf,
    pub log: String,
    pub total: Decimal,
}

/// Collect every directory under `resources` holding a `calls.csv` log and the expected
/// `total.txt`.
pub fn collect_fixture_tests() -> Result<Vec<FixtureTest>, Box<dyn Error>> {
    let mut tests = Vec::new();

    for test_dir in read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"))? {
        let test_dir_path = test_dir?.path();

        if !test_dir_path.is_dir() {
            continue;
        }

        let log = read_to_string(test_dir_path.join("calls.csv"))?;
        let total = read_to_string(test_dir_path.join("total.txt"))
            .unwrap_or_else(|_| panic!("no total.txt in test directory {test_dir_path:?}"));

        tests.push(FixtureTest {
            total: Decimal::from_str(total.trim())?,
            log,
            path: test_dir_path,
        });
    }

    Ok(tests)
}

#[macro_export]
macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/resources/",
            $name,
            "/calls.csv"
        ))
    };
}
