#![no_main]

use libfuzzer_sys::fuzz_target;
use lemng_testgen::model::ExperimentDescription;
use lemng_testgen::reference::parse_results;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Parsed records always account for every line
        if let Ok(results) = parse_results(s) {
            assert_eq!(s.lines().count(), 5 + 6 * results.eigenzones.len());
        }
        // Descriptions must never panic on decode
        let _ = ExperimentDescription::from_json(s);
    }
});
