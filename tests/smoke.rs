//! Integration smoke tests for `journey_tracker`

use journey_tracker::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
