//! The compiled-in curriculum
//!
//! The curriculum ships inside the binary as a TOML asset and is parsed
//! once on first access. Its structural invariants (unique ids, no forward
//! prerequisite references) are checked at that point; the asset is
//! developer-owned data, so a violation is a build defect and panics.

use crate::core::models::Curriculum;
use std::sync::LazyLock;

/// Embedded curriculum data
const CURRICULUM_TOML: &str = include_str!("../assets/curriculum.toml");

static CURRICULUM: LazyLock<Curriculum> = LazyLock::new(|| {
    let curriculum: Curriculum =
        toml::from_str(CURRICULUM_TOML).expect("Failed to parse compiled-in curriculum");
    if let Err(errors) = curriculum.validate() {
        panic!("Compiled-in curriculum is invalid: {}", errors.join("; "));
    }
    curriculum
});

/// The static curriculum, parsed and validated on first access
///
/// # Panics
/// Panics if the compiled-in curriculum asset cannot be parsed or violates
/// its structural invariants (caught by tests before any release build)
#[must_use]
pub fn curriculum() -> &'static Curriculum {
    &CURRICULUM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_curriculum_parses_and_validates() {
        let curriculum = curriculum();
        assert!(!curriculum.name.is_empty());
        assert_eq!(curriculum.week_count(), 7);
    }

    #[test]
    fn every_week_has_a_checklist() {
        for week in &curriculum().weeks {
            assert!(
                !week.checklist.is_empty(),
                "week '{}' has an empty checklist",
                week.id
            );
        }
    }

    #[test]
    fn first_item_of_the_journey_has_no_prerequisites() {
        let first = curriculum()
            .items()
            .next()
            .expect("curriculum has at least one item");
        assert!(first.prerequisites.is_empty());
    }
}
