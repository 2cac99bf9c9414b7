//! Static choice tables for the gender and hobbies fields

/// A selectable `{value, label}` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    const fn same(value: &'static str) -> Self {
        Self {
            value,
            label: value,
        }
    }
}

pub const GENDER_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "male",
        label: "Male",
    },
    ChoiceOption {
        value: "female",
        label: "Female",
    },
    ChoiceOption {
        value: "other",
        label: "Other",
    },
];

pub const HOBBY_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::same("Reading"),
    ChoiceOption::same("Sports"),
    ChoiceOption::same("Music"),
    ChoiceOption::same("Learning"),
    ChoiceOption::same("Dance"),
    ChoiceOption::same("Singing"),
    ChoiceOption::same("Gardening"),
    ChoiceOption::same("Cooking"),
    ChoiceOption::same("Photography"),
    ChoiceOption::same("Drawing"),
    ChoiceOption::same("Sewing"),
    ChoiceOption::same("Writing"),
    ChoiceOption::same("Creative Writing"),
    ChoiceOption::same("Guitar"),
    ChoiceOption::same("Underwater Diving"),
];

/// Returns true if `value` is one of the fixed hobby options
pub fn is_hobby(value: &str) -> bool {
    HOBBY_OPTIONS.iter().any(|o| o.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fifteen_distinct_hobbies() {
        let values: HashSet<_> = HOBBY_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(HOBBY_OPTIONS.len(), 15);
        assert_eq!(values.len(), 15);
    }

    #[test]
    fn test_hobby_labels_match_values() {
        assert!(HOBBY_OPTIONS.iter().all(|o| o.value == o.label));
    }

    #[test]
    fn test_is_hobby() {
        assert!(is_hobby("Underwater Diving"));
        assert!(!is_hobby("underwater diving"));
        assert!(!is_hobby("Knitting"));
    }

    #[test]
    fn test_gender_values() {
        let values: Vec<_> = GENDER_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["male", "female", "other"]);
    }
}
