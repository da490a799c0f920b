//! Day 3: Control Flow
//!
//! Branching with `if`/`else if` chains, value switches, condition-only
//! switches, and a switch whose cases fall through to the next one.

use std::cmp::Ordering;

// =============================================================================
// Grade Calculator (if / else if / else)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    #[must_use]
    pub fn remark(self) -> &'static str {
        match self {
            Grade::A => "Excellent!",
            Grade::B => "Very Good",
            Grade::C => "Good",
            Grade::D => "Pass",
            Grade::F => "Fail",
        }
    }
}

/// Letter grade for a score: 90 and up is an A, each band below is ten wide.
#[must_use]
pub fn grade(score: u32) -> Grade {
    if score >= 90 {
        Grade::A
    } else if score >= 80 {
        Grade::B
    } else if score >= 70 {
        Grade::C
    } else if score >= 60 {
        Grade::D
    } else {
        Grade::F
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

#[must_use]
pub fn classify(n: i64) -> Sign {
    match n.cmp(&0) {
        Ordering::Greater => Sign::Positive,
        Ordering::Less => Sign::Negative,
        Ordering::Equal => Sign::Zero,
    }
}

// =============================================================================
// Day of the Week (value switch)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    #[must_use]
    pub fn is_weekend(self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    #[must_use]
    pub fn note(self) -> &'static str {
        match self {
            Weekday::Sunday | Weekday::Saturday => "A weekend day!",
            Weekday::Monday => "Start of the week!",
            Weekday::Friday => "Almost weekend!",
            _ => "",
        }
    }
}

/// Day number to weekday, 1 being Sunday. Anything outside 1..=7 is `None`.
#[must_use]
pub fn weekday(day: u8) -> Option<Weekday> {
    match day {
        1 => Some(Weekday::Sunday),
        2 => Some(Weekday::Monday),
        3 => Some(Weekday::Tuesday),
        4 => Some(Weekday::Wednesday),
        5 => Some(Weekday::Thursday),
        6 => Some(Weekday::Friday),
        7 => Some(Weekday::Saturday),
        _ => None,
    }
}

// =============================================================================
// Activity Suggestion (condition-only switch)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    StayIndoors,
    Walk,
    Outdoors,
    FindShade,
}

#[must_use]
pub fn activity(celsius: i32) -> Activity {
    match celsius {
        t if t < 10 => Activity::StayIndoors,
        t if t < 20 => Activity::Walk,
        t if t < 30 => Activity::Outdoors,
        _ => Activity::FindShade,
    }
}

// =============================================================================
// Fallthrough
// =============================================================================

/// Cases in order; a match runs its fact and every fact after it.
const CITY_CHAIN: [(&str, &str); 3] = [
    ("New York", "Big Apple!"),
    ("London", "Capital of the UK!"),
    ("Paris", "City of Love!"),
];

/// Facts printed for `city` by a switch whose cases fall through.
#[must_use]
pub fn city_facts(city: &str) -> Vec<&'static str> {
    match CITY_CHAIN.iter().position(|(name, _)| *name == city) {
        Some(start) => CITY_CHAIN[start..].iter().map(|(_, fact)| *fact).collect(),
        None => vec!["Unknown city."],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(95 => Grade::A)]
    #[test_case(90 => Grade::A)]
    #[test_case(89 => Grade::B)]
    #[test_case(78 => Grade::C)]
    #[test_case(60 => Grade::D)]
    #[test_case(0 => Grade::F)]
    fn test_grade(score: u32) -> Grade {
        grade(score)
    }

    #[test]
    fn test_remark() {
        assert_eq!(grade(78).remark(), "Good");
    }

    #[test_case(10 => Sign::Positive)]
    #[test_case(-3 => Sign::Negative)]
    #[test_case(0 => Sign::Zero)]
    fn test_classify(n: i64) -> Sign {
        classify(n)
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday(3), Some(Weekday::Tuesday));
        assert_eq!(weekday(0), None);
        assert_eq!(weekday(8), None);
        assert!(weekday(7).is_some_and(Weekday::is_weekend));
        assert_eq!(weekday(2).map(Weekday::note), Some("Start of the week!"));
    }

    #[test_case(5 => Activity::StayIndoors)]
    #[test_case(10 => Activity::Walk)]
    #[test_case(25 => Activity::Outdoors)]
    #[test_case(30 => Activity::FindShade)]
    fn test_activity(celsius: i32) -> Activity {
        activity(celsius)
    }

    #[test]
    fn test_fallthrough() {
        assert_eq!(
            city_facts("New York"),
            ["Big Apple!", "Capital of the UK!", "City of Love!"]
        );
        assert_eq!(city_facts("London"), ["Capital of the UK!", "City of Love!"]);
        assert_eq!(city_facts("Paris"), ["City of Love!"]);
        assert_eq!(city_facts("Tokyo"), ["Unknown city."]);
    }
}
