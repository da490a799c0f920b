//! Day 7: Arrays
//!
//! An array's length is part of its type and assigning one copies every
//! element. Indexing past the end is a fatal fault.

use value_lessons_common::FixedSeq;

/// Days of the week, Sunday first.
#[must_use]
pub fn weekdays() -> FixedSeq<&'static str, 7> {
    FixedSeq::from([
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ])
}

#[must_use]
pub fn grades() -> FixedSeq<i64, 5> {
    FixedSeq::from([95, 88, 72, 91, 85])
}

/// Five slots with only the first three assigned.
#[must_use]
pub fn partially_filled() -> FixedSeq<i64, 5> {
    let mut numbers: FixedSeq<i64, 5> = FixedSeq::default();
    numbers[0] = 10;
    numbers[1] = 20;
    numbers[2] = 30;
    numbers
}

/// Sum of every element, widened so it cannot overflow.
#[must_use]
pub fn sum<const N: usize>(values: &FixedSeq<i64, N>) -> i128 {
    values.iter().map(|&value| i128::from(value)).sum()
}

/// Largest element, or `None` for a zero-length array.
#[must_use]
pub fn highest<const N: usize>(values: &FixedSeq<i64, N>) -> Option<i64> {
    let mut max = *values.iter().next()?;
    for &value in values {
        if value > max {
            max = value;
        }
    }
    Some(max)
}

/// Renames a day in the caller's own copy; `week` arrives by value.
#[must_use]
pub fn rename_day(
    mut week: FixedSeq<&'static str, 7>,
    index: usize,
    name: &'static str,
) -> FixedSeq<&'static str, 7> {
    week[index] = name;
    week
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => "Sunday")]
    #[test_case(3 => "Wednesday")]
    #[test_case(6 => "Saturday")]
    fn test_weekday_names(index: usize) -> &'static str {
        *weekdays().get(index)
    }

    #[test]
    fn test_zero_then_assigned() {
        let numbers = partially_filled();
        assert_eq!(numbers.to_string(), "[10 20 30 0 0]");
        assert_eq!(sum(&numbers), 60);
    }

    #[test]
    fn test_sum_of_extremes() {
        let values = FixedSeq::from([i64::MAX, i64::MAX, i64::MIN]);
        assert_eq!(sum(&values), i128::from(i64::MAX) - 1);
    }

    #[test]
    fn test_highest() {
        assert_eq!(highest(&grades()), Some(95));
        assert_eq!(highest(&FixedSeq::<i64, 0>::default()), None);
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(weekdays().last(), Some(&"Saturday"));
        assert_eq!(weekdays().len(), 7);
    }

    #[test]
    fn test_passed_array_is_a_copy() {
        let week = weekdays();
        let renamed = rename_day(week, 1, "New Monday");

        assert_eq!(week[1], "Monday");
        assert_eq!(renamed[1], "New Monday");
    }

    #[test]
    fn test_assignment_copies() {
        let original = FixedSeq::from([100, 200, 300]);
        let mut copied = original;
        copied[0] = 999;

        assert_eq!(original.to_string(), "[100 200 300]");
        assert_eq!(copied.to_string(), "[999 200 300]");
    }

    #[test]
    #[should_panic(expected = "index out of range [5] with length 5")]
    fn test_out_of_bounds_is_fatal() {
        let numbers = partially_filled();
        let _value = numbers[5];
    }
}
