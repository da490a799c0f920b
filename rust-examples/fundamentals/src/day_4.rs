//! Day 4: Loops
//!
//! Counting loops, condition loops, an unbounded loop left with `break`, and
//! iteration over the characters of a string.

/// Sum of 1..=n with a counting loop.
///
/// ```
/// use value_lessons_fundamentals::day_4::sum_to;
/// assert_eq!(sum_to(10), 55);
/// ```
#[must_use]
pub fn sum_to(n: u64) -> u128 {
    sum_between(1, n)
}

/// Sum of `from..=to` with a counting loop. The total is widened, so no
/// pair of bounds overflows it.
#[must_use]
pub fn sum_between(from: u64, to: u64) -> u128 {
    let mut sum = 0;
    for i in from..=to {
        sum += u128::from(i);
    }
    sum
}

/// Counts down from `from` to 1 with a condition loop.
#[must_use]
pub fn countdown(from: u32) -> Vec<u32> {
    let mut count = from;
    let mut ticks = Vec::with_capacity(from as usize);
    while count > 0 {
        ticks.push(count);
        count -= 1;
    }
    ticks
}

/// How a run of password attempts ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Login {
    Granted { attempt: usize },
    Locked { attempts: usize },
    /// Input ran out before success or lockout.
    Abandoned { attempts: usize },
}

/// Tries each entered password in turn, stopping at the first match or after
/// `max_attempts` failures.
pub fn authenticate<'a, I>(entered: I, password: &str, max_attempts: usize) -> Login
where
    I: IntoIterator<Item = &'a str>,
{
    let mut attempts = 0;
    let mut inputs = entered.into_iter();

    loop {
        let Some(candidate) = inputs.next() else {
            break Login::Abandoned { attempts };
        };
        attempts += 1;

        if candidate == password {
            break Login::Granted { attempt: attempts };
        }
        tracing::debug!(attempt = attempts, "incorrect password");

        if attempts >= max_attempts {
            break Login::Locked { attempts };
        }
    }
}

/// Characters of `s` with the byte offset each one starts at.
///
/// ```
/// use value_lessons_fundamentals::day_4::runes;
/// assert_eq!(runes("你好 Go!")[..3], [(0, '你'), (3, '好'), (6, ' ')]);
/// ```
#[must_use]
pub fn runes(s: &str) -> Vec<(usize, char)> {
    s.char_indices().collect()
}

/// Unicode notation for a character, e.g. `U+4F60`.
#[must_use]
pub fn code_point(c: char) -> String {
    format!("U+{:04X}", u32::from(c))
}

/// Pairs each item with its 1-based position.
pub fn numbered<T>(items: impl IntoIterator<Item = T>) -> impl Iterator<Item = (usize, T)> {
    items.into_iter().enumerate().map(|(i, item)| (i + 1, item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_to() {
        assert_eq!(sum_to(10), 55);
        assert_eq!(sum_to(0), 0);
    }

    #[test]
    fn test_sum_between_near_max() {
        let expected = 2 * u128::from(u64::MAX) - 1;
        assert_eq!(sum_between(u64::MAX - 1, u64::MAX), expected);
        assert_eq!(sum_between(5, 4), 0);
    }

    #[test]
    fn test_countdown() {
        assert_eq!(countdown(5), vec![5, 4, 3, 2, 1]);
        assert!(countdown(0).is_empty());
    }

    #[test]
    fn test_granted_on_second_attempt() {
        let outcome = authenticate(["wrong", "gosecret", "another_wrong"], "gosecret", 3);
        assert_eq!(outcome, Login::Granted { attempt: 2 });
    }

    #[test]
    fn test_locked_after_max_attempts() {
        let outcome = authenticate(["a", "b", "c", "gosecret"], "gosecret", 3);
        assert_eq!(outcome, Login::Locked { attempts: 3 });
    }

    #[test]
    fn test_abandoned_when_input_runs_out() {
        assert_eq!(
            authenticate(["nope"], "gosecret", 3),
            Login::Abandoned { attempts: 1 }
        );
    }

    #[test]
    fn test_runes_use_byte_offsets() {
        let positions: Vec<usize> = runes("你好 Go!").iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![0, 3, 6, 7, 8, 9]);
    }

    #[test]
    fn test_code_point() {
        assert_eq!(code_point('你'), "U+4F60");
        assert_eq!(code_point('G'), "U+0047");
    }

    #[test]
    fn test_numbered() {
        let fruits = ["Apple", "Banana", "Cherry", "Date"];
        let listed: Vec<_> = numbered(fruits).collect();
        assert_eq!(listed[0], (1, "Apple"));
        assert_eq!(listed[3], (4, "Date"));
    }
}
