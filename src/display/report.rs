//! One-line reports for search results.

use jwt_crack::SearchOutcome;

/// Show a secret as text. Word-list lines may hold arbitrary bytes.
pub fn secret_text(secret: &[u8]) -> String {
    String::from_utf8_lossy(secret).into_owned()
}

/// The line printed when a candidate is rejected in verbose mode.
pub fn miss_line(secret: &[u8]) -> String {
    format!("incorrect secret: {}", secret_text(secret))
}

/// The line printed once a scan reaches a terminal state.
pub fn outcome_line<S: AsRef<[u8]>>(outcome: &SearchOutcome<S>, attempts: u64) -> String {
    match outcome {
        SearchOutcome::Found(secret) => format!("correct secret: {}", secret_text(secret.as_ref())),
        SearchOutcome::NotFound => {
            format!("no secret in word list matched ({attempts} candidates tried)")
        }
        SearchOutcome::Cancelled => format!("scan cancelled after {attempts} candidates"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_line() {
        let outcome = SearchOutcome::Found(b"hunter2".to_vec());
        assert_eq!(outcome_line(&outcome, 7), "correct secret: hunter2");
    }

    #[test]
    fn test_not_found_line_counts_attempts() {
        let outcome: SearchOutcome<Vec<u8>> = SearchOutcome::NotFound;
        assert_eq!(
            outcome_line(&outcome, 3),
            "no secret in word list matched (3 candidates tried)"
        );
    }

    #[test]
    fn test_cancelled_line() {
        let outcome: SearchOutcome<&str> = SearchOutcome::Cancelled;
        assert_eq!(outcome_line(&outcome, 0), "scan cancelled after 0 candidates");
    }

    #[test]
    fn test_miss_line_is_lossy_for_binary_secrets() {
        assert_eq!(miss_line(b"\xffx"), "incorrect secret: \u{fffd}x");
    }
}
