#[cfg(test)]
pub mod fixtures {
    const PROSE_SENTENCE: &str = "Photosynthesis lets plants turn sunlight, water and carbon dioxide into sugar and oxygen. ";

    const CODE_SNIPPET: &str = "import math\n\
        def area(radius):\n    return math.pi * radius ** 2\n\
        class Circle:\n    def __init__(self, r):\n        self.r = r;\n\
        print(area(2))\n";

    /// Prose note of exactly `len` characters with no code markers.
    pub fn prose_note(len: usize) -> String {
        PROSE_SENTENCE.chars().cycle().take(len).collect()
    }

    /// Code-heavy note long enough to be quizzed.
    pub fn code_note() -> String {
        CODE_SNIPPET.repeat(2)
    }

    pub fn qa_payload() -> &'static str {
        r#"{"questions":[{"type":"qa","question":"Q1?","answer":"A1"}]}"#
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::content_classifier::ContentKind;

    #[test]
    fn test_fixtures_prose_note() {
        let note = prose_note(120);
        assert_eq!(note.chars().count(), 120);
        assert_eq!(ContentKind::classify(&note), ContentKind::Prose);
    }

    #[test]
    fn test_fixtures_code_note() {
        let note = code_note();
        assert!(note.trim().chars().count() >= 100);
        assert_eq!(ContentKind::classify(&note), ContentKind::CodeHeavy);
    }
}
