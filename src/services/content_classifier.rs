const CODE_MARKERS: [&str; 11] = [
    "import ", "from ", "def ", "class ", "{", "}", ";", "=>", "()", "print(", "const ",
];

const CODE_MARKER_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    CodeHeavy,
    Prose,
}

impl ContentKind {
    /// Coarse heuristic: each marker counts once no matter how often it occurs.
    pub fn classify(text: &str) -> Self {
        let present = CODE_MARKERS
            .iter()
            .filter(|marker| text.contains(*marker))
            .count();

        if present >= CODE_MARKER_THRESHOLD {
            ContentKind::CodeHeavy
        } else {
            ContentKind::Prose
        }
    }

    pub fn is_code_heavy(&self) -> bool {
        matches!(self, ContentKind::CodeHeavy)
    }
}
