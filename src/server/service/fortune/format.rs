use std::sync::LazyLock;

use regex::Regex;

use crate::model::fortune::{FortuneResult, NarrativeKind};

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"。\s*").expect("valid regex"));

/// Puts a blank line after every `。`, replacing any whitespace that followed it.
pub fn format_paragraphs(text: &str) -> String {
    SENTENCE_END.replace_all(text, "。\n\n").into_owned()
}

/// Applies [`format_paragraphs`] to the four narrative sections.
pub fn format_narratives(result: &mut FortuneResult) {
    for kind in NarrativeKind::ALL {
        let narrative = result.narrative_mut(kind);
        *narrative = format_paragraphs(narrative);
    }
}
