//! Question-opening tag patterns.

/// Tag sequences that open an English question: a WH-adverb, a modal verb, a
/// WH-determiner, a WH-pronoun, a present-tense verb followed by a pronoun,
/// and the full WH-pronoun/verb/pronoun/verb form.
const OPENING_SEQUENCES: &[&[&str]] = &[
    &["WRB"],
    &["MD"],
    &["WDT"],
    &["WP"],
    &["VBP", "PRP"],
    &["WP", "VBP", "PRP", "VB"],
];

/// Whether the sentence's tag sequence opens like a question.
///
/// A pattern matches when `tags[0]` equals its first tag and every subsequent
/// pattern tag is found at a strictly increasing index, each located by
/// scanning `tags` from index 1 and taking the first occurrence. The
/// first-occurrence rule is part of the contract: a repeated tag before the
/// intended one can make the index check fail even though a valid ordering
/// exists further right. Downstream consumers depend on this exact behavior.
///
/// A trailing `"!"` token suppresses the interrogative reading regardless of
/// the tags. Empty input yields `false`.
pub fn is_interrogative(tokens: &[String], tags: &[String]) -> bool {
    if tokens.is_empty() || tags.is_empty() {
        return false;
    }

    let opening = OPENING_SEQUENCES
        .iter()
        .any(|sequence| has_starting_sequence(tags, sequence));

    opening && tokens[tokens.len() - 1] != "!"
}

fn has_starting_sequence(tags: &[String], sequence: &[&str]) -> bool {
    if tags[0] != sequence[0] {
        return false;
    }

    let mut last_position = 0;
    let mut current_position = 0;
    for seq in &sequence[1..] {
        for (j, tag) in tags.iter().enumerate().skip(1) {
            if tag.as_str() == *seq {
                current_position = j;
                break;
            }
        }
        if current_position > last_position {
            last_position = current_position;
        } else {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wh_pronoun_question() {
        assert!(is_interrogative(
            &strings(&["Who", "is", "the", "best", "player", "?"]),
            &strings(&["WP", "VBZ", "DT", "JJS", "NN", "."]),
        ));
    }

    #[test]
    fn test_modal_question() {
        assert!(is_interrogative(
            &strings(&["Will", "it", "rain", "today", "?"]),
            &strings(&["MD", "PRP", "VB", "NN", "."]),
        ));
    }

    #[test]
    fn test_verb_pronoun_pair() {
        assert!(is_interrogative(
            &strings(&["Do", "you", "like", "tea", "?"]),
            &strings(&["VBP", "PRP", "VB", "NN", "."]),
        ));
    }

    #[test]
    fn test_declarative_sentence() {
        assert!(!is_interrogative(
            &strings(&["The", "cat", "sat", "."]),
            &strings(&["DT", "NN", "VBD", "."]),
        ));
    }

    #[test]
    fn test_exclamation_suppresses_question() {
        // Same opening tags as a question, exclaimed.
        assert!(!is_interrogative(
            &strings(&["How", "nice", "!"]),
            &strings(&["WRB", "JJ", "."]),
        ));
        assert!(!is_interrogative(
            &strings(&["Who", "knows", "!"]),
            &strings(&["WP", "VBZ", "."]),
        ));
    }

    #[test]
    fn test_sentence_without_final_question_mark() {
        // Eligibility does not require a question mark, only the opening tags.
        assert!(is_interrogative(
            &strings(&["Where", "do", "you", "live", "."]),
            &strings(&["WRB", "VBP", "PRP", "VB", "."]),
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(!is_interrogative(&[], &[]));
    }

    #[test]
    fn test_pattern_step_must_be_present() {
        // VBP opens the verb/pronoun pattern, but no PRP follows.
        assert!(!is_interrogative(
            &strings(&["Do", "dogs", "dream", "?"]),
            &strings(&["VBP", "NNS", "VB", "."]),
        ));
    }

    #[test]
    fn test_first_occurrence_rule() {
        // The four-tag WP/VBP/PRP/VB pattern walks to the first VBP, the
        // first PRP, then the first VB. All strictly increasing here.
        assert!(is_interrogative(
            &strings(&["What", "do", "you", "want", "to", "eat", "?"]),
            &strings(&["WP", "VBP", "PRP", "VB", "TO", "VB", "."]),
        ));
    }

    #[test]
    fn test_first_occurrence_rule_edge_case() {
        // Each step takes the first occurrence after index 0, not the first
        // occurrence after the previous step: the early VB at index 1 shadows
        // the one at index 4, so the four-tag pattern fails to complete even
        // though an ordered assignment exists.
        let tags = strings(&["WP", "VB", "VBP", "PRP", "VB"]);
        assert!(!has_starting_sequence(&tags, &["WP", "VBP", "PRP", "VB"]));
        // The single WP pattern still matches the same sentence.
        assert!(has_starting_sequence(&tags, &["WP"]));
    }
}
