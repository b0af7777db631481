mod common;

use common::w;
use wordle_optimal::{Feedback, FeedbackPattern, Rules};

fn pattern(guess: &str, secret: &str) -> FeedbackPattern {
    FeedbackPattern::calculate(&w(guess), &w(secret))
}

fn legacy(guess: &str, secret: &str) -> FeedbackPattern {
    FeedbackPattern::calculate_with(Rules::Legacy, &w(guess), &w(secret))
}

fn p(s: &str) -> FeedbackPattern {
    FeedbackPattern::parse(s).unwrap()
}

#[test]
fn test_all_correct() {
    for word in ["crane", "esses", "about", "kebab"] {
        let pattern = pattern(word, word);
        assert!(pattern.is_win());
        assert_eq!(pattern, FeedbackPattern::ALL_CORRECT);
        assert_eq!(legacy(word, word), FeedbackPattern::ALL_CORRECT);
    }
}

#[test]
fn test_all_absent() {
    let pattern = pattern("quick", "dream");
    assert_eq!(pattern, FeedbackPattern(0));
    assert_eq!(pattern.to_feedbacks(), [Feedback::Absent; 5]);
}

#[test]
fn test_permutation_has_no_greens() {
    let feedbacks = pattern("cares", "scare").to_feedbacks();
    assert_eq!(feedbacks, [Feedback::Present; 5]);

    let shuffled = pattern("tares", "stare").to_feedbacks();
    assert!(shuffled.iter().all(|&f| f != Feedback::Correct));
}

#[test]
fn test_most_significant_digit_first() {
    assert_eq!(pattern("crane", "charm"), p("gygbb"));
    assert_eq!(pattern("crane", "charm").0, 2 * 81 + 27 + 2 * 9);
    assert_eq!(p("bbbbg").0, 2);
    assert_eq!(p("gbbbb").0, 162);
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(pattern("speed", "creep"), p("byggb"));
    assert_eq!(pattern("geese", "creep"), p("bygbb"));
    assert_eq!(pattern("sills", "esses"), p("ybbbg"));
    assert_eq!(pattern("sssso", "esses"), p("yggbb"));
}

#[test]
fn test_duplicate_letters_in_secret() {
    assert_eq!(pattern("arose", "creep"), p("bgbby"));
    assert_eq!(pattern("kebab", "abbey"), p("bygyy"));
}

#[test]
fn test_legacy_rule_overcounts_duplicates() {
    // the secret has one stray s, the guess two
    assert_eq!(pattern("sores", "those"), p("yybyb"));
    assert_eq!(legacy("sores", "those"), p("yybyy"));

    assert_eq!(legacy("geese", "creep"), p("bygby"));
    assert_eq!(legacy("sssso", "esses"), p("yggyb"));

    // no scarce duplicates: both rules agree
    assert_eq!(legacy("kebab", "abbey"), pattern("kebab", "abbey"));
    assert_eq!(legacy("crane", "charm"), pattern("crane", "charm"));
}

#[test]
fn test_every_code_decodes_to_itself() {
    for code in 0..FeedbackPattern::NUM_PATTERNS as u8 {
        let pattern = FeedbackPattern(code);
        assert_eq!(FeedbackPattern::new(pattern.to_feedbacks()), pattern);
    }
}

#[test]
fn test_pattern_parse() {
    let pattern = p("gybbb");
    assert_eq!(
        pattern.to_feedbacks(),
        [
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent
        ]
    );
    assert_eq!(pattern, p("21000"));
    assert_eq!(pattern, p("gy___"));
}

#[test]
fn test_pattern_parse_accepts_codes_and_result_strings() {
    assert_eq!(p("189"), p("gybbb"));
    assert_eq!(p("0"), FeedbackPattern(0));
    assert_eq!(p("242"), FeedbackPattern::ALL_CORRECT);
    assert_eq!(p("GY-__"), p("gybbb"));
    assert_eq!(p(" bgggg\n"), FeedbackPattern(80));
}

#[test]
fn test_pattern_parse_rejects_bad_input() {
    for bad in ["", "gyb", "gybbbg", "gyb?b", "243", "999", "1000"] {
        assert_eq!(FeedbackPattern::parse(bad), None, "{bad:?}");
    }
}

#[test]
fn test_emoji_display() {
    assert_eq!(p("gybbg").to_string(), "🟩🟨⬛⬛🟩");
}
