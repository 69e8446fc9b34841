// Host-side tests for the typewriter state machine.

use folio_core::{FolioError, TypeStep, Typewriter, TypewriterConfig};

fn step(text: &str, delay_ms: u32) -> TypeStep {
    TypeStep {
        text: text.to_string(),
        delay_ms,
    }
}

#[test]
fn types_holds_erases_and_advances() {
    let mut tw = Typewriter::new(TypewriterConfig::new(["ab", "c"])).unwrap();
    let steps: Vec<TypeStep> = (0..8).map(|_| tw.step()).collect();
    assert_eq!(
        steps,
        vec![
            step("a", 100),
            step("ab", 2000),
            step("a", 50),
            step("", 500),
            step("c", 2000),
            step("", 500),
            step("a", 100),
            step("ab", 2000),
        ]
    );
}

#[test]
fn wraps_back_to_the_first_phrase() {
    let mut tw = Typewriter::new(TypewriterConfig::new(["x", "y", "z"])).unwrap();
    let mut seen = Vec::new();
    for _ in 0..7 {
        seen.push(tw.phrase_index());
        tw.step();
        tw.step();
    }
    assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = Typewriter::new(TypewriterConfig::new(["né"])).unwrap();
    assert_eq!(tw.step().text, "n");
    assert_eq!(tw.step(), step("né", 2000));
}

#[test]
fn custom_timings_are_used() {
    let mut config = TypewriterConfig::new(["ab"]);
    config.type_delay_ms = 10;
    config.delete_delay_ms = 5;
    config.hold_delay_ms = 7;
    config.next_phrase_delay_ms = 3;
    let mut tw = Typewriter::new(config).unwrap();
    let delays: Vec<u32> = (0..4).map(|_| tw.step().delay_ms).collect();
    assert_eq!(delays, vec![10, 7, 5, 3]);
}

#[test]
fn empty_phrases_are_rejected() {
    let none: [&str; 0] = [];
    assert_eq!(
        Typewriter::new(TypewriterConfig::new(none)).err(),
        Some(FolioError::NoPhrases)
    );
    assert_eq!(
        TypewriterConfig::new(["ok", ""]).validate(),
        Err(FolioError::NoPhrases)
    );
}
