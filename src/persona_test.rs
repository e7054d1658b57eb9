use super::*;
use crate::profile::Profile;

#[test]
fn canned_texts_are_distinct_and_non_empty() {
    assert!(GREETING.contains("Digital Twin"));
    assert!(!FALLBACK_EMPTY_REPLY.is_empty());
    assert!(!FALLBACK_CONNECTION_ERROR.is_empty());
    assert_ne!(FALLBACK_EMPTY_REPLY, FALLBACK_CONNECTION_ERROR);
}

#[test]
fn system_prompt_covers_the_profile() {
    let profile = Profile::builtin();
    let prompt = system_prompt(&profile);

    assert!(prompt.contains(&profile.name));
    assert!(prompt.contains("Colegio De Montalban"));
    assert!(prompt.contains("Point link IT Solutions INC."));
    assert!(prompt.contains("UI Design (Figma)"));
    assert!(prompt.contains("Medicare Portal"));
    assert!(prompt.contains(&profile.contact_email));
}

#[test]
fn system_prompt_keeps_the_length_constraint() {
    let prompt = system_prompt(&Profile::builtin());
    assert!(prompt.contains("under 3 sentences"));
}
