//! Message templates.
//!
//! Placeholders: `{subject}`, `{object}`, `{possessive}` (the subject's).
//! Verb agreement follows the subject's person: `[s]` renders its text only in
//! the third person, `[are|is]` picks the first form for "you" and the second
//! otherwise. The first letter of the message is capitalized.

use crate::env::{Noun, Person};

pub fn format_message(template: &str, subject: &Noun, object: Option<&Noun>) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find(['{', '[']) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let close = if tail.starts_with('{') { '}' } else { ']' };

        let Some(end) = tail.find(close) else {
            out.push_str(tail);
            rest = "";
            break;
        };
        let inner = &tail[1..end];

        if close == '}' {
            match inner {
                "subject" => out.push_str(subject.text()),
                "object" => out.push_str(object.map_or("something", Noun::text)),
                "possessive" => out.push_str(&subject.possessive()),
                _ => out.push_str(&tail[..=end]),
            }
        } else {
            out.push_str(agree(inner, subject.person()));
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);

    capitalize(out)
}

fn agree(forms: &str, person: Person) -> &str {
    match (forms.split_once('|'), person) {
        (Some((second, _)), Person::Second) => second,
        (Some((_, third)), Person::Third) => third,
        (None, Person::Second) => "",
        (None, Person::Third) => forms,
    }
}

fn capitalize(text: String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    fn you() -> Noun {
        Noun::player(EntityId::PLAYER)
    }

    fn goblin() -> Noun {
        Noun::entity(EntityId(2), "goblin")
    }

    #[test]
    fn suffix_agrees_with_person() {
        assert_eq!(format_message("{subject} hit[s] {object}.", &you(), Some(&goblin())), "You hit the goblin.");
        assert_eq!(format_message("{subject} hit[s] {object}.", &goblin(), Some(&you())), "The goblin hits you.");
    }

    #[test]
    fn alternatives_pick_by_person() {
        assert_eq!(format_message("{subject} [are|is] frozen!", &you(), None), "You are frozen!");
        assert_eq!(format_message("{subject} [are|is] frozen!", &goblin(), None), "The goblin is frozen!");
    }

    #[test]
    fn possessive_follows_subject() {
        assert_eq!(
            format_message("{subject} [are|is] cured of {possessive} disease.", &goblin(), None),
            "The goblin is cured of the goblin's disease."
        );
        assert_eq!(
            format_message("{subject} [are|is] cured of {possessive} disease.", &you(), None),
            "You are cured of your disease."
        );
    }

    #[test]
    fn unknown_and_unterminated_tokens_pass_through() {
        assert_eq!(format_message("{weird} [s", &you(), None), "{weird} [s");
        assert_eq!(format_message("the door is already open.", &you(), None), "The door is already open.");
    }
}
