use crate::domain::SessionFlags;

/// Normalize a name as typed into the preview form
///
/// Leading whitespace is dropped on every keystroke; trailing whitespace is
/// kept so users can type multi-word names.
pub fn normalize_name(input: &str) -> String {
    input.trim_start().to_string()
}

/// Whether the preview form may submit
///
/// Requires a name, the join permission from the preview flow and both
/// learner identity flags.
pub fn can_join(name: &str, enable_join: bool, flags: &SessionFlags) -> bool {
    !name.trim_start().is_empty() && enable_join && flags.has_learner_identity()
}

/// Label of the join button
pub fn join_label(streaming_kit: bool) -> &'static str {
    if streaming_kit {
        "Join Studio"
    } else {
        "Join Room"
    }
}
