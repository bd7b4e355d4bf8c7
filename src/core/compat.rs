//! Compatibility check between two participants.

use crate::core::participant::Participant;

/// Whether `a` and `b` can interview each other.
///
/// Each side's easiest offered difficulty must not exceed the other side's
/// experience. Symmetric in its arguments.
pub fn is_compatible(a: &Participant, b: &Participant) -> bool {
    a.pairing_difficulty().floor().ordinal() <= b.experience().ordinal()
        && b.pairing_difficulty().floor().ordinal() <= a.experience().ordinal()
}
