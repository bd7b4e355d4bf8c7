//! Turn a winning ordering into paired and unpaired participants.

use crate::core::compat::is_compatible;
use crate::core::participant::Participant;
use crate::engine::search::Path;
use crate::error::{Error, Result};
use crate::plog_error;

/// Split `path` into `(paired, unpaired)`.
///
/// An odd trailing participant is unpaired. The rest is walked in windows of
/// two; compatible windows go to `paired` in window order, so `paired[2k]`
/// and `paired[2k + 1]` are partners. Compatibility is re-checked here and the
/// count of realized pairs must equal `path.valid_pairs`.
///
/// # Errors
///
/// `Error::InconsistentResult` when the realized count differs from the
/// reported one.
pub fn extract_pairs(path: &Path) -> Result<(Vec<Participant>, Vec<Participant>)> {
    let mut order: &[Participant] = &path.order;
    let mut paired = Vec::with_capacity(order.len());
    let mut unpaired = Vec::new();

    if order.len() % 2 != 0 {
        if let Some((last, rest)) = order.split_last() {
            unpaired.push(last.clone());
            order = rest;
        }
    }

    let mut remaining = path.valid_pairs as isize;
    for window in order.chunks_exact(2) {
        let (a, b) = (&window[0], &window[1]);
        if is_compatible(a, b) {
            paired.push(a.clone());
            paired.push(b.clone());
            remaining -= 1;
        } else {
            unpaired.push(a.clone());
            unpaired.push(b.clone());
        }
    }

    if remaining != 0 {
        let realized = paired.len() / 2;
        plog_error!(
            "pair extraction disagrees with search: reported={} realized={}",
            path.valid_pairs,
            realized
        );
        return Err(Error::InconsistentResult {
            reported: path.valid_pairs,
            realized,
        });
    }

    Ok((paired, unpaired))
}
