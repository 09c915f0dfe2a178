use serde::{Deserialize, Serialize};

use crate::error::ExplorerError;

/// How the narrative index wraps at the ends of the selection.
///
/// `Single` reproduces the source behavior: one additive wrap at the low end
/// and a jump back to the first item at the high end. That is only a partial
/// wrap and is kept as the default for fidelity. `Modulo` is true circular
/// arithmetic and must be opted into explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    #[default]
    Single,
    Modulo,
}

/// Maps a net step position onto a 1-based index into a selection of `size`
/// items.
///
/// `net` is forward clicks minus backward clicks since the session started.
/// Returns `None` when the selection is empty; no numeric index exists then
/// and callers surface a "no narrative available" placeholder instead.
///
/// Under `WrapPolicy::Single`, stepping backward past the first item wraps
/// once onto the end, and stepping forward past the last item jumps back to
/// the first. Positions more than `size` steps below the start clamp to the
/// last index, so the result is always in `[1, size]`.
pub fn wrapped_index(net: i64, size: usize, policy: WrapPolicy) -> Option<usize> {
    if size == 0 {
        return None;
    }
    let size = size as i64;

    let index = match policy {
        WrapPolicy::Single => {
            let mut position = net.saturating_add(1);
            if position < 1 {
                position = position.saturating_add(size);
            }
            if position < 1 {
                position = size;
            }
            if position > size {
                position = 1;
            }
            position
        }
        WrapPolicy::Modulo => net.rem_euclid(size) + 1,
    };

    Some(index as usize)
}

/// [`wrapped_index`] with a defensively signed size.
///
/// Hosts that carry sizes as signed integers use this entry point; a
/// negative size is a contract violation and fails immediately rather than
/// being clamped.
pub fn checked_index(
    net: i64,
    size: i64,
    policy: WrapPolicy,
) -> Result<Option<usize>, ExplorerError> {
    if size < 0 {
        return Err(ExplorerError::InvalidSize(size));
    }
    Ok(wrapped_index(net, size as usize, policy))
}

#[cfg(test)]
#[path = "stepper_tests.rs"]
mod tests;
