//! String round-trip for hosts that persist a mask as a text column.
//!
//! # Invariants
//! - `load(&dump(Some(&mask))) == mask` for every mask.
//! - Neither function fails; bad input degrades to the empty mask / `"0"`.

use crate::model::week_mask::WeekMask;
use log::debug;

/// Parses base-10 text into a mask, clamping into `0..=127`.
///
/// Surrounding whitespace is ignored. Text that is not an integer yields the
/// empty mask.
pub fn load(text: &str) -> WeekMask {
    match text.trim().parse::<i128>() {
        Ok(seed) => WeekMask::from_seed(Some(seed)),
        Err(_) => {
            debug!(
                "event=load_fallback module=persist status=ignored input_len={}",
                text.len()
            );
            WeekMask::EMPTY
        }
    }
}

/// Renders a mask as base-10 text; an absent mask renders as `"0"`.
pub fn dump(mask: Option<&WeekMask>) -> String {
    mask.map_or(0, |mask| mask.to_integer()).to_string()
}
