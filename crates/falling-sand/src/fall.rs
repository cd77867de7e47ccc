//! Sand rule: fall straight down, else slide to a free lower diagonal.

use crate::api::SandApi;
use crate::random::RandomSource;

/// Move the grain under `api` at most one cell.
///
/// Straight down always wins. When both lower diagonals are free the side
/// is a coin flip, otherwise the only free side is taken.
pub(crate) fn update_sand<R: RandomSource + ?Sized>(api: &mut SandApi, rng: &mut R) {
    if api.is_vacant(0, -1) {
        api.swap_with(0, -1);
        return;
    }

    let dx = match (api.is_vacant(-1, -1), api.is_vacant(1, -1)) {
        (true, true) => {
            if rng.next_bool() {
                -1
            } else {
                1
            }
        }
        (true, false) => -1,
        (false, true) => 1,
        (false, false) => return,
    };
    api.swap_with(dx, -1);
}
