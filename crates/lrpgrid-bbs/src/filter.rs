//! State filtering for actual LRP listings.

use lrpgrid_models::{ActualLrp, ActualLrpState};

/// Keep the records whose state equals `state`, preserving their order.
pub fn filter_actual_lrps(lrps: Vec<ActualLrp>, state: ActualLrpState) -> Vec<ActualLrp> {
    lrps.into_iter().filter(|lrp| lrp.state == state).collect()
}
