//! Integer arithmetic for pricing and share accounting.
//!
//! All quantities are `u128`; intermediate products are widened to 256 or
//! 512 bits so no realistic reserve can overflow before the final division.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`div_round`] | `u128` division with explicit rounding |
//! | [`mul_div`] | `a × b / c` through a 256-bit product |
//! | [`sqrt_product`] | `floor(sqrt(a × b))` for the geometric-mean seed |
//! | [`quote_output`] / [`quote_input`] | fee-adjusted constant-product quotes |
//! | [`quote_paired`] | ratio-preserving deposit amount |
//! | [`check_product`] | flash-swap settlement gate |

mod quote;
mod rounding;
mod wide;

pub use quote::{check_product, quote_input, quote_output, quote_paired, Settlement};
pub use rounding::div_round;
pub use wide::{isqrt, mul_div, narrow, narrow_wide, sqrt_product, U256, U512};
