//! Coupons Config

use std::path::PathBuf;

use clap::Args;

/// Coupon store settings.
#[derive(Debug, Args)]
pub struct CouponsConfig {
    /// YAML coupon fixture loaded into the store at start-up
    #[arg(long = "coupons-seed", env = "COUPONS_SEED")]
    pub seed: Option<PathBuf>,
}
