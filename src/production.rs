//! Production output scaled by efficiency and land tier.

use crate::constants::land_tier_bonus_percent;
use crate::error::EngineError;

/// Output of an activity producing `amount` at 100% efficiency, when run at
/// `efficiency` percent on land of tier `land_tier`. Rounded up.
pub fn scaled_output(amount: u64, efficiency: f64, land_tier: u8) -> Result<u64, EngineError> {
    let bonus = land_tier_bonus_percent(land_tier).ok_or(EngineError::UnknownLandTier(land_tier))?;
    let output = (amount as f64 * efficiency / 100.0) * (1.0 + bonus / 100.0);

    Ok(output.ceil() as u64)
}
