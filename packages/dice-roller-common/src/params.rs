use cosmwasm_schema::cw_serde;
use thiserror::Error;

/// Most dice allowed in a single roll.
pub const MAX_DICE: u8 = 13;
/// Largest die size (d100).
pub const MAX_DIE_SIZE: u8 = 100;
/// Adjustment is clamped to [-MAX_ADJUSTMENT, MAX_ADJUSTMENT].
pub const MAX_ADJUSTMENT: i8 = 20;

#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    #[error("number of dice must be between 1 and {MAX_DICE}, got {got}")]
    InvalidDiceCount { got: u8 },

    #[error("die size must be between 1 and {MAX_DIE_SIZE}, got {got}")]
    InvalidDieSize { got: u8 },

    #[error("adjustment must be between -{MAX_ADJUSTMENT} and {MAX_ADJUSTMENT}, got {got}")]
    AdjustmentOutOfRange { got: i8 },
}

/// Parameters of one roll request: how many dice, how many sides each,
/// and a flat adjustment applied to the summed result.
#[cw_serde]
#[derive(Copy)]
pub struct RollParams {
    pub number_of_dice: u8,
    pub die_size: u8,
    pub adjustment: i8,
}

impl RollParams {
    pub fn new(number_of_dice: u8, die_size: u8, adjustment: i8) -> Self {
        Self {
            number_of_dice,
            die_size,
            adjustment,
        }
    }

    /// Check every bound independently. Pure; callers must reject the
    /// request before touching storage or messaging the oracle.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.number_of_dice == 0 || self.number_of_dice > MAX_DICE {
            return Err(ParamsError::InvalidDiceCount {
                got: self.number_of_dice,
            });
        }
        if self.die_size == 0 || self.die_size > MAX_DIE_SIZE {
            return Err(ParamsError::InvalidDieSize { got: self.die_size });
        }
        if self.adjustment < -MAX_ADJUSTMENT || self.adjustment > MAX_ADJUSTMENT {
            return Err(ParamsError::AdjustmentOutOfRange {
                got: self.adjustment,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_in_range_params() {
        assert!(RollParams::new(1, 1, 0).validate().is_ok());
        assert!(RollParams::new(13, 100, 20).validate().is_ok());
        assert!(RollParams::new(4, 10, -20).validate().is_ok());
    }

    #[test]
    fn test_rejects_dice_count_bounds() {
        assert_eq!(
            RollParams::new(0, 10, 0).validate(),
            Err(ParamsError::InvalidDiceCount { got: 0 })
        );
        assert_eq!(
            RollParams::new(14, 10, 0).validate(),
            Err(ParamsError::InvalidDiceCount { got: 14 })
        );
    }

    #[test]
    fn test_rejects_die_size_bounds() {
        assert_eq!(
            RollParams::new(4, 0, 0).validate(),
            Err(ParamsError::InvalidDieSize { got: 0 })
        );
        assert_eq!(
            RollParams::new(4, 101, 0).validate(),
            Err(ParamsError::InvalidDieSize { got: 101 })
        );
    }

    #[test]
    fn test_rejects_adjustment_bounds() {
        assert_eq!(
            RollParams::new(4, 10, 21).validate(),
            Err(ParamsError::AdjustmentOutOfRange { got: 21 })
        );
        assert_eq!(
            RollParams::new(4, 10, -21).validate(),
            Err(ParamsError::AdjustmentOutOfRange { got: -21 })
        );
    }
}
