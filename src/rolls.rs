use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    #[error("dice must be written as NdM")]
    InvalidFormat,
    #[error("dice counts and sides cannot be negative")]
    NegativeOperand,
}

/// Rolls an `NdM` dice spec.
///
/// The result is drawn uniformly from `1..=N*M`. If either side is zero the
/// result is 0 without a draw.
pub fn roll(spec: &str) -> Result<u64, RollError> {
    let (count, sides) = spec.split_once('d').ok_or(RollError::InvalidFormat)?;

    let count: i64 = count.parse().map_err(|_| RollError::InvalidFormat)?;
    let sides: i64 = sides.parse().map_err(|_| RollError::InvalidFormat)?;

    if count < 0 || sides < 0 {
        return Err(RollError::NegativeOperand);
    }
    if count == 0 || sides == 0 {
        return Ok(0);
    }

    let max = (count as u64)
        .checked_mul(sides as u64)
        .ok_or(RollError::InvalidFormat)?;

    Ok(rand::thread_rng().gen_range(1..=max))
}

pub mod commands {
    use crate::commands::{Command, Invocation};
    use crate::Error;

    pub struct Roll;

    #[async_trait::async_trait]
    impl Command for Roll {
        fn name(&self) -> &'static str {
            "roll"
        }

        fn usage(&self) -> &'static str {
            "!roll <dice> - Rolls a specific dice. Format is NdM, where N and M are non-negative numbers."
        }

        async fn execute(&self, args: &[&str], _inv: &Invocation<'_>) -> Result<String, Error> {
            let [spec] = args else {
                tracing::debug!("roll: expected 1 argument, got {}", args.len());
                return Ok(self.usage().to_string());
            };

            match super::roll(spec) {
                Ok(result) => Ok(format!("You rolled {spec}\nResult: {result}")),
                Err(e) => {
                    tracing::debug!("roll: rejected {:?}: {}", spec, e);
                    Ok(self.usage().to_string())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_stay_in_range_and_cover_it() {
        let mut seen = [false; 18];

        for _ in 0..10_000 {
            let result = roll("3d6").unwrap();
            assert!((1..=18).contains(&result), "{result} out of range");
            seen[result as usize - 1] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn zero_operand_rolls_zero() {
        assert_eq!(roll("0d6"), Ok(0));
        assert_eq!(roll("3d0"), Ok(0));
        assert_eq!(roll("0d0"), Ok(0));
    }

    #[test]
    fn malformed_specs_are_invalid() {
        for spec in ["xd6", "3dx", "3", "3d6d2", "d6", "3d", "", "3D6", " 3d6"] {
            assert_eq!(roll(spec), Err(RollError::InvalidFormat), "{spec:?}");
        }
    }

    #[test]
    fn negative_operands_are_rejected() {
        assert_eq!(roll("-1d6"), Err(RollError::NegativeOperand));
        assert_eq!(roll("2d-6"), Err(RollError::NegativeOperand));
    }

    #[test]
    fn overflowing_product_is_invalid() {
        let spec = format!("{}d{}", i64::MAX, i64::MAX);

        assert_eq!(roll(&spec), Err(RollError::InvalidFormat));
    }

    #[test]
    fn single_sided_die_is_deterministic() {
        assert_eq!(roll("1d1"), Ok(1));
    }
}
