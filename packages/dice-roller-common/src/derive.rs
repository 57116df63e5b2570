use sha2::{Digest, Sha256};

/// Derive the individual die values and the adjusted total from one
/// oracle-supplied seed.
///
/// Each die gets its own sub-seed: `sha256(seed || die_index_be_u32)`, so
/// dice within a roll are independent even though they share one seed. The
/// first 8 bytes of the digest, read big-endian, are mapped into
/// `[1, die_size]` by modulo-and-offset.
///
/// The total is `sum(values) + adjustment` in i16, wide enough for the
/// extreme of 13 d100 plus 20.
pub fn derive_outcome(
    seed: &[u8],
    number_of_dice: u8,
    die_size: u8,
    adjustment: i8,
) -> (Vec<u8>, i16) {
    let mut rolled_values = Vec::with_capacity(number_of_dice as usize);
    let mut sum: i16 = 0;

    for i in 0..number_of_dice as u32 {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(i.to_be_bytes());
        let digest: [u8; 32] = hasher.finalize().into();

        let mut word_bytes = [0u8; 8];
        word_bytes.copy_from_slice(&digest[..8]);
        let word = u64::from_be_bytes(word_bytes);
        let value = (word % die_size as u64) as u8 + 1;

        sum += value as i16;
        rolled_values.push(value);
    }

    (rolled_values, sum + adjustment as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let seed = hex::decode("fe290beca10872ef2fb164d2aa4442de").unwrap();
        let (values1, result1) = derive_outcome(&seed, 4, 10, 3);
        let (values2, result2) = derive_outcome(&seed, 4, 10, 3);
        assert_eq!(values1, values2);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_values_in_range_and_sum() {
        let seed = b"some oracle randomness";
        for die_size in [1u8, 2, 6, 20, 100] {
            let (values, result) = derive_outcome(seed, 13, die_size, -5);
            assert_eq!(values.len(), 13);
            for v in &values {
                assert!(*v >= 1 && *v <= die_size, "value {v} out of [1, {die_size}]");
            }
            let sum: i16 = values.iter().map(|v| *v as i16).sum();
            assert_eq!(result, sum - 5);
        }
    }

    #[test]
    fn test_single_sided_die_always_one() {
        let (values, result) = derive_outcome(b"seed", 13, 1, 20);
        assert!(values.iter().all(|v| *v == 1));
        assert_eq!(result, 33);
    }

    #[test]
    fn test_dice_within_roll_are_independent() {
        // 13 d100 from one seed collapsing to a single repeated value would
        // mean the index is not being mixed in.
        let (values, _) = derive_outcome(b"independence", 13, 100, 0);
        let first = values[0];
        assert!(values.iter().any(|v| *v != first));
    }

    #[test]
    fn test_different_seeds_differ() {
        let (values_a, _) = derive_outcome(b"seed-a", 13, 100, 0);
        let (values_b, _) = derive_outcome(b"seed-b", 13, 100, 0);
        assert_ne!(values_a, values_b);
    }

    #[test]
    fn test_result_can_go_negative() {
        let (values, result) = derive_outcome(b"negative", 1, 1, -20);
        assert_eq!(values, vec![1]);
        assert_eq!(result, -19);
    }
}
