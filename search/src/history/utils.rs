use crate::SearchConfig;

/// Modern engines use a gravity formula to update history entries: the
/// closer an entry already is to the ceiling, the less a bonus moves it.
/// https://www.chessprogramming.org/History_Heuristic
#[inline(always)]
pub fn scale_bonus(entry: i32, bonus: i32, max_value: i32) -> i32 {
    let b = bonus.clamp(-max_value, max_value);
    b - entry * b.abs() / max_value
}

#[inline(always)]
pub fn apply_gravity(entry: &mut i16, bonus: i32, max_value: i32) {
    let h = *entry as i32;
    let new = h + scale_bonus(h, bonus, max_value);
    *entry = new.clamp(-max_value, max_value) as i16;
}

/// Reward for a move that caused a cutoff at `depth`. Grows with depth up to a cap.
#[inline(always)]
pub fn history_bonus(depth: i32, config: &SearchConfig) -> i32 {
    (config.history_bonus_scale.value * depth - config.history_bonus_offset.value)
        .clamp(0, config.history_bonus_max.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_never_exceeds_ceiling() {
        let max = 16384;
        let mut entry = 0i16;
        for _ in 0..10_000 {
            apply_gravity(&mut entry, max, max);
            assert!((entry as i32) <= max);
        }
        assert_eq!(entry as i32, max);

        for _ in 0..10_000 {
            apply_gravity(&mut entry, -max * 4, max);
            assert!((entry as i32) >= -max);
        }
        assert_eq!(entry as i32, -max);
    }

    #[test]
    fn test_gravity_dampens_near_ceiling() {
        let max = 16384;
        assert_eq!(scale_bonus(0, 1000, max), 1000);
        assert_eq!(scale_bonus(max / 2, 1000, max), 500);
        assert_eq!(scale_bonus(max / 2, -1000, max), -1500);
    }

    #[test]
    fn test_bonus_grows_with_depth_and_caps() {
        let config = SearchConfig::default();
        assert!(history_bonus(4, &config) > history_bonus(2, &config));
        assert_eq!(history_bonus(100, &config), config.history_bonus_max.value);
        assert_eq!(history_bonus(0, &config), 0);
    }
}
