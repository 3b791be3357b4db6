use crate::engine::Grid;
use crate::weapons::{Weapon, ARSENAL};

/// Sums the health weights of every monster on the grid.
///
/// A grid with zero remaining health has no monsters left and is a solved state.
///
/// # Arguments
/// * `grid`: A reference to the `Grid` to analyze.
///
/// # Returns
/// The total health weight as `u32` (red 3, purple 2, blue 1).
pub fn remaining_health(grid: &Grid) -> u32 {
    grid.iter().map(|(_, cell)| cell.health_weight()).sum()
}

/// Lower bound on the cost of removing `health_left` health weight.
///
/// Assumes the best case throughout: every 80-cost sword swing removes three
/// weight, a remainder of two is removed by one 70-cost spear, and a remainder of
/// one by one 50-cost dagger. No real sequence of hits can do better, so a
/// branch whose cost plus this bound already reaches the best known cost can be
/// dropped without losing the optimum.
///
/// # Examples
/// ```
/// use dungeon_solver::heuristics::minimum_extra_cost;
/// assert_eq!(minimum_extra_cost(0), 0);
/// assert_eq!(minimum_extra_cost(4), 130);
/// assert_eq!(minimum_extra_cost(6), 160);
/// ```
pub fn minimum_extra_cost(health_left: u32) -> u32 {
    let mut extra_cost = (health_left / 3) * Weapon::Sword.cost();
    match health_left % 3 {
        2 => extra_cost += Weapon::Spear.cost(),
        1 => extra_cost += Weapon::Dagger.cost(),
        _ => {}
    }
    extra_cost
}

/// Most health weight one use of the weapon can remove: one per cell it reaches.
pub fn max_health_removed(weapon: Weapon) -> u32 {
    match weapon {
        Weapon::Dagger | Weapon::Bow => 1,
        Weapon::Spear => 2,
        Weapon::Sword => 3,
    }
}

/// Exact minimum cost of removing `health_left` weight with abstract hits,
/// ignoring geometry: each weapon use costs its fixed price and removes up to
/// [`max_health_removed`] weight.
///
/// Any real solution is at least this expensive, which makes it the yardstick
/// for checking that [`minimum_extra_cost`] never overestimates.
pub fn cheapest_hit_sequence_cost(health_left: u32) -> u32 {
    let n = health_left as usize;
    let mut best = vec![u32::MAX; n + 1];
    best[0] = 0;
    for h in 1..=n {
        for weapon in ARSENAL {
            let removed = (max_health_removed(weapon) as usize).min(h);
            let prior = best[h - removed];
            if prior != u32::MAX {
                best[h] = best[h].min(prior + weapon.cost());
            }
        }
    }
    best[n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dungeon_from_str_array;

    #[test]
    fn test_minimum_extra_cost_known_values() {
        assert_eq!(minimum_extra_cost(0), 0);
        assert_eq!(minimum_extra_cost(1), 50);
        assert_eq!(minimum_extra_cost(2), 70);
        assert_eq!(minimum_extra_cost(3), 80);
        assert_eq!(minimum_extra_cost(4), 130);
        assert_eq!(minimum_extra_cost(5), 150);
        assert_eq!(minimum_extra_cost(6), 160);
    }

    #[test]
    fn test_minimum_extra_cost_is_admissible() {
        for h in 0..=300 {
            let bound = minimum_extra_cost(h);
            let exact = cheapest_hit_sequence_cost(h);
            assert!(bound <= exact, "bound {} exceeds cheapest {} for health {}", bound, exact, h);
        }
    }

    #[test]
    fn test_minimum_extra_cost_monotonic() {
        for h in 0..200 {
            assert!(minimum_extra_cost(h) < minimum_extra_cost(h + 1));
        }
    }

    #[test]
    fn test_cheapest_hit_sequence_small() {
        assert_eq!(cheapest_hit_sequence_cost(0), 0);
        assert_eq!(cheapest_hit_sequence_cost(1), 50);
        assert_eq!(cheapest_hit_sequence_cost(2), 70);
        assert_eq!(cheapest_hit_sequence_cost(3), 80);
        assert_eq!(cheapest_hit_sequence_cost(4), 130);
    }

    #[test]
    fn test_remaining_health() {
        let dungeon = dungeon_from_str_array(&["WWWWWW", "WSRPBW", "WWWWWW"]).unwrap();
        assert_eq!(remaining_health(&dungeon.grid), 6);

        let empty = dungeon_from_str_array(&["WWW", "WSW", "WWW"]).unwrap();
        assert_eq!(remaining_health(&empty.grid), 0);
    }
}
