//! Attack rules and combat resolution.
//!
//! Every weapon is described by one entry of [`ARSENAL`]: its name, its cost,
//! the cells it reaches from an origin in a given direction, and the
//! condition under which an attack is worth making. [`resolve_attack`]
//! applies a triggered attack to a copy of the grid.

use crate::engine::{Cell, Direction, Grid, Position};
use std::fmt;

/// The four weapons available to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Weapon {
    Sword,
    Spear,
    Dagger,
    Bow,
}

/// Weapons in the order the solver tries them.
///
/// The order only affects which equally-cheap solution is found first.
pub const ARSENAL: [Weapon; 4] = [Weapon::Sword, Weapon::Spear, Weapon::Dagger, Weapon::Bow];

impl Weapon {
    pub fn name(&self) -> &'static str {
        match self {
            Weapon::Sword => "Sword",
            Weapon::Spear => "Spear",
            Weapon::Dagger => "Dagger",
            Weapon::Bow => "Bow",
        }
    }

    /// Fixed cost of one use of the weapon.
    pub fn cost(&self) -> u32 {
        match self {
            Weapon::Dagger => 50,
            Weapon::Bow => 60,
            Weapon::Spear => 70,
            Weapon::Sword => 80,
        }
    }

    /// Cells the weapon reaches from `origin` toward `direction`, in the order
    /// they are resolved.
    ///
    /// - Dagger: the adjacent cell.
    /// - Bow: the cell two steps away.
    /// - Spear: the far cell first, then the adjacent one.
    /// - Sword: the row of three cells one step away, centered on the adjacent cell.
    ///
    /// Cells that would have a negative coordinate are `None`; they read as walls.
    pub fn footprint(&self, origin: Position, direction: Direction) -> Vec<Option<Position>> {
        match self {
            Weapon::Dagger => vec![origin.step(direction, 1)],
            Weapon::Bow => vec![origin.step(direction, 2)],
            Weapon::Spear => vec![origin.step(direction, 2), origin.step(direction, 1)],
            Weapon::Sword => {
                let [before, after] = direction.perpendicular();
                let center = origin.step(direction, 1);
                vec![
                    center.and_then(|c| c.step(before, 1)),
                    center,
                    center.and_then(|c| c.step(after, 1)),
                ]
            }
        }
    }

    /// Decides whether the weapon triggers at `origin` toward `direction`.
    ///
    /// - Dagger: the adjacent cell holds a monster.
    /// - Bow: the cell two steps away holds a monster and the cell in between is
    ///   not floor, so the arrow has something to catch on.
    /// - Spear: both cells along the line hold monsters.
    /// - Sword: two or three of the swept cells hold monsters; a single monster
    ///   only counts when it sits on a side cell and the player-side cell next
    ///   to it (beside the origin) is not floor. A lone monster in the center
    ///   never triggers the sword; the dagger covers that case more cheaply.
    pub fn triggers(&self, grid: &Grid, origin: Position, direction: Direction) -> bool {
        let at = |distance: usize| grid.get_opt(origin.step(direction, distance));
        match self {
            Weapon::Dagger => at(1).is_monster(),
            Weapon::Bow => at(2).is_monster() && at(1) != Cell::Floor,
            Weapon::Spear => at(1).is_monster() && at(2).is_monster(),
            Weapon::Sword => {
                let swept = self.footprint(origin, direction);
                let monsters = swept.iter().filter(|&&p| grid.get_opt(p).is_monster()).count();
                match monsters {
                    0 => false,
                    1 => {
                        let [before, after] = direction.perpendicular();
                        [(swept[0], before), (swept[2], after)]
                            .into_iter()
                            .any(|(side, flank)| {
                                grid.get_opt(side).is_monster()
                                    && grid.get_opt(origin.step(flank, 1)) != Cell::Floor
                            })
                    }
                    _ => true,
                }
            }
        }
    }

    /// Evaluates the weapon at `origin` toward `direction`, returning the attack
    /// to resolve if it triggers.
    ///
    /// Target cells that fall outside the grid are dropped; they can never hold a
    /// monster.
    pub fn try_attack(&self, grid: &Grid, origin: Position, direction: Direction) -> Option<Attack> {
        if !self.triggers(grid, origin, direction) {
            return None;
        }
        let targets = self.footprint(origin, direction).into_iter().flatten().collect();
        Some(Attack {
            weapon: *self,
            direction,
            origin,
            targets,
        })
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A triggered attack, ready to be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attack {
    pub weapon: Weapon,
    /// Attack direction, which is also the push direction.
    pub direction: Direction,
    /// Where the player stands while attacking.
    pub origin: Position,
    /// Cells to resolve, in order.
    pub targets: Vec<Position>,
}

impl Attack {
    /// Action label, e.g. `Dagger North`.
    pub fn label(&self) -> String {
        format!("{} {}", self.weapon, self.direction)
    }
}

/// Collects every attack that triggers from any of `origins`.
///
/// Weapons are the outer loop, in [`ARSENAL`] order, then origins, then
/// directions. Each result is an independent alternative, never a combined
/// multi-weapon attack.
pub fn triggered_attacks(grid: &Grid, origins: &[Position]) -> Vec<Attack> {
    let mut attacks = Vec::new();
    for weapon in ARSENAL {
        for &origin in origins {
            for direction in Direction::ALL {
                if let Some(attack) = weapon.try_attack(grid, origin, direction) {
                    attacks.push(attack);
                }
            }
        }
    }
    attacks
}

/// Applies `attack` to a copy of `grid` and returns the new snapshot.
///
/// Targets are resolved in order on the same copy. Each target still holding a
/// monster is demoted one rank; if the cell one step further along the attack
/// direction is floor, the demoted monster is pushed there and the target cell
/// becomes floor, otherwise it stays in place. A monster demoted to floor simply
/// disappears.
///
/// # Examples
/// ```
/// use dungeon_solver::engine::{Cell, Direction, Position};
/// use dungeon_solver::utils::dungeon_from_str_array;
/// use dungeon_solver::weapons::{resolve_attack, Weapon};
///
/// let dungeon = dungeon_from_str_array(&["WWWWWW", "WSR..W", "WWWWWW"]).unwrap();
/// let attack = Weapon::Dagger.try_attack(&dungeon.grid, dungeon.start, Direction::East).unwrap();
/// let after = resolve_attack(&dungeon.grid, &attack);
/// assert_eq!(after.get(Position::new(1, 2)), Cell::Floor);
/// assert_eq!(after.get(Position::new(1, 3)), Cell::MonsterPurple);
/// ```
pub fn resolve_attack(grid: &Grid, attack: &Attack) -> Grid {
    let mut next = grid.clone();
    for &target in &attack.targets {
        let cell = next.get(target);
        if !cell.is_monster() {
            continue;
        }
        let demoted = cell.hit();
        match target.step(attack.direction, 1) {
            Some(dest) if next.get(dest) == Cell::Floor => {
                next.set(dest, demoted);
                next.set(target, Cell::Floor);
            }
            _ => next.set(target, demoted),
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dungeon_from_str_array;

    fn attack_at(rows: &[&str], weapon: Weapon, direction: Direction) -> Option<Attack> {
        let dungeon = dungeon_from_str_array(rows).unwrap();
        weapon.try_attack(&dungeon.grid, dungeon.start, direction)
    }

    #[test]
    fn test_weapon_costs() {
        assert_eq!(Weapon::Dagger.cost(), 50);
        assert_eq!(Weapon::Bow.cost(), 60);
        assert_eq!(Weapon::Spear.cost(), 70);
        assert_eq!(Weapon::Sword.cost(), 80);
    }

    #[test]
    fn test_dagger_triggers_on_adjacent_monster() {
        let rows = ["WWWWW", "WWBWW", "WWSWW", "WWWWW"];
        let attack = attack_at(&rows, Weapon::Dagger, Direction::North).unwrap();
        assert_eq!(attack.targets, vec![Position::new(1, 2)]);
        assert_eq!(attack.label(), "Dagger North");
        assert!(attack_at(&rows, Weapon::Dagger, Direction::South).is_none());
        assert!(attack_at(&rows, Weapon::Dagger, Direction::East).is_none());
    }

    #[test]
    fn test_bow_needs_obstruction() {
        let blocked = ["WWWWWW", "WSBRWW", "WWWWWW"];
        let attack = attack_at(&blocked, Weapon::Bow, Direction::East).unwrap();
        assert_eq!(attack.targets, vec![Position::new(1, 3)]);

        let wall_between = ["WWWWW", "WRWWW", "WWWWW", "WSWWW", "WWWWW"];
        assert!(attack_at(&wall_between, Weapon::Bow, Direction::North).is_some());

        let open = ["WWWWWW", "WS.RWW", "WWWWWW"];
        assert!(attack_at(&open, Weapon::Bow, Direction::East).is_none());
    }

    #[test]
    fn test_spear_needs_two_monsters() {
        let both = ["WWWWW", "WSBPW", "WWWWW"];
        let attack = attack_at(&both, Weapon::Spear, Direction::East).unwrap();
        assert_eq!(attack.targets, vec![Position::new(1, 3), Position::new(1, 2)]);

        let near_only = ["WWWWW", "WSB.W", "WWWWW"];
        assert!(attack_at(&near_only, Weapon::Spear, Direction::East).is_none());

        let far_only = ["WWWWW", "WS.BW", "WWWWW"];
        assert!(attack_at(&far_only, Weapon::Spear, Direction::East).is_none());
    }

    #[test]
    fn test_sword_two_monsters_triggers() {
        let rows = ["WWWWW", "WB.BW", "W.S.W", "WWWWW"];
        let attack = attack_at(&rows, Weapon::Sword, Direction::North).unwrap();
        assert_eq!(
            attack.targets,
            vec![Position::new(1, 1), Position::new(1, 2), Position::new(1, 3)]
        );
    }

    #[test]
    fn test_sword_lone_center_never_triggers() {
        let rows = ["WWWWW", "W.B.W", "WWSWW", "WWWWW"];
        assert!(attack_at(&rows, Weapon::Sword, Direction::North).is_none());
    }

    #[test]
    fn test_sword_lone_side_needs_blocked_flank() {
        // Monster north-west, cell west of the player is a wall.
        let blocked = ["WWWWW", "WB..W", "WWS.W", "WWWWW"];
        assert!(attack_at(&blocked, Weapon::Sword, Direction::North).is_some());

        // Same monster, but the player could step west and use the dagger.
        let open = ["WWWWW", "WB..W", "W.S.W", "WWWWW"];
        assert!(attack_at(&open, Weapon::Sword, Direction::North).is_none());

        // Flank blocked on the other side does not help.
        let wrong_side = ["WWWWW", "WB..W", "W.SWW", "WWWWW"];
        assert!(attack_at(&wrong_side, Weapon::Sword, Direction::North).is_none());
    }

    #[test]
    fn test_sword_east_uses_vertical_sweep() {
        let rows = ["WWWW", "WWBW", "WS.W", "W.PW", "WWWW"];
        let attack = attack_at(&rows, Weapon::Sword, Direction::East).unwrap();
        assert_eq!(
            attack.targets,
            vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
        );
    }

    #[test]
    fn test_no_trigger_without_monsters() {
        let rows = ["WWWWW", "W...W", "W.S.W", "W...W", "WWWWW"];
        let dungeon = dungeon_from_str_array(&rows).unwrap();
        let origins = dungeon.grid.reachable_from(dungeon.start);
        assert!(triggered_attacks(&dungeon.grid, &origins).is_empty());
    }

    #[test]
    fn test_triggered_attacks_weapon_order() {
        let rows = ["WWWWW", "WSBPW", "WWWWW"];
        let dungeon = dungeon_from_str_array(&rows).unwrap();
        let attacks = triggered_attacks(&dungeon.grid, &[dungeon.start]);
        let labels: Vec<String> = attacks.iter().map(Attack::label).collect();
        assert_eq!(labels, vec!["Spear East", "Dagger East", "Bow East"]);
    }

    #[test]
    fn test_resolve_blocked_push_demotes_in_place() {
        let dungeon = dungeon_from_str_array(&["WWWW", "WSRW", "WWWW"]).unwrap();
        let attack = Weapon::Dagger.try_attack(&dungeon.grid, dungeon.start, Direction::East).unwrap();
        let after = resolve_attack(&dungeon.grid, &attack);
        assert_eq!(after.get(Position::new(1, 2)), Cell::MonsterPurple);
        // Parent snapshot is untouched.
        assert_eq!(dungeon.grid.get(Position::new(1, 2)), Cell::MonsterRed);
    }

    #[test]
    fn test_resolve_blue_dies_even_with_floor_behind() {
        let dungeon = dungeon_from_str_array(&["WWWWW", "WSB.W", "WWWWW"]).unwrap();
        let attack = Weapon::Dagger.try_attack(&dungeon.grid, dungeon.start, Direction::East).unwrap();
        let after = resolve_attack(&dungeon.grid, &attack);
        assert_eq!(after.monster_count(), 0);
        assert_eq!(after.get(Position::new(1, 3)), Cell::Floor);
    }

    #[test]
    fn test_resolve_spear_far_target_first() {
        // Far purple is pushed away first, which frees the cell for the near red.
        let dungeon = dungeon_from_str_array(&["WWWWWW", "WSRP.W", "WWWWWW"]).unwrap();
        let attack = Weapon::Spear.try_attack(&dungeon.grid, dungeon.start, Direction::East).unwrap();
        let after = resolve_attack(&dungeon.grid, &attack);
        assert_eq!(after.get(Position::new(1, 2)), Cell::Floor);
        assert_eq!(after.get(Position::new(1, 3)), Cell::MonsterPurple);
        assert_eq!(after.get(Position::new(1, 4)), Cell::MonsterBlue);
    }

    #[test]
    fn test_resolve_sword_pushes_each_column() {
        let dungeon = dungeon_from_str_array(&[
            "WWWWW",
            "W..WW",
            "WRPBW",
            "W.S.W",
            "WWWWW",
        ])
        .unwrap();
        let attack = Weapon::Sword.try_attack(&dungeon.grid, dungeon.start, Direction::North).unwrap();
        let after = resolve_attack(&dungeon.grid, &attack);
        assert_eq!(after.get(Position::new(1, 1)), Cell::MonsterPurple);
        assert_eq!(after.get(Position::new(1, 2)), Cell::MonsterBlue);
        assert_eq!(after.get(Position::new(2, 3)), Cell::Floor);
        assert_eq!(after.get(Position::new(2, 1)), Cell::Floor);
        assert_eq!(after.get(Position::new(2, 2)), Cell::Floor);
    }

    #[test]
    fn test_resolve_never_raises_rank() {
        let dungeon = dungeon_from_str_array(&[
            "WWWWWW",
            "W.RP.W",
            "WBSBRW",
            "W.P..W",
            "WWWWWW",
        ])
        .unwrap();
        let origins = dungeon.grid.reachable_from(dungeon.start);
        for attack in triggered_attacks(&dungeon.grid, &origins) {
            let after = resolve_attack(&dungeon.grid, &attack);
            let before_health: u32 = dungeon.grid.iter().map(|(_, c)| c.health_weight()).sum();
            let after_health: u32 = after.iter().map(|(_, c)| c.health_weight()).sum();
            assert!(after_health < before_health, "{} did not hurt anything", attack.label());
            for (pos, cell) in after.iter() {
                if dungeon.grid.get(pos) == Cell::Wall {
                    assert_eq!(cell, Cell::Wall, "walls never change");
                }
            }
        }
    }
}
