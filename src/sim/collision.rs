//! Collision detection and response
//!
//! Every hit test is circle-vs-circle on derived positions. Nothing is removed
//! while the collections are being walked: ids go into despawn buffers and the
//! vectors are compacted once at the end.
//!
//! Ordering is fixed so results are reproducible:
//! 1. Player vs enemies, enemies in id order.
//! 2. Bullets (oldest first) vs enemies (oldest first). The first live enemy in
//!    reach is destroyed with the bullet. An enemy dies at most once and a
//!    bullet kills at most one enemy, so two bullets on one enemy score once
//!    and the younger bullet flies on.
//! 3. Entities whose path has expired are removed whether or not they hit
//!    anything. They still take part in steps 1 and 2 on the tick they expire.

use glam::Vec2;

use super::grid::RadialGrid;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// True when two circles whose radii sum to `reach` overlap
#[inline]
pub fn circles_overlap(a: Vec2, b: Vec2, reach: f32) -> bool {
    a.distance(b) < reach
}

/// Ids marked for removal during one resolve pass
#[derive(Debug, Default)]
struct DespawnBuffers {
    enemies: Vec<u32>,
    bullets: Vec<u32>,
}

impl DespawnBuffers {
    fn enemy_dead(&self, id: u32) -> bool {
        self.enemies.contains(&id)
    }

    fn bullet_dead(&self, id: u32) -> bool {
        self.bullets.contains(&id)
    }
}

/// Resolve all collisions for the current tick and drop dead entities
pub fn resolve(state: &mut GameState, grid: &RadialGrid, tuning: &Tuning) {
    let mut despawn = DespawnBuffers::default();

    resolve_player_hits(state, grid, tuning, &mut despawn);
    resolve_bullet_hits(state, tuning, &mut despawn);
    collect_expired(state, &mut despawn);

    state.enemies.retain(|e| !despawn.enemy_dead(e.id));
    state.bullets.retain(|b| !despawn.bullet_dead(b.id));
}

fn resolve_player_hits(
    state: &mut GameState,
    grid: &RadialGrid,
    tuning: &Tuning,
    despawn: &mut DespawnBuffers,
) {
    let player_pos = grid.outer_midpoint(state.player.segment);
    let reach = tuning.player_hit_distance();

    for enemy in &state.enemies {
        if !circles_overlap(enemy.position(), player_pos, reach) {
            continue;
        }
        despawn.enemies.push(enemy.id);

        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::PlayerHit {
            enemy_id: enemy.id,
            lives_left: state.lives,
        });

        if state.lives == 0 && state.phase == GamePhase::Playing {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::GameOver { score: state.score });
        }
    }
}

fn resolve_bullet_hits(state: &mut GameState, tuning: &Tuning, despawn: &mut DespawnBuffers) {
    let reach = tuning.bullet_hit_distance();

    for bullet in &state.bullets {
        let bullet_pos = bullet.position();
        let target = state
            .enemies
            .iter()
            .filter(|e| !despawn.enemy_dead(e.id))
            .find(|e| circles_overlap(bullet_pos, e.position(), reach));

        if let Some(enemy) = target {
            despawn.enemies.push(enemy.id);
            despawn.bullets.push(bullet.id);
            state.score = state.score.saturating_add(tuning.kill_score);
            state.events.push(GameEvent::EnemyDestroyed {
                enemy_id: enemy.id,
                bullet_id: bullet.id,
            });
        }
    }
}

fn collect_expired(state: &mut GameState, despawn: &mut DespawnBuffers) {
    for enemy in &state.enemies {
        if enemy.path.is_expired() && !despawn.enemy_dead(enemy.id) {
            despawn.enemies.push(enemy.id);
            state.events.push(GameEvent::EnemyEscaped { enemy_id: enemy.id });
        }
    }
    for bullet in &state.bullets {
        if bullet.path.is_expired() && !despawn.bullet_dead(bullet.id) {
            despawn.bullets.push(bullet.id);
            state.events.push(GameEvent::BulletExpired { bullet_id: bullet.id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PathMotion;

    fn setup() -> (GameState, RadialGrid, Tuning) {
        let tuning = Tuning::default();
        let grid = tuning.build_grid();
        (GameState::new(tuning.starting_lives), grid, tuning)
    }

    /// A path parked at `pos`
    fn parked(pos: Vec2) -> PathMotion {
        PathMotion::new(pos, pos)
    }

    fn ids<'a>(iter: impl Iterator<Item = &'a u32>) -> Vec<u32> {
        let mut v: Vec<u32> = iter.copied().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_circles_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, Vec2::new(11.9, 0.0), 12.0));
        assert!(!circles_overlap(Vec2::ZERO, Vec2::new(12.0, 0.0), 12.0));
    }

    #[test]
    fn test_bullet_and_enemy_on_same_point() {
        let (mut state, grid, tuning) = setup();
        let p = grid.inner_midpoint(3).lerp(grid.outer_midpoint(3), 0.5);
        state.push_enemy(3, parked(p));
        state.push_bullet(3, parked(p));

        resolve(&mut state, &grid, &tuning);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 10);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_two_bullets_one_enemy_scores_once() {
        let (mut state, grid, tuning) = setup();
        let p = grid.inner_midpoint(5);
        let enemy = state.push_enemy(5, parked(p));
        let older = state.push_bullet(5, parked(p + Vec2::new(1.0, 0.0)));
        let younger = state.push_bullet(5, parked(p - Vec2::new(1.0, 0.0)));

        resolve(&mut state, &grid, &tuning);
        assert_eq!(state.score, 10);
        assert!(state.enemies.is_empty());
        // Oldest bullet claims the kill, the other keeps flying
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].id, younger);
        assert_eq!(
            state.events,
            vec![GameEvent::EnemyDestroyed {
                enemy_id: enemy,
                bullet_id: older
            }]
        );
    }

    #[test]
    fn test_one_bullet_two_enemies_kills_oldest() {
        let (mut state, grid, tuning) = setup();
        let p = grid.inner_midpoint(7);
        let first = state.push_enemy(7, parked(p));
        let second = state.push_enemy(7, parked(p + Vec2::new(0.0, 2.0)));
        state.push_bullet(7, parked(p));

        resolve(&mut state, &grid, &tuning);
        assert_eq!(state.score, 10);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, second);
        assert_ne!(state.enemies[0].id, first);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_iteration_order_does_not_matter_without_overlap() {
        let (mut state, grid, tuning) = setup();
        // Three separate duels plus a miss and a bystander
        for seg in [1usize, 6, 11] {
            let p = grid.inner_midpoint(seg).lerp(grid.outer_midpoint(seg), 0.3);
            state.push_enemy(seg, parked(p));
            state.push_bullet(seg, parked(p + Vec2::new(3.0, 0.0)));
        }
        state.push_bullet(14, parked(grid.inner_midpoint(14)));
        state.push_enemy(9, parked(grid.inner_midpoint(9)));

        let mut reversed = state.clone();
        reversed.enemies.reverse();
        reversed.bullets.reverse();

        resolve(&mut state, &grid, &tuning);
        resolve(&mut reversed, &grid, &tuning);

        assert_eq!(state.score, 30);
        assert_eq!(state.score, reversed.score);
        assert_eq!(
            ids(state.enemies.iter().map(|e| &e.id)),
            ids(reversed.enemies.iter().map(|e| &e.id))
        );
        assert_eq!(
            ids(state.bullets.iter().map(|b| &b.id)),
            ids(reversed.bullets.iter().map(|b| &b.id))
        );
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_enemy_touching_player_costs_a_life() {
        let (mut state, grid, tuning) = setup();
        state.player.segment = 2;
        let player_pos = grid.outer_midpoint(2);
        let enemy = state.push_enemy(2, parked(player_pos - Vec2::new(0.0, 20.0)));

        resolve(&mut state, &grid, &tuning);
        assert!(state.enemies.is_empty());
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(
            state.events,
            vec![GameEvent::PlayerHit {
                enemy_id: enemy,
                lives_left: 2
            }]
        );
    }

    #[test]
    fn test_enemy_in_other_segment_misses_player() {
        let (mut state, grid, tuning) = setup();
        state.player.segment = 0;
        let mut path = PathMotion::new(grid.inner_midpoint(8), grid.outer_midpoint(8));
        path.t = 0.99;
        state.push_enemy(8, path);

        resolve(&mut state, &grid, &tuning);
        assert_eq!(state.lives, 3);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_last_life_latches_game_over() {
        let (mut state, grid, tuning) = setup();
        state.lives = 1;
        let p = grid.outer_midpoint(0);
        state.push_enemy(0, parked(p));
        state.push_enemy(0, parked(p));

        resolve(&mut state, &grid, &tuning);
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        let game_overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_expired_entities_are_removed() {
        let (mut state, grid, tuning) = setup();
        state.player.segment = 0;
        let mut enemy_path = PathMotion::new(grid.inner_midpoint(8), grid.outer_midpoint(8));
        enemy_path.t = 1.0;
        let enemy = state.push_enemy(8, enemy_path);
        let mut bullet_path = PathMotion::new(grid.outer_midpoint(4), grid.center());
        bullet_path.t = 1.0;
        let bullet = state.push_bullet(4, bullet_path);

        resolve(&mut state, &grid, &tuning);
        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert!(state.events.contains(&GameEvent::EnemyEscaped { enemy_id: enemy }));
        assert!(state.events.contains(&GameEvent::BulletExpired { bullet_id: bullet }));
    }

    #[test]
    fn test_enemy_killed_by_player_not_shot_again() {
        let (mut state, grid, tuning) = setup();
        let p = grid.outer_midpoint(0);
        state.push_enemy(0, parked(p));
        state.push_bullet(0, parked(p));

        resolve(&mut state, &grid, &tuning);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        // Bullet found nothing left to hit
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_score_saturates_at_max() {
        let tuning = Tuning {
            kill_score: u64::MAX,
            ..Default::default()
        };
        let grid = tuning.build_grid();
        let mut state = GameState::new(tuning.starting_lives);
        for segment in [4, 9] {
            let p = grid.inner_midpoint(segment);
            state.push_enemy(segment, parked(p));
            state.push_bullet(segment, parked(p));
        }

        resolve(&mut state, &grid, &tuning);
        assert!(state.enemies.is_empty());
        assert_eq!(state.score, u64::MAX);
    }
}
