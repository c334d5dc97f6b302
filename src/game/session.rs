//! # Game Session
//!
//! The live playthrough state and the move/interaction engine that drives
//! it. A session owns a deep copy of its campaign's floors and hero, so
//! runtime mutation never touches the stored configuration; restarting
//! simply builds a fresh session from the same configuration.
//!
//! Every player input resolves in exactly one synchronous call to
//! [`GameSession::attempt_move`] or [`GameSession::fly_to_floor`]; there is
//! no queued movement and no partial step.

use crate::campaign::CampaignConfig;
use crate::combat::{resolve, CombatOutcome, MonsterStats};
use crate::config::MESSAGE_LOG_CAP;
use crate::hero::{grant_exp, HeroState};
use crate::tiles::{classify, tile, GemStat, StairKind, TileId, TileKind};
use crate::world::FloorGrid;
use crate::{Direction, TowerResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Whether a session is still accepting moves.
///
/// `GameOver` and `Victory` are terminal; the engine ignores all further
/// movement intents once either is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    GameOver,
    Victory,
}

/// Bounded, most-recent-first log of user-visible messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog(Vec<String>);

impl MessageLog {
    /// Pushes a message to the front, dropping the oldest beyond the cap.
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.insert(0, message.into());
        self.0.truncate(MESSAGE_LOG_CAP);
    }

    /// Messages, most recent first.
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// The most recent message, if any.
    pub fn latest(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }
}

/// One live playthrough: hero, world snapshot, message log, and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub hero: HeroState,
    /// Deep copy of the campaign's floors; consumed tiles become EMPTY here
    /// without affecting the stored configuration
    pub floors: Vec<FloorGrid>,
    pub log: MessageLog,
    pub status: GameStatus,
}

impl GameSession {
    /// Starts a session from a campaign configuration.
    ///
    /// Deep-copies the floors and initial hero so later mutation never
    /// aliases the stored campaign. Fails fast when the configuration has no
    /// floors or an out-of-range starting floor; all other malformed content
    /// degrades per the no-op movement rules instead of erroring.
    ///
    /// # Examples
    ///
    /// ```
    /// use magetower::{CampaignConfig, GameSession, GameStatus};
    ///
    /// let config = CampaignConfig::default();
    /// let session = GameSession::new(&config).unwrap();
    /// assert_eq!(session.status, GameStatus::Playing);
    /// assert_eq!(session.hero.max_floor_visited, config.initial_hero.floor);
    /// ```
    pub fn new(config: &CampaignConfig) -> TowerResult<Self> {
        config.validate()?;

        let mut hero = config.initial_hero.clone();
        hero.max_floor_visited = hero.floor;

        let mut log = MessageLog::default();
        log.push("Started.");

        info!(
            "session started: floor {}, hero at ({}, {})",
            hero.floor, hero.x, hero.y
        );

        Ok(Self {
            hero,
            floors: config.floors.clone(),
            log,
            status: GameStatus::Playing,
        })
    }

    /// The grid the hero currently stands on.
    pub fn current_floor(&self) -> &FloorGrid {
        &self.floors[self.hero.floor]
    }

    /// Attempts to move the hero one cell; `(dx, dy)` is one of the four
    /// cardinal unit deltas.
    ///
    /// Resolves collision, combat, doors, pickups, and stair transitions in
    /// a single atomic step. Blocked movement (bounds, walls, locked doors)
    /// and unwinnable combat are silent or logged no-ops, never errors; the
    /// facing direction updates on every intent, rejected ones included.
    pub fn attempt_move(&mut self, config: &CampaignConfig, dx: i32, dy: i32) {
        if self.status != GameStatus::Playing {
            return;
        }

        if let Some(facing) = Direction::from_delta(dx, dy) {
            self.hero.facing = facing;
        }

        let new_x = self.hero.x + dx;
        let new_y = self.hero.y + dy;
        if !FloorGrid::in_bounds(new_x, new_y) {
            return;
        }

        // In bounds by the check above.
        let target = self.floors[self.hero.floor]
            .get(new_x, new_y)
            .unwrap_or(tile::EMPTY);

        match classify(target, &config.monster_defs, &config.custom_tiles) {
            TileKind::Wall => {
                debug!("move into wall at ({new_x}, {new_y}) blocked");
            }

            TileKind::Monster(stats) => {
                let stats = stats.clone();
                self.fight(&stats, target, new_x, new_y);
            }
            TileKind::CustomMonster(def) => {
                // CustomMonster always carries monster stats.
                if let Some(stats) = def.monster_stats() {
                    self.fight(&stats, target, new_x, new_y);
                }
            }

            TileKind::Door(color) => {
                if self.hero.keys.count(color) > 0 {
                    *self.hero.keys.count_mut(color) -= 1;
                    self.floors[self.hero.floor].set(new_x, new_y, tile::EMPTY);
                    self.log.push("Door opened.");
                } else {
                    self.log.push("Locked!");
                }
                // The hero never enters the door cell this step; an opened
                // door is passable on the next move.
            }

            kind => {
                self.hero.x = new_x;
                self.hero.y = new_y;
                self.enter_cell(kind, new_x, new_y);
            }
        }
    }

    /// Applies the effect of the cell the hero just stepped onto.
    fn enter_cell(&mut self, kind: TileKind<'_>, x: i32, y: i32) {
        match kind {
            TileKind::Key(color) => {
                *self.hero.keys.count_mut(color) += 1;
                self.floors[self.hero.floor].set(x, y, tile::EMPTY);
                self.log.push(format!("{} Key.", color.name()));
            }

            TileKind::Heal(amount) => {
                self.hero.hp += amount;
                self.floors[self.hero.floor].set(x, y, tile::EMPTY);
                self.log.push(format!("HP +{amount}."));
            }

            TileKind::StatGem(stat, amount) => {
                let (label, value) = match stat {
                    GemStat::Attack => ("Atk", &mut self.hero.atk),
                    GemStat::Defense => ("Def", &mut self.hero.def),
                };
                *value += amount;
                self.floors[self.hero.floor].set(x, y, tile::EMPTY);
                let punct = if amount > 1 { "!" } else { "." };
                self.log.push(format!("{label} +{amount}{punct}"));
            }

            TileKind::Pickaxe => {
                self.hero.pickaxes += 1;
                self.floors[self.hero.floor].set(x, y, tile::EMPTY);
                self.log.push("Pickaxe.");
            }

            // Stairs are reusable; the tile is never cleared.
            TileKind::Stairs(StairKind::Up) => {
                let next = self.hero.floor + 1;
                if next < self.floors.len() {
                    self.hero.floor = next;
                    self.hero.max_floor_visited = self.hero.max_floor_visited.max(next);
                    if let Some(pos) = self.floors[next].find_first(&[tile::STAIRS_DOWN]) {
                        self.hero.x = pos.x;
                        self.hero.y = pos.y;
                    }
                    // No matching staircase: the hero keeps the stair cell's
                    // coordinates on the new floor.
                    info!("ascended to floor {next}");
                    self.log.push(format!("Floor {next}."));
                }
            }
            TileKind::Stairs(StairKind::Down) => {
                if self.hero.floor > 0 {
                    let prev = self.hero.floor - 1;
                    self.hero.floor = prev;
                    if let Some(pos) = self.floors[prev].find_first(&[tile::STAIRS_UP]) {
                        self.hero.x = pos.x;
                        self.hero.y = pos.y;
                    }
                    info!("descended to floor {prev}");
                    self.log.push(format!("Floor {prev}."));
                }
            }

            TileKind::CustomItem(def) => {
                let name = def.name.clone();
                if let crate::campaign::CustomTileKind::Item {
                    hp,
                    atk,
                    def: def_delta,
                    gold,
                    exp,
                    keys,
                    pickaxes,
                } = def.kind
                {
                    self.hero.hp += hp;
                    self.hero.atk += atk;
                    self.hero.def += def_delta;
                    self.hero.gold += gold;
                    self.hero.exp += exp;
                    self.hero.keys.yellow += keys.yellow;
                    self.hero.keys.blue += keys.blue;
                    self.hero.keys.red += keys.red;
                    self.hero.pickaxes += pickaxes;
                }
                self.floors[self.hero.floor].set(x, y, tile::EMPTY);
                self.log.push(format!("Got {name}"));
            }

            // Plain moves: nothing to apply, nothing consumed.
            TileKind::Empty | TileKind::Equipment | TileKind::Npc | TileKind::Unknown => {}

            // Handled before the hero moves.
            TileKind::Wall | TileKind::Door(_) | TileKind::Monster(_) | TileKind::CustomMonster(_) => {}
        }
    }

    /// Resolves combat against the monster on the target cell. The hero's
    /// position never changes: on victory only the tile is cleared.
    fn fight(&mut self, monster: &MonsterStats, target_id: TileId, x: i32, y: i32) {
        match resolve(&self.hero, monster) {
            CombatOutcome::CannotHurt => {
                self.log.push(format!("You cannot hurt the {}!", monster.name));
            }

            CombatOutcome::Defeat { .. } => {
                self.hero.hp = 0;
                self.status = GameStatus::GameOver;
                info!("hero defeated by {}", monster.name);
                self.log.push(format!("Defeated by {}!", monster.name));
            }

            CombatOutcome::Victory {
                damage_taken,
                gold,
                exp,
                ..
            } => {
                self.floors[self.hero.floor].set(x, y, tile::EMPTY);
                self.hero.hp -= damage_taken;
                self.hero.gold += gold;
                for message in grant_exp(&mut self.hero, exp) {
                    self.log.push(message);
                }
                self.log
                    .push(format!("Defeated {}. Lost {} HP.", monster.name, damage_taken));

                if target_id == tile::MONSTER_DRAGON {
                    self.status = GameStatus::Victory;
                    info!("boss defeated; session won");
                }
            }
        }
    }

    /// Travels directly to a previously visited floor.
    ///
    /// A capability gate, not a combat action: requests above the
    /// `max_floor_visited` high-water mark (or out of range, or after the
    /// session ended) are refused silently. The hero lands on the first
    /// staircase of either kind in row-major order, or at (0, 0) when the
    /// floor has none. Nothing else about the hero changes.
    pub fn fly_to_floor(&mut self, target: usize) {
        if self.status != GameStatus::Playing {
            return;
        }
        if target > self.hero.max_floor_visited || target >= self.floors.len() {
            debug!("fly to floor {target} refused");
            return;
        }

        let landing = self.floors[target]
            .find_first(&[tile::STAIRS_UP, tile::STAIRS_DOWN])
            .unwrap_or_else(crate::Position::origin);

        self.hero.floor = target;
        self.hero.x = landing.x;
        self.hero.y = landing.y;
        info!("flew to floor {target}");
        self.log.push(format!("Flew to Floor {target}."));
    }
}
