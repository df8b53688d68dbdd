//! The frame loop
//!
//! Each frame: throttle, poll input, erase/advance/steer/collide, rebuild
//! the HUD on a new hit, draw, then present only what changed.

use std::rc::Rc;

use glam::IVec2;

use crate::assets::Assets;
use crate::consts::HUD_TEXT_COLOR;
use crate::error::GameError;
use crate::platform::{Display, FrameClock, InputSource};
use crate::renderer::{Surface, TextRenderer, compose_background, redraw_background};
use crate::settings::Settings;
use crate::sim::{GameState, Patroller, Player, TickInput, TickOutcome, tick};

/// Totals reported when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub hits: u64,
}

/// A running game: state plus the surfaces it draws on
pub struct Game {
    settings: Settings,
    state: GameState,
    /// Off-screen copy of what the display should show
    screen: Surface,
    /// Tiled backdrop with the hit counter; erasing copies from here
    background: Surface,
    tile: Rc<Surface>,
    text: TextRenderer,
}

impl Game {
    pub fn new(settings: Settings, assets: &Assets) -> Self {
        let bounds = settings.screen_rect();
        let player = Player::new(assets.player.clone(), &bounds, settings.player_speed);
        let patrollers = settings
            .patrollers
            .iter()
            .map(|spawn| {
                Patroller::new(
                    assets.patroller.clone(),
                    spawn.position,
                    spawn.direction,
                    settings.patroller_speed,
                )
            })
            .collect();

        let text = TextRenderer::new(HUD_TEXT_COLOR, settings.text_scale);
        let background = compose_background(bounds, &assets.background, &text, 0);
        let state = GameState::new(bounds, player, patrollers, settings.scoring_mode);

        log::info!(
            "New game: {} patrollers, {} scoring",
            state.patrollers.len(),
            settings.scoring_mode.as_str()
        );

        Self {
            screen: background.clone(),
            background,
            tile: assets.background.clone(),
            text,
            state,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn screen(&self) -> &Surface {
        &self.screen
    }

    pub fn background(&self) -> &Surface {
        &self.background
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Simulate and draw one frame into the screen surface (no present)
    pub fn frame(&mut self, input: &TickInput) -> TickOutcome {
        let outcome = tick(&mut self.state, input, &mut self.screen, &self.background);
        if outcome.scored {
            self.redraw_score();
        }
        self.state.draw_all(&mut self.screen);
        outcome
    }

    /// New hit count: rebuild the background and repaint the whole screen
    fn redraw_score(&mut self) {
        redraw_background(&mut self.background, &self.tile, &self.text, self.state.hits());
        self.screen.blit(&self.background, IVec2::ZERO, None);
        self.state.dirty.mark_full(self.state.bounds);
        log::debug!("Score now {}, full-screen redraw", self.state.hits());
    }

    /// Flush the dirty regions to `display` and reset them.
    ///
    /// The display is called every frame, even with nothing dirty, so
    /// windowed backends keep pumping their event queue.
    pub fn present<D: Display>(&mut self, display: &mut D) -> Result<(), GameError> {
        if self.state.dirty.is_full() {
            display.present_all(&self.screen)?;
        } else {
            display.present(&self.screen, self.state.dirty.regions())?;
        }
        self.state.dirty.clear();
        Ok(())
    }

    /// Run until the platform reports quit
    pub fn run<P, C>(&mut self, platform: &mut P, clock: &mut C) -> Result<RunSummary, GameError>
    where
        P: Display + InputSource,
        C: FrameClock,
    {
        platform.present_all(&self.screen)?;

        loop {
            clock.tick(self.settings.frames_per_sec);

            let input = platform.poll();
            if input.quit {
                break;
            }

            self.frame(&input);
            self.present(platform)?;
        }

        let summary = RunSummary {
            frames: self.state.frame,
            hits: self.state.hits(),
        };
        log::info!("Quit after {} frames with {} hits", summary.frames, summary.hits);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedClock, HeadlessPlatform};
    use crate::settings::PatrollerSpawn;
    use crate::sim::{Entity, Rect, ScoringMode};

    fn assets() -> Assets {
        let mut ship = Surface::filled(32, 24, 0x0000_FF00);
        ship.set(0, 0, 0x00FF_00FF);
        ship.set_color_key(Some(0x00FF_00FF));
        Assets {
            background: Rc::new(Surface::filled(64, 64, 0x0010_2030)),
            patroller: Rc::new(Surface::filled(16, 16, 0x00FF_0000)),
            player: Rc::new(ship),
        }
    }

    /// One slow spider parked on the player's spawn point
    fn collision_settings(mode: ScoringMode) -> Settings {
        Settings {
            scoring_mode: mode,
            patroller_speed: 1,
            patrollers: vec![PatrollerSpawn::new(290, 440, 1)],
            ..Default::default()
        }
    }

    const STAY: TickInput = TickInput {
        up: false,
        down: false,
        left: false,
        right: false,
        quit: false,
    };
    const RIGHT: TickInput = TickInput {
        right: true,
        ..STAY
    };

    fn run_script(settings: Settings, script: Vec<TickInput>) -> (Game, HeadlessPlatform, RunSummary) {
        let mut game = Game::new(settings, &assets());
        let mut platform = HeadlessPlatform::new(640, 480, script);
        let summary = game.run(&mut platform, &mut FixedClock::default()).unwrap();
        (game, platform, summary)
    }

    #[test]
    fn test_quit_before_first_frame() {
        let (game, platform, summary) = run_script(Settings::default(), vec![]);
        assert_eq!(summary, RunSummary::default());
        assert_eq!(platform.display.full_presents, 1);
        assert_eq!(&platform.display.front, game.screen());
    }

    #[test]
    fn test_dirty_regions_empty_after_every_present() {
        let mut game = Game::new(Settings::default(), &assets());
        let mut platform = HeadlessPlatform::new(640, 480, []);
        platform.present_all(game.screen()).unwrap();

        let inputs = [STAY, RIGHT, TickInput { up: true, ..STAY }, RIGHT];
        for input in inputs.iter().cycle().take(60) {
            game.frame(input);
            assert!(!game.state().dirty.is_empty());
            game.present(&mut platform).unwrap();
            assert!(game.state().dirty.is_empty());
            // Partial presents keep the display in sync with the screen
            assert_eq!(&platform.display.front, game.screen());
        }
    }

    #[test]
    fn test_edge_scoring_full_redraw_once() {
        let script = vec![STAY, STAY, STAY, RIGHT, RIGHT];
        let (game, platform, summary) = run_script(collision_settings(ScoringMode::Edge), script);

        assert_eq!(summary, RunSummary { frames: 5, hits: 1 });
        // Startup plus the single new hit
        assert_eq!(platform.display.full_presents, 2);
        assert_eq!(platform.display.presents.len(), 4);
        assert_eq!(&platform.display.front, game.screen());
    }

    #[test]
    fn test_level_scoring_counts_each_frame() {
        let script = vec![STAY, STAY, STAY, RIGHT, RIGHT];
        let (_, platform, summary) = run_script(collision_settings(ScoringMode::Level), script);

        assert_eq!(summary.hits, 3);
        assert_eq!(platform.display.full_presents, 4);
    }

    #[test]
    fn test_score_change_rebuilds_background() {
        let mut game = Game::new(collision_settings(ScoringMode::Edge), &assets());
        let before = game.background().clone();
        let out = game.frame(&STAY);

        assert!(out.scored);
        assert!(game.state().dirty.is_full());
        assert_eq!(game.state().dirty.regions()[0], Rect::from_size(640, 480));
        assert_ne!(game.background(), &before);
        // Below the HUD band the backdrop is untouched
        let below = Rect::new(0, 100, 640, 300);
        assert_eq!(game.background().region(&below), before.region(&below));
    }

    #[test]
    fn test_erase_restores_background_under_actors() {
        let mut game = Game::new(Settings::default(), &assets());
        game.frame(&STAY);
        let rects: Vec<Rect> = game.state().entities().map(|e| e.rect()).collect();

        let mut screen = game.screen().clone();
        for entity in game.state().entities() {
            entity.erase(&mut screen, game.background());
        }
        for rect in rects {
            assert_eq!(screen.region(&rect), game.background().region(&rect));
        }
    }

    #[test]
    fn test_invisible_sprites_still_present_every_frame() {
        let mut game = Game::new(
            Settings::default(),
            &Assets {
                background: Rc::new(Surface::filled(64, 64, 0x0010_2030)),
                patroller: Rc::new(Surface::new(0, 0)),
                player: Rc::new(Surface::new(0, 0)),
            },
        );
        let mut platform = HeadlessPlatform::new(640, 480, vec![STAY, RIGHT, STAY]);
        let summary = game.run(&mut platform, &mut FixedClock::default()).unwrap();

        assert_eq!(summary.frames, 3);
        assert_eq!(platform.display.presents.len(), 3);
        assert_eq!(platform.display.full_presents, 1);
    }

    #[test]
    fn test_out_of_range_settings_run_a_frame() {
        let settings = Settings::from_json(
            r#"{
                "text_scale": 1000,
                "player_speed": 2147483647,
                "patroller_speed": 2147483647,
                "patrollers": [
                    { "position": [2147483640, 10] },
                    { "position": [-2147483640, 2147483640], "direction": -1 }
                ]
            }"#,
        )
        .unwrap();
        let mut game = Game::new(settings, &assets());
        let bounds = game.state().bounds;

        game.frame(&RIGHT);
        game.frame(&TickInput { up: true, ..STAY });
        for entity in game.state().entities() {
            assert!(bounds.contains(&entity.rect()));
        }
        assert_eq!(game.state().player.rect().y, 0);
    }

    #[test]
    fn test_player_color_key_leaves_background() {
        let mut game = Game::new(Settings::default(), &assets());
        game.frame(&STAY);
        let origin = game.state().player.rect().position();
        let (x, y) = (origin.x, origin.y);
        assert_eq!(game.screen().get(x, y), game.background().get(x, y));
        assert_eq!(game.screen().get(x + 1, y), Some(0x0000_FF00));
    }
}
