//! Scene: the fixed-tick loop and the round state machine
//!
//! ```text
//! Playing --bird dies--> GameOver --Retry--> Playing
//!    |                      |
//!    +------Quit input------+--Quit--> Quitting (terminal)
//! ```
//!
//! Each tick while playing runs, in order: bird update, pipe stream update,
//! collision pass, score update, render. The scene is the only writer of the
//! world and the only place rounds end, restart or quit.

use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, select};

use crate::audio::{Audio, Sounds};
use crate::error::Result;
use crate::platform::input::InputEvent;
use crate::platform::prompt::{Choice, Prompt};
use crate::platform::storage::HighScoreStore;
use crate::platform::time::{Clock, TickStats};
use crate::renderer::{Renderer, Sprites, paint};
use crate::settings::Settings;
use crate::world::World;

/// Round state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneState {
    Playing,
    /// The bird died; waiting on the retry/quit prompt
    GameOver,
    /// Terminal
    Quitting,
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Rounds started, including the first
    pub rounds: u32,
    pub best: u64,
    pub ticks: TickStats,
}

pub struct Scene<R: Renderer, A: Audio, P: Prompt> {
    world: Arc<World>,
    state: SceneState,
    sprites: Sprites,
    sounds: Sounds,
    renderer: R,
    audio: A,
    prompt: P,
    music: bool,
    sound_effects: bool,
    rounds: u32,
    stats: TickStats,
    released: bool,
}

impl<R: Renderer, A: Audio, P: Prompt> Scene<R, A, P> {
    /// Load the best score and every asset, then start the first round.
    /// Any failure here aborts before the first tick.
    pub fn new(
        settings: &Settings,
        store: Box<dyn HighScoreStore>,
        mut renderer: R,
        mut audio: A,
        prompt: P,
    ) -> Result<Self> {
        let seed = settings.resolve_seed();
        let world = World::new(settings, seed, store)?;
        let sprites = Sprites::load(&mut renderer, settings)?;
        let sounds = match Sounds::load(&mut audio, settings) {
            Ok(sounds) => sounds,
            Err(e) => {
                sprites.release(&mut renderer);
                return Err(e);
            }
        };

        if settings.music {
            audio.play_music(true);
        }
        log::info!("Round 1 starting (seed {})", seed);

        Ok(Self {
            world: Arc::new(world),
            state: SceneState::Playing,
            sprites,
            sounds,
            renderer,
            audio,
            prompt,
            music: settings.music,
            sound_effects: settings.sound_effects,
            rounds: 1,
            stats: TickStats::default(),
            released: false,
        })
    }

    /// Shared handle for readers on other threads
    pub fn world(&self) -> Arc<World> {
        Arc::clone(&self.world)
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            rounds: self.rounds,
            best: self.world.score.best(),
            ticks: self.stats,
        }
    }

    /// Advance one tick. Does nothing unless playing.
    pub fn step(&mut self) -> Result<()> {
        if self.state != SceneState::Playing {
            return Ok(());
        }

        let bird_x = {
            let mut bird = self.world.bird.write();
            bird.update();
            bird.pos.x
        };
        let cleared = self.world.pipes.write().update(bird_x);
        self.world.collide();
        for _ in 0..cleared {
            self.world.score.increase();
        }
        paint(&self.world, &self.sprites, &mut self.renderer)?;

        if !self.world.bird_alive() {
            self.game_over()?;
        }
        Ok(())
    }

    /// React to one input event
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Jump => {
                if self.state != SceneState::Playing {
                    return Ok(());
                }
                let jumped = self.world.bird.write().jump();
                if jumped && self.sound_effects && !self.audio.is_any_playing() {
                    self.audio.play_one_shot(self.sounds.jump);
                }
            }
            InputEvent::Quit => self.quit()?,
            InputEvent::Other(_) => log::warn!("Ignoring {}", event),
        }
        Ok(())
    }

    /// Persist the best score, then ask whether to play again
    fn game_over(&mut self) -> Result<()> {
        self.state = SceneState::GameOver;
        let score = self.world.score.snapshot();
        log::info!(
            "Round {} over: score {}, best {}",
            self.rounds,
            score.current,
            score.best
        );

        self.world.score.persist_best()?;
        if self.music {
            self.audio.pause_music();
        }

        match self.prompt.choose(&score)? {
            Choice::Retry => self.restart(),
            Choice::Quit => {
                log::info!("Player quit at game over");
                self.state = SceneState::Quitting;
            }
        }
        Ok(())
    }

    fn restart(&mut self) {
        self.world.restart();
        self.rounds += 1;
        if self.music {
            self.audio.rewind_music();
            self.audio.resume_music();
        }
        self.state = SceneState::Playing;
        log::info!("Round {} starting", self.rounds);
    }

    /// Enter the terminal state, keeping a best score reached mid-round
    fn quit(&mut self) -> Result<()> {
        if self.state == SceneState::Quitting {
            return Ok(());
        }
        self.state = SceneState::Quitting;
        if self.music {
            self.audio.pause_music();
        }
        self.world.score.persist_if_improved()?;
        Ok(())
    }

    /// Destroy the scene's textures. Safe to call more than once.
    pub fn release(&mut self) {
        if !self.released {
            self.sprites.release(&mut self.renderer);
            self.released = true;
        }
    }

    /// Run until quitting, shutdown or the first error
    ///
    /// Input events, ticks and the shutdown signal are multiplexed on one
    /// thread, so ticks are processed strictly one after another. A closed
    /// input channel, a stopped clock or a closed shutdown channel all end
    /// the run like a quit. Textures are released on every exit path.
    pub fn run(
        &mut self,
        clock: &Clock,
        events: &Receiver<InputEvent>,
        shutdown: &Receiver<()>,
    ) -> Result<RunSummary> {
        let result = self.run_loop(clock, events, shutdown);
        self.release();
        if let Err(e) = &result {
            log::error!("Run ended: {}", e);
        }
        result.map(|()| self.summary())
    }

    fn run_loop(
        &mut self,
        clock: &Clock,
        events: &Receiver<InputEvent>,
        shutdown: &Receiver<()>,
    ) -> Result<()> {
        let period = clock.period();
        let ticks = clock.receiver();

        while self.state != SceneState::Quitting {
            select! {
                recv(events) -> event => match event {
                    Ok(event) => self.handle_event(event)?,
                    Err(_) => {
                        log::info!("Input closed");
                        self.quit()?;
                    }
                },
                recv(ticks) -> tick => match tick {
                    Ok(_) => {
                        let start = Instant::now();
                        self.step()?;
                        self.stats.record(start, period);
                    }
                    Err(_) => {
                        log::info!("Clock stopped");
                        self.quit()?;
                    }
                },
                recv(shutdown) -> _ => {
                    log::info!("Shutdown requested");
                    self.quit()?;
                }
            }
        }

        log::debug!(
            "Loop done after {} ticks ({} late)",
            self.stats.ticks,
            self.stats.late_ticks
        );
        Ok(())
    }
}
