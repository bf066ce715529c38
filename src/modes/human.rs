use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{AudioSink, NullAudio};
use crate::game::{Direction, GameConfig, GameController};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive play: one cooperative loop that polls the keyboard, ticks the
/// game at a fixed period, and draws to the terminal.
pub struct HumanMode<A: AudioSink = NullAudio> {
    game: GameController,
    tick_ms: u64,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: A,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl HumanMode<NullAudio> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_audio(config, NullAudio)
    }
}

impl<A: AudioSink> HumanMode<A> {
    pub fn with_audio(config: GameConfig, audio: A) -> Self {
        let tick_ms = config.tick_ms;

        Self {
            game: GameController::new(config),
            tick_ms,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        self.audio.play_music();

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(Duration::from_millis(self.tick_ms));

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    // Only the last direction change before a tick counts.
                    self.pending_direction = Some(direction);
                }
                KeyAction::Confirm => {
                    self.restart_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.game.set_heading(direction);
        }

        let outcome = self.game.tick();

        for cue in &outcome.cues {
            self.audio.handle(*cue);
        }

        if outcome.ate_apple {
            self.metrics.on_apple_eaten();
        }

        if outcome.collision.is_some() {
            self.metrics.on_game_over(self.game.score());
        }
    }

    fn restart_game(&mut self) {
        let cues = self.game.confirm();
        if cues.is_empty() {
            // Confirm outside the game-over screen does nothing.
            return;
        }

        for cue in &cues {
            self.audio.handle(*cue);
        }

        self.metrics.on_game_start();
        self.pending_direction = None;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::RecordingAudio;
    use crate::audio::{AudioCue, SoundEffect};
    use crate::game::{Phase, Tile};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.game.phase(), Phase::Playing);
        assert_eq!(mode.game.score(), 1);
    }

    #[test]
    fn test_last_direction_before_tick_wins() {
        let mut mode = HumanMode::new(GameConfig::default());

        mode.handle_event(key(KeyCode::Right));
        mode.handle_event(key(KeyCode::Up));
        mode.update_game();

        assert_eq!(mode.game.snake().heading(), Direction::Up);
        assert_eq!(mode.game.snake().head(), Tile::new(1, 0));
    }

    #[test]
    fn test_quit_key_stops_the_loop() {
        let mut mode = HumanMode::new(GameConfig::default());
        mode.handle_event(key(KeyCode::Esc));
        assert!(mode.should_quit);
    }

    #[test]
    fn test_crash_and_restart_flow() {
        let mut mode =
            HumanMode::with_audio(GameConfig::default(), RecordingAudio::default());

        // Drive the snake up into the top wall: start (1,1), two ticks out.
        mode.handle_event(key(KeyCode::Up));
        mode.update_game();
        mode.update_game();
        assert_eq!(mode.game.phase(), Phase::GameOver);
        assert_eq!(mode.metrics.games_played, 1);

        // Enter restarts; a stale direction does not leak into the new run.
        mode.handle_event(key(KeyCode::Right));
        mode.handle_event(key(KeyCode::Enter));
        assert_eq!(mode.game.phase(), Phase::Playing);
        assert_eq!(mode.game.score(), 1);
        assert!(mode.pending_direction.is_none());

        mode.update_game();
        assert_eq!(mode.game.snake().heading(), Direction::Down);
    }

    #[test]
    fn test_audio_cues_reach_the_sink() {
        let mut mode =
            HumanMode::with_audio(GameConfig::default(), RecordingAudio::default());

        mode.handle_event(key(KeyCode::Up));
        mode.update_game();
        mode.update_game(); // crash
        mode.handle_event(key(KeyCode::Enter)); // restart

        assert_eq!(
            mode.audio.cues,
            vec![
                AudioCue::Effect(SoundEffect::Crash),
                AudioCue::PauseMusic,
                AudioCue::ResumeMusic,
            ]
        );
    }

    #[test]
    fn test_eating_plays_ding() {
        // Start tile (1,1) heading Down; apple moved onto the path below.
        let config = GameConfig {
            apple_start: Tile::new(1, 2),
            ..GameConfig::default()
        };
        let mut mode = HumanMode::with_audio(config, RecordingAudio::default());

        mode.update_game();
        assert_eq!(mode.game.score(), 2);
        assert_eq!(mode.audio.cues, vec![AudioCue::Effect(SoundEffect::Ding)]);
        assert_eq!(mode.metrics.apples_eaten, 1);
    }
}
