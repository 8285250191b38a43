//! UI loop - turns key presses into Counter activations and App events
//!
//! The App actor answers every event with exactly one snapshot. After
//! sending an event the loop waits for that snapshot, so the next key is
//! always handled against the state the previous key produced.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::counter::Counter;
use crate::hooks::SetCount;
use crate::messages::ui_events::key_to_action;
use crate::messages::{KeyAction, RenderState, UiEvent};
use crate::ui::draw_app;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct UiLoop {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
    set_count: SetCount,
    current: RenderState,
}

impl UiLoop {
    /// Wait for App's first render and take it as the current state
    pub async fn connect(
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        mut render_rx: mpsc::UnboundedReceiver<RenderState>,
    ) -> Result<Self> {
        let current = render_rx
            .recv()
            .await
            .context("App stopped before its first render")?;

        Ok(UiLoop {
            set_count: SetCount::for_count(ui_tx.clone()),
            ui_tx,
            render_rx,
            current,
        })
    }

    /// The snapshot the screen currently shows
    pub fn current(&self) -> &RenderState {
        &self.current
    }

    pub fn draw(&self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        terminal.draw(|f| draw_app(f, &self.current, &self.set_count))?;
        Ok(())
    }

    /// Handle one key press to completion
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<LoopControl> {
        match key_to_action(key, self.current.focused, self.current.show_help) {
            Some(KeyAction::Activate(slot)) => {
                if self.current.focused != slot {
                    self.dispatch(UiEvent::Focus(slot)).await?;
                }
                let counter = Counter::from_render_state(&self.current, slot, &self.set_count);
                if counter.activate() {
                    self.await_render().await?;
                }
            }
            Some(KeyAction::Dispatch(UiEvent::Quit)) => {
                let _ = self.ui_tx.send(UiEvent::Quit);
                return Ok(LoopControl::Quit);
            }
            Some(KeyAction::Dispatch(event)) => self.dispatch(event).await?,
            None => {}
        }

        Ok(LoopControl::Continue)
    }

    async fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        self.ui_tx
            .send(event)
            .map_err(|_| anyhow!("App stopped"))?;
        self.await_render().await
    }

    async fn await_render(&mut self) -> Result<()> {
        self.current = self.render_rx.recv().await.context("App stopped")?;
        Ok(())
    }

    /// Run until quit: draw, poll for a key, handle it
    pub async fn run(mut self, terminal: &mut Terminal<impl Backend>, poll_interval: Duration) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if event::poll(poll_interval)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key).await? == LoopControl::Quit {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppActor;
    use crate::messages::CounterSlot;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use tokio::task::JoinHandle;

    async fn start(step: i64) -> (UiLoop, JoinHandle<()>) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(AppActor::new(step, render_tx).run(ui_rx));
        let ui = UiLoop::connect(ui_tx, render_rx).await.unwrap();
        (ui, handle)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(ui: &UiLoop) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        ui.draw(&mut terminal).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_rapid_presses_each_add_one() {
        let (mut ui, handle) = start(1).await;

        for i in 0..1000 {
            let code = if i % 2 == 0 { KeyCode::Char('1') } else { KeyCode::Char('2') };
            assert_eq!(ui.handle_key(key(code)).await.unwrap(), LoopControl::Continue);
            assert_eq!(ui.current().count, i + 1);
        }
        assert_eq!(screen(&ui).matches("Count: 1000").count(), 2);

        ui.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_scenario_on_screen() {
        let (mut ui, handle) = start(1).await;
        assert_eq!(screen(&ui).matches("Count: 0").count(), 2);

        ui.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(screen(&ui).matches("Count: 1").count(), 2);

        ui.handle_key(key(KeyCode::Tab)).await.unwrap();
        ui.handle_key(key(KeyCode::Char(' '))).await.unwrap();
        assert_eq!(screen(&ui).matches("Count: 2").count(), 2);

        ui.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_direct_press_moves_focus_then_increments() {
        let (mut ui, handle) = start(1).await;
        assert_eq!(ui.current().focused, CounterSlot::First);

        ui.handle_key(key(KeyCode::Char('2'))).await.unwrap();
        assert_eq!(ui.current().focused, CounterSlot::Second);
        assert_eq!(ui.current().count, 1);

        // Enter now goes to the newly focused counter
        ui.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(ui.current().focused, CounterSlot::Second);
        assert_eq!(ui.current().count, 2);

        ui.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_help_swallows_activation() {
        let (mut ui, handle) = start(1).await;

        ui.handle_key(key(KeyCode::Char('?'))).await.unwrap();
        assert!(ui.current().show_help);
        assert!(screen(&ui).contains("Keyboard Shortcuts"));

        ui.handle_key(key(KeyCode::Enter)).await.unwrap();
        assert!(!ui.current().show_help);
        assert_eq!(ui.current().count, 0);

        ui.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_remount_then_press() {
        let (mut ui, handle) = start(1).await;

        for _ in 0..3 {
            ui.handle_key(key(KeyCode::Char('+'))).await.unwrap();
        }
        assert_eq!(ui.current().count, 3);

        ui.handle_key(key(KeyCode::Char('r'))).await.unwrap();
        assert_eq!(ui.current().count, 0);
        assert_eq!(ui.current().generation, 2);

        ui.handle_key(key(KeyCode::Char('1'))).await.unwrap();
        assert_eq!(ui.current().count, 1);

        ui.handle_key(key(KeyCode::Char('q'))).await.unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_quit_stops_loop_and_app() {
        let (mut ui, handle) = start(1).await;

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ui.handle_key(ctrl_c).await.unwrap(), LoopControl::Quit);
        handle.await.unwrap();

        // Keys after App is gone surface as an error instead of hanging
        assert!(ui.handle_key(key(KeyCode::Tab)).await.is_err());
    }

    #[tokio::test]
    async fn test_unmapped_key_changes_nothing() {
        let (mut ui, handle) = start(1).await;
        let before = ui.current().clone();

        assert_eq!(ui.handle_key(key(KeyCode::Char('x'))).await.unwrap(), LoopControl::Continue);
        assert_eq!(ui.current(), &before);

        ui.handle_key(key(KeyCode::Esc)).await.unwrap();
        handle.await.unwrap();
    }
}
