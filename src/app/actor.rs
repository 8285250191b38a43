//! App actor - message loop applying UI events to the shared state

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the count and publishes render states
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(step: i64, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(step),
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        tracing::info!(count = self.state.count(), "App mounted");

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            tracing::debug!(?event, "Handling UI event");
            if self.handle_ui_event(event) {
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }

        tracing::info!(count = self.state.count(), "App unmounted");
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::SetCount { value, generation } => {
                self.state.set_count(value, generation);
            }

            UiEvent::FocusNext => self.state.focus_next(),
            UiEvent::FocusPrev => self.state.focus_prev(),
            UiEvent::Focus(slot) => self.state.focus(slot),

            UiEvent::Remount => self.state.remount(),

            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }

        false
    }
}
