//! Counter component
//!
//! A Counter owns no state. It displays the `count` it was handed and, when
//! activated, asks its parent to store `count + step` through `set_count`.

use ratatui::{prelude::*, widgets::*};

use crate::hooks::SetCount;
use crate::messages::{CounterSlot, RenderState};

/// Inputs App passes to each Counter
#[derive(Debug, Clone)]
pub struct CounterProps {
    pub slot: CounterSlot,
    pub count: i64,
    pub step: i64,
    pub set_count: SetCount,
}

pub struct Counter {
    props: CounterProps,
}

impl Counter {
    pub fn new(props: CounterProps) -> Self {
        Counter { props }
    }

    /// Build the Counter for `slot` from an App snapshot. The setter is
    /// bound to the mount that produced the snapshot.
    pub fn from_render_state(state: &RenderState, slot: CounterSlot, set_count: &SetCount) -> Self {
        Counter::new(CounterProps {
            slot,
            count: state.count,
            step: state.step,
            set_count: set_count.for_generation(state.generation),
        })
    }

    /// The value an activation would request, or None on overflow
    pub fn next_value(&self) -> Option<i64> {
        self.props.count.checked_add(self.props.step)
    }

    /// Press the increment button. Returns true if a new value was requested.
    pub fn activate(&self) -> bool {
        match self.next_value() {
            Some(value) => {
                tracing::debug!(slot = ?self.props.slot, from = self.props.count, to = value, "Counter activated");
                self.props.set_count.set(value)
            }
            None => {
                tracing::warn!(slot = ?self.props.slot, count = self.props.count, step = self.props.step, "Increment would overflow, ignored");
                false
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.props.slot.label()))
            .title_style(Style::default().bold());

        let button_style = if focused {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("Count: "),
                Span::styled(self.props.count.to_string(), Style::default().fg(Color::Yellow).bold()),
            ]),
            Line::from(""),
            Line::from(Span::styled(format!("[ +{} ]", self.props.step), button_style)),
        ];

        let body = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(body, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::UiEvent;
    use tokio::sync::mpsc;

    fn counter(count: i64, step: i64) -> (Counter, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = RenderState {
            count,
            step,
            ..RenderState::default()
        };
        let c = Counter::from_render_state(&state, CounterSlot::First, &SetCount::for_count(tx));
        (c, rx)
    }

    #[test]
    fn test_activate_requests_count_plus_step() {
        let (c, mut rx) = counter(41, 1);
        assert!(c.activate());
        assert_eq!(rx.try_recv().ok(), Some(UiEvent::SetCount { value: 42, generation: 1 }));
    }

    #[test]
    fn test_activate_does_not_touch_own_props() {
        let (c, mut rx) = counter(0, 1);
        c.activate();
        c.activate();
        // No local state: both presses request the same value until App re-renders
        assert_eq!(rx.try_recv().ok(), Some(UiEvent::SetCount { value: 1, generation: 1 }));
        assert_eq!(rx.try_recv().ok(), Some(UiEvent::SetCount { value: 1, generation: 1 }));
    }

    #[test]
    fn test_setter_bound_to_snapshot_generation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let state = RenderState {
            count: 2,
            generation: 4,
            ..RenderState::default()
        };
        Counter::from_render_state(&state, CounterSlot::Second, &SetCount::for_count(tx)).activate();
        assert_eq!(rx.try_recv().ok(), Some(UiEvent::SetCount { value: 3, generation: 4 }));
    }

    #[test]
    fn test_overflow_is_refused() {
        let (c, mut rx) = counter(i64::MAX, 1);
        assert_eq!(c.next_value(), None);
        assert!(!c.activate());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_render_shows_count() {
        use ratatui::backend::TestBackend;

        let (c, _rx) = counter(7, 1);
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                c.render(f, area, true);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Count: 7"));
        assert!(text.contains("Counter #1"));
    }
}
