//! Terminal rendering for the App component

use ratatui::{prelude::*, widgets::*};

use crate::constants::COUNTER_INSTANCES;
use crate::counter::Counter;
use crate::hooks::SetCount;
use crate::messages::{CounterSlot, RenderState};

pub fn draw_app(f: &mut Frame, state: &RenderState, set_count: &SetCount) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(5), // Counters
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_heading(f, state, chunks[0]);
    draw_counters(f, state, set_count, chunks[1]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_heading(f: &mut Frame, state: &RenderState, area: Rect) {
    let heading = Paragraph::new(Line::from(Span::styled(
        state.heading.as_str(),
        Style::default().fg(Color::White).bold(),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(heading, area);
}

fn draw_counters(f: &mut Frame, state: &RenderState, set_count: &SetCount, area: Rect) {
    let constraints = vec![Constraint::Ratio(1, COUNTER_INSTANCES as u32); COUNTER_INSTANCES];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);

    for slot in CounterSlot::ALL {
        Counter::from_render_state(state, slot, set_count).render(f, columns[slot.index()], state.focused == slot);
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = format!(
        " Enter:+{} | 1/2:press counter | Tab:focus | r:remount | ?:help | q:quit | rev {} | mount {} ",
        state.step, state.revision, state.generation
    );

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 LIFTED COUNTER - Keyboard Shortcuts

 COUNTERS
   Enter / Space / +  Press the focused counter
   1 / 2              Press counter #1 / #2
   Tab / arrows       Move focus

 APP
   r                  Remount (count back to 0)

 GENERAL
   ?                  Toggle this help
   q / Esc / Ctrl+C   Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
