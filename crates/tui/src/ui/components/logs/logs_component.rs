//! Read-only activity log panel.
//!
//! Shows the newest entries of [`LogsState`](super::LogsState) that fit the
//! panel, oldest at the top.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::state::{LogEntry, LogLevel};
use crate::app::App;
use crate::ui::{
    components::component::Component,
    theme::{Theme, theme_helpers as th},
};

#[derive(Debug, Default)]
pub struct LogsComponent;

fn entry_line<'a>(theme: &dyn Theme, entry: &'a LogEntry) -> Line<'a> {
    let level_style = match entry.level {
        LogLevel::Info => theme.status_info(),
        LogLevel::Warn => theme.status_error(),
    };
    Line::from(vec![
        Span::styled(entry.at.format("%H:%M:%S ").to_string(), theme.text_muted_style()),
        Span::styled(format!("{:<5}", entry.level.as_str()), level_style),
        Span::raw(" "),
        Span::styled(entry.message.as_str(), theme.text_primary_style()),
    ])
}

impl Component for LogsComponent {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some(" Protokoll "), false);
        let visible_rows = block.inner(area).height as usize;

        let entries = app.logs.entries();
        let skip = entries.len().saturating_sub(visible_rows);
        let items: Vec<ListItem> = entries.iter().skip(skip).map(|entry| ListItem::new(entry_line(theme, entry))).collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
