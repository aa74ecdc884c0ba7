use docubuilder_types::PLACEHOLDER_NOTICE;
use ratatui::{Frame, layout::Rect, text::Span, widgets::Paragraph};

use super::widgets::{page_frame, render_header};
use crate::app::App;
use crate::ui::components::component::Component;

/// Title and a notice for features that do not exist yet.
#[derive(Debug)]
pub struct PlaceholderPage {
    title: String,
}

impl PlaceholderPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl Component for PlaceholderPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let inner = page_frame(frame, area, theme, app.content_focus.get());
        let body = render_header(frame, inner, theme, &self.title, None);
        if body.height > 1 {
            let notice_area = Rect::new(body.x, body.y + 1, body.width, 1);
            frame.render_widget(Paragraph::new(Span::styled(PLACEHOLDER_NOTICE, theme.text_secondary_style())), notice_area);
        }
    }
}
