use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use docubuilder_types::{Effect, Icon};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::widgets::{ActionList, ActionTarget, PageAction, page_frame, render_empty_state, render_header};
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::sidebar::icons::glyph;
use crate::ui::theme::{Theme, theme_helpers as th};

pub const GREETING: &str = "Willkommen zurück";
pub const SUBTITLE: &str = "Was möchtest du heute erstellen?";

/// Quick action cards: icon, label, description, target.
pub const QUICK_ACTIONS: &[(Icon, &str, &str, &str)] = &[
    (Icon::FileText, "Neues Dokument", "Erstelle ein neues Dokument", "/editor"),
    (Icon::LayoutTemplate, "Aus Vorlage", "Starte mit einer Vorlage", "/templates"),
    (Icon::Users, "Kontakt hinzufügen", "Füge einen neuen Kontakt hinzu", "/contacts"),
];

const ACTIONS: &[PageAction] = &[
    PageAction::secondary("quick.0", None, "Neues Dokument", ActionTarget::Navigate("/editor")),
    PageAction::secondary("quick.1", None, "Aus Vorlage", ActionTarget::Navigate("/templates")),
    PageAction::secondary("quick.2", None, "Kontakt hinzufügen", ActionTarget::Navigate("/contacts")),
    PageAction::primary("first_document", Icon::Plus, "Erstes Dokument erstellen", ActionTarget::Navigate("/editor")),
];

/// Landing page: greeting, quick actions, and the recent documents section.
#[derive(Debug)]
pub struct HomePage {
    actions: ActionList,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            actions: ActionList::new(ACTIONS),
        }
    }
}

impl HomePage {
    fn render_card(&self, frame: &mut Frame, area: Rect, theme: &dyn Theme, index: usize, focused: bool) {
        let (icon, label, description, _) = QUICK_ACTIONS[index];
        let selected = focused && self.actions.is_selected(ACTIONS[index].id);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(selected));
        let label_style = if selected {
            theme.accent_primary_style().add_modifier(Modifier::BOLD)
        } else {
            theme.heading_style()
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", glyph(icon)), theme.accent_primary_style()),
                Span::styled(label, label_style),
            ]),
            Line::from(Span::styled(description, theme.text_secondary_style())),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for HomePage {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.actions.activate_selected(app).into_effects(),
            _ => {
                self.actions.handle_nav_key(key);
                Vec::new()
            }
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        self.actions.activate_at(app, mouse.column, mouse.row).into_effects()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let focused = app.content_focus.get();
        let inner = page_frame(frame, area, theme, focused);
        self.actions.begin_render(area);

        let body = render_header(frame, inner, theme, GREETING, Some(SUBTITLE));
        let [_, cards_area, _, recent_title, recent_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        let card_areas = Layout::horizontal([Constraint::Fill(1); 3]).spacing(2).split(cards_area);
        for (index, card_area) in card_areas.iter().enumerate() {
            self.render_card(frame, *card_area, theme, index, focused);
            self.actions.set_area(ACTIONS[index].id, *card_area);
        }

        frame.render_widget(
            Paragraph::new(Span::styled("Letzte Dokumente", theme.heading_style())),
            recent_title,
        );
        let buttons = render_empty_state(frame, recent_area, theme, Icon::FileText, "", "Noch keine Dokumente vorhanden");
        self.actions.render_row(frame, buttons, theme, focused, &["first_document"], Alignment::Center);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(&*app.ctx.theme, &[(" ←/→", " Auswahl "), (" Enter", " Öffnen ")])
    }
}
