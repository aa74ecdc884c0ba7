//! Runtime: event loop and input routing for the shell.
//!
//! - Owns the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - A blocking task reads `crossterm` events and forwards them over a
//!   channel; the loop selects over input, a slow tick, and Ctrl+C.
//! - Keys and clicks go to `MainView`, which returns `Effect`s. Navigation
//!   effects are applied here and swap the page component.
//! - Renders only when something changed.

use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use docubuilder_types::{Effect, Msg};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::ShellOptions;
use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

const TICK_INTERVAL: Duration = Duration::from_millis(1000);
const MOUSE_MOVE_THROTTLE: Duration = Duration::from_millis(16);

/// Reads terminal input on a blocking task and forwards it over a channel.
/// Mouse moves are throttled; everything else is forwarded as-is.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(MOUSE_MOVE_THROTTLE) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(error) => {
                    tracing::warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            let event = match event::read() {
                Ok(event) => event,
                Err(error) => {
                    tracing::warn!(%error, "failed to read terminal input");
                    break;
                }
            };
            let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
            if is_mouse_move {
                if last_mouse_move.elapsed() < MOUSE_MOVE_THROTTLE {
                    continue;
                }
                last_mouse_move = Instant::now();
            }
            if sender.blocking_send(event).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, main_view: &mut MainView) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Rebuild focus just before rendering so structure changes are reflected
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(app, Some(Rc::unwrap_or_clone(old_focus))));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Applies effects in order. Navigation that changes the location swaps the
/// page component; `Quit` stops processing and ends the loop.
pub(crate) fn apply_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) -> ControlFlow<()> {
    for effect in effects {
        let moved = match effect {
            Effect::Navigate(path) => app.navigate(&path),
            Effect::NavigateBack => app.go_back(),
            Effect::NavigateForward => app.go_forward(),
            Effect::Quit => return ControlFlow::Break(()),
        };
        if moved {
            main_view.set_page(app);
        }
    }
    ControlFlow::Continue(())
}

fn is_ctrl_c(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Sets up the terminal, runs the event loop, and always restores the
/// terminal before returning.
pub async fn run_app(options: ShellOptions) -> Result<()> {
    let loaded_theme = theme::load(options.theme.as_deref());
    let mut app = App::new(&options.start_path, loaded_theme)?;
    let mut main_view = MainView::new(&app);
    tracing::info!(path = app.current_path(), theme = app.ctx.theme_id, "starting shell");

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut input_receiver, &mut app, &mut main_view).await;
    cleanup_terminal(&mut terminal)?;
    tracing::info!(path = app.current_path(), "shell stopped");
    outcome
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    input_receiver: &mut mpsc::Receiver<Event>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    // Some terminals drop resize notifications; compare sizes after each turn.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let mut needs_render = false;
        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if is_ctrl_c(&event) {
                    break;
                }
                needs_render = true;
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => main_view.handle_message(app, &Msg::Tick),
            _ = signal::ctrl_c() => { break; }
        };

        if !effects.is_empty() {
            needs_render = true;
            if apply_effects(app, main_view, effects).is_break() {
                break;
            }
        }

        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            main_view.handle_message(app, &Msg::Resize(width, height));
            needs_render = true;
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docubuilder_types::Page;
    use ratatui::backend::TestBackend;

    fn setup() -> (App, MainView) {
        let app = App::new("/", theme::load(None)).expect("route table");
        let view = MainView::new(&app);
        (app, view)
    }

    #[test]
    fn navigate_effect_swaps_page() {
        let (mut app, mut view) = setup();
        let flow = apply_effects(&mut app, &mut view, vec![Effect::Navigate("/contacts".into())]);
        assert!(flow.is_continue());
        assert_eq!(app.page(), &Page::Contacts);
        assert_eq!(app.history.current(), "/contacts");
    }

    #[test]
    fn quit_stops_remaining_effects() {
        let (mut app, mut view) = setup();
        let flow = apply_effects(&mut app, &mut view, vec![Effect::Quit, Effect::Navigate("/contacts".into())]);
        assert!(flow.is_break());
        assert_eq!(app.page(), &Page::Home);
    }

    #[test]
    fn back_and_forward_walk_history() {
        let (mut app, mut view) = setup();
        let _ = apply_effects(
            &mut app,
            &mut view,
            vec![Effect::Navigate("/documents".into()), Effect::Navigate("/templates/gallery".into())],
        );
        let _ = apply_effects(&mut app, &mut view, vec![Effect::NavigateBack]);
        assert_eq!(app.current_path(), "/documents");
        let _ = apply_effects(&mut app, &mut view, vec![Effect::NavigateForward]);
        assert_eq!(app.current_path(), "/templates/gallery");
        assert_eq!(app.page(), &Page::Templates);
    }

    #[test]
    fn render_restores_focus_to_sidebar() {
        let (mut app, mut view) = setup();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
        render(&mut terminal, &mut app, &mut view).expect("render");
        assert!(app.focus.focused().is_some());
        assert!(app.sidebar_focused());
    }
}
