use blackjack_core::{Card, Game, GameEvent, Outcome, Participant, Suit, DEALER};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::error::Error;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mod tui_logger;
use tui_logger::TuiLogger;

/// Single-seat table: one player at seat 1, dealer at seat 0.
const PLAYER: usize = 1;
const DECKS: usize = 6;
const FEED_BACKLOG: usize = 200;

struct App {
    game: Game,
    feed: Vec<String>,
    logs: Vec<String>,
    log_buffer: Arc<Mutex<Vec<String>>>,
    log_visible: bool,
    status: String,
    show_actions: bool,
    show_reset: bool,
    dealer_revealed: bool,
}

impl App {
    fn new(log_buffer: Arc<Mutex<Vec<String>>>) -> Result<Self, Box<dyn Error>> {
        let mut game = Game::new(1, DECKS)?;
        game.deal();
        let mut app = App {
            game,
            feed: Vec::new(),
            logs: Vec::new(),
            log_buffer,
            log_visible: false,
            status: String::new(),
            show_actions: true,
            show_reset: false,
            dealer_revealed: false,
        };
        app.pump_events();
        Ok(app)
    }

    fn sync_logs(&mut self) {
        if let Ok(mut buffer) = self.log_buffer.lock() {
            self.logs.append(&mut buffer);
        }
    }

    /// Applies everything the engine emitted since the last frame.
    fn pump_events(&mut self) {
        for event in self.game.drain_events() {
            match event {
                GameEvent::CardDealt { participant, card } => {
                    self.feed
                        .push(format!("{} draws {}", seat_name(participant), card));
                }
                GameEvent::ScoreChanged { participant, score } => {
                    self.feed
                        .push(format!("{} total {}", seat_name(participant), score));
                }
                GameEvent::ScoreboardChanged { participant, wins } => {
                    self.feed
                        .push(format!("{} scoreboard: {}", seat_name(participant), wins));
                }
                GameEvent::RoundResolved { outcome, payout } => {
                    self.status = match outcome {
                        Outcome::PlayerWin => format!("You win {payout}x! Press [N] for a new round"),
                        Outcome::DealerWin if payout > 0 => {
                            format!("Dealer wins {payout}x. Press [N] for a new round")
                        }
                        Outcome::DealerWin => {
                            "Dealer holds 21. Press [N] for a new round".to_string()
                        }
                        Outcome::Push => "Push. Press [N] for a new round".to_string(),
                    };
                }
                GameEvent::ControlsChanged {
                    show_actions,
                    show_reset,
                    reveal_dealer,
                } => {
                    self.show_actions = show_actions;
                    self.show_reset = show_reset;
                    self.dealer_revealed = reveal_dealer;
                    if show_actions {
                        self.status = "[H] Hit  [S] Stand  [L] Logs  [Q] Quit".to_string();
                    }
                }
            }
        }
        if self.feed.len() > FEED_BACKLOG {
            let cut = self.feed.len() - FEED_BACKLOG;
            self.feed.drain(..cut);
        }
    }

    fn hit(&mut self) {
        if self.show_actions {
            if let Err(e) = self.game.hit(PLAYER) {
                log::warn!("hit rejected: {e}");
            }
            self.pump_events();
        }
    }

    fn stand(&mut self) {
        if self.show_actions {
            if let Err(e) = self.game.stand(PLAYER) {
                log::warn!("stand rejected: {e}");
            }
            self.pump_events();
        }
    }

    fn new_round(&mut self) {
        if self.show_reset {
            self.game.reset_round();
            self.pump_events();
        }
    }
}

fn seat_name(id: usize) -> &'static str {
    if id == DEALER {
        "dealer"
    } else {
        "player"
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let (logger, log_buffer) = TuiLogger::new();
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(log::LevelFilter::Debug))
        .expect("failed to initialize logger");

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(log_buffer)?;
    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}")
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<(), Box<dyn Error>>
where
    B::Error: 'static,
{
    loop {
        app.sync_logs();
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                    KeyCode::Char('h') | KeyCode::Char('H') => app.hit(),
                    KeyCode::Char('s') | KeyCode::Char('S') => app.stand(),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r')
                    | KeyCode::Char('R') => app.new_round(),
                    KeyCode::Char('l') | KeyCode::Char('L') => {
                        app.log_visible = !app.log_visible;
                    }
                    _ => {}
                }
            }
        }
    }
}

fn card_span(card: &Card, hidden: bool) -> Span<'static> {
    let text = if hidden {
        "??".to_string()
    } else {
        card.to_display()
    };
    let color = if hidden {
        Color::White
    } else {
        match card.suit {
            Suit::Hearts => Color::Red,
            Suit::Diamonds => Color::from_u32(0xFF_A5_00), // Orange
            Suit::Clubs => Color::Magenta,
            Suit::Spades => Color::Black,
        }
    };
    Span::styled(format!("{text} "), Style::default().fg(color).bg(Color::Gray))
}

fn hand_line(participant: &Participant, hide_hole_card: bool) -> Line<'static> {
    let spans: Vec<Span> = participant
        .hand
        .cards()
        .iter()
        .enumerate()
        .map(|(idx, card)| card_span(card, hide_hole_card && idx == 1))
        .collect();
    if spans.is_empty() {
        Line::from("no cards")
    } else {
        Line::from(spans)
    }
}

fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Table area
                Constraint::Length(3), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new("Blackjack")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    // Table on the left, feed or log pane on the right.
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
        .split(main_chunks[1]);

    let table_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(horizontal[0]);

    let dealer = &app.game.participants[DEALER];
    let hide_hole_card = !app.dealer_revealed && dealer.hand.len() >= 2;
    let dealer_total = if app.dealer_revealed {
        format!(" ({})", dealer.score())
    } else {
        String::new()
    };
    let dealer_panel = Paragraph::new(hand_line(dealer, hide_hole_card))
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Dealer{}  wins {}",
            dealer_total, dealer.wins
        )))
        .wrap(Wrap { trim: true });
    f.render_widget(dealer_panel, table_area[0]);

    let player = &app.game.participants[PLAYER];
    let player_panel = Paragraph::new(hand_line(player, false))
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Player ({})  wins {}",
            player.score(),
            player.wins
        )))
        .wrap(Wrap { trim: true });
    f.render_widget(player_panel, table_area[1]);

    let (pane_title, pane_lines) = if app.log_visible {
        ("Logs", &app.logs)
    } else {
        ("Table feed", &app.feed)
    };
    let visible = horizontal[1].height.saturating_sub(2) as usize;
    let start = pane_lines.len().saturating_sub(visible);
    let lines: Vec<Line> = pane_lines[start..]
        .iter()
        .map(|entry| Line::from(entry.clone()))
        .collect();
    let pane = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(pane_title))
        .wrap(Wrap { trim: true });
    f.render_widget(pane, horizontal[1]);

    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);
}
