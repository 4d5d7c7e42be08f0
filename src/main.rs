use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use olympus_quiz::{logger, ui, App, QuestionBank, QuizConfig, QuizSession, Ticker};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = QuizConfig::from_env();
    logger::init(&config.log_file);
    logger::log("Starting Greek Mythology Quiz");

    let bank = match &config.questions_file {
        Some(path) => QuestionBank::load(path),
        None => QuestionBank::bundled(),
    };
    let bank = match bank {
        Ok(bank) => bank,
        Err(e) => {
            logger::log(&format!("Failed to load questions: {}", e));
            eprintln!("Failed to load questions: {}", e);
            std::process::exit(1);
        }
    };
    logger::log(&format!("Loaded {} questions", bank.len()));

    let session = QuizSession::new(Arc::new(bank), config.rules);
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    logger::log("Shutting down");
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &QuizConfig,
) -> io::Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut ticker = Ticker::new(config.tick_interval, tick_tx);
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(tick) = tick_rx.recv() => {
                app.handle_tick(tick);
            }
        }

        ticker.sync(app.session.countdown());

        if app.should_quit {
            break;
        }
    }

    ticker.cancel();
    Ok(())
}
