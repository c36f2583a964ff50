//! # Application Controller
//!
//! Wires user input to the view model and state transitions to the renderer.
//! Input and output are injected, so the whole loop runs against scripted
//! streams in tests exactly as it runs against a terminal.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::cmd_args::CommandLineArgs;
use crate::config::LookupProfile;
use crate::repl::services::binlist::BinlistClient;
use crate::repl::services::lookup::CardLookup;
use crate::repl::view_models::SearchViewModel;
use crate::repl::views::StateRenderer;

/// Quit command, vim style
const QUIT: &str = ":q";

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<R: AsyncBufRead + Unpin, W: Write> {
    view_model: SearchViewModel,
    renderer: StateRenderer,
    lines: Lines<R>,
    out: W,
    interactive: bool,
}

impl AppController<BufReader<Stdin>, std::io::Stdout> {
    /// Create a controller on stdin/stdout with the configured backend
    pub fn new(args: &CommandLineArgs, profile: &LookupProfile) -> Result<Self> {
        let client: Arc<dyn CardLookup> = Arc::new(BinlistClient::new(profile)?);
        let interactive = atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout);

        Self::with_io(
            client,
            profile.debounce(),
            args.json(),
            BufReader::new(tokio::io::stdin()),
            std::io::stdout(),
            interactive,
        )
    }
}

impl<R: AsyncBufRead + Unpin, W: Write> AppController<R, W> {
    /// Create a controller with injected I/O streams (dependency injection)
    pub fn with_io(
        lookup: Arc<dyn CardLookup>,
        delay: Duration,
        json: bool,
        reader: R,
        out: W,
        interactive: bool,
    ) -> Result<Self> {
        let view_model = SearchViewModel::new(lookup, delay)?;

        Ok(Self {
            view_model,
            renderer: StateRenderer::new(json),
            lines: reader.lines(),
            out,
            interactive,
        })
    }

    /// Run the input loop until EOF or a quit command
    pub async fn run(&mut self) -> Result<()> {
        let mut state_rx = self.view_model.subscribe();

        if self.interactive {
            writeln!(self.out, "binlook - live BIN lookup")?;
            writeln!(
                self.out,
                "Type the first digits of a card number; results appear after a short pause."
            )?;
            writeln!(self.out, "A blank line clears, '{QUIT}' quits.")?;
            write_prompt(&mut self.out)?;
        }

        loop {
            tokio::select! {
                line = self.lines.next_line() => match line? {
                    Some(line) => {
                        let input = line.trim();
                        if input == QUIT {
                            break;
                        }
                        self.view_model.on_input_changed(input).await;
                    }
                    None => break,
                },
                changed = state_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let state = state_rx.borrow_and_update().clone();
                    self.renderer.render(&state, &mut self.out)?;
                    if self.interactive {
                        write_prompt(&mut self.out)?;
                    }
                }
            }
        }

        // Owner-driven teardown: nothing may fire against a closed screen
        self.view_model.shutdown();
        tracing::debug!("Controller loop finished");
        Ok(())
    }
}

fn write_prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "bin> ")?;
    out.flush()?;
    Ok(())
}
