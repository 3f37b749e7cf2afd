use std::io::{self, BufRead, Write};

use mercado_core::catalog::Catalog;
use mercado_core::config::{AppConfig, DisplayConfig, LoadOptions, LogFormat};
use mercado_core::session::{Session, SubmitOutcome};

use crate::commands::{catalog, CommandResult, EXIT_CONFIG, EXIT_IO};
use crate::table;

pub fn run() -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("shop", "config_validation", error.to_string(), EXIT_CONFIG)
        }
    };
    init_logging(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(Catalog::seed());

    match run_session(&mut session, &mut stdin.lock(), &mut stdout.lock(), &config.display) {
        Ok(()) => CommandResult::success(
            "shop",
            format!(
                "session ended with {} line items, total {}",
                session.cart().len(),
                table::format_price(session.total(), &config.display.currency_symbol)
            ),
        ),
        Err(error) => CommandResult::failure("shop", "io", error.to_string(), EXIT_IO),
    }
}

/// The interactive add flow against generic reader/writer so tests can
/// script it. Each loop turn mirrors one pass through the form: a name
/// event, a quantity event, then the submit event when the gate is open.
pub fn run_session<R, W>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    display: &DisplayConfig,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    tracing::info!(event_name = "session.started", "shop session started");
    writeln!(output, "Supermercado: type a product name, or :catalog, :clear, :quit")?;

    loop {
        write!(output, "producto> ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else { break };
        match line.trim() {
            ":quit" => break,
            ":catalog" => {
                writeln!(output, "{}", catalog::render(session.catalog(), &display.currency_symbol))?;
                continue;
            }
            ":clear" => {
                session.clear_all();
                tracing::info!(event_name = "cart.cleared", "cart cleared");
                writeln!(output, "cart cleared")?;
                continue;
            }
            name => session.input_item(name),
        }

        write!(output, "cantidad> ")?;
        output.flush()?;
        let Some(count) = read_line(input)? else { break };
        match count.trim() {
            ":quit" => break,
            text => session.input_count(text),
        }

        if !session.can_submit() {
            // The disabled add button: an unresolved product or a
            // non-positive quantity does not submit and shows no error.
            continue;
        }

        match session.submit() {
            Ok(SubmitOutcome::Committed { line, total }) => {
                tracing::info!(
                    event_name = "cart.line_committed",
                    product = %line.name,
                    quantity = line.quantity,
                    total = %total,
                    "line item committed"
                );
                writeln!(
                    output,
                    "{}",
                    table::render(&table::cart_columns(&display.currency_symbol), session.cart().items())
                )?;
                writeln!(output, "Total: {}", table::format_price(total, &display.currency_symbol))?;
            }
            Ok(SubmitOutcome::Rejected(result)) => {
                for error in &result.errors {
                    writeln!(output, "  {}: {}", error.field.as_str(), error.message)?;
                }
            }
            Ok(SubmitOutcome::NoMatch) => {}
            Err(error) => {
                // A refused commit, e.g. a merge past the maximum quantity.
                // Surfaced inline; the session stays alive.
                writeln!(output, "  error: {error}")?;
            }
        }
    }

    // Reached on :quit at either prompt and on end of input.
    tracing::info!(
        event_name = "session.ended",
        line_items = session.cart().len(),
        total = %session.total(),
        "shop session ended"
    );

    Ok(())
}

fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
}
