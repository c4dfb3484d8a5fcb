use super::{convert::normalize_code, rates, ui};
use crate::core::config::AppConfig;
use crate::core::{Outcome, Session};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  <amount>           convert an amount with the current selection
  convert [amount]   convert, optionally setting the amount first
  amount <text>      set the amount without converting
  from [CODE]        select the source currency (no code clears it)
  to [CODE]          select the target currency (no code clears it)
  swap               exchange source and target currencies
  reset              clear input, result and history
  history            show conversions made in this session
  rates              show the exchange rate table
  status             show the current selection and status
  help               show this message
  quit               leave the shell";

#[derive(Debug, Clone, PartialEq)]
enum ShellCommand {
    Empty,
    Amount(String),
    From(String),
    To(String),
    Convert(Option<String>),
    Swap,
    Reset,
    History,
    Rates,
    Status,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    let (cmd, arg) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(c, a)| (c, a.trim()));

    match cmd.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "amount" => ShellCommand::Amount(arg.to_string()),
        "from" => ShellCommand::From(normalize_code(arg)),
        "to" => ShellCommand::To(normalize_code(arg)),
        "convert" | "c" if arg.is_empty() => ShellCommand::Convert(None),
        "convert" | "c" => ShellCommand::Convert(Some(arg.to_string())),
        "swap" => ShellCommand::Swap,
        "reset" => ShellCommand::Reset,
        "history" => ShellCommand::History,
        "rates" => ShellCommand::Rates,
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ if arg.is_empty() && cmd.parse::<f64>().is_ok() => {
            ShellCommand::Convert(Some(cmd.to_string()))
        }
        _ => ShellCommand::Unknown(cmd.to_string()),
    }
}

fn selection_line(session: &Session) -> String {
    let show = |code: &str| {
        if code.is_empty() {
            "(none)".to_string()
        } else {
            code.to_string()
        }
    };
    format!(
        "Selected: {} -> {}",
        show(session.from()),
        show(session.to())
    )
}

fn write_status<W: Write>(output: &mut W, session: &Session) -> Result<()> {
    writeln!(
        output,
        "{}",
        ui::style_text(session.status(), ui::StyleType::Status)
    )?;
    Ok(())
}

fn write_history<W: Write>(output: &mut W, session: &Session) -> Result<()> {
    if session.history().is_empty() {
        writeln!(
            output,
            "{}",
            ui::style_text("No conversions yet.", ui::StyleType::Subtle)
        )?;
        return Ok(());
    }
    writeln!(
        output,
        "{}",
        ui::style_text("Conversion History", ui::StyleType::Title)
    )?;
    for (i, entry) in session.history().iter().enumerate() {
        writeln!(output, "{:>3}. {entry}", i + 1)?;
    }
    Ok(())
}

fn write_outcome<W: Write>(output: &mut W, session: &Session) -> Result<()> {
    match session.outcome() {
        Outcome::Converted(conversion) => writeln!(
            output,
            "{}",
            ui::style_text(&conversion.display(), ui::StyleType::Result)
        )?,
        Outcome::Failed(e) => writeln!(
            output,
            "{}",
            ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
        )?,
        Outcome::Idle => {}
    }
    write_status(output, session)
}

/// Runs the interactive shell until `quit` or end of input.
pub fn run_with<R: BufRead, W: Write>(
    session: &mut Session,
    config: &AppConfig,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(
        output,
        "{}",
        ui::style_text("Currency Converter", ui::StyleType::Title)
    )?;
    if config.show_rates_on_start {
        writeln!(output, "{}", rates::render(session.table()))?;
    }
    writeln!(output, "{}", selection_line(session))?;
    write_status(output, session)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            writeln!(output)?;
            break;
        }

        let command = parse_command(&line);
        debug!(?command, "Shell command");
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Amount(text) => session.set_amount(text),
            ShellCommand::From(code) => {
                session.select_from(code);
                writeln!(output, "{}", selection_line(session))?;
            }
            ShellCommand::To(code) => {
                session.select_to(code);
                writeln!(output, "{}", selection_line(session))?;
            }
            ShellCommand::Convert(amount) => {
                if let Some(text) = amount {
                    session.set_amount(text);
                }
                session.convert();
                write_outcome(output, session)?;
            }
            ShellCommand::Swap => {
                session.swap();
                writeln!(output, "{}", selection_line(session))?;
                write_status(output, session)?;
            }
            ShellCommand::Reset => {
                session.reset();
                writeln!(output, "{}", selection_line(session))?;
                write_status(output, session)?;
            }
            ShellCommand::History => write_history(output, session)?,
            ShellCommand::Rates => writeln!(output, "{}", rates::render(session.table()))?,
            ShellCommand::Status => {
                writeln!(output, "{}", selection_line(session))?;
                writeln!(output, "Amount: {}", session.amount_text())?;
                write_status(output, session)?;
            }
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Quit => break,
            ShellCommand::Unknown(cmd) => writeln!(
                output,
                "{}",
                ui::style_text(
                    &format!("Unknown command: {cmd} (type 'help')"),
                    ui::StyleType::Error
                )
            )?,
        }
    }

    if config.show_history_on_exit {
        write_history(output, session)?;
    }
    Ok(())
}

pub fn run(session: &mut Session, config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_with(session, config, stdin.lock(), &mut stdout)
}
