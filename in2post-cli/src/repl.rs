use anyhow::{Context, Result};
use in2post::interpreter::Converter;
use log::warn;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter infix expression ('exit' to quit): ";

fn is_exit_command(line: &str) -> bool {
    matches!(line, "quit" | "exit")
}

/// Converts one expression and writes both the postfix form and its evaluation.
pub fn print_conversion(
    converter: &mut Converter,
    expression: &str,
    output: &mut impl Write,
) -> Result<()> {
    let postfix = converter.convert(expression)?.to_string();
    writeln!(output, "Postfix expression: {}", postfix).context("could not write postfix")?;
    let evaluation = converter.evaluate()?;
    writeln!(output, "Postfix evaluation: {} = {}", postfix, evaluation)
        .context("could not write evaluation")?;
    Ok(())
}

/// Converts a single expression given on the command line.
pub fn convert_once(expression: &str, output: &mut impl Write) -> Result<()> {
    let mut converter = Converter::new();
    print_conversion(&mut converter, expression, output)
        .with_context(|| format!("could not convert '{}'", expression))
}

/// Prompts for and converts expressions line by line until end of input or an exit command.
///
/// A failed conversion is reported on `errors` and the loop carries on with the next line.
pub fn run(
    input: impl BufRead,
    output: &mut impl Write,
    errors: &mut impl Write,
    redirected: bool,
) -> Result<()> {
    let mut converter = Converter::new();
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("could not read expression")?;
        let line = line.trim_end_matches('\r');
        if is_exit_command(line) {
            break;
        }
        // Redirected input does not echo the user's newline.
        if redirected {
            writeln!(output)?;
        }

        if let Err(error) = print_conversion(&mut converter, line, output) {
            warn!("'{}' failed: {:?}", line, error);
            writeln!(errors, "Error: {}", error)?;
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }
    Ok(())
}
