//! Console prompts for target dimensions.

use std::io::{BufRead, Write};

/// Prompt for one dimension. Blank input (or EOF) takes the default;
/// anything that does not parse as a positive integer re-prompts.
pub fn prompt_dimension(
    label: &str,
    default: u32,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<u32> {
    loop {
        write!(output, "Enter {} (default {}): ", label, default)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF: behave like blank input
            return Ok(default);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }

        match trimmed.parse::<u32>() {
            Ok(value) if value > 0 => return Ok(value),
            _ => {
                writeln!(output, "Invalid {}: enter a positive integer or blank", label)?;
            }
        }
    }
}
