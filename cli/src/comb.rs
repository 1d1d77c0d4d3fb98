use crate::commands::{CombCmd, OutputFormat};
use speedpunk::comb::{draw_combs, generate, CombError, CombSummary};
use speedpunk::extra::{parse_path_data, ParseError, SvgWriter};
use std::fmt;
use std::io::{self, Write};

#[derive(Debug)]
pub enum CombCliError {
    Io(io::Error),
    Parse(ParseError),
    Comb(CombError),
}

impl From<io::Error> for CombCliError {
    fn from(err: io::Error) -> Self {
        CombCliError::Io(err)
    }
}

impl From<ParseError> for CombCliError {
    fn from(err: ParseError) -> Self {
        CombCliError::Parse(err)
    }
}

impl From<CombError> for CombCliError {
    fn from(err: CombError) -> Self {
        CombCliError::Comb(err)
    }
}

impl fmt::Display for CombCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CombCliError::Io(err) => write!(f, "I/O error: {err}"),
            CombCliError::Parse(err) => write!(f, "Invalid path data: {err}"),
            CombCliError::Comb(err) => write!(f, "Cannot draw curvature combs: {err}"),
        }
    }
}

pub fn comb(mut cmd: CombCmd) -> Result<CombSummary, CombCliError> {
    let outline = parse_path_data(&cmd.input)?;

    if cmd.count {
        let output = generate(&outline, &cmd.options)?;
        print_count(&mut *cmd.output, &output.summary)?;
        return Ok(output.summary);
    }

    let summary = match cmd.format {
        OutputFormat::Records => {
            let output = generate(&outline, &cmd.options)?;
            for instruction in &output.instructions {
                writeln!(&mut *cmd.output, "{instruction}")?;
            }
            output.summary
        }
        OutputFormat::Svg => {
            let mut writer = SvgWriter::with_outline(cmd.input.trim());
            let summary = draw_combs(&outline, &cmd.options, &cmd.layer, &mut writer)?;
            write!(&mut *cmd.output, "{}", writer.finish())?;
            summary
        }
    };

    cmd.output.flush()?;

    Ok(summary)
}

fn print_count(output: &mut dyn io::Write, summary: &CombSummary) -> io::Result<()> {
    writeln!(output, "paths: {}", summary.paths)?;
    writeln!(output, "samples: {}", summary.samples)?;
    writeln!(output, "combs: {}", summary.instructions)?;
    writeln!(output, "degenerate segments: {}", summary.degenerate_segments)?;
    output.flush()
}
