use speedpunk::comb::{CombOptions, LayerSettings};
use std::io;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `DrawInstruction` per line.
    Records,
    Svg,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(src: &str) -> Result<Self, String> {
        match src {
            "records" => Ok(OutputFormat::Records),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(src.to_string()),
        }
    }
}

pub struct CombCmd {
    /// SVG path data.
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: CombOptions,
    pub layer: LayerSettings,
    pub format: OutputFormat,
    pub count: bool,
}

#[test]
fn output_formats() {
    assert_eq!("records".parse(), Ok(OutputFormat::Records));
    assert_eq!("svg".parse(), Ok(OutputFormat::Svg));
    assert_eq!("png".parse::<OutputFormat>(), Err("png".to_string()));
}
