use clap::Parser;
use std::fmt;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Route Formatter - Pick example segments and view the resulting route feature by feature
pub struct Settings {
    /// Segments to append, by index in the example list (suffix `r` to pick it reversed, e.g. `4r`)
    #[clap(value_name = "PICK")]
    pub picks: Vec<Pick>,

    /// Print the example segments with their indices
    #[clap(short, long, default_value = "false")]
    pub list: bool,

    /// Abort on the first pick that does not start where the route ends, instead of skipping it
    #[clap(short, long, default_value = "false")]
    pub strict: bool,

    /// Also print the route as a coordinate line string (lon, lat)
    #[clap(long, default_value = "false")]
    pub line_string: bool,
}

impl Settings {
    /// Parse settings from the process arguments, exiting with usage on error
    pub fn from_cli() -> Self {
        match Settings::try_parse() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }
}

/// One choice from the example segment list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pick {
    pub index: usize,
    pub reversed: bool,
}

impl FromStr for Pick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (digits, reversed) = match s.strip_suffix(['r', 'R']) {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let index = digits
            .parse::<usize>()
            .map_err(|e| format!("invalid segment index \"{s}\": {e}"))?;
        Ok(Pick { index, reversed })
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.index, if self.reversed { "r" } else { "" })
    }
}
