use clap::{ArgAction, Parser};

#[derive(Clone, Debug, Parser)]
#[clap(disable_help_flag = true)]
pub struct Args {
    #[arg(
        short = 'w',
        long = "width",
        default_value_t = 64,
        help = "Specify the width of the board."
    )]
    pub width: usize,

    #[arg(
        short = 'h',
        long = "height",
        default_value_t = 48,
        help = "Specify the height of the board."
    )]
    pub height: usize,

    #[arg(
        long,
        default_value_t = 100,
        help = "Specify the number of turns to process."
    )]
    pub turns: usize,

    #[arg(
        short = 'p',
        long,
        default_value = "Glider",
        help = "Specify the seed pattern placed on a fresh board."
    )]
    pub pattern: String,

    #[arg(
        short = 'i',
        long,
        help = "Load the starting board from a serialized board file instead of a pattern."
    )]
    pub input: Option<String>,

    #[arg(
        short = 'o',
        long,
        help = "Write the final board to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        long,
        action = ArgAction::HelpLong
    )]
    help: Option<bool>,
}

impl Default for Args {
    fn default() -> Self {
        Args::parse_from([""])
    }
}

impl Args {
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    pub fn pattern<T: Into<String>>(mut self, pattern: T) -> Self {
        self.pattern = pattern.into();
        self
    }
}
