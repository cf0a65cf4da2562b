use clap::Parser;

use crate::request::Mode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated list of ingredients on hand
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// Dietary preferences, e.g. "vegetarian, low carb"
    #[arg(long, default_value = "")]
    pub preferences: String,

    /// Allergens to strictly avoid
    #[arg(long, default_value = "")]
    pub allergies: String,

    /// Budget constraint, e.g. "10 USD"
    #[arg(long, default_value = "")]
    pub budget: String,

    /// Leftovers to reuse if possible
    #[arg(long, default_value = "")]
    pub leftovers: String,

    /// Output shape: a single recipe or a 7-day meal plan
    #[arg(long, value_enum, default_value = "recipe")]
    pub mode: Mode,

    /// Read the full request from a JSON file instead of flags
    #[arg(long)]
    pub request_file: Option<String>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
