use clap::{Parser, Subcommand};

/// renutri: a protein planning CLI for regional grocery budgets.
#[derive(Parser, Debug)]
#[command(name = "renutri")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog JSON file.
    #[arg(short, long, default_value = "food_catalog.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a shopping list for a protein goal within a budget.
    Plan {
        /// Protein goal in grams. Prompts when omitted.
        #[arg(long)]
        goal: Option<f64>,

        /// Budget in the active currency. Prompts when omitted.
        #[arg(long)]
        budget: Option<f64>,

        /// Dietary restriction, repeatable. Prompts when omitted.
        #[arg(long = "restrict")]
        restrict: Option<Vec<String>>,

        /// Location code (US, UK, ...). Prompts when omitted.
        #[arg(long)]
        location: Option<String>,
    },

    /// Chart protein efficiency by category for a region.
    Analyze {
        /// Location code.
        #[arg(long, default_value = "US")]
        location: String,

        /// Dietary restriction, repeatable.
        #[arg(long = "restrict")]
        restrict: Vec<String>,

        /// Also write the points to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// Show food highlights for a region.
    Insights {
        /// Location code.
        #[arg(long, default_value = "US")]
        location: String,
    },

    /// Suggest foods from regional eating habits and the season.
    Recommend {
        /// Location code.
        #[arg(long, default_value = "US")]
        location: String,

        /// Season name. Defaults to the current one.
        #[arg(long)]
        season: Option<String>,

        /// Dietary restriction, repeatable.
        #[arg(long = "restrict")]
        restrict: Vec<String>,
    },

    /// Look up one food and show its details.
    Show {
        /// Food name, fuzzy matched against the catalog.
        name: String,

        /// Location code.
        #[arg(long, default_value = "US")]
        location: String,
    },

    /// Write the built-in catalog to the catalog file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            goal: None,
            budget: None,
            restrict: None,
            location: None,
        }
    }
}
