use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cc")]
#[command(about = "Proposal pricing for CommandCentered", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a proposal template against submitted form values
    Price {
        /// Template JSON file (`{ "elements": [...] }`)
        template: PathBuf,

        /// Form values JSON file; repeat to price several forms (defaults to an empty form)
        #[arg(long)]
        values: Vec<PathBuf>,

        /// Print the pricing result as JSON
        #[arg(long)]
        json: bool,

        /// Print the submission record for this template ID instead
        #[arg(long, value_name = "TEMPLATE_ID")]
        submission: Option<String>,
    },

    /// Inspect proposal templates
    #[command(subcommand)]
    Template(TemplateCommands),

    /// List the available element types
    Elements,

    /// Show the config file location and effective settings
    Config,
}

#[derive(Subcommand)]
pub enum TemplateCommands {
    /// Show a template's elements in display order
    Show {
        /// Template JSON file
        template: PathBuf,
    },

    /// Validate a template and print it normalized
    Check {
        /// Template JSON file
        template: PathBuf,
    },
}
