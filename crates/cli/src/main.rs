mod cmd;
mod logging;
mod prompt;

use clap::{Args, Parser, Subcommand};
use promptlib_core::prompts::Category;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "plib", version, about = "Prompt templates with {variable} placeholders")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List prompts with search, category filter, and paging
    List(ListArgs),

    /// Show a prompt and the variables it uses
    Show {
        /// Prompt ID (e.g. PRM-001)
        id: String,
    },

    /// Create a new prompt
    Add(AddArgs),

    /// Change the title, content, or category of a prompt
    Edit(EditArgs),

    /// Delete a prompt
    Delete {
        id: String,
    },

    /// List the variables referenced by a prompt or an inline template
    Vars(VarsArgs),

    /// Fill in a prompt's variables and print the final text
    Render(RenderArgs),

    /// Write the whole library as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Merge prompts from a JSON export file
    Import {
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive text to look for in titles and content
    #[arg(long, short)]
    pub search: Option<String>,

    #[arg(long, short)]
    pub category: Option<Category>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Prompts per page (defaults to library.page_size from config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, short, default_value_t = Category::Other)]
    pub category: Category,

    /// Template text
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub content: Option<String>,

    /// Read the template text from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub content: Option<String>,

    #[arg(long, short)]
    pub category: Option<Category>,
}

#[derive(Debug, Args)]
pub struct VarsArgs {
    /// Prompt ID
    #[arg(required_unless_present = "template", conflicts_with = "template")]
    pub id: Option<String>,

    /// Inline template text instead of a stored prompt
    #[arg(long)]
    pub template: Option<String>,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    pub id: String,

    /// Variable value as name=value (repeatable)
    #[arg(long = "var", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Never prompt; unset variables render as empty
    #[arg(long)]
    pub batch: bool,
}

fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) =
        s.split_once('=').ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("variable name is empty in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("failed to install error reporter: {e}");
    }

    let cli = Cli::parse();
    let name = cli.command.name();
    let cfg = cmd::load_config(cli.config.as_deref(), cli.profile.as_deref(), name);
    logging::init(&cfg);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&cfg, cli.config.as_deref()),
        Commands::List(args) => cmd::list::run(&cfg, args),
        Commands::Show { id } => cmd::show::run(&cfg, &id),
        Commands::Add(args) => cmd::add::run(&cfg, args),
        Commands::Edit(args) => cmd::edit::run(&cfg, args),
        Commands::Delete { id } => cmd::delete::run(&cfg, &id),
        Commands::Vars(args) => cmd::vars::run(&cfg, args),
        Commands::Render(args) => cmd::render::run(&cfg, args),
        Commands::Export { output } => cmd::transfer::export(&cfg, output.as_deref()),
        Commands::Import { file } => cmd::transfer::import(&cfg, &file),
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Doctor => "doctor",
            Commands::List(_) => "list",
            Commands::Show { .. } => "show",
            Commands::Add(_) => "add",
            Commands::Edit(_) => "edit",
            Commands::Delete { .. } => "delete",
            Commands::Vars(_) => "vars",
            Commands::Render(_) => "render",
            Commands::Export { .. } => "export",
            Commands::Import { .. } => "import",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var() {
        assert_eq!(parse_var("name=John"), Ok(("name".into(), "John".into())));
        assert_eq!(parse_var(" first name =a=b"), Ok(("first name".into(), "a=b".into())));
        assert_eq!(parse_var("empty="), Ok(("empty".into(), String::new())));
        assert!(parse_var("novalue").is_err());
        assert!(parse_var("=x").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
