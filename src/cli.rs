//! Command-line interface implementation.
//! Provides argument parsing and help text formatting using clap.

use crate::{project, template};
use clap::{error::ErrorKind, CommandFactory, Parser};

/// Command-line arguments structure for create-boardzilla-game.
#[derive(Parser, Debug)]
#[command(
    name = "create-boardzilla-game",
    version,
    about = "CLI to create a boardzilla game",
    long_about = None
)]
pub struct Args {
    /// Name of the game to create
    #[arg(value_name = "NAME", value_parser = parse_project_name)]
    pub name: String,

    /// Name of the template to use
    #[arg(
        short,
        long,
        value_name = "TEMPLATE",
        default_value = template::DEFAULT_SELECTOR,
        value_parser = parse_template_selector
    )]
    pub template: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_project_name(s: &str) -> Result<String, String> {
    if project::is_valid_name(s) {
        Ok(s.to_string())
    } else {
        Err("can only contain lowercase letters, digits, _ and -".to_string())
    }
}

fn parse_template_selector(s: &str) -> Result<String, String> {
    if template::registry().contains_key(s) {
        Ok(s.to_string())
    } else {
        Err(format!("must be one of {}", template::known_selectors().join(", ")))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
