use clap::Parser;

/// Report output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

/// Display build dependencies for a package from a bitbake dependency graph
#[derive(Parser, Debug)]
#[command(name = "oe-depends")]
#[command(version)]
#[command(
    about = "Display build dependencies for a given package or recipe",
    long_about = "Display build dependencies for a given package or recipe.\n\
                  Uses the pn-depends.dot file for its raw data.\n\
                  Generate a pn-depends.dot file by running bitbake -g <recipe>.\n\n\
                  Run without a package name to list all known package names."
)]
pub struct Args {
    /// Package name or wildcard pattern (? = one character, * = any run);
    /// omit to list all known package names
    pub package: Option<String>,

    /// Show reverse dependencies, i.e. packages dependent on package
    #[arg(short, long)]
    pub reverse_deps: bool,

    /// Tree output instead of default flat output
    #[arg(short, long)]
    pub tree: bool,

    /// Maximum depth to follow dependencies, default is infinite
    #[arg(short, long, value_name = "DEPTH")]
    pub depth: Option<String>,

    /// Show child package dependencies that are already listed as direct
    /// parent dependencies
    #[arg(short, long)]
    pub show_parent_deps: bool,

    /// Path to the graph file (generate with bitbake -g <recipe>)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Emit loop-detection diagnostics during parse
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: text or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
