use clap::Parser;
use std::path::PathBuf;

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("ADDRBOOK_GIT_HASH");
    const COMMIT_DATE: &str = env!("ADDRBOOK_COMMIT_DATE");
    const IS_RELEASE: &str = env!("ADDRBOOK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version = get_version())]
#[command(about = "Command-driven personal address book", long_about = None)]
pub struct Cli {
    /// Address book file to use instead of the configured one (must end in .json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the effective configuration before running
    #[arg(long)]
    pub show_config: bool,

    /// Run a command and exit; repeat to run several against one session
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,
}
