//! CLI entry point for drawing trait combinations and compositing token images

use clap::Parser;
use traitmix::io::cli::{Cli, init_logging};

fn main() -> traitmix::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());
    cli.run()
}
