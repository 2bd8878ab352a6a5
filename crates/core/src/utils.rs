//! Utils

use clap::Parser;

/// Arguments for the order examples
#[derive(Debug, Parser)]
pub struct ExampleOrderArgs {
    /// Number of cart lines to include (defaults to one per drink on the menu)
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Menu fixture to load
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Loyalty balance held before the order
    #[clap(short, long, default_value_t = 0)]
    pub balance: u64,
}
