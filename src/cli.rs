use clap::Parser;
/// A JWT decoder for your terminal.
/// Decodes the header and payload of a JWT and annotates the standard
/// time claims (iat, nbf, exp) with human-friendly dates.
#[derive(Parser, Debug)]
#[command(name = "jut", author, version, about, long_about = None)]
pub struct JutArgs {
    /// The JWT token to decode.
    /// If not provided, it will be read from stdin when piped,
    /// otherwise from the system clipboard.
    #[clap(name = "TOKEN")]
    pub token: Option<String>,

    /// Output raw JSON (no colors, for piping)
    #[clap(long = "json", short = 'j')]
    pub json: bool,

    /// No color output
    #[clap(long = "no-color", short = 'n')]
    pub no_color: bool,
}
