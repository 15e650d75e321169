mod error;
mod generate;
mod options;
mod schema;
mod types;

use std::fs;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::options::Options;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_tracing(options.verbose);

    let columns = schema::read_columns(&options.dsn(), &options.database, &options.table).await?;

    let struct_name = options
        .struct_name
        .clone()
        .unwrap_or_else(|| generate::format_field_name(&options.table));
    let body = generate::generate(&columns, &options.generator_config(struct_name.clone()));

    // The generator emits the open struct body; header and closing brace
    // belong to the caller.
    let mut output = String::new();
    if let Some(package) = &options.package {
        output.push_str(&format!("package {}\n\n", package));
    }
    output.push_str(&format!("type {} {}\n}}\n", struct_name, body));

    match &options.target {
        Some(path) => fs::write(path, output)?,
        None => print!("{}", output),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
