use nvs_explorer::{cli, Result};

#[tokio::main]
async fn main() -> Result {
    use clap::Parser;
    let cli = cli::Cli::parse();
    cli.init_tracing();
    cli.run(&mut std::io::stdout()).await
}
