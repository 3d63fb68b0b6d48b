use anyhow::Result;
use clap::Parser;

use arcade_snake::app::App;
use arcade_snake::game::GameConfig;

#[derive(Parser)]
#[command(name = "arcade_snake")]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Playfield width in pixels
    #[arg(long, default_value = "800")]
    width: i32,

    /// Playfield height in pixels
    #[arg(long, default_value = "600")]
    height: i32,

    /// Milliseconds between grid steps
    #[arg(long, default_value = "120")]
    move_interval: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.width, cli.height);
    config.move_interval_ms = cli.move_interval;

    anyhow::ensure!(
        cli.width >= config.cell_size && cli.height >= config.cell_size,
        "playfield must be at least {cell}x{cell} pixels",
        cell = config.cell_size
    );
    anyhow::ensure!(cli.move_interval > 0, "move interval must be positive");

    let mut app = App::new(config);
    app.run().await
}
