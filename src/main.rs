use anyhow::Result;
use clap::Parser;
use snake_apple::game::GameConfig;
use snake_apple::modes::HumanMode;

#[derive(Parser)]
#[command(name = "snake_apple")]
#[command(version, about = "Snake and apple arcade game in the terminal")]
struct Cli {
    /// Grid width in tiles
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in tiles
    #[arg(long, default_value = "16")]
    height: usize,

    /// Tick period in milliseconds
    #[arg(long, default_value = "100")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::new(cli.width, cli.height).with_tick_ms(cli.tick_ms);

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
