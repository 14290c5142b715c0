mod cli;

use clap::Parser;
use cli::Cli;
use env_logger::Env;
use log::{error, info};
use uttt_bot::{
    GameId, HttpTransport, HttpTransportArgs, PlayArgs, TransportFactory, TurnLoop,
};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut args = HttpTransportArgs::from_env();
    if let Some(host) = cli.host {
        args.server_hostname = host;
    }
    if let Some(port) = cli.port {
        args.server_port = port;
    }
    info!("Using game server {}", args.base_url());

    let transport = match TransportFactory::create::<HttpTransport>(args) {
        Ok(transport) => transport,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let play_args = PlayArgs {
        player_name: cli.player,
        game_id: cli.game.map(GameId),
        pair_with_robot: cli.auto,
    };

    let result = match TurnLoop::start(transport, play_args).await {
        Ok(mut turn_loop) => turn_loop.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(summary) => println!("{}", summary),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
