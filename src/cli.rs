use clap::Parser;

/// Plays Ultimate Tic-Tac-Toe against a remote game server
#[derive(Parser, Debug)]
#[command(name = "uttt_bot")]
#[command(version)]
pub struct Cli {
    /// Player name
    #[arg(short, long)]
    pub player: String,

    /// Game id to join. A new game is created when omitted
    #[arg(short, long)]
    pub game: Option<String>,

    /// Pair with a robot player
    #[arg(short, long)]
    pub auto: bool,

    /// Game server host, overrides TICTACTOE_SERVER_HOSTNAME
    #[arg(long)]
    pub host: Option<String>,

    /// Game server port, overrides TICTACTOE_SERVER_PORT
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from(["uttt_bot", "-p", "bot", "-g", "12", "-a"]);
        assert_eq!(cli.player, "bot");
        assert_eq!(cli.game.as_deref(), Some("12"));
        assert!(cli.auto);
        assert_eq!(cli.host, None);
    }

    #[test]
    fn player_is_required() {
        assert!(Cli::try_parse_from(["uttt_bot", "--auto"]).is_err());
    }
}
