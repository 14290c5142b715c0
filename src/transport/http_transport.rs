use std::fmt::Display;

use log::{debug, warn};
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{GameData, GameId, Move, Transport};

#[derive(Clone, Debug)]
pub struct HttpTransportArgs {
    pub server_hostname: String,
    pub server_port: u16,
}

impl Default for HttpTransportArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransportArgs {
    const DEFAULT_SERVER_HOSTNAME: &'static str = "tictactoe.inseng.net";
    const DEFAULT_SERVER_PORT: u16 = 80;

    pub fn new() -> Self {
        Self {
            server_hostname: HttpTransportArgs::DEFAULT_SERVER_HOSTNAME.to_string(),
            server_port: HttpTransportArgs::DEFAULT_SERVER_PORT,
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        let server_hostname = std::env::var("TICTACTOE_SERVER_HOSTNAME")
            .unwrap_or(HttpTransportArgs::DEFAULT_SERVER_HOSTNAME.to_string());
        let server_port = match std::env::var("TICTACTOE_SERVER_PORT") {
            Ok(port) => port.parse::<u16>().unwrap_or_else(|_| {
                warn!(
                    "Invalid TICTACTOE_SERVER_PORT {:?}, using {}",
                    port,
                    HttpTransportArgs::DEFAULT_SERVER_PORT
                );
                HttpTransportArgs::DEFAULT_SERVER_PORT
            }),
            Err(_) => HttpTransportArgs::DEFAULT_SERVER_PORT,
        };

        Self {
            server_hostname,
            server_port,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.server_hostname, self.server_port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Connection { message: String },
    Server { status: u16, message: String },
    Rejected { message: String },
    Deserialize { message: String },
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Connection { message } => {
                write!(f, "could not reach the game server: {}", message)
            }
            ErrorKind::Server { status, message } => {
                write!(f, "the game server answered {}: {}", status, message)
            }
            ErrorKind::Rejected { message } => write!(f, "the move was rejected: {}", message),
            ErrorKind::Deserialize { message } => {
                write!(f, "could not decode the server response: {}", message)
            }
        }
    }
}

impl std::error::Error for ErrorKind {}

enum Endpoint<'a> {
    Games,
    Players(&'a GameId),
    Moves(&'a GameId),
}

impl Endpoint<'_> {
    fn path(&self) -> String {
        match self {
            Endpoint::Games => "/games".to_string(),
            Endpoint::Players(game_id) => format!("/games/{}/players", game_id),
            Endpoint::Moves(game_id) => format!("/games/{}/moves", game_id),
        }
    }
}

#[derive(Deserialize)]
struct CreatedGame {
    id: GameId,
}

#[derive(Serialize)]
struct JoinRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pair: Option<u8>,
}

/// Talks to the game server over plain HTTP with JSON bodies.
pub struct HttpTransport {
    args: HttpTransportArgs,
    client: Client,
}

impl HttpTransport {
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&B>,
        secret: Option<&str>,
    ) -> Result<T, ErrorKind> {
        let url = format!("{}{}", self.args.base_url(), endpoint.path());
        debug!("POST {}", url);

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(secret) = secret {
            request = request.header("X-Token", secret);
        }

        let response = request.send().await.map_err(|e| ErrorKind::Connection {
            message: format!("{}", e),
        })?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ErrorKind::Connection {
            message: format!("{}", e),
        })?;
        debug!("{} {} -> {}", url, status, text);

        decode(&endpoint, status, &text)
    }
}

/// Turns a response into `T`. A non-success status or an `{"error": ...}`
/// body is a rejected move on the moves endpoint and a server error elsewhere.
fn decode<T: DeserializeOwned>(
    endpoint: &Endpoint<'_>,
    status: StatusCode,
    text: &str,
) -> Result<T, ErrorKind> {
    let value: Option<Value> = serde_json::from_str(text).ok();
    let reported_error = value
        .as_ref()
        .and_then(|value| value.get("error"))
        .filter(|error| !error.is_null())
        .map(|error| match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        });

    if !status.is_success() || reported_error.is_some() {
        let message = reported_error.unwrap_or_else(|| text.to_string());
        return match endpoint {
            Endpoint::Moves(_) if !status.is_server_error() => Err(ErrorKind::Rejected { message }),
            _ => Err(ErrorKind::Server {
                status: status.as_u16(),
                message,
            }),
        };
    }

    let value = value.ok_or_else(|| ErrorKind::Deserialize {
        message: format!("response is not JSON: {:?}", text),
    })?;
    serde_json::from_value(value).map_err(|e| ErrorKind::Deserialize {
        message: format!("{}", e),
    })
}

impl Transport for HttpTransport {
    type Args = HttpTransportArgs;
    type ErrorKind = ErrorKind;

    fn new(args: Self::Args) -> Result<Self, ErrorKind> {
        let client = Client::builder()
            .build()
            .map_err(|e| ErrorKind::Connection {
                message: format!("{}", e),
            })?;
        Ok(Self { args, client })
    }

    async fn create_game(&mut self) -> Result<GameId, ErrorKind> {
        let created: CreatedGame = self.post::<(), _>(Endpoint::Games, None, None).await?;
        debug!("Created game {}", created.id);
        Ok(created.id)
    }

    async fn join_game(
        &mut self,
        game_id: &GameId,
        player_name: &str,
        pair_with_robot: bool,
    ) -> Result<GameData, ErrorKind> {
        let body = JoinRequest {
            name: player_name,
            pair: pair_with_robot.then_some(1),
        };
        self.post(Endpoint::Players(game_id), Some(&body), None)
            .await
    }

    async fn submit_move(
        &mut self,
        game_id: &GameId,
        secret: &str,
        new_move: Move,
    ) -> Result<GameData, ErrorKind> {
        self.post(Endpoint::Moves(game_id), Some(&new_move), Some(secret))
            .await
    }
}
