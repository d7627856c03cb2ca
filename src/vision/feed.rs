//! Vision feed: TCP listener bridging the external vision process to the
//! sync game loop.
//!
//! The async side runs on a Tokio runtime owned by the feed; the game loop
//! drains frames non-blockingly once per tick. One sender at a time - the
//! listener accepts the next connection after the current one closes.

use std::net::SocketAddr;
use std::time::Instant;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::vision::protocol::FrameMessage;

/// Vision feed configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionConfig {
    pub host: String,
    pub port: u16,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
        }
    }
}

impl VisionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("GESTRIS_VISION_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("GESTRIS_VISION_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7878);

        Self { host, port }
    }

    /// Check if the feed is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("GESTRIS_VISION_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// A frame as delivered to the game loop: the normalized point (if a hand
/// was detected) stamped with the receipt instant. The driver converts the
/// instant into its own monotonic timeline before calling the translator.
#[derive(Debug, Clone, Copy)]
pub struct InboundFrame {
    pub point: Option<(f32, f32)>,
    pub at: Instant,
}

/// Running vision feed.
pub struct VisionFeed {
    _rt: tokio::runtime::Runtime,
    rx: mpsc::UnboundedReceiver<InboundFrame>,
    local_addr: SocketAddr,
}

impl VisionFeed {
    /// Start the feed from environment variables.
    ///
    /// Returns None if `GESTRIS_VISION_DISABLED` is set.
    pub fn start_from_env() -> Result<Option<Self>> {
        if VisionConfig::is_disabled() {
            info!("vision feed disabled by environment");
            return Ok(None);
        }
        Ok(Some(Self::start(VisionConfig::from_env())?))
    }

    /// Start the listener on a background runtime.
    ///
    /// Binding happens before this returns, so a taken port fails fast;
    /// port 0 picks a free one (see `local_addr`).
    pub fn start(config: VisionConfig) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel::<InboundFrame>();

        let rt = tokio::runtime::Runtime::new()?;
        let listener = rt.block_on(TcpListener::bind(config.addr()))?;
        let local_addr = listener.local_addr()?;
        info!("vision feed listening on {}", local_addr);

        rt.spawn(async move {
            if let Err(e) = run_listener(listener, tx).await {
                warn!("vision listener stopped: {:#}", e);
            }
        });

        Ok(Self {
            _rt: rt,
            rx,
            local_addr,
        })
    }

    /// Address the listener actually bound.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Most recent frame received since the last poll, if any.
    ///
    /// Drains the queue so a slow tick never replays stale samples.
    pub fn try_latest(&mut self) -> Option<InboundFrame> {
        let mut latest = None;
        while let Ok(frame) = self.rx.try_recv() {
            latest = Some(frame);
        }
        latest
    }
}

async fn run_listener(
    listener: TcpListener,
    tx: mpsc::UnboundedSender<InboundFrame>,
) -> Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        info!("vision sender connected: {}", peer);
        handle_sender(stream, &tx).await;
        info!("vision sender disconnected: {}", peer);
    }
}

async fn handle_sender(stream: TcpStream, tx: &mpsc::UnboundedSender<InboundFrame>) {
    let mut lines = BufReader::new(stream).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<FrameMessage>(line) {
                    Ok(msg) => {
                        debug!("frame: {:?}", msg);
                        let frame = InboundFrame {
                            point: msg.point(),
                            at: Instant::now(),
                        };
                        if tx.send(frame).is_err() {
                            // Game loop is gone; drop the connection.
                            return;
                        }
                    }
                    Err(e) => warn!("vision: dropping malformed frame: {}", e),
                }
            }
            Ok(None) => return,
            Err(e) => {
                warn!("vision: read error: {}", e);
                return;
            }
        }
    }
}
