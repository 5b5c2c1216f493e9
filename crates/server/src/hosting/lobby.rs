use super::*;
use flippy_auth::Member;
use flippy_core::ID;
use flippy_engine::Difficulty;
use flippy_engine::Engine;
use flippy_gameroom::*;
use flippy_records::ScoreStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry of live tables.
pub struct Lobby {
    store: Arc<dyn ScoreStore>,
    config: TimerConfig,
    tables: RwLock<HashMap<ID<Table>, TableHandle>>,
}

impl Lobby {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self::with_config(store, TimerConfig::default())
    }
    pub fn with_config(store: Arc<dyn ScoreStore>, config: TimerConfig) -> Self {
        Self {
            store,
            config,
            tables: RwLock::new(HashMap::new()),
        }
    }
    pub async fn len(&self) -> usize {
        self.tables.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.is_empty()
    }
}

impl Lobby {
    /// Deals a new game and spawns its table.
    /// The table is forgotten once its task ends.
    pub async fn start(
        self: &Arc<Self>,
        difficulty: Difficulty,
        owner: Option<ID<Member>>,
    ) -> ID<Table> {
        let id = ID::default();
        let engine = Engine::new(difficulty);
        let (table, seat) = Table::new(id, engine, owner, self.store.clone(), self.config);
        self.tables.write().await.insert(id, TableHandle::from(seat));
        let lobby = self.clone();
        tokio::spawn(async move {
            table.run().await;
            lobby.tables.write().await.remove(&id);
            log::info!("[lobby] table {} cleaned up", id);
        });
        log::debug!("[lobby] opened table {} ({})", id, difficulty);
        id
    }
    /// Tells a table to stop and removes it.
    pub async fn close(&self, id: ID<Table>) -> anyhow::Result<()> {
        self.tables
            .write()
            .await
            .remove(&id)
            .map(|handle| {
                let _ = handle.tx.send(Command::Leave);
            })
            .ok_or_else(|| anyhow::anyhow!("table not found"))
    }
    pub async fn channels(&self, id: ID<Table>) -> anyhow::Result<(Tx, Rx)> {
        self.tables
            .read()
            .await
            .get(&id)
            .map(|h| (h.tx.clone(), h.rx.clone()))
            .ok_or_else(|| anyhow::anyhow!("table not found"))
    }
    /// Spawns the WebSocket bridge between a client and a table.
    /// Client text is decoded into commands; table events go out as JSON.
    pub async fn bridge(
        &self,
        id: ID<Table>,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let (tx, rx) = self.channels(id).await?;
        session
            .text(ServerMessage::connected(&id.to_string()).to_json())
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;
        log::debug!("[bridge {}] connected", id);
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    event = async { rx.lock().await.recv().await } => match event {
                        Some(ref event) => if session.text(Protocol::encode(event).to_json()).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => match Protocol::decode(&text) {
                            Ok(command) => if tx.send(command).is_err() { break 'sesh },
                            Err(e) => if session.text(ServerMessage::rejected(&e.to_string()).to_json()).await.is_err() { break 'sesh },
                        },
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            let _ = tx.send(Command::Leave);
            let _ = session.close(None).await;
            log::debug!("[bridge {}] disconnected", id);
        });
        Ok(())
    }
}
