use super::*;
use flippy_auth::Member;
use flippy_core::*;
use flippy_engine::*;
use flippy_records::Score;
use flippy_records::ScoreStore;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Live memory game session.
///
/// Imperative shell around [`Engine`]: the engine decides, the table owns
/// time (reveal timers, the game clock) and persistence. Every timer sends
/// a [`Command`] back into the table's own inbox, so all state changes run
/// on this one task.
pub struct Table {
    id: ID<Self>,
    engine: Engine,
    owner: Option<ID<Member>>,
    store: Arc<dyn ScoreStore>,
    config: TimerConfig,
    ticker: Ticker,
    inbox: UnboundedReceiver<Command>,
    loopback: UnboundedSender<Command>,
    outbox: UnboundedSender<Event>,
}

/// Channel ends for talking to a running table.
pub struct Seat {
    pub commands: UnboundedSender<Command>,
    pub events: UnboundedReceiver<Event>,
}

impl Table {
    pub fn new(
        id: ID<Self>,
        engine: Engine,
        owner: Option<ID<Member>>,
        store: Arc<dyn ScoreStore>,
        config: TimerConfig,
    ) -> (Self, Seat) {
        let (commands, inbox) = unbounded_channel();
        let (outbox, events) = unbounded_channel();
        let table = Self {
            id,
            engine: engine.with_delay(config.reveal),
            owner,
            store,
            config,
            ticker: Ticker::default(),
            inbox,
            loopback: commands.clone(),
            outbox,
        };
        (table, Seat { commands, events })
    }
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }
}

impl Table {
    /// Runs until the player leaves or every command sender is gone.
    pub async fn run(mut self) {
        log::debug!("[table {}] open ({})", self.id, self.engine.difficulty());
        self.publish();
        while let Some(command) = self.inbox.recv().await {
            if !command.is_internal() {
                log::trace!("[table {}] {:?}", self.id, command);
            }
            match command {
                Command::Click(card) => self.click(card),
                Command::Resolve(ticket) => self.resolve(ticket),
                Command::Tick(epoch) => self.tick(epoch),
                Command::NewGame(difficulty) => self.deal(difficulty),
                Command::Leave => break,
            }
            if self.outbox.is_closed() {
                log::debug!("[table {}] nobody listening", self.id);
                break;
            }
        }
        self.ticker.stop();
        log::debug!("[table {}] closed", self.id);
    }
    fn click(&mut self, card: Cell) {
        match self.engine.click(card) {
            Err(e) => self.emit(Event::Rejected(e.to_string())),
            Ok(Click::Ignored) => {}
            Ok(Click::Flipped(_)) => {
                if self.engine.tally().moves() == 1 {
                    self.clock();
                }
                self.publish();
            }
            Ok(Click::Scheduled(ticket)) => {
                self.publish();
                self.schedule(ticket);
            }
        }
    }
    fn resolve(&mut self, ticket: Ticket) {
        match self.engine.resolve(ticket) {
            Err(e) => log::debug!("[table {}] dropped resolution: {}", self.id, e),
            Ok(resolution) => {
                self.publish();
                if let Some(completion) = resolution.completion {
                    log::info!("[table {}] {}", self.id, completion);
                    self.emit(Event::Complete(completion));
                    self.persist(completion);
                }
            }
        }
    }
    fn tick(&mut self, epoch: Epoch) {
        match self.engine.tick(epoch) {
            Err(e) => log::debug!("[table {}] dropped tick: {}", self.id, e),
            Ok(true) => self.publish(),
            Ok(false) => {}
        }
    }
    fn deal(&mut self, difficulty: Option<Difficulty>) {
        let difficulty = difficulty.unwrap_or(self.engine.difficulty());
        self.engine.new_game(difficulty);
        self.ticker.stop();
        self.publish();
    }
}

impl Table {
    fn emit(&self, event: Event) {
        let _ = self.outbox.send(event);
    }
    fn publish(&self) {
        self.emit(Event::Snapshot(self.engine.snapshot()));
    }
    /// Starts the game clock for the current epoch, one period after the first move.
    fn clock(&mut self) {
        let epoch = self.engine.epoch();
        let tx = self.loopback.clone();
        self.ticker
            .start(self.config.tick, tx, move || Command::Tick(epoch));
    }
    fn schedule(&self, ticket: Ticket) {
        let tx = self.loopback.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ticket.delay()).await;
            let _ = tx.send(Command::Resolve(ticket));
        });
    }
    /// Stores the result off the table task; failures become notices.
    fn persist(&self, completion: Completion) {
        let Some(user) = self.owner else {
            self.emit(Event::Notice(String::from("sign in to save your score")));
            return;
        };
        let id = self.id;
        let store = self.store.clone();
        let outbox = self.outbox.clone();
        let score = Score::new(user, completion.difficulty, completion.moves, completion.elapsed);
        tokio::spawn(async move {
            match store.save(&score).await {
                Ok(()) => {
                    let _ = outbox.send(Event::Saved(score.score()));
                }
                Err(e) => {
                    log::warn!("[table {}] score not saved: {}", id, e);
                    let _ = outbox.send(Event::Notice(format!("score not saved: {}", e)));
                }
            }
        });
    }
}

impl Unique for Table {
    fn id(&self) -> ID<Self> {
        self.id
    }
}
