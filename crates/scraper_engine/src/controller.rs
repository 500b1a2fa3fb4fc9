use std::future::Future;
use std::sync::Arc;

use scraper_core::{update, AppState, AppViewModel, ClientError, Effect, Msg, NotificationId};
use scraper_logging::{scraper_debug, scraper_error, scraper_info};
use tokio::sync::mpsc;

use crate::scrape::ScrapeService;
use crate::store::RecordStore;

/// Owns the application state and executes the effects `update` asks for.
///
/// State is only ever touched inside [`Controller::dispatch`]. Effects run as
/// tokio tasks that hold client handles and request data, never the state;
/// each one reports back with exactly one [`Msg`] that is applied by
/// [`Controller::next`].
pub struct Controller {
    state: AppState,
    store: Arc<dyn RecordStore>,
    scraper: Arc<dyn ScrapeService>,
    cookies_file: Option<String>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    in_flight: usize,
}

impl Controller {
    pub fn new(store: Arc<dyn RecordStore>, scraper: Arc<dyn ScrapeService>) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            store,
            scraper,
            cookies_file: None,
            msg_tx,
            msg_rx,
            in_flight: 0,
        }
    }

    /// Cookie jar path forwarded with every scrape request.
    pub fn with_cookies_file(mut self, cookies_file: Option<String>) -> Self {
        self.cookies_file = cookies_file;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Whether anything changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    /// Number of effects still waiting for their answer.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn mount(&mut self, api_key: Option<String>) {
        self.dispatch(Msg::Mounted { api_key });
    }

    pub fn set_channel_url(&mut self, url: impl Into<String>) {
        self.dispatch(Msg::ChannelUrlChanged(url.into()));
    }

    pub fn submit(&mut self) {
        self.dispatch(Msg::SubmitClicked);
    }

    pub fn select_channel(&mut self, channel_id: impl Into<String>) {
        self.dispatch(Msg::ChannelSelected(channel_id.into()));
    }

    pub fn refresh_channels(&mut self) {
        self.dispatch(Msg::RefreshChannelsClicked);
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.dispatch(Msg::NotificationDismissed(id));
    }

    /// Applies `msg` synchronously and spawns whatever effects it produced.
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.spawn_effect(effect);
        }
    }

    /// Waits for one effect to report back and applies its answer.
    ///
    /// Returns `false` without waiting when nothing is in flight.
    pub async fn next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.in_flight -= 1;
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Applies answers until no effect is left in flight, including effects
    /// spawned by those answers.
    pub async fn settle(&mut self) {
        while self.next().await {}
    }

    /// Advisory liveness check of the scraping service; does not touch state.
    pub async fn health_check(&self) -> Result<serde_json::Value, ClientError> {
        self.scraper.health_check().await
    }

    fn spawn_effect(&mut self, effect: Effect) {
        scraper_debug!("Spawning effect {:?}", effect);
        self.in_flight += 1;
        let tx = self.msg_tx.clone();
        match effect {
            Effect::LoadChannels => {
                let store = Arc::clone(&self.store);
                run_effect(
                    tx,
                    async move { store.list_channels().await },
                    ClientError::Store,
                    Msg::ChannelsLoaded,
                );
            }
            Effect::LoadTranscripts {
                request_id,
                channel_id,
            } => {
                let store = Arc::clone(&self.store);
                let requested = channel_id.clone();
                run_effect(
                    tx,
                    async move { store.list_transcripts(&requested).await },
                    ClientError::Store,
                    move |result| Msg::TranscriptsLoaded {
                        request_id,
                        channel_id,
                        result,
                    },
                );
            }
            Effect::SubmitScrape(request) => {
                let request = if request.cookies_file.is_none() {
                    request.with_cookies_file(self.cookies_file.clone())
                } else {
                    request
                };
                scraper_info!("Scrape started for {}", request.channel_url);
                let scraper = Arc::clone(&self.scraper);
                run_effect(
                    tx,
                    async move { scraper.submit(&request).await },
                    ClientError::RemoteService,
                    Msg::ScrapeFinished,
                );
            }
        }
    }
}

/// Runs `work` on its own task and always answers with exactly one message,
/// even when the task panics or is cancelled.
fn run_effect<T, W, L, M>(tx: mpsc::UnboundedSender<Msg>, work: W, lost: L, into_msg: M)
where
    T: Send + 'static,
    W: Future<Output = Result<T, ClientError>> + Send + 'static,
    L: FnOnce(String) -> ClientError + Send + 'static,
    M: FnOnce(Result<T, ClientError>) -> Msg + Send + 'static,
{
    let task = tokio::spawn(work);
    tokio::spawn(async move {
        let result = match task.await {
            Ok(result) => result,
            Err(err) => {
                scraper_error!("Effect task ended abnormally: {}", err);
                Err(lost("internal error while contacting the service".to_string()))
            }
        };
        let _ = tx.send(into_msg(result));
    });
}
