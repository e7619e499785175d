use std::future::Future;
use std::time::Duration;

use log::{debug, info};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Stops the poller on `stop` or when dropped.
pub struct PollerHandle {
    shutdown_tx: oneshot::Sender<()>,
}

impl PollerHandle {
    pub fn stop(self) {
        info!("Stopping stats poller");
        let _ = self.shutdown_tx.send(());
    }
}

/// Runs `tick` every `period`, first firing one period from now.
pub fn spawn_poller<F, Fut>(runtime: &Handle, period: Duration, mut tick: F) -> PollerHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

    runtime.spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    debug!("Stats poller tick");
                    tick().await;
                }
                _ = &mut shutdown_rx => {
                    info!("Stats poller stopped");
                    break;
                }
            }
        }
    });

    info!("Stats poller started ({:?} period)", period);
    PollerHandle { shutdown_tx }
}
