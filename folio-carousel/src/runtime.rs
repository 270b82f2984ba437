//! Tokio driver for a mounted carousel.
//!
//! One task owns the engine. It waits for either the next intent or the
//! engine's next deadline, applies it, and publishes a fresh snapshot whenever
//! the revision moves. Sending [`CarouselMessage::Unmount`] or dropping every
//! [`CarouselHandle`] unmounts the engine and ends the task, which drops the
//! pending sleep with it.

use std::time::Instant as StdInstant;

use folio_config::CarouselConfig;
use folio_model::{Catalog, ItemId};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::error::CarouselError;
use crate::keyboard::Key;
use crate::messages::CarouselMessage;
use crate::state::CarouselEngine;
use crate::types::Direction;
use crate::update::update;
use crate::view::CarouselView;

fn now() -> StdInstant {
    Instant::now().into_std()
}

async fn sleep_until(deadline: Option<StdInstant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(Instant::from_std(at)).await,
        None => std::future::pending::<()>().await,
    }
}

#[derive(Debug)]
pub struct CarouselRuntime;

impl CarouselRuntime {
    /// Mount an engine on the current tokio runtime.
    ///
    /// The join handle yields the unmounted engine once the driver stops.
    pub fn spawn(
        catalog: Catalog,
        config: CarouselConfig,
    ) -> (CarouselHandle, JoinHandle<CarouselEngine>) {
        let engine = CarouselEngine::mount(catalog, config, now());
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(engine.view());

        let task = tokio::spawn(drive(engine, intent_rx, view_tx));
        let handle = CarouselHandle {
            intents: intent_tx,
            views: view_rx,
        };
        (handle, task)
    }
}

async fn drive(
    mut engine: CarouselEngine,
    mut intents: mpsc::UnboundedReceiver<CarouselMessage>,
    views: watch::Sender<CarouselView>,
) -> CarouselEngine {
    loop {
        let subscription = engine.subscription();
        let before = engine.revision();

        tokio::select! {
            intent = intents.recv() => match intent {
                Some(CarouselMessage::Unmount) | None => {
                    engine.unmount();
                    views.send_replace(engine.view());
                    break;
                }
                Some(message) => {
                    update(&mut engine, message, now());
                }
            },
            _ = sleep_until(subscription.wake_at) => engine.tick(now()),
        }

        if engine.revision() != before {
            views.send_replace(engine.view());
        }
    }
    log::debug!("Carousel driver stopped");
    engine
}

/// Cloneable handle used by presenters to drive a spawned carousel.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    intents: mpsc::UnboundedSender<CarouselMessage>,
    views: watch::Receiver<CarouselView>,
}

impl CarouselHandle {
    pub fn send(&self, message: CarouselMessage) -> Result<(), CarouselError> {
        self.intents
            .send(message)
            .map_err(|_| CarouselError::Unmounted)
    }

    pub fn rotate(&self, direction: Direction) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Rotate(direction))
    }

    pub fn key(&self, key: Key) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Key(key))
    }

    pub fn toggle_auto_rotate(&self) -> Result<(), CarouselError> {
        self.send(CarouselMessage::ToggleAutoRotate)
    }

    pub fn select(&self, id: Option<ItemId>) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Select(id))
    }

    pub fn retry(&self) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Retry)
    }

    pub fn unmount(&self) -> Result<(), CarouselError> {
        self.send(CarouselMessage::Unmount)
    }

    /// Latest published snapshot.
    pub fn view(&self) -> CarouselView {
        self.views.borrow().clone()
    }

    /// Wait for the next snapshot. Fails once the driver has stopped.
    pub async fn changed(&mut self) -> Result<CarouselView, CarouselError> {
        self.views
            .changed()
            .await
            .map_err(|_| CarouselError::Unmounted)?;
        Ok(self.views.borrow_and_update().clone())
    }
}
