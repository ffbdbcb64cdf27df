//! Trigger channel between the roll logic and the confetti animation.
//!
//! The original app wired these through an rxjs `Subject<string[]>`; here a
//! cloneable service handle pushes triggers onto an unbounded tokio channel
//! and the UI loop drains the receiver once per frame.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::error::{D20Error, D20Result};
use crate::sprites::SpriteId;

/// One animation request: which sprites the batch should be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfettiTrigger {
    pub sprites: Vec<SpriteId>,
}

/// Cloneable sending half of the trigger channel.
#[derive(Clone)]
pub struct ConfettiService {
    tx: UnboundedSender<ConfettiTrigger>,
}

impl ConfettiService {
    /// Create the service and the receiver the UI loop should drain.
    pub fn channel() -> (Self, UnboundedReceiver<ConfettiTrigger>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Request a confetti batch for the given sprites.
    pub fn trigger(&self, sprites: Vec<SpriteId>) -> D20Result<()> {
        tracing::debug!(?sprites, "confetti trigger");
        self.tx
            .send(ConfettiTrigger { sprites })
            .map_err(|_| D20Error::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_receiver() {
        let (service, mut rx) = ConfettiService::channel();
        service.trigger(vec![SpriteId::Confetti]).unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.sprites, vec![SpriteId::Confetti]);
    }

    #[tokio::test]
    async fn test_clones_share_channel() {
        let (service, mut rx) = ConfettiService::channel();
        let clone = service.clone();
        clone.trigger(vec![SpriteId::CryingEmoji]).unwrap();
        assert!(rx.try_recv().is_ok());
    }

    #[tokio::test]
    async fn test_dropped_receiver_reports_closed_channel() {
        let (service, rx) = ConfettiService::channel();
        drop(rx);
        let err = service.trigger(vec![SpriteId::Confetti]).unwrap_err();
        assert!(matches!(err, D20Error::ChannelClosed));
    }
}
