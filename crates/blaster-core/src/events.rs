//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

/// Fire-and-forget sound requests, drained into each frame snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Ship fired a cabbage.
    PlayerShoot,
    /// Any torpedo launch, friendly or not.
    Torpedo,
    /// Alien fired a turnip.
    AlienShoot,
    /// An alien was hit and survived.
    Blast,
    /// An alien was destroyed.
    Death,
    /// A goodie was collected.
    Goodie,
    FinishedLevel,
}
