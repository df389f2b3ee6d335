//! Effects the core can ask the shell for.
//!
//! The workspace has no I/O of its own, so the only capability is Crux's
//! built-in Render, used to tell the shell the view model changed.
//!
//! The effect plumbing is written out rather than derived: the published
//! `crux_macros` 0.3.10 emits `WithContext<Event, _>`, while crux_core 0.7.6
//! expects `WithContext<App, _>`.
pub use crux_core::render::{Render, RenderOperation};

use crux_core::bridge::ResolveSerialized;
use crux_core::capability::ProtoContext;
use crux_core::{Request, WithContext};
use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::event::Event;

pub struct Capabilities {
    pub render: Render<Event>,
}

#[derive(Debug)]
pub enum Effect {
    Render(Request<RenderOperation>),
}

/// Serializable mirror of [`Effect`] handed across the bridge.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename = "Effect")]
pub enum EffectFfi {
    Render(RenderOperation),
}

impl crux_core::Effect for Effect {
    type Ffi = EffectFfi;

    fn serialize(self) -> (Self::Ffi, ResolveSerialized) {
        match self {
            Self::Render(request) => request.serialize(EffectFfi::Render),
        }
    }
}

impl WithContext<App, Effect> for Capabilities {
    fn new_with_context(context: ProtoContext<Effect, Event>) -> Capabilities {
        Capabilities {
            render: Render::new(context.specialize(Effect::Render)),
        }
    }
}
