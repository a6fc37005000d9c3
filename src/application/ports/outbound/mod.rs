//! Outbound ports - Interfaces that the application requires from external systems

mod dice_port;
mod loader_port;
mod renderer_port;

pub use dice_port::DiceRollerPort;
pub use loader_port::{LoadError, RecordLoaderPort};
pub use renderer_port::{RenderError, TemplateRendererPort};
