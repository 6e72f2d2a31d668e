pub mod config;
pub mod slot;

mod memory;
pub use memory::MemorySlot;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserSessionSlot;

pub use config::AppConfig;
pub use slot::{SessionSlot, ACCESS_TOKEN_KEY, USER_KEY};
