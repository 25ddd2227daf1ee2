//! Search engine implementations.

// Built-in engines
mod bing;
mod brave;
mod duckduckgo;
mod google;
mod yandex;

// Configured engines
mod custom;

pub use bing::Bing;
pub use brave::Brave;
pub use duckduckgo::DuckDuckGo;
pub use google::Google;
pub use yandex::Yandex;

pub use custom::CustomEngine;
