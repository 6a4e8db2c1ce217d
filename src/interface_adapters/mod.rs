// Interface adapters: HTTP client, cookie sources and terminal I/O.

pub mod clients;
pub mod cookies;
pub mod protocol;
pub mod terminal;
