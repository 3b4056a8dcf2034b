mod json;
mod terminal;

pub use json::JsonWriter;
pub use terminal::TerminalWriter;
