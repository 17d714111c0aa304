pub mod app;
pub mod counter;
pub mod environment;
pub mod events;
pub mod focus;
pub mod footer;
pub mod header;
pub mod input;
pub mod input_field;
pub mod layout;
pub mod memo;
pub mod mvi;
pub mod panel;
pub mod render;
pub mod resize;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod viewport;
