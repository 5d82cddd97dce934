//! UI components for the assistant widget.

pub mod chat_widget;
