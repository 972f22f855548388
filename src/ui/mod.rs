//! UI components

mod arg_dialog;
mod arg_list_widget;
mod arg_widgets;
mod color_button_widget;
mod group_widget;
mod widget_builder;

pub use arg_dialog::ArgDialog;
pub use arg_list_widget::ArgListWidget;
pub use arg_widgets::{GtkEditor, GtkEditorFactory};
pub use color_button_widget::ColorButtonWidget;
pub use group_widget::ArgGroupWidget;
