//! UI Components
//!
//! Leptos components rendering the todo widget.

mod todo_app;
mod new_todo_form;
mod todo_list_view;
mod todo_row;
mod todo_footer;

pub use todo_app::TodoApp;
pub use new_todo_form::NewTodoForm;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use todo_footer::TodoFooter;
