//! UI Components

mod new_item_form;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use todo_row::TodoRow;
