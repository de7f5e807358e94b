pub mod a11y;
pub mod dispatch;
pub mod element;
pub mod event;
pub mod focus;
pub mod query;
pub mod render;
pub mod user;

pub use a11y::{accessible_name, is_hidden, role_of, Role};
pub use dispatch::{dispatch, Dispatch};
pub use element::{find_element, find_path, ClassList, Content, Element, Handler};
pub use event::{Event, Key, Modifiers};
pub use focus::{collect_focusable, is_focusable, FocusState};
pub use query::{get_all_by_role, get_by_role, get_by_text, query_by_role, QueryError};
pub use render::to_html;
pub use user::UserEvent;
