pub mod button;
pub mod catalog;
pub mod class;
pub mod error;
pub mod icons;
pub mod stories;

pub use button::{Button, Size, Variant};
pub use error::ParseError;

pub mod prelude {
    pub use crate::button::{
        Button, Custom, MARKER_ATTR, MARKER_VALUE, Native, RenderTarget, Size, SlotProps, Variant,
        button_variants,
    };
    pub use crate::catalog::{ButtonArgs, Meta};
    pub use crate::icons::Icon;
    pub use crate::stories::Story;

    pub use htmldom::{Element, Event, Role};
}
