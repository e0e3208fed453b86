pub mod business;
pub mod event;
pub mod photo;

pub use business::{
    Business, BusinessRow, Category, Coordinates, NewBusiness, PredefinedCategory,
    ValidationError, OTHER_CATEGORY_VALUE,
};
pub use event::{Event, EventRow, NewEvent};
pub use photo::Photo;
