mod uuid;
pub use uuid::*;

mod input_value;
pub use input_value::*;

mod calendar_date;
pub use calendar_date::*;

mod timestamp;
pub use timestamp::*;
