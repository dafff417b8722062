pub mod color;
pub mod day_record;
pub mod hours;
