pub mod battery;
pub mod chart;
pub mod entity;
pub mod history;
pub mod sensor;
