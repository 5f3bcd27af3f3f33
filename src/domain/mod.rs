pub mod interrupt;
pub mod playlist;
pub mod schedule;
pub mod track;
