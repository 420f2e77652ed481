pub mod isolation;

pub use isolation::{Board, BoardError, Move, Player};
