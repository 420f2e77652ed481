use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::GameState;

// Knight jumps in enumeration order. Tie-breaking in search depends on it.
const DIRECTIONS: [(isize, isize); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player { One, Two }

impl Player {
    pub fn other(self) -> Player {
        match self { Player::One => Player::Two, Player::Two => Player::One }
    }

    fn index(self) -> usize {
        match self { Player::One => 0, Player::Two => 1 }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Player::One => write!(f, "player 1"), Player::Two => write!(f, "player 2") }
    }
}

/// Destination cell of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },
    #[error("cell {0} is off the board")]
    OutOfBounds(Move),
    #[error("cell {0} is already blocked")]
    Blocked(Move),
}

/// Knight's-move Isolation. Every cell a player has stood on stays blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 { return Err(BoardError::EmptyBoard { width, height }); }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn move_count(&self) -> usize { self.move_count }
    pub fn location(&self, player: Player) -> Option<Move> { self.locations[player.index()] }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    pub fn is_blank(&self, mv: Move) -> bool {
        mv.row < self.height && mv.col < self.width && !self.blocked[self.idx(mv)]
    }

    pub fn blank_cells(&self) -> Vec<Move> {
        let mut out = Vec::with_capacity(self.blocked.len());
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row, col);
                if !self.blocked[self.idx(mv)] { out.push(mv); }
            }
        }
        out
    }

    /// Puts `player` on `mv` without passing the turn. Used to set up positions.
    pub fn place(&mut self, player: Player, mv: Move) -> Result<(), BoardError> {
        self.check_cell(mv)?;
        self.occupy(player, mv);
        Ok(())
    }

    /// Plays `mv` for the active player and passes the turn. Only checks that
    /// the cell is on the board and blank; knight legality is the caller's job.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        self.check_cell(mv)?;
        self.occupy(self.active, mv);
        self.active = self.active.other();
        Ok(())
    }

    /// Builder used by tests and setup code: place both players and pick who acts.
    pub fn with_positions(
        width: usize,
        height: usize,
        one: Move,
        two: Move,
        active: Player,
    ) -> Result<Self, BoardError> {
        let mut b = Self::new(width, height)?;
        b.place(Player::One, one)?;
        b.place(Player::Two, two)?;
        b.active = active;
        Ok(b)
    }

    fn check_cell(&self, mv: Move) -> Result<(), BoardError> {
        if mv.row >= self.height || mv.col >= self.width { return Err(BoardError::OutOfBounds(mv)); }
        if self.blocked[self.idx(mv)] { return Err(BoardError::Blocked(mv)); }
        Ok(())
    }

    fn occupy(&mut self, player: Player, mv: Move) {
        let i = self.idx(mv);
        self.blocked[i] = true;
        self.locations[player.index()] = Some(mv);
        self.move_count += 1;
    }

    fn idx(&self, mv: Move) -> usize { mv.row * self.width + mv.col }
}

impl GameState for Board {
    type Move = Move;
    type Player = Player;

    fn active_player(&self) -> Player { self.active }

    fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        let Some(from) = self.location(player) else { return self.blank_cells(); };
        let mut moves = Vec::with_capacity(DIRECTIONS.len());
        for (dr, dc) in DIRECTIONS {
            let r = from.row as isize + dr;
            let c = from.col as isize + dc;
            if !self.in_bounds(r, c) { continue; }
            let to = Move::new(r as usize, c as usize);
            if !self.blocked[self.idx(to)] { moves.push(to); }
        }
        moves
    }

    fn forecast(&self, mv: Move) -> Self {
        debug_assert!(self.is_blank(mv), "forecast onto blocked cell {mv}");
        let mut next = self.clone();
        next.occupy(self.active, mv);
        next.active = self.active.other();
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        self.active == player.other() && self.legal_moves_for(self.active).is_empty()
    }

    fn is_loser(&self, player: Player) -> bool {
        self.active == player && self.legal_moves_for(player).is_empty()
    }

    fn opponent_of(&self, player: Player) -> Player { player.other() }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = self.location(Player::One);
        let two = self.location(Player::Two);
        for row in 0..self.height {
            for col in 0..self.width {
                let mv = Move::new(row, col);
                let ch = if one == Some(mv) { '1' } else if two == Some(mv) { '2' } else if self.blocked[self.idx(mv)] { '#' } else { '.' };
                if col > 0 { write!(f, " ")?; }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
