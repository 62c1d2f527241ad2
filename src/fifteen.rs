//! The standard 4x4 board packed into two 64-bit words.
//!
//! Terminology:
//! - a *slot* is a number between 0 and 15 denoting a position on the board,
//! - a *tile* is a number between 0 and 15, with 0 denoting the empty space.
//!
//! Each word holds sixteen 4-bit fields. `slot_to_tile` maps every slot to the
//! tile occupying it and `tile_to_slot` is its inverse. A slot splits into a
//! row (`slot >> 2`) and a column (`slot & 3`).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Board;
use crate::error::BoardError;

const SIZE: usize = 4;
const CELLS: usize = SIZE * SIZE;

/// The high bit of every 2-bit coordinate.
const HIGH: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// A direction the empty slot moves in, as seen in the textual layout where
/// the first group is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// Offset of the empty slot as (row, column) deltas in slot coordinates.
    /// The text lists slot 15 first, so going up means a higher row.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// The move turning `from` into `to`, if they are one move apart.
    pub fn between(from: &FifteenBoard, to: &FifteenBoard) -> Option<Move> {
        Move::ALL
            .into_iter()
            .find(|&m| from.apply(m).as_ref() == Some(to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable 4x4 board.
#[derive(Clone, Copy)]
pub struct FifteenBoard {
    slot_to_tile: u64,
    tile_to_slot: u64,
}

impl FifteenBoard {
    /// The usual goal, `1234_5678_9ABC_DEF0`.
    pub fn solved() -> Self {
        Self::new(0x1234_5678_9ABC_DEF0)
    }

    /// Create a board from `tiles[slot]`, the tile at every slot.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut word = 0u64;
        for (slot, &tile) in tiles.iter().enumerate() {
            if tile as usize >= CELLS {
                return Err(BoardError::Tile(tile.to_string()));
            }
            word |= (tile as u64) << (4 * slot);
        }
        Self::try_from(word)
    }

    /// A uniformly random permutation. Half of these cannot reach any given
    /// goal, which the solver copes with through the alternative goal.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles: Vec<u64> = (0..CELLS as u64).collect();
        tiles.shuffle(rng);
        let word = tiles
            .iter()
            .enumerate()
            .fold(0, |acc, (slot, &tile)| acc | tile << (4 * slot));
        Self::new(word)
    }

    /// A random walk of `moves` legal moves from `self`, never undoing the
    /// previous move.
    pub fn scrambled<R: Rng + ?Sized>(&self, rng: &mut R, moves: usize) -> Self {
        let mut board = *self;
        let mut last: Option<Move> = None;
        for _ in 0..moves {
            let candidates: Vec<(Move, FifteenBoard)> = Move::ALL
                .into_iter()
                .filter(|m| last.map_or(true, |l| *m != l.opposite()))
                .filter_map(|m| board.apply(m).map(|b| (m, b)))
                .collect();
            if let Some(&(m, next)) = candidates.choose(rng) {
                board = next;
                last = Some(m);
            }
        }
        board
    }

    /// Slide the empty slot in the given direction, if it stays on the board.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let empty = self.empty_slot();
        let (dr, dc) = movement.as_offset();
        let row = row_of(empty) as isize + dr;
        let col = col_of(empty) as isize + dc;
        if (0..SIZE as isize).contains(&row) && (0..SIZE as isize).contains(&col) {
            Some(self.swap(empty, to_slot(row as usize, col as usize)))
        } else {
            None
        }
    }

    pub fn tile_at(&self, slot: usize) -> u8 {
        debug_assert!(slot < CELLS);
        get(self.slot_to_tile, slot) as u8
    }

    pub fn slot_of(&self, tile: u8) -> usize {
        debug_assert!((tile as usize) < CELLS);
        get(self.tile_to_slot, tile as usize)
    }

    pub fn empty_slot(&self) -> usize {
        self.slot_of(0)
    }

    /// The slot-to-tile word, one hex digit per slot with slot 15 highest.
    pub fn to_u64(&self) -> u64 {
        self.slot_to_tile
    }

    fn new(slot_to_tile: u64) -> Self {
        debug_assert!(is_permutation(slot_to_tile));
        Self {
            slot_to_tile,
            tile_to_slot: dual(slot_to_tile),
        }
    }

    /// Swap the tiles at two slots, updating both words in lockstep.
    ///
    /// This is a legal move iff the slots are neighbors and one is empty.
    fn swap(&self, slot1: usize, slot2: usize) -> Self {
        let tile1 = get(self.slot_to_tile, slot1);
        let tile2 = get(self.slot_to_tile, slot2);
        let tile_xor = (tile1 ^ tile2) as u64;
        let slot_xor = (slot1 ^ slot2) as u64;
        let board = Self {
            slot_to_tile: self.slot_to_tile ^ (tile_xor << (4 * slot1)) ^ (tile_xor << (4 * slot2)),
            tile_to_slot: self.tile_to_slot ^ (slot_xor << (4 * tile1)) ^ (slot_xor << (4 * tile2)),
        };
        debug_assert_eq!(board.tile_to_slot, dual(board.slot_to_tile));
        board
    }
}

fn get(word: u64, index: usize) -> usize {
    ((word >> (4 * index)) & 0xF) as usize
}

fn row_of(slot: usize) -> usize {
    slot >> 2
}

fn col_of(slot: usize) -> usize {
    slot & 3
}

fn to_slot(row: usize, col: usize) -> usize {
    debug_assert!(row < SIZE && col < SIZE);
    SIZE * row + col
}

/// Invert the permutation stored in `word`.
fn dual(word: u64) -> u64 {
    (0..CELLS).fold(0, |acc, index| acc | (index as u64) << (4 * get(word, index)))
}

fn present_tiles(word: u64) -> u16 {
    (0..CELLS).fold(0, |acc, index| acc | 1 << get(word, index))
}

fn is_permutation(word: u64) -> bool {
    present_tiles(word) == 0xFFFF
}

impl TryFrom<u64> for FifteenBoard {
    type Error = BoardError;

    /// Interpret every hex digit as the tile at the corresponding slot.
    fn try_from(slot_to_tile: u64) -> Result<Self, Self::Error> {
        let present = present_tiles(slot_to_tile);
        if present != 0xFFFF {
            let missing = (0..CELLS as u8).filter(|t| present & (1 << t) == 0).collect();
            return Err(BoardError::NotPermutation { missing });
        }
        Ok(Self::new(slot_to_tile))
    }
}

impl FromStr for FifteenBoard {
    type Err = BoardError;

    /// Accepts sixteen space-separated decimals like
    /// `"11 15 12 0 14 10 2 13 7 6 9 8 3 5 4 1"` or four underscore-separated
    /// groups of hex digits like `"0123_4567_89AB_CDEF"`. Both list slot 15
    /// first.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let layout_error = || BoardError::Layout(input.to_string());
        let mut word = 0u64;
        if input.contains(' ') {
            let tokens: Vec<&str> = input.split_whitespace().collect();
            if tokens.len() != CELLS {
                return Err(layout_error());
            }
            for token in tokens {
                let tile = token
                    .parse::<u8>()
                    .ok()
                    .filter(|&t| (t as usize) < CELLS)
                    .ok_or_else(|| BoardError::Tile(token.to_string()))?;
                word = (word << 4) | tile as u64;
            }
        } else {
            let groups: Vec<&str> = input.split('_').collect();
            if groups.len() != SIZE || groups.iter().any(|g| g.len() != SIZE) {
                return Err(layout_error());
            }
            for c in groups.concat().chars() {
                let digit = c.to_digit(16).ok_or_else(layout_error)?;
                word = (word << 4) | digit as u64;
            }
        }
        Self::try_from(word)
    }
}

impl PartialEq for FifteenBoard {
    fn eq(&self, other: &Self) -> bool {
        // The other word is the dual and can be ignored.
        self.slot_to_tile == other.slot_to_tile
    }
}

impl Eq for FifteenBoard {}

impl Hash for FifteenBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot_to_tile.hash(state);
    }
}

impl Board for FifteenBoard {
    fn distance_to(&self, other: &Self) -> u32 {
        // Every pair of bits in x and y is one coordinate. The empty tile
        // doesn't count and gets masked out via & !15. For all others we sum
        // the absolute differences of the coordinates.
        let x = self.tile_to_slot & !15;
        let y = other.tile_to_slot & !15;
        let xor = x ^ y;
        // High bit per pair: the pair differs by xor 3, low bit is garbage.
        let is3 = xor & (xor << 1);
        // High bit per pair: the pair is non-zero.
        let x2 = x | (x << 1);
        let y2 = y | (y << 1);
        // High bit per pair: both are non-zero, so xor 3 means 1 and 2.
        let is_both = is3 & x2 & y2 & HIGH;
        let val = xor ^ is_both;
        // High bits weigh two, low bits one.
        val.count_ones() + (val & HIGH).count_ones()
    }

    fn children(&self) -> Vec<Self> {
        Move::ALL.into_iter().filter_map(|m| self.apply(m)).collect()
    }

    fn alternative(&self) -> Self {
        // Swap the first two non-empty slots.
        let slot1 = if self.tile_at(0) == 0 { 2 } else { 0 };
        let slot2 = if self.tile_at(1) == 0 { 2 } else { 1 };
        self.swap(slot1, slot2)
    }
}

impl fmt::Display for FifteenBoard {
    /// Four groups of four hex digits, one group per row, slot 15 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.slot_to_tile;
        write!(
            f,
            "{:04X}_{:04X}_{:04X}_{:04X}",
            (w >> 48) & 0xFFFF,
            (w >> 32) & 0xFFFF,
            (w >> 16) & 0xFFFF,
            w & 0xFFFF
        )
    }
}

impl fmt::Debug for FifteenBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FifteenBoard({})", self)
    }
}
