//! Seats at the table and per-seat storage.
//!
//! ## PlayerId
//!
//! A 0-based seat index. Seats are fixed once a table is dealt, so turn
//! order is modular arithmetic over them (see [`PlayerId::next`]).
//!
//! ## PlayerMap
//!
//! One entry per seat, indexed by `PlayerId`. `GameState` keeps hands in
//! one and `PublicView` reports hand sizes with another.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat at a Lama table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Seat index into per-seat storage.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert a raw seat index, or `None` if it is not a seat at a table
    /// of `player_count` players.
    #[must_use]
    pub fn checked(index: usize, player_count: usize) -> Option<Self> {
        if index < player_count && index <= u8::MAX as usize {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The seat that moves after this one.
    ///
    /// Every transition rotates the turn through here and nowhere else.
    ///
    /// ```
    /// use lama::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        debug_assert!(player_count > 0, "next() on an empty table");
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Every seat at a `player_count` table, in turn order.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat values, entry `i` belonging to `PlayerId(i)`.
///
/// The number of seats is fixed at construction.
///
/// ```
/// use lama::core::{PlayerId, PlayerMap};
///
/// let hands = PlayerMap::from_vec(vec![vec![1, 2, 3], vec![3]]);
/// let sizes = hands.map(Vec::len);
///
/// assert_eq!(sizes[PlayerId::new(0)], 3);
/// assert_eq!(sizes.get(PlayerId::new(2)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Wrap a per-seat vector.
    ///
    /// Panics on an empty vector or more than 256 seats; table setup
    /// validates the player count before getting here.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a table needs at least one seat");
        assert!(seats.len() <= u8::MAX as usize + 1, "at most 256 seats");
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// The seat's entry, or `None` for a seat that does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.seats.get(player.index())
    }

    /// A new map with `f` applied to every seat.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> PlayerMap<U> {
        PlayerMap {
            seats: self.seats.iter().map(f).collect(),
        }
    }

    /// (seat, entry) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Entries in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId::new(1).index(), 1);
        assert_eq!(PlayerId::new(0).to_string(), "Player 0");
    }

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
        assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
        assert_eq!(PlayerId::new(7).next(8), PlayerId::new(0));
    }

    #[test]
    fn test_checked() {
        assert_eq!(PlayerId::checked(2, 3), Some(PlayerId::new(2)));
        assert_eq!(PlayerId::checked(3, 3), None);
        assert_eq!(PlayerId::checked(usize::MAX, 3), None);
    }

    #[test]
    fn test_all_seats_in_turn_order() {
        let seats: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_map_and_index() {
        let mut hands = PlayerMap::from_vec(vec![vec![1, 2], vec![3]]);
        hands[PlayerId::new(1)].push(1);

        let sizes = hands.map(Vec::len);
        assert_eq!(sizes.player_count(), 2);
        assert_eq!(sizes[PlayerId::new(0)], 2);
        assert_eq!(sizes[PlayerId::new(1)], 2);
        assert_eq!(hands.get(PlayerId::new(2)), None);
    }

    #[test]
    fn test_iter_pairs_seats_with_entries() {
        let map = PlayerMap::from_vec(vec!['a', 'b', 'c']);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &'a'));
        assert_eq!(pairs[2], (PlayerId::new(2), &'c'));
        assert_eq!(map.values().count(), 3);
    }

    #[test]
    fn test_serializes_as_seat_list() {
        let map = PlayerMap::from_vec(vec![3usize, 1]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "[3,1]");

        let back: PlayerMap<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }

    #[test]
    #[should_panic(expected = "a table needs at least one seat")]
    fn test_empty_table_panics() {
        let _: PlayerMap<u8> = PlayerMap::from_vec(vec![]);
    }
}
