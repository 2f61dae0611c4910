//! Dense per-hex payload storage: [`BoardStorage`].
//!
//! One slot per on-board hex, laid out row-major. Reads off the board are
//! defined behaviour: [`get`](BoardStorage::get) returns `None` and
//! [`at`](BoardStorage::at) returns `T::default()`.

use rayon::prelude::*;

use crate::geom::{HexCoords, HexSize, Hexside};

/// Payloads that hold resources needing explicit release.
///
/// Plain Rust payloads are released by `Drop`; implement this only when a
/// payload owns something that must be handed back deliberately, then call
/// [`BoardStorage::dispose`].
pub trait Disposable {
    fn dispose(&mut self);
}

/// A fixed-size board of `T` payloads indexed by [`HexCoords`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardStorage<T> {
    size: HexSize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for BoardStorage<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            size: HexSize,
            cells: Vec<T>,
        }
        let raw = Raw::<T>::deserialize(deserializer)?;
        if raw.cells.len() != raw.size.len() {
            return Err(serde::de::Error::invalid_length(
                raw.cells.len(),
                &format!("{} cells for a {} board", raw.size.len(), raw.size).as_str(),
            ));
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl<T: Default + Clone> BoardStorage<T> {
    /// Create a board of the given extent filled with `T::default()`.
    pub fn new(size: HexSize) -> Self {
        Self {
            size,
            cells: vec![T::default(); size.len()],
        }
    }

    /// Payload at `c`, or `T::default()` off-board.
    #[inline]
    pub fn at(&self, c: HexCoords) -> T {
        self.get(c).cloned().unwrap_or_default()
    }
}

impl<T> BoardStorage<T> {
    /// Create a board, initialising every hex in row-major order.
    pub fn from_fn(size: HexSize, f: impl FnMut(HexCoords) -> T) -> Self {
        Self {
            size,
            cells: size.iter().map(f).collect(),
        }
    }

    /// Board extent.
    #[inline]
    pub fn size(&self) -> HexSize {
        self.size
    }

    /// Number of hexes.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is on this board.
    #[inline]
    pub fn contains(&self, c: HexCoords) -> bool {
        self.size.is_on_board(c)
    }

    /// Payload at `c`, or `None` off-board.
    #[inline]
    pub fn get(&self, c: HexCoords) -> Option<&T> {
        self.size.index_of(c).map(|i| &self.cells[i])
    }

    /// Mutable payload at `c`, or `None` off-board.
    #[inline]
    pub fn get_mut(&mut self, c: HexCoords) -> Option<&mut T> {
        self.size.index_of(c).map(|i| &mut self.cells[i])
    }

    /// Store `value` at `c`. Returns `false` (and drops `value`) off-board.
    ///
    /// Meant for construction and loading; a board being searched is only
    /// ever borrowed immutably.
    pub fn set(&mut self, c: HexCoords, value: T) -> bool {
        match self.get_mut(c) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Payload of the hex across `side` from `c`.
    #[inline]
    pub fn neighbour(&self, c: HexCoords, side: Hexside) -> Option<&T> {
        self.get(c.checked_neighbour(side)?)
    }

    /// Call `f` with every hexside of `c` and the payload across it.
    pub fn for_all_neighbours(&self, c: HexCoords, mut f: impl FnMut(Hexside, Option<&T>)) {
        for side in Hexside::ALL {
            f(side, self.neighbour(c, side));
        }
    }

    /// Visit every hex in parallel. No ordering is guaranteed.
    pub fn for_each<F>(&self, f: F)
    where
        T: Sync,
        F: Fn(HexCoords, &T) + Sync + Send,
    {
        let size = self.size;
        self.cells
            .par_iter()
            .enumerate()
            .for_each(|(i, t)| f(size.coords_of(i), t));
    }

    /// Mutate every hex in parallel. No ordering is guaranteed.
    pub fn for_each_mut<F>(&mut self, f: F)
    where
        T: Send,
        F: Fn(HexCoords, &mut T) + Sync + Send,
    {
        let size = self.size;
        self.cells
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, t)| f(size.coords_of(i), t));
    }

    /// Visit every hex serially in row-major order.
    pub fn for_each_serial(&self, mut f: impl FnMut(HexCoords, &T)) {
        for (c, t) in self.iter() {
            f(c, t);
        }
    }

    /// Row-major iterator over `(coords, payload)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (HexCoords, &T)> + '_ {
        self.size.iter().zip(self.cells.iter())
    }

    /// Map every payload into a new board of the same extent.
    pub fn map<U>(&self, mut f: impl FnMut(HexCoords, &T) -> U) -> BoardStorage<U> {
        BoardStorage {
            size: self.size,
            cells: self.iter().map(|(c, t)| f(c, t)).collect(),
        }
    }
}

impl<T: Disposable + Send> BoardStorage<T> {
    /// Dispose every payload, then drop the board.
    pub fn dispose(mut self) {
        self.cells.par_iter_mut().for_each(Disposable::dispose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn set_then_get() {
        let mut b: BoardStorage<i32> = BoardStorage::new(HexSize::new(4, 3));
        let c = HexCoords::new(2, 1);
        assert!(b.set(c, 42));
        assert_eq!(b.get(c), Some(&42));
        assert_eq!(b.at(c), 42);
        assert_eq!(b.at(HexCoords::new(0, 0)), 0);
    }

    #[test]
    fn set_get_law_holds_everywhere() {
        let size = HexSize::new(5, 4);
        let mut b: BoardStorage<i32> = BoardStorage::new(size);
        for c in size {
            assert!(b.set(c, c.x * 100 + c.y));
        }
        for c in size {
            assert_eq!(b.at(c), c.x * 100 + c.y);
        }
    }

    #[test]
    fn off_board_returns_sentinel() {
        let mut b = BoardStorage::from_fn(HexSize::new(3, 3), |_| 7);
        for c in [
            HexCoords::new(-1, 0),
            HexCoords::new(0, -1),
            HexCoords::new(3, 0),
            HexCoords::new(0, 3),
            HexCoords::new(i32::MIN, i32::MAX),
            HexCoords::new(i32::MAX, i32::MIN),
        ] {
            assert_eq!(b.get(c), None);
            assert_eq!(b.at(c), 0);
            assert!(!b.set(c, 9));
            for side in Hexside::ALL {
                assert_eq!(b.neighbour(c, side), None);
            }
            b.for_all_neighbours(c, |_, t| assert!(t.is_none()));
        }
    }

    #[test]
    fn neighbour_lookup() {
        let b = BoardStorage::from_fn(HexSize::new(3, 3), |c| c.x + 10 * c.y);
        let c = HexCoords::new(1, 1);
        assert_eq!(b.neighbour(c, Hexside::SouthEast), Some(&22));
        assert_eq!(b.neighbour(c, Hexside::North), Some(&1));
        assert_eq!(b.neighbour(HexCoords::ZERO, Hexside::NorthWest), None);

        let mut seen = 0;
        b.for_all_neighbours(HexCoords::ZERO, |_, t| {
            if t.is_some() {
                seen += 1;
            }
        });
        // (0,0) has NE, SE and S on board.
        assert_eq!(seen, 3);
    }

    #[test]
    fn serial_traversal_is_row_major() {
        let b = BoardStorage::from_fn(HexSize::new(3, 2), |c| c);
        let mut order = Vec::new();
        b.for_each_serial(|c, &t| {
            assert_eq!(c, t);
            order.push(c);
        });
        let expected: Vec<_> = HexSize::new(3, 2).iter().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn parallel_traversal_visits_every_hex_once() {
        let size = HexSize::new(17, 13);
        let b = BoardStorage::from_fn(size, |c| c);
        let count = AtomicUsize::new(0);
        let seen = Mutex::new(Vec::new());
        b.for_each(|c, &t| {
            assert_eq!(c, t);
            count.fetch_add(1, Ordering::Relaxed);
            seen.lock().unwrap().push(c);
        });
        assert_eq!(count.load(Ordering::Relaxed), size.len());
        let mut seen = seen.into_inner().unwrap();
        seen.sort();
        assert_eq!(seen, size.iter().collect::<Vec<_>>());
    }

    #[test]
    fn parallel_mutation() {
        let mut b: BoardStorage<i32> = BoardStorage::new(HexSize::new(8, 8));
        b.for_each_mut(|c, t| *t = c.x + c.y);
        assert_eq!(b.at(HexCoords::new(7, 7)), 14);
        assert_eq!(b.at(HexCoords::new(3, 1)), 4);
    }

    struct Handle {
        released: Arc<AtomicUsize>,
    }

    impl Disposable for Handle {
        fn dispose(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn dispose_releases_every_payload() {
        let released = Arc::new(AtomicUsize::new(0));
        let b = BoardStorage::from_fn(HexSize::new(4, 5), |_| Handle {
            released: Arc::clone(&released),
        });
        b.dispose();
        assert_eq!(released.load(Ordering::SeqCst), 20);
    }

    #[test]
    fn map_preserves_layout() {
        let b = BoardStorage::from_fn(HexSize::new(2, 2), |c| c.x);
        let m = b.map(|c, &x| x + c.y);
        assert_eq!(m.size(), b.size());
        assert_eq!(m.at(HexCoords::new(1, 1)), 2);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_round_trip() {
        let b = BoardStorage::from_fn(HexSize::new(3, 2), |c| c.x - c.y);
        let json = serde_json::to_string(&b).unwrap();
        let back: BoardStorage<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn cell_count_must_match_size() {
        let short = r#"{"size":{"width":3,"height":3},"cells":[1,2]}"#;
        assert!(serde_json::from_str::<BoardStorage<i32>>(short).is_err());
        let long = r#"{"size":{"width":1,"height":1},"cells":[1,2]}"#;
        assert!(serde_json::from_str::<BoardStorage<i32>>(long).is_err());
        let clamped = r#"{"size":{"width":-2,"height":3},"cells":[]}"#;
        let b: BoardStorage<i32> = serde_json::from_str(clamped).unwrap();
        assert!(b.is_empty());
        assert_eq!(b.get(HexCoords::ZERO), None);
    }
}
