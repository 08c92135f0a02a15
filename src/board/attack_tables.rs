use once_cell::sync::Lazy;

use super::Square;

/// Rook rays: up, left, down, right.
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Bishop rays.
pub(crate) const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal rays first, then diagonal ones. The ray caster relies on this order.
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn targets_for(offsets: &[(isize, isize)]) -> Vec<Vec<Square>> {
    (0..64)
        .map(|idx| {
            let from = Square::from_index(idx);
            offsets
                .iter()
                .filter_map(|&(dr, dc)| from.offset(dr, dc))
                .collect()
        })
        .collect()
}

/// On-board knight destinations per square index, in offset order.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| targets_for(&KNIGHT_OFFSETS));

/// On-board king destinations per square index, in offset order.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| targets_for(&KING_OFFSETS));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_knight_has_two_targets() {
        let targets = &KNIGHT_TARGETS[Square(0, 0).as_index()];
        assert_eq!(targets, &vec![Square(1, 2), Square(2, 1)]);
    }

    #[test]
    fn centre_king_has_eight_targets() {
        assert_eq!(KING_TARGETS[Square(4, 4).as_index()].len(), 8);
        assert_eq!(KING_TARGETS[Square(7, 7).as_index()].len(), 3);
    }
}
