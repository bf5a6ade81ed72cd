use crate::{Board, Config, Mark};

impl quickcheck::Arbitrary for Mark {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Mark::One, Mark::Two]).unwrap()
    }
}

/// Generates gravity-packed boards of the default 6x7 shape: each column
/// gets a random fill height and random marks from the bottom up.
impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let config = Config::default();
        let mut board = Board::new(&config);
        for col in 0..config.columns {
            let height = usize::arbitrary(g) % (config.rows + 1);
            for _ in 0..height {
                board = board
                    .drop_piece(col, Mark::arbitrary(g))
                    .expect("height never exceeds the column");
            }
        }
        board
    }
}
