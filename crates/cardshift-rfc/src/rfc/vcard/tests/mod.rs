//! vCard parse/serialize tests over real-world 2.1, 3.0 and 4.0 cards.

mod fixtures;
