use core_sim::{RandomSource, Side};

/// Coin flip between the two sides. History plays no part in the choice.
pub fn pick_side<S: Side>(source: &mut dyn RandomSource) -> S {
    if source.next_unit() < 0.5 {
        S::BOTH[0]
    } else {
        S::BOTH[1]
    }
}

#[cfg(test)]
mod tests {
    use core_sim::{MarketSide, SeededSource};

    use super::pick_side;

    #[test]
    fn seeded_picks_cover_both_sides() {
        let mut source = SeededSource::new(5);

        let ups = (0..1_000)
            .filter(|_| pick_side::<MarketSide>(&mut source) == MarketSide::Up)
            .count();

        assert!((400..600).contains(&ups), "ups = {ups}");
    }
}
