use game_dice::{OutcomeTable, WeightedEnum};
use std::collections::HashMap;

#[derive(Copy, Eq, PartialEq, Clone, Debug, Hash, WeightedEnum)]
enum Rarity {
    #[weight(1)]
    Mythic,
    #[weight(10)]
    Legendary,
    #[weight(200)]
    Uncommon,
    #[weight(789)]
    Common,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Built at compile time, straight from the enum:
    const TABLE: Result<
        game_dice::StaticOutcomeTable<game_dice::StaticProbabilityTable<4>, Rarity>,
        game_dice::TableError,
    > = Rarity::fixed_table();
    let table = TABLE?;
    let mut hist: HashMap<Rarity, u64> = HashMap::default();

    // Or, if you want to mix arbitrary items with weights:
    let _custom: OutcomeTable<&'static str> =
        OutcomeTable::from_pairs([("sword", 1), ("shield", 3)])?;

    // A table that cannot exist is an error, not a panic (RUST_LOG=debug shows why):
    if let Err(err) = OutcomeTable::from_pairs([("dust", 0), ("ash", -1)]) {
        println!("rejected: {err}");
    }

    let mut rng = rand::rng();
    for _ in 0..2_000_000 {
        *hist.entry(table.sample_owned(&mut rng)).or_default() += 1;
    }

    let mut values: Vec<(Rarity, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    for (rarity, count) in values {
        println!("{count: >7} {rarity:?}");
    }

    let heap = <Rarity as WeightedEnum>::outcome_table()?;
    println!("total weight: {} over {} outcomes", heap.total_weight(), heap.len());

    Ok(())
}
