use game_dice::{Dice, DynamicProbabilityTable, StaticProbabilityTable, roll, triangle_array, triangle_distribution};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 2d6-ish bell: eleven outcomes (2..=12) peaking at 7
    let weights = triangle_distribution(11, 5, 6);
    println!("weights: {weights:?}");
    let table = DynamicProbabilityTable::make(weights)?;
    let die = Dice::new(table.total_weight());
    println!("drive it with a d{}", die.sides());

    let mut rng = rand::rng();
    let mut hist = [0u32; 11];
    for _ in 0..100_000 {
        hist[table.at(roll(&die, &mut rng))] += 1;
    }
    for (i, count) in hist.iter().enumerate() {
        let bar = "#".repeat((*count / 500) as usize);
        println!("{:>3} {count: >6} {bar}", i + 2);
    }

    // same shape, no allocation, fixed at compile time
    const SHAPE: [i32; 11] = triangle_array::<11>(5, 6);
    let fixed = StaticProbabilityTable::make(SHAPE)?;
    let d = Dice::new(fixed.total_weight());
    let pick = fixed.at(roll(&d, &mut rng));
    println!("one more throw: {}", pick + 2);

    Ok(())
}
