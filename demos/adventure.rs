//! Walk-through of the starting adventure.
//!
//! Run with `RUST_LOG=debug` to see construction events.

use hyrule_world::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let game = Game::global().lock();
    println!("=== HYRULE LEGEND ===\n");
    println!("Welcome, {}!\n", game.player.name);
    println!("{}", game.start()?);

    // Tiered loot
    println!("--- Factory loot ---");
    for rarity in [ItemRarity::Common, ItemRarity::Rare, ItemRarity::Legendary] {
        let mut weapon = factory_for(rarity).create_weapon();
        println!("{:<28} {}", weapon.to_string(), weapon.use_item());
    }

    // Built weapons
    println!("\n--- Forged weapons ---");
    let mut builder = WeaponBuilder::new();
    let blade = MasterBladeDirector::construct(&mut builder)?;
    let bow = AncientBowDirector::construct(&mut builder)?;
    let flame = builder
        .reset()
        .set_name("Flame Sword of the Hero")
        .set_damage(35)
        .set_durability(60)
        .set_rarity(ItemRarity::Rare)
        .add_enchantment(EnchantmentType::Fire, 20)
        .add_gem(Gem::new("Topaz", 8, 5))
        .set_special_ability("Burns enemies on hit")
        .build_sword()?;
    for weapon in [&blade, &bow, &flame] {
        println!("{}\n", weapon.full_description());
    }

    // Cloned potion
    let original = Potion::healing_prototype();
    let mut copy = original.clone();
    copy.name = "Player's Healing Potion".to_string();
    println!("{}\n{}\n", original.full_description(), copy.full_description());

    // Monsters
    println!("--- Monsters ---");
    let mut pack = MonsterGroup::new();
    pack.add(Monster::bokoblin(Arc::new(RedVariant)))
        .add(Monster::moblin(Arc::new(BlueVariant)))
        .add(Monster::hinox(Arc::new(WhiteVariant)));
    for line in pack.attack() {
        println!("{}", line);
    }

    // Routes
    let graph = WorldGraph::from_world(&game.world);
    let castle = game.world.find(world::HYRULE_CASTLE);
    if let (Some(from), Some(to)) = (game.world.entry(), castle) {
        if let Some(route) = graph.route(from, to) {
            println!("\nWay to the castle: {}", route.join(" -> "));
        }
    }

    Ok(())
}
