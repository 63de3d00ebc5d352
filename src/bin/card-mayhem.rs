//! Demo: register the six fighters and run an automated battle.
//!
//! ```text
//! card-mayhem [FIGHTER_ONE] [FIGHTER_TWO] [SEED]
//! ```
//!
//! Set `RUST_LOG=card_mayhem=debug` to see engine tracing on stderr.

use card_mayhem::{Arena, BattleConfig, Character, Side};

fn main() -> card_mayhem::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let first = args.next().unwrap_or_else(|| "Thorin".to_string());
    let second = args.next().unwrap_or_else(|| "Gandalf".to_string());
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut arena = Arena::new(BattleConfig::default().with_seed(seed));
    arena.register_fighter(Character::warrior("Thorin"));
    arena.register_fighter(Character::mage("Gandalf"));
    arena.register_fighter(Character::archer("Legolas"));
    arena.register_fighter(Character::paladin("Arthas"));
    arena.register_fighter(Character::necromancer("Kel'Thuzad"));
    arena.register_fighter(Character::sorcerer("Medivh"));

    println!("Registered fighters:");
    for fighter in arena.roster() {
        let profile = fighter.class().profile();
        println!(
            "  {:<12} {:<12} HP {:>3}  Mana {:>3}  ATK {:>2}  DEF {:>2}  [{} / {}]",
            fighter.name(),
            fighter.class(),
            fighter.max_health(),
            fighter.max_mana(),
            fighter.attack(),
            fighter.defense(),
            profile.primary_name,
            profile.secondary_name,
        );
    }
    println!();

    match arena.run_auto_battle(&first, &second) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            return Err(err);
        }
    }

    println!();
    println!("Battle log ({} entries):", arena.log().len());
    for entry in arena.log() {
        println!(
            "  {entry}  (HP {}/{}, mana {}/{})",
            entry.health[Side::One],
            entry.health[Side::Two],
            entry.mana[Side::One],
            entry.mana[Side::Two],
        );
    }

    Ok(())
}
