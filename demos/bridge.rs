//! Bridge
//!
//! Characters and abilities vary independently: any character can carry
//! any ability and swap it mid-run.
//!
//! Run with: cargo run --example bridge

use colored::Colorize;
use patternbook::patterns::bridge::{
    AxeAttack, Character, FireballSpell, Mage, MagicSpell, SwordAttack, Warrior,
};

fn perform(character: &dyn Character) {
    let (stance, action) = character.perform_ability();
    println!("{}", stance.blue());
    println!("  {}\n", action.red());
}

fn main() {
    println!("=== Bridge ===\n");

    let mut warrior = Warrior::new(Box::new(SwordAttack));
    perform(&warrior);

    warrior.set_ability(Box::new(AxeAttack));
    perform(&warrior);

    let mut mage = Mage::new(Box::new(MagicSpell));
    perform(&mage);

    mage.set_ability(Box::new(FireballSpell));
    perform(&mage);

    println!("=== Demo Complete ===");
}
