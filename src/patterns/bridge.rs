//! Bridge: characters and abilities varying independently.
//!
//! `Character` is the abstraction, `Ability` the implementation side.
//! Any character can carry any ability and swap it at runtime; adding a
//! new ability touches neither character.

/// The implementation side of the bridge.
pub trait Ability {
    fn use_ability(&self) -> String;
}

pub struct SwordAttack;

impl Ability for SwordAttack {
    fn use_ability(&self) -> String {
        "Attacks with a sword".into()
    }
}

pub struct AxeAttack;

impl Ability for AxeAttack {
    fn use_ability(&self) -> String {
        "Attacks with an axe".into()
    }
}

pub struct MagicSpell;

impl Ability for MagicSpell {
    fn use_ability(&self) -> String {
        "Casts a magic spell".into()
    }
}

pub struct FireballSpell;

impl Ability for FireballSpell {
    fn use_ability(&self) -> String {
        "Hurls a fireball".into()
    }
}

/// The abstraction side: a character holds its current ability behind
/// the trait and performs it with its own flourish.
pub trait Character {
    fn ready(&self) -> String;
    fn ability(&self) -> &dyn Ability;
    fn set_ability(&mut self, ability: Box<dyn Ability>);

    fn perform_ability(&self) -> (String, String) {
        (self.ready(), self.ability().use_ability())
    }
}

pub struct Warrior {
    ability: Box<dyn Ability>,
}

impl Warrior {
    pub fn new(ability: Box<dyn Ability>) -> Self {
        Self { ability }
    }
}

impl Character for Warrior {
    fn ready(&self) -> String {
        "The warrior is ready to attack".into()
    }

    fn ability(&self) -> &dyn Ability {
        self.ability.as_ref()
    }

    fn set_ability(&mut self, ability: Box<dyn Ability>) {
        self.ability = ability;
    }
}

pub struct Mage {
    ability: Box<dyn Ability>,
}

impl Mage {
    pub fn new(ability: Box<dyn Ability>) -> Self {
        Self { ability }
    }
}

impl Character for Mage {
    fn ready(&self) -> String {
        "The mage prepares a spell".into()
    }

    fn ability(&self) -> &dyn Ability {
        self.ability.as_ref()
    }

    fn set_ability(&mut self, ability: Box<dyn Ability>) {
        self.ability = ability;
    }
}
