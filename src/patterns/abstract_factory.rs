//! Abstract factory: families of related products built together.
//!
//! A `MealFactory` produces a burger and a drink that belong together;
//! callers order a meal without naming either concrete product.

use super::factory::{BeefBurger, Burger, ChickenBurger};

/// A product poured rather than prepared.
pub trait Drink {
    fn pour(&self) -> String;
}

pub struct Water;

impl Drink for Water {
    fn pour(&self) -> String {
        "Pouring water".into()
    }
}

pub struct Coke;

impl Drink for Coke {
    fn pour(&self) -> String {
        "Pouring coke".into()
    }
}

/// Produces a matched burger-and-drink family.
pub trait MealFactory {
    fn create_burger(&self) -> Box<dyn Burger>;
    fn create_drink(&self) -> Box<dyn Drink>;
}

/// Beef and coke.
pub struct FastFoodFactory;

impl MealFactory for FastFoodFactory {
    fn create_burger(&self) -> Box<dyn Burger> {
        Box::new(BeefBurger)
    }

    fn create_drink(&self) -> Box<dyn Drink> {
        Box::new(Coke)
    }
}

/// Chicken and water.
pub struct HealthyFoodFactory;

impl MealFactory for HealthyFoodFactory {
    fn create_burger(&self) -> Box<dyn Burger> {
        Box::new(ChickenBurger)
    }

    fn create_drink(&self) -> Box<dyn Drink> {
        Box::new(Water)
    }
}

/// Order a full meal from whichever factory the caller hands over.
pub fn order_meal(factory: &dyn MealFactory) -> (String, String) {
    let burger = factory.create_burger();
    let drink = factory.create_drink();
    (burger.prepare(), drink.pour())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_food_family_matches() {
        let (burger, drink) = order_meal(&FastFoodFactory);
        assert_eq!(burger, "Preparing beef burger");
        assert_eq!(drink, "Pouring coke");
    }

    #[test]
    fn healthy_family_matches() {
        let (burger, drink) = order_meal(&HealthyFoodFactory);
        assert_eq!(burger, "Preparing chicken burger");
        assert_eq!(drink, "Pouring water");
    }

    #[test]
    fn factories_are_interchangeable_behind_the_trait() {
        let factories: Vec<Box<dyn MealFactory>> =
            vec![Box::new(FastFoodFactory), Box::new(HealthyFoodFactory)];

        for factory in &factories {
            let (burger, drink) = order_meal(factory.as_ref());
            assert!(burger.starts_with("Preparing"));
            assert!(drink.starts_with("Pouring"));
        }
    }
}
