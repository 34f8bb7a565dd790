//! Factory method: restaurants that defer burger creation to subtypes.
//!
//! The `Restaurant` trait owns the ordering flow; which burger gets made
//! is decided by the implementor. The interactive demo parses a burger
//! kind from a typed choice, the catalogue's single failure point.

use std::str::FromStr;
use thiserror::Error;

/// The one error in the whole catalogue: an unrecognized menu choice.
///
/// There is no recovery; the demo that hits this aborts its run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("unknown burger choice {0:?} (expected chicken, beef or bean)")]
    UnknownChoice(String),
}

/// A product that knows how to get itself ready.
pub trait Burger {
    fn prepare(&self) -> String;
}

pub struct ChickenBurger;

impl Burger for ChickenBurger {
    fn prepare(&self) -> String {
        "Preparing chicken burger".into()
    }
}

pub struct BeefBurger;

impl Burger for BeefBurger {
    fn prepare(&self) -> String {
        "Preparing beef burger".into()
    }
}

pub struct BeanBurger;

impl Burger for BeanBurger {
    fn prepare(&self) -> String {
        "Preparing bean burger".into()
    }
}

/// A restaurant runs the same ordering flow regardless of which burger
/// its kitchen produces; `create_burger` is the factory method.
pub trait Restaurant {
    fn create_burger(&self) -> Box<dyn Burger>;

    fn order_burger(&self) -> String {
        self.create_burger().prepare()
    }
}

pub struct ChickenRestaurant;

impl Restaurant for ChickenRestaurant {
    fn create_burger(&self) -> Box<dyn Burger> {
        Box::new(ChickenBurger)
    }
}

pub struct BeefRestaurant;

impl Restaurant for BeefRestaurant {
    fn create_burger(&self) -> Box<dyn Burger> {
        Box::new(BeefBurger)
    }
}

pub struct BeanRestaurant;

impl Restaurant for BeanRestaurant {
    fn create_burger(&self) -> Box<dyn Burger> {
        Box::new(BeanBurger)
    }
}

/// The closed set of burger choices the menu recognizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BurgerKind {
    Chicken,
    Beef,
    Bean,
}

impl BurgerKind {
    /// The restaurant that serves this kind of burger.
    pub fn restaurant(self) -> Box<dyn Restaurant> {
        match self {
            Self::Chicken => Box::new(ChickenRestaurant),
            Self::Beef => Box::new(BeefRestaurant),
            Self::Bean => Box::new(BeanRestaurant),
        }
    }
}

impl FromStr for BurgerKind {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicken" => Ok(Self::Chicken),
            "beef" => Ok(Self::Beef),
            "bean" => Ok(Self::Bean),
            other => Err(MenuError::UnknownChoice(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_restaurant_serves_its_own_burger() {
        assert_eq!(ChickenRestaurant.order_burger(), "Preparing chicken burger");
        assert_eq!(BeefRestaurant.order_burger(), "Preparing beef burger");
        assert_eq!(BeanRestaurant.order_burger(), "Preparing bean burger");
    }

    #[test]
    fn burger_kind_parses_known_choices() {
        assert_eq!("chicken".parse(), Ok(BurgerKind::Chicken));
        assert_eq!("beef".parse(), Ok(BurgerKind::Beef));
        assert_eq!("bean".parse(), Ok(BurgerKind::Bean));
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" Beef\n".parse(), Ok(BurgerKind::Beef));
        assert_eq!("CHICKEN".parse(), Ok(BurgerKind::Chicken));
    }

    #[test]
    fn unknown_choice_is_an_error() {
        let err = "fish".parse::<BurgerKind>().unwrap_err();
        assert_eq!(err, MenuError::UnknownChoice("fish".into()));
        assert!(err.to_string().contains("fish"));
    }

    #[test]
    fn kind_dispatches_to_the_matching_restaurant() {
        let order = BurgerKind::Bean.restaurant().order_burger();
        assert_eq!(order, "Preparing bean burger");
    }
}
