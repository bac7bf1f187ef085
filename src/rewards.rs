//! Puntos que otorga cada bebida servida segun su temperatura
use std::collections::HashMap;

use serde::Deserialize;

use crate::liquid::{DrinkTemperature, DrinkType};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RewardRule {
    pub drink: DrinkType,
    pub hot_points: u32,
    pub cold_points: u32,
    /// Si es `false` la bebida paga `hot_points` sin importar la temperatura
    #[serde(default = "default_temperature_variant")]
    pub temperature_variant: bool,
}

fn default_temperature_variant() -> bool {
    true
}

impl RewardRule {
    pub fn new(drink: DrinkType, hot_points: u32, cold_points: u32) -> RewardRule {
        RewardRule {
            drink,
            hot_points,
            cold_points,
            temperature_variant: true,
        }
    }
}

/// Tabla de recompensas por bebida. Una bebida sin regla no se puede servir.
#[derive(Debug, Clone)]
pub struct RewardTable {
    rules: HashMap<DrinkType, RewardRule>,
}

impl RewardTable {
    pub fn empty() -> RewardTable {
        RewardTable { rules: HashMap::new() }
    }

    pub fn insert(&mut self, rule: RewardRule) {
        self.rules.insert(rule.drink, rule);
    }

    pub fn points(&self, drink: DrinkType, temperature: DrinkTemperature) -> Option<u32> {
        let rule = self.rules.get(&drink)?;
        match temperature {
            DrinkTemperature::Cold if rule.temperature_variant => Some(rule.cold_points),
            _ => Some(rule.hot_points),
        }
    }

    pub fn is_servable(&self, drink: DrinkType) -> bool {
        self.rules.contains_key(&drink)
    }
}

impl Default for RewardTable {
    fn default() -> RewardTable {
        let mut table = RewardTable::empty();
        table.insert(RewardRule::new(DrinkType::Milk, 5, 10));
        table.insert(RewardRule::new(DrinkType::Tea, 5, 10));
        table.insert(RewardRule::new(DrinkType::MilkTea, 10, 15));
        table.insert(RewardRule::new(DrinkType::Coffee, 20, 15));
        table.insert(RewardRule::new(DrinkType::CafeLatte, 20, 15));
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pay_more_for_cold_tea_based_drinks() {
        let table = RewardTable::default();
        assert_eq!(Some(5), table.points(DrinkType::Tea, DrinkTemperature::Hot));
        assert_eq!(Some(10), table.points(DrinkType::Tea, DrinkTemperature::Cold));
        assert_eq!(Some(15), table.points(DrinkType::MilkTea, DrinkTemperature::Cold));
    }

    #[test]
    fn should_pay_more_for_hot_coffee_based_drinks() {
        let table = RewardTable::default();
        assert_eq!(Some(20), table.points(DrinkType::Coffee, DrinkTemperature::Hot));
        assert_eq!(Some(15), table.points(DrinkType::CafeLatte, DrinkTemperature::Cold));
    }

    #[test]
    fn should_not_serve_drinks_without_a_rule() {
        let table = RewardTable::default();
        assert_eq!(None, table.points(DrinkType::None, DrinkTemperature::Hot));
        assert_eq!(false, table.is_servable(DrinkType::None));
    }

    #[test]
    fn should_ignore_temperature_without_variant() {
        let mut table = RewardTable::empty();
        table.insert(RewardRule {
            drink: DrinkType::Milk,
            hot_points: 3,
            cold_points: 30,
            temperature_variant: false,
        });
        assert_eq!(Some(3), table.points(DrinkType::Milk, DrinkTemperature::Cold));
    }
}
