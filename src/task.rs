use std::fmt;

use crate::liquid::{DrinkTemperature, DrinkType};

/// Pedido de una cantidad de bebidas de un tipo y temperatura.
/// Solo avanza `completed`, nunca retrocede ni supera `required`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    drink: DrinkType,
    temperature: DrinkTemperature,
    required: u32,
    completed: u32,
}

impl Task {
    pub fn new(drink: DrinkType, temperature: DrinkTemperature, required: u32) -> Task {
        Task {
            drink,
            temperature,
            required: required.max(1),
            completed: 0,
        }
    }

    pub fn drink(&self) -> DrinkType {
        self.drink
    }

    pub fn temperature(&self) -> DrinkTemperature {
        self.temperature
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.required
    }

    pub fn matches(&self, drink: DrinkType, temperature: DrinkTemperature) -> bool {
        !self.is_complete() && self.drink == drink && self.temperature.accepts(temperature)
    }

    pub(crate) fn advance(&mut self, units: u32) {
        self.completed = self.required.min(self.completed.saturating_add(units));
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} x {} ({})",
            self.completed, self.required, self.drink, self.temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_a_pending_task() {
        let task = Task::new(DrinkType::Coffee, DrinkTemperature::Hot, 2);
        assert_eq!(false, task.is_complete());
        assert_eq!(0, task.completed());
        assert_eq!("0/2 x Coffee (Hot)", task.to_string());
    }

    #[test]
    fn should_cap_progress_at_the_required_units() {
        let mut task = Task::new(DrinkType::Tea, DrinkTemperature::Any, 2);
        task.advance(5);
        assert_eq!(2, task.completed());
        assert_eq!(true, task.is_complete());
    }

    #[test]
    fn should_not_match_once_complete() {
        let mut task = Task::new(DrinkType::Milk, DrinkTemperature::Cold, 1);
        assert_eq!(true, task.matches(DrinkType::Milk, DrinkTemperature::Cold));
        task.advance(1);
        assert_eq!(false, task.matches(DrinkType::Milk, DrinkTemperature::Cold));
    }

    #[test]
    fn should_not_match_another_temperature() {
        let task = Task::new(DrinkType::MilkTea, DrinkTemperature::Hot, 1);
        assert_eq!(false, task.matches(DrinkType::MilkTea, DrinkTemperature::Cold));
        assert_eq!(false, task.matches(DrinkType::Tea, DrinkTemperature::Hot));
    }
}
